/// Promotion utilities.
///
/// The unary and binary comma operators that turn arbitrary values into
/// lists, and the common-time rule for deriving the time of a list.
pub mod list;
/// Scalar arithmetic.
///
/// Addition, subtraction, multiplication and division of numbers, times and
/// durations. Every list operator that does arithmetic goes through here.
pub mod element;
/// SORT DATA and SORT TIME.
pub mod sort;
/// Numeric aggregators: COUNT, SUM, AVERAGE, MEDIAN, VARIANCE, MINIMUM and
/// MAXIMUM.
pub mod aggregate;
/// Boolean aggregators with three-valued logic: EXIST, ANY and ALL.
pub mod logic;
/// List transforms.
///
/// WHERE, IS IN, SEQTO, REVERSE, INCREASE, PERCENT INCREASE, IS LIST and the
/// FIRST/LAST selectors.
pub mod transform;
/// String operators.
///
/// Concatenation, STRING, EXTRACT CHARACTERS, the TRIM family, LENGTH,
/// UPPERCASE and LOWERCASE.
pub mod string;
/// MATCHES PATTERN and its glob-to-regex compiler.
pub mod pattern;
/// Name-based operator lookup with arity checking.
pub mod table;
