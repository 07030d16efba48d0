/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of check
/// scripts: unexpected tokens, unbalanced parentheses, malformed time stamps
/// and literals that cannot be represented.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a check script: unknown
/// operators, wrong argument counts and failed checks. Operators themselves
/// report data problems as null values, never as errors.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
