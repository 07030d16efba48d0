use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        operator::{
            aggregate,
            element::{ArithmeticOperator, run_element},
            logic, pattern, sort, string, transform,
        },
        value::core::Value,
    },
    util::num::f64_to_i64_exact,
};

/// Type alias for operator handlers.
///
/// An operator receives a slice of evaluated argument values whose length has
/// already been checked against its arity, and always produces a value.
type OperatorFn = fn(&[Value]) -> Value;

/// Specifies the allowed number of arguments for an operator.
///
/// - `Exact(n)` means the operator must receive exactly `n` arguments.
/// - `OneOf(slice)` means the operator accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines operators by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a lower-case name,
/// - an arity specification,
/// - a function pointer implementing the operator.
///
/// The macro produces:
/// - `OperatorDef` (internal metadata),
/// - `OPERATOR_TABLE` (static table for lookup),
/// - `OPERATORS` (public list of operator names).
macro_rules! operators {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct OperatorDef {
            name:  &'static str,
            arity: Arity,
            func:  OperatorFn,
        }
        static OPERATOR_TABLE: &[OperatorDef] = &[
            $(
                OperatorDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every operator known to [`call_operator`].
        pub const OPERATORS: &[&str] = &[
            $($name,)*
        ];
    };
}

operators! {
    "count"              => { arity: Arity::Exact(1), func: |args| aggregate::count(&args[0]) },
    "sum"                => { arity: Arity::Exact(1), func: |args| aggregate::sum(&args[0]) },
    "average"            => { arity: Arity::Exact(1), func: |args| aggregate::average(&args[0]) },
    "median"             => { arity: Arity::Exact(1), func: |args| aggregate::median(&args[0]) },
    "variance"           => { arity: Arity::Exact(1), func: |args| aggregate::variance(&args[0]) },
    "minimum"            => { arity: Arity::Exact(1), func: |args| aggregate::minimum(&args[0]) },
    "maximum"            => { arity: Arity::Exact(1), func: |args| aggregate::maximum(&args[0]) },
    "exist"              => { arity: Arity::Exact(1), func: |args| logic::exist(&args[0]) },
    "any"                => { arity: Arity::Exact(1), func: |args| logic::any(&args[0]) },
    "all"                => { arity: Arity::Exact(1), func: |args| logic::all(&args[0]) },
    "where"              => { arity: Arity::Exact(2), func: |args| transform::where_filter(&args[0], &args[1]) },
    "sort_data"          => { arity: Arity::Exact(1), func: |args| sort::sort_by_data(&args[0]) },
    "sort_time"          => { arity: Arity::Exact(1), func: |args| sort::sort_by_time(&args[0]) },
    "first"              => { arity: Arity::OneOf(&[1, 2]), func: |args| head_or_tail(args, transform::first, transform::first_n) },
    "last"               => { arity: Arity::OneOf(&[1, 2]), func: |args| head_or_tail(args, transform::last, transform::last_n) },
    "reverse"            => { arity: Arity::Exact(1), func: |args| transform::reverse(&args[0]) },
    "seqto"              => { arity: Arity::Exact(2), func: |args| transform::seqto(&args[0], &args[1]) },
    "increase"           => { arity: Arity::Exact(1), func: |args| transform::increase(&args[0]) },
    "percent_increase"   => { arity: Arity::Exact(1), func: |args| transform::percent_increase(&args[0]) },
    "is_in"              => { arity: Arity::Exact(2), func: |args| transform::is_in(&args[0], &args[1]) },
    "is_list"            => { arity: Arity::Exact(1), func: |args| transform::is_list(&args[0]) },
    "string"             => { arity: Arity::Exact(1), func: |args| string::join_string(&args[0]) },
    "extract_characters" => { arity: Arity::Exact(1), func: |args| string::extract_characters(&args[0]) },
    "trim"               => { arity: Arity::Exact(1), func: |args| string::trim(&args[0]) },
    "trim_left"          => { arity: Arity::Exact(1), func: |args| string::trim_left(&args[0]) },
    "trim_right"         => { arity: Arity::Exact(1), func: |args| string::trim_right(&args[0]) },
    "length"             => { arity: Arity::Exact(1), func: |args| string::length(&args[0]) },
    "uppercase"          => { arity: Arity::Exact(1), func: |args| string::uppercase(&args[0]) },
    "lowercase"          => { arity: Arity::Exact(1), func: |args| string::lowercase(&args[0]) },
    "matches_pattern"    => { arity: Arity::Exact(2), func: |args| pattern::matches_pattern(&args[0], &args[1]) },
    "concat"             => { arity: Arity::Exact(2), func: |args| string::concat(&args[0], &args[1]) },
    "add"                => { arity: Arity::Exact(2), func: |args| run_element(ArithmeticOperator::Add, &args[0], &args[1]) },
    "sub"                => { arity: Arity::Exact(2), func: |args| run_element(ArithmeticOperator::Sub, &args[0], &args[1]) },
    "mul"                => { arity: Arity::Exact(2), func: |args| run_element(ArithmeticOperator::Mul, &args[0], &args[1]) },
    "div"                => { arity: Arity::Exact(2), func: |args| run_element(ArithmeticOperator::Div, &args[0], &args[1]) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }
}

/// Shared body of FIRST and LAST: one argument selects a single element, two
/// arguments select a run of `n` elements. A count that is not an integral
/// number yields null.
fn head_or_tail(args: &[Value], single: fn(&Value) -> Value, run: fn(&Value, i64) -> Value) -> Value {
    match args {
        [input] => single(input),
        [input, Value::Number { value, .. }] => {
            f64_to_i64_exact(*value).map_or(Value::NULL, |count| run(input, count))
        },
        _ => Value::NULL,
    }
}

/// Calls an operator by name.
///
/// # Errors
/// - `UnknownOperator` if no operator is called `name`.
/// - `ArgumentCountMismatch` if the number of arguments does not fit the
///   operator's arity.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::table::call_operator, value::core::Value};
///
/// let list = Value::list(vec![3.0.into(), 1.0.into(), 2.0.into()]);
/// let sorted = call_operator("sort_data", &[list], 1).unwrap();
/// assert_eq!(sorted, Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()]));
///
/// assert!(call_operator("no_such_operator", &[], 1).is_err());
/// assert!(call_operator("count", &[], 1).is_err());
/// ```
pub fn call_operator(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    let Some(def) = OPERATOR_TABLE.iter().find(|def| def.name == name) else {
        return Err(RuntimeError::UnknownOperator { name: name.to_owned(),
                                                   line });
    };
    if !def.arity.check(args.len()) {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_owned(),
                                                         found: args.len(),
                                                         line });
    }

    tracing::trace!(operator = name, arguments = args.len(), "calling operator");
    Ok((def.func)(args))
}
