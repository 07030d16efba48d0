use std::fmt;

use crate::{
    interpreter::value::core::{NO_PRIMARY_TIME, PrimaryTime, Value},
    util::{
        num::{f64_to_i64_exact, f64_to_i64_rounded, i64_to_f64_checked},
        time::add_months,
    },
};

/// The scalar arithmetic operators the list operators are built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// Primary time of a binary result: kept only when both operands agree.
const fn shared_time(left: PrimaryTime, right: PrimaryTime) -> PrimaryTime {
    match (left, right) {
        (Some(a), Some(b)) if a == b => Some(a),
        _ => NO_PRIMARY_TIME,
    }
}

/// Applies a scalar arithmetic operator to two values.
///
/// The function is total: operand combinations without a defined result
/// (including lists, nulls, strings and division by zero) produce null.
/// Supported combinations are
/// - number with number for every operator,
/// - time plus or minus a duration, and time minus time,
/// - duration plus or minus duration (mixed units are added in seconds),
/// - duration times or divided by a number, number times duration,
/// - duration divided by duration, which yields a plain number.
///
/// The result carries the operands' primary time if both share one.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{
///     operator::element::{ArithmeticOperator, run_element},
///     value::core::Value,
/// };
///
/// let sum = run_element(ArithmeticOperator::Add, &Value::number(1.5), &Value::number(2.0));
/// assert_eq!(sum, Value::number(3.5));
///
/// let bad = run_element(ArithmeticOperator::Div, &Value::number(1.0), &Value::number(0.0));
/// assert!(bad.is_null());
/// ```
#[must_use]
pub fn run_element(op: ArithmeticOperator, left: &Value, right: &Value) -> Value {
    let time = shared_time(left.primary_time(), right.primary_time());

    match apply(op, left, right) {
        Some(value) => value.with_time(time),
        None => {
            tracing::trace!(%op,
                            left = left.type_name(),
                            right = right.type_name(),
                            "arithmetic has no result, yielding null");
            Value::null(time)
        },
    }
}

/// Computes the payload of [`run_element`], or `None` when undefined.
fn apply(op: ArithmeticOperator, left: &Value, right: &Value) -> Option<Value> {
    use ArithmeticOperator::{Add, Div, Mul, Sub};

    match (left, right) {
        (Value::Number { value: a, .. }, Value::Number { value: b, .. }) => match op {
            Add => Some(Value::number(a + b)),
            Sub => Some(Value::number(a - b)),
            Mul => Some(Value::number(a * b)),
            Div if *b == 0.0 => None,
            Div => Some(Value::number(a / b)),
        },

        (Value::Time { value: t, .. }, duration @ Value::Duration { .. }) => match op {
            Add => shift_time(*t, duration, false),
            Sub => shift_time(*t, duration, true),
            Mul | Div => None,
        },
        (duration @ Value::Duration { .. }, Value::Time { value: t, .. }) if op == Add => {
            shift_time(*t, duration, false)
        },
        (Value::Time { value: a, .. }, Value::Time { value: b, .. }) if op == Sub => {
            a.checked_sub(*b)
             .and_then(i64_to_f64_checked)
             .map(|seconds| Value::duration(seconds, false))
        },

        (Value::Duration { value: a,
                           months: ma,
                           .. },
         Value::Duration { value: b,
                           months: mb,
                           .. }) => match op {
            Add | Sub if ma == mb => {
                let value = if op == Add { a + b } else { a - b };
                Some(Value::duration(value, *ma))
            },
            Add | Sub => {
                let a = left.to_seconds()?;
                let b = right.to_seconds()?;
                let value = if op == Add { a + b } else { a - b };
                Some(Value::duration(value, false))
            },
            Div => {
                let divisor = right.to_seconds()?;
                if divisor == 0.0 {
                    None
                } else {
                    Some(Value::number(left.to_seconds()? / divisor))
                }
            },
            Mul => None,
        },
        (Value::Duration { value, months, .. }, Value::Number { value: factor, .. }) => {
            match op {
                Mul => Some(Value::duration(value * factor, *months)),
                Div if *factor == 0.0 => None,
                Div => Some(Value::duration(value / factor, *months)),
                Add | Sub => None,
            }
        },
        (Value::Number { value: factor, .. }, Value::Duration { value, months, .. }) if op == Mul => {
            Some(Value::duration(factor * value, *months))
        },

        _ => None,
    }
}

/// Moves a time stamp forward (or backward) by a duration.
///
/// Whole-month durations use calendar arithmetic; everything else is applied
/// in seconds and rounded to the nearest second.
fn shift_time(time: i64, duration: &Value, backwards: bool) -> Option<Value> {
    let Value::Duration { value, months, .. } = duration else {
        return None;
    };
    let value = if backwards { -value } else { *value };

    let shifted = if *months && let Some(whole) = f64_to_i64_exact(value) {
        add_months(time, whole)?
    } else {
        let seconds = f64_to_i64_rounded(duration.to_seconds()?)?;
        if backwards {
            time.checked_sub(seconds)?
        } else {
            time.checked_add(seconds)?
        }
    };

    Some(Value::time(shifted))
}
