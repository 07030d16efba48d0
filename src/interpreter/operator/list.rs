use crate::interpreter::value::core::{NO_PRIMARY_TIME, PrimaryTime, Value};

/// Implements the unary comma operator `,x`.
///
/// Returns the value itself if it is a list, otherwise a one-element list
/// wrapping it. Applying it twice is the same as applying it once.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::list::unary_comma, value::core::Value};
///
/// let list = unary_comma(&Value::number(3.0));
/// assert_eq!(list, Value::list(vec![Value::number(3.0)]));
/// assert_eq!(unary_comma(&list), list);
/// ```
#[must_use]
pub fn unary_comma(value: &Value) -> Value {
    Value::List(value.to_list())
}

/// Implements the binary comma operator `x, y`.
///
/// Both operands are promoted to lists and concatenated.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::list::binary_comma, value::core::Value};
///
/// let left = Value::list(vec![1.0.into(), 2.0.into()]);
/// let joined = binary_comma(&left, &Value::number(3.0));
/// assert_eq!(joined, Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()]));
/// ```
#[must_use]
pub fn binary_comma(left: &Value, right: &Value) -> Value {
    let left = left.to_list();
    let right = right.to_list();

    Value::List(left.iter().chain(right.iter()).cloned().collect())
}

/// Returns the primary time shared by every element.
///
/// Yields [`NO_PRIMARY_TIME`] for an empty slice or as soon as two elements
/// disagree.
#[must_use]
pub fn common_time(items: &[Value]) -> PrimaryTime {
    let Some((first, rest)) = items.split_first() else {
        return NO_PRIMARY_TIME;
    };
    let time = first.primary_time();

    if rest.iter().all(|item| item.primary_time() == time) {
        time
    } else {
        NO_PRIMARY_TIME
    }
}
