use std::cmp::Ordering;

use crate::interpreter::value::core::Value;

/// Implements the SORT DATA operator.
///
/// The input is promoted to a list and checked pair by pair. If any two
/// neighbours are incomparable the whole result is null. A list that is
/// already in non-descending order is returned as is; otherwise a stably
/// sorted copy is returned.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::sort::sort_by_data, value::core::Value};
///
/// let input = Value::list(vec![3.0.into(), 1.0.into(), 2.0.into()]);
/// let sorted = sort_by_data(&input);
/// assert_eq!(sorted, Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()]));
///
/// let mixed = Value::list(vec![3.0.into(), "three".into()]);
/// assert!(sort_by_data(&mixed).is_null());
/// ```
#[must_use]
pub fn sort_by_data(input: &Value) -> Value {
    let items = input.to_list();

    let mut already_sorted = true;
    for pair in items.windows(2) {
        match pair[0].compare(&pair[1]) {
            None => {
                tracing::debug!(left = pair[0].type_name(),
                                right = pair[1].type_name(),
                                "sort by data met incomparable elements");
                return Value::NULL;
            },
            Some(Ordering::Greater) => already_sorted = false,
            Some(_) => {},
        }
    }
    if already_sorted {
        return Value::List(items);
    }

    // Every neighbouring pair is comparable, so all elements belong to one
    // ordered family and `compare` is total over them.
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.compare(b).unwrap_or(Ordering::Equal));
    Value::list(sorted)
}

/// Implements the SORT TIME operator.
///
/// Every element must carry a primary time, otherwise the result is null.
/// Elements are stably sorted by ascending primary time.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::sort::sort_by_time, value::core::Value};
///
/// let late = Value::number(1.0).with_time(Some(20));
/// let early = Value::number(2.0).with_time(Some(10));
/// let sorted = sort_by_time(&Value::list(vec![late.clone(), early.clone()]));
/// assert_eq!(sorted, Value::list(vec![early, late]));
/// ```
#[must_use]
pub fn sort_by_time(input: &Value) -> Value {
    let items = input.to_list();

    if items.iter().any(|item| item.primary_time().is_none()) {
        tracing::debug!("sort by time met an element without primary time");
        return Value::NULL;
    }

    let mut sorted = items.to_vec();
    sorted.sort_by_key(Value::primary_time);
    Value::list(sorted)
}
