use std::cmp::Ordering;

use crate::{
    interpreter::{
        operator::{
            element::{ArithmeticOperator, run_element},
            list::{binary_comma, common_time},
            sort::sort_by_data,
        },
        value::core::{SECONDS_PER_MONTH, Value},
    },
    util::num::usize_to_f64,
};

/// Implements the COUNT operator: the length of the promoted list.
///
/// The result never carries a primary time.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::aggregate::count, value::core::Value};
///
/// assert_eq!(count(&Value::list(vec![Value::NULL, Value::TRUE])), Value::number(2.0));
/// assert_eq!(count(&Value::number(7.0)), Value::number(1.0));
/// ```
#[must_use]
pub fn count(input: &Value) -> Value {
    Value::number(usize_to_f64(input.to_list().len()))
}

/// Implements the SUM operator.
///
/// An empty list sums to `0`. Otherwise the elements are folded from the left
/// with scalar addition, so time stamps and nulls propagate the way addition
/// propagates them.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::aggregate::sum, value::core::Value};
///
/// let total = sum(&Value::list(vec![1.0.into(), 2.0.into(), 4.5.into()]));
/// assert_eq!(total, Value::number(7.5));
/// assert_eq!(sum(&Value::empty_list()), Value::ZERO);
/// ```
#[must_use]
pub fn sum(input: &Value) -> Value {
    let items = input.to_list();
    let Some((first, rest)) = items.split_first() else {
        return Value::ZERO;
    };

    rest.iter().fold(first.clone(), |total, item| {
                   run_element(ArithmeticOperator::Add, &total, item)
               })
}

/// Implements the AVERAGE operator.
///
/// The variant of the first element decides how the elements are averaged;
/// any element of a different variant makes the result null, as does an
/// empty list.
///
/// - Numbers: arithmetic mean, stamped with the common time.
/// - Times: integer mean of the stamps, computed without overflow and
///   truncated towards zero.
/// - Durations: summed in months while every element counts months. The first
///   duration counted in seconds converts the running sum to seconds, and the
///   result keeps the unit the sum ended in.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::aggregate::average, value::core::Value};
///
/// let mean = average(&Value::list(vec![1.0.into(), 2.0.into(), 6.0.into()]));
/// assert_eq!(mean, Value::number(3.0));
///
/// let mixed = average(&Value::list(vec![1.0.into(), "x".into()]));
/// assert!(mixed.is_null());
/// ```
#[must_use]
pub fn average(input: &Value) -> Value {
    let items = input.to_list();
    let time = common_time(&items);

    let result = match items.first() {
        Some(Value::Number { .. }) => average_numbers(&items).map(Value::number),
        Some(Value::Time { .. }) => average_times(&items).map(Value::time),
        Some(Value::Duration { .. }) => {
            average_durations(&items).map(|(value, months)| Value::duration(value, months))
        },
        _ => None,
    };

    result.map_or_else(|| {
                           tracing::debug!(len = items.len(), "average is undefined, yielding null");
                           Value::NULL
                       },
                       |value| value.with_time(time))
}

fn average_numbers(items: &[Value]) -> Option<f64> {
    let mut total = 0.0;
    for item in items {
        let Value::Number { value, .. } = item else {
            return None;
        };
        total += value;
    }
    Some(total / usize_to_f64(items.len()))
}

fn average_times(items: &[Value]) -> Option<i64> {
    let mut total: i128 = 0;
    for item in items {
        let Value::Time { value, .. } = item else {
            return None;
        };
        total += i128::from(*value);
    }
    let len = i128::try_from(items.len()).ok()?;
    // The mean of i64 values always fits back into an i64.
    i64::try_from(total / len).ok()
}

fn average_durations(items: &[Value]) -> Option<(f64, bool)> {
    let (first, rest) = items.split_first()?;
    let Value::Duration { value, months, .. } = first else {
        return None;
    };
    let mut total = *value;
    let mut in_months = *months;

    for item in rest {
        let Value::Duration { value, months, .. } = item else {
            return None;
        };
        if in_months && !months {
            in_months = false;
            total *= SECONDS_PER_MONTH;
        }
        total += if in_months { *value } else { item.to_seconds()? };
    }

    Some((total / usize_to_f64(items.len()), in_months))
}

/// Implements the MEDIAN operator.
///
/// The promoted list is sorted by data. An odd number of elements yields the
/// middle element as is (including its primary time). An even number yields
/// the average of the two central elements. Empty or unsortable input yields
/// null.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::aggregate::median, value::core::Value};
///
/// let even = Value::list(vec![4.0.into(), 1.0.into(), 3.0.into(), 2.0.into()]);
/// assert_eq!(median(&even), Value::number(2.5));
/// ```
#[must_use]
pub fn median(input: &Value) -> Value {
    let Value::List(sorted) = sort_by_data(input) else {
        return Value::NULL;
    };

    let len = sorted.len();
    if len == 0 {
        return Value::NULL;
    }
    if len % 2 == 1 {
        sorted[len / 2].clone()
    } else {
        average(&binary_comma(&sorted[len / 2 - 1], &sorted[len / 2]))
    }
}

/// Implements the VARIANCE operator (population variance).
///
/// Unlike the other aggregates VARIANCE does not promote a single value to a
/// list: a non-list input is null. An empty list or any non-number element
/// is null as well.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::aggregate::variance, value::core::Value};
///
/// let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let list = Value::list(values.iter().map(|v| Value::number(*v)).collect());
/// assert_eq!(variance(&list), Value::number(4.0));
/// assert!(variance(&Value::number(3.0)).is_null());
/// ```
#[must_use]
pub fn variance(input: &Value) -> Value {
    let Value::List(items) = input else {
        return Value::NULL;
    };

    let mut numbers = Vec::with_capacity(items.len());
    for item in items.iter() {
        let Value::Number { value, .. } = item else {
            return Value::NULL;
        };
        numbers.push(*value);
    }
    if numbers.is_empty() {
        return Value::NULL;
    }

    let len = usize_to_f64(numbers.len());
    let mean = numbers.iter().sum::<f64>() / len;
    let squares = numbers.iter()
                         .map(|value| {
                             let diff = mean - value;
                             diff * diff
                         })
                         .sum::<f64>();

    Value::number(squares / len).with_time(common_time(items))
}

/// Implements the MINIMUM operator.
///
/// Returns the smallest element of the promoted list. Among equal elements
/// the one with the latest primary time wins. Incomparable elements or an
/// empty list yield null.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::aggregate::minimum, value::core::Value};
///
/// let early = Value::number(1.0).with_time(Some(10));
/// let late = Value::number(1.0).with_time(Some(20));
/// let list = Value::list(vec![early, Value::number(5.0), late]);
/// assert_eq!(minimum(&list).primary_time(), Some(20));
/// ```
#[must_use]
pub fn minimum(input: &Value) -> Value {
    extreme(input, Ordering::Greater)
}

/// Implements the MAXIMUM operator.
///
/// Returns the largest element of the promoted list, with the same tie-break
/// and null rules as [`minimum`].
#[must_use]
pub fn maximum(input: &Value) -> Value {
    extreme(input, Ordering::Less)
}

/// Folds the list, replacing the current pick whenever it compares as
/// `replace_when` against the next element, or compares equal while the next
/// element is later.
fn extreme(input: &Value, replace_when: Ordering) -> Value {
    let items = input.to_list();
    let Some((first, rest)) = items.split_first() else {
        return Value::NULL;
    };

    let mut pick = first;
    for item in rest {
        match pick.compare(item) {
            None => {
                tracing::debug!(left = pick.type_name(),
                                right = item.type_name(),
                                "minimum/maximum met incomparable elements");
                return Value::NULL;
            },
            Some(order) if order == replace_when => pick = item,
            Some(Ordering::Equal) if item.primary_time() > pick.primary_time() => pick = item,
            Some(_) => {},
        }
    }
    pick.clone()
}
