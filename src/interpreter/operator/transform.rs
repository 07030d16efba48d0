use crate::{
    interpreter::{
        operator::{
            element::{ArithmeticOperator, run_element},
            list::common_time,
        },
        value::core::Value,
    },
    util::num::{f64_to_i32_exact, i64_to_usize_clamped},
};

/// Implements the WHERE operator.
///
/// With a list condition, a list sequence keeps the elements whose condition
/// is explicitly true; both lists must have the same length, otherwise the
/// result is null. A single value is repeated once per true condition.
///
/// With a single condition, the sequence is returned unchanged if the
/// condition is true and an empty list otherwise.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::where_filter, value::core::Value};
///
/// let values = Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// let mask = Value::list(vec![Value::TRUE, Value::FALSE, Value::TRUE]);
/// assert_eq!(where_filter(&values, &mask), Value::list(vec![1.0.into(), 3.0.into()]));
///
/// let repeated = where_filter(&Value::number(1.0), &mask);
/// assert_eq!(repeated, Value::list(vec![1.0.into(), 1.0.into()]));
/// ```
#[must_use]
pub fn where_filter(sequence: &Value, condition: &Value) -> Value {
    let Value::List(conditions) = condition else {
        return if condition.is_true() {
            sequence.clone()
        } else {
            Value::empty_list()
        };
    };

    match sequence {
        Value::List(values) => {
            if values.len() != conditions.len() {
                tracing::debug!(values = values.len(),
                                conditions = conditions.len(),
                                "where got lists of different length");
                return Value::NULL;
            }
            values.iter()
                  .zip(conditions.iter())
                  .filter(|(_, keep)| keep.is_true())
                  .map(|(value, _)| value.clone())
                  .collect::<Vec<_>>()
                  .into()
        },
        single => {
            let hits = conditions.iter().filter(|keep| keep.is_true()).count();
            Value::list(vec![single.clone(); hits])
        },
    }
}

/// Implements the IS IN operator.
///
/// A list on the left is checked element by element. For a single value the
/// promoted right side is scanned for the first structurally equal element.
/// A hit whose primary time equals the left value's keeps that time; any
/// other hit is a plain `true`.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::is_in, value::core::Value};
///
/// let haystack = Value::list(vec![1.0.into(), 2.0.into()]);
/// assert!(is_in(&Value::number(2.0), &haystack).is_true());
/// assert!(is_in(&Value::number(3.0), &haystack).is_false());
/// ```
#[must_use]
pub fn is_in(needle: &Value, haystack: &Value) -> Value {
    let candidates = haystack.to_list();

    match needle {
        Value::List(needles) => needles.iter()
                                       .map(|item| is_in_single(item, &candidates))
                                       .collect::<Vec<_>>()
                                       .into(),
        single => is_in_single(single, &candidates),
    }
}

fn is_in_single(needle: &Value, candidates: &[Value]) -> Value {
    match candidates.iter().find(|candidate| *candidate == needle) {
        Some(hit) if hit.primary_time() == needle.primary_time() => {
            Value::boolean(true, hit.primary_time())
        },
        Some(_) => Value::TRUE,
        None => Value::FALSE,
    }
}

/// Implements the SEQTO operator.
///
/// Both operands must be integral numbers that fit in 32 bits, otherwise the
/// result is null.
/// Yields the inclusive sequence from `lower` to `upper`, or an empty list
/// if `lower > upper`. Primary times are dropped.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::seqto, value::core::Value};
///
/// let seq = seqto(&Value::number(2.0), &Value::number(4.0));
/// assert_eq!(seq, Value::list(vec![2.0.into(), 3.0.into(), 4.0.into()]));
///
/// assert_eq!(seqto(&Value::number(3.0), &Value::number(1.0)), Value::empty_list());
/// assert!(seqto(&Value::number(1.5), &Value::number(4.0)).is_null());
/// ```
#[must_use]
pub fn seqto(lower: &Value, upper: &Value) -> Value {
    let (Value::Number { value: lower, .. }, Value::Number { value: upper, .. }) = (lower, upper)
    else {
        return Value::NULL;
    };
    let (Some(lower), Some(upper)) = (f64_to_i32_exact(*lower), f64_to_i32_exact(*upper)) else {
        tracing::debug!(lower, upper, "seqto needs integral bounds within 32 bits");
        return Value::NULL;
    };

    let len = usize::try_from(i64::from(upper) - i64::from(lower) + 1).unwrap_or(0);
    let mut values = Vec::<Value>::new();
    if values.try_reserve_exact(len).is_err() {
        tracing::warn!(len, "seqto could not allocate its result");
        return Value::NULL;
    }
    values.extend((lower..=upper).map(|step| Value::number(f64::from(step))));
    Value::list(values)
}

/// Implements the REVERSE operator on the promoted list.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::reverse, value::core::Value};
///
/// let list = Value::list(vec![1.0.into(), 2.0.into()]);
/// assert_eq!(reverse(&list), Value::list(vec![2.0.into(), 1.0.into()]));
/// assert_eq!(reverse(&reverse(&list)), list);
/// ```
#[must_use]
pub fn reverse(input: &Value) -> Value {
    input.to_list().iter().rev().cloned().collect::<Vec<_>>().into()
}

/// Implements the INCREASE operator.
///
/// Each output element is the difference between neighbouring input elements,
/// stamped with the later element's primary time. An empty input is null; a
/// single element yields an empty list.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::increase, value::core::Value};
///
/// let list = Value::list(vec![10.0.into(), 13.0.into(), 12.0.into()]);
/// assert_eq!(increase(&list), Value::list(vec![3.0.into(), (-1.0).into()]));
/// ```
#[must_use]
pub fn increase(input: &Value) -> Value {
    successive(input, |previous, next| {
        run_element(ArithmeticOperator::Sub, next, previous)
    })
}

/// Implements the PERCENT INCREASE operator.
///
/// Like [`increase`], but each element is the relative change
/// `(next - previous) / previous * 100`.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::percent_increase, value::core::Value};
///
/// let list = Value::list(vec![50.0.into(), 75.0.into()]);
/// assert_eq!(percent_increase(&list), Value::list(vec![50.0.into()]));
/// ```
#[must_use]
pub fn percent_increase(input: &Value) -> Value {
    successive(input, |previous, next| {
        let change = run_element(ArithmeticOperator::Sub, next, previous);
        let ratio = run_element(ArithmeticOperator::Div, &change, previous);
        run_element(ArithmeticOperator::Mul, &ratio, &Value::ONE_HUNDRED)
    })
}

/// Maps every neighbouring pair through `step`, stamping each result with the
/// later element's primary time.
fn successive(input: &Value, step: impl Fn(&Value, &Value) -> Value) -> Value {
    let items = input.to_list();
    if items.is_empty() {
        return Value::NULL;
    }

    items.windows(2)
         .map(|pair| step(&pair[0], &pair[1]).with_time(pair[1].primary_time()))
         .collect::<Vec<_>>()
         .into()
}

/// Implements the IS LIST operator.
///
/// A list yields `true` stamped with the common time of its elements; any
/// other value yields `false` stamped with its own primary time.
#[must_use]
pub fn is_list(input: &Value) -> Value {
    match input {
        Value::List(items) => Value::boolean(true, common_time(items)),
        other => Value::boolean(false, other.primary_time()),
    }
}

/// Implements the FIRST aggregation operator: the first element of the
/// promoted list, or null if it is empty.
#[must_use]
pub fn first(input: &Value) -> Value {
    input.to_list().first().cloned().unwrap_or(Value::NULL)
}

/// Implements the LAST aggregation operator: the last element of the
/// promoted list, or null if it is empty.
#[must_use]
pub fn last(input: &Value) -> Value {
    input.to_list().last().cloned().unwrap_or(Value::NULL)
}

/// Implements the FIRST transformation operator.
///
/// Returns the first `count` elements, or the whole promoted list if it is
/// not longer than `count`. A negative count is treated as zero.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::first_n, value::core::Value};
///
/// let list = Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// assert_eq!(first_n(&list, 2), Value::list(vec![1.0.into(), 2.0.into()]));
/// assert_eq!(first_n(&list, 10), list);
/// assert_eq!(first_n(&list, -1), Value::empty_list());
/// ```
#[must_use]
pub fn first_n(input: &Value, count: i64) -> Value {
    let items = input.to_list();
    let count = i64_to_usize_clamped(count);

    if count >= items.len() {
        return Value::List(items);
    }
    Value::List(items[..count].into())
}

/// Implements the LAST transformation operator.
///
/// Returns the last `count` elements, or the whole promoted list if it is
/// not longer than `count`. A negative count is treated as zero.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::transform::last_n, value::core::Value};
///
/// let list = Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()]);
/// assert_eq!(last_n(&list, 2), Value::list(vec![2.0.into(), 3.0.into()]));
/// ```
#[must_use]
pub fn last_n(input: &Value, count: i64) -> Value {
    let items = input.to_list();
    let count = i64_to_usize_clamped(count);

    if count >= items.len() {
        return Value::List(items);
    }
    Value::List(items[items.len() - count..].into())
}
