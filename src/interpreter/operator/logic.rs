use crate::interpreter::{operator::list::common_time, value::core::Value};

/// Implements the EXIST operator.
///
/// True if any element of the promoted list is not null. The result carries
/// the common time of the elements.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::logic::exist, value::core::Value};
///
/// assert!(exist(&Value::list(vec![Value::NULL, 0.0.into()])).is_true());
/// assert!(exist(&Value::list(vec![Value::NULL])).is_false());
/// assert!(exist(&Value::empty_list()).is_false());
/// ```
#[must_use]
pub fn exist(input: &Value) -> Value {
    let items = input.to_list();
    let found = items.iter().any(|item| !item.is_null());

    Value::boolean(found, common_time(&items))
}

/// Implements the ANY operator with three-valued logic.
///
/// - `true` as soon as one element is explicitly true,
/// - `false` if every element is explicitly false (or the list is empty),
/// - null otherwise.
///
/// The result carries the common time of the elements.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::logic::any, value::core::Value};
///
/// let list = Value::list(vec![Value::TRUE, Value::NULL, Value::FALSE]);
/// assert!(any(&list).is_true());
///
/// let unknown = Value::list(vec![Value::FALSE, Value::NULL]);
/// assert!(any(&unknown).is_null());
/// ```
#[must_use]
pub fn any(input: &Value) -> Value {
    let items = input.to_list();
    let time = common_time(&items);

    if items.iter().any(Value::is_true) {
        Value::boolean(true, time)
    } else if items.iter().all(Value::is_false) {
        Value::boolean(false, time)
    } else {
        Value::null(time)
    }
}

/// Implements the ALL operator with three-valued logic.
///
/// - `false` as soon as one element is explicitly false,
/// - `true` if every element is explicitly true (or the list is empty),
/// - null otherwise.
///
/// The result carries the common time of the elements.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::logic::all, value::core::Value};
///
/// let list = Value::list(vec![Value::TRUE, Value::NULL, Value::TRUE]);
/// assert!(all(&list).is_null());
///
/// let decided = Value::list(vec![Value::TRUE, Value::NULL, Value::FALSE]);
/// assert!(all(&decided).is_false());
/// ```
#[must_use]
pub fn all(input: &Value) -> Value {
    let items = input.to_list();
    let time = common_time(&items);

    if items.iter().any(Value::is_false) {
        Value::boolean(false, time)
    } else if items.iter().all(Value::is_true) {
        Value::boolean(true, time)
    } else {
        Value::null(time)
    }
}
