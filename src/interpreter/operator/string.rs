use std::sync::OnceLock;

use icu_casemap::{CaseMapper, CaseMapperBorrowed};

use crate::{
    interpreter::value::core::{NO_PRIMARY_TIME, Value},
    util::num::usize_to_f64,
};

/// Converts a single value to text.
///
/// Strings yield their payload; everything else is printed in its canonical
/// form.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String { value, .. } => value.clone(),
        other => other.to_string(),
    }
}

/// Implements the string concatenation operator `||`.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::concat, value::core::Value};
///
/// let joined = concat(&Value::string("dose: "), &Value::number(5.0));
/// assert_eq!(joined, Value::string("dose: 5"));
/// ```
#[must_use]
pub fn concat(left: &Value, right: &Value) -> Value {
    let mut text = stringify(left);
    text.push_str(&stringify(right));
    Value::string(text)
}

/// Implements the STRING operator: joins the text of every element of the
/// promoted list.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::join_string, value::core::Value};
///
/// let list = Value::list(vec!["ab".into(), 3.0.into(), Value::TRUE]);
/// assert_eq!(join_string(&list), Value::string("ab3true"));
/// ```
#[must_use]
pub fn join_string(input: &Value) -> Value {
    let text = input.to_list().iter().map(stringify).collect::<String>();
    Value::string(text)
}

/// Implements the EXTRACT CHARACTERS operator.
///
/// Splits the text of every element of the promoted list into one-character
/// strings and returns them as a single flat list.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::extract_characters, value::core::Value};
///
/// let chars = extract_characters(&Value::string("añb"));
/// assert_eq!(chars, Value::list(vec!["a".into(), "ñ".into(), "b".into()]));
/// ```
#[must_use]
pub fn extract_characters(input: &Value) -> Value {
    input.to_list()
         .iter()
         .flat_map(|item| {
             stringify(item).chars()
                            .map(|c| Value::string(c.to_string()))
                            .collect::<Vec<_>>()
         })
         .collect::<Vec<_>>()
         .into()
}

/// Applies `f` to a string, or to every element of a list.
///
/// Non-string values become null. A string keeps its primary time when
/// `keep_time` is set. An empty list yields the unstamped null rather than an
/// empty list.
fn map_strings(input: &Value, keep_time: bool, f: &impl Fn(&str) -> Value) -> Value {
    match input {
        Value::List(items) if items.is_empty() => Value::NULL,
        Value::List(items) => items.iter()
                                   .map(|item| map_strings(item, keep_time, f))
                                   .collect::<Vec<_>>()
                                   .into(),
        Value::String { value, time } => {
            let result = f(value);
            if keep_time { result.with_time(*time) } else { result }
        },
        other if keep_time => Value::null(other.primary_time()),
        _ => Value::NULL,
    }
}

/// Implements the TRIM operator: strips leading and trailing whitespace.
///
/// Lists are trimmed element-wise; non-strings become null with their
/// primary time kept.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::trim, value::core::Value};
///
/// assert_eq!(trim(&Value::string("\t x y \n")), Value::string("x y"));
/// assert!(trim(&Value::number(1.0)).is_null());
/// ```
#[must_use]
pub fn trim(input: &Value) -> Value {
    map_strings(input, true, &|text| Value::string(text.trim()))
}

/// Implements the TRIM LEFT operator: strips leading whitespace.
#[must_use]
pub fn trim_left(input: &Value) -> Value {
    map_strings(input, true, &|text| Value::string(text.trim_start()))
}

/// Implements the TRIM RIGHT operator: strips trailing whitespace.
#[must_use]
pub fn trim_right(input: &Value) -> Value {
    map_strings(input, true, &|text| Value::string(text.trim_end()))
}

/// Implements the LENGTH operator: the number of characters of a string.
///
/// The result never carries a primary time, and neither does the null
/// produced for non-string input.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::length, value::core::Value};
///
/// assert_eq!(length(&Value::string("añb")), Value::number(3.0));
///
/// let list = Value::list(vec!["ab".into(), 4.0.into()]);
/// assert_eq!(length(&list), Value::list(vec![2.0.into(), Value::NULL]));
/// ```
#[must_use]
pub fn length(input: &Value) -> Value {
    map_strings(input, false, &|text| {
        Value::number(usize_to_f64(text.chars().count())).with_time(NO_PRIMARY_TIME)
    })
}

/// Implements the UPPERCASE operator using Unicode simple (one-to-one) case
/// mapping.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::uppercase, value::core::Value};
///
/// assert_eq!(uppercase(&Value::string("Straße")), Value::string("STRAßE"));
/// assert_eq!(uppercase(&Value::string("\u{1FB3}")), Value::string("\u{1FBC}"));
/// ```
#[must_use]
pub fn uppercase(input: &Value) -> Value {
    map_strings(input, true, &|text| {
        Value::string(text.chars()
                          .map(|c| case_mapper().simple_uppercase(c))
                          .collect::<String>())
    })
}

/// Implements the LOWERCASE operator using Unicode simple (one-to-one) case
/// mapping.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::string::lowercase, value::core::Value};
///
/// assert_eq!(lowercase(&Value::string("\u{130}X")), Value::string("ix"));
/// ```
#[must_use]
pub fn lowercase(input: &Value) -> Value {
    map_strings(input, true, &|text| {
        Value::string(text.chars()
                          .map(|c| case_mapper().simple_lowercase(c))
                          .collect::<String>())
    })
}

/// Shared case mapper backed by the compiled Unicode data.
fn case_mapper() -> &'static CaseMapperBorrowed<'static> {
    static MAPPER: OnceLock<CaseMapperBorrowed<'static>> = OnceLock::new();
    MAPPER.get_or_init(CaseMapper::new)
}
