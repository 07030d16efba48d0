use std::fmt;

use crate::{
    interpreter::value::core::Value,
    util::{num::f64_to_i64_exact, time::format_time},
};

/// Writes a number the way Arden prints it: integral values without a
/// fractional part, everything else in shortest round-trip form.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    match f64_to_i64_exact(value) {
        Some(integer) => write!(f, "{integer}"),
        None => write!(f, "{value}"),
    }
}

/// Writes a string literal in list position, doubling embedded quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "\"{}\"", text.replace('"', "\"\""))
}

impl fmt::Display for Value {
    /// Canonical textual form of a value.
    ///
    /// Strings print verbatim at the top level and quoted inside lists, so a
    /// printed list reads back as the same list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write_number(f, *value),
            Self::Time { value, .. } => write!(f, "{}", format_time(*value)),
            Self::Duration { value, months, .. } => {
                write_number(f, *value)?;
                let unit = if *months { "month" } else { "second" };
                let plural = if (*value - 1.0).abs() < f64::EPSILON { "" } else { "s" };
                write!(f, " {unit}{plural}")
            },
            Self::String { value, .. } => write!(f, "{value}"),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Null { .. } => write!(f, "null"),
            Self::List(items) => {
                write!(f, "(")?;

                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    match item {
                        Self::String { value, .. } => write_quoted(f, value)?,
                        other => write!(f, "{other}")?,
                    }
                }

                write!(f, ")")
            },
        }
    }
}

/// Display adapter that also prints primary times, as in `3 @ 2024-01-31T00:00:00`.
///
/// Returned by [`Value::with_times`].
pub struct WithTimes<'a>(&'a Value);

impl Value {
    /// Returns a displayable form of the value that shows every primary time.
    ///
    /// # Example
    /// ```
    /// use arden_ops::interpreter::value::core::Value;
    ///
    /// let list = Value::list(vec![Value::number(3.0).with_time(Some(0)), Value::string("a")]);
    /// assert_eq!(list.with_times().to_string(), "(3 @ 1970-01-01T00:00:00, \"a\")");
    /// ```
    #[must_use]
    pub const fn with_times(&self) -> WithTimes<'_> {
        WithTimes(self)
    }
}

impl fmt::Display for WithTimes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::List(items) => {
                write!(f, "(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Value::String { value, .. } => write_quoted(f, value)?,
                        other => write!(f, "{other}")?,
                    }
                    write_time(f, item)?;
                }
                write!(f, ")")
            },
            other => {
                write!(f, "{other}")?;
                write_time(f, other)
            },
        }
    }
}

fn write_time(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value.primary_time() {
        Some(time) => write!(f, " @ {}", format_time(time)),
        None => Ok(()),
    }
}
