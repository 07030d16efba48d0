use regex::{Regex, RegexBuilder};

use crate::interpreter::value::core::Value;

/// Translates an Arden glob pattern into an anchored regular expression.
///
/// - `_` matches exactly one character,
/// - `%` matches any run of characters,
/// - `\` makes the following character literal (a trailing `\` is dropped),
/// - everything else matches itself.
///
/// Literal runs are escaped as a whole, so no character of the pattern can
/// act as a regex metacharacter.
///
/// # Example
/// ```
/// use arden_ops::interpreter::operator::pattern::glob_to_regex;
///
/// assert_eq!(glob_to_regex("a_b%"), "^a.b.*$");
/// assert_eq!(glob_to_regex(r"50\%"), r"^50%$");
/// assert_eq!(glob_to_regex("1+1"), r"^1\+1$");
/// ```
#[must_use]
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 2);
    let mut literal = String::new();
    let mut chars = pattern.chars();

    regex.push('^');
    while let Some(c) = chars.next() {
        match c {
            '_' | '%' => {
                flush_literal(&mut regex, &mut literal);
                regex.push_str(if c == '_' { "." } else { ".*" });
            },
            '\\' => {
                flush_literal(&mut regex, &mut literal);
                if let Some(escaped) = chars.next() {
                    literal.push(escaped);
                }
            },
            other => literal.push(other),
        }
    }
    flush_literal(&mut regex, &mut literal);
    regex.push('$');

    regex
}

fn flush_literal(regex: &mut String, literal: &mut String) {
    if !literal.is_empty() {
        regex.push_str(&regex::escape(literal));
        literal.clear();
    }
}

/// Compiles an Arden glob pattern into a case-insensitive regex in which `.`
/// also matches line terminators.
///
/// # Errors
/// Fails only if the translated expression exceeds the regex size limits.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&glob_to_regex(pattern)).case_insensitive(true)
                                              .dot_matches_new_line(true)
                                              .build()
}

/// Implements the MATCHES PATTERN operator.
///
/// The pattern must be a string, otherwise the result is null. A string on
/// the left yields a boolean; a list is matched element by element with null
/// for every non-string element. Anything else yields null.
///
/// # Example
/// ```
/// use arden_ops::interpreter::{operator::pattern::matches_pattern, value::core::Value};
///
/// let hit = matches_pattern(&Value::string("a_b%"), &Value::string("A_B%"));
/// assert!(hit.is_true());
///
/// let miss = matches_pattern(&Value::string("abc"), &Value::string(r"a\%c"));
/// assert!(miss.is_false());
/// ```
#[must_use]
pub fn matches_pattern(input: &Value, pattern: &Value) -> Value {
    let Some(source) = pattern.as_str() else {
        return Value::NULL;
    };
    let regex = match compile_pattern(source) {
        Ok(regex) => regex,
        Err(error) => {
            tracing::warn!(%error, "pattern could not be compiled");
            return Value::NULL;
        },
    };

    let test = |value: &Value| {
        value.as_str()
             .map_or(Value::NULL, |text| Value::from(regex.is_match(text)))
    };

    match input {
        Value::String { .. } => test(input),
        Value::List(items) => items.iter().map(test).collect::<Vec<_>>().into(),
        _ => Value::NULL,
    }
}
