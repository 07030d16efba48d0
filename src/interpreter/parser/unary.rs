use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_separated, peek_line},
        },
    },
    util::num::f64_to_i64_exact,
};

/// Duration units: name, factor, and whether the factor counts months.
const DURATION_UNITS: &[(&str, f64, bool)] = &[("second", 1.0, false),
                                               ("minute", 60.0, false),
                                               ("hour", 3_600.0, false),
                                               ("day", 86_400.0, false),
                                               ("week", 604_800.0, false),
                                               ("month", 1.0, true),
                                               ("year", 12.0, true)];

/// Parses an expression with an optional primary-time stamp.
///
/// The stamp is either a time literal or an integral number of seconds since
/// the epoch.
///
/// Grammar:
/// ```text
///     timed := primary ("@" (TIME | NUMBER))?
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Timed`] or the bare primary expression.
///
/// # Errors
/// Returns `ExpectedTimeStamp` if `@` is followed by anything but a time
/// literal or an integral number.
pub(crate) fn parse_timed<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let primary = parse_primary(tokens)?;

    let Some((Token::At, line)) = tokens.peek() else {
        return Ok(primary);
    };
    tokens.next();

    let time = match tokens.next() {
        Some((Token::Time(t), _)) => *t,
        Some((Token::Number(n), _)) => {
            f64_to_i64_exact(*n).ok_or(ParseError::ExpectedTimeStamp { line: *line })?
        },
        _ => return Err(ParseError::ExpectedTimeStamp { line: *line }),
    };

    Ok(Expr::Timed { expr: Box::new(primary),
                     time,
                     line: *line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, duration, string, time, boolean and null literals
/// - operator calls
/// - the empty list `()`
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | IDENT "(" (expression (";" expression)*)? ")"
///              | "(" ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(..) | Token::Time(..) | Token::Str(..) | Token::Bool(..) | Token::Null, _) => {
            parse_literal(tokens)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_operator_call(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a literal. A number directly followed by a unit name becomes a
/// duration.
///
/// Grammar:
/// ```text
///     literal := NUMBER UNIT? | TIME | STRING | "true" | "false" | "null"
///     UNIT    := ("second" | "minute" | "hour" | "day" | "week" | "month"
///                | "year") "s"?
/// ```
///
/// # Errors
/// Returns `LiteralTooLarge` if a number or duration does not fit a finite
/// double.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((token, line)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    let value = match token {
        Token::Number(n) => {
            let unit = match tokens.peek() {
                Some((Token::Identifier(name), _)) => duration_unit(name),
                _ => None,
            };
            let value = if let Some((factor, months)) = unit {
                tokens.next();
                LiteralValue::Duration { value: n * factor,
                                         months }
            } else {
                LiteralValue::Number(*n)
            };
            if let LiteralValue::Number(v) | LiteralValue::Duration { value: v, .. } = value
               && !v.is_finite()
            {
                return Err(ParseError::LiteralTooLarge { line });
            }
            value
        },
        Token::Time(t) => LiteralValue::Time(*t),
        Token::Str(s) => LiteralValue::String(s.clone()),
        Token::Bool(b) => LiteralValue::Bool(*b),
        Token::Null => LiteralValue::Null,
        tok => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line });
        },
    };

    Ok(Expr::Literal { value, line })
}

/// Looks up a duration unit, accepting singular and plural spellings.
fn duration_unit(name: &str) -> Option<(f64, bool)> {
    let singular = name.strip_suffix('s').unwrap_or(name);
    DURATION_UNITS.iter()
                  .find(|(unit, ..)| *unit == singular)
                  .map(|&(_, factor, months)| (factor, months))
}

/// Parses an operator call such as `sort_data(3, 1, 2)` or
/// `where(1, 2; true, false)`.
///
/// Arguments are separated by `;` so that each argument may itself be a
/// comma-built list.
///
/// # Errors
/// Returns a `ParseError` if the name is not followed by `(` or the argument
/// list is malformed.
fn parse_operator_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected operator name, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '(' after '{name}', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let arguments = parse_separated(tokens, parse_expression, &Token::Semicolon, &Token::RParen)?;

    Ok(Expr::OperatorCall { name: name.to_lowercase(),
                            arguments,
                            line })
}

/// Parses `()` as the empty list and `( expression )` as a grouping.
///
/// # Errors
/// Returns `ExpectedClosingParen` if the closing `)` is missing.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = peek_line(tokens);
    tokens.next();

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::EmptyList { line });
    }

    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
