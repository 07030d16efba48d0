use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::parse_expression, utils::peek_line},
    },
};

/// Parses a single statement.
///
/// A statement is an expression, optionally followed by `=>` and the
/// expression it is expected to equal:
///
/// ```text
///     statement := expression ("=>" expression)? (NEWLINE | EOF)
/// ```
///
/// The statement's source line is taken from the next available token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns `UnexpectedTrailingTokens` if anything but a line break follows
/// the statement, and propagates errors from expression parsing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> Result<Statement, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = peek_line(tokens);
    let actual = parse_expression(tokens)?;

    let statement = if let Some((Token::Arrow, _)) = tokens.peek() {
        tokens.next();
        let expected = parse_expression(tokens)?;
        Statement::Check { actual,
                           expected,
                           line }
    } else {
        Statement::Expression(actual)
    };

    match tokens.next() {
        None | Some((Token::NewLine, _)) => Ok(statement),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}
