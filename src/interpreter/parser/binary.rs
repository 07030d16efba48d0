use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_timed},
    },
};

/// Parses a comma-built list.
///
/// A leading comma builds a one-element list from the following operand. A
/// comma between operands concatenates them, left-associatively, so
/// `1, 2, 3` is `(1, 2), 3`.
///
/// Grammar: `comma_list := "," concat | concat ("," concat)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::UnaryComma`, a tree of `Expr::BinaryComma` nodes, or the single
/// operand if no comma follows it.
pub fn parse_comma_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Comma, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_concat(tokens)?;
        return Ok(Expr::UnaryComma { expr: Box::new(expr),
                                     line: *line, });
    }

    let mut left = parse_concat(tokens)?;
    while let Some((Token::Comma, line)) = tokens.peek() {
        tokens.next();
        let right = parse_concat(tokens)?;
        left = Expr::BinaryComma { left:  Box::new(left),
                                   right: Box::new(right),
                                   line:  *line, };
    }
    Ok(left)
}

/// Parses string concatenation.
///
/// Handles the left-associative `||` operator.
///
/// Grammar: `concat := timed ("||" timed)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Concat` tree, or the single operand.
pub fn parse_concat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_timed(tokens)?;
    while let Some((Token::DoublePipe, line)) = tokens.peek() {
        tokens.next();
        let right = parse_timed(tokens)?;
        left = Expr::Concat { left:  Box::new(left),
                              right: Box::new(right),
                              line:  *line, };
    }
    Ok(left)
}
