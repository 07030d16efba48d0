//! # arden-ops
//!
//! arden-ops is the list and operator evaluation core of an Arden Syntax
//! runtime, written in Rust. It implements the aggregation, sorting,
//! selection, string and pattern operators over time-stamped values, and
//! ships a small check-script language for exercising them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::statement::parse_statement,
        value::core::Value,
    },
};

/// Defines the structure of parsed check scripts.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a script as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all script constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a script. Operators themselves never fail; errors only arise
/// from malformed scripts, unknown operators, wrong argument counts and
/// failed checks.
///
/// # Responsibilities
/// - Defines error enums for the parser and the evaluator.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, evaluation, the value model and
/// the operator core.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, operators and
///   value types.
/// - Provides entry points for calling operators directly from Rust.
pub mod interpreter;
/// General utilities for safe numeric conversion and calendar arithmetic.
///
/// This module provides reusable helpers used throughout the operators,
/// parser and evaluator.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize` and `f64` without silent data loss.
/// - Parse, print and shift time stamps.
pub mod util;

/// Runs a check script and returns the value of its last statement.
///
/// Blank lines and comments are skipped. Each statement is evaluated in
/// order; the first parse error, runtime error or failed check stops the run.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails, or if a `=>` check
/// does not hold.
///
/// # Examples
/// ```
/// use arden_ops::{interpreter::{evaluator::core::Context, value::core::Value}, run_script};
///
/// let source = "count(1, 2, null)\nsort_data(3, 1, 2) => (1, 2, 3)";
/// let result = run_script(source, &Context::new()).unwrap();
/// assert_eq!(result, Some(Value::list(vec![1.0.into(), 2.0.into(), 3.0.into()])));
///
/// assert!(run_script("count(1, 2) => 3", &Context::new()).is_err());
/// ```
pub fn run_script(source: &str,
                  context: &Context)
                  -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();

    let mut result = None;

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        let statement = parse_statement(&mut iter)?;
        if let Some(value) = context.eval_statement(&statement)? {
            result = Some(value);
        }
    }

    Ok(result)
}

/// Runs a check script with default settings.
///
/// If `auto_print` is set, the value of the last statement is printed to
/// standard output, including its primary times.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if any check does not
/// hold.
///
/// # Examples
/// ```
/// use arden_ops::get_result;
///
/// // The check holds, so no error should occur.
/// let source = "average(1, 2, 3) => 2";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown operator).
/// let source = "frobnicate(1)";
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_script(source, &Context::new())?;

    if auto_print && let Some(v) = result {
        println!("{}", v.with_times());
    }

    Ok(())
}
