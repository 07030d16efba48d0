/// Core parsing logic.
///
/// Holds the parse result type and the expression entry point.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles literals, duration units, time stamps (`@`), operator calls and
/// parenthesized expressions.
pub mod unary;

/// Binary expression parsing.
///
/// Implements the list-building comma and string concatenation (`||`).
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several grammar rules.
pub mod utils;

/// Statement parsing.
///
/// Parses one line of a script: an expression with an optional `=>` check.
pub mod statement;
