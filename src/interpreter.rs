/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// dispatches operator calls and checks `=>` statements.
///
/// # Responsibilities
/// - Evaluates AST nodes into values.
/// - Holds the settings that control how checks compare values.
/// - Reports runtime errors such as unknown operators or failed checks.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// time stamps, strings, identifiers and delimiters. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line.
/// - Handles numeric, time and string literals, identifiers and punctuation.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The list operator core.
///
/// Every operator consumes already evaluated values and produces exactly one
/// value. Operators never fail: invalid input degrades to null, and primary
/// times flow through according to each operator's rule.
///
/// # Responsibilities
/// - Promotes scalars to lists and derives the common time of a list.
/// - Implements aggregation, sorting, selection, filtering, string and
///   pattern operators.
/// - Exposes a name-based table for calling operators from scripts.
pub mod operator;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value variants operated on by the list core:
/// numbers, times, durations, strings, booleans, null and lists. It provides
/// the primary time of a value, truthiness, structural equality and the
/// partial order used for sorting.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements comparison and identity with and without primary times.
/// - Prints values in their canonical textual form.
pub mod value;
