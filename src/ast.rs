/// Represents a literal value in a check script.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: numbers, time stamps, durations, strings, booleans and null.
/// It is used in the AST to represent literal expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A time literal, in seconds since the epoch.
    Time(i64),
    /// A duration literal such as `3 days` or `2 months`.
    Duration {
        /// Amount in months or seconds, after unit conversion.
        value:  f64,
        /// `true` for month-based units (months, years).
        months: bool,
    },
    /// A string literal.
    String(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `null` literal.
    Null,
}

/// An abstract syntax tree (AST) node representing an expression in a check
/// script.
///
/// Each variant models a distinct syntactic construct and carries the source
/// line it started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, time, etc.).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// The empty list `()`.
    EmptyList {
        /// Line number in the source code.
        line: usize,
    },
    /// The unary comma `,x`, building a one-element list from a single value.
    UnaryComma {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// The binary comma `x, y`, concatenating two values into one list.
    BinaryComma {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// String concatenation `x || y`.
    Concat {
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A value stamped with a primary time, `x @ 2024-01-31`.
    Timed {
        /// The stamped expression.
        expr: Box<Self>,
        /// The primary time, in seconds since the epoch.
        time: i64,
        /// Line number in the source code.
        line: usize,
    },
    /// Operator call expression (e.g. `sort_data(3, 1, 2)`).
    OperatorCall {
        /// Name of the operator being called.
        name:      String,
        /// Arguments, separated by `;` in the source.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Returns the source line number of this expression.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::EmptyList { line }
            | Self::UnaryComma { line, .. }
            | Self::BinaryComma { line, .. }
            | Self::Concat { line, .. }
            | Self::Timed { line, .. }
            | Self::OperatorCall { line, .. } => *line,
        }
    }
}

/// A single line of a check script.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression whose value becomes the script's latest result.
    Expression(Expr),
    /// `actual => expected`: both sides must evaluate to identical values.
    Check {
        /// The expression under test.
        actual:   Expr,
        /// The expression producing the expected value.
        expected: Expr,
        /// Line number in the source code.
        line:     usize,
    },
}
