use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        operator::{
            list::{binary_comma, unary_comma},
            string::concat,
            table::call_operator,
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The operators themselves are stateless; the context only carries the
/// settings that control how scripts are checked.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating expressions and
/// statements.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Whether `=>` checks also compare primary times. When unset, checks
    /// use plain structural equality.
    pub compare_times: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::number(*n),
            LiteralValue::Time(t) => Self::time(*t),
            LiteralValue::Duration { value, months } => Self::duration(*value, *months),
            LiteralValue::String(s) => Self::string(s.as_str()),
            LiteralValue::Bool(b) => Self::boolean(*b, None),
            LiteralValue::Null => Self::NULL,
        }
    }
}

impl Context {
    /// Creates a new evaluation context that compares primary times in
    /// checks.
    #[must_use]
    pub const fn new() -> Self {
        Self { compare_times: true }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals, the
    /// empty list, the two comma operators, concatenation, time stamps and
    /// operator calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Example
    /// ```
    /// use arden_ops::{
    ///     ast::{Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let expr = Expr::UnaryComma { expr: Box::new(Expr::Literal { value: LiteralValue::Number(1.0),
    ///                                                              line:  1, }),
    ///                               line: 1, };
    /// let value = Context::new().eval(&expr).unwrap();
    /// assert_eq!(value, Value::list(vec![1.0.into()]));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(value.into()),
            Expr::EmptyList { .. } => Ok(Value::empty_list()),
            Expr::UnaryComma { expr, .. } => Ok(unary_comma(&self.eval(expr)?)),
            Expr::BinaryComma { left, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(binary_comma(&left, &right))
            },
            Expr::Concat { left, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(concat(&left, &right))
            },
            Expr::Timed { expr, time, .. } => Ok(self.eval(expr)?.with_time(Some(*time))),
            Expr::OperatorCall { name,
                                 arguments,
                                 line, } => {
                let args = arguments.iter()
                                    .map(|arg| self.eval(arg))
                                    .collect::<EvalResult<Vec<_>>>()?;
                call_operator(name, &args, *line)
            },
        }
    }

    /// Evaluates a statement.
    ///
    /// An expression statement yields its value. A check statement evaluates
    /// both sides and yields the actual value if they agree.
    ///
    /// # Returns
    /// `Some(Value)` for statements that yield a result.
    ///
    /// # Errors
    /// Returns `CheckFailed` if the two sides of a `=>` check differ, and
    /// propagates errors from operator calls.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression(expr) => self.eval(expr).map(Some),
            Statement::Check { actual,
                               expected,
                               line, } => {
                let actual = self.eval(actual)?;
                let expected = self.eval(expected)?;

                let holds = if self.compare_times {
                    actual.identical(&expected)
                } else {
                    actual == expected
                };
                if !holds {
                    return Err(RuntimeError::CheckFailed { expected: expected.with_times()
                                                                             .to_string(),
                                                           found:    actual.with_times()
                                                                           .to_string(),
                                                           line:     *line, });
                }

                tracing::debug!(line, value = %actual.with_times(), "check passed");
                Ok(Some(actual))
            },
        }
    }
}
