#[derive(Debug)]
/// Represents all errors that can occur while evaluating a check script.
///
/// Data-dependent failures inside the operators never show up here: they
/// produce null values instead. These errors describe mistakes in the script
/// itself.
pub enum RuntimeError {
    /// Called an unknown operator.
    UnknownOperator {
        /// The name of the operator.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to an operator.
    ArgumentCountMismatch {
        /// The name of the operator.
        name:  String,
        /// The number of arguments supplied.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `=>` check did not hold.
    CheckFailed {
        /// The expected value, printed.
        expected: String,
        /// The value actually produced, printed.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperator { name, line } => {
                write!(f, "Error on line {line}: Unknown operator '{name}'.")
            },
            Self::ArgumentCountMismatch { name, found, line } => write!(f,
                                                                        "Error on line {line}: Operator '{name}' does not take {found} argument(s)."),
            Self::CheckFailed { expected,
                                found,
                                line, } => write!(f,
                                                  "Error on line {line}: Check failed. Expected {expected}, but found {found} instead."),
        }
    }
}

impl std::error::Error for RuntimeError {}
