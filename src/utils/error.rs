use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    #[error("Usage error: expected {expected} arguments, found {found}")]
    Usage { expected: usize, found: usize },

    #[error("Parse error: argument {position} ({value:?}) {reason}")]
    Parse {
        position: usize,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Parse,
}

impl ProductError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProductError::Usage { .. } => ErrorCategory::Usage,
            ProductError::Parse { .. } => ErrorCategory::Parse,
        }
    }

    /// Process exit status for this error. Usage errors share clap's code.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            ErrorCategory::Parse => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ProductError::Usage { expected, found } => format!(
                "expected exactly {} numbers, got {}",
                expected, found
            ),
            ProductError::Parse {
                position, value, ..
            } => format!("argument {} is not a number: {:?}", position, value),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProductError::Usage { .. } => "usage: lab-product <a> <b>",
            ProductError::Parse { .. } => {
                "use decimal notation such as 3, -7, 2.5 or 1e3"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProductError>;
