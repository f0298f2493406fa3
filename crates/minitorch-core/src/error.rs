use thiserror::Error;

/// Canonical result for operators.
pub type Result<T> = std::result::Result<T, OpError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    #[error("math domain error in '{op}': input {input} is outside the domain")]
    Domain { op: &'static str, input: f64 },

    #[error("division by zero in '{op}'")]
    DivisionByZero { op: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl OpError {
    pub fn is_domain(&self) -> bool {
        matches!(self, OpError::Domain { .. })
    }

    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, OpError::DivisionByZero { .. })
    }

    /// Name of the operator that failed, if any.
    pub fn op(&self) -> Option<&'static str> {
        match self {
            OpError::Domain { op, .. } | OpError::DivisionByZero { op } => Some(op),
            OpError::Config(_) => None,
        }
    }
}
