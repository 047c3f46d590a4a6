use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SpheraError {
    #[error("Kepler solver did not converge after {iterations} iterations (residual = {residual:e})")]
    NonConvergence { iterations: usize, residual: f64 },

    #[error("Value outside of the valid domain: {0}")]
    DomainError(String),

    #[error("Unknown celestial body identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Year 0 does not exist in the civil calendar")]
    ZeroYear,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl PartialEq for SpheraError {
    fn eq(&self, other: &Self) -> bool {
        use SpheraError::*;
        match (self, other) {
            (
                NonConvergence {
                    iterations: a,
                    residual: ra,
                },
                NonConvergence {
                    iterations: b,
                    residual: rb,
                },
            ) => a == b && (ra == rb || (ra.is_nan() && rb.is_nan())),
            (DomainError(a), DomainError(b)) => a == b,
            (InvalidIdentifier(a), InvalidIdentifier(b)) => a == b,
            (ZeroYear, ZeroYear) => true,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            _ => false,
        }
    }
}
