use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScalingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScalingError {
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Input range cannot be zero.")]
    DivideByZero,

    #[error("scale_from must be 'x', 'y', or 'z'")]
    InvalidAxis(String),

    #[error("{message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ScalingError {
    /// Status code a request boundary reports for this error.
    ///
    /// Caller mistakes map to 400, everything else to 500.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidFormat(_)
            | Self::DivideByZero
            | Self::InvalidAxis(_)
            | Self::InvalidInput { .. } => 400,
            Self::InvalidConfig(_) | Self::Internal(_) => 500,
        }
    }
}
