/// Error types for Formrelay system
use thiserror::Error;

/// Every failure a request can end in, plus startup configuration errors.
///
/// The `Display` text of a request-level variant is the `message` returned to
/// the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormRelayError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("reCaptcha validation failed")]
    VerificationFailed { detail: Option<String> },

    #[error("Target email address not found for {0}")]
    TargetAddressNotFound(String),

    #[error("From email address not found for {0}")]
    FromAddressNotFound(String),

    #[error("Email failed to send: {0}")]
    Dispatch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FormRelayError {
    /// HTTP-style status code reported for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingField(_) => 400,
            Self::VerificationFailed { .. } => 422,
            Self::TargetAddressNotFound(_) => 400,
            Self::FromAddressNotFound(_) => 400,
            Self::Dispatch(_) => 500,
            Self::Config(_) => 500,
        }
    }

    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "validation",
            Self::VerificationFailed { .. } => "verification",
            Self::TargetAddressNotFound(_) | Self::FromAddressNotFound(_) => "route_config",
            Self::Dispatch(_) => "dispatch",
            Self::Config(_) => "config",
        }
    }
}
