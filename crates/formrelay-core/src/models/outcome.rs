/// Results returned by the verification and dispatch collaborators
use serde::Serialize;

/// Why a verification did not pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationErrorKind {
    /// The provider answered `success: false`
    Rejected,
    /// The call could not be completed or returned a non-2xx status
    Transport,
    Timeout,
    /// The provider answered with something that is not a verification response
    MalformedResponse,
}

impl VerificationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Transport => "transport",
            Self::Timeout => "timeout",
            Self::MalformedResponse => "malformed_response",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub success: bool,
    pub error_kind: Option<VerificationErrorKind>,
    pub detail: Option<String>,
}

impl VerificationResult {
    pub fn passed() -> Self {
        Self {
            success: true,
            error_kind: None,
            detail: None,
        }
    }

    pub fn failed(kind: VerificationErrorKind, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            error_kind: Some(kind),
            detail: Some(detail.into()),
        }
    }
}

/// Result of a single send attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub delivered: bool,
    pub provider_message_id: Option<String>,
    pub error_detail: Option<String>,
}

impl DispatchOutcome {
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self {
            delivered: true,
            provider_message_id: Some(message_id.into()),
            error_detail: None,
        }
    }

    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            delivered: false,
            provider_message_id: None,
            error_detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_constructors() {
        assert!(VerificationResult::passed().success);

        let failed = VerificationResult::failed(VerificationErrorKind::Timeout, "5000ms elapsed");
        assert!(!failed.success);
        assert_eq!(failed.error_kind, Some(VerificationErrorKind::Timeout));
        assert_eq!(failed.error_kind.map(|k| k.as_str()), Some("timeout"));
    }

    #[test]
    fn test_dispatch_constructors() {
        let ok = DispatchOutcome::delivered("0100018c-abc");
        assert!(ok.delivered);
        assert_eq!(ok.provider_message_id.as_deref(), Some("0100018c-abc"));

        let failed = DispatchOutcome::failed("MessageRejected");
        assert!(!failed.delivered);
        assert_eq!(failed.error_detail.as_deref(), Some("MessageRejected"));
    }
}
