/// Mock collaborators for integration testing
use async_trait::async_trait;
use formrelay_core::models::{
    DispatchOutcome, NotificationEmail, VerificationErrorKind, VerificationResult,
};
use formrelay_core::services::{EmailSender, HumanVerifier};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum VerifierBehavior {
    Pass,
    Reject,
    TransportError,
    /// Each token passes once, like the real provider
    SingleUse,
}

/// Mock human verifier that records every call
#[derive(Clone)]
pub struct MockVerifier {
    behavior: VerifierBehavior,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    used_tokens: Arc<Mutex<HashSet<String>>>,
}

impl MockVerifier {
    pub fn new(behavior: VerifierBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
            used_tokens: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn passing() -> Self {
        Self::new(VerifierBehavior::Pass)
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, String)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HumanVerifier for MockVerifier {
    async fn verify(&self, secret: &str, token: &str) -> VerificationResult {
        self.calls
            .lock()
            .unwrap()
            .push((secret.to_string(), token.to_string()));

        match self.behavior {
            VerifierBehavior::Pass => VerificationResult::passed(),
            VerifierBehavior::Reject => VerificationResult::failed(
                VerificationErrorKind::Rejected,
                "invalid-input-response",
            ),
            VerifierBehavior::TransportError => VerificationResult::failed(
                VerificationErrorKind::Transport,
                "connection refused",
            ),
            VerifierBehavior::SingleUse => {
                if self.used_tokens.lock().unwrap().insert(token.to_string()) {
                    VerificationResult::passed()
                } else {
                    VerificationResult::failed(
                        VerificationErrorKind::Rejected,
                        "timeout-or-duplicate",
                    )
                }
            }
        }
    }
}

/// Mock email sender that records every notification
#[derive(Clone)]
pub struct MockEmailSender {
    failure: Option<String>,
    pub sent: Arc<Mutex<Vec<NotificationEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            failure: None,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sender whose every attempt fails with `detail`
    pub fn failing(detail: &str) -> Self {
        Self {
            failure: Some(detail.to_string()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<NotificationEmail> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send(&self, email: &NotificationEmail) -> DispatchOutcome {
        self.sent.lock().unwrap().push(email.clone());

        match &self.failure {
            Some(detail) => DispatchOutcome::failed(detail.clone()),
            None => DispatchOutcome::delivered(format!("mock-{}", self.sent_count())),
        }
    }
}
