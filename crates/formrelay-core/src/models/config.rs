/// Configuration models
use super::submission::{RouteKey, normalize_route_key};
use crate::constants::{
    DEFAULT_DISPATCH_TIMEOUT_MS, DEFAULT_RECAPTCHA_VERIFY_URL, DEFAULT_VERIFY_TIMEOUT_MS,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Process-wide configuration, loaded once at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Routing table keyed by upper-cased route key
    pub routes: HashMap<String, RouteConfig>,
    pub verify_url: String,
    pub verify_timeout: Duration,
    pub dispatch_timeout: Duration,
    pub delivery: DeliveryMode,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
            verify_url: DEFAULT_RECAPTCHA_VERIFY_URL.to_string(),
            verify_timeout: Duration::from_millis(DEFAULT_VERIFY_TIMEOUT_MS),
            dispatch_timeout: Duration::from_millis(DEFAULT_DISPATCH_TIMEOUT_MS),
            delivery: DeliveryMode::Target,
        }
    }
}

impl RelayConfig {
    /// Adds or replaces the entry for `key` (normalized)
    pub fn with_route(mut self, key: &str, route: RouteConfig) -> Self {
        self.routes.insert(normalize_route_key(key), route);
        self
    }

    pub fn with_delivery(mut self, delivery: DeliveryMode) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn route(&self, key: &RouteKey) -> Option<&RouteConfig> {
        self.routes.get(key.lookup_key())
    }

    pub fn target_address(&self, key: &RouteKey) -> Option<&str> {
        self.route(key).and_then(|r| r.target_address.as_deref())
    }

    pub fn from_address(&self, key: &RouteKey) -> Option<&str> {
        self.route(key).and_then(|r| r.from_address.as_deref())
    }

    pub fn verification_secret(&self, key: &RouteKey) -> Option<&str> {
        self.route(key).and_then(|r| r.verification_secret.as_deref())
    }

    /// Inbox the notification is actually delivered to
    pub fn recipient_for<'a>(&'a self, target: &'a str) -> &'a str {
        match &self.delivery {
            DeliveryMode::Target => target,
            DeliveryMode::OperatorInbox(inbox) => inbox,
        }
    }

    /// Route keys lacking a target or from address
    pub fn incomplete_routes(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .routes
            .iter()
            .filter(|(_, r)| r.target_address.is_none() || r.from_address.is_none())
            .map(|(k, _)| k.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Validates configuration is valid
    ///
    /// Incomplete routes are not an error here; they fail per request.
    pub fn validate(&self) -> Result<(), String> {
        if !self.verify_url.starts_with("https://") && !self.verify_url.starts_with("http://") {
            return Err(format!("Invalid verification URL: {}", self.verify_url));
        }

        if self.verify_timeout.is_zero() {
            return Err("Verification timeout must be > 0".to_string());
        }

        if self.dispatch_timeout.is_zero() {
            return Err("Dispatch timeout must be > 0".to_string());
        }

        if let DeliveryMode::OperatorInbox(inbox) = &self.delivery {
            if !inbox.contains('@') {
                return Err(format!("Invalid operator inbox: {}", inbox));
            }
        }

        if self.routes.keys().any(|k| k.is_empty()) {
            return Err("Route key cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Per-route entry of the routing table
#[derive(Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RouteConfig {
    #[serde(default, alias = "target")]
    pub target_address: Option<String>,
    #[serde(default, alias = "from")]
    pub from_address: Option<String>,
    #[serde(default, alias = "recaptcha_secret")]
    pub verification_secret: Option<String>,
}

impl RouteConfig {
    pub fn new(target: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            target_address: Some(target.into()),
            from_address: Some(from.into()),
            verification_secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.verification_secret = Some(secret.into());
        self
    }
}

impl fmt::Debug for RouteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteConfig")
            .field("target_address", &self.target_address)
            .field("from_address", &self.from_address)
            .field(
                "verification_secret",
                &self.verification_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// Where notifications are delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// The resolved target address of the route
    Target,
    /// A fixed operator inbox, for inspecting traffic before go-live
    OperatorInbox(String),
}
