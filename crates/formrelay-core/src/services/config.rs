/// Configuration service - loads config from environment variables
use crate::constants::{
    DEFAULT_DISPATCH_TIMEOUT_MS, DEFAULT_RECAPTCHA_VERIFY_URL, DEFAULT_VERIFY_TIMEOUT_MS,
    ENV_DISPATCH_TIMEOUT_MS, ENV_FROM_PREFIX, ENV_OPERATOR_INBOX, ENV_ROUTING_MAP,
    ENV_SECRET_PREFIX, ENV_TARGET_PREFIX, ENV_VERIFY_TIMEOUT_MS, ENV_VERIFY_URL,
};
use crate::error::FormRelayError;
use crate::models::{DeliveryMode, RelayConfig, RouteConfig, normalize_route_key};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<RelayConfig, FormRelayError>;
}

/// Environment variable-based configuration provider
pub struct EnvConfigProvider {
    config: RelayConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, FormRelayError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, FormRelayError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars.into_iter().collect();

        let mut routes: HashMap<String, RouteConfig> = match vars.get(ENV_ROUTING_MAP) {
            Some(json) => parse_routing_map(json)?,
            None => HashMap::new(),
        };

        // Prefixed variables override the routing map field by field
        for (name, value) in &vars {
            let Some(value) = non_empty(value) else {
                continue;
            };

            if let Some(key) = name.strip_prefix(ENV_SECRET_PREFIX) {
                route_entry(&mut routes, key).verification_secret = Some(value);
            } else if let Some(key) = name.strip_prefix(ENV_TARGET_PREFIX) {
                route_entry(&mut routes, key).target_address = Some(value);
            } else if let Some(key) = name.strip_prefix(ENV_FROM_PREFIX) {
                route_entry(&mut routes, key).from_address = Some(value);
            }
        }
        routes.remove("");

        let delivery = match vars.get(ENV_OPERATOR_INBOX).and_then(|v| non_empty(v)) {
            Some(inbox) => DeliveryMode::OperatorInbox(inbox),
            None => DeliveryMode::Target,
        };

        let config = RelayConfig {
            routes,
            verify_url: vars
                .get(ENV_VERIFY_URL)
                .and_then(|v| non_empty(v))
                .unwrap_or_else(|| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),
            verify_timeout: parse_timeout(&vars, ENV_VERIFY_TIMEOUT_MS, DEFAULT_VERIFY_TIMEOUT_MS)?,
            dispatch_timeout: parse_timeout(
                &vars,
                ENV_DISPATCH_TIMEOUT_MS,
                DEFAULT_DISPATCH_TIMEOUT_MS,
            )?,
            delivery,
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| FormRelayError::Config(format!("Invalid configuration: {}", e)))?;

        for key in config.incomplete_routes() {
            tracing::warn!(route_key = %key, "Route is missing a target or from address");
        }

        tracing::info!(
            routes = config.routes.len(),
            operator_inbox = matches!(config.delivery, DeliveryMode::OperatorInbox(_)),
            verify_timeout_ms = config.verify_timeout.as_millis() as u64,
            dispatch_timeout_ms = config.dispatch_timeout.as_millis() as u64,
            "Configuration validated successfully"
        );

        Ok(Self { config })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<RelayConfig, FormRelayError> {
        // Configuration is immutable during Lambda lifetime
        Ok(self.config.clone())
    }
}

fn parse_routing_map(json: &str) -> Result<HashMap<String, RouteConfig>, FormRelayError> {
    let map: HashMap<String, RouteConfig> = serde_json::from_str(json)
        .map_err(|e| FormRelayError::Config(format!("Invalid {} JSON: {}", ENV_ROUTING_MAP, e)))?;

    Ok(map
        .into_iter()
        .map(|(key, route)| (normalize_route_key(&key), route))
        .collect())
}

fn route_entry<'a>(routes: &'a mut HashMap<String, RouteConfig>, key: &str) -> &'a mut RouteConfig {
    routes.entry(normalize_route_key(key)).or_default()
}

fn parse_timeout(
    vars: &HashMap<String, String>,
    name: &str,
    default_ms: u64,
) -> Result<Duration, FormRelayError> {
    match vars.get(name).map(|v| v.trim()) {
        None | Some("") => Ok(Duration::from_millis(default_ms)),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| FormRelayError::Config(format!("Invalid {} '{}': {}", name, raw, e))),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteKey;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefixed_variables() {
        let provider = EnvConfigProvider::from_vars(vars(&[
            ("TARGET_ACME", "owner@acme.com"),
            ("FROM_ACME", "noreply@acme.com"),
            ("RECAPTCHA_SECRET_ACME", "s3cret"),
            ("PATH", "/usr/bin"),
        ]))
        .unwrap();
        let config = provider.config();
        let key = RouteKey::new("acme");

        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.target_address(&key), Some("owner@acme.com"));
        assert_eq!(config.from_address(&key), Some("noreply@acme.com"));
        assert_eq!(config.verification_secret(&key), Some("s3cret"));
        assert_eq!(config.delivery, DeliveryMode::Target);
        assert_eq!(config.verify_url, DEFAULT_RECAPTCHA_VERIFY_URL);
    }

    #[test]
    fn test_lowercase_variable_suffix_is_normalized() {
        let provider =
            EnvConfigProvider::from_vars(vars(&[("TARGET_globex", "owner@globex.com")])).unwrap();
        assert!(provider.config().routes.contains_key("GLOBEX"));
    }

    #[test]
    fn test_routing_map_with_overrides() {
        let provider = EnvConfigProvider::from_vars(vars(&[
            (
                "ROUTING_MAP",
                r#"{"my-site": {"target": "old@site.io", "from": "noreply@site.io"}}"#,
            ),
            ("TARGET_MY-SITE", "new@site.io"),
        ]))
        .unwrap();
        let config = provider.config();
        let key = RouteKey::new("My-Site");

        assert_eq!(config.target_address(&key), Some("new@site.io"));
        assert_eq!(config.from_address(&key), Some("noreply@site.io"));
        assert_eq!(config.verification_secret(&key), None);
    }

    #[test]
    fn test_invalid_routing_map() {
        let result = EnvConfigProvider::from_vars(vars(&[("ROUTING_MAP", "not json")]));
        match result {
            Err(FormRelayError::Config(detail)) => {
                assert!(detail.starts_with("Invalid ROUTING_MAP JSON: "), "{}", detail)
            }
            _ => panic!("expected a configuration error"),
        }
    }

    #[test]
    fn test_timeouts_and_operator_inbox() {
        let provider = EnvConfigProvider::from_vars(vars(&[
            ("VERIFY_TIMEOUT_MS", "1500"),
            ("DISPATCH_TIMEOUT_MS", "3000"),
            ("OPERATOR_INBOX", "ops@relay.io"),
        ]))
        .unwrap();
        let config = provider.config();

        assert_eq!(config.verify_timeout, Duration::from_millis(1500));
        assert_eq!(config.dispatch_timeout, Duration::from_millis(3000));
        assert_eq!(
            config.delivery,
            DeliveryMode::OperatorInbox("ops@relay.io".to_string())
        );
    }

    #[test]
    fn test_invalid_timeouts_rejected() {
        assert!(EnvConfigProvider::from_vars(vars(&[("VERIFY_TIMEOUT_MS", "soon")])).is_err());
        assert!(EnvConfigProvider::from_vars(vars(&[("DISPATCH_TIMEOUT_MS", "0")])).is_err());
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let provider =
            EnvConfigProvider::from_vars(vars(&[("TARGET_ACME", ""), ("FROM_", "x@y.com")]))
                .unwrap();
        assert!(provider.config().routes.is_empty());
    }

    #[tokio::test]
    async fn test_config_provider_trait() {
        let provider =
            EnvConfigProvider::from_vars(vars(&[("TARGET_ACME", "owner@acme.com")])).unwrap();
        let config = provider.get_config().await.unwrap();
        assert!(config.routes.contains_key("ACME"));
    }
}
