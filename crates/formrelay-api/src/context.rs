/// API Context - shared state for all API handlers
use anyhow::Context;
use formrelay_core::ContactFormProcessor;
use formrelay_core::models::RelayConfig;
use formrelay_core::services::{
    ConfigProvider, EmailSender, EnvConfigProvider, HumanVerifier, RecaptchaVerifier,
    SesEmailSender,
};
use std::sync::Arc;

/// API Context contains shared resources for API handlers
#[derive(Clone)]
pub struct ApiContext {
    /// Routing table and timeouts, read-only for the Lambda lifetime
    pub config: Arc<RelayConfig>,

    /// Contact form pipeline wired to the live collaborators
    pub processor: Arc<ContactFormProcessor>,
}

impl ApiContext {
    /// Create a new API context from the environment
    pub async fn new() -> anyhow::Result<Arc<Self>> {
        let provider = EnvConfigProvider::new().context("Failed to load relay configuration")?;
        let config = Arc::new(provider.get_config().await?);

        // Load AWS config
        let aws_config = aws_config::load_from_env().await;
        let ses_client = aws_sdk_ses::Client::new(&aws_config);

        let http_client = reqwest::Client::builder()
            .build()
            .context("Failed to build verification HTTP client")?;

        let verifier: Arc<dyn HumanVerifier> = Arc::new(RecaptchaVerifier::new(
            http_client,
            config.verify_url.clone(),
            config.verify_timeout,
        ));
        let sender: Arc<dyn EmailSender> =
            Arc::new(SesEmailSender::new(ses_client, config.dispatch_timeout));

        Ok(Self::from_parts(config, verifier, sender))
    }

    /// Builds a context around explicit collaborators
    pub fn from_parts(
        config: Arc<RelayConfig>,
        verifier: Arc<dyn HumanVerifier>,
        sender: Arc<dyn EmailSender>,
    ) -> Arc<Self> {
        let processor = Arc::new(ContactFormProcessor::new(
            Arc::clone(&config),
            verifier,
            sender,
        ));

        Arc::new(Self { config, processor })
    }
}
