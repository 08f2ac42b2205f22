/// External collaborators and infrastructure services
pub mod config;
pub mod ses;
pub mod verification;

// Re-export service traits
pub use config::{ConfigProvider, EnvConfigProvider};
pub use ses::{EmailSender, SesEmailSender};
pub use verification::{HumanVerifier, RecaptchaVerifier};
