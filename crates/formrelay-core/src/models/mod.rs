/// Data models for Formrelay system
pub mod config;
pub mod email;
pub mod outcome;
pub mod response;
pub mod submission;

// Re-export commonly used types
pub use config::*;
pub use email::*;
pub use outcome::*;
pub use response::*;
pub use submission::*;
