/// Request handlers
pub mod contact;

pub use contact::ContactFormProcessor;
