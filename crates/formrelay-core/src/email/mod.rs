/// Email composition modules
pub mod composer;

pub use composer::{compose_notification, html_body, text_body};
