//! Outbound email capability

pub mod errors;
pub mod mailer;
pub mod message;
