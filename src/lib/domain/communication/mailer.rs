//! Email service module

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{errors::EmailError, message::OutgoingEmail};

/// Email service
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an email
    ///
    /// # Arguments
    /// * `email` - The [`OutgoingEmail`] to dispatch.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
    }
}
