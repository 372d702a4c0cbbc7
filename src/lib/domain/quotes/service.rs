//! Quote service module

use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use tracing::error;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::mailer::Mailer,
    quotes::{emails, errors::SubmitQuoteError, request::QuoteRequest},
};

/// Sender used for the customer confirmation when no sender is configured
pub const DEFAULT_SENDER: &str = "no-reply@slk-auto.com";

/// Addresses for the business-notification email
#[derive(Clone, Debug, Default, Parser)]
pub struct QuoteEmailConfig {
    /// Where business notifications are delivered
    #[clap(long, env = "SLK_QUOTE_TO_EMAIL")]
    pub business_to: Option<String>,

    /// The sender address for outbound quote emails
    #[clap(long, env = "SLK_QUOTE_FROM_EMAIL")]
    pub business_from: Option<String>,
}

impl QuoteEmailConfig {
    /// Both addresses, when the business notification is fully configured
    fn notification_addresses(&self) -> Option<(&str, &str)> {
        Some((self.business_to.as_deref()?, self.business_from.as_deref()?))
    }

    /// The configured sender, falling back to [`DEFAULT_SENDER`]
    fn sender_or_default(&self) -> String {
        self.business_from
            .clone()
            .unwrap_or_else(|| DEFAULT_SENDER.to_string())
    }
}

/// Quote service
#[async_trait]
pub trait QuoteService: Clone + Send + Sync + 'static {
    /// Forwards a validated quote request as two emails.
    ///
    /// # Arguments
    /// * `quote` - The validated [`QuoteRequest`] to forward.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once both dispatches have been resolved,
    /// or an [`Err`] containing a [`SubmitQuoteError`] on an unexpected
    /// failure. Individual send failures are logged, not surfaced.
    async fn submit_quote(&self, quote: &QuoteRequest) -> Result<(), SubmitQuoteError>;
}

#[cfg(test)]
mock! {
    pub QuoteService {}

    impl Clone for QuoteService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl QuoteService for QuoteService {
        async fn submit_quote(&self, quote: &QuoteRequest) -> Result<(), SubmitQuoteError>;
    }
}

/// Quote service implementation
#[derive(Debug, Clone)]
pub struct QuoteServiceImpl<M>
where
    M: Mailer,
{
    mailer: Arc<M>,
    config: QuoteEmailConfig,
}

impl<M> QuoteServiceImpl<M>
where
    M: Mailer,
{
    /// Create a new quote service
    pub fn new(mailer: Arc<M>, config: QuoteEmailConfig) -> Self {
        Self { mailer, config }
    }
}

#[async_trait]
impl<M> QuoteService for QuoteServiceImpl<M>
where
    M: Mailer,
{
    /// The two sends are strictly sequential, and neither outcome affects the
    /// other: a failed or skipped business notification never cancels the
    /// customer confirmation, and a failed confirmation still resolves to
    /// [`Ok`]. Resubmitting the same quote sends duplicate emails; there is
    /// no dedup key.
    async fn submit_quote(&self, quote: &QuoteRequest) -> Result<(), SubmitQuoteError> {
        match self.config.notification_addresses() {
            Some((to, from)) => {
                let email = emails::business_notification(quote, to, from);

                if let Err(err) = self.mailer.send(&email).await {
                    error!(error = %err, "failed to send business notification email");
                }
            }
            None => {
                error!("SLK_QUOTE_TO_EMAIL or SLK_QUOTE_FROM_EMAIL is not set, skipping business notification");
            }
        }

        let email = emails::customer_confirmation(quote, self.config.sender_or_default());

        if let Err(err) = self.mailer.send(&email).await {
            error!(error = %err, "failed to send customer confirmation email");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use mockall::Sequence;
    use testresult::TestResult;

    use crate::domain::communication::{errors::EmailError, mailer::MockMailer};

    use super::*;

    fn quote() -> QuoteRequest {
        QuoteRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            vin: None,
            year: "2018".to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            engine: None,
            service_type: "oil_change".to_string(),
            description: None,
            location: "Sacramento".to_string(),
        }
    }

    fn configured() -> QuoteEmailConfig {
        QuoteEmailConfig {
            business_to: Some("sam@slk-auto.com".to_string()),
            business_from: Some("quotes@slk-auto.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_quote_sends_business_email_then_confirmation() -> TestResult {
        let mut mailer = MockMailer::new();
        let mut sequence = Sequence::new();

        mailer
            .expect_send()
            .once()
            .in_sequence(&mut sequence)
            .withf(|email| {
                email.to == "sam@slk-auto.com"
                    && email.subject == emails::BUSINESS_SUBJECT
                    && email.reply_to.as_deref() == Some("jane@example.com")
            })
            .returning(|_| Ok(()));

        mailer
            .expect_send()
            .once()
            .in_sequence(&mut sequence)
            .withf(|email| {
                email.to == "jane@example.com"
                    && email.from == "quotes@slk-auto.com"
                    && email.subject == emails::CONFIRMATION_SUBJECT
            })
            .returning(|_| Ok(()));

        let service = QuoteServiceImpl::new(Arc::new(mailer), configured());

        service.submit_quote(&quote()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_quote_skips_business_email_when_unconfigured() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .once()
            .withf(|email| email.to == "jane@example.com" && email.from == DEFAULT_SENDER)
            .returning(|_| Ok(()));

        let service = QuoteServiceImpl::new(Arc::new(mailer), QuoteEmailConfig::default());

        service.submit_quote(&quote()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_submit_quote_skips_business_email_when_only_destination_is_set() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .once()
            .withf(|email| email.to == "jane@example.com")
            .returning(|_| Ok(()));

        let config = QuoteEmailConfig {
            business_to: Some("sam@slk-auto.com".to_string()),
            business_from: None,
        };

        let service = QuoteServiceImpl::new(Arc::new(mailer), config);

        service.submit_quote(&quote()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_business_email_does_not_cancel_the_confirmation() -> TestResult {
        let mut mailer = MockMailer::new();
        let mut sequence = Sequence::new();

        mailer
            .expect_send()
            .once()
            .in_sequence(&mut sequence)
            .withf(|email| email.to == "sam@slk-auto.com")
            .returning(|_| Err(EmailError::UnknownError(anyhow!("connection refused"))));

        mailer
            .expect_send()
            .once()
            .in_sequence(&mut sequence)
            .withf(|email| email.to == "jane@example.com")
            .returning(|_| Ok(()));

        let service = QuoteServiceImpl::new(Arc::new(mailer), configured());

        service.submit_quote(&quote()).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_confirmation_is_swallowed() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(2)
            .returning(|_| Err(EmailError::UnknownError(anyhow!("connection refused"))));

        let service = QuoteServiceImpl::new(Arc::new(mailer), configured());

        let result = service.submit_quote(&quote()).await;

        assert!(result.is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn test_resubmitting_sends_duplicate_emails() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send()
            .times(2)
            .withf(|email| email.to == "jane@example.com")
            .returning(|_| Ok(()));

        let service = QuoteServiceImpl::new(Arc::new(mailer), QuoteEmailConfig::default());

        service.submit_quote(&quote()).await?;
        service.submit_quote(&quote()).await?;

        Ok(())
    }
}
