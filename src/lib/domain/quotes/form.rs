//! Quote form submission model
//!
//! The browser runs the same protocol in the quote page's script; this model
//! is the canonical description of it, exercised against a mocked transport.

use async_trait::async_trait;
use serde::Serialize;

#[cfg(test)]
use mockall::mock;

/// Message shown when the server rejects a submission without a message
pub const SUBMIT_REJECTED_MESSAGE: &str = "Failed to send quote request.";

/// Message shown when a submission fails without any message at all
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Something went wrong.";

/// The eleven fields of the quote form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteFields {
    /// The customer's name
    pub name: String,

    /// The customer's email address
    pub email: String,

    /// The customer's phone number
    pub phone: String,

    /// The vehicle identification number
    pub vin: String,

    /// The vehicle's model year
    pub year: String,

    /// The vehicle's make
    pub make: String,

    /// The vehicle's model
    pub model: String,

    /// The vehicle's engine
    pub engine: String,

    /// The requested service type
    pub service_type: String,

    /// Free-form description of the issue
    pub description: String,

    /// Where the vehicle is located
    pub location: String,
}

/// A field of the quote form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    Vin,
    Year,
    Make,
    Model,
    Engine,
    ServiceType,
    Description,
    Location,
}

impl QuoteFields {
    /// Pure single-field update: the returned record is identical to `self`
    /// except for `field`. No cross-field validation, no derived state.
    pub fn with(mut self, field: QuoteField, value: impl Into<String>) -> Self {
        let value = value.into();

        match field {
            QuoteField::Name => self.name = value,
            QuoteField::Email => self.email = value,
            QuoteField::Phone => self.phone = value,
            QuoteField::Vin => self.vin = value,
            QuoteField::Year => self.year = value,
            QuoteField::Make => self.make = value,
            QuoteField::Model => self.model = value,
            QuoteField::Engine => self.engine = value,
            QuoteField::ServiceType => self.service_type = value,
            QuoteField::Description => self.description = value,
            QuoteField::Location => self.location = value,
        }

        self
    }
}

/// The submission status of the form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet, or a new submission is in flight
    #[default]
    Idle,

    /// The last submission was accepted
    Success,

    /// The last submission failed, with the message to surface
    Error(String),
}

/// An error returned by the quote submission transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuoteApiError {
    /// The server answered with a non-success status; `message` is the error
    /// string extracted from the response body, when one was present
    Rejected {
        /// The server-provided error message
        message: Option<String>,
    },

    /// The request never completed (network failure, unexpected error)
    Transport(String),
}

/// Transport over which the form submits itself
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// Submit the full field set as one request
    async fn submit_quote(&self, fields: &QuoteFields) -> Result<(), QuoteApiError>;
}

#[cfg(test)]
mock! {
    pub QuoteApi {}

    #[async_trait]
    impl QuoteApi for QuoteApi {
        async fn submit_quote(&self, fields: &QuoteFields) -> Result<(), QuoteApiError>;
    }
}

/// The quote form: eleven fields, a status banner, and an in-flight flag
#[derive(Clone, Debug, Default)]
pub struct QuoteForm {
    fields: QuoteFields,
    status: FormStatus,
    is_submitting: bool,
}

impl QuoteForm {
    /// The current field values
    pub fn fields(&self) -> &QuoteFields {
        &self.fields
    }

    /// The current status banner
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Replace one field, leaving the other ten untouched
    pub fn update_field(&mut self, field: QuoteField, value: impl Into<String>) {
        self.fields = self.fields.clone().with(field, value);
    }

    /// Submit the form over `api`.
    ///
    /// Clears any previous banner when the submission starts. On success the
    /// fields reset to empty; on any failure they are preserved so the
    /// customer does not have to retype them. The in-flight flag clears on
    /// every path out of this method.
    pub async fn submit(&mut self, api: &impl QuoteApi) {
        self.is_submitting = true;
        self.status = FormStatus::Idle;

        self.status = match api.submit_quote(&self.fields).await {
            Ok(()) => {
                self.fields = QuoteFields::default();
                FormStatus::Success
            }
            Err(QuoteApiError::Rejected { message }) => {
                FormStatus::Error(message.unwrap_or_else(|| SUBMIT_REJECTED_MESSAGE.to_string()))
            }
            Err(QuoteApiError::Transport(message)) if !message.is_empty() => {
                FormStatus::Error(message)
            }
            Err(QuoteApiError::Transport(_)) => {
                FormStatus::Error(SUBMIT_FALLBACK_MESSAGE.to_string())
            }
        };

        self.is_submitting = false;
    }
}
