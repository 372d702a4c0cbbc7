//! Inbound quote request

use serde_json::Value;

use crate::domain::quotes::errors::QuoteValidationError;

/// One customer's service inquiry.
///
/// Lives only for the duration of a single request: built from untrusted
/// input, validated, projected into two email bodies, then dropped. Nothing
/// is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
    /// The customer's name
    pub name: String,

    /// The customer's email address
    pub email: String,

    /// The customer's phone number
    pub phone: Option<String>,

    /// The vehicle identification number
    pub vin: Option<String>,

    /// The vehicle's model year
    pub year: String,

    /// The vehicle's make
    pub make: String,

    /// The vehicle's model
    pub model: String,

    /// The vehicle's engine, if the customer knows it
    pub engine: Option<String>,

    /// The requested service type
    pub service_type: String,

    /// Free-form description of the issue or work needed
    pub description: Option<String>,

    /// Where the vehicle is located
    pub location: String,
}

/// Coerce one field of the untrusted body to string-or-absent.
///
/// Nothing upstream enforces the declared shape, so strings are taken as-is,
/// numbers are stringified, and every other JSON type counts as absent. An
/// empty string also counts as absent.
fn string_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl QuoteRequest {
    /// Build a quote request from an untrusted JSON body.
    ///
    /// Every field is coerced to string-or-absent before validation. Fails
    /// with [`QuoteValidationError::MissingRequiredFields`] unless `name`,
    /// `email`, `year`, `make`, `model`, `serviceType` and `location` are all
    /// present and non-empty.
    pub fn from_json(body: &Value) -> Result<Self, QuoteValidationError> {
        let required = |key| string_field(body, key).ok_or(QuoteValidationError::MissingRequiredFields);

        Ok(Self {
            name: required("name")?,
            email: required("email")?,
            phone: string_field(body, "phone"),
            vin: string_field(body, "vin"),
            year: required("year")?,
            make: required("make")?,
            model: required("model")?,
            engine: string_field(body, "engine"),
            service_type: required("serviceType")?,
            description: string_field(body, "description"),
            location: required("location")?,
        })
    }

    /// The `year make model` line, empty segments dropped.
    pub fn vehicle_line(&self) -> String {
        [&self.year, &self.make, &self.model]
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The canonical plain-text summary, reused verbatim in both outbound
    /// emails.
    pub fn summary(&self) -> String {
        format!(
            "\nNew quote request for SLK Auto Repair\n\n\
             Customer:\n\
             - Name: {name}\n\
             - Email: {email}\n\
             - Phone: {phone}\n\n\
             Vehicle:\n\
             - VIN: {vin}\n\
             - Year/Make/Model: {vehicle}\n\
             - Engine: {engine}\n\n\
             Service:\n\
             - Type: {service_type}\n\
             - Description: {description}\n\n\
             Location:\n\
             - {location}\n",
            name = self.name,
            email = self.email,
            phone = or_not_available(&self.phone),
            vin = or_not_available(&self.vin),
            vehicle = self.vehicle_line(),
            engine = or_not_available(&self.engine),
            service_type = self.service_type,
            description = or_not_available(&self.description),
            location = self.location,
        )
    }
}

fn or_not_available(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("N/A")
}
