//! Quote email builders

use crate::domain::{communication::message::OutgoingEmail, quotes::request::QuoteRequest};

/// Subject of the notification sent to the business
pub const BUSINESS_SUBJECT: &str = "New mobile repair quote request";

/// Subject of the confirmation sent to the customer
pub const CONFIRMATION_SUBJECT: &str = "We received your quote request – SLK Auto Repair";

/// The notification email for the business owner.
///
/// Reply-to is the customer's submitted address so a reply goes straight to
/// the customer rather than to the sending system.
pub fn business_notification(quote: &QuoteRequest, to: &str, from: &str) -> OutgoingEmail {
    OutgoingEmail {
        to: to.to_string(),
        from: from.to_string(),
        reply_to: Some(quote.email.clone()),
        subject: BUSINESS_SUBJECT.to_string(),
        body: quote.summary(),
    }
}

/// The confirmation email for the customer, wrapping the same summary in a
/// greeting and a closing note inviting corrections by reply.
pub fn customer_confirmation(quote: &QuoteRequest, from: String) -> OutgoingEmail {
    let body = format!(
        "Hi {name},\n\n\
         Thanks for reaching out to SLK Auto Repair. We’ve received your request and will follow up with an estimated price and time window.\n\n\
         Here’s what you submitted:\n\
         {summary}\n\n\
         If anything looks off, you can reply to this email with corrections.\n\n\
         – SLK Auto Repair",
        name = quote.name,
        summary = quote.summary(),
    );

    OutgoingEmail {
        to: quote.email.clone(),
        from,
        reply_to: None,
        subject: CONFIRMATION_SUBJECT.to_string(),
        body,
    }
}
