//! Outgoing email message

/// A plain-text email ready for dispatch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// The recipient of the email
    pub to: String,

    /// The sender of the email
    pub from: String,

    /// The address replies should be directed to, when it differs from `from`
    pub reply_to: Option<String>,

    /// The subject of the email
    pub subject: String,

    /// The plain text body of the email
    pub body: String,
}
