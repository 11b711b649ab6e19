use thiserror::Error;

/// Errors raised while building or delivering the report email.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A configured mail address does not parse.
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP connection, authentication, or delivery failure.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
