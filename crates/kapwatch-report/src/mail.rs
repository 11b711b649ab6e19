//! Email assembly and SMTP delivery.
//!
//! Message building is separated from transport so the rendered message can
//! be inspected in tests and in dry-run mode without touching the network.

use chrono::NaiveDate;
use lettre::message::{Mailbox, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use kapwatch_core::AppConfig;

use crate::error::ReportError;

/// Subject line for a report covering `(from, to)`.
#[must_use]
pub fn report_subject(from: NaiveDate, to: NaiveDate) -> String {
    format!("Günlük KAP Bildirim Raporu {from} - {to}")
}

/// Assembles the report email: From/To from config, optional Cc list, and an
/// HTML body.
///
/// # Errors
///
/// Returns [`ReportError::Address`] if a configured address does not parse,
/// or [`ReportError::Message`] if the message cannot be assembled.
pub fn build_message(
    config: &AppConfig,
    subject: &str,
    html_body: &str,
) -> Result<Message, ReportError> {
    let mut builder = Message::builder()
        .from(config.mail_user.parse::<Mailbox>()?)
        .to(config.mail_to.parse::<Mailbox>()?)
        .subject(subject);
    for cc in &config.mail_cc {
        builder = builder.cc(cc.parse::<Mailbox>()?);
    }
    let message = builder.singlepart(SinglePart::html(html_body.to_string()))?;
    Ok(message)
}

/// Delivers `message` over implicit-TLS SMTP using the configured host, port,
/// and credentials.
///
/// # Errors
///
/// Returns [`ReportError::Smtp`] on connection, authentication, or delivery
/// failure.
pub async fn send_message(config: &AppConfig, message: Message) -> Result<(), ReportError> {
    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        .port(config.smtp_port)
        .credentials(Credentials::new(
            config.mail_user.clone(),
            config.mail_pass.clone(),
        ))
        .build();

    let response = transport.send(message).await?;
    tracing::info!(code = %response.code(), "report delivered");
    Ok(())
}
