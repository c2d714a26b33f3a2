//! Outgoing mail.
//!
//! Handlers depend on the [`Mailer`] trait; production wires [`ResendMailer`],
//! tests use an in-memory recorder.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::ResendConfig;

#[derive(Debug, thiserror::Error)]
#[error("email delivery failed: {0}")]
pub struct MailError(pub String);

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError>;
}

/// [`Mailer`] backed by the Resend API.
pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &ResendConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone() }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<(), MailError> {
        let email = CreateEmailBaseOptions::new(&self.from, [to], subject).with_html(html);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| MailError(e.to_string()))?;
        Ok(())
    }
}
