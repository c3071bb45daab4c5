/**
 * OTP Mailer
 *
 * Wraps a lettre SMTP transport. When no relay credentials are configured
 * the mailer is disabled and codes are written to the log instead, which
 * keeps local signups usable.
 */

use std::sync::Arc;

use chrono::Duration;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::backend::server::config::SmtpConfig;

const OTP_SUBJECT: &str = "OneChat - Email Verification OTP";

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

/// OTP mailer, cheap to clone
#[derive(Clone)]
pub struct Mailer {
    smtp: Option<Arc<SmtpMailer>>,
    otp_ttl: Duration,
}

impl Mailer {
    /// Build a mailer from optional relay settings
    ///
    /// # Errors
    /// Fails if the relay host or sender address is malformed.
    pub fn new(config: Option<&SmtpConfig>, otp_ttl: Duration) -> Result<Self, MailError> {
        let smtp = match config {
            Some(config) => {
                // 465 is implicit TLS; anything else upgrades with STARTTLS
                let builder = if config.port == 465 {
                    AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
                } else {
                    AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
                };
                let transport = builder
                    .port(config.port)
                    .credentials(Credentials::new(config.username.clone(), config.password.clone()))
                    .build();
                let from = config.username.parse::<Mailbox>()?;
                tracing::info!("SMTP mailer configured for {}:{}", config.host, config.port);
                Some(Arc::new(SmtpMailer { transport, from }))
            }
            None => None,
        };

        Ok(Self { smtp, otp_ttl })
    }

    /// Whether a relay is configured
    pub fn is_enabled(&self) -> bool {
        self.smtp.is_some()
    }

    /// Send a code and wait for the relay to accept it
    pub async fn send_otp(&self, to: &str, code: &str) -> Result<(), MailError> {
        let Some(smtp) = &self.smtp else {
            tracing::warn!("[DEV] OTP for {}: {}", to, code);
            return Ok(());
        };

        let message = Message::builder()
            .from(smtp.from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(OTP_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(otp_body(code, self.otp_ttl))?;

        smtp.transport.send(message).await?;
        tracing::info!("OTP email sent to {}", to);
        Ok(())
    }

    /// Send a code in the background
    ///
    /// Failures are logged along with the code so signup can still be
    /// completed by hand.
    pub fn dispatch_otp(&self, to: String, code: String) {
        if !self.is_enabled() {
            tracing::warn!("[DEV] OTP for {}: {}", to, code);
            return;
        }

        let mailer = self.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_otp(&to, &code).await {
                tracing::warn!("Email error: {}", e);
                tracing::warn!("[DEV] OTP for {}: {}", to, code);
            }
        });
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer").field("enabled", &self.is_enabled()).finish()
    }
}

fn otp_body(code: &str, ttl: Duration) -> String {
    format!(
        r#"<html><body>
<h2>OneChat Email Verification</h2>
<p>Your OTP code is:</p>
<h1 style="letter-spacing: 8px; color: #6C63FF;">{code}</h1>
<p>This code expires in {minutes} minutes.</p>
</body></html>"#,
        minutes = ttl.num_minutes()
    )
}
