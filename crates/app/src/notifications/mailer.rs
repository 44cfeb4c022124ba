//! SMTP mailer.

use async_trait::async_trait;
use clap::ValueEnum;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    address::AddressError,
    message::{Mailbox, MultiPart},
    transport::smtp::{self, authentication::Credentials},
};
use mockall::automock;
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroizing;

use crate::notifications::Notification;

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SmtpSecurity {
    /// Implicit TLS, usually port 465.
    Tls,

    /// Plain connection upgraded with STARTTLS, usually port 587.
    #[default]
    Starttls,

    /// Unencrypted. Local relays and test servers only.
    None,
}

/// SMTP connection settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<Zeroizing<String>>,
    pub security: SmtpSecurity,

    /// Sender mailbox, e.g. `Forecourt <noreply@example.com>`.
    pub from: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] AddressError),

    #[error("failed to build message")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error")]
    Smtp(#[from] smtp::Error),
}

#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a pooled SMTP transport. No connection is made until the first send.
    ///
    /// # Errors
    ///
    /// Returns an error when the sender is not a valid mailbox or the TLS setup fails.
    pub fn new(config: SmtpConfig) -> Result<Self, MailerError> {
        let from: Mailbox = config.from.parse()?;

        let mut builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?,
            SmtpSecurity::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            }
            SmtpSecurity::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
        };

        if let Some(port) = config.port {
            builder = builder.port(port);
        }

        if let (Some(username), Some(password)) = (config.username, config.password) {
            builder = builder.credentials(Credentials::new(username, password.to_string()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, notification: &Notification) -> Result<(), MailerError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse()?)
            .subject(&notification.subject)
            .multipart(MultiPart::alternative_plain_html(
                notification.body.clone(),
                notification.html_body(),
            ))?;

        let response = self.transport.send(message).await?;

        debug!(code = %response.code(), "smtp accepted message");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a notification as a plain text and HTML email.
    async fn send(&self, to: &str, notification: &Notification) -> Result<(), MailerError>;
}
