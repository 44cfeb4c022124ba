//! Mail Config

use clap::Args;
use forecourt_app::notifications::{SmtpConfig, SmtpSecurity};
use zeroize::Zeroizing;

/// Notification email settings. Email is skipped unless a host and admin address are set.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// SMTP relay host
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP port; the security mode's default when unset
    #[arg(long, env = "SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// SMTP username
    #[arg(long, env = "SMTP_USER")]
    pub smtp_user: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASS", hide_env_values = true)]
    pub smtp_pass: Option<String>,

    /// Connection security (tls, starttls, none)
    #[arg(long, env = "SMTP_SECURITY", value_enum, default_value_t = SmtpSecurity::Starttls)]
    pub smtp_security: SmtpSecurity,

    /// Sender mailbox
    #[arg(long, env = "MAIL_FROM", default_value = "Forecourt <noreply@localhost>")]
    pub mail_from: String,

    /// Recipient of inquiry and booking alerts
    #[arg(long, env = "ADMIN_EMAIL")]
    pub admin_email: Option<String>,
}

impl MailConfig {
    /// SMTP settings, when a host is configured.
    pub(crate) fn smtp(&self) -> Option<SmtpConfig> {
        let host = self.smtp_host.as_deref().filter(|host| !host.trim().is_empty())?;

        Some(SmtpConfig {
            host: host.to_string(),
            port: self.smtp_port,
            username: self.smtp_user.clone(),
            password: self.smtp_pass.clone().map(Zeroizing::new),
            security: self.smtp_security,
            from: self.mail_from.clone(),
        })
    }
}
