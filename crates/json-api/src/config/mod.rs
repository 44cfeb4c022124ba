//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig,
    db::DatabaseConfig,
    mail::MailConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    push::PushConfig,
    server::ServerRuntimeConfig,
    uploads::UploadConfig,
};

pub(crate) mod admin;
pub(crate) mod db;
pub(crate) mod mail;
pub(crate) mod observability;
pub(crate) mod push;
pub(crate) mod server;
pub(crate) mod uploads;

/// Forecourt JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "forecourt-json", about = "Forecourt JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Document store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Admin access settings.
    #[command(flatten)]
    pub admin: AdminConfig,

    /// Notification email settings.
    #[command(flatten)]
    pub mail: MailConfig,

    /// Push notification settings.
    #[command(flatten)]
    pub push: PushConfig,

    /// Image upload settings.
    #[command(flatten)]
    pub uploads: UploadConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use forecourt_app::notifications::SmtpSecurity;
    use testresult::TestResult;

    use crate::config::uploads::UploadStrategy;

    use super::*;

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "forecourt-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--smtp-security",
            "tls",
            "--upload-strategy",
            "blob",
            "--device-token-ttl-days",
            "7",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");
        assert_eq!(config.mail.smtp_security, SmtpSecurity::Tls);
        assert!(matches!(config.uploads.upload_strategy, UploadStrategy::Blob));
        assert_eq!(config.push.token_ttl().as_hours(), 7 * 24);

        Ok(())
    }

    #[test]
    fn token_lifetime_is_bounded() {
        for days in ["0", "36501", "10000000"] {
            let parsed = ServerConfig::try_parse_from([
                "forecourt-json",
                "--device-token-ttl-days",
                days,
            ]);

            assert!(parsed.is_err(), "{days} days should be rejected");
        }
    }
}
