//! Admin Config

use clap::Args;

/// Admin access settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Shared secret expected in the `x-admin-secret` header; admin routes are closed when unset
    #[arg(long, env = "ADMIN_SECRET", hide_env_values = true)]
    pub admin_secret: Option<String>,
}
