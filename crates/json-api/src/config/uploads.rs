//! Upload Config

use std::path::PathBuf;

use clap::Args;
use forecourt_app::uploads::UploadBackend;
use zeroize::Zeroizing;

/// Where uploaded images are kept.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum UploadStrategy {
    /// Local directory served under the public path.
    Local,

    /// Remote blob store.
    Blob,
}

/// Image upload settings.
#[derive(Debug, Args)]
pub struct UploadConfig {
    /// Upload strategy (local, blob)
    #[arg(long, env = "UPLOAD_STRATEGY", value_enum, default_value_t = UploadStrategy::Local)]
    pub upload_strategy: UploadStrategy,

    /// Directory for locally stored uploads
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// URL path local uploads are served under
    #[arg(long, env = "UPLOAD_PUBLIC_PATH", default_value = "/uploads")]
    pub upload_public_path: String,

    /// Blob store API base URL
    #[arg(long, env = "BLOB_API_URL", default_value = "https://blob.vercel-storage.com")]
    pub blob_api_url: String,

    /// Blob store read/write token
    #[arg(long, env = "BLOB_READ_WRITE_TOKEN", hide_env_values = true)]
    pub blob_read_write_token: Option<String>,
}

impl UploadConfig {
    /// Storage backend for the configured strategy.
    ///
    /// # Errors
    ///
    /// Returns an error when the blob strategy is selected without a token.
    pub(crate) fn backend(&self) -> Result<UploadBackend, &'static str> {
        match self.upload_strategy {
            UploadStrategy::Local => Ok(UploadBackend::Local {
                dir: self.upload_dir.clone(),
                public_path: self.upload_public_path.clone(),
            }),
            UploadStrategy::Blob => {
                let token = self
                    .blob_read_write_token
                    .clone()
                    .filter(|token| !token.trim().is_empty())
                    .ok_or("BLOB_READ_WRITE_TOKEN is required for blob uploads")?;

                Ok(UploadBackend::Blob {
                    api_url: self.blob_api_url.clone(),
                    token: Zeroizing::new(token),
                })
            }
        }
    }
}
