//! Image Uploads
//!
//! Validates admin image uploads and stores them on local disk or in a blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Largest accepted upload: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Webp,
    Gif,
    Avif,
}

impl ImageType {
    pub const ALL: [Self; 5] = [Self::Jpeg, Self::Png, Self::Webp, Self::Gif, Self::Avif];

    /// Match a MIME type, ignoring case and parameters.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();

        Self::ALL
            .into_iter()
            .find(|kind| kind.mime().eq_ignore_ascii_case(essence))
    }

    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
            Self::Avif => "image/avif",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
            Self::Avif => "avif",
        }
    }
}

/// An uploaded file as received.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUpload {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("file is empty")]
    Empty,

    #[error("file exceeds {} bytes", MAX_UPLOAD_BYTES)]
    TooLarge(usize),

    #[error("failed to write upload")]
    Io(#[from] std::io::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from blob store: {0}")]
    UnexpectedResponse(String),
}

impl UploadError {
    /// Whether the upload itself was rejected, as opposed to failing to store it.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType(_) | Self::Empty | Self::TooLarge(_)
        )
    }
}

/// Storage strategy for accepted uploads.
#[derive(Debug, Clone)]
pub enum UploadBackend {
    /// Files written under `dir` and served back under `public_path`.
    Local { dir: PathBuf, public_path: String },

    /// Files `PUT` to a blob store which answers with their public URL.
    Blob {
        api_url: String,
        token: Zeroizing<String>,
    },
}

#[derive(Debug, Clone)]
pub struct ImageUploadService {
    backend: UploadBackend,
    http: Client,
}

impl ImageUploadService {
    #[must_use]
    pub fn new(backend: UploadBackend) -> Self {
        Self {
            backend,
            http: Client::new(),
        }
    }

    async fn store_local(
        dir: &Path,
        public_path: &str,
        filename: String,
        bytes: &[u8],
    ) -> Result<StoredUpload, UploadError> {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(dir.join(&filename), bytes).await?;

        Ok(StoredUpload {
            url: format!("{}/{filename}", public_path.trim_end_matches('/')),
            filename,
        })
    }

    async fn store_blob(
        &self,
        api_url: &str,
        token: &str,
        filename: String,
        kind: ImageType,
        bytes: Vec<u8>,
    ) -> Result<StoredUpload, UploadError> {
        let url = format!("{}/uploads/{filename}", api_url.trim_end_matches('/'));

        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .header("content-type", kind.mime())
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(UploadError::UnexpectedResponse(format!(
                "put failed with status {status}: {text}"
            )));
        }

        let parsed: BlobResponse = response.json().await?;

        Ok(StoredUpload {
            url: parsed.url,
            filename,
        })
    }
}

#[derive(Debug, Deserialize)]
struct BlobResponse {
    url: String,
}

/// Check type and size, returning the detected format.
///
/// # Errors
///
/// Returns an error for empty, oversized or non-image uploads.
pub fn validate(upload: &ImageUpload) -> Result<ImageType, UploadError> {
    let kind = ImageType::from_mime(&upload.content_type)
        .ok_or_else(|| UploadError::UnsupportedType(upload.content_type.clone()))?;

    if upload.bytes.is_empty() {
        return Err(UploadError::Empty);
    }

    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(upload.bytes.len()));
    }

    Ok(kind)
}

/// `<unix-millis>-<uuid>.<ext>`
fn generate_filename(kind: ImageType) -> String {
    format!(
        "{}-{}.{}",
        Timestamp::now().as_millisecond(),
        Uuid::now_v7().simple(),
        kind.extension()
    )
}

#[async_trait]
impl UploadService for ImageUploadService {
    async fn upload_image(&self, upload: ImageUpload) -> Result<StoredUpload, UploadError> {
        let kind = validate(&upload)?;
        let filename = generate_filename(kind);
        let size = upload.bytes.len();

        let stored = match &self.backend {
            UploadBackend::Local { dir, public_path } => {
                Self::store_local(dir, public_path, filename, &upload.bytes).await?
            }
            UploadBackend::Blob { api_url, token } => {
                self.store_blob(api_url, token, filename, kind, upload.bytes)
                    .await?
            }
        };

        info!(filename = %stored.filename, size, mime = kind.mime(), "image uploaded");

        Ok(stored)
    }
}

#[automock]
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Validate and store one image.
    async fn upload_image(&self, upload: ImageUpload) -> Result<StoredUpload, UploadError>;
}
