//! PNG assets read from the configured directory on every request.

use std::io::ErrorKind;
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::WebError;

#[derive(Debug, Clone)]
pub struct Assets {
    dir: PathBuf,
}

impl Assets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read a PNG by bare file name.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, WebError> {
        if !is_safe_name(name) {
            return Err(WebError::InvalidAssetName(name.to_string()));
        }

        let path = self.dir.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                debug!(asset = name, bytes = bytes.len(), "read asset");
                Ok(bytes)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(WebError::AssetNotFound(name.to_string()))
            }
            Err(e) => Err(WebError::Io(e)),
        }
    }

    /// Check an asset is present without reading it.
    pub async fn ensure_exists(&self, name: &str) -> Result<(), WebError> {
        if !is_safe_name(name) {
            return Err(WebError::InvalidAssetName(name.to_string()));
        }

        match tokio::fs::metadata(self.dir.join(name)).await {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(WebError::AssetNotFound(name.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(WebError::AssetNotFound(name.to_string()))
            }
            Err(e) => Err(WebError::Io(e)),
        }
    }

    /// The PNG as an inline `data:` URI, for use in page CSS.
    pub async fn data_uri(&self, name: &str) -> Result<String, WebError> {
        let bytes = self.read(name).await?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
    }
}

/// Bare `*.png` file names only: no separators, no hidden files, no `..`.
fn is_safe_name(name: &str) -> bool {
    !name.starts_with('.')
        && name.ends_with(".png")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        && !name.contains("..")
}
