use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Invalid asset name: {0}")]
    InvalidAssetName(String),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Page rendering failed: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match self {
            WebError::InvalidAssetName { .. } => StatusCode::BAD_REQUEST,
            WebError::AssetNotFound { .. } => StatusCode::NOT_FOUND,
            WebError::Render { .. } | WebError::Config { .. } | WebError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (status, self.to_string()).into_response()
    }
}
