use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from view building and asset loading.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: png::DecodingError,
    },

    #[error("unsupported PNG color type {color:?} in {}", path.display())]
    UnsupportedColor {
        path: PathBuf,
        color: png::ColorType,
    },

    #[error(transparent)]
    Core(#[from] polgallery_core::CoreError),
}
