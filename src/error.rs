//! Error types for a hero image run.

use std::path::PathBuf;

/// Every failure aborts the run; the variant only decides the diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum HeroImageError {
    /// Required credential is absent or blank.
    #[error("{0} environment variable is not set")]
    MissingCredential(&'static str),

    /// An optional setting was present but unusable.
    #[error("invalid value for {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// The spec list file could not be read or parsed.
    #[error("failed to load image specs from {path:?}: {source:#}")]
    Specs {
        path: PathBuf,
        source: anyhow::Error,
    },

    /// The generation API rejected the request or returned no URL.
    #[error("failed to generate image for {blog_post}: {source:#}")]
    Generation {
        blog_post: String,
        source: anyhow::Error,
    },

    /// Fetching the generated image or writing it to disk failed.
    #[error("failed to download {filename}: {source:#}")]
    Download {
        filename: String,
        source: anyhow::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HeroImageError {
    /// Returns true for errors detected before any network traffic.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential(_) | Self::InvalidConfig { .. } | Self::Specs { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HeroImageError>;
