use std::path::PathBuf;
use thiserror::Error;

/// The main error type for iconforge operations.
///
/// Every failure during an archive save is terminal: the first error anywhere
/// in the compilation pass aborts the whole save and surfaces here with the
/// underlying OS reason attached. Directories and assets written before the
/// failure are left on disk.
#[derive(Debug, Error)]
pub enum IconForgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("icon '{name}' has an unknown type")]
    InvalidType { name: String },

    #[error("icon '{name}' has invalid dimensions {width}x{height}")]
    InvalidDimensions {
        name: String,
        width: u32,
        height: u32,
    },

    #[error("failed to copy icon asset {src} to {dst}: {source}")]
    CopyFailure {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {path}: {source}")]
    CreationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode archive metadata: {0}")]
    MetaEncode(#[from] serde_json::Error),

    #[error("could not read image dimensions from {path}: {source}")]
    DimensionProbe {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },
}
