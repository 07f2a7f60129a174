use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a preview run.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to start survey workers: {0}")]
    Workers(#[source] std::io::Error),

    #[error("survey workers stopped with {remaining} blocks outstanding")]
    WorkersLost { remaining: usize },

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image buffer for {name} does not match {width}x{height}")]
    BufferSize {
        name: &'static str,
        width: u32,
        height: u32,
    },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
