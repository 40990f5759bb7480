use std::io;
use thiserror::Error;

/// Top-level error of the TextAn binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to load report: {0}")]
    Load(#[from] crate::input::LoadError),
}
