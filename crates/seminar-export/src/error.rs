use thiserror::Error;

use seminar_core::error::{DecodeError, ExtractError};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("invalid report styles: {0}")]
    InvalidStyles(String),
}

/// Any failure between receiving CSV bytes and holding a finished PDF.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
