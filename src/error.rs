//! Error types for studypdf.

use std::io;
use thiserror::Error;

/// Result type alias for studypdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during PDF extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the PDF or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The PDFium dynamic library could not be located.
    #[error("PDFium library unavailable: {0}")]
    Backend(String),

    /// Failure opening, parsing, or rendering the PDF.
    #[error("PDF processing error: {0}")]
    Pdf(String),

    /// Failure encoding a rasterized page to an image file.
    #[error("Image encoding error: {0}")]
    ImageEncode(#[from] image::ImageError),

    /// An image format string outside the supported set.
    #[error("Unsupported image format: {0} (expected png, jpg, or jpeg)")]
    UnsupportedFormat(String),
}

impl From<pdfium_render::prelude::PdfiumError> for Error {
    fn from(err: pdfium_render::prelude::PdfiumError) -> Self {
        Error::Pdf(err.to_string())
    }
}
