//! # studypdf
//!
//! Extraction of study material from PDF source documents.
//!
//! Two operations, shared by the `extract_pdf_text` and `extract_figures`
//! command-line tools:
//!
//! - extract all textual content, page by page, with page-boundary banners;
//! - rasterize every page to an image file for manual inspection and
//!   cropping into figures.
//!
//! Both delegate PDF parsing and rendering to the PDFium engine; the
//! dynamic library must be available at runtime (see [`Backend::new`]).
//!
//! ## Quick Start
//!
//! ```no_run
//! use studypdf::{extract_text, extract_figures, FigureOptions};
//!
//! fn main() -> studypdf::Result<()> {
//!     // Full document text with PAGE banners
//!     let text = extract_text("chapter_1.pdf")?;
//!     println!("{}", text);
//!
//!     // One PNG per page at 300 DPI
//!     let options = FigureOptions::default();
//!     let files = extract_figures("chapter_1.pdf", "figures/chapter_1", &options)?;
//!     println!("{} pages rendered", files.len());
//!
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod error;
pub mod figures;
pub mod text;

// Re-export commonly used types
pub use backend::Backend;
pub use error::{Error, Result};
pub use figures::{FigureFormat, FigureOptions};

use std::path::{Path, PathBuf};

/// Extract the full text of a PDF file, page by page, with page banners.
///
/// # Example
///
/// ```no_run
/// use studypdf::extract_text;
///
/// let text = extract_text("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let backend = Backend::new()?;
    let document = backend.open(path)?;
    text::extract_document(&document)
}

/// Rasterize every page of a PDF file into `output_dir`.
///
/// The directory is created recursively if absent. Returns the written file
/// paths in page order.
///
/// # Example
///
/// ```no_run
/// use studypdf::{extract_figures, FigureFormat, FigureOptions};
///
/// let options = FigureOptions::new()
///     .with_dpi(600)
///     .with_format(FigureFormat::Jpg);
/// let files = extract_figures("document.pdf", "figures", &options).unwrap();
/// ```
pub fn extract_figures<P: AsRef<Path>, Q: AsRef<Path>>(
    path: P,
    output_dir: Q,
    options: &FigureOptions,
) -> Result<Vec<PathBuf>> {
    let backend = Backend::new()?;
    let document = backend.open(path)?;
    figures::render_document(&document, output_dir.as_ref(), options, |_| {})
}
