//! PDFium engine binding and document loading.
//!
//! Both tools talk to PDFium through this seam: text extraction reads page
//! text, figure extraction rasterizes pages. The dynamic library is resolved
//! at startup, trying the process working directory before the system
//! library paths, so a locally dropped `libpdfium` takes precedence.

use std::path::Path;

use log::debug;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};

/// Handle to the PDFium engine.
///
/// Owns the library binding; documents opened through [`Backend::open`]
/// borrow it and must be dropped before the backend itself.
pub struct Backend {
    pdfium: Pdfium,
}

impl Backend {
    /// Bind to the PDFium dynamic library.
    ///
    /// Resolution order: the current working directory, then the system
    /// library paths.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| {
                Error::Backend(format!(
                    "failed to load the PDFium library ({e}); install libpdfium or place it in the working directory"
                ))
            })?;

        debug!("PDFium binding initialized");

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<PdfDocument<'_>> {
        let path = path.as_ref();
        let document = self.pdfium.load_pdf_from_file(path, None)?;
        debug!(
            "opened {} ({} pages)",
            path.display(),
            document.pages().len()
        );
        Ok(document)
    }
}
