//! Plain text extraction with page-boundary banners.

use log::debug;
use pdfium_render::prelude::*;

use crate::error::Result;

/// Width of the `=` ruler lines framing each page banner.
pub const BANNER_WIDTH: usize = 80;

/// Format the banner preceding a page's text.
///
/// Every page, including the first, is introduced by a blank line, a ruler
/// of [`BANNER_WIDTH`] `=` characters, a `PAGE <n>` line (1-based), a second
/// ruler, and a trailing blank line:
///
/// ```text
///
/// ================================================================================
/// PAGE 3
/// ================================================================================
///
/// ```
pub fn page_banner(number: u32) -> String {
    let ruler = "=".repeat(BANNER_WIDTH);
    format!("\n{ruler}\nPAGE {number}\n{ruler}\n\n")
}

/// Extract the full text of a document, page by page, in page order.
///
/// Each page contributes its banner followed by its extracted text; a page
/// with no extractable text still contributes its banner. Extraction is
/// all-or-nothing: the first page-level failure aborts.
pub fn extract_document(document: &PdfDocument<'_>) -> Result<String> {
    let mut text = String::new();

    for (index, page) in document.pages().iter().enumerate() {
        let number = index as u32 + 1;
        text.push_str(&page_banner(number));
        text.push_str(&page.text()?.all());
        debug!("extracted text for page {number}");
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_banner_shape() {
        let banner = page_banner(1);
        let lines: Vec<&str> = banner.split('\n').collect();

        // Leading blank line, two 80-char rulers around the page line,
        // trailing blank line.
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=".repeat(80));
        assert_eq!(lines[2], "PAGE 1");
        assert_eq!(lines[3], "=".repeat(80));
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_page_banner_numbering() {
        assert!(page_banner(1).contains("PAGE 1\n"));
        assert!(page_banner(42).contains("PAGE 42\n"));
        assert!(page_banner(100).contains("PAGE 100\n"));
    }
}
