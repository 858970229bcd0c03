//! Page rasterization into per-page image files.
//!
//! Every page of a document is rendered to a bitmap at a requested DPI and
//! written into an output directory as `page_001.png`, `page_002.png`, ...
//! so that lexical filename order equals page order.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::DynamicImage;
use log::debug;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};

/// PDF user space is 72 points per inch; DPI maps to a render scale factor.
const POINTS_PER_INCH: f32 = 72.0;

/// Output image format for rasterized pages.
///
/// The variant chosen is also the file extension; `Jpg` and `Jpeg` both
/// encode as JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FigureFormat {
    /// PNG (default)
    #[default]
    Png,
    /// JPEG with a `.jpg` extension
    Jpg,
    /// JPEG with a `.jpeg` extension
    Jpeg,
}

impl FigureFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            FigureFormat::Png => "png",
            FigureFormat::Jpg => "jpg",
            FigureFormat::Jpeg => "jpeg",
        }
    }

    /// Encoder format for the `image` crate.
    pub fn encoder_format(self) -> image::ImageFormat {
        match self {
            FigureFormat::Png => image::ImageFormat::Png,
            FigureFormat::Jpg | FigureFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

impl FromStr for FigureFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(FigureFormat::Png),
            "jpg" => Ok(FigureFormat::Jpg),
            "jpeg" => Ok(FigureFormat::Jpeg),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for FigureFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Options for page rasterization.
#[derive(Debug, Clone)]
pub struct FigureOptions {
    /// Rasterization resolution in dots per inch. Must be positive.
    pub dpi: u32,

    /// Output image format.
    pub format: FigureFormat,
}

impl FigureOptions {
    /// Create new options with defaults (300 DPI, PNG).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rasterization resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the output image format.
    pub fn with_format(mut self, format: FigureFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            dpi: 300,
            format: FigureFormat::Png,
        }
    }
}

/// Filename for a rasterized page (1-based), zero-padded to three digits so
/// lexical sort order matches page order.
pub fn page_filename(number: usize, format: FigureFormat) -> String {
    format!("page_{:03}.{}", number, format.extension())
}

/// Write one rendered page into the output directory, overwriting any
/// existing file of the same name.
fn save_page(
    image: &DynamicImage,
    output_dir: &Path,
    number: usize,
    format: FigureFormat,
) -> Result<PathBuf> {
    let path = output_dir.join(page_filename(number, format));

    match format.encoder_format() {
        // JPEG has no alpha channel; PDFium bitmaps carry one.
        image::ImageFormat::Jpeg => image.to_rgb8().save_with_format(&path, image::ImageFormat::Jpeg)?,
        other => image.save_with_format(&path, other)?,
    }

    Ok(path)
}

/// Rasterize every page of a document into `output_dir`.
///
/// The directory is created recursively if absent. Pages are rendered
/// strictly sequentially in document order; `on_saved` is invoked with each
/// file's path after it has been written. Returns the written paths in page
/// order.
pub fn render_document<F>(
    document: &PdfDocument<'_>,
    output_dir: &Path,
    options: &FigureOptions,
    mut on_saved: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path),
{
    fs::create_dir_all(output_dir)?;

    let config = PdfRenderConfig::new().scale_page_by_factor(options.dpi as f32 / POINTS_PER_INCH);

    let mut saved = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let number = index + 1;
        let image = page.render_with_config(&config)?.as_image();
        let path = save_page(&image, output_dir, number, options.format)?;
        debug!("rendered page {} at {} DPI", number, options.dpi);
        on_saved(&path);
        saved.push(path);
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_figure_options_builder() {
        let options = FigureOptions::new()
            .with_dpi(600)
            .with_format(FigureFormat::Jpg);

        assert_eq!(options.dpi, 600);
        assert_eq!(options.format, FigureFormat::Jpg);
    }

    #[test]
    fn test_default_options() {
        let options = FigureOptions::default();
        assert_eq!(options.dpi, 300);
        assert_eq!(options.format, FigureFormat::Png);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("png".parse::<FigureFormat>().unwrap(), FigureFormat::Png);
        assert_eq!("jpg".parse::<FigureFormat>().unwrap(), FigureFormat::Jpg);
        assert_eq!("JPEG".parse::<FigureFormat>().unwrap(), FigureFormat::Jpeg);
        assert!("xyz".parse::<FigureFormat>().is_err());
        assert!("".parse::<FigureFormat>().is_err());
    }

    #[test]
    fn test_page_filename_padding() {
        assert_eq!(page_filename(1, FigureFormat::Png), "page_001.png");
        assert_eq!(page_filename(42, FigureFormat::Jpg), "page_042.jpg");
        assert_eq!(page_filename(100, FigureFormat::Jpeg), "page_100.jpeg");
        assert_eq!(page_filename(1000, FigureFormat::Png), "page_1000.png");
    }

    #[test]
    fn test_save_page_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));

        let path = save_page(&image, dir.path(), 1, FigureFormat::Png).unwrap();

        assert_eq!(path, dir.path().join("page_001.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_page_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(4, 4));

        // RGBA input must still encode: the alpha channel is stripped first.
        let jpg = save_page(&image, dir.path(), 2, FigureFormat::Jpg).unwrap();
        let jpeg = save_page(&image, dir.path(), 3, FigureFormat::Jpeg).unwrap();

        assert_eq!(jpg, dir.path().join("page_002.jpg"));
        assert_eq!(jpeg, dir.path().join("page_003.jpeg"));
        assert!(jpg.exists());
        assert!(jpeg.exists());
    }

    #[test]
    fn test_save_page_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let blank = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let gradient = DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, y| {
            image::Rgba([(x * 4) as u8, (y * 4) as u8, 128, 255])
        }));

        let first = save_page(&gradient, dir.path(), 1, FigureFormat::Png).unwrap();
        let first_len = fs::metadata(&first).unwrap().len();

        let second = save_page(&blank, dir.path(), 1, FigureFormat::Png).unwrap();
        let second_len = fs::metadata(&second).unwrap().len();

        assert_eq!(first, second);
        assert!(second_len < first_len);
    }
}
