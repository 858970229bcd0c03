//! extract_figures - rasterize every page of a PDF into an image directory.
//!
//! Pages land as `page_001.png`, `page_002.png`, ... for manual review and
//! cropping into figures; the tool never tries to detect figures itself.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use colored::Colorize;

use studypdf::{figures, Backend, FigureFormat, FigureOptions};

#[derive(Parser)]
#[command(name = "extract_figures")]
#[command(version)]
#[command(about = "Extract every page of a PDF as an image file", long_about = None)]
struct Args {
    /// Path to the source PDF file
    #[arg(long, value_name = "PATH")]
    pdf: PathBuf,

    /// Output directory for extracted images (created if absent)
    #[arg(long, value_name = "DIR")]
    output: PathBuf,

    /// Resolution in DPI
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,

    /// Output image format
    #[arg(long, value_enum, default_value = "png")]
    fmt: FmtArg,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FmtArg {
    /// PNG
    Png,
    /// JPEG with a .jpg extension
    Jpg,
    /// JPEG with a .jpeg extension
    Jpeg,
}

impl From<FmtArg> for FigureFormat {
    fn from(fmt: FmtArg) -> Self {
        match fmt {
            FmtArg::Png => FigureFormat::Png,
            FmtArg::Jpg => FigureFormat::Jpg,
            FmtArg::Jpeg => FigureFormat::Jpeg,
        }
    }
}

fn parse_args() -> Args {
    // Exit status 1 on usage errors, before any file I/O.
    Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        let code = match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        std::process::exit(code);
    })
}

fn run(args: &Args) -> studypdf::Result<usize> {
    let options = FigureOptions::new()
        .with_dpi(args.dpi)
        .with_format(args.fmt.into());

    println!("Extracting figures from: {}", args.pdf.display());
    println!("Output directory: {}", args.output.display());
    println!("Resolution: {} DPI\n", options.dpi);

    let backend = Backend::new()?;
    let document = backend.open(&args.pdf)?;
    let saved = figures::render_document(&document, &args.output, &options, |path| {
        println!("{} Saved: {}", "✓".green(), path.display());
    })?;

    Ok(saved.len())
}

fn main() {
    env_logger::init();

    let args = parse_args();

    if !args.pdf.exists() {
        eprintln!(
            "{}: PDF file not found: {}",
            "Error".red().bold(),
            args.pdf.display()
        );
        std::process::exit(1);
    }

    match run(&args) {
        Ok(count) => {
            println!(
                "\n{} Successfully extracted {} pages",
                "✓".green().bold(),
                count
            );
            println!("\n{}", "Next steps:".bold());
            println!("1. Review extracted images in {}", args.output.display());
            println!("2. Identify figures you want to use");
            println!("3. Crop and rename relevant figures (e.g., page_005.png -> fig_1_5.png)");
            println!("4. Delete full-page images you don't need");
            println!("5. Reference figures in your flashcards with relative paths");
        }
        Err(e) => {
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            eprintln!("\nMake sure the PDFium library is available:");
            eprintln!("  download a prebuilt libpdfium (e.g. from the pdfium-binaries releases)");
            eprintln!("  and place it in the working directory or a system library path");
            std::process::exit(1);
        }
    }
}
