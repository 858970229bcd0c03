//! extract_pdf_text - dump a PDF's text to stdout, page by page.
//!
//! Each page is preceded by a `PAGE <n>` banner so downstream tooling can
//! split the dump back into pages.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "extract_pdf_text")]
#[command(version)]
#[command(about = "Extract all text from a PDF file with page-boundary banners", long_about = None)]
struct Args {
    /// Path to the PDF file
    #[arg(value_name = "PDF_PATH")]
    pdf: PathBuf,
}

fn parse_args() -> Args {
    // The usage-error contract is exit status 1 with the message on stderr;
    // clap's default exit status for parse errors is 2.
    Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        let code = match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        std::process::exit(code);
    })
}

fn run(args: &Args) -> studypdf::Result<()> {
    let text = studypdf::extract_text(&args.pdf)?;

    // Single buffered write once the whole document has extracted; nothing
    // reaches stdout if any page fails.
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{text}")?;
    out.flush()?;

    Ok(())
}

fn main() {
    env_logger::init();

    let args = parse_args();

    if let Err(e) = run(&args) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_accepts_single_path() {
        let args = Args::try_parse_from(["extract_pdf_text", "notes.pdf"]).unwrap();
        assert_eq!(args.pdf, PathBuf::from("notes.pdf"));
    }

    #[test]
    fn test_rejects_wrong_argument_count() {
        assert!(Args::try_parse_from(["extract_pdf_text"]).is_err());
        assert!(Args::try_parse_from(["extract_pdf_text", "a.pdf", "b.pdf"]).is_err());
    }
}
