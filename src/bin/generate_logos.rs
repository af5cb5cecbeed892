//! generate-logos - writes the TRON Vanity brand SVGs
//!
//! With no arguments: writes assets/logos/{logo,icon,banner,favicon}.svg
//! under the working directory and prints a summary.
//! Returns non-zero if any directory or file could not be written.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tron_vanity_logos::{Emitter, ReportFormat, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(name = "generate-logos")]
#[command(about = "Generate the TRON Vanity logo, icon, banner and favicon SVGs")]
#[command(version)]
struct Cli {
    /// Directory the SVG files are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the emission manifest as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let format = if cli.json { ReportFormat::Json } else { ReportFormat::Human };

    let emitter = Emitter::new(cli.output_dir);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match emitter.emit_all(&mut out, format) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("emission stopped: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
