mod config;
mod grid;
mod pdf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid::generate_coordinate_test_pdf;

/// Render a one-page PDF with a coordinate grid and three labeled targets.
#[derive(Parser, Debug)]
#[command(name = "coordinate_grid", version)]
#[command(
    about = "Render test_coordinate_grid.pdf into the current directory.",
    long_about = None
)]
struct Args {}

fn init_logging() {
    // Diagnostics go to stderr so stdout only carries the result line
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    // Render and save the grid page, then report the file name
    let path = generate_coordinate_test_pdf()?;
    tracing::debug!(path = %path.display(), "done");
    Ok(())
}

fn main() {
    // No options besides --help and --version
    let _args = Args::parse();
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
