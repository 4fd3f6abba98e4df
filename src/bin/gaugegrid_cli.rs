//! CLI tool for gaugegrid - computes a gauge grid layout and outputs JSON
//!
//! Usage:
//!   gaugegrid_cli <width> <height> <num_grids>              # Output JSON to stdout
//!   gaugegrid_cli <width> <height> <num_grids> -o out.json  # Output JSON to file
//!
//! Set `RUST_LOG=debug` to see the computed row/column split on stderr.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use gaugegrid::{GridError, GridRequest};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: gaugegrid_cli <width> <height> <num_grids> [-o output.json]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    let (width, height, num_grids, output_path) = match args.as_slice() {
        [w, h, n] => (w, h, n, None),
        [w, h, n, flag, path] if flag == "-o" => (w, h, n, Some(path)),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(width, height, num_grids, output_path.map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    width: &str,
    height: &str,
    num_grids: &str,
    output_path: Option<&str>,
) -> Result<(), GridError> {
    let layout = GridRequest::parse(width, height, num_grids)?.layout()?;
    let json = serde_json::to_string_pretty(&layout)?;

    match output_path {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("Written: {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
