//! Quadcell - a four-cell reactive sheet with a TUI

mod batch;
mod config;
mod error;
#[cfg(feature = "tui")]
mod tui;

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

fn print_usage() {
    eprintln!("Usage: quadcell [OPTIONS]");
    eprintln!();
    eprintln!("Without --set, opens the interactive sheet.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --set <CELL=TEXT>     Edit a cell and print the sheet (can be repeated)");
    eprintln!("  -c, --config <FILE>       Load settings from FILE instead of the default");
    eprintln!("  -h, --help                Print help");
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_batch(edits: &[String], config: &config::Config) -> anyhow::Result<()> {
    let snapshot = batch::run_edits(edits)?;
    print!("{}", batch::render(&snapshot, &config.display));
    Ok(())
}

#[cfg(feature = "tui")]
fn run_interactive(config: config::Config) -> anyhow::Result<()> {
    let mut app = tui::App::new(config.display);
    tui::run(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_interactive(_config: config::Config) -> anyhow::Result<()> {
    print_usage();
    anyhow::bail!("built without the terminal UI; use --set")
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut edits: Vec<String> = Vec::new();
    let mut config_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-s" | "--set" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --set requires a CELL=TEXT argument");
                    std::process::exit(1);
                }
                edits.push(args[i].to_string());
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let batch_mode = !edits.is_empty();
    // The TUI owns the terminal, so only batch mode logs.
    if batch_mode {
        init_logging();
    }

    let (config, warnings) = config::load_config(config_file.as_ref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let result = if batch_mode {
        run_batch(&edits, &config)
    } else {
        run_interactive(config)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
