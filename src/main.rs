use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use posting_verifier::header::DEFAULT_SCAN_ROWS;
use posting_verifier::report::write_report;
use posting_verifier::{verify_file, LocationMap, VerifyConfig};

#[derive(Parser)]
#[command(name = "verify-posted-to")]
#[command(about = "Locate the header of a posting export and show each row's Posted To destination", long_about = None)]
struct Cli {
    /// Input CSV file
    #[arg(env = "POSTING_VERIFIER_INPUT")]
    input: PathBuf,

    /// How many leading rows to search for the header
    #[arg(long, default_value_t = DEFAULT_SCAN_ROWS)]
    scan_rows: usize,

    /// CSV with `state,capital` columns replacing the built-in location table
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Field delimiter
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Failures are reported on stdout; the exit status stays zero
    if let Err(e) = run(&cli) {
        println!("Error: {:#}", e);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.delimiter.is_ascii() {
        anyhow::bail!("Delimiter must be a single ASCII character: {:?}", cli.delimiter);
    }

    let locations = match &cli.locations {
        Some(path) => {
            let map = LocationMap::from_csv_path(path)
                .with_context(|| format!("Failed to load location table {}", path.display()))?;
            log::info!("Loaded {} location entries from {}", map.len(), path.display());
            map
        }
        None => LocationMap::default(),
    };

    let config = VerifyConfig {
        locations,
        scan_rows: cli.scan_rows,
        ..VerifyConfig::default()
    };

    let report = verify_file(&cli.input, cli.delimiter as u8, &config)
        .with_context(|| format!("Failed to verify {}", cli.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&report, &mut out)?;
    out.flush()?;

    Ok(())
}
