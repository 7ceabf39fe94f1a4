use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use workgen::output::OUTPUT_FILE;

#[derive(Parser)]
#[command(
    name = "workgen",
    about = "Generate a synthetic employee work-history dataset as CSV",
    version
)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::init();
    Cli::parse();

    let mut rng = StdRng::from_os_rng();
    let records = workgen::generate::generate(&mut rng);

    workgen::output::write_csv_file(OUTPUT_FILE, &records)
        .with_context(|| format!("failed to write {OUTPUT_FILE}"))?;

    println!("CSV file created with {} records", records.len());
    println!("File saved as: {OUTPUT_FILE}");
    Ok(())
}
