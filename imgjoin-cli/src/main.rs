use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use imgjoin_core::join::{join_parts, DEFAULT_OUTPUT};
use imgjoin_core::manifest::Manifest;
use imgjoin_core::verify::{verify_output, verify_parts, SizeCheck};

#[derive(Parser)]
#[command(
    name = "imgjoin",
    version,
    about = "Reassemble a file from img-split-v1 parts and verify it"
)]
struct Cli {
    /// Path to the split-set manifest
    manifest: PathBuf,
    /// Output file for the reassembled image
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (manifest, manifest_abs) = Manifest::load(&cli.manifest)?;
    // Parts live next to the manifest, not in the caller's cwd.
    let dir = manifest_abs
        .parent()
        .context("manifest has no containing directory")?
        .to_path_buf();

    println!(
        "Manifest {}: {} part(s) of {}",
        manifest_abs.display(),
        manifest.parts.len(),
        if manifest.original_file.is_empty() { "<unnamed>" } else { manifest.original_file.as_str() }
    );

    verify_parts(&manifest, &dir)?;
    println!("All {} part(s) present and verified", manifest.parts.len());

    let written = join_parts(&manifest.parts, &dir, &cli.output)?;
    println!("Wrote {} byte(s) to {}", written, cli.output.display());

    let report = verify_output(&manifest, &cli.output)?;
    match report.size_check {
        SizeCheck::Ok => {}
        SizeCheck::Skipped => {
            println!("Warning: manifest carries no ORIGINAL_SIZE; size check skipped");
        }
        SizeCheck::Mismatch { expected, actual } => {
            println!("Warning: size mismatch (manifest {}, actual {})", expected, actual);
        }
    }
    println!("Reassembled OK: {}", report.abs_path.display());
    Ok(())
}
