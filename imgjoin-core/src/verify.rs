use crate::digest;
use crate::manifest::Manifest;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of checking the reassembled file against the manifest.
/// A digest mismatch is fatal and never reaches this struct; the size
/// check is advisory only.
#[derive(Debug, Clone)]
pub struct OutputReport {
    pub abs_path: PathBuf,
    pub size: u64,
    pub size_check: SizeCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCheck {
    Ok,
    /// Manifest carried no ORIGINAL_SIZE; size verification skipped.
    Skipped,
    Mismatch { expected: u64, actual: u64 },
}

/// Check every part listed in the manifest against the directory that
/// contains the manifest.
///
/// Missing files are collected and reported together in one error so a
/// user restoring a multi-part set sees the full list at once. A digest
/// mismatch on a part that IS present aborts immediately with expected
/// vs. actual, before any later part is read.
pub fn verify_parts(manifest: &Manifest, dir: &Path) -> Result<()> {
    let mut missing: Vec<String> = Vec::new();
    for part in &manifest.parts {
        let path = dir.join(&part.file_name);
        if !path.exists() {
            missing.push(part.file_name.clone());
            continue;
        }
        let actual = digest::sha256_file(&path)?;
        if !actual.eq_ignore_ascii_case(&part.sha256_hex) {
            bail!(
                "part {} digest mismatch: expected {}, got {}",
                part.file_name,
                part.sha256_hex,
                actual
            );
        }
    }
    if !missing.is_empty() {
        bail!("{} part(s) missing from {}: {}", missing.len(), dir.display(), missing.join(", "));
    }
    Ok(())
}

/// Final whole-file check: the reassembled output's digest must equal
/// the manifest's ORIGINAL_SHA256. On mismatch the output is left on
/// disk for inspection. Size is a secondary advisory check.
pub fn verify_output(manifest: &Manifest, output: &Path) -> Result<OutputReport> {
    let actual = digest::sha256_file(output)?;
    if !actual.eq_ignore_ascii_case(&manifest.original_sha256) {
        bail!(
            "reassembled file digest mismatch: expected {}, got {} (output kept at {})",
            manifest.original_sha256,
            actual,
            output.display()
        );
    }
    let size = fs::metadata(output)
        .with_context(|| format!("stat {}", output.display()))?
        .len();
    let size_check = match manifest.original_size {
        None => SizeCheck::Skipped,
        Some(expected) if expected == size => SizeCheck::Ok,
        Some(expected) => SizeCheck::Mismatch { expected, actual: size },
    };
    let abs_path = fs::canonicalize(output)
        .with_context(|| format!("resolve {}", output.display()))?;
    Ok(OutputReport { abs_path, size, size_check })
}
