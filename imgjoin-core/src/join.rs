use crate::manifest::PartRef;
use crate::natsort::natural_cmp;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output file name used when the caller supplies none.
pub const DEFAULT_OUTPUT: &str = "reassembled.img";

/// Concatenation order for a part list: file names under natural sort.
/// Manifest line order is deliberately NOT trusted here; zero-padded
/// and unpadded numeric suffixes must land in the same numeric order.
pub fn concat_order(parts: &[PartRef]) -> Vec<String> {
    let mut names: Vec<String> = parts.iter().map(|p| p.file_name.clone()).collect();
    names.sort_by(|a, b| natural_cmp(a, b));
    names
}

/// Concatenate the parts, in natural-sort order, into `output`.
/// The output is created or truncated, so reruns start clean.
/// Returns the total number of bytes written.
pub fn join_parts(parts: &[PartRef], dir: &Path, output: &Path) -> Result<u64> {
    let out = File::create(output)
        .with_context(|| format!("create output {}", output.display()))?;
    let mut out = BufWriter::new(out);
    let mut total = 0u64;
    for name in concat_order(parts) {
        let path = dir.join(&name);
        let mut f = File::open(&path).with_context(|| format!("open part {}", path.display()))?;
        total += io::copy(&mut f, &mut out).with_context(|| format!("append part {}", name))?;
    }
    out.flush().context("flush output")?;
    Ok(total)
}
