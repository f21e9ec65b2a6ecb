use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The single recognized manifest format tag.
pub const FORMAT_TAG: &str = "img-split-v1";

const PARTS_BEGIN: &str = "PARTS_BEGIN";
const PARTS_END: &str = "PARTS_END";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartRef {
    pub file_name: String,
    pub sha256_hex: String,
}

/// Parsed split-set manifest. Immutable once parsed; chunk file names
/// are resolved against the manifest's containing directory, never the
/// caller's working directory.
#[derive(Clone, Debug)]
pub struct Manifest {
    pub format: String,
    pub original_file: String,
    pub original_size: Option<u64>,
    pub original_sha256: String,
    pub part_prefix: String,
    pub parts: Vec<PartRef>,
}

impl Manifest {
    /// Read and parse a manifest, returning it together with the
    /// absolute path it was loaded from.
    pub fn load(path: &Path) -> Result<(Manifest, PathBuf)> {
        let abs = fs::canonicalize(path)
            .with_context(|| format!("manifest not found: {}", path.display()))?;
        let text = fs::read_to_string(&abs)
            .with_context(|| format!("read manifest {}", abs.display()))?;
        Ok((Self::parse(&text)?, abs))
    }

    pub fn parse(text: &str) -> Result<Manifest> {
        let format = scalar(text, "FORMAT");
        match format.as_deref() {
            Some(FORMAT_TAG) => {}
            Some(other) => bail!("unsupported manifest format {:?} (expected {:?})", other, FORMAT_TAG),
            None => bail!("manifest has no FORMAT line (expected FORMAT={})", FORMAT_TAG),
        }

        let original_size = match scalar(text, "ORIGINAL_SIZE") {
            Some(s) => Some(
                s.parse::<u64>()
                    .with_context(|| format!("ORIGINAL_SIZE is not a non-negative integer: {:?}", s))?,
            ),
            None => None,
        };

        let parts = parse_parts(text)?;
        if parts.is_empty() {
            bail!("manifest lists no parts between {} and {}", PARTS_BEGIN, PARTS_END);
        }

        Ok(Manifest {
            format: FORMAT_TAG.to_string(),
            original_file: scalar(text, "ORIGINAL_FILE").unwrap_or_default(),
            original_size,
            original_sha256: scalar(text, "ORIGINAL_SHA256").unwrap_or_default(),
            part_prefix: scalar(text, "PART_PREFIX").unwrap_or_default(),
            parts,
        })
    }
}

/// Line-anchored `KEY=value` lookup; first match wins.
fn scalar(text: &str, key: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let rest = line.strip_prefix(key)?;
        let val = rest.strip_prefix('=')?;
        Some(val.trim().to_string())
    })
}

/// Extract the part list strictly between the marker lines. Anything
/// outside the markers is ignored even if it looks like a part line.
fn parse_parts(text: &str) -> Result<Vec<PartRef>> {
    let mut parts = Vec::new();
    let mut inside = false;
    for line in text.lines() {
        let trimmed = line.trim();
        match trimmed {
            PARTS_BEGIN => {
                inside = true;
                continue;
            }
            PARTS_END => {
                inside = false;
                continue;
            }
            _ => {}
        }
        if !inside || trimmed.is_empty() {
            continue;
        }
        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), Some(digest), None) => parts.push(PartRef {
                file_name: name.to_string(),
                sha256_hex: digest.to_string(),
            }),
            _ => bail!("malformed part line (want `<file> <sha256>`): {:?}", trimmed),
        }
    }
    Ok(parts)
}
