//! Remote agent registry loading
//!
//! The registry is a plain text file with one `name,base_url` record per
//! line. There is no header, quoting, or comment syntax.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{ConfigError, Result};

/// Field delimiter within a registry line
pub const DELIMITER: char = ',';

/// A single `name,base_url` entry from the registry file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRecord {
    pub name: String,
    pub base_url: String,
}

/// Read and parse the registry at `path`.
///
/// The file is read in full before parsing starts, so the handle is
/// released even when a record turns out to be malformed.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Vec<RegistryRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::RegistryNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::RegistryRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let records = parse_registry(&content)?;
    debug!("Loaded {} registry records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse registry text into records, in file order.
///
/// Blank lines after the last record are tolerated; a blank line between
/// records is malformed.
pub fn parse_registry(content: &str) -> Result<Vec<RegistryRecord>> {
    let lines: Vec<&str> = content.lines().map(str::trim_end).collect();
    let Some(last) = lines.iter().rposition(|line| !line.is_empty()) else {
        return Ok(Vec::new());
    };
    if last + 1 < lines.len() {
        warn!("Ignoring {} trailing blank registry lines", lines.len() - last - 1);
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (idx, line) in lines[..=last].iter().enumerate() {
        let line_no = idx + 1;
        let record = parse_line(line_no, line)?;
        if !seen.insert(record.name.clone()) {
            return Err(ConfigError::DuplicateName {
                line: line_no,
                name: record.name,
            });
        }

        debug!("Registry record {}: {} -> {}", line_no, record.name, record.base_url);
        records.push(record);
    }

    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> Result<RegistryRecord> {
    let malformed = |reason: &str| ConfigError::MalformedRecord {
        line: line_no,
        content: line.to_string(),
        reason: reason.to_string(),
    };

    if line.is_empty() {
        return Err(malformed("blank line"));
    }

    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    let (name, base_url) = match fields.as_slice() {
        [name, base_url] => (*name, *base_url),
        [_] => return Err(malformed("expected `name,base_url`, found no delimiter")),
        _ => {
            return Err(malformed(&format!(
                "expected 2 fields, found {}",
                fields.len()
            )))
        }
    };

    if name.is_empty() {
        return Err(malformed("agent name is empty"));
    }
    if base_url.is_empty() {
        return Err(malformed("base URL is empty"));
    }

    validate_base_url(base_url).map_err(|reason| ConfigError::InvalidBaseUrl {
        line: line_no,
        url: base_url.to_string(),
        reason,
    })?;

    Ok(RegistryRecord {
        name: name.to_string(),
        base_url: base_url.to_string(),
    })
}

/// Check that `base_url` can be joined with a path suffix by plain
/// concatenation.
fn validate_base_url(base_url: &str) -> std::result::Result<(), String> {
    let url = Url::parse(base_url).map_err(|e| e.to_string())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme `{}`", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err("query and fragment are not allowed".to_string());
    }
    if base_url.ends_with('/') {
        return Err("trailing slash".to_string());
    }

    Ok(())
}
