//! Vitrine build-manifest injection
//!
//! The mobile build keeps its map SDK credentials in a dotenv file and
//! expects them spliced into manifest placeholders at build time. This is
//! pure value substitution: keys that the env file does not define
//! substitute the empty string, and nothing here has runtime behaviour.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from reading or parsing an env file
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed entry at line {line}")]
    Malformed { line: usize },
}

/// Key/value pairs loaded from a dotenv-style file
///
/// Supported syntax: `KEY=VALUE` per line, `#` comments, blank lines, an
/// optional `export ` prefix, and single or double quotes around the
/// value. Later occurrences of a key override earlier ones.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    values: FxHashMap<String, String>,
}

impl EnvFile {
    /// Parse env-file content from a string
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        let mut values = FxHashMap::default();
        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
            let Some((key, value)) = line.split_once('=') else {
                return Err(ManifestError::Malformed { line: index + 1 });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ManifestError::Malformed { line: index + 1 });
            }
            values.insert(key.to_string(), unquote(value.trim()).to_string());
        }
        debug!(entries = values.len(), "parsed env file");
        Ok(Self { values })
    }

    /// Read and parse an env file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Look up a key's value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Strip one matching pair of surrounding quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Substitute `${KEY}` placeholders in a manifest template
///
/// Unknown keys substitute the empty string and log a warning; an
/// unterminated `${` is copied through verbatim.
pub fn inject(template: &str, env: &EnvFile) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // Unterminated placeholder: keep the raw text.
            output.push_str(&rest[start..]);
            return output;
        };
        let key = &after[..end];
        match env.get(key) {
            Some(value) => output.push_str(value),
            None => warn!(key, "placeholder has no value in the env file"),
        }
        rest = &after[end + 1..];
    }
    output.push_str(rest);
    output
}
