//! Static tool configuration (`config.yml`).
//!
//! Shape:
//!   servers:       mapping of alias -> network address
//!   dev_password:  shared secret printed as a hint before remote sessions
//!
//! Loaded once per invocation, immutable afterwards. Alias lookup is an
//! exact, case-sensitive match; a miss yields `UnknownAlias` and the caller
//! must not start any external process.

use crate::log_debug;
use crate::utils::ContextExt;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.yml";

/// Environment override for the config file location.
pub const CONFIG_ENV: &str = "BRO_CONFIG";

/// Parsed configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server registry: alias -> address. Case-sensitive keys.
    #[serde(default)]
    pub servers: BTreeMap<String, String>,
    /// Shared dev secret associated with the registry.
    #[serde(default)]
    pub dev_password: String,
}

/// Lookup failure carrying the alias that missed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlias(pub String);

impl fmt::Display for UnknownAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: server not found in the list", self.0)
    }
}

impl std::error::Error for UnknownAlias {}

impl Config {
    /// Parse a YAML document.
    pub fn from_yaml(doc: &str) -> Result<Self> {
        serde_yaml::from_str(doc).ctx("Failed to parse config YAML")
    }

    /// Load from the discovered config path (env override, then next to the
    /// executable, then the current directory).
    pub fn load() -> Result<Self> {
        let path = discover_path();
        log_debug!("loading config from '{}'", path.display());
        let doc = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml(&doc)
    }

    /// Exact-match alias resolution. No fuzzy matching, no case folding.
    pub fn resolve(&self, alias: &str) -> Result<&str, UnknownAlias> {
        self.servers
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| UnknownAlias(alias.to_string()))
    }
}

/// Candidate order: $BRO_CONFIG, `config.yml` beside the executable,
/// `config.yml` in the CWD. The first existing file wins; if none exist the
/// last candidate is returned so the read error names a concrete path.
fn discover_path() -> PathBuf {
    if let Ok(p) = std::env::var(CONFIG_ENV)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(dir.join(CONFIG_FILE));
    }
    candidates.push(PathBuf::from(CONFIG_FILE));
    for c in &candidates {
        if c.is_file() {
            return c.clone();
        }
    }
    candidates.pop().unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}
