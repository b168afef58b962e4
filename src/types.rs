use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A C symbol name derived from an asset's path. See `ident::synthesize`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(code: String) -> Self {
        Identifier(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One embedded asset, as far as the page table cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub ident: Identifier,
    pub page_name: String, // Forward slashes, leading '/'
    pub length: usize,     // Bytes actually emitted, after stripping
}

/// Everything a single walk produced, in traversal order.
#[derive(Debug, Default)]
pub struct RunResult {
    pub descriptors: Vec<Descriptor>,
}

impl RunResult {
    pub fn count(&self) -> usize {
        self.descriptors.len()
    }

    pub fn identifiers(&self) -> Vec<&Identifier> {
        self.descriptors.iter().map(|d| &d.ident).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loglevel: usize, //0: off, 1: error, 2: warn, 3: info, 4: debug, 5: pedantic
    pub logfile: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            loglevel: 3,
            logfile: None,
        }
    }
}
