// This module owns the input catalog: the ordered list of (id, signature) pairs the
// generator walks, plus the set of ids whose wrappers use a custom ABI and are written by
// hand. The built-in table lives in horizon.rs; Catalog::parse loads the same information
// from a line-oriented text file so a catalog can be edited without rebuilding the tool.

//! Supervisor-call catalog.

mod horizon;

use crate::core::error::{GenError, GenResult};
use hashbrown::HashMap;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub signature: String,
}

impl CatalogEntry {
    /// Routine name, or the whole signature when it cannot be picked out.
    pub fn name(&self) -> &str {
        self.signature
            .split_once(' ')
            .and_then(|(_, rest)| rest.split_once('('))
            .map(|(name, _)| name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.signature)
    }
}

/// Ordered catalog plus custom-ABI exclusions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    custom_abi: HashMap<u32, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; ids must be unique.
    pub fn push(&mut self, id: u32, signature: impl Into<String>) -> GenResult<()> {
        if self.entries.iter().any(|e| e.id == id) {
            return Err(GenError::DuplicateId { id });
        }
        self.entries.push(CatalogEntry {
            id,
            signature: signature.into(),
        });
        Ok(())
    }

    /// Mark `id` as using a hand-written wrapper.
    pub fn exclude(&mut self, id: u32, name: impl Into<String>) {
        self.custom_abi.insert(id, name.into());
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_custom_abi(&self, id: u32) -> bool {
        self.custom_abi.contains_key(&id)
    }

    /// Custom-ABI ids in ascending order.
    pub fn custom_abi_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.custom_abi.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Entries whose wrappers are generated.
    pub fn generated(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|e| !self.is_custom_abi(e.id))
    }

    /// The built-in kernel catalog.
    pub fn horizon() -> Self {
        let mut catalog = Self::new();
        for &(id, signature) in horizon::SUPERVISOR_CALLS {
            catalog.entries.push(CatalogEntry {
                id,
                signature: signature.to_string(),
            });
        }
        for &(id, name) in horizon::CUSTOM_ABI {
            catalog.exclude(id, name);
        }
        catalog
    }

    /// Load a catalog from text.
    ///
    /// One entry per line as `<id> <signature>`, ids in decimal or `0x` hex.
    /// `!<id> <name>` marks a custom-ABI call. Blank lines and lines starting
    /// with `#` are ignored.
    pub fn parse(text: &str) -> GenResult<Self> {
        let mut catalog = Self::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            let line_no = index + 1;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (custom, line) = match line.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            let (id_text, rest) = line.split_once(char::is_whitespace).ok_or_else(|| {
                GenError::MalformedCatalog {
                    line: line_no,
                    reason: "expected '<id> <text>'".to_string(),
                }
            })?;
            let id = parse_id(id_text).ok_or_else(|| GenError::MalformedCatalog {
                line: line_no,
                reason: format!("bad id '{}'", id_text),
            })?;

            let rest = rest.trim();
            if custom {
                catalog.exclude(id, rest);
            } else {
                catalog.push(id, rest)?;
            }
        }

        log::debug!(
            "loaded catalog: {} entries, {} custom ABI",
            catalog.len(),
            catalog.custom_abi.len()
        );
        Ok(catalog)
    }
}

fn parse_id(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}
