// src/config/sheets.rs
//
// The sheet-set document: which remote sheets to compare against.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use super::consts::DEFAULT_PREVIEW_BASE;

/// A named pair of remote sheets: the handle list and the booth mapping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSet {
    pub name: String,
    pub handles_url: String,
    pub booths_url: String,
}

impl SheetSet {
    /// Name as it appears in preview links (all whitespace removed).
    pub fn slug(&self) -> String {
        self.name.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetConfig {
    #[serde(default = "default_preview_base")]
    pub preview_base: String,
    pub sheet_sets: Vec<SheetSet>,
}

fn default_preview_base() -> String {
    s!(DEFAULT_PREVIEW_BASE)
}

impl SheetConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: SheetConfig = serde_json::from_str(text)?;
        if cfg.sheet_sets.is_empty() {
            return Err(Error::Config(s!("no sheet sets defined")));
        }
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let cfg = Self::from_json(&text)?;
        logf!("Config: Loaded {} sheet set(s) from {}", cfg.sheet_sets.len(), path.display());
        Ok(cfg)
    }

    /// Selected set, falling back to the first one when the index is stale.
    pub fn set(&self, index: usize) -> Result<&SheetSet> {
        self.sheet_sets
            .get(index)
            .or_else(|| self.sheet_sets.first())
            .ok_or_else(|| Error::Config(s!("no sheet sets defined")))
    }
}
