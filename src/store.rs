// src/store.rs
//
// Flat key-value blob persisted as one JSON object. Handles and every
// preference live under their own key so each can be missing or reset
// independently.

use std::{fs, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::config::{consts::*, options::Preferences};
use crate::error::Result;

#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    data: Map<String, Value>,
}

impl KvStore {
    /// Open the blob at `path`. Missing or unreadable content starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Map<String, Value>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    loge!("Store: {} is corrupt, starting empty ({e})", path.display());
                    Map::new()
                }
            },
            Err(_) => {
                logd!("Store: {} not found, starting empty", path.display());
                Map::new()
            }
        };
        Self { path, data }
    }

    /// `<dir>/storage.json`
    pub fn open_in(dir: &Path) -> Self {
        Self::open(dir.join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Typed read; a value of the wrong shape reads as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let v = self.data.get(key)?;
        match serde_json::from_value(v.clone()) {
            Ok(t) => Some(t),
            Err(e) => {
                logd!("Store: Ignoring malformed {key} ({e})");
                None
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        self.data.insert(s!(key), serde_json::to_value(value)?);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    /// Write through a temp file so a crash never leaves half a blob.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.data)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/* ---------------- Handles ---------------- */

pub fn load_handles(store: &KvStore) -> Vec<String> {
    store.get(KEY_HANDLES).unwrap_or_default()
}

pub fn save_handles(store: &mut KvStore, handles: &[String]) -> Result<()> {
    store.set(KEY_HANDLES, handles)?;
    store.save()?;
    logf!("Store: Saved {} handle(s) → {}", handles.len(), store.path().display());
    Ok(())
}

pub fn clear_handles(store: &mut KvStore) -> Result<()> {
    store.remove(KEY_HANDLES);
    store.save()
}

/* ---------------- Preferences ---------------- */

pub fn load_preferences(store: &KvStore) -> Preferences {
    let d = Preferences::default();
    Preferences {
        scroll_step: store.get(KEY_SCROLL_STEP).unwrap_or(d.scroll_step),
        delay_ms: store.get(KEY_DELAY).unwrap_or(d.delay_ms),
        sheet_set_index: store.get(KEY_SHEET_SET).unwrap_or(d.sheet_set_index),
        auto_compare: store.get(KEY_AUTO_COMPARE).unwrap_or(d.auto_compare),
        show_matches: store.get(KEY_SHOW_MATCHES).unwrap_or(d.show_matches),
        copy_link: store.get(KEY_COPY_LINK).unwrap_or(d.copy_link),
    }
    .clamped()
}

pub fn save_preferences(store: &mut KvStore, p: &Preferences) -> Result<()> {
    store.set(KEY_SCROLL_STEP, p.scroll_step)?;
    store.set(KEY_DELAY, p.delay_ms)?;
    store.set(KEY_SHEET_SET, p.sheet_set_index)?;
    store.set(KEY_AUTO_COMPARE, p.auto_compare)?;
    store.set(KEY_SHOW_MATCHES, p.show_matches)?;
    store.set(KEY_COPY_LINK, p.copy_link)?;
    store.save()
}

/// Drop every preference key; stored handles are kept.
pub fn reset_preferences(store: &mut KvStore) -> Result<Preferences> {
    for key in [KEY_SCROLL_STEP, KEY_DELAY, KEY_SHEET_SET, KEY_AUTO_COMPARE, KEY_SHOW_MATCHES, KEY_COPY_LINK] {
        store.remove(key);
    }
    store.save()?;
    Ok(Preferences::default())
}
