// src/specs/sheets.rs
//
// Handle sheet:  header line, then `<anything>,<handle>,…` per line.
//                Read with a plain line/comma split, column 1.
// Booth sheet:   `<artist>,<booth>,<profile link>,…`, quoted fields allowed.
//                Read with the full tokenizer; columns are positional.

use std::collections::HashMap;

use crate::config::consts::{FOLLOWING_HOSTS, HANDLE_MARKER};
use crate::core::handle::is_valid_body;
use crate::core::sanitize::strip_bom;
use crate::csv::parse_rows;

pub const HANDLE_COL: usize = 1;
pub const BOOTH_COL: usize = 1;
pub const LINK_COL: usize = 2;

/// Handles as published, in sheet order. No case folding.
pub fn parse_handle_sheet(text: &str) -> Vec<String> {
    strip_bom(text)
        .split('\n')
        .skip(1)
        .filter_map(|line| {
            let col = line.split(',').nth(HANDLE_COL)?;
            if col.is_empty() { None } else { Some(s!(col.trim())) }
        })
        .collect()
}

/// Lowercased handle body → booth code (as written in the sheet, trimmed).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoothMapping {
    map: HashMap<String, String>,
}

impl BoothMapping {
    pub fn insert(&mut self, handle: &str, booth: &str) {
        self.map.insert(handle.to_ascii_lowercase(), s!(booth));
    }

    /// Case-insensitive lookup by bare handle.
    pub fn get(&self, handle: &str) -> Option<&str> {
        self.map.get(&handle.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Rows with both a booth code and a parseable profile link; later rows
/// overwrite earlier ones for the same account.
pub fn parse_booth_sheet(text: &str) -> BoothMapping {
    let mut out = BoothMapping::default();
    for row in parse_rows(strip_bom(text), ',') {
        let booth = row.get(BOOTH_COL).map(|s| s.trim()).unwrap_or("");
        if booth.is_empty() { continue; }
        let Some(handle) = row.get(LINK_COL).and_then(|l| profile_link_handle(l)) else { continue };
        out.insert(&handle, booth);
    }
    out
}

/// Bare handle from `@name`, `https://x.com/name`, `twitter.com/name/`, …
pub fn profile_link_handle(link: &str) -> Option<String> {
    let link = link.trim();

    if let Some(body) = link.strip_prefix(HANDLE_MARKER) {
        return is_valid_body(body).then(|| s!(body));
    }

    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .unwrap_or(link);
    let (host, path) = rest.split_once('/')?;
    let host = host.to_ascii_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("mobile."))
        .unwrap_or(&host);
    if !FOLLOWING_HOSTS.contains(&host) {
        return None;
    }

    let path = path.split(['?', '#']).next().unwrap_or("");
    let body = path.split('/').next().unwrap_or("");
    is_valid_body(body).then(|| s!(body))
}
