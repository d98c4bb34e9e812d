// src/core/handle.rs
//
// Handles: `@` followed by 1..=15 ASCII letters, digits or underscores.
// Case is kept as written; booth lookups fold it themselves.

use std::collections::HashSet;
use std::fmt;

use crate::config::consts::{HANDLE_MARKER, HANDLE_MAX_LEN};

#[inline]
fn is_body_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True for a bare handle body (no marker).
pub fn is_valid_body(s: &str) -> bool {
    !s.is_empty() && s.len() <= HANDLE_MAX_LEN && s.chars().all(is_body_char)
}

/// True for a full marker-prefixed handle.
pub fn is_handle(s: &str) -> bool {
    s.strip_prefix(HANDLE_MARKER).is_some_and(is_valid_body)
}

/// `/<body>` with nothing after the single segment → `<body>`.
pub fn body_from_path(href: &str) -> Option<&str> {
    let body = href.strip_prefix('/')?;
    is_valid_body(body).then_some(body)
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(String);

impl Handle {
    /// Accepts `@name` only.
    pub fn parse(s: &str) -> Option<Self> {
        is_handle(s).then(|| Self(s!(s)))
    }

    /// Prefix a bare body with the marker, then validate.
    pub fn from_body(body: &str) -> Option<Self> {
        let mut full = String::with_capacity(body.len() + 1);
        full.push(HANDLE_MARKER);
        full.push_str(body);
        Self::parse(&full)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique handles in first-seen order. Only grows.
#[derive(Clone, Debug, Default)]
pub struct HandleSet {
    order: Vec<Handle>,
    seen: HashSet<Handle>,
}

impl HandleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the handle was not present yet.
    pub fn insert(&mut self, h: Handle) -> bool {
        if self.seen.contains(&h) {
            return false;
        }
        self.seen.insert(h.clone());
        self.order.push(h);
        true
    }

    /// Merge and return how many were new.
    pub fn extend<I: IntoIterator<Item = Handle>>(&mut self, it: I) -> usize {
        it.into_iter().filter(|h| self.insert(h.clone())).count()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.order.iter().map(|h| s!(h.as_str())).collect()
    }
}

impl FromIterator<Handle> for HandleSet {
    fn from_iter<I: IntoIterator<Item = Handle>>(it: I) -> Self {
        let mut set = HandleSet::new();
        set.extend(it);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_marker_and_word_chars() {
        assert!(is_handle("@abc_123"));
        assert!(is_handle("@A"));
        assert!(is_handle("@fifteen_chars15"));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(!is_handle("@this-has-dash"));
        assert!(!is_handle("@sixteen_chars_16"));
        assert!(!is_handle("abc"));
        assert!(!is_handle("@"));
        assert!(!is_handle("@héllo"));
    }

    #[test]
    fn path_must_be_single_segment() {
        assert_eq!(body_from_path("/abc_123"), Some("abc_123"));
        assert_eq!(body_from_path("/abc/followers"), None);
        assert_eq!(body_from_path("/abc?x=1"), None);
        assert_eq!(body_from_path("/"), None);
        assert_eq!(body_from_path("abc"), None);
        assert_eq!(body_from_path("/sixteen_chars_16"), None);
    }

    #[test]
    fn case_is_kept() {
        let h = Handle::from_body("MixedCase").unwrap();
        assert_eq!(h.as_str(), "@MixedCase");
        assert_eq!(h.to_string(), "@MixedCase");
    }

    #[test]
    fn set_dedups_and_keeps_order() {
        let mut set = HandleSet::new();
        let a = Handle::parse("@a").unwrap();
        let b = Handle::parse("@b").unwrap();
        assert_eq!(set.extend([b.clone(), a.clone(), b.clone()]), 2);
        assert!(!set.insert(a));
        assert_eq!(set.to_strings(), vec!["@b", "@a"]);
    }
}
