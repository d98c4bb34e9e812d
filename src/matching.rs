// src/matching.rs
//
// Cross-reference stored handles against the published list, resolve booth
// codes, and build the compact export: `A0105B02` for A01, A05, B02.

use std::collections::BTreeMap;

use crate::config::consts::HANDLE_MARKER;
use crate::specs::sheets::BoothMapping;

/// Stored handles (marker stripped) that appear verbatim in `published`.
/// Case-sensitive; keeps stored order.
pub fn find_matches(stored: &[String], published: &[String]) -> Vec<String> {
    stored
        .iter()
        .map(|h| h.strip_prefix(HANDLE_MARKER).unwrap_or(h))
        .filter(|h| published.iter().any(|p| p == h))
        .map(|h| s!(h))
        .collect()
}

/// `<letter><two digits>` → (uppercased letter, digit pair).
pub fn split_booth_code(code: &str) -> Option<(char, &str)> {
    let code = code.trim();
    let mut chars = code.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    let digits = chars.as_str();
    let ok = digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_digit());
    ok.then(|| (letter.to_ascii_uppercase(), digits))
}

/// Group digit pairs by letter, sort both as strings, concatenate.
/// Malformed codes are ignored; a code shared by two matches appears twice.
pub fn compact_export<'a, I>(codes: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: BTreeMap<char, Vec<&str>> = BTreeMap::new();
    for code in codes {
        if let Some((letter, digits)) = split_booth_code(code) {
            groups.entry(letter).or_default().push(digits);
        }
    }

    let mut out = s!();
    for (letter, mut pairs) in groups {
        pairs.sort_unstable();
        out.push(letter);
        for p in pairs {
            out.push_str(p);
        }
    }
    out
}

/// `<base>/#artists/<set>/<compact>`
pub fn preview_link(base: &str, set_slug: &str, compact: &str) -> String {
    join!(base.trim_end_matches('/'), "/#artists/", set_slug, "/", compact)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareReport {
    /// Matched handles, marker stripped, in stored order.
    pub matches: Vec<String>,
    /// (handle, booth code) for matches with a well-formed code.
    pub booths: Vec<(String, String)>,
    /// Matches whose booth code was present but malformed.
    pub skipped: usize,
    pub compact: String,
    pub link: String,
}

impl CompareReport {
    pub fn build(
        matches: Vec<String>,
        mapping: &BoothMapping,
        preview_base: &str,
        set_slug: &str,
    ) -> Self {
        let mut booths = Vec::new();
        let mut skipped = 0;
        for h in &matches {
            let Some(code) = mapping.get(h) else { continue };
            if split_booth_code(code).is_some() {
                booths.push((h.clone(), s!(code.trim())));
            } else {
                logd!("Compare: Skipping malformed booth {code:?} for {h}");
                skipped += 1;
            }
        }

        let compact = compact_export(booths.iter().map(|(_, c)| c.as_str()));
        let link = if compact.is_empty() { s!() } else { preview_link(preview_base, set_slug, &compact) };

        Self { matches, booths, skipped, compact, link }
    }

    /// Matches with booth info, as `[handle, booth]` rows for export.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.booths.iter().map(|(h, b)| vec![h.clone(), b.clone()]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|x| x.to_string()).collect()
    }

    #[test]
    fn matches_are_case_sensitive_and_ordered() {
        let stored = v(&["@Zed", "@ann", "@Bob", "bare"]);
        let published = v(&["bob", "ann", "Zed", "bare"]);
        assert_eq!(find_matches(&stored, &published), v(&["Zed", "ann", "bare"]));
    }

    #[test]
    fn only_one_marker_is_stripped() {
        assert_eq!(find_matches(&v(&["@@x"]), &v(&["@x"])), v(&["@x"]));
    }

    #[test]
    fn booth_code_shape() {
        assert_eq!(split_booth_code("a05"), Some(('A', "05")));
        assert_eq!(split_booth_code(" B12 "), Some(('B', "12")));
        assert_eq!(split_booth_code("A5"), None);
        assert_eq!(split_booth_code("A123"), None);
        assert_eq!(split_booth_code("105"), None);
        assert_eq!(split_booth_code(""), None);
    }

    #[test]
    fn compact_groups_and_sorts() {
        assert_eq!(compact_export(["A01", "B02", "A05"]), "A0105B02");
        assert_eq!(compact_export(["c10", "C02", "a99", "bad"]), "A99C0210");
    }

    #[test]
    fn shared_codes_are_kept() {
        assert_eq!(compact_export(["A01", "B02", "A01"]), "A0101B02");
        assert_eq!(compact_export(["a99", "A99"]), "A9999");
    }

    #[test]
    fn preview_link_shape() {
        assert_eq!(
            preview_link("https://site.test/", "AX2025", "A01"),
            "https://site.test/#artists/AX2025/A01"
        );
    }

    #[test]
    fn report_counts_malformed_but_not_missing() {
        let mut m = BoothMapping::default();
        m.insert("ann", "A05");
        m.insert("bob", "Hall C");
        m.insert("cid", "A01");
        let r = CompareReport::build(v(&["Ann", "bob", "cid", "dee"]), &m, "https://p", "Set");
        assert_eq!(r.booths, vec![(s!("Ann"), s!("A05")), (s!("cid"), s!("A01"))]);
        assert_eq!(r.skipped, 1);
        assert_eq!(r.compact, "A0105");
        assert_eq!(r.link, "https://p/#artists/Set/A0105");
    }

    #[test]
    fn report_keeps_booth_shared_by_two_matches() {
        let mut m = BoothMapping::default();
        m.insert("ann", "A01");
        m.insert("bob", "a01");
        m.insert("cid", "B07");
        let r = CompareReport::build(v(&["ann", "bob", "cid"]), &m, "https://p", "Set");
        assert_eq!(r.booths.len(), 3);
        assert_eq!(r.compact, "A0101B07");
        assert_eq!(r.link, "https://p/#artists/Set/A0101B07");
    }
}
