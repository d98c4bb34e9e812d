// src/core/html.rs
//
// Tolerant, case-insensitive scanning over captured HTML. No DOM: we look
// for open tags, read their attributes, and pair them with the matching
// close tag by counting nesting of the same tag name.

use super::sanitize::decode_entities;

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte offset just past the `>` closing the open tag at `start`.
/// Quoted attribute values may contain `>`.
pub fn open_tag_end(s: &str, start: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut in_s = false;
    let mut in_d = false;
    let mut i = start + 1;
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

/// Tag name of the open tag at `start` (`<div …` → `div`), lowercased.
pub fn tag_name(s: &str, start: usize) -> Option<String> {
    let rest = s.get(start + 1..)?;
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if name.is_empty() { None } else { Some(to_lower(&name)) }
}

/// Is `lc[at..]` an open tag of exactly `name` (not a longer tag name)?
fn is_open_of(lc: &str, at: usize, name: &str) -> bool {
    let b = lc.as_bytes();
    if b.get(at) != Some(&b'<') || !lc[at + 1..].starts_with(name) {
        return false;
    }
    matches!(b.get(at + 1 + name.len()), Some(b' ' | b'>' | b'/' | b'\t' | b'\n' | b'\r'))
}

/// Start offsets of every `<name …>` open tag in `s`.
pub fn open_tags(s: &str, name: &str) -> Vec<usize> {
    let lc = to_lower(s);
    let name = to_lower(name);
    let mut out = Vec::new();
    let mut from = 0;
    while let Some(rel) = lc[from..].find('<') {
        let at = from + rel;
        if is_open_of(&lc, at, &name) {
            out.push(at);
        }
        from = at + 1;
    }
    out
}

/// Value of attribute `name` in the open tag `tag` (the `<…>` slice).
pub fn attr(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = to_lower(name);
    let b = lc.as_bytes();
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        from = at + needle.len();

        // must be a whole attribute name
        let before_ok = at > 0 && b[at - 1].is_ascii_whitespace();
        if !before_ok { continue; }
        let mut i = at + needle.len();
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        if b.get(i) != Some(&b'=') { continue; }
        i += 1;
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }

        let value = match b.get(i) {
            Some(&q @ (b'"' | b'\'')) => {
                let end = tag[i + 1..].find(q as char)? + i + 1;
                &tag[i + 1..end]
            }
            Some(_) => {
                let end = tag[i..]
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .map_or(tag.len(), |e| e + i);
                &tag[i..end]
            }
            None => return None,
        };
        return Some(decode_entities(value));
    }
    None
}

/// End offset (past the close tag) of the element opened at `start`.
/// Unclosed elements run to the end of the input.
pub fn element_end(s: &str, start: usize) -> Option<usize> {
    element_end_in(s, &to_lower(s), start)
}

/// `element_end` with the lowercased copy of `s` supplied by the caller.
fn element_end_in(s: &str, lc: &str, start: usize) -> Option<usize> {
    let name = tag_name(s, start)?;
    let open_end = open_tag_end(s, start)?;
    if s[start..open_end].ends_with("/>") {
        return Some(open_end);
    }
    let close = join!("</", &name);
    let mut depth = 1usize;
    let mut i = open_end;
    while let Some(rel) = lc[i..].find('<') {
        let at = i + rel;
        if is_open_of(lc, at, &name) {
            depth += 1;
            i = open_tag_end(s, at).unwrap_or(at + 1);
            continue;
        }
        if lc[at..].starts_with(&close) {
            depth -= 1;
            let gt = lc[at..].find('>').map_or(s.len(), |g| at + g + 1);
            if depth == 0 {
                return Some(gt);
            }
            i = gt;
            continue;
        }
        i = at + 1;
    }
    Some(s.len())
}

/// Elements (any tag) whose open tag carries `attr_name="value"`, as
/// `(start, end)` byte spans. Nested matches are skipped.
pub fn elements_with_attr(s: &str, attr_name: &str, value: &str) -> Vec<(usize, usize)> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut from = 0;
    while let Some(rel) = s[from..].find('<') {
        let at = from + rel;
        let Some(open_end) = open_tag_end(s, at) else { break };
        let is_match = tag_name(s, at).is_some()
            && attr(&s[at..open_end], attr_name).as_deref() == Some(value);
        if is_match {
            let end = element_end_in(s, &lc, at).unwrap_or(s.len());
            out.push((at, end));
            from = end;
        } else {
            from = at + 1;
        }
    }
    out
}
