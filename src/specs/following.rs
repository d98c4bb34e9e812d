// src/specs/following.rs
use crate::config::consts::FOLLOWING_HOSTS;
use crate::core::handle::{body_from_path, Handle};

/// `https://<host>/<user>/following`, nothing before or after.
pub fn is_following_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("https://") else { return false };
    let Some((host, path)) = rest.split_once('/') else { return false };
    if !FOLLOWING_HOSTS.contains(&host) {
        return false;
    }
    match path.split_once('/') {
        Some((user, tail)) => !user.is_empty() && tail == "following",
        None => false,
    }
}

/// First anchor in the cell whose href is a single `/<handle>` segment.
pub fn handle_in_cell(hrefs: &[String]) -> Option<Handle> {
    let body = hrefs.iter().find_map(|h| body_from_path(h))?;
    Handle::from_body(body)
}

/// Handles of every cell that has one; cells without a match add nothing.
pub fn extract_handles(cells: &[Vec<String>]) -> Vec<Handle> {
    cells.iter().filter_map(|c| handle_in_cell(c)).collect()
}
