// src/specs/mod.rs
//! # Page and sheet "specs"
//!
//! Each spec knows how to read one source: where the ground truth lives and
//! how to pull it out tolerantly.
//!
//! - `following` – the following-list page: which URL is acceptable, and
//!   which anchor in a list cell names the account.
//! - `sheets` – the two remote sheets: the handle list (naive line/comma
//!   split, column 1) and the booth mapping (full quote-aware tokenizer,
//!   fixed column positions).
//!
//! Specs only extract. Scrolling, persistence and matching live elsewhere
//! (`scrape`, `store`, `matching`).
pub mod following;
pub mod sheets;
