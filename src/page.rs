// src/page.rs
//
// The scraper never touches a browser directly. It drives a `Page`: scroll
// somewhere, ask how tall the document is, read the anchors of the list
// cells currently rendered. `HtmlPage` implements that over a captured
// following-page document, simulating the lazily rendered list.

use std::{fs, path::Path, thread, time::Duration};

use crate::config::consts::{FOLLOWING_LABEL, USER_CELL_TESTID};
use crate::core::html;
use crate::error::Result;

pub trait Page {
    /// Address of the page being scraped.
    fn url(&self) -> &str;

    fn scroll_to(&mut self, y: u32);

    /// Current total document extent in pixels.
    fn scroll_height(&self) -> u32;

    /// For each rendered list cell, the `href`s of its anchors that start
    /// with `/`, in document order. Empty when the list container is absent.
    fn user_cells(&self) -> Vec<Vec<String>>;

    /// Yield between iterations.
    fn wait(&mut self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// Geometry of the simulated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub viewport: u32,
    pub header_offset: u32,
    pub cell_height: u32,
    /// Cells loaded per lazy-load round.
    pub batch: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { viewport: 900, header_offset: 120, cell_height: 72, batch: 20 }
    }
}

pub struct HtmlPage {
    url: String,
    layout: Layout,
    /// `None` when the following container is missing.
    cells: Option<Vec<Vec<String>>>,
    loaded: usize,
    scroll: u32,
}

impl HtmlPage {
    pub fn from_html(doc: &str, url: Option<&str>, layout: Layout) -> Self {
        let url = url
            .map(|u| s!(u.trim()))
            .filter(|u| !u.is_empty())
            .or_else(|| canonical_url(doc))
            .unwrap_or_default();

        let cells = parse_cells(doc);
        match &cells {
            Some(c) => logd!("Page: {} cell(s) in snapshot", c.len()),
            None => logd!("Page: no following container in snapshot"),
        }

        let loaded = cells.as_ref().map_or(0, |c| c.len().min(layout.batch));
        Self { url, layout, cells, loaded, scroll: 0 }
    }

    pub fn open(path: &Path, url: Option<&str>) -> Result<Self> {
        let doc = fs::read_to_string(path)?;
        Ok(Self::from_html(&doc, url, Layout::default()))
    }

    pub fn total_cells(&self) -> usize {
        self.cells.as_ref().map_or(0, Vec::len)
    }

    fn loaded_extent(&self) -> u32 {
        let l = &self.layout;
        l.header_offset + self.loaded as u32 * l.cell_height
    }

    /// Load more cells while the viewport is within one screen of the end.
    fn lazy_load(&mut self) {
        let total = self.total_cells();
        let bottom = self.scroll + self.layout.viewport;
        while self.loaded < total && bottom + self.layout.viewport >= self.loaded_extent() {
            self.loaded = (self.loaded + self.layout.batch.max(1)).min(total);
        }
    }
}

impl Page for HtmlPage {
    fn url(&self) -> &str {
        &self.url
    }

    fn scroll_to(&mut self, y: u32) {
        self.scroll = y;
        self.lazy_load();
    }

    fn scroll_height(&self) -> u32 {
        self.loaded_extent().max(self.layout.viewport)
    }

    fn user_cells(&self) -> Vec<Vec<String>> {
        let Some(cells) = &self.cells else { return Vec::new() };
        let l = &self.layout;
        let top = self.scroll;
        let bottom = self.scroll + l.viewport;

        cells[..self.loaded]
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                let y0 = l.header_offset + *i as u32 * l.cell_height;
                let y1 = y0 + l.cell_height;
                y1 > top && y0 < bottom
            })
            .map(|(_, hrefs)| hrefs.clone())
            .collect()
    }
}

/// Slashed hrefs of every user cell inside the following container.
fn parse_cells(doc: &str) -> Option<Vec<Vec<String>>> {
    let (start, end) = *html::elements_with_attr(doc, "aria-label", FOLLOWING_LABEL).first()?;
    let container = &doc[start..end];

    let cells = html::elements_with_attr(container, "data-testid", USER_CELL_TESTID)
        .into_iter()
        .map(|(s, e)| {
            let cell = &container[s..e];
            html::open_tags(cell, "a")
                .into_iter()
                .filter_map(|at| {
                    let tag_end = html::open_tag_end(cell, at)?;
                    html::attr(&cell[at..tag_end], "href")
                })
                .filter(|href| href.starts_with('/'))
                .collect()
        })
        .collect();
    Some(cells)
}

fn canonical_url(doc: &str) -> Option<String> {
    html::open_tags(doc, "link").into_iter().find_map(|at| {
        let end = html::open_tag_end(doc, at)?;
        let tag = &doc[at..end];
        let rel = html::attr(tag, "rel")?;
        if rel.eq_ignore_ascii_case("canonical") { html::attr(tag, "href") } else { None }
    })
}
