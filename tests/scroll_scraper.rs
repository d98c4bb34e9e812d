// tests/scroll_scraper.rs
//
// Scroll loop against scripted pages.

use std::sync::Arc;
use std::time::Duration;

use booth_scout::{
    config::options::ScrapeOptions,
    page::{HtmlPage, Layout, Page},
    progress::Progress,
    scrape::{scrape, ScrapeOutcome, ScrapeSession},
};

const URL: &str = "https://x.com/me/following";

/// Each scroll reveals the next window of `per_screen` users; the document
/// grows until all `total` users are loaded.
struct ScriptedPage {
    total: usize,
    per_screen: usize,
    step: u32,
    y: u32,
    waits: u32,
    /// Stop requested during this wait number (1-based).
    stop_on_wait: Option<(u32, Arc<ScrapeSession>)>,
}

impl ScriptedPage {
    fn new(total: usize, per_screen: usize, step: u32) -> Self {
        Self { total, per_screen, step, y: 0, waits: 0, stop_on_wait: None }
    }

    fn screen(&self) -> usize {
        (self.y / self.step) as usize
    }
}

impl Page for ScriptedPage {
    fn url(&self) -> &str { URL }

    fn scroll_to(&mut self, y: u32) { self.y = y; }

    fn scroll_height(&self) -> u32 {
        let screens = self.total.div_ceil(self.per_screen) as u32;
        let loaded = (self.screen() as u32 + 2).min(screens);
        loaded * self.step + 1
    }

    fn user_cells(&self) -> Vec<Vec<String>> {
        let first = self.screen() * self.per_screen;
        (first..(first + self.per_screen).min(self.total))
            .map(|i| vec![format!("/user_{i}/photo"), format!("/user_{i}")])
            .collect()
    }

    fn wait(&mut self, _delay: Duration) {
        self.waits += 1;
        if let Some((n, session)) = &self.stop_on_wait {
            if *n == self.waits {
                session.request_stop();
            }
        }
    }
}

/// Extent and content never change.
struct FrozenPage {
    scrolls: u32,
}

impl Page for FrozenPage {
    fn url(&self) -> &str { URL }
    fn scroll_to(&mut self, _y: u32) { self.scrolls += 1; }
    fn scroll_height(&self) -> u32 { 1_000_000 }
    fn user_cells(&self) -> Vec<Vec<String>> { vec![vec!["/same".into()]] }
    fn wait(&mut self, _delay: Duration) {}
}

#[derive(Default)]
struct Events {
    began: bool,
    iterations: u32,
    completed: Option<usize>,
}

impl Progress for Events {
    fn begin(&mut self) { self.began = true; }
    fn iteration(&mut self, n: u32, _total: usize) { self.iterations = n; }
    fn complete(&mut self, count: usize) { self.completed = Some(count); }
}

fn opts(step: u32) -> ScrapeOptions {
    ScrapeOptions { scroll_step: step, delay_ms: 0 }
}

#[test]
fn frozen_page_ends_after_exactly_three_iterations() {
    let mut page = FrozenPage { scrolls: 0 };
    let session = ScrapeSession::new();
    let mut ev = Events::default();

    let out = scrape(&mut page, opts(100), &session, Some(&mut ev)).unwrap();

    assert_eq!(page.scrolls, 3);
    assert_eq!(ev.iterations, 3);
    match out {
        ScrapeOutcome::Completed(set) => assert_eq!(set.to_strings(), vec!["@same"]),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(ev.completed, Some(1));
    assert!(!session.is_running());
}

#[test]
fn collects_every_user_in_order_without_duplicates() {
    let mut page = ScriptedPage::new(95, 10, 500);
    let session = ScrapeSession::new();

    let out = scrape(&mut page, opts(500), &session, None).unwrap();
    let ScrapeOutcome::Completed(set) = out else { panic!("cancelled") };

    assert_eq!(set.len(), 95);
    let names = set.to_strings();
    assert_eq!(names[0], "@user_0");
    assert_eq!(names[94], "@user_94");
}

#[test]
fn stop_during_first_wait_suppresses_completion() {
    let session = Arc::new(ScrapeSession::new());
    let mut page = ScriptedPage::new(95, 10, 500);
    page.stop_on_wait = Some((1, Arc::clone(&session)));
    let mut ev = Events::default();

    let out = scrape(&mut page, opts(500), &session, Some(&mut ev)).unwrap();

    match out {
        ScrapeOutcome::Cancelled { partial } => assert!(partial <= 20),
        other => panic!("unexpected {other:?}"),
    }
    assert!(ev.began);
    assert_eq!(ev.completed, None);
    assert_eq!(page.waits, 1);
    assert!(!session.is_running());
}

#[test]
fn missing_container_terminates_with_nothing() {
    let mut page = HtmlPage::from_html(
        "<html><body><main>nothing here</main></body></html>",
        Some(URL),
        Layout::default(),
    );
    let session = ScrapeSession::new();
    let out = scrape(&mut page, opts(100), &session, None).unwrap();
    let ScrapeOutcome::Completed(set) = out else { panic!("cancelled") };
    assert!(set.is_empty());
}

#[test]
fn captured_page_is_fully_collected() {
    let mut doc = String::from(r#"<html><head><link rel="canonical" href="https://twitter.com/me/following"/></head><body>"#);
    doc.push_str(r#"<section><div aria-label="Timeline: Following"><div>"#);
    for i in 0..120 {
        doc.push_str(&format!(
            r#"<div data-testid="UserCell"><a href="/i/user/{i}">x</a><a href="/Artist_{i}" role="link"><span>@Artist_{i}</span></a></div>"#
        ));
    }
    // a follow suggestion outside the list must not be collected
    doc.push_str(r#"</div></div><aside><div data-testid="UserCell"><a href="/stranger">s</a></div></aside></section></body></html>"#);

    let mut page = HtmlPage::from_html(&doc, None, Layout::default());
    let session = ScrapeSession::new();
    let out = scrape(&mut page, opts(800), &session, None).unwrap();
    let ScrapeOutcome::Completed(set) = out else { panic!("cancelled") };

    assert_eq!(set.len(), 120);
    assert!(!set.to_strings().contains(&"@stranger".to_string()));
    assert_eq!(set.to_strings()[7], "@Artist_7");
}
