// tests/compare_flow.rs
//
// Command layer end to end: scrape a captured page into a temp store, then
// compare against stubbed sheets.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    sync::Arc,
};

use booth_scout::{
    config::sheets::{SheetConfig, SheetSet},
    error::Error,
    page::{HtmlPage, Layout},
    runner::{Commands, Outcome, SheetKind},
};

const HANDLES_URL: &str = "https://sheets.test/handles.csv";
const BOOTHS_URL: &str = "https://sheets.test/booths.csv";

const HANDLE_SHEET: &str = "\u{feff}Name,Handle\nAnn,ann_draws\nBob,Bob\nCat,cat\n";
const BOOTH_SHEET: &str = "Artist,Booth,Link\n\
                           Ann,a05,https://x.com/Ann_Draws\n\
                           Bob,A01,@bob\n\
                           Cat,B2,https://twitter.com/cat\n";

fn fresh_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("booth_scout_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config() -> SheetConfig {
    SheetConfig {
        preview_base: "https://preview.test/".into(),
        sheet_sets: vec![SheetSet {
            name: "Spring Fair".into(),
            handles_url: HANDLES_URL.into(),
            booths_url: BOOTHS_URL.into(),
        }],
    }
}

/// Shortest allowed wait so captured pages scroll quickly.
fn fast(cmds: Commands) -> Commands {
    let mut prefs = cmds.preferences();
    prefs.set_delay_ms(0);
    cmds.set_preferences(&prefs).unwrap();
    cmds
}

fn commands(dir: &Path) -> Commands {
    fast(Commands::new(dir, &dir.join("missing.json")).with_config(config()))
        .with_fetcher(|url: &str| match url {
            HANDLES_URL => Ok(HANDLE_SHEET.to_string()),
            BOOTHS_URL => Ok(BOOTH_SHEET.to_string()),
            other => Err(Error::Fetch { url: other.into(), reason: "unknown".into() }),
        })
}

fn following_page(names: &[&str]) -> HtmlPage {
    let mut doc = String::from(r#"<div aria-label="Timeline: Following">"#);
    for n in names {
        doc.push_str(&format!(r#"<div data-testid="UserCell"><a href="/{n}">{n}</a></div>"#));
    }
    doc.push_str("</div>");
    HtmlPage::from_html(&doc, Some("https://x.com/me/following"), Layout::default())
}

#[test]
fn compare_without_stored_handles_fetches_nothing() {
    let dir = fresh_dir("empty");
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let cmds = Commands::new(&dir, &dir.join("missing.json"))
        .with_config(config())
        .with_fetcher(move |_url: &str| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(String::new())
        });

    assert!(matches!(cmds.compare(None), Outcome::NoStoredHandles));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn scrape_then_compare_builds_export_and_link() {
    let dir = fresh_dir("flow");
    let cmds = commands(&dir);
    let mut page = following_page(&["ann_draws", "Bob", "cat", "stranger"]);

    let out = cmds.start_scrape(&mut page, None);
    assert!(matches!(out, Outcome::Scraped { count: 4 }), "{out:?}");
    assert_eq!(cmds.stored_handles(), vec!["@ann_draws", "@Bob", "@cat", "@stranger"]);
    assert!(dir.join("storage.json").exists());

    let Outcome::Compared(report) = cmds.compare(None) else { panic!("no report") };
    assert_eq!(report.matches, vec!["ann_draws", "Bob", "cat"]);
    assert_eq!(
        report.booths,
        vec![("ann_draws".to_string(), "a05".to_string()), ("Bob".to_string(), "A01".to_string())]
    );
    assert_eq!(report.skipped, 1);
    assert_eq!(report.compact, "A0105");
    assert_eq!(report.link, "https://preview.test/#artists/SpringFair/A0105");
}

#[test]
fn rejected_context_leaves_store_untouched() {
    let dir = fresh_dir("context");
    let cmds = commands(&dir);
    let mut page = HtmlPage::from_html("<p></p>", Some("https://x.com/me/likes"), Layout::default());

    let out = cmds.start_scrape(&mut page, None);
    assert!(matches!(out, Outcome::Rejected(Error::InvalidContext { .. })));
    assert!(cmds.stored_handles().is_empty());
}

#[test]
fn handle_sheet_failure_reports_no_matches_yet() {
    let dir = fresh_dir("fail_handles");
    let cmds = fast(
        Commands::new(&dir, &dir.join("missing.json"))
            .with_config(config())
            .with_fetcher(|url: &str| Err(Error::Fetch { url: url.into(), reason: "offline".into() })),
    );
    cmds.start_scrape(&mut following_page(&["ann_draws"]), None);

    match cmds.compare(None) {
        Outcome::FetchFailed { sheet, matches, .. } => {
            assert_eq!(sheet, SheetKind::Handles);
            assert!(matches.is_empty());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn booth_sheet_failure_keeps_matches() {
    let dir = fresh_dir("fail_booths");
    let cmds = fast(
        Commands::new(&dir, &dir.join("missing.json"))
            .with_config(config())
            .with_fetcher(|url: &str| match url {
                HANDLES_URL => Ok(HANDLE_SHEET.to_string()),
                _ => Err(Error::Fetch { url: url.into(), reason: "503".into() }),
            }),
    );
    cmds.start_scrape(&mut following_page(&["cat", "ann_draws"]), None);

    let out = cmds.compare(None);
    let status = out.status();
    match out {
        Outcome::FetchFailed { sheet: SheetKind::Booths, matches, .. } => {
            assert_eq!(matches, vec!["cat", "ann_draws"]);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(status.text.starts_with("2 match(es)"));
}

#[test]
fn matches_without_usable_booths() {
    let dir = fresh_dir("no_booths");
    let cmds = commands(&dir);
    cmds.start_scrape(&mut following_page(&["cat"]), None);

    match cmds.compare(None) {
        Outcome::NoBoothMappings { matches, skipped } => {
            assert_eq!(matches, vec!["cat"]);
            assert_eq!(skipped, 1);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn case_mismatch_is_not_a_match() {
    let dir = fresh_dir("case");
    let cmds = commands(&dir);
    cmds.start_scrape(&mut following_page(&["Ann_Draws", "bob"]), None);
    assert!(matches!(cmds.compare(None), Outcome::NoMatches));
}

#[test]
fn clear_then_compare_has_nothing() {
    let dir = fresh_dir("clear");
    let cmds = commands(&dir);
    cmds.start_scrape(&mut following_page(&["Bob"]), None);
    assert!(matches!(cmds.clear_handles(), Outcome::Cleared));
    assert!(matches!(cmds.compare(None), Outcome::NoStoredHandles));
}

#[test]
fn stop_with_nothing_running() {
    let dir = fresh_dir("stop");
    let cmds = commands(&dir);
    assert!(matches!(cmds.stop_scrape(), Outcome::StopRequested { was_running: false }));
    // a stale stop request must not cancel the next run
    let out = cmds.start_scrape(&mut following_page(&["Bob"]), None);
    assert!(matches!(out, Outcome::Scraped { count: 1 }));
}
