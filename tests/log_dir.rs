// tests/log_dir.rs
//
// Own test binary: the subscriber is process-global.

use std::fs;

use booth_scout::{cli::{parse_args, Mode}, log};

#[test]
fn log_file_lands_in_the_chosen_store_dir() {
    let dir = std::env::temp_dir().join(format!("booth_scout_log_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let args = parse_args(["prefs", "--store", dir.to_str().unwrap()].map(String::from)).unwrap();
    let mode = Mode::Cli(args);

    let guard = log::init(mode.store_dir());
    assert!(guard.is_some());
    tracing::info!("Test: hello from the store dir");
    drop(guard);

    let text = fs::read_to_string(dir.join("debug.log")).unwrap();
    assert!(text.contains("hello from the store dir"));
}
