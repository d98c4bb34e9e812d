// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const STORAGE_FILE: &str = "storage.json";
pub const LOG_FILE: &str = "debug.log";

// Sheet sets
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_PREVIEW_BASE: &str = "https://boothscout.app";

// Storage keys
pub const KEY_HANDLES: &str = "scrapedHandles";
pub const KEY_SCROLL_STEP: &str = "scrollStep";
pub const KEY_DELAY: &str = "sleepTime";
pub const KEY_SHEET_SET: &str = "sheetSetIndex";
pub const KEY_AUTO_COMPARE: &str = "autoCompare";
pub const KEY_SHOW_MATCHES: &str = "showMatches";
pub const KEY_COPY_LINK: &str = "copyLink";

// Scrape
pub const DEFAULT_SCROLL_STEP: u32 = 800;
pub const SCROLL_STEP_RANGE: (u32, u32) = (100, 3000);
pub const DEFAULT_DELAY_MS: u64 = 1200;
pub const DELAY_RANGE_MS: (u64, u64) = (100, 5000);
pub const STABLE_LIMIT: u32 = 3;

// Page shape
pub const HANDLE_MARKER: char = '@';
pub const HANDLE_MAX_LEN: usize = 15;
pub const FOLLOWING_LABEL: &str = "Timeline: Following";
pub const USER_CELL_TESTID: &str = "UserCell";
pub const FOLLOWING_HOSTS: &[&str] = &["x.com", "twitter.com"];
