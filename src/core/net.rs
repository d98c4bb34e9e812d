// src/core/net.rs
//
// Blocking HTTP(S) GET for the remote sheets. No auth, no retries; the
// caller decides what a failure means.

use std::io::Read;
use std::time::Duration;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("booth_scout/", env!("CARGO_PKG_VERSION"));

// Sheets are small; anything past this is not a sheet export.
const MAX_BODY: u64 = 8 * 1024 * 1024;

pub fn http_get(url: &str) -> Result<String> {
    let fetch_err = |reason: String| Error::Fetch { url: s!(url), reason };

    let agent = ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(15))
        .timeout_read(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build();

    logd!("Net: GET {url}");
    let resp = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(code, r) => fetch_err(format!("HTTP {code} {}", r.status_text())),
        ureq::Error::Transport(t) => fetch_err(t.to_string()),
    })?;

    let mut buf = Vec::new();
    resp.into_reader()
        .take(MAX_BODY)
        .read_to_end(&mut buf)
        .map_err(|e| fetch_err(e.to_string()))?;

    logd!("Net: {} bytes from {url}", buf.len());
    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}
