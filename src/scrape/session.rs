// src/scrape/session.rs
//
// Per-page scrape state: one active run at a time, plus a stop request the
// loop polls between iterations. Shared as `Arc<ScrapeSession>` so the
// stop can come from another thread.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct ScrapeSession {
    running: AtomicBool,
    should_stop: AtomicBool,
}

impl ScrapeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the session. Fails if a run is already active; otherwise
    /// clears any stale stop request. Released when the guard drops.
    pub fn begin(&self) -> Result<RunGuard<'_>> {
        self.running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::AlreadyRunning)?;
        self.should_stop.store(false, Ordering::Release);
        Ok(RunGuard { session: self })
    }

    pub fn request_stop(&self) {
        self.should_stop.store(true, Ordering::Release);
    }

    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::Acquire)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Holds the session's running flag for the life of one loop.
#[derive(Debug)]
pub struct RunGuard<'a> {
    session: &'a ScrapeSession,
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.session.running.store(false, Ordering::Release);
    }
}
