// src/scrape/scroller.rs
//
// Incremental scroll scraper. The loop is an explicit state machine:
// `ScrollLoop::step` does one scroll + wait + sample, and `scrape` drives it,
// checking the stop flag at every iteration boundary.

use std::time::Duration;

use crate::{
    config::{consts::STABLE_LIMIT, options::ScrapeOptions},
    core::HandleSet,
    error::{Error, Result},
    page::Page,
    progress::Progress,
    specs::following::{extract_handles, is_following_url},
};

use super::ScrapeSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Stop requested; the result is discarded.
    Cancelled,
    /// `STABLE_LIMIT` iterations in a row with no growth.
    Stable,
    /// Scrolled past the end of the document.
    PastExtent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done(StopReason),
}

#[derive(Debug)]
pub enum ScrapeOutcome {
    Completed(HandleSet),
    Cancelled { partial: usize },
}

#[derive(Debug)]
pub struct ScrollLoop {
    step_px: u32,
    delay: Duration,
    position: u32,
    stable: u32,
    last_height: u32,
    iterations: u32,
    handles: HandleSet,
}

impl ScrollLoop {
    /// Take the initial sample and the baseline extent.
    pub fn start<P: Page + ?Sized>(page: &P, opts: ScrapeOptions) -> Self {
        let handles: HandleSet = extract_handles(&page.user_cells()).into_iter().collect();
        Self {
            step_px: opts.scroll_step,
            delay: Duration::from_millis(opts.delay_ms),
            position: 0,
            stable: 0,
            last_height: page.scroll_height(),
            iterations: 0,
            handles,
        }
    }

    /// One iteration: advance, scroll, wait, re-sample, update stability.
    pub fn step<P: Page + ?Sized>(&mut self, page: &mut P) -> Step {
        self.position = self.position.saturating_add(self.step_px);
        page.scroll_to(self.position);
        page.wait(self.delay);
        self.iterations += 1;

        let found = self.handles.extend(extract_handles(&page.user_cells()));
        let height = page.scroll_height();

        if found == 0 && height == self.last_height {
            self.stable += 1;
        } else {
            self.stable = 0;
            self.last_height = height;
        }

        logd!(
            "Scrape: iter={} pos={} height={} total={} new={} stable={}",
            self.iterations, self.position, height, self.handles.len(), found, self.stable
        );

        if self.position > height {
            Step::Done(StopReason::PastExtent)
        } else if self.stable >= STABLE_LIMIT {
            Step::Done(StopReason::Stable)
        } else {
            Step::Continue
        }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    pub fn into_handles(self) -> HandleSet {
        self.handles
    }
}

/// Run a full scrape on `page`.
///
/// Rejects pages that are not a following list and sessions that are
/// already running. A stop request observed at an iteration boundary (or
/// right after the last iteration) discards the result and fires no
/// completion.
pub fn scrape<P: Page + ?Sized>(
    page: &mut P,
    opts: ScrapeOptions,
    session: &ScrapeSession,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ScrapeOutcome> {
    if !is_following_url(page.url()) {
        return Err(Error::InvalidContext { url: s!(page.url()) });
    }
    let _guard = session.begin()?;

    logf!("Scrape: Begin step={}px delay={}ms", opts.scroll_step, opts.delay_ms);
    if let Some(p) = progress.as_deref_mut() {
        p.begin();
    }

    let mut lp = ScrollLoop::start(page, opts);
    let reason = loop {
        if session.should_stop() {
            break StopReason::Cancelled;
        }
        let step = lp.step(page);
        if let Some(p) = progress.as_deref_mut() {
            p.iteration(lp.iterations(), lp.handles().len());
        }
        if let Step::Done(r) = step {
            break r;
        }
    };

    if reason == StopReason::Cancelled || session.should_stop() {
        let partial = lp.handles().len();
        logf!("Scrape: Stopped by user after {} iteration(s), {partial} discarded", lp.iterations());
        if let Some(p) = progress.as_deref_mut() {
            p.log("Stopped.");
        }
        return Ok(ScrapeOutcome::Cancelled { partial });
    }

    let handles = lp.into_handles();
    logf!("Scrape: Done ({reason:?}), {} handle(s)", handles.len());
    if let Some(p) = progress.as_deref_mut() {
        p.complete(handles.len());
    }
    Ok(ScrapeOutcome::Completed(handles))
}
