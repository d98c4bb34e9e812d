// src/progress.rs
/// Listener for long-running work (scrape, compare).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// A scrape loop is about to start.
    fn begin(&mut self) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One scroll iteration finished; `total` handles collected so far.
    fn iteration(&mut self, _n: u32, _total: usize) {}

    /// The loop finished on its own (not cancelled) with `count` handles.
    fn complete(&mut self, _count: usize) {}

    /// The collected handles were written to the store.
    fn saved(&mut self) {}
}
