// src/progress.rs
use crate::engine::types::PriceAlert;

/// Lightweight progress reporting used by long-running operations
/// (collection and watch runs). Frontends implement this to surface
/// status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per detected price drop, in batch order.
    fn alert(&mut self, _alert: &PriceAlert) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
