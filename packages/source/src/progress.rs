//! Progress reporting trait for long-running loads.
//!
//! Defines a [`ProgressCallback`] trait that decouples progress reporting
//! from any specific rendering backend. The `indicatif` implementation
//! lives in the CLI utilities crate.

/// Trait for reporting progress from long-running operations.
pub trait ProgressCallback: Send + Sync {
    /// Advance progress by `delta` units.
    fn inc(&self, delta: u64);

    /// Update the message displayed alongside the progress indicator.
    fn set_message(&self, msg: String);

    /// Mark progress as complete with a final message.
    fn finish(&self, msg: String);
}

/// A no-op implementation of [`ProgressCallback`] that silently ignores
/// all progress updates.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}
