//! Progress reporting hooks.

/// Observer notified as regions are processed.
///
/// Progress is informational only; implementations must not affect the
/// processing result.
pub trait Progress {
    /// Called after each region with the running region count.
    fn region(&self, _regions: usize) {}

    /// Called once after the last region.
    fn finish(&self, _regions: usize) {}
}

/// Progress observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}
