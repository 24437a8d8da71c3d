//! Error kinds surfaced by this crate's public surface.

use thiserror::Error;

/// Errors returned by [`AdaptiveMean`](crate::AdaptiveMean) construction and
/// ingestion.
///
/// Numerical degeneracies internal to the change detector (the `remove`
/// floor, or skipping the scan when `N <= 1`) are not errors; they are
/// normal states the detector handles by terminating its scan early.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AdaptiveMeanError {
    /// `delta` must lie in the open interval `(0, 1)`.
    #[error("delta must lie in (0, 1), got {0}")]
    InvalidDelta(f64),
    /// A sample passed to `fit` was `NaN` or `+/-infinity`.
    #[error("sample must be finite, got {0}")]
    NonFiniteSample(f64),
}
