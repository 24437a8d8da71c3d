//! The public [`AdaptiveMean`] handle and its `without_dropping` diagnostic
//! sibling.

use std::fmt;

use crate::detector::detect_and_prune;
use crate::error::AdaptiveMeanError;
use crate::variance::VarianceSummary;
use crate::window::Window;

/// Default target false-positive rate for the change test.
pub const DEFAULT_DELTA: f64 = 0.001;

/// Construction options for [`AdaptiveMean`].
///
/// `delta` defaults to [`DEFAULT_DELTA`] and `on_shift` defaults to a no-op,
/// matching [`AdaptiveMean::new`].
pub struct AdaptiveMeanOptions {
    /// Target false-positive rate of the change test. Must lie in `(0, 1)`.
    pub delta: f64,
    /// Invoked synchronously, after a prune has been applied, the first time
    /// a `fit` call detects drift.
    pub on_shift: Option<Box<dyn FnMut(&AdaptiveMean)>>,
}

impl Default for AdaptiveMeanOptions {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            on_shift: None,
        }
    }
}

impl fmt::Debug for AdaptiveMeanOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveMeanOptions")
            .field("delta", &self.delta)
            .field("on_shift", &self.on_shift.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

/// An online estimate of the mean of a data stream, truncated to the most
/// recent statistically-stationary regime by the ADWIN2 change test.
///
/// `fit` is not reentrant: it must not be called from within the `on_shift`
/// callback, from another thread, or while an accessor is in progress.
/// Debug builds assert against the single reentrant case this type can
/// detect on its own (a callback that calls `fit` again).
pub struct AdaptiveMean {
    delta: f64,
    window: Window,
    aggregate: VarianceSummary,
    on_shift: Option<Box<dyn FnMut(&AdaptiveMean)>>,
    in_fit: bool,
}

impl fmt::Debug for AdaptiveMean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveMean")
            .field("delta", &self.delta)
            .field("nobs", &self.aggregate.n)
            .field("mean", &self.aggregate.mean)
            .finish()
    }
}

impl AdaptiveMean {
    /// Construct with the default `delta` ([`DEFAULT_DELTA`]) and no
    /// shift callback.
    pub fn new() -> Self {
        Self::with_options(AdaptiveMeanOptions::default())
            .expect("DEFAULT_DELTA is within (0, 1)")
    }

    /// Construct with a caller-chosen `delta` and no shift callback.
    pub fn with_delta(delta: f64) -> Result<Self, AdaptiveMeanError> {
        Self::with_options(AdaptiveMeanOptions {
            delta,
            on_shift: None,
        })
    }

    /// Construct with a caller-chosen `delta` and `on_shift` callback.
    pub fn construct(
        delta: f64,
        on_shift: impl FnMut(&AdaptiveMean) + 'static,
    ) -> Result<Self, AdaptiveMeanError> {
        Self::with_options(AdaptiveMeanOptions {
            delta,
            on_shift: Some(Box::new(on_shift)),
        })
    }

    /// Construct from a fully-specified [`AdaptiveMeanOptions`].
    pub fn with_options(options: AdaptiveMeanOptions) -> Result<Self, AdaptiveMeanError> {
        if !(options.delta > 0.0 && options.delta < 1.0) {
            return Err(AdaptiveMeanError::InvalidDelta(options.delta));
        }
        tracing::debug!(delta = options.delta, "constructed adaptive mean");
        Ok(Self {
            delta: options.delta,
            window: Window::new(),
            aggregate: VarianceSummary::EMPTY,
            on_shift: options.on_shift,
            in_fit: false,
        })
    }

    /// Ingest one sample: append it to the window, cascade compression, and
    /// run the change detector, pruning and invoking `on_shift` if drift is
    /// declared.
    pub fn fit(&mut self, x: f64) -> Result<(), AdaptiveMeanError> {
        if !x.is_finite() {
            return Err(AdaptiveMeanError::NonFiniteSample(x));
        }
        debug_assert!(
            !self.in_fit,
            "AdaptiveMean::fit is not reentrant (called from within on_shift?)"
        );
        self.in_fit = true;

        self.window.fit(x);
        self.aggregate.fit(x);

        if detect_and_prune(&mut self.window, &mut self.aggregate, self.delta) {
            tracing::debug!(
                nobs = self.aggregate.n,
                mean = self.aggregate.mean,
                "adaptive mean detected a distribution shift; window pruned"
            );
            if let Some(mut callback) = self.on_shift.take() {
                callback(self);
                self.on_shift = Some(callback);
            }
        } else {
            tracing::trace!(nobs = self.aggregate.n, mean = self.aggregate.mean, "ingested sample");
        }

        self.in_fit = false;
        Ok(())
    }

    /// The current estimate of the mean of the live window.
    pub fn mean(&self) -> f64 {
        self.aggregate.mean
    }

    /// Alias for [`AdaptiveMean::mean`].
    pub fn value(&self) -> f64 {
        self.mean()
    }

    /// Number of samples currently live in the window.
    pub fn nobs(&self) -> u64 {
        self.aggregate.n
    }

    /// The full variance summary of the live window.
    pub fn stats(&self) -> VarianceSummary {
        self.aggregate
    }
}

impl Default for AdaptiveMean {
    fn default() -> Self {
        Self::new()
    }
}

/// An alternative ingestion handle over an existing [`AdaptiveMean`] that
/// runs the same bucket-compression pipeline but never invokes the change
/// detector or prunes the window.
///
/// Useful for A/B comparisons: fit the same stream through both an
/// `AdaptiveMean` and a `WithoutDropping` view over a twin instance to see
/// what the compressed window would report with drift detection disabled.
pub struct WithoutDropping<'a> {
    inner: &'a mut AdaptiveMean,
}

/// Wrap `am` in a [`WithoutDropping`] view sharing its underlying state.
pub fn without_dropping(am: &mut AdaptiveMean) -> WithoutDropping<'_> {
    WithoutDropping { inner: am }
}

impl<'a> WithoutDropping<'a> {
    /// Ingest one sample through compression only; the detector never runs.
    pub fn fit(&mut self, x: f64) -> Result<(), AdaptiveMeanError> {
        if !x.is_finite() {
            return Err(AdaptiveMeanError::NonFiniteSample(x));
        }
        self.inner.window.fit(x);
        self.inner.aggregate.fit(x);
        Ok(())
    }

    /// The current estimate of the mean of the (undropped) window.
    pub fn mean(&self) -> f64 {
        self.inner.mean()
    }

    /// Alias for [`WithoutDropping::mean`].
    pub fn value(&self) -> f64 {
        self.inner.value()
    }

    /// Number of samples ever fit through this view (never pruned).
    pub fn nobs(&self) -> u64 {
        self.inner.nobs()
    }

    /// The full variance summary of the (undropped) window.
    pub fn stats(&self) -> VarianceSummary {
        self.inner.stats()
    }
}
