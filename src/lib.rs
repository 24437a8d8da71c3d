//! An online estimate of the mean of a real-valued data stream whose
//! underlying distribution may shift over time.
//!
//! This crate implements the ADWIN2 adaptive-windowing scheme of Bifet and
//! Gavaldà: a bucketed, geometrically-growing compression structure stores a
//! lossy summary of the live window in constant space per decade of age, and
//! an incremental change-detection test walks every valid cut point of the
//! window on every update, truncating the prefix whenever a cut exceeds a
//! Hoeffding-plus-variance bound.
//!
//! * Use [`AdaptiveMean`] to fit samples one at a time and read back the
//!   current mean, sample count, or full variance summary.
//! * Use [`without_dropping`] to observe what the compressed window would
//!   report if drift detection were disabled, without constructing a second
//!   pipeline by hand.
//!
//! This crate is single-writer: [`AdaptiveMean::fit`] is not reentrant and
//! must not be called concurrently with itself, with accessors, or from
//! within the `on_shift` callback.

// When building the project in release mode:
//   (1): Promote warnings into errors.
//   (2): Warn about public items that are missing documentation.
//   (3): Deny broken documentation links.
//   (4): Deny invalid codeblock attributes in documentation.
//   (5): Promote warnings in examples into errors, except for unused variables.
#![cfg_attr(not(debug_assertions), deny(warnings))]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(rustdoc::broken_intra_doc_links))]
#![cfg_attr(not(debug_assertions), deny(rustdoc::invalid_codeblock_attributes))]
#![cfg_attr(not(debug_assertions), doc(test(attr(deny(warnings)))))]
#![cfg_attr(not(debug_assertions), doc(test(attr(allow(dead_code)))))]
#![cfg_attr(not(debug_assertions), doc(test(attr(allow(unused_variables)))))]

mod adaptive_mean;
mod detector;
mod error;
mod variance;
mod window;

#[cfg(test)]
mod scenarios;

pub use adaptive_mean::{
    without_dropping, AdaptiveMean, AdaptiveMeanOptions, WithoutDropping, DEFAULT_DELTA,
};
pub use error::AdaptiveMeanError;
pub use variance::{MeanSummary, VarianceSummary};
