//! End-to-end scenarios exercising [`AdaptiveMean`] against representative
//! streams, mirroring the worked examples used to validate the ADWIN2
//! change test during design.

#![cfg(test)]

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::AdaptiveMean;

const DELTA: f64 = 0.002;

#[test]
fn scenario_constant_stream_never_drifts() {
    let mut am = AdaptiveMean::with_delta(DELTA).unwrap();
    for _ in 0..100 {
        am.fit(1.0).unwrap();
    }
    assert_eq!(am.nobs(), 100);
    assert!((am.mean() - 1.0).abs() < 1e-9);
}

#[test]
fn scenario_single_sharp_level_shift_truncates_the_window() {
    let mut am = AdaptiveMean::with_delta(DELTA).unwrap();
    for _ in 0..5000 {
        am.fit(0.0).unwrap();
    }

    for _ in 0..5000 {
        am.fit(10.0).unwrap();
    }

    // After ingesting 10,000 samples total with a hard level shift halfway
    // through, the window must have pruned some of the pre-shift samples
    // for nobs to fall short of the total ingested.
    assert!(am.nobs() < 10_000, "nobs should be less than the total ingested once pruning occurs");
    assert!((am.mean() - 10.0).abs() < 0.5);
}

#[test]
fn scenario_gaussian_noise_has_a_low_false_positive_rate() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xADD_1E57);
    let normal = Normal::new(0.0, 1.0).unwrap();

    let mut am = AdaptiveMean::with_delta(DELTA).unwrap();
    let mut drift_count = 0usize;
    for _ in 0..10_000 {
        let x = normal.sample(&mut rng);
        let before = am.nobs();
        am.fit(x).unwrap();
        // A drift happened this step iff the window didn't simply grow by one.
        if am.nobs() != before + 1 {
            drift_count += 1;
        }
    }

    // delta is a target false-positive *rate*, not a hard cap on a single
    // run; allow generous slack above delta * n while still requiring the
    // detector to be quiet on stationary noise.
    assert!(
        drift_count < 50,
        "expected very few drifts on stationary Gaussian noise, got {drift_count}"
    );
    assert!(am.mean().abs() < 0.1);
}

#[test]
fn scenario_shift_and_revert_fires_at_least_two_drifts() {
    let mut am = AdaptiveMean::with_delta(DELTA).unwrap();
    let mut drift_count = 0usize;

    let mut feed = |am: &mut AdaptiveMean, x: f64, drift_count: &mut usize| {
        let before = am.nobs();
        am.fit(x).unwrap();
        if am.nobs() != before + 1 {
            *drift_count += 1;
        }
    };

    for _ in 0..1000 {
        feed(&mut am, 0.0, &mut drift_count);
    }
    for _ in 0..1000 {
        feed(&mut am, 1.0, &mut drift_count);
    }
    for _ in 0..1000 {
        feed(&mut am, 0.0, &mut drift_count);
    }

    assert!(drift_count >= 2, "expected at least two drifts, got {drift_count}");
    assert!((am.mean() - 0.0).abs() < 0.2);
}

#[test]
fn scenario_linear_ramp_tracks_the_recent_portion_not_the_global_mean() {
    let mut am = AdaptiveMean::with_delta(DELTA).unwrap();
    for i in 1..=10_000u32 {
        am.fit(i as f64 / 1000.0).unwrap();
    }

    // The global mean of the full ramp is 5.0005; a window that kept
    // tracking drift should sit much closer to the tail of the ramp (10.0)
    // than to the global mean.
    assert!(am.mean() > 7.0, "mean {} should track the recent ramp, not the global average", am.mean());
}

#[test]
fn scenario_two_samples_then_two_queries() {
    let mut am = AdaptiveMean::with_delta(DELTA).unwrap();
    am.fit(3.0).unwrap();
    assert_eq!(am.mean(), 3.0);
    am.fit(7.0).unwrap();
    assert!((am.mean() - 5.0).abs() < 1e-9);
}
