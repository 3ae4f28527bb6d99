//! Timing comparison between the standard library and the bit-hack
//!
//! Draws a list of uniform random inputs, runs each method over the whole
//! list once, and reports wall time plus error statistics.

use crate::rsqrt::{approx_inv_sqrt, reference_inv_sqrt, relative_error};
use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Benchmark errors.
#[derive(Debug, Error, PartialEq)]
pub enum BenchError {
    #[error("Sample count must be at least 1")]
    NoSamples,

    #[error("Invalid sample range [{low}, {high}): bounds and width must be finite with low < high")]
    InvalidRange { low: f32, high: f32 },
}

/// Result type for benchmark operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Benchmark settings, also the `[bench]` section of fisr.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of random inputs
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Inclusive lower bound of the input range
    #[serde(default)]
    pub low: f32,

    /// Exclusive upper bound of the input range
    #[serde(default = "default_high")]
    pub high: f32,

    /// Fixed RNG seed for reproducible inputs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of values shown in console previews
    #[serde(default = "default_preview")]
    pub preview: usize,
}

fn default_samples() -> usize {
    50_000
}

fn default_high() -> f32 {
    100.0
}

fn default_preview() -> usize {
    crate::format::DEFAULT_PREVIEW
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            low: 0.0,
            high: default_high(),
            seed: None,
            preview: default_preview(),
        }
    }
}

impl BenchConfig {
    /// Check sample count and range.
    pub fn validate(&self) -> BenchResult<()> {
        if self.samples == 0 {
            return Err(BenchError::NoSamples);
        }
        // the width must also be finite for the uniform sampler
        if !self.low.is_finite()
            || !self.high.is_finite()
            || self.low >= self.high
            || !(self.high - self.low).is_finite()
        {
            return Err(BenchError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// Relative error of the approximation against the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorStats {
    pub max_relative: f32,
    pub mean_relative: f32,
}

impl ErrorStats {
    /// Compare paired results. Pairs whose reference is not finite and
    /// non-zero (e.g. an input of exactly 0) are skipped.
    pub fn compute(reference: &[f32], approx: &[f32]) -> Self {
        let mut max = 0.0f32;
        let mut sum = 0.0f64;
        let mut count = 0usize;

        for (&r, &a) in reference.iter().zip(approx) {
            if !r.is_finite() || r == 0.0 {
                continue;
            }
            let err = relative_error(a, r);
            max = max.max(err);
            sum += err as f64;
            count += 1;
        }

        Self {
            max_relative: max,
            mean_relative: if count == 0 {
                0.0
            } else {
                (sum / count as f64) as f32
            },
        }
    }
}

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    #[serde(skip)]
    pub inputs: Vec<f32>,
    #[serde(skip)]
    pub reference: Vec<f32>,
    #[serde(skip)]
    pub approx: Vec<f32>,
    pub reference_ns: u64,
    pub approx_ns: u64,
    /// `reference_ns / approx_ns`, `None` when the approximation ran in 0 ns
    pub speedup: Option<f64>,
    pub errors: ErrorStats,
}

/// `reference_ns / approx_ns`, `None` when the approximation ran in 0 ns.
fn speedup(reference_ns: u64, approx_ns: u64) -> Option<f64> {
    if approx_ns == 0 {
        None
    } else {
        Some(reference_ns as f64 / approx_ns as f64)
    }
}

/// Draw `config.samples` uniform inputs in `[low, high)`.
pub fn generate_samples(config: &BenchConfig) -> BenchResult<Vec<f32>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let dist = Uniform::new(config.low, config.high);
    Ok((0..config.samples).map(|_| dist.sample(&mut rng)).collect())
}

/// Apply `f` to every input and time the whole pass.
pub fn time_method<F>(inputs: &[f32], f: F) -> (Vec<f32>, Duration)
where
    F: Fn(f32) -> f32,
{
    let mut out = vec![0.0f32; inputs.len()];
    let start = Instant::now();
    for (slot, &x) in out.iter_mut().zip(inputs) {
        *slot = black_box(f(black_box(x)));
    }
    let elapsed = start.elapsed();
    (out, elapsed)
}

/// Generate inputs, time both methods, and collect statistics.
pub fn run(config: &BenchConfig) -> BenchResult<BenchReport> {
    let inputs = generate_samples(config)?;
    log::info!(
        "timing {} samples in [{}, {})",
        inputs.len(),
        config.low,
        config.high
    );

    let (reference, reference_time) = time_method(&inputs, reference_inv_sqrt);
    let (approx, approx_time) = time_method(&inputs, approx_inv_sqrt);
    log::debug!(
        "reference: {:?}, approximation: {:?}",
        reference_time,
        approx_time
    );

    let reference_ns = duration_ns(reference_time);
    let approx_ns = duration_ns(approx_time);
    let errors = ErrorStats::compute(&reference, &approx);
    if errors.max_relative > crate::rsqrt::MAX_RELATIVE_ERROR {
        log::warn!(
            "max relative error {:.3e} exceeds expected bound",
            errors.max_relative
        );
    }

    Ok(BenchReport {
        config: config.clone(),
        inputs,
        reference,
        approx,
        reference_ns,
        approx_ns,
        speedup: speedup(reference_ns, approx_ns),
        errors,
    })
}

fn duration_ns(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(samples: usize) -> BenchConfig {
        BenchConfig {
            samples,
            seed: Some(1),
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(seeded(10).validate(), Ok(()));
        assert_eq!(seeded(0).validate(), Err(BenchError::NoSamples));

        let mut config = seeded(10);
        config.low = 5.0;
        config.high = 5.0;
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidRange { .. })
        ));

        config.high = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_width() {
        let config = BenchConfig {
            low: -3e38,
            high: 3e38,
            ..seeded(4)
        };
        assert_eq!(
            config.validate(),
            Err(BenchError::InvalidRange {
                low: -3e38,
                high: 3e38
            })
        );
        assert!(generate_samples(&config).is_err());

        let widest_ok = BenchConfig {
            low: -1e38,
            high: 1e38,
            ..seeded(4)
        };
        assert!(generate_samples(&widest_ok).is_ok());
    }

    #[test]
    fn test_samples_in_range() {
        let mut config = seeded(1000);
        config.low = 2.0;
        config.high = 3.0;
        let samples = generate_samples(&config).unwrap();
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|&x| (2.0..3.0).contains(&x)));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = generate_samples(&seeded(64)).unwrap();
        let b = generate_samples(&seeded(64)).unwrap();
        assert_eq!(a, b);

        let mut other = seeded(64);
        other.seed = Some(2);
        assert_ne!(a, generate_samples(&other).unwrap());
    }

    #[test]
    fn test_time_method_preserves_order() {
        let (out, _) = time_method(&[1.0, 4.0, 16.0], reference_inv_sqrt);
        assert_eq!(out, vec![1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_error_stats_skips_non_finite_reference() {
        let stats = ErrorStats::compute(&[f32::INFINITY, 0.5], &[1e19, 0.4995]);
        assert!(stats.max_relative > 0.0009 && stats.max_relative < 0.0011);
        assert_eq!(stats.max_relative, stats.mean_relative);
    }

    #[test]
    fn test_speedup() {
        assert_eq!(speedup(100, 50), Some(2.0));
        assert_eq!(speedup(100, 0), None);
    }

    #[test]
    fn test_run() {
        let report = run(&seeded(500)).unwrap();
        assert_eq!(report.inputs.len(), 500);
        assert_eq!(report.reference.len(), 500);
        assert_eq!(report.approx.len(), 500);
        assert_eq!(
            report.speedup,
            speedup(report.reference_ns, report.approx_ns)
        );
        assert!(report.errors.max_relative < crate::rsqrt::MAX_RELATIVE_ERROR);
    }
}
