//! Seeded point clouds with a known hull (jittered circle + interior points).
//!
//! Purpose
//! - Give tests, benchmarks and the CLI a reproducible input whose hull is
//!   known by construction: the first `hull_count` points are in strict convex
//!   position, the remaining `interior_count` points are strictly inside.
//!
//! Model
//! - Hull points sit on a circle at equally spaced angles plus bounded angular
//!   jitter (fraction of the spacing, clamped below one half) and a random phase.
//! - Interior points are convex combinations of three distinct hull points with
//!   every weight at least `MIN_WEIGHT`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

use super::types::Point;

const MIN_WEIGHT: f64 = 0.1;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Points in strict convex position. Must be at least 3.
    pub hull_count: usize,
    /// Points strictly inside the hull.
    pub interior_count: usize,
    /// Circle radius for the hull points.
    pub radius: f64,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.45].
    pub angle_jitter_frac: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            hull_count: 12,
            interior_count: 12,
            radius: 1.0,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rejected sampler parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum CloudError {
    TooFewHullPoints { hull_count: usize },
    InvalidRadius { radius: f64 },
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewHullPoints { hull_count } => {
                write!(f, "need at least 3 hull points, got {hull_count}")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "radius must be finite and > 0, got {radius}")
            }
        }
    }
}

impl std::error::Error for CloudError {}

/// A drawn cloud. `points[..hull_count]` are the hull vertices in CCW order.
#[derive(Clone, Debug)]
pub struct Cloud {
    pub points: Vec<Point>,
    pub hull_count: usize,
}

impl Cloud {
    #[inline]
    pub fn hull_indices(&self) -> std::ops::Range<usize> {
        0..self.hull_count
    }
}

/// Draw a cloud for `cfg` deterministically from `tok`.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Result<Cloud, CloudError> {
    if cfg.hull_count < 3 {
        return Err(CloudError::TooFewHullPoints {
            hull_count: cfg.hull_count,
        });
    }
    if !cfg.radius.is_finite() || cfg.radius <= 0.0 {
        return Err(CloudError::InvalidRadius { radius: cfg.radius });
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.hull_count;
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.45);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;

    let mut points = Vec::with_capacity(n + cfg.interior_count);
    for k in 0..n {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        let theta = phase + (k as f64) * delta + jitter;
        points.push(Point::new(
            cfg.radius * theta.cos(),
            cfg.radius * theta.sin(),
        ));
    }

    for _ in 0..cfg.interior_count {
        let picked = sample(&mut rng, n, 3);
        let free = 1.0 - 3.0 * MIN_WEIGHT;
        let mut w = [rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>()];
        let total: f64 = w.iter().sum::<f64>().max(f64::MIN_POSITIVE);
        for wi in &mut w {
            *wi = MIN_WEIGHT + free * (*wi / total);
        }
        let p = points[picked.index(0)] * w[0]
            + points[picked.index(1)] * w[1]
            + points[picked.index(2)] * w[2];
        points.push(p);
    }

    Ok(Cloud {
        points,
        hull_count: n,
    })
}
