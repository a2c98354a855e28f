//! Random point clouds in 2D (uniform disc + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for point sets used by the CLI `sample`
//!   command, the benches and the property tests.
//!
//! Model
//! - Draw `count` points uniformly from a disc of radius `radius` around `center`
//!   (radius via `sqrt(u)` so the density is uniform in area).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{pt, Point};

/// Disc sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: usize,
    pub radius: f64,
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 20,
            radius: 10.0,
            center: pt(0.0, 0.0),
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
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the next draw in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw a random point cloud. The same token always yields the same points.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.radius.abs();
    (0..cfg.count)
        .map(|_| {
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = r0 * rng.gen::<f64>().sqrt();
            cfg.center + pt(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
