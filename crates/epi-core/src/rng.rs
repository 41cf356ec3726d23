//! The engine-owned random source.
//!
//! # Determinism strategy
//!
//! Every stochastic decision in a run draws from one `SimRng`, seeded once
//! with `seed_from_u64`.  The engine visits agents in ascending `AgentId`
//! order and each call site draws a fixed number of values, so a seed fully
//! determines a run.  There are no per-agent streams: reordering draws
//! changes individual trajectories, but not the statistical behavior.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, StandardNormal};

/// Single-threaded simulation RNG.
pub struct SimRng {
    inner: SmallRng,
    age:   Beta<f64>,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        let Ok(age) = Beta::new(2.0, 5.0) else {
            unreachable!("Beta(2, 5) parameters are valid")
        };
        SimRng { inner: SmallRng::seed_from_u64(seed), age }
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.inner.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Zero-mean normal sample with standard deviation `scale`.
    #[inline]
    pub fn normal(&mut self, scale: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.inner);
        z * scale
    }

    /// Age in whole years, `Beta(2, 5) × 100`: skewed towards youth, `< 100`.
    #[inline]
    pub fn age(&mut self) -> u32 {
        (self.age.sample(&mut self.inner) * 100.0) as u32
    }
}
