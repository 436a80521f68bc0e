// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Random heights for newly inserted nodes.
//!
//! Heights follow a geometric distribution: every node is on level 0, and a
//! node on level `n` is promoted to level `n + 1` with probability `P`. The
//! generator is owned by the list and handed in at construction, so tests can
//! pin the shape of the list with a fixed seed.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Maximum number of levels a node (and the header) can have.
pub const MAX_LEVEL: usize = 32;

/// Promotion probability between adjacent levels.
pub const P: f64 = 0.25;

/// Source of node heights.
pub trait LevelGenerator {
    /// The largest height this generator will ever return.
    fn max_level(&self) -> usize;

    /// Draw a height in `1..=self.max_level()`.
    fn random_height(&mut self) -> usize;
}

/// Geometric level generator backed by any `rand` RNG.
#[derive(Debug, Clone)]
pub struct Geometric<R = StdRng> {
    rng: R,
    p: f64,
    max_level: usize,
}

impl Geometric<StdRng> {
    /// A generator seeded from the operating system, with `P` and `MAX_LEVEL`.
    pub fn new() -> Self {
        return Geometric::from_rng(StdRng::from_entropy());
    }

    /// A deterministic generator. Two lists built with the same seed and the
    /// same operations have identical shapes.
    pub fn seeded(seed: u64) -> Self {
        return Geometric::from_rng(StdRng::seed_from_u64(seed));
    }
}

impl<R: Rng> Geometric<R> {
    /// Wrap an existing RNG, using `P` and `MAX_LEVEL`.
    pub fn from_rng(rng: R) -> Self {
        return Geometric { rng, p: P, max_level: MAX_LEVEL };
    }

    /// Wrap an RNG with a custom promotion probability and height cap.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < p < 1` and `1 <= max_level <= MAX_LEVEL`.
    pub fn with_params(rng: R, p: f64, max_level: usize) -> Self {
        assert!(p > 0.0 && p < 1.0, "p must be in (0, 1), got {}", p);
        assert!(
            (1..=MAX_LEVEL).contains(&max_level),
            "max_level must be in 1..={}, got {}",
            MAX_LEVEL,
            max_level
        );
        return Geometric { rng, p, max_level };
    }
}

impl Default for Geometric<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LevelGenerator for Geometric<R> {
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn random_height(&mut self) -> usize {
        let mut height = 1;
        while height < self.max_level && self.rng.gen_range(0.0..1.0) < self.p {
            height += 1;
        }
        height
    }
}
