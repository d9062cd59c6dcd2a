//! Injectable randomness for the probabilistic branches of care actions.
//!
//! Every random decision the engine makes is a single call to
//! [`RandomSource::next_fraction`]. Production callers wrap a `rand`
//! generator in [`RngSource`]; tests and scripted scenarios use
//! [`FixedSequence`] to force a particular branch.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform fractions in `[0, 1)`.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;

    /// Roll against probability `p`: true when the draw lands below `p`.
    ///
    /// `p <= 0.0` never succeeds and `p >= 1.0` always does, but a value is
    /// drawn either way so that sequences stay aligned across branches.
    fn chance(&mut self, p: f64) -> bool {
        self.next_fraction() < p
    }
}

/// Adapter from any `rand::Rng` to [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for soak tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_fraction(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of fractions, cycling when exhausted.
///
/// Values are clamped into `[0, 1)` on construction. An empty list behaves
/// like `[0.0]`.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| v.clamp(0.0, 0.999_999))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Always returns the same draw.
    pub fn always(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// A source under which every probabilistic risk fails to trigger.
    pub fn never() -> Self {
        Self::always(0.999_999)
    }

    /// A source under which every probabilistic risk triggers.
    pub fn every_time() -> Self {
        Self::always(0.0)
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for FixedSequence {
    fn next_fraction(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
