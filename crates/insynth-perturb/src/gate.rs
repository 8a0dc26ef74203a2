//! Bernoulli gate deciding whether a perturbation fires.

use rand::distributions::Standard;
use rand::{Rng, RngCore};

/// Firing probability check.
///
/// Every call to [`Gate::fires`] consumes exactly one uniform `f64` from the
/// RNG, whatever the outcome, so a closed gate keeps two identically seeded
/// generators in lockstep. Probabilities outside `[0, 1]` saturate: a
/// negative `p` never fires, `p > 1` always does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    p: f64,
}

impl Gate {
    /// Create a gate that fires with probability `p`.
    pub fn new(p: f64) -> Self {
        Self { p }
    }

    /// A gate that always fires.
    pub fn always() -> Self {
        Self::new(1.0)
    }

    /// A gate that never fires.
    pub fn never() -> Self {
        Self::new(0.0)
    }

    /// Firing probability.
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Draw `u` in `[0, 1)` and fire iff `u < p`.
    pub fn fires(&self, rng: &mut dyn RngCore) -> bool {
        let u: f64 = rng.sample(Standard);
        u < self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert!(Gate::always().fires(&mut rng));
            assert!(!Gate::never().fires(&mut rng));
        }
    }

    #[test]
    fn test_out_of_range_saturates() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(Gate::new(1.5).fires(&mut rng));
            assert!(!Gate::new(-0.5).fires(&mut rng));
        }
    }

    #[test]
    fn test_firing_rate() {
        let mut rng = StdRng::seed_from_u64(7);
        let gate = Gate::new(0.3);
        let fired = (0..10_000).filter(|_| gate.fires(&mut rng)).count();
        assert!((2700..3300).contains(&fired), "fired {fired}");
    }

    #[test]
    fn test_one_draw_per_call() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        Gate::never().fires(&mut a);
        let _: f64 = b.sample(Standard);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
