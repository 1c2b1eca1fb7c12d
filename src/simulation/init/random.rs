use rand::{Rng, RngCore};

/// Every random draw the engine makes goes through this trait.
///
/// Any `rand` generator is a `Dice`; tests can substitute a scripted one to
/// pin individual draws.
pub trait Dice {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform float in `[0, max)`.
    #[inline]
    fn uniform(&mut self, max: f64) -> f64 {
        self.unit() * max
    }

    /// True with probability `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    #[inline]
    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl<R: RngCore + ?Sized> Dice for R {
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(0xBEEF);
        for _ in 0..1000 {
            assert!(rng.below(8) < 8);
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
            assert!(rng.uniform(128.0) < 128.0);
        }
    }

    #[test]
    fn chance_extremes_are_certain() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(rng.chance(1.0));
            assert!(!rng.chance(0.0));
        }
    }
}
