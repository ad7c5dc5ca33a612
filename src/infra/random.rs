use crate::app::ports::RandomSource;
use rand::Rng;

pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always yields the same value; for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(f64);

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }
}

impl RandomSource for FixedRandom {
    fn next(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_is_unit_interval() {
        let rng = ThreadRandom;
        for _ in 0..100 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn fixed_random_is_clamped() {
        assert_eq!(FixedRandom::new(-1.0).next(), 0.0);
        assert!(FixedRandom::new(2.0).next() < 1.0);
    }
}
