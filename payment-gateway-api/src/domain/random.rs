use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of uniform values in `[0, 1)` used by the local settlement decision.
///
/// Injected rather than reached for globally so each decision draws from a source
/// the caller controls.
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}

/// Production source: a fresh entropy-seeded generator for every draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropyRandom;

impl RandomSource for EntropyRandom {
    fn next_f64(&self) -> f64 {
        StdRng::from_entropy().gen::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_f64(&self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of values, repeating the last one once exhausted.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Mutex<VecDeque<f64>>,
    last: Mutex<f64>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: VecDeque<f64> = values.into_iter().collect();
        let first = values.front().copied().unwrap_or(0.0);
        Self {
            values: Mutex::new(values),
            last: Mutex::new(first),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&self) -> f64 {
        let mut last = self.last.lock();
        if let Some(value) = self.values.lock().pop_front() {
            *last = value;
        }
        *last
    }
}

/// Deterministic uniform source for repeatable statistical tests.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&self) -> f64 {
        self.rng.lock().gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_random_in_unit_interval() {
        let source = EntropyRandom;
        for _ in 0..1_000 {
            let v = source.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_sequence_random_repeats_last() {
        let source = SequenceRandom::new([0.1, 0.8]);
        assert_eq!(source.next_f64(), 0.1);
        assert_eq!(source.next_f64(), 0.8);
        assert_eq!(source.next_f64(), 0.8);
    }

    #[test]
    fn test_seeded_random_is_repeatable() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }
}
