use std::sync::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use crate::models::LiveMetrics;

pub trait MetricsSource: Send + Sync {
    fn sample(&self) -> LiveMetrics;
}

/// Pseudo-random host metrics for the live dashboard feed.
pub struct RandomMetrics {
    rng: Mutex<StdRng>,
}

impl RandomMetrics {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self { rng: Mutex::new(rng) }
    }
}

impl MetricsSource for RandomMetrics {
    fn sample(&self) -> LiveMetrics {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        LiveMetrics {
            cpu: rng.gen_range(20..=40),
            memory: rng.gen_range(60..=80),
            disk: rng.gen_range(75..=90),
            network: format!("{}M/s", rng.gen_range(100..=200u16)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let source = RandomMetrics::seeded(7);
        for _ in 0..500 {
            let metrics = source.sample();
            assert!((20..=40).contains(&metrics.cpu));
            assert!((60..=80).contains(&metrics.memory));
            assert!((75..=90).contains(&metrics.disk));

            let speed: u16 = metrics.network.strip_suffix("M/s").unwrap().parse().unwrap();
            assert!((100..=200).contains(&speed));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = RandomMetrics::seeded(42);
        let b = RandomMetrics::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }
}
