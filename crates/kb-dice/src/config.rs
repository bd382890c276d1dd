//! Configuration for the random source.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// How to build the random number generator handed to every roll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the generator described by this configuration.
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                tracing::debug!(seed, "seeding generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config_is_unseeded() {
        let cfg = RollerConfig::default();
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_sets_seed() {
        let cfg = RollerConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }

    #[test]
    fn same_seed_same_sequence() {
        let cfg = RollerConfig::default().with_seed(7);
        let mut a = cfg.build_rng();
        let mut b = cfg.build_rng();
        for _ in 0..20 {
            assert_eq!(a.random_range(1..=100u32), b.random_range(1..=100u32));
        }
    }
}
