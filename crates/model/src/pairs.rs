use num_rational::Ratio;

use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) for generated location ids.
const ID_BOUNDARY: i64 = 100_000;

/// Infinite stream of random location id pairs.
///
/// Ids drawn from the shared pool can land in either list, so the generated
/// lists contain duplicates and cross-list matches.
pub struct PairGenerator {
    rng: SmallRng,
    shared_pool: Vec<i64>,
}

impl PairGenerator {
    const POOL_GROWTH: Ratio<u32> = Ratio::new_raw(1, 100);
    const POOL_DRAWS: Ratio<u32> = Ratio::new_raw(50, 100);

    pub fn new() -> Self {
        PairGenerator {
            rng: SmallRng::from_os_rng(),
            shared_pool: Vec::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        PairGenerator {
            rng: SmallRng::seed_from_u64(seed),
            shared_pool: Vec::new(),
        }
    }

    fn random_ratio(&mut self, ratio: Ratio<u32>) -> bool {
        self.rng.random_ratio(*ratio.numer(), *ratio.denom())
    }

    fn peek_location_id(&mut self) -> i64 {
        if self.random_ratio(Self::POOL_DRAWS) {
            if let Some(id) = self.shared_pool.choose(&mut self.rng) {
                return *id;
            }
        }
        self.rng.random_range(0..ID_BOUNDARY)
    }
}

impl Default for PairGenerator {
    fn default() -> Self {
        PairGenerator::new()
    }
}

impl Iterator for PairGenerator {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.random_ratio(Self::POOL_GROWTH) {
            let id = self.rng.random_range(0..ID_BOUNDARY);
            self.shared_pool.push(id);
        }
        Some((self.peek_location_id(), self.peek_location_id()))
    }
}
