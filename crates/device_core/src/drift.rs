//! Stochastic moisture drift: soil drains while the pump is off and fills
//! while it is on.
//!
//! Draws are uniform over a closed range. Each draw seeds its own RNG from
//! the model seed mixed with the tick timestamp, so a given tick always
//! produces the same delta for a given seed (reproducible runs, and systems
//! stay free of mutable RNG state).

use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Mixed into the seed for fill draws so drain and fill streams differ.
const FILL_SEED_SALT: u64 = 0xf111_5eed;

#[derive(Debug, Clone, Copy, Resource)]
pub struct DriftModel {
    /// Moisture lost per tick while the pump is off (inclusive range).
    pub drain_min: u8,
    pub drain_max: u8,
    /// Moisture gained per tick while the pump is on (inclusive range).
    pub fill_min: u8,
    pub fill_max: u8,
    /// Seed for RNG (for reproducibility).
    pub seed: u64,
}

impl Default for DriftModel {
    fn default() -> Self {
        Self {
            drain_min: 5,
            drain_max: 10,
            fill_min: 10,
            fill_max: 15,
            seed: 0,
        }
    }
}

impl DriftModel {
    /// Uniform draw from the drain range for the given tick timestamp.
    pub fn sample_drain(&self, tick_secs: u64) -> u8 {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(tick_secs));
        rng.gen_range(self.drain_min..=self.drain_max.max(self.drain_min))
    }

    /// Uniform draw from the fill range for the given tick timestamp.
    pub fn sample_fill(&self, tick_secs: u64) -> u8 {
        let mut rng = StdRng::seed_from_u64((self.seed ^ FILL_SEED_SALT).wrapping_add(tick_secs));
        rng.gen_range(self.fill_min..=self.fill_max.max(self.fill_min))
    }
}
