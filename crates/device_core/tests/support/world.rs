#![allow(dead_code)]

use bevy_ecs::prelude::{Schedule, World};
use device_core::device::{Mode, PumpState};
use device_core::runner::device_schedule;
use device_core::scenario::{build_device, DeviceParams};

/// Builder configuration for reproducible test worlds.
#[derive(Clone, Copy, Debug)]
pub struct TestWorldConfig {
    pub seed: u64,
    pub initial_moisture: u8,
    pub initial_mode: Mode,
    pub initial_pump: PumpState,
    pub critical_threshold: u8,
    pub release_gap: u8,
    pub update_period_secs: u64,
    pub history_capacity: Option<usize>,
}

impl Default for TestWorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_moisture: 100,
            initial_mode: Mode::Manual,
            initial_pump: PumpState::Off,
            critical_threshold: 30,
            release_gap: 10,
            update_period_secs: 10,
            history_capacity: None,
        }
    }
}

/// Helper that builds a world with all device resources plus its schedule.
#[derive(Debug, Default)]
pub struct TestWorldBuilder {
    config: TestWorldConfig,
}

impl TestWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TestWorldConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn initial_moisture(mut self, moisture: u8) -> Self {
        self.config.initial_moisture = moisture;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.initial_mode = mode;
        self
    }

    pub fn pump(mut self, pump: PumpState) -> Self {
        self.config.initial_pump = pump;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> (World, Schedule) {
        let mut world = World::new();
        build_device(
            &mut world,
            DeviceParams {
                initial_moisture: self.config.initial_moisture,
                initial_mode: self.config.initial_mode,
                initial_pump: self.config.initial_pump,
                critical_threshold: self.config.critical_threshold,
                release_gap: self.config.release_gap,
                update_period_secs: self.config.update_period_secs,
                seed: Some(self.config.seed),
                history_capacity: self.config.history_capacity,
                ..Default::default()
            },
        );
        (world, device_schedule())
    }
}
