//! Device scenario: parameters and world construction.

use bevy_ecs::prelude::{Resource, World};

use crate::clock::{SimulationClock, DEFAULT_PERIOD_SECS};
use crate::device::{ControlMode, Mode, MoistureSensor, Pump, PumpState, MAX_MOISTURE};
use crate::drift::DriftModel;
use crate::telemetry::{DeviceSnapshots, HistoryPoint, MoistureHistory};

/// Automatic-control thresholds. The pump switches on at or below `critical`
/// and off above `critical + release_gap`; moisture inside the gap leaves the
/// pump unchanged, preventing rapid toggling around the threshold.
#[derive(Debug, Clone, Copy, Resource)]
pub struct ThresholdConfig {
    pub critical: u8,
    pub release_gap: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            critical: 30,
            release_gap: 10,
        }
    }
}

impl ThresholdConfig {
    /// Moisture level above which the automatic controller switches off.
    pub fn release(&self) -> u8 {
        self.critical.saturating_add(self.release_gap)
    }
}

/// Whether the periodic trigger may keep scheduling ticks. Cleared on
/// shutdown; the runner refuses further ticks once it is false.
#[derive(Debug, Clone, Copy, Resource)]
pub struct RunState {
    pub is_running: bool,
}

impl Default for RunState {
    fn default() -> Self {
        Self { is_running: true }
    }
}

/// Everything needed to build a device world.
#[derive(Debug, Clone, Copy)]
pub struct DeviceParams {
    pub initial_moisture: u8,
    pub initial_mode: Mode,
    pub initial_pump: PumpState,
    pub critical_threshold: u8,
    pub release_gap: u8,
    /// Interval between sensor updates in simulated seconds.
    pub update_period_secs: u64,
    /// Moisture lost per tick while the pump is off (inclusive).
    pub drain_range: (u8, u8),
    /// Moisture gained per tick while the pump is on (inclusive).
    pub fill_range: (u8, u8),
    /// Seed for RNG; `None` derives one from wall-clock time.
    pub seed: Option<u64>,
    /// Optional cap on history length; `None` keeps every point.
    pub history_capacity: Option<usize>,
}

impl Default for DeviceParams {
    fn default() -> Self {
        Self {
            initial_moisture: MAX_MOISTURE,
            initial_mode: Mode::Manual,
            initial_pump: PumpState::Off,
            critical_threshold: 30,
            release_gap: 10,
            update_period_secs: DEFAULT_PERIOD_SECS,
            drain_range: (5, 10),
            fill_range: (10, 15),
            seed: None,
            history_capacity: None,
        }
    }
}

fn wall_clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Inserts every device resource into `world` and seeds the history with the
/// initial reading at time zero.
pub fn build_device(world: &mut World, params: DeviceParams) {
    let initial_moisture = params.initial_moisture.min(MAX_MOISTURE);
    let seed = params.seed.unwrap_or_else(wall_clock_seed);

    world.insert_resource(SimulationClock::new(params.update_period_secs.max(1)));
    world.insert_resource(ControlMode(params.initial_mode));
    world.insert_resource(Pump {
        state: params.initial_pump,
    });
    world.insert_resource(MoistureSensor::new(initial_moisture));
    world.insert_resource(ThresholdConfig {
        critical: params.critical_threshold,
        release_gap: params.release_gap,
    });
    world.insert_resource(DriftModel {
        drain_min: params.drain_range.0,
        drain_max: params.drain_range.1.max(params.drain_range.0),
        fill_min: params.fill_range.0,
        fill_max: params.fill_range.1.max(params.fill_range.0),
        seed,
    });

    let mut history = MoistureHistory::with_capacity_limit(params.history_capacity);
    history.push(HistoryPoint {
        timestamp_secs: 0,
        moisture: initial_moisture,
    });
    world.insert_resource(history);
    world.insert_resource(DeviceSnapshots::default());
    world.insert_resource(RunState::default());
}
