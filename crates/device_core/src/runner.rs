//! Tick runner: advances the clock and runs the device schedule.
//!
//! Clock progression happens here, outside systems, so every system in one
//! tick observes the same timestamp. Tick order is drift, then automatic
//! control, then history recording, matching the device's update contract.

use bevy_ecs::prelude::{Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::SimulationClock;
use crate::scenario::RunState;
use crate::systems::{
    pump_control::pump_control_system, record_history::record_history_system,
    sensor_drift::sensor_drift_system,
};

/// Builds the device schedule: the three tick phases, strictly chained.
pub fn device_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            sensor_drift_system,
            pump_control_system,
            record_history_system,
        )
            .chain(),
    );
    schedule
}

/// Runs one tick: advances the clock one period, then runs the schedule.
/// Returns `false` without ticking when [RunState] has been cleared.
pub fn run_next_tick(world: &mut World, schedule: &mut Schedule) -> bool {
    let running = world
        .get_resource::<RunState>()
        .map(|state| state.is_running)
        .unwrap_or(false);
    if !running {
        return false;
    }

    world.resource_mut::<SimulationClock>().advance();
    schedule.run(world);
    true
}

/// Runs up to `max_ticks` ticks and returns the number executed.
pub fn run_ticks(world: &mut World, schedule: &mut Schedule, max_ticks: usize) -> usize {
    let mut ticks = 0;
    while ticks < max_ticks && run_next_tick(world, schedule) {
        ticks += 1;
    }
    ticks
}

/// Clears the run flag; in-flight ticks finish, no further ticks start.
pub fn stop(world: &mut World) {
    if let Some(mut state) = world.get_resource_mut::<RunState>() {
        if state.is_running {
            tracing::info!("device simulation stopped");
        }
        state.is_running = false;
    }
}
