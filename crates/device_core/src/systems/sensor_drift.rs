//! Sensor drift system: applies the per-tick random walk to the moisture
//! reading. Soil loses moisture while the pump is off and gains it while the
//! pump is running; the sensor clamps every result to `0..=100`.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::SimulationClock;
use crate::device::{MoistureSensor, Pump};
use crate::drift::DriftModel;

pub fn sensor_drift_system(
    clock: Res<SimulationClock>,
    drift: Res<DriftModel>,
    pump: Res<Pump>,
    mut sensor: ResMut<MoistureSensor>,
) {
    let delta = if pump.is_on() {
        i16::from(drift.sample_fill(clock.now()))
    } else {
        -i16::from(drift.sample_drain(clock.now()))
    };
    sensor.apply_delta(delta);
}
