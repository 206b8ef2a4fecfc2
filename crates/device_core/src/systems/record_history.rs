//! Records the post-control reading: appends one history point per tick and
//! publishes the latest snapshot for display observers.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::SimulationClock;
use crate::device::{ControlMode, MoistureSensor, Pump};
use crate::telemetry::{DeviceSnapshot, DeviceSnapshots, HistoryPoint, MoistureHistory};

pub fn record_history_system(
    clock: Res<SimulationClock>,
    mode: Res<ControlMode>,
    pump: Res<Pump>,
    sensor: Res<MoistureSensor>,
    mut history: ResMut<MoistureHistory>,
    mut snapshots: ResMut<DeviceSnapshots>,
) {
    let point = HistoryPoint {
        timestamp_secs: clock.now(),
        moisture: sensor.value(),
    };
    history.push(point);
    snapshots.latest = Some(DeviceSnapshot {
        timestamp_secs: point.timestamp_secs,
        moisture: point.moisture,
        pump: pump.state,
        mode: mode.0,
    });
}
