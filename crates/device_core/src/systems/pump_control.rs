//! Automatic pump control: threshold comparison with a hysteresis band.
//!
//! In [Mode::Automatic] the pump switches on at or below the critical
//! threshold and off above the release level (critical + gap). Readings
//! inside the band leave the pump unchanged so it does not oscillate around
//! the threshold. Manual mode never touches the pump here.

use bevy_ecs::prelude::{Res, ResMut};

use crate::device::{ControlMode, Mode, MoistureSensor, Pump, PumpState};
use crate::scenario::ThresholdConfig;

pub fn pump_control_system(
    mode: Res<ControlMode>,
    thresholds: Res<ThresholdConfig>,
    sensor: Res<MoistureSensor>,
    mut pump: ResMut<Pump>,
) {
    if mode.0 != Mode::Automatic {
        return;
    }

    let moisture = sensor.value();
    if moisture <= thresholds.critical {
        if !pump.is_on() {
            tracing::debug!(moisture, "moisture at or below critical, pump on");
        }
        pump.state = PumpState::On;
    } else if moisture > thresholds.release() {
        if pump.is_on() {
            tracing::debug!(moisture, "moisture above release level, pump off");
        }
        pump.state = PumpState::Off;
    }
    // Inside the band the pump keeps its current state.
}
