//! Device state: control mode, pump actuator and moisture sensor.
//!
//! All three live in the ECS world as resources. Manual operations are plain
//! assignments; the automatic controller overrides them at the next tick when
//! the device is in [Mode::Automatic].

use bevy_ecs::prelude::Resource;

/// Moisture is a percentage; every mutation clamps back into this range.
pub const MAX_MOISTURE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Manual,
    Automatic,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Manual => "Manual",
            Mode::Automatic => "Automatic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    On,
    Off,
}

impl PumpState {
    pub fn label(self) -> &'static str {
        match self {
            PumpState::On => "ON",
            PumpState::Off => "OFF",
        }
    }
}

/// Current control regime. Set by the user, read by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct ControlMode(pub Mode);

impl ControlMode {
    pub fn set(&mut self, mode: Mode) {
        if self.0 != mode {
            tracing::info!(mode = mode.label(), "control mode changed");
        }
        self.0 = mode;
    }
}

/// The simulated pump, binary on/off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct Pump {
    pub state: PumpState,
}

impl Pump {
    pub fn start(&mut self) {
        self.state = PumpState::On;
    }

    pub fn stop(&mut self) {
        self.state = PumpState::Off;
    }

    pub fn is_on(&self) -> bool {
        self.state == PumpState::On
    }
}

/// Simulated soil-moisture reading, always within `0..=MAX_MOISTURE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Resource)]
pub struct MoistureSensor {
    value: u8,
}

impl MoistureSensor {
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(MAX_MOISTURE),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Applies a signed delta and clamps back into `0..=MAX_MOISTURE`.
    pub fn apply_delta(&mut self, delta: i16) {
        let next = i16::from(self.value) + delta;
        self.value = next.clamp(0, i16::from(MAX_MOISTURE)) as u8;
    }
}
