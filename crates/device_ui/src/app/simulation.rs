//! Simulation control: world construction, tick stepping and the manual
//! device operations exposed to the control panel.

use std::time::Instant;

use bevy_ecs::prelude::World;

use device_core::clock::SimulationClock;
use device_core::device::{ControlMode, Mode, MoistureSensor, Pump};
use device_core::runner::{device_schedule, run_next_tick, stop};
use device_core::scenario::{build_device, DeviceParams};
use device_core::telemetry::{DeviceSnapshot, DeviceSnapshots};

use crate::app::presets::{save_autosave_preset, DevicePresetV1};
use crate::app::DeviceUiApp;

impl DeviceUiApp {
    /// Parameters as currently edited in the control panel.
    pub fn current_params(&self) -> DeviceParams {
        DeviceParams {
            initial_moisture: self.initial_moisture,
            initial_mode: self.mode_selection,
            critical_threshold: self.critical_threshold,
            release_gap: self.release_gap,
            update_period_secs: self.update_period_secs.max(1),
            drain_range: (self.drain_min, self.drain_max.max(self.drain_min)),
            fill_range: (self.fill_min, self.fill_max.max(self.fill_min)),
            seed: self.seed_enabled.then_some(self.seed_value),
            history_capacity: self.history_cap_enabled.then_some(self.history_cap.max(1)),
            ..Default::default()
        }
    }

    pub(crate) fn rebuild_device(&mut self, started: bool, auto_run: bool) {
        let mut world = World::new();
        build_device(&mut world, self.current_params());
        self.world = world;
        self.schedule = device_schedule();
        self.ticks_executed = 0;
        self.tick_budget_secs = 0.0;
        self.started = started;
        self.auto_run = auto_run;
        self.status_message = None;
    }

    pub fn start_simulation(&mut self) {
        self.persist_autosave_preset();
        self.rebuild_device(true, true);
        self.last_frame_instant = Some(Instant::now());
    }

    pub fn reset(&mut self) {
        self.persist_autosave_preset();
        self.rebuild_device(false, false);
    }

    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            if !run_next_tick(&mut self.world, &mut self.schedule) {
                break;
            }
            self.ticks_executed += 1;
        }
    }

    /// Spends the accumulated budget (simulated seconds) on whole ticks and
    /// carries the remainder to the next frame.
    pub fn advance_by_budget(&mut self, budget_secs: f64) {
        let mut remaining = budget_secs.max(0.0);
        let period = self
            .world
            .get_resource::<SimulationClock>()
            .map(|clock| clock.period_secs() as f64)
            .unwrap_or(f64::INFINITY);

        while remaining >= period {
            if !run_next_tick(&mut self.world, &mut self.schedule) {
                break;
            }
            self.ticks_executed += 1;
            remaining -= period;
        }
        self.tick_budget_secs = remaining;
    }

    /// Latest published reading; before the first tick, composed from the
    /// live resources at time zero.
    pub fn current_reading(&self) -> Option<DeviceSnapshot> {
        if let Some(latest) = self
            .world
            .get_resource::<DeviceSnapshots>()
            .and_then(|snapshots| snapshots.latest)
        {
            return Some(latest);
        }
        let moisture = self.world.get_resource::<MoistureSensor>()?.value();
        let pump = self.world.get_resource::<Pump>()?.state;
        let mode = self.world.get_resource::<ControlMode>()?.0;
        Some(DeviceSnapshot {
            timestamp_secs: 0,
            moisture,
            pump,
            mode,
        })
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode_selection = mode;
        if let Some(mut control) = self.world.get_resource_mut::<ControlMode>() {
            control.set(mode);
        }
        self.status_message = Some(format!("Device is now in {} mode.", mode.label()));
    }

    pub fn start_pump(&mut self) {
        if let Some(mut pump) = self.world.get_resource_mut::<Pump>() {
            pump.start();
        }
    }

    pub fn stop_pump(&mut self) {
        if let Some(mut pump) = self.world.get_resource_mut::<Pump>() {
            pump.stop();
        }
    }

    /// Shuts the periodic trigger down; only Reset brings the device back.
    pub fn stop_device(&mut self) {
        stop(&mut self.world);
        self.auto_run = false;
        self.status_message = Some("Simulation stopped.".to_string());
    }

    pub fn persist_autosave_preset(&mut self) {
        let Some(path) = self.preset_file_path().cloned() else {
            return;
        };
        let preset = DevicePresetV1::from_app(self);
        match save_autosave_preset(&path, &preset) {
            Ok(()) => {
                self.preset_save_error = None;
            }
            Err(error) => {
                self.preset_save_error = Some(format!("Preset save warning: {error}"));
            }
        }
    }
}
