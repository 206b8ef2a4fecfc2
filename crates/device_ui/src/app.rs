//! Application state for the device simulator UI.

pub mod presets;
mod simulation;

use std::path::PathBuf;
use std::time::Instant;

use bevy_ecs::prelude::{Schedule, World};

use device_core::device::Mode;
use device_core::scenario::DeviceParams;

use crate::app::presets::{load_autosave_preset, presets_file_path};

/// Main application state. The UI thread owns the world and the schedule, so
/// manual pump/mode operations and ticks share one execution context and no
/// locking is needed.
pub struct DeviceUiApp {
    pub world: World,
    pub schedule: Schedule,
    pub ticks_executed: usize,
    pub auto_run: bool,
    pub started: bool,
    pub speed_multiplier: f64,
    /// Accumulated simulated seconds not yet spent on whole ticks.
    pub tick_budget_secs: f64,
    pub last_frame_instant: Option<Instant>,

    // Device parameters; applied when the simulation is (re)built.
    pub initial_moisture: u8,
    pub critical_threshold: u8,
    pub release_gap: u8,
    pub update_period_secs: u64,
    pub drain_min: u8,
    pub drain_max: u8,
    pub fill_min: u8,
    pub fill_max: u8,
    pub seed_enabled: bool,
    pub seed_value: u64,
    pub history_cap_enabled: bool,
    pub history_cap: usize,

    /// Mode the user selected; mirrored into the world on change.
    pub mode_selection: Mode,
    pub show_thresholds: bool,
    pub status_message: Option<String>,
    pub preset_load_error: Option<String>,
    pub preset_save_error: Option<String>,
    preset_file_path: Option<PathBuf>,
}

impl DeviceUiApp {
    pub fn new() -> Self {
        let defaults = DeviceParams::default();
        let mut preset_load_error = None;
        let preset_file_path = match presets_file_path() {
            Ok(path) => Some(path),
            Err(error) => {
                preset_load_error = Some(format!("Preset storage disabled: {error}"));
                None
            }
        };

        let mut app = Self {
            world: World::new(),
            schedule: Schedule::default(),
            ticks_executed: 0,
            auto_run: false,
            started: false,
            speed_multiplier: 10.0,
            tick_budget_secs: 0.0,
            last_frame_instant: None,
            initial_moisture: defaults.initial_moisture,
            critical_threshold: defaults.critical_threshold,
            release_gap: defaults.release_gap,
            update_period_secs: defaults.update_period_secs,
            drain_min: defaults.drain_range.0,
            drain_max: defaults.drain_range.1,
            fill_min: defaults.fill_range.0,
            fill_max: defaults.fill_range.1,
            seed_enabled: false,
            seed_value: 42,
            history_cap_enabled: false,
            history_cap: 10_000,
            mode_selection: defaults.initial_mode,
            show_thresholds: true,
            status_message: None,
            preset_load_error,
            preset_save_error: None,
            preset_file_path,
        };

        if let Some(path) = app.preset_file_path.clone() {
            match load_autosave_preset(&path) {
                Ok(Some(preset)) => preset.apply_to_app(&mut app),
                Ok(None) => {}
                Err(error) => {
                    app.preset_load_error = Some(format!("Preset load warning: {error}"));
                }
            }
        }

        app.rebuild_device(false, false);
        app
    }

    pub(crate) fn preset_file_path(&self) -> Option<&PathBuf> {
        self.preset_file_path.as_ref()
    }
}
