//! Device preset persistence: the last-used parameters are autosaved to a
//! JSON file in the working directory and restored on startup. Persistence
//! covers configuration only, never simulated history.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::DeviceUiApp;

pub const PRESETS_FILE_NAME: &str = "device_presets.json";
pub const PRESET_FILE_VERSION: u32 = 1;

#[derive(Debug)]
pub enum PresetStoreError {
    Io(String),
    InvalidFormat(String),
}

impl fmt::Display for PresetStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetStoreError::Io(message) => write!(f, "preset io error: {message}"),
            PresetStoreError::InvalidFormat(message) => {
                write!(f, "preset format error: {message}")
            }
        }
    }
}

impl std::error::Error for PresetStoreError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DevicePresetV1 {
    pub version: u32,
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
    pub speed_multiplier: f64,
    pub show_thresholds: bool,
}

impl DevicePresetV1 {
    pub fn from_app(app: &DeviceUiApp) -> Self {
        Self {
            version: PRESET_FILE_VERSION,
            initial_moisture: app.initial_moisture,
            critical_threshold: app.critical_threshold,
            release_gap: app.release_gap,
            update_period_secs: app.update_period_secs,
            drain_min: app.drain_min,
            drain_max: app.drain_max,
            fill_min: app.fill_min,
            fill_max: app.fill_max,
            seed_enabled: app.seed_enabled,
            seed_value: app.seed_value,
            history_cap_enabled: app.history_cap_enabled,
            history_cap: app.history_cap,
            speed_multiplier: app.speed_multiplier,
            show_thresholds: app.show_thresholds,
        }
    }

    pub fn apply_to_app(&self, app: &mut DeviceUiApp) {
        app.initial_moisture = self.initial_moisture.min(100);
        app.critical_threshold = self.critical_threshold;
        app.release_gap = self.release_gap;
        app.update_period_secs = self.update_period_secs.max(1);
        app.drain_min = self.drain_min;
        app.drain_max = self.drain_max.max(self.drain_min);
        app.fill_min = self.fill_min;
        app.fill_max = self.fill_max.max(self.fill_min);
        app.seed_enabled = self.seed_enabled;
        app.seed_value = self.seed_value;
        app.history_cap_enabled = self.history_cap_enabled;
        app.history_cap = self.history_cap.max(1);
        app.speed_multiplier = self.speed_multiplier.clamp(1.0, 600.0);
        app.show_thresholds = self.show_thresholds;
    }
}

pub fn presets_file_path() -> Result<PathBuf, PresetStoreError> {
    let cwd = std::env::current_dir().map_err(|error| {
        PresetStoreError::Io(format!("failed to read current directory: {error}"))
    })?;
    Ok(cwd.join(PRESETS_FILE_NAME))
}

pub fn load_autosave_preset(path: &Path) -> Result<Option<DevicePresetV1>, PresetStoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .map_err(|error| PresetStoreError::Io(format!("failed to read {path:?}: {error}")))?;
    let preset: DevicePresetV1 = serde_json::from_str(&contents)
        .map_err(|error| PresetStoreError::InvalidFormat(error.to_string()))?;
    if preset.version != PRESET_FILE_VERSION {
        return Err(PresetStoreError::InvalidFormat(format!(
            "unsupported preset version {}",
            preset.version
        )));
    }
    Ok(Some(preset))
}

/// Writes to a temp file and renames over the target so a crash mid-write
/// never truncates an existing preset.
pub fn save_autosave_preset(path: &Path, preset: &DevicePresetV1) -> Result<(), PresetStoreError> {
    let serialized = serde_json::to_string_pretty(preset)
        .map_err(|error| PresetStoreError::InvalidFormat(error.to_string()))?;

    let tmp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp_path)
        .map_err(|error| PresetStoreError::Io(format!("failed to create {tmp_path:?}: {error}")))?;
    file.write_all(serialized.as_bytes())
        .map_err(|error| PresetStoreError::Io(format!("failed to write {tmp_path:?}: {error}")))?;
    file.sync_all()
        .map_err(|error| PresetStoreError::Io(format!("failed to sync {tmp_path:?}: {error}")))?;
    drop(file);

    fs::rename(&tmp_path, path)
        .map_err(|error| PresetStoreError::Io(format!("failed to replace {path:?}: {error}")))
}
