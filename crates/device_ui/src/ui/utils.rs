//! Utility functions for the UI: formatting and colors.

use eframe::egui::Color32;

use device_core::device::PumpState;

pub fn format_hms_from_secs(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Reading color: red when at or below the critical threshold, yellow inside
/// the hysteresis band, green above it.
pub fn moisture_color(moisture: u8, critical: u8, release: u8) -> Color32 {
    if moisture <= critical {
        Color32::from_rgb(220, 80, 80)
    } else if moisture <= release {
        Color32::from_rgb(220, 180, 60)
    } else {
        Color32::from_rgb(100, 200, 120)
    }
}

pub fn pump_color(state: PumpState) -> Color32 {
    match state {
        PumpState::On => Color32::from_rgb(100, 180, 240),
        PumpState::Off => Color32::GRAY,
    }
}

pub fn chart_color_moisture() -> Color32 {
    Color32::from_rgb(100, 180, 240)
}

pub fn chart_color_critical() -> Color32 {
    Color32::from_rgb(220, 80, 80)
}

pub fn chart_color_release() -> Color32 {
    Color32::from_rgb(220, 180, 60)
}
