//! Constants used throughout the UI.

/// Moisture is a percentage; the chart y-axis is pinned to this range.
pub const MOISTURE_AXIS_MIN: f64 = 0.0;
pub const MOISTURE_AXIS_MAX: f64 = 100.0;

pub const CHART_HEIGHT: f32 = 340.0;
