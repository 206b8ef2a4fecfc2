//! Readings panel and the live moisture chart.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot};

use device_core::scenario::ThresholdConfig;
use device_core::telemetry::MoistureHistory;

use crate::app::DeviceUiApp;
use crate::ui::constants::{CHART_HEIGHT, MOISTURE_AXIS_MAX, MOISTURE_AXIS_MIN};
use crate::ui::utils::{
    chart_color_critical, chart_color_moisture, chart_color_release, format_hms_from_secs,
    moisture_color, pump_color,
};

pub fn render_dashboard(ui: &mut egui::Ui, app: &mut DeviceUiApp) {
    render_readings_panel(ui, app);
    ui.separator();
    render_chart_panel(ui, app);
}

fn render_readings_panel(ui: &mut egui::Ui, app: &DeviceUiApp) {
    let Some(reading) = app.current_reading() else {
        ui.label("Waiting for device state...");
        return;
    };
    let thresholds = app
        .world
        .get_resource::<ThresholdConfig>()
        .copied()
        .unwrap_or_default();

    ui.horizontal(|ui| {
        ui.label("Soil Moisture:");
        ui.colored_label(
            moisture_color(reading.moisture, thresholds.critical, thresholds.release()),
            format!("{}%", reading.moisture),
        );
        ui.separator();
        ui.label("Pump State:");
        ui.colored_label(pump_color(reading.pump), reading.pump.label());
        ui.separator();
        ui.label("Mode:");
        ui.label(reading.mode.label());
        ui.separator();
        ui.label(format!(
            "Last update: {}",
            format_hms_from_secs(reading.timestamp_secs)
        ));
    });
}

fn render_chart_panel(ui: &mut egui::Ui, app: &DeviceUiApp) {
    let Some(history) = app.world.get_resource::<MoistureHistory>() else {
        return;
    };
    let series: Vec<[f64; 2]> = history
        .points
        .iter()
        .map(|point| [point.timestamp_secs as f64, f64::from(point.moisture)])
        .collect();
    let thresholds = app
        .world
        .get_resource::<ThresholdConfig>()
        .copied()
        .unwrap_or_default();

    ui.heading("Soil Moisture Levels");
    Plot::new("moisture_plot")
        .height(CHART_HEIGHT)
        .include_y(MOISTURE_AXIS_MIN)
        .include_y(MOISTURE_AXIS_MAX)
        .legend(Legend::default())
        .x_axis_formatter(|mark, _| format_hms_from_secs(mark.value.max(0.0) as u64))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Soil Moisture", series)
                    .color(chart_color_moisture())
                    .width(2.0),
            );
            if app.show_thresholds {
                plot_ui.hline(
                    HLine::new("Critical threshold", f64::from(thresholds.critical))
                        .color(chart_color_critical()),
                );
                plot_ui.hline(
                    HLine::new("Release level", f64::from(thresholds.release()))
                        .color(chart_color_release()),
                );
            }
        });
}
