//! Control panel UI: run controls, device parameters and manual operations.

use eframe::egui;

use device_core::clock::SimulationClock;
use device_core::device::Mode;
use device_core::scenario::RunState;

use crate::app::DeviceUiApp;
use crate::ui::utils::format_hms_from_secs;

pub fn render_control_panel(ui: &mut egui::Ui, app: &mut DeviceUiApp) {
    render_top_controls(ui, app);

    egui::CollapsingHeader::new("Device parameters")
        .default_open(false)
        .show(ui, |ui| {
            render_device_parameters(ui, app);
        });

    egui::CollapsingHeader::new("Manual controls")
        .default_open(true)
        .show(ui, |ui| {
            render_manual_controls(ui, app);
        });

    if let Some(message) = app.preset_load_error.clone() {
        ui.colored_label(egui::Color32::YELLOW, message);
    }
    if let Some(message) = app.preset_save_error.clone() {
        ui.colored_label(egui::Color32::YELLOW, message);
    }
}

fn render_top_controls(ui: &mut egui::Ui, app: &mut DeviceUiApp) {
    ui.horizontal(|ui| {
        let can_start = !app.started;
        if ui
            .add_enabled(can_start, egui::Button::new("Start"))
            .clicked()
        {
            app.start_simulation();
        }
        if ui
            .button(if app.auto_run { "Pause" } else { "Run" })
            .clicked()
            && app.started
        {
            app.auto_run = !app.auto_run;
            if app.auto_run {
                app.last_frame_instant = Some(std::time::Instant::now());
            }
        }
        if ui.button("Step").clicked() {
            if !app.started {
                app.start_simulation();
                app.auto_run = false;
            }
            app.run_steps(1);
        }
        if ui.button("Step 10").clicked() {
            if !app.started {
                app.start_simulation();
                app.auto_run = false;
            }
            app.run_steps(10);
        }
        if ui.button("Stop").clicked() {
            app.stop_device();
        }
        if ui.button("Reset").clicked() {
            app.reset();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Clock speed");
        egui::ComboBox::from_id_salt("clock_speed")
            .selected_text(format!("{}x", app.speed_multiplier as u32))
            .show_ui(ui, |ui| {
                for speed in [1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0, 600.0] {
                    ui.selectable_value(
                        &mut app.speed_multiplier,
                        speed,
                        format!("{}x", speed as u32),
                    );
                }
            });

        let sim_now = app
            .world
            .get_resource::<SimulationClock>()
            .map(|clock| clock.now())
            .unwrap_or(0);
        ui.label(format!("Sim time: {}", format_hms_from_secs(sim_now)));
        ui.label(format!("Ticks executed: {}", app.ticks_executed));

        let running = app
            .world
            .get_resource::<RunState>()
            .map(|state| state.is_running)
            .unwrap_or(false);
        if !running {
            ui.colored_label(egui::Color32::LIGHT_RED, "stopped");
        }
    });
}

fn render_device_parameters(ui: &mut egui::Ui, app: &mut DeviceUiApp) {
    ui.label("Applied on Start or Reset.");

    ui.horizontal(|ui| {
        ui.label("Initial moisture (%)");
        ui.add(egui::Slider::new(&mut app.initial_moisture, 0..=100));
    });
    ui.horizontal(|ui| {
        ui.label("Critical threshold (%)");
        ui.add(egui::Slider::new(&mut app.critical_threshold, 0..=90));
        ui.label("Release gap (%)");
        ui.add(egui::Slider::new(&mut app.release_gap, 0..=50));
    });
    ui.horizontal(|ui| {
        ui.label("Update period (s)");
        ui.add(egui::DragValue::new(&mut app.update_period_secs).range(1..=3_600));
    });
    ui.horizontal(|ui| {
        ui.label("Drain per tick");
        ui.add(egui::DragValue::new(&mut app.drain_min).range(0..=50));
        ui.label("to");
        ui.add(egui::DragValue::new(&mut app.drain_max).range(0..=50));
        ui.label("Fill per tick");
        ui.add(egui::DragValue::new(&mut app.fill_min).range(0..=50));
        ui.label("to");
        ui.add(egui::DragValue::new(&mut app.fill_max).range(0..=50));
    });
    ui.horizontal(|ui| {
        ui.checkbox(&mut app.seed_enabled, "Fixed seed");
        if app.seed_enabled {
            ui.add(egui::DragValue::new(&mut app.seed_value));
        }
        ui.checkbox(&mut app.history_cap_enabled, "Cap history");
        if app.history_cap_enabled {
            ui.add(egui::DragValue::new(&mut app.history_cap).range(10..=1_000_000));
        }
    });
    ui.checkbox(&mut app.show_thresholds, "Show thresholds on chart");
}

fn render_manual_controls(ui: &mut egui::Ui, app: &mut DeviceUiApp) {
    ui.horizontal(|ui| {
        ui.label("Mode:");
        let mut mode = app.mode_selection;
        ui.radio_value(&mut mode, Mode::Manual, "Manual");
        ui.radio_value(&mut mode, Mode::Automatic, "Automatic");
        if mode != app.mode_selection {
            app.set_mode(mode);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Start Pump").clicked() {
            app.start_pump();
        }
        if ui.button("Stop Pump").clicked() {
            app.stop_pump();
        }
    });

    if let Some(message) = app.status_message.clone() {
        ui.weak(message);
    }
}
