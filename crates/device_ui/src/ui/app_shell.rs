use std::time::{Duration, Instant};

use eframe::egui;

use crate::app::DeviceUiApp;
use crate::ui::controls::render_control_panel;
use crate::ui::dashboard::render_dashboard;

pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::Vec2::new(900.0, 760.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Soil-Moisture Device Simulator",
        options,
        Box::new(|_cc| Ok(Box::new(DeviceUiApp::new()))),
    )
}

impl eframe::App for DeviceUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.auto_run && self.started {
            let now = Instant::now();
            let last = self.last_frame_instant.unwrap_or(now);
            let mut delta_secs = now.saturating_duration_since(last).as_secs_f64();
            if delta_secs <= 0.0 {
                delta_secs = 0.016;
            }
            self.last_frame_instant = Some(now);
            let budget = self.tick_budget_secs + delta_secs * self.speed_multiplier;
            self.advance_by_budget(budget);
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            render_control_panel(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            render_dashboard(ui, self);
        });
    }
}
