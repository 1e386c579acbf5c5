// src/visualization/window.rs

use super::plotter::SharedPlotter;
use super::VisualizationConfig;
use crate::processing::classifier::FallState;
use eframe::egui;

pub struct FallChartWindow {
    plotter: SharedPlotter,
    config: VisualizationConfig,
}

impl FallChartWindow {
    pub fn new(plotter: SharedPlotter, config: VisualizationConfig) -> Self {
        Self { plotter, config }
    }

    pub fn run(plotter: SharedPlotter, config: VisualizationConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([config.window_width as f32, config.window_height as f32])
                .with_title("Fall Detection Window"),
            ..Default::default()
        };

        eframe::run_native(
            "Fall Detection Window",
            options,
            Box::new(|_cc| Ok(Box::new(FallChartWindow::new(plotter, config)))),
        )
    }

    fn state_color(state: FallState) -> egui::Color32 {
        match state {
            FallState::NoFall => egui::Color32::LIGHT_GREEN,
            FallState::PreFall => egui::Color32::YELLOW,
            FallState::Fall => egui::Color32::RED,
            FallState::PostFall => egui::Color32::LIGHT_BLUE,
        }
    }
}

impl eframe::App for FallChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint_after(std::time::Duration::from_millis(
            self.config.update_interval_ms,
        ));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Real-Time Fall Detection (Last 5 Seconds)");
            ui.separator();

            let (window, latest) = {
                let plotter = self.plotter.lock().unwrap();
                (plotter.window().to_vec(), plotter.latest())
            };

            match latest {
                Some((svm, state)) => {
                    ui.label(
                        egui::RichText::new(format!("{:10} | SVM = {:.2}", state.label(), svm))
                            .color(Self::state_color(state))
                            .strong()
                            .monospace(),
                    );
                }
                None => {
                    ui.label("Waiting for data...");
                }
            }

            ui.add_space(8.0);
            self.plot_states(ui, &window);
        });
    }
}

impl FallChartWindow {
    fn plot_states(&self, ui: &mut egui::Ui, window: &[(f64, u8)]) {
        use egui_plot::{Line, Plot, PlotPoints};

        // Step trace: hold each state until the next sample arrives.
        let mut points: Vec<[f64; 2]> = Vec::with_capacity(window.len() * 2);
        for (i, &(t, ordinal)) in window.iter().enumerate() {
            if i > 0 {
                let prev_ordinal = window[i - 1].1;
                if prev_ordinal != ordinal {
                    points.push([t, prev_ordinal as f64]);
                }
            }
            points.push([t, ordinal as f64]);
        }

        let line = Line::new(PlotPoints::from(points))
            .color(egui::Color32::LIGHT_BLUE)
            .width(2.0);

        Plot::new("state_window")
            .height(self.config.plot_height as f32)
            .include_y(-0.5)
            .include_y(3.5)
            .x_axis_label("Time (seconds)")
            .y_axis_formatter(|mark, _range| {
                let ordinal = mark.value.round();
                if (mark.value - ordinal).abs() < 1e-6 && (0.0..=3.0).contains(&ordinal) {
                    FallState::LABELS[ordinal as usize].to_string()
                } else {
                    String::new()
                }
            })
            .show_grid([true, true])
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }
}

/// Spawns the chart window on its own thread so the monitor loop keeps its
/// own cadence.
pub fn spawn_visualization_window(
    plotter: SharedPlotter,
    config: VisualizationConfig,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        if let Err(e) = FallChartWindow::run(plotter, config) {
            eprintln!("Visualization window error: {}", e);
        }
    })
}
