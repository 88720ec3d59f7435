use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use projectile_sim::analysis::{self, ChartPoint, CHART_DECIMATION};
use projectile_sim::{simulate, LaunchMode, SimulationResult};

fn main() -> eframe::Result {
    let mode = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<LaunchMode>().ok())
        .unwrap_or_default();

    let app = SimViz::new(mode);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Projectile Flight Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    mode: LaunchMode,
    result: Option<SimulationResult>,
    error: Option<String>,
    scrub: f64,
}

impl SimViz {
    fn new(mode: LaunchMode) -> Self {
        let mut app = Self { mode, result: None, error: None, scrub: 0.0 };
        app.run();
        app
    }

    fn run(&mut self) {
        match simulate(&self.mode.params()) {
            Ok(r) => {
                self.scrub = r.time_of_flight;
                self.result = Some(r);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for mode in LaunchMode::ALL {
                    if ui.selectable_label(self.mode == mode, mode.label()).clicked() && self.mode != mode {
                        self.mode = mode;
                        self.run();
                    }
                }
            });
            match (&self.result, &self.error) {
                (Some(r), _) => {
                    ui.label(format!(
                        "Range: {:.2} m  |  Peak: {:.2} m  |  Flight: {:.2} s  |  Impact: {:.1} m/s",
                        r.max_range, r.max_height, r.time_of_flight, r.impact_velocity,
                    ));
                    ui.add(egui::Slider::new(&mut self.scrub, 0.0..=r.time_of_flight).text("t (s)"));
                }
                (None, Some(e)) => {
                    ui.colored_label(egui::Color32::RED, e);
                }
                (None, None) => {}
            }
        });

        let Some(result) = &self.result else {
            return;
        };
        let series: Vec<ChartPoint> = analysis::chart_series(result, CHART_DECIMATION);
        let marker = analysis::state_at(result, self.scrub).copied();
        let trail: Vec<[f64; 2]> = analysis::trail_until(result, self.scrub)
            .iter()
            .map(|s| [s.horizontal_distance(), s.position.y])
            .collect();

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Height vs Time
                ui.vertical(|ui| {
                    ui.label("Height (m)");
                    let points: PlotPoints = series.iter().map(|p| [p.time, p.height]).collect();
                    Plot::new("height")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Height", points));
                        });
                });

                // Speed vs Time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = result
                        .path
                        .iter()
                        .step_by(CHART_DECIMATION)
                        .map(|s| [s.time, s.speed()])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Height vs Distance, with the playback trail and marker
                ui.vertical(|ui| {
                    ui.label("Trajectory Profile (m)");
                    let points: PlotPoints = series.iter().map(|p| [p.distance, p.height]).collect();
                    Plot::new("profile")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Distance (m)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Trajectory", points));
                            plot_ui.line(Line::new("Trail", PlotPoints::from(trail)).width(2.5));
                            if let Some(s) = marker {
                                let at = [s.horizontal_distance(), s.position.y];
                                plot_ui.points(Points::new("Projectile", vec![at]).radius(4.0));
                            }
                        });
                });

                // Ground track (top-down)
                ui.vertical(|ui| {
                    ui.label("Ground Track (m)");
                    let points: PlotPoints = result
                        .path
                        .iter()
                        .step_by(CHART_DECIMATION)
                        .map(|s| [s.position.x, s.position.z])
                        .collect();
                    Plot::new("ground")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("x (m)")
                        .y_axis_label("z (m)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Ground track", points));
                        });
                });
            });
        });
    }
}
