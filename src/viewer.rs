//! Interactive chart window.
//!
//! Every series becomes one `egui_plot::Line`; the plot keeps a 1:1 data
//! aspect and shows its grid. [`show`] blocks until the window is closed.

use crate::chart::{Chart, Series};
use crate::float_types::Real;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

const WINDOW_SIZE: [f32; 2] = [800.0, 600.0];

/// `[x, y]` pairs of a series, in order, as the plot expects them.
pub fn plot_points(series: &Series) -> Vec<[Real; 2]> {
    series.line.coords().map(|c| [c.x, c.y]).collect()
}

pub fn line_color(series: &Series) -> egui::Color32 {
    let (r, g, b) = series.color;
    egui::Color32::from_rgb(r, g, b)
}

struct ChartViewer {
    chart: Chart,
}

impl eframe::App for ChartViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = &self.chart.title {
                ui.heading(title.as_str());
            }
            let mut plot = Plot::new("gore_plot")
                .show_grid(self.chart.grid)
                .legend(Legend::default());
            if self.chart.equal_aspect {
                plot = plot.data_aspect(1.0);
            }
            plot.show(ui, |plot_ui| {
                for series in &self.chart.series {
                    plot_ui.line(
                        Line::new(PlotPoints::from(plot_points(series)))
                            .name(&series.label)
                            .color(line_color(series))
                            .width(2.0),
                    );
                }
            });
        });
    }
}

/// Opens a window with `chart` and returns once the user closes it.
pub fn show(chart: Chart, window_title: &str) -> eframe::Result<()> {
    log::debug!("opening viewer with {} series", chart.series.len());
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        window_title,
        native_options,
        Box::new(|_cc| Ok(Box::new(ChartViewer { chart }))),
    )
}
