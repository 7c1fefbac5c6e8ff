use std::f64::consts::TAU;

use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Bar, BarChart, HLine, Legend, Line, Plot, PlotPoints, Polygon};

use crate::color::{self, ColorMap};
use crate::data::aggregate::{aggregate, histogram, AggregateSummary};
use crate::data::model::{
    FeeTable, DUE_COLUMNS, DUE_SERIES_COLUMN, FEE_CEILING, PAID_COLUMNS, PAID_SERIES_COLUMN,
};
use crate::state::AppState;
use crate::ui::format_amount;

/// Hole fraction of the donut charts.
const DONUT_HOLE: f64 = 0.5;
/// Bin count for the paid-fee histograms.
const HISTOGRAM_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Charts view (central panel)
// ---------------------------------------------------------------------------

/// Render the charts page: the range-filtered area chart, the two category
/// donuts, and the three paid-fee histograms. Aggregates are recomputed from
/// the unfiltered table on every render.
pub fn charts_view(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a fee register to view charts  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Academic Fees with Due Fees and Paid Fees");
            area_chart(ui, state);
            ui.add_space(16.0);

            let paid = aggregate(table, PAID_COLUMNS);
            let due = aggregate(table, DUE_COLUMNS);
            ui.columns(2, |cols| {
                donut_chart(&mut cols[0], "paid_donut", "Overall Paid Fees", &paid);
                donut_chart(&mut cols[1], "due_donut", "Overall Due Fees", &due);
            });
            ui.add_space(16.0);

            ui.columns(3, |cols| {
                histogram_chart(
                    &mut cols[0],
                    "hist_academic",
                    table,
                    "Academic Fees Paid",
                    color::HIST_ACADEMIC,
                );
                histogram_chart(
                    &mut cols[1],
                    "hist_hostel",
                    table,
                    "Hostel Fees Paid",
                    color::HIST_HOSTEL,
                );
                histogram_chart(
                    &mut cols[2],
                    "hist_transport",
                    table,
                    "Transportation Fees Paid",
                    color::HIST_TRANSPORT,
                );
            });
        });
}

// ---------------------------------------------------------------------------
// Area chart: due vs paid per student, range-filtered
// ---------------------------------------------------------------------------

fn area_chart(ui: &mut Ui, state: &AppState) {
    Plot::new("fees_area")
        .legend(Legend::default())
        .height(380.0)
        .x_axis_label("Student")
        .y_axis_label("Amount")
        .include_y(0.0)
        .include_y(FEE_CEILING * 1.1)
        .show(ui, |plot_ui| {
            plot_ui.line(series_line(
                &state.filtered_due,
                DUE_SERIES_COLUMN,
                "Due Fees",
                color::DUE_SERIES,
            ));
            plot_ui.line(series_line(
                &state.filtered_paid,
                PAID_SERIES_COLUMN,
                "Paid Fees",
                color::PAID_SERIES,
            ));
            plot_ui.hline(
                HLine::new(FEE_CEILING)
                    .color(color::CEILING)
                    .width(3.0)
                    .name("Fee Ceiling"),
            );
        });
}

/// One filled series: every row of the filtered subset carries a numeric
/// value in `column` by construction, plotted against its position.
fn series_line(table: &FeeTable, column: &str, name: &str, color: Color32) -> Line<'static> {
    let points: PlotPoints = table
        .rows
        .iter()
        .filter_map(|record| record.numeric(column))
        .enumerate()
        .map(|(i, value)| [i as f64, value])
        .collect();

    Line::new(points).name(name).color(color).width(1.5).fill(0.0)
}

// ---------------------------------------------------------------------------
// Donut charts: category totals
// ---------------------------------------------------------------------------

fn donut_chart(ui: &mut Ui, id: &str, title: &str, summary: &AggregateSummary) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(title);
    });

    let total: f64 = summary.values().sum();
    if total <= 0.0 {
        ui.label("No amounts recorded.");
        return;
    }

    let labels: Vec<String> = summary.keys().cloned().collect();
    let colors = ColorMap::new(&labels);

    Plot::new(id)
        .legend(Legend::default())
        .height(280.0)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Start at 12 o'clock and sweep clockwise.
            let mut start = TAU / 4.0;
            for (label, &value) in summary {
                if value <= 0.0 {
                    continue;
                }
                let end = start - TAU * value / total;
                plot_ui.polygon(
                    Polygon::new(wedge_points(start, end))
                        .fill_color(colors.color_for(label))
                        .name(format!("{label}: {}", format_amount(value))),
                );
                start = end;
            }
        });
}

/// Outline of one donut wedge: outer arc from `a0` to `a1` at radius 1, then
/// the inner arc back at the hole radius.
fn wedge_points(a0: f64, a1: f64) -> PlotPoints<'static> {
    let steps = (((a1 - a0).abs() / (TAU / 96.0)).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(2 * steps + 2);
    for i in 0..=steps {
        let t = a0 + (a1 - a0) * (i as f64 / steps as f64);
        points.push([t.cos(), t.sin()]);
    }
    for i in (0..=steps).rev() {
        let t = a0 + (a1 - a0) * (i as f64 / steps as f64);
        points.push([DONUT_HOLE * t.cos(), DONUT_HOLE * t.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Histograms: paid-fee distributions
// ---------------------------------------------------------------------------

fn histogram_chart(ui: &mut Ui, id: &str, table: &FeeTable, column: &str, color: Color32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!("{column} Histogram"));
    });

    let bins = histogram(table, column, HISTOGRAM_BINS);
    if bins.is_empty() {
        ui.label("No data for this column.");
        return;
    }

    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| Bar::new(bin.center(), bin.count as f64).width(bin.width()))
        .collect();

    Plot::new(id)
        .height(240.0)
        .x_axis_label(column.to_string())
        .y_axis_label("Students")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color));
        });
}
