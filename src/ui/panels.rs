use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::ColorMap;
use crate::data::aggregate::{aggregate, AggregateSummary};
use crate::data::filter::Bound;
use crate::data::model::{DUE_COLUMNS, FEE_CEILING, PAID_COLUMNS};
use crate::export;
use crate::state::{AppState, View};
use crate::ui::format_amount;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.table.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export HTML…"))
                .clicked()
            {
                export_html_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.view == View::Table, "Table")
            .clicked()
        {
            state.view = View::Table;
        }
        if ui
            .selectable_label(state.view == View::Charts, "Charts")
            .clicked()
        {
            state.view = View::Charts;
        }

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} students loaded, {} in range",
                table.len(),
                state.filtered_due.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – range control and quick totals
// ---------------------------------------------------------------------------

/// Render the left controls panel: the fee-range selector feeding the range
/// filter, plus category totals computed over the unfiltered table.
pub fn controls_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Fee Range");
    ui.separator();

    if state.table.is_none() {
        ui.label("No fee register loaded.");
        return;
    }

    ui.label("Inclusive bounds for the area chart series.");
    let mut min = state.bound.min;
    let mut max = state.bound.max;
    let mut changed = false;
    changed |= ui
        .add(
            egui::Slider::new(&mut min, 0.0..=FEE_CEILING)
                .step_by(1000.0)
                .text("Min"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut max, 0.0..=FEE_CEILING)
                .step_by(1000.0)
                .text("Max"),
        )
        .changed();
    if changed {
        state.set_bound(Bound::new(min, max));
    }
    if ui.small_button("Reset").clicked() {
        state.set_bound(Bound::default());
    }

    ui.separator();

    let Some(table) = &state.table else { return };
    summary_rows(ui, "Paid totals", &aggregate(table, PAID_COLUMNS));
    ui.add_space(6.0);
    summary_rows(ui, "Due totals", &aggregate(table, DUE_COLUMNS));
}

fn summary_rows(ui: &mut Ui, title: &str, summary: &AggregateSummary) {
    ui.strong(title);
    let labels: Vec<String> = summary.keys().cloned().collect();
    let colors = ColorMap::new(&labels);
    for (label, value) in summary {
        ui.colored_label(
            colors.color_for(label),
            format!("{label}: {}", format_amount(*value)),
        );
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open fee register")
        .add_filter("Supported files", &["xlsx", "xls", "xlsm", "csv", "json"])
        .add_filter("Excel", &["xlsx", "xls", "xlsm"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}

fn export_html_dialog(state: &mut AppState) {
    let Some(table) = &state.table else { return };

    let file = rfd::FileDialog::new()
        .set_title("Export fee table as HTML")
        .set_file_name("fee_table.html")
        .add_filter("HTML", &["html", "htm"])
        .save_file();

    if let Some(path) = file {
        match export::write_html(table, &path) {
            Ok(()) => {
                log::info!("Exported {} records to {}", table.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Export failed: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
