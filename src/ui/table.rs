use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::NAME_COLUMN;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Table view (central panel)
// ---------------------------------------------------------------------------

/// Render the loaded register as a striped, centre-aligned table.
pub fn table_view(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a fee register to view records  (File → Open…)");
        });
        return;
    };

    if table.columns.is_empty() {
        ui.label("The loaded file has no columns.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::centered_and_justified(
            egui::Direction::LeftToRight,
        ))
        .columns(Column::auto().at_least(110.0).clip(true), table.columns.len())
        .header(24.0, |mut header| {
            for col in &table.columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.len(), |mut row| {
                let record = &table.rows[row.index()];
                for col in &table.columns {
                    row.col(|ui| match record.get(col) {
                        Some(cell) if cell.is_null() => {
                            ui.weak("–");
                        }
                        Some(cell) if col == NAME_COLUMN => {
                            ui.strong(cell.to_string());
                        }
                        Some(cell) => {
                            ui.label(cell.to_string());
                        }
                        None => {
                            ui.weak("–");
                        }
                    });
                }
            });
        });
}
