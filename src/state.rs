use std::path::Path;

use crate::data::filter::{filter_by_range, Bound};
use crate::data::loader;
use crate::data::model::{
    FeeTable, DUE_SERIES_COLUMN, NUMERIC_COLUMNS, PAID_SERIES_COLUMN,
};
use crate::data::normalize::normalize_columns;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page of the dashboard is shown in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Table,
    Charts,
}

/// The full UI state, independent of rendering. The table is loaded once per
/// session and passed by reference into each pipeline stage.
pub struct AppState {
    /// Loaded, normalized fee register (None until a file loads).
    pub table: Option<FeeTable>,

    /// The user-selected inclusive fee range for the area chart.
    pub bound: Bound,

    /// Active page.
    pub view: View,

    /// Rows within `bound` on the due-fee series (cached).
    pub filtered_due: FeeTable,

    /// Rows within `bound` on the paid-fee series (cached).
    pub filtered_paid: FeeTable,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            bound: Bound::default(),
            view: View::Table,
            filtered_due: FeeTable::default(),
            filtered_paid: FeeTable::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a freshly loaded register: normalize the fee columns, reset the
    /// range to the full domain, and rebuild the filtered series.
    pub fn set_table(&mut self, raw: FeeTable) {
        self.table = Some(normalize_columns(&raw, NUMERIC_COLUMNS));
        self.bound = Bound::default();
        self.refilter();
        self.status_message = None;
        self.loading = false;
    }

    /// Load a register from disk. Failure never aborts the process: the error
    /// is logged and surfaced as a status message, and the app keeps running
    /// with whatever table it already had.
    pub fn load_from_path(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} records with columns {:?}",
                    table.len(),
                    table.columns
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
                self.loading = false;
            }
        }
    }

    /// Recompute the cached area-chart series after a bound or table change.
    pub fn refilter(&mut self) {
        let (due, paid) = match &self.table {
            Some(table) => (
                series_subset(table, DUE_SERIES_COLUMN, self.bound),
                series_subset(table, PAID_SERIES_COLUMN, self.bound),
            ),
            None => (FeeTable::default(), FeeTable::default()),
        };
        self.filtered_due = due;
        self.filtered_paid = paid;
    }

    /// Update the bound and rebuild the filtered series.
    pub fn set_bound(&mut self, bound: Bound) {
        self.bound = bound;
        self.refilter();
    }
}

/// Range-filter one chart series. The series column is optional in the input
/// file, so an absent column yields an empty series rather than an error.
fn series_subset(table: &FeeTable, column: &str, bound: Bound) -> FeeTable {
    if !table.has_column(column) {
        return FeeTable::new(table.columns.clone(), Vec::new());
    }
    match filter_by_range(table, column, bound) {
        Ok(subset) => subset,
        Err(_) => FeeTable::new(table.columns.clone(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::data::model::Record;

    fn register() -> FeeTable {
        let rows = vec![
            Record {
                fields: [
                    ("Name".to_string(), CellValue::String("Alice".into())),
                    (
                        "Academic Due Fees".to_string(),
                        CellValue::String("5000".into()),
                    ),
                    ("Academic Fees Paid".to_string(), CellValue::Integer(95_000)),
                ]
                .into_iter()
                .collect(),
            },
            Record {
                fields: [
                    ("Name".to_string(), CellValue::String("Bob".into())),
                    (
                        "Academic Due Fees".to_string(),
                        CellValue::String("pending".into()),
                    ),
                    ("Academic Fees Paid".to_string(), CellValue::Integer(40_000)),
                ]
                .into_iter()
                .collect(),
            },
        ];
        FeeTable::from_rows(rows)
    }

    #[test]
    fn test_set_table_normalizes_and_filters() {
        let mut state = AppState::default();
        state.set_table(register());

        // "5000" was coerced; "pending" became missing and is excluded.
        assert_eq!(state.filtered_due.len(), 1);
        assert_eq!(state.filtered_paid.len(), 2);
        let table = state.table.as_ref().unwrap();
        assert!(table.rows[1].get("Academic Due Fees").unwrap().is_null());
    }

    #[test]
    fn test_set_bound_rebuilds_series() {
        let mut state = AppState::default();
        state.set_table(register());
        state.set_bound(Bound::new(50_000.0, 100_000.0));
        assert_eq!(state.filtered_paid.len(), 1);
        assert!(state.filtered_due.is_empty());
    }

    #[test]
    fn test_missing_series_column_yields_empty_series() {
        let mut state = AppState::default();
        state.set_table(FeeTable::from_rows(vec![Record {
            fields: [("Name".to_string(), CellValue::String("Alice".into()))]
                .into_iter()
                .collect(),
        }]));
        assert!(state.filtered_due.is_empty());
        assert!(state.filtered_paid.is_empty());
    }
}
