use thiserror::Error;

use super::model::{FeeTable, FEE_CEILING};

// ---------------------------------------------------------------------------
// Bound: the user-selected inclusive fee range
// ---------------------------------------------------------------------------

/// Inclusive numeric range supplied by the range control. The default spans
/// the full plausible fee domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Default for Bound {
    fn default() -> Self {
        Bound {
            min: 0.0,
            max: FEE_CEILING,
        }
    }
}

impl Bound {
    pub fn new(min: f64, max: f64) -> Self {
        Bound { min, max }
    }

    /// Inclusive on both ends. An inverted bound (`min > max`) contains
    /// nothing, which is exactly the empty-result contract the filter wants.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ---------------------------------------------------------------------------
// Range filter
// ---------------------------------------------------------------------------

/// The named column is not part of the table's schema. Callers filtering on
/// optional columns guard with [`FeeTable::has_column`] instead of surfacing
/// this to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column '{0}' not found in table")]
pub struct ColumnNotFound(pub String);

/// Return the subset of rows whose value in `column` falls within `bound`,
/// preserving source row order. Rows where the value is missing (or never
/// coerced to a number) are excluded.
pub fn filter_by_range(
    table: &FeeTable,
    column: &str,
    bound: Bound,
) -> Result<FeeTable, ColumnNotFound> {
    if !table.has_column(column) {
        return Err(ColumnNotFound(column.to_string()));
    }

    let rows = table
        .rows
        .iter()
        .filter(|record| {
            record
                .numeric(column)
                .is_some_and(|value| bound.contains(value))
        })
        .cloned()
        .collect();

    Ok(FeeTable::new(table.columns.clone(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Record, NUMERIC_COLUMNS};
    use crate::data::normalize::normalize_columns;

    fn row(name: &str, due: CellValue) -> Record {
        Record {
            fields: [
                ("Name".to_string(), CellValue::String(name.into())),
                ("Academic Due Fees".to_string(), due),
            ]
            .into_iter()
            .collect(),
        }
    }

    fn names(table: &FeeTable) -> Vec<String> {
        table
            .rows
            .iter()
            .map(|r| r.get("Name").unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let table = FeeTable::from_rows(vec![row("A", CellValue::Float(100_000.0))]);
        let out = filter_by_range(&table, "Academic Due Fees", Bound::new(0.0, 100_000.0)).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_inverted_bound_yields_empty_table() {
        let table = FeeTable::from_rows(vec![
            row("A", CellValue::Integer(5000)),
            row("B", CellValue::Integer(7000)),
        ]);
        let out = filter_by_range(&table, "Academic Due Fees", Bound::new(9000.0, 1000.0)).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.columns, table.columns);
    }

    #[test]
    fn test_missing_values_are_excluded() {
        // "bad" fails coercion, becomes Null, and is then filtered fail-closed.
        let raw = FeeTable::from_rows(vec![
            row("A", CellValue::String("5000".into())),
            row("B", CellValue::String("bad".into())),
        ]);
        let table = normalize_columns(&raw, NUMERIC_COLUMNS);
        let out = filter_by_range(&table, "Academic Due Fees", Bound::new(0.0, 10_000.0)).unwrap();
        assert_eq!(names(&out), vec!["A"]);
    }

    #[test]
    fn test_unknown_column_is_an_error() {
        let table = FeeTable::from_rows(vec![row("A", CellValue::Integer(5000))]);
        let err = filter_by_range(&table, "Hostel Fees Due", Bound::default()).unwrap_err();
        assert_eq!(err, ColumnNotFound("Hostel Fees Due".to_string()));
    }

    #[test]
    fn test_preserves_row_order() {
        let table = FeeTable::from_rows(vec![
            row("C", CellValue::Integer(3000)),
            row("A", CellValue::Integer(9000)),
            row("B", CellValue::Integer(6000)),
        ]);
        let out = filter_by_range(&table, "Academic Due Fees", Bound::default()).unwrap();
        assert_eq!(names(&out), vec!["C", "A", "B"]);
    }
}
