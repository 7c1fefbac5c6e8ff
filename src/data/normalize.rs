use super::model::{CellValue, FeeTable};

// ---------------------------------------------------------------------------
// Column normalizer: best-effort numeric coercion of the fee columns
// ---------------------------------------------------------------------------

/// Return a copy of `table` with every cell in the named columns coerced to a
/// number, or to `CellValue::Null` when it cannot be parsed.
///
/// Columns not present in the schema are silently skipped. Idempotent:
/// numeric cells and `Null` pass through unchanged, so reapplying is a no-op.
pub fn normalize_columns(table: &FeeTable, columns: &[&str]) -> FeeTable {
    let present: Vec<&str> = columns
        .iter()
        .copied()
        .filter(|c| table.has_column(c))
        .collect();

    let mut out = table.clone();
    for record in &mut out.rows {
        for &col in &present {
            if let Some(cell) = record.fields.get_mut(col) {
                *cell = coerce_cell(cell);
            }
        }
    }
    out
}

/// Numeric coercion of a single cell. Strings are trimmed and parsed as an
/// integer first, then as a float; anything unparseable becomes `Null`.
fn coerce_cell(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Integer(_) | CellValue::Float(_) | CellValue::Null => cell.clone(),
        CellValue::Bool(_) => CellValue::Null,
        CellValue::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return CellValue::Null;
            }
            if let Ok(i) = trimmed.parse::<i64>() {
                return CellValue::Integer(i);
            }
            if let Ok(f) = trimmed.parse::<f64>() {
                return CellValue::Float(f);
            }
            CellValue::Null
        }
    }
}
