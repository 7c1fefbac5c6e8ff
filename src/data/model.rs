use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Fee schema
// ---------------------------------------------------------------------------

/// Column holding the student's name.
pub const NAME_COLUMN: &str = "Name";

/// Fee columns coerced to numbers on ingest. Files are free to omit any of
/// these; the normalizer skips columns that are not present.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "Academic Fees Paid",
    "Academic Due Fees",
    "Academic Total Fees",
    "Transportation Fees Paid",
    "Hostel Fees Paid",
    "Hostel Fees Due",
];

/// Categories summed for the paid-fees donut chart.
pub const PAID_COLUMNS: &[&str] = &[
    "Transportation Fees Paid",
    "Academic Fees Paid",
    "Hostel Fees Paid",
];

/// Categories summed for the due-fees donut chart. `Transportation Due Fees`
/// is often absent entirely; an absent category sums to 0 ("no due fees of
/// that kind").
pub const DUE_COLUMNS: &[&str] = &[
    "Transportation Due Fees",
    "Academic Due Fees",
    "Hostel Fees Due",
];

/// Series plotted in the area chart, filtered by the user's fee range.
pub const DUE_SERIES_COLUMN: &str = "Academic Due Fees";
pub const PAID_SERIES_COLUMN: &str = "Academic Fees Paid";

/// Upper end of the plausible fee domain. Doubles as the slider maximum and
/// the reference line drawn across the area chart.
pub const FEE_CEILING: f64 = 100_000.0;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a record
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring what spreadsheets actually hold.
/// `Null` is the missing-value marker produced by failed numeric coercion.
///
/// The `untagged` representation maps JSON scalars directly: numbers become
/// `Integer`/`Float`, `null` becomes `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => {
                if v.fract() == 0.0 {
                    write!(f, "{v:.0}")
                } else {
                    write!(f, "{v:.2}")
                }
            }
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::String(s) => write!(f, "{s}"),
            // Missing values render as blank table cells.
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the cell as an `f64`. Strictly numeric: strings are not
    /// parsed here (that is the normalizer's job), so a missing or textual
    /// cell reads as `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this is the missing-value marker.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Record – one student row
// ---------------------------------------------------------------------------

/// A single fee record (one row of the source spreadsheet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Dynamic columns: column_name → value.
    #[serde(flatten)]
    pub fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column)
    }

    /// Numeric view of a cell; `None` when the column is absent or the value
    /// is missing/non-numeric.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        self.fields.get(column).and_then(CellValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// FeeTable – the complete loaded register
// ---------------------------------------------------------------------------

/// The full loaded fee register: ordered rows plus the column schema in file
/// order. Column presence is not guaranteed across input files, so consumers
/// check `has_column` before filtering on optional columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeTable {
    /// Column names in source order (header order for CSV/XLSX).
    pub columns: Vec<String>,
    /// All records (rows), in source order.
    pub rows: Vec<Record>,
}

impl FeeTable {
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Self {
        FeeTable { columns, rows }
    }

    /// Build a table from bare records, deriving the schema as the union of
    /// row keys in first-seen order. Used by loaders without a header row.
    pub fn from_rows(rows: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &rows {
            for col in record.fields.keys() {
                if !columns.iter().any(|c| c == col) {
                    columns.push(col.clone());
                }
            }
        }
        FeeTable { columns, rows }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, CellValue)]) -> Record {
        Record {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn test_as_f64_numeric_only() {
        assert_eq!(CellValue::Integer(5000).as_f64(), Some(5000.0));
        assert_eq!(CellValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(CellValue::String("5000".into()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn test_from_rows_unions_columns_in_first_seen_order() {
        let rows = vec![
            record(&[("Name", CellValue::String("A".into()))]),
            record(&[
                ("Name", CellValue::String("B".into())),
                ("Academic Due Fees", CellValue::Integer(5000)),
            ]),
        ];
        let table = FeeTable::from_rows(rows);
        assert_eq!(table.columns, vec!["Name", "Academic Due Fees"]);
        assert_eq!(table.len(), 2);
        assert!(table.has_column("Academic Due Fees"));
        assert!(!table.has_column("Hostel Fees Due"));
    }

    #[test]
    fn test_display_renders_missing_as_blank() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Float(5000.0).to_string(), "5000");
        assert_eq!(CellValue::Float(1234.5).to_string(), "1234.50");
    }

    #[test]
    fn test_json_scalars_map_onto_cell_values() {
        assert_eq!(
            serde_json::from_str::<CellValue>("5000").unwrap(),
            CellValue::Integer(5000)
        );
        assert_eq!(
            serde_json::from_str::<CellValue>("12.5").unwrap(),
            CellValue::Float(12.5)
        );
        assert_eq!(
            serde_json::from_str::<CellValue>("null").unwrap(),
            CellValue::Null
        );
        assert_eq!(
            serde_json::from_str::<CellValue>("\"pending\"").unwrap(),
            CellValue::String("pending".into())
        );
    }
}
