use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use thiserror::Error;

use super::model::{CellValue, FeeTable, Record};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Typed failure for the spreadsheet loader. Callers surface the message to
/// the user and carry on with no table loaded; nothing here is fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported file extension '.{0}'")]
    UnsupportedExtension(String),
    #[error("workbook has no sheets")]
    EmptyWorkbook,
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a fee register from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xls` / `.xlsm` – Excel workbook, first sheet, header row
/// * `.csv`  – header row with column names
/// * `.json` – `[{ "Name": ..., "Academic Fees Paid": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<FeeTable, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xls" | "xlsm" => load_workbook(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

/// Read the first worksheet. The first row is the header; every later row
/// becomes one record. Cell types are taken as the workbook stores them; the
/// normalizer handles numeric coercion afterwards.
fn load_workbook(path: &Path) -> Result<FeeTable, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(FeeTable::default());
    };
    let columns: Vec<String> = header.iter().map(|c| c.to_string().trim().to_string()).collect();

    let mut records = Vec::new();
    for row in rows {
        let mut fields = BTreeMap::new();
        for (idx, cell) in row.iter().enumerate() {
            if let Some(col) = columns.get(idx) {
                fields.insert(col.clone(), workbook_cell(cell));
            }
        }
        records.push(Record { fields });
    }

    Ok(FeeTable::new(columns, records))
}

fn workbook_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Int(i) => CellValue::Integer(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Null
            } else {
                CellValue::String(trimmed.to_string())
            }
        }
        // Serial date; keep the raw number, fee columns never hold dates.
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one student per row. Cell types
/// are guessed per value so a numeric-looking column arrives numeric.
fn load_csv(path: &Path) -> Result<FeeTable, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut fields = BTreeMap::new();
        for (idx, value) in row.iter().enumerate() {
            if let Some(col) = columns.get(idx) {
                fields.insert(col.clone(), guess_cell_type(value));
            }
        }
        records.push(Record { fields });
    }

    Ok(FeeTable::new(columns, records))
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Name": "A", "Academic Fees Paid": 95000, "Academic Due Fees": 5000 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<FeeTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows: Vec<Record> = serde_json::from_str(&text)?;
    Ok(FeeTable::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_unsupported_extension() {
        let err = load_file(Path::new("fees.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "parquet"));
    }

    #[test]
    fn test_missing_file_reports_failure() {
        assert!(load_file(Path::new("no_such_register.csv")).is_err());
        assert!(load_file(Path::new("no_such_register.xlsx")).is_err());
    }

    #[test]
    fn test_csv_register() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fees.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Name,Academic Fees Paid,Academic Due Fees").unwrap();
        writeln!(file, "Alice,95000,5000").unwrap();
        writeln!(file, "Bob,bad,").unwrap();
        drop(file);

        let table = load_file(&path).unwrap();
        assert_eq!(
            table.columns,
            vec!["Name", "Academic Fees Paid", "Academic Due Fees"]
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].numeric("Academic Fees Paid"), Some(95000.0));
        // Unparseable text survives loading; the normalizer deals with it.
        assert_eq!(
            table.rows[1].get("Academic Fees Paid"),
            Some(&CellValue::String("bad".into()))
        );
        assert_eq!(table.rows[1].get("Academic Due Fees"), Some(&CellValue::Null));
    }

    #[test]
    fn test_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fees.json");
        std::fs::write(
            &path,
            r#"[{"Name":"Alice","Academic Due Fees":5000},{"Name":"Bob","Academic Due Fees":null}]"#,
        )
        .unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].numeric("Academic Due Fees"), Some(5000.0));
        assert!(table.rows[1].get("Academic Due Fees").unwrap().is_null());
    }

    #[test]
    fn test_xlsx_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fees.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Academic Fees Paid").unwrap();
        sheet.write_string(1, 0, "Alice").unwrap();
        sheet.write_number(1, 1, 95_000.0).unwrap();
        sheet.write_string(2, 0, "Bob").unwrap();
        sheet.write_string(2, 1, "pending").unwrap();
        workbook.save(&path).unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.columns, vec!["Name", "Academic Fees Paid"]);
        assert_eq!(table.rows[0].numeric("Academic Fees Paid"), Some(95_000.0));
        assert_eq!(
            table.rows[1].get("Academic Fees Paid"),
            Some(&CellValue::String("pending".into()))
        );
    }
}
