use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::FeeTable;

// ---------------------------------------------------------------------------
// HTML table export
// ---------------------------------------------------------------------------

/// Render the register as a full-width, centre-aligned HTML table in the
/// shape pandas' `DataFrame.to_html` produces (no index column).
pub fn table_to_html(table: &FeeTable) -> String {
    let mut html = String::new();
    html.push_str("<table style=\"width:100%; text-align:center;\" class=\"dataframe\">\n");

    html.push_str("  <thead>\n    <tr>");
    for col in &table.columns {
        let _ = write!(html, "<th>{}</th>", escape(col));
    }
    html.push_str("</tr>\n  </thead>\n");

    html.push_str("  <tbody>\n");
    for record in &table.rows {
        html.push_str("    <tr>");
        for col in &table.columns {
            let cell = record.get(col).map(ToString::to_string).unwrap_or_default();
            let _ = write!(html, "<td>{}</td>", escape(&cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");

    html
}

/// Write the rendered table to `path`.
pub fn write_html(table: &FeeTable, path: &Path) -> Result<()> {
    std::fs::write(path, table_to_html(table))
        .with_context(|| format!("writing HTML table to {}", path.display()))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Record};

    #[test]
    fn test_html_table_shape() {
        let table = FeeTable::from_rows(vec![Record {
            fields: [
                ("Name".to_string(), CellValue::String("A & B <co>".into())),
                ("Academic Due Fees".to_string(), CellValue::Integer(5000)),
            ]
            .into_iter()
            .collect(),
        }]);

        let html = table_to_html(&table);
        assert!(html.starts_with(
            "<table style=\"width:100%; text-align:center;\" class=\"dataframe\">"
        ));
        assert!(html.contains("<th>Name</th>"));
        assert!(html.contains("<td>A &amp; B &lt;co&gt;</td>"));
        assert!(html.contains("<td>5000</td>"));
        assert!(html.ends_with("</table>\n"));
    }

    #[test]
    fn test_missing_cells_render_empty() {
        let table = FeeTable::new(
            vec!["Name".to_string(), "Hostel Fees Due".to_string()],
            vec![Record {
                fields: [("Name".to_string(), CellValue::String("A".into()))]
                    .into_iter()
                    .collect(),
            }],
        );
        assert!(table_to_html(&table).contains("<td></td>"));
    }
}
