use std::collections::BTreeMap;

use super::model::FeeTable;

// ---------------------------------------------------------------------------
// Category sums for the summary charts
// ---------------------------------------------------------------------------

/// Mapping from fee-category label to its summed value, always computed over
/// the unfiltered table.
pub type AggregateSummary = BTreeMap<String, f64>;

/// Sum each named column across the table. Missing values contribute
/// nothing; a column absent from the schema contributes 0, meaning "no due
/// fees of that kind" rather than an error.
pub fn aggregate(table: &FeeTable, columns: &[&str]) -> AggregateSummary {
    columns
        .iter()
        .map(|&col| (col.to_string(), column_sum(table, col)))
        .collect()
}

/// Sum of all non-missing numeric values in a column; 0 when the column is
/// absent from the schema.
pub fn column_sum(table: &FeeTable, column: &str) -> f64 {
    if !table.has_column(column) {
        return 0.0;
    }
    table
        .rows
        .iter()
        .filter_map(|record| record.numeric(column))
        .sum()
}

// ---------------------------------------------------------------------------
// Histogram binning for the distribution charts
// ---------------------------------------------------------------------------

/// One histogram bin: half-open `[start, end)`, except the last bin which is
/// closed so the column maximum is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Bin the non-missing values of `column` into `nbins` equal-width bins
/// spanning the column's min..max. Returns an empty vec when the column is
/// absent or holds no numeric values.
pub fn histogram(table: &FeeTable, column: &str, nbins: usize) -> Vec<HistogramBin> {
    if nbins == 0 || !table.has_column(column) {
        return Vec::new();
    }

    let values: Vec<f64> = table
        .rows
        .iter()
        .filter_map(|record| record.numeric(column))
        .collect();
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Degenerate column (all values equal): a single bin holding everything.
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / nbins as f64;
    let mut counts = vec![0usize; nbins];
    for &v in &values {
        let idx = (((v - min) / width) as usize).min(nbins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
