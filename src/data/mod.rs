/// Data layer: core types, loading, normalisation, filtering, aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → FeeTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ normalize   │  coerce fee columns to numbers
///   └────────────┘
///        │
///        ├───────────────┐
///        ▼               ▼
///   ┌──────────┐   ┌────────────┐
///   │  filter   │   │ aggregate   │
///   └──────────┘   └────────────┘
///     range of          category
///     one column        sums, bins
/// ```
pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
