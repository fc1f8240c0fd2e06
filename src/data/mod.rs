/// Data layer: core types and CSV loading.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → NumericTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ NumericTable  │  one Vec<f64> per field position
///   └──────────────┘
///        │
///        ▼
///   trim::trim()  (per column)
/// ```
pub mod loader;
pub mod model;
