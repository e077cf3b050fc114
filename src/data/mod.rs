/// Data layer: the cleaned dataset and its loader.
///
/// Architecture:
/// ```text
///  data/cleaned/cleaned_missing_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → Dataset (fatal on failure)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  header + raw rows; head preview, CSV re-export
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
