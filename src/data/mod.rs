/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  URL / .csv file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site/category order, bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site + payload predicates → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
