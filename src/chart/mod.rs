/// Chart layer: pure builders turning filtered subsets into declarative
/// chart descriptions.
///
/// ```text
///   filtered indices + selection/range
///        │
///        ▼
///   ┌──────────┐      ┌──────────────┐
///   │   pie     │ ──▶  │   PieSpec    │  slices, colors, title
///   └──────────┘      └──────────────┘
///   ┌──────────┐      ┌──────────────┐
///   │  scatter  │ ──▶  │ ScatterSpec  │  groups, axes, title
///   └──────────┘      └──────────────┘
/// ```
///
/// Specs are plain values: recomputed fresh on every input change, compared
/// with `==` in tests, rendered by `ui::plot`.

pub mod pie;
pub mod scatter;

pub use pie::{build_pie_spec, PieSlice, PieSpec};
pub use scatter::{build_scatter_spec, ScatterGroup, ScatterPoint, ScatterSpec};
