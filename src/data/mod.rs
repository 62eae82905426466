/// Data layer: measurement series, loading, and synthetic samples.
///
/// Architecture:
/// ```text
///   benchmark output (.txt)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip header, first/last token per line → Measurements
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ Measurements  │  size + cycles series, evenly spaced axis
///   └──────────────┘
///
///   ┌──────────┐
///   │  sample   │  seeded cache-hierarchy model → benchmark-style file
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod sample;
