/// Rendering layer: figure geometry, chart drawing, PNG output.
///
/// ```text
///   Measurements
///        │
///        ▼
///   ┌──────────┐
///   │  figure   │  evenly spaced axis, ranges → plotters chart → RgbImage
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  encode   │  RgbImage → PNG with pHYs (DPI)
///   └──────────┘
/// ```

pub mod encode;
pub mod figure;
pub mod font;
pub mod style;

pub use figure::{Figure, Series};
