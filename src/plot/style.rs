use std::ops::Range;

use plotters::style::{FontDesc, FontFamily, FontStyle, RGBColor, TextStyle};

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

/// Colour of the measurement line.
pub const SERIES_COLOUR: RGBColor = hexcolour!(0x1F77B4);

pub const BACKGROUND: RGBColor = hexcolour!(0xFFFFFF);

pub const FOREGROUND: RGBColor = hexcolour!(0x000000);

// Sizes in typographic points; converted to pixels per figure DPI.
pub const TITLE_PT: f64 = 12.0;
pub const LABEL_PT: f64 = 10.0;
pub const TICK_PT: f64 = 10.0;
pub const LINE_WIDTH_PT: f64 = 1.5;
pub const AXIS_WIDTH_PT: f64 = 0.8;
pub const MARGIN_PT: f64 = 14.0;
pub const X_LABEL_AREA_PT: f64 = 36.0;
pub const Y_LABEL_AREA_PT: f64 = 52.0;

pub const TICK_LENGTH_PT: f64 = 3.5;

/// Fraction of the data span added on each side of an axis.
pub const AXIS_PADDING: f64 = 0.05;

/// Spans smaller than this fraction of the values' magnitude are drawn as
/// if flat; tick steps that small vanish when added to the values.
pub const MIN_RELATIVE_SPAN: f64 = 1e-12;

const POINTS_PER_INCH: f64 = 72.0;

// ---------------------------------------------------------------------------
// Point → pixel scaling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    dpi: u32,
}

impl Scale {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    /// Pixels covered by `points` at this resolution.
    pub fn px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / POINTS_PER_INCH
    }

    /// [`Scale::px`] rounded, never below one pixel.
    pub fn px_u32(&self, points: f64) -> u32 {
        self.px(points).round().max(1.0) as u32
    }

    pub fn text<'a>(&self, points: f64) -> TextStyle<'a> {
        TextStyle::from(FontDesc::new(
            FontFamily::SansSerif,
            self.px(points),
            FontStyle::Normal,
        ))
    }
}

// ---------------------------------------------------------------------------
// Axis ranges
// ---------------------------------------------------------------------------

/// Axis range covering `[min, max]` with [`AXIS_PADDING`] on both sides.
/// A flat span is widened so the axis still has an extent.
///
/// `None` when the padded range, or its width, does not fit in an `f64`.
pub fn padded_range(min: f64, max: f64) -> Option<Range<f64>> {
    let magnitude = min.abs().max(max.abs());
    let span = max - min;
    let pad = if span > magnitude * MIN_RELATIVE_SPAN {
        span * AXIS_PADDING
    } else {
        (magnitude * AXIS_PADDING).max(0.5)
    };

    let range = (min - pad)..(max + pad);
    let finite = range.start.is_finite()
        && range.end.is_finite()
        && (range.end - range.start).is_finite();
    finite.then_some(range)
}
