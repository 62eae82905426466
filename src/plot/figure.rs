use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use image::RgbImage;
use plotters::prelude::*;

use crate::config::PlotConfig;
use crate::data::model::Measurements;
use crate::error::{Error, Result};

use super::style::{self, Scale};
use super::{encode, font};

// ---------------------------------------------------------------------------
// Series – what ends up on the chart
// ---------------------------------------------------------------------------

/// The line drawn on a figure, with the axis ranges that frame it.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// `(x, cycles)` in file order.
    pub points: Vec<(f64, f64)>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

/// A self-contained plot. Each figure owns its configuration and data,
/// so any number of them can be built and rendered in one process.
#[derive(Debug, Clone)]
pub struct Figure {
    config: PlotConfig,
    series: Option<Series>,
}

impl Figure {
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            series: None,
        }
    }

    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.config.pixel_size()
    }

    /// Set the figure's line: cycles against an evenly spaced axis from
    /// the smallest to the largest recorded size. Replaces any earlier
    /// series.
    pub fn plot(&mut self, measurements: &Measurements) -> Result<&Series> {
        let (x_min, x_max) = measurements.size_range().ok_or(Error::NoData)?;
        let (y_min, y_max) = measurements.cycles_range().ok_or(Error::NoData)?;
        let x_range = axis_range("size", x_min, x_max)?;
        let y_range = axis_range("cycles", y_min, y_max)?;

        let axis = measurements.synthetic_axis().ok_or(Error::NoData)?;
        if !measurements.sizes_match(&axis) {
            log::warn!(
                "Recorded buffer sizes are not evenly spaced; plotting against an \
                 evenly spaced axis from {x_min} to {x_max}"
            );
        }

        let points: Vec<(f64, f64)> = axis
            .into_iter()
            .zip(measurements.cycles().iter().copied())
            .collect();

        log::debug!(
            "Plotting {} points, x in [{x_min}, {x_max}], cycles in [{y_min}, {y_max}]",
            points.len()
        );

        Ok(&*self.series.insert(Series {
            points,
            x_range,
            y_range,
        }))
    }

    /// Rasterize the figure.
    pub fn render(&self) -> Result<RgbImage> {
        font::ensure_registered()?;

        let (width, height) = self.pixel_size();
        let scale = Scale::new(self.config.dpi);
        let tick_length = scale.px_u32(style::TICK_LENGTH_PT) as i32;
        let (x_range, y_range) = match &self.series {
            Some(series) => (series.x_range.clone(), series.y_range.clone()),
            None => (0.0..1.0, 0.0..1.0),
        };

        let mut canvas = RgbImage::new(width, height);
        {
            let root = BitMapBackend::with_buffer(&mut canvas, (width, height)).into_drawing_area();
            root.fill(&style::BACKGROUND).map_err(render_error)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.config.title, scale.text(style::TITLE_PT))
                .margin(scale.px_u32(style::MARGIN_PT))
                .x_label_area_size(scale.px_u32(style::X_LABEL_AREA_PT))
                .y_label_area_size(scale.px_u32(style::Y_LABEL_AREA_PT))
                .build_cartesian_2d(x_range, y_range)
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(self.config.x_label.as_str())
                .y_desc(self.config.y_label.as_str())
                .label_style(scale.text(style::TICK_PT))
                .axis_desc_style(scale.text(style::LABEL_PT))
                .axis_style(style::FOREGROUND.stroke_width(scale.px_u32(style::AXIS_WIDTH_PT)))
                .set_tick_mark_size(LabelAreaPosition::Bottom, tick_length)
                .set_tick_mark_size(LabelAreaPosition::Left, tick_length)
                .draw()
                .map_err(render_error)?;

            if let Some(series) = &self.series {
                chart
                    .draw_series(LineSeries::new(
                        series.points.iter().copied(),
                        style::SERIES_COLOUR.stroke_width(scale.px_u32(style::LINE_WIDTH_PT)),
                    ))
                    .map_err(render_error)?;
            }

            root.present().map_err(render_error)?;
        }

        Ok(canvas)
    }

    /// Render and encode as PNG into `out`.
    pub fn write_png<W: Write>(&self, out: W) -> Result<()> {
        let canvas = self.render()?;
        encode::write_png(out, &canvas, self.config.dpi)?;
        Ok(())
    }

    /// Render and write a PNG file at `path`, replacing whatever is there.
    /// Nothing is written if rendering fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let canvas = self.render()?;
        let write_error = |source: std::io::Error| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut out = BufWriter::new(file);
        encode::write_png(&mut out, &canvas, self.config.dpi)?;
        out.flush().map_err(write_error)?;

        log::info!(
            "Saved {}x{} plot ({} dpi) to {}",
            canvas.width(),
            canvas.height(),
            self.config.dpi,
            path.display()
        );
        Ok(())
    }
}

fn axis_range(axis: &'static str, min: f64, max: f64) -> Result<Range<f64>> {
    style::padded_range(min, max).ok_or(Error::AxisOverflow { axis, min, max })
}

fn render_error<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}
