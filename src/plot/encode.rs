use std::io::Write;

use image::RgbImage;

const METRES_PER_INCH: f64 = 0.0254;

/// PNG `pHYs` density for `dpi`, in pixels per metre.
pub fn pixels_per_metre(dpi: u32) -> u32 {
    (f64::from(dpi) / METRES_PER_INCH).round() as u32
}

/// Encode `canvas` as an 8-bit RGB PNG that declares `dpi` as its
/// physical resolution.
pub fn write_png<W: Write>(out: W, canvas: &RgbImage, dpi: u32) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(out, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let ppm = pixels_per_metre(dpi);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: ppm,
        yppu: ppm,
        unit: png::Unit::Meter,
    }));

    let mut writer = encoder.write_header()?;
    writer.write_image_data(canvas.as_raw())?;
    writer.finish()
}
