//! Image savers.  The engine hands over a finished raster and makes
//! no assumption beyond "8-bit-per-channel RGB with full opacity";
//! everything format-specific lives behind the Saver trait.  A failed
//! save leaves the raster untouched and re-saveable.

use std::fs::File;
use std::path::Path;

use image::jpeg::JPEGEncoder;
use image::png::PNGEncoder;
use image::ColorType;

use errors::FlameError;
use raster::PixelBuffer;

/// Writes a finished raster to disk in some encoding.
pub trait Saver {
    /// Encode the buffer and write it to the given path.
    fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), FlameError>;
}

/// Saves the raster as a PNG.
pub struct PngSaver;

impl Saver for PngSaver {
    fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), FlameError> {
        let output =
            File::create(path).map_err(|err| FlameError::SavingImage(err.to_string()))?;
        let encoder = PNGEncoder::new(output);
        encoder
            .encode(
                &buffer.to_rgba_bytes(),
                buffer.width() as u32,
                buffer.height() as u32,
                ColorType::RGBA(8),
            )
            .map_err(|err| FlameError::SavingImage(err.to_string()))
    }
}

/// Saves the raster as a maximum-quality JPEG.  JPEG has no alpha
/// channel, so the raster is flattened to RGB.
pub struct JpegSaver;

impl Saver for JpegSaver {
    fn save(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), FlameError> {
        let mut output =
            File::create(path).map_err(|err| FlameError::SavingImage(err.to_string()))?;
        let mut encoder = JPEGEncoder::new_with_quality(&mut output, 100);
        encoder
            .encode(
                &buffer.to_rgb_bytes(),
                buffer.width() as u32,
                buffer.height() as u32,
                ColorType::RGB(8),
            )
            .map_err(|err| FlameError::SavingImage(err.to_string()))
    }
}

/// Pick a saver for the configuration's format name.  "JPEG" gets the
/// JPEG saver; everything else, including the empty string, falls
/// back to PNG.
pub fn for_format(format: &str) -> Box<dyn Saver> {
    if format == "JPEG" {
        Box::new(JpegSaver)
    } else {
        Box::new(PngSaver)
    }
}

/// The default output file name for a format.
pub fn default_output(format: &str) -> &'static str {
    if format == "JPEG" {
        "FractalFlame.jpg"
    } else {
        "FractalFlame.png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_jpeg_selects_the_jpeg_saver() {
        assert_eq!(default_output("JPEG"), "FractalFlame.jpg");
        assert_eq!(default_output("PNG"), "FractalFlame.png");
        assert_eq!(default_output("bmp"), "FractalFlame.png");
        assert_eq!(default_output(""), "FractalFlame.png");
    }
}
