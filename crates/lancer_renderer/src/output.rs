//! Image file output.
//!
//! - PPM, ASCII (`P3`) or binary (`P6`), written by hand
//! - PNG through the `image` crate
//!
//! Channels are quantized with [`color_to_rgb`]: clamped to [0, 255] and
//! rounded to the nearest integer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{OutputError, OutputResult};
use crate::renderer::{color_to_rgb, FrameBuffer};

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Plain-text portable pixmap (`P3`)
    PpmAscii,
    /// Raw portable pixmap (`P6`)
    PpmBinary,
    Png,
}

impl ImageFormat {
    /// Pick a format from the file extension: `.png` is PNG, anything else
    /// is ASCII PPM.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => ImageFormat::Png,
            _ => ImageFormat::PpmAscii,
        }
    }
}

/// Write `image` as PPM to any writer.
///
/// Header is `P3`/`P6`, then `width height`, then `255`, one per line.
/// ASCII output puts one image row per line. Passing `ImageFormat::Png`
/// writes the ASCII flavor.
pub fn write_ppm<W: Write>(
    image: &FrameBuffer,
    format: ImageFormat,
    writer: &mut W,
) -> std::io::Result<()> {
    let binary = format == ImageFormat::PpmBinary;
    writeln!(writer, "{}", if binary { "P6" } else { "P3" })?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    if binary {
        return writer.write_all(&image.to_rgb8());
    }

    for row in image.pixels.chunks(image.width.max(1) as usize) {
        let mut line = String::with_capacity(row.len() * 12);
        for (i, color) in row.iter().enumerate() {
            let [r, g, b] = color_to_rgb(*color);
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&format!("{} {} {}", r, g, b));
        }
        writeln!(writer, "{}", line)?;
    }

    Ok(())
}

/// Save `image` to `path` in the given format.
///
/// Fails with [`OutputError::Create`] when the file cannot be opened for
/// writing; nothing is written in that case.
pub fn save_image(image: &FrameBuffer, path: &Path, format: ImageFormat) -> OutputResult<()> {
    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ImageFormat::PpmAscii | ImageFormat::PpmBinary => write_ppm(image, format, &mut writer)?,
        ImageFormat::Png => {
            let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
                .ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "frame buffer size does not match its dimensions",
                    )
                })?;
            rgb.write_to(&mut writer, image::ImageOutputFormat::Png)?;
        }
    }

    writer.flush()?;
    log::info!("Saved {}x{} image to {} ({:?})", image.width, image.height, path.display(), format);
    Ok(())
}
