//! Decode, stamp and save a watermarked copy of an image

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::config::WatermarkStyle;
use crate::domain::WatermarkRequest;
use crate::error::WatermarkError;
use crate::render::geometry::{self, TextSize};
use crate::render::image::draw_text_on_image;
use crate::render::text::{FontSource, TextLayout};

/// Run the full pipeline with the fixed style and the host's fonts
///
/// Returns the path of the written PNG.
pub fn apply(request: &WatermarkRequest) -> Result<PathBuf, WatermarkError> {
    apply_with(request, &WatermarkStyle::default(), &FontSource::system())
}

pub fn apply_with(
    request: &WatermarkRequest,
    style: &WatermarkStyle,
    fonts: &FontSource,
) -> Result<PathBuf, WatermarkError> {
    let mut image = decode(&request.source_path)?;
    let font = fonts.load(style.font_families, &request.text)?;
    log::debug!("Stamping {:?} with {}", request.text, font.family);

    stamp(&mut image, &font.font, &request.text, style);

    let output = output_path(&request.source_path, style);
    save_png(&image, &output)?;
    log::info!("Watermarked image saved at {}", output.display());

    Ok(output)
}

/// Open any supported format and normalize to 8-bit RGBA
pub fn decode(path: &Path) -> Result<RgbaImage, WatermarkError> {
    let image = image::open(path).map_err(|source| WatermarkError::ImageDecodeFailure {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Decoded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// Draw `text` into the bottom-right corner of `image`
///
/// Returns the line box origin the text was placed at.
pub fn stamp(
    image: &mut RgbaImage,
    font: &ab_glyph::FontVec,
    text: &str,
    style: &WatermarkStyle,
) -> (i32, i32) {
    let layout = TextLayout::new(font, style.font_size, text);
    let size = TextSize::from(layout.bounds());
    let origin = geometry::bottom_right_origin(image.width(), image.height(), size, style);
    log::debug!(
        "Text box {}x{} placed at {:?} on {}x{}",
        size.width,
        size.height,
        origin,
        image.width(),
        image.height()
    );

    draw_text_on_image(image, &layout, origin, style.color);
    origin
}

/// `<dir>/<stem><suffix>.<ext>` next to the source, whatever its format
///
/// The stem is everything before the last dot, so `.png` has an empty stem.
pub fn output_path(source: &Path, style: &WatermarkStyle) -> PathBuf {
    let mut name: OsString = match source.file_name().and_then(|n| n.to_str()) {
        Some(file_name) => file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _)| stem)
            .into(),
        None => source
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default(),
    };
    name.push(style.output_suffix);
    name.push(".");
    name.push(style.output_extension);
    source.with_file_name(name)
}

/// Encode as PNG into a temp file beside `path`, then move it into place
///
/// An existing file at `path` is replaced. On failure nothing is left behind.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), WatermarkError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".watermark-").suffix(".png");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let mut file = builder
        .tempfile_in(dir)
        .map_err(|e| WatermarkError::write_failure(path, e))?;

    {
        let mut writer = io::BufWriter::new(file.as_file_mut());
        write_png(&mut writer, img).map_err(|e| WatermarkError::write_failure(path, e))?;
        writer
            .flush()
            .map_err(|e| WatermarkError::write_failure(path, e))?;
    }

    file.persist(path)
        .map_err(|e| WatermarkError::write_failure(path, e.error))?;
    Ok(())
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> io::Result<()> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(encoding_to_io)?;
    writer.write_image_data(image.as_raw()).map_err(encoding_to_io)?;
    writer.finish().map_err(encoding_to_io)
}

fn encoding_to_io(err: png::EncodingError) -> io::Error {
    match err {
        png::EncodingError::IoError(e) => e,
        other => io::Error::other(other),
    }
}
