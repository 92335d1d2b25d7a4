//! Image rendering for watermarks
//!
//! Glyph coverage is rasterized into a tiny-skia `Mask`, then the text
//! color is pasted through it straight into the RgbaImage. Only pixels
//! with non-zero coverage are written.

use image::{Rgba, RgbaImage};
use tiny_skia::Mask;

use super::text::TextLayout;
use crate::config::TextColor;

/// Rasterize glyph coverage into a mask the size of the canvas
///
/// Coverage falling outside the canvas is dropped. Returns None when no
/// pixel ends up covered.
fn coverage_mask(width: u32, height: u32, layout: &TextLayout, origin: (i32, i32)) -> Option<Mask> {
    let mut mask = Mask::new(width, height)?;
    let stride = width as usize;
    let mut covered = false;

    {
        let data = mask.data_mut();
        for glyph in layout.glyphs() {
            let bounds = glyph.px_bounds();
            let gx = origin.0 + bounds.min.x as i32;
            let gy = origin.1 + bounds.min.y as i32;

            glyph.draw(|x, y, coverage| {
                let px = gx + x as i32;
                let py = gy + y as i32;
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    return;
                }
                let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                if value == 0 {
                    return;
                }
                let idx = py as usize * stride + px as usize;
                // Overlapping glyphs keep the stronger coverage
                data[idx] = data[idx].max(value);
                covered = true;
            });
        }
    }

    covered.then_some(mask)
}

fn lerp_u8(from: u8, to: u8, weight: u8) -> u8 {
    let w = weight as u32;
    ((from as u32 * (255 - w) + to as u32 * w + 127) / 255) as u8
}

/// Paste `ink` over `dst` with coverage `m` on every channel, alpha included
///
/// The color channels take the ink fully where `dst` is transparent, so a
/// glyph on a clear background stays white instead of fading to black.
fn paste(dst: Rgba<u8>, ink: [u8; 4], m: u8) -> Rgba<u8> {
    let color_m = 255 - ((255 - m as u32) * dst[3] as u32 + 127) / 255;
    let color_m = color_m as u8;
    Rgba([
        lerp_u8(dst[0], ink[0], color_m),
        lerp_u8(dst[1], ink[1], color_m),
        lerp_u8(dst[2], ink[2], color_m),
        lerp_u8(dst[3], ink[3], m),
    ])
}

/// Paint `layout` onto the image with its line box at `origin`
///
/// Covered pixels move toward `color` on all four channels, so fully
/// covered pixels become exactly `color`, translucency included.
/// Returns whether any pixel was touched.
pub fn draw_text_on_image(
    img: &mut RgbaImage,
    layout: &TextLayout,
    origin: (i32, i32),
    color: TextColor,
) -> bool {
    if layout.is_blank() {
        return false;
    }

    let Some(mask) = coverage_mask(img.width(), img.height(), layout, origin) else {
        log::debug!("Watermark text at {:?} falls entirely outside the image", origin);
        return false;
    };

    let ink = color.to_rgba_u8();
    for (px, &m) in img.pixels_mut().zip(mask.data()) {
        if m != 0 {
            *px = paste(*px, ink, m);
        }
    }

    true
}
