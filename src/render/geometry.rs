//! Placement math for the watermark text box

use super::text::TextBounds;
use crate::config::WatermarkStyle;

/// Rounded pixel size of a text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

impl From<TextBounds> for TextSize {
    fn from(bounds: TextBounds) -> Self {
        Self {
            width: bounds.width().round() as i32,
            height: bounds.height().round() as i32,
        }
    }
}

/// Line box origin that puts the text box in the bottom-right corner
///
/// Not clamped: text larger than the image yields negative offsets and
/// is cropped at the canvas edge.
pub fn bottom_right_origin(
    image_width: u32,
    image_height: u32,
    text: TextSize,
    style: &WatermarkStyle,
) -> (i32, i32) {
    let x = image_width as i32 - text.width - style.padding_right;
    let y = image_height as i32 - text.height - style.padding_bottom;
    (x, y)
}
