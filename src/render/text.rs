//! Typeface lookup and single-line text layout
//!
//! Faces come from the system font database (fontdb) and are rasterized
//! with ab_glyph. Layout coordinates are relative to the top-left of the
//! line box, with the baseline one ascent below it.

use ab_glyph::{Font, FontVec, OutlinedGlyph, PxScale, ScaleFont, point};
use fontdb::{Database, Family, Query};

use crate::error::WatermarkError;

/// A parsed typeface and the family it was found under
pub struct LoadedFont {
    pub family: String,
    pub font: FontVec,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

/// Where typefaces are looked up
pub struct FontSource {
    db: Database,
}

impl FontSource {
    /// Index every font installed on the host
    pub fn system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        log::debug!("Loaded {} system fonts", db.len());
        Self { db }
    }

    /// A source with no fonts at all
    pub fn empty() -> Self {
        Self { db: Database::new() }
    }

    /// Load the first of `families` that is installed
    ///
    /// When none is, fall back to an upright proportional face, preferring
    /// one that has glyphs for every visible character of `text`.
    pub fn load(&self, families: &[&str], text: &str) -> Result<LoadedFont, WatermarkError> {
        for name in families {
            let query = Query {
                families: &[Family::Name(*name)],
                ..Query::default()
            };
            if let Some(font) = self.db.query(&query).and_then(|id| self.load_face(id)) {
                log::debug!("Using typeface {}", name);
                return Ok(LoadedFont {
                    family: (*name).to_string(),
                    font,
                });
            }
        }

        let mut uncovered = None;
        for face in self
            .db
            .faces()
            .filter(|face| face.style == fontdb::Style::Normal && !face.monospaced)
        {
            let Some(font) = self.load_face(face.id) else {
                continue;
            };
            let family = face
                .families
                .first()
                .map(|(name, _)| name.clone())
                .unwrap_or_else(|| face.post_script_name.clone());
            let loaded = LoadedFont { family, font };

            if covers(&loaded.font, text) {
                log::warn!(
                    "None of [{}] installed, falling back to {}",
                    families.join(", "),
                    loaded.family
                );
                return Ok(loaded);
            }
            uncovered.get_or_insert(loaded);
        }

        match uncovered {
            Some(loaded) => {
                log::warn!(
                    "No installed typeface covers {:?}, falling back to {}",
                    text,
                    loaded.family
                );
                Ok(loaded)
            }
            None => Err(WatermarkError::FontUnavailable {
                tried: families.iter().map(|f| (*f).to_string()).collect(),
            }),
        }
    }

    fn load_face(&self, id: fontdb::ID) -> Option<FontVec> {
        self.db
            .with_face_data(id, |data, index| {
                FontVec::try_from_vec_and_index(data.to_vec(), index).ok()
            })
            .flatten()
    }
}

/// Whether `font` has a glyph for every visible character of `text`
fn covers(font: &FontVec, text: &str) -> bool {
    text.chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .all(|c| font.glyph_id(c).0 != 0)
}

/// Ink bounds of laid-out text, relative to the line box origin
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    fn union(self, other: ab_glyph::Rect) -> Self {
        Self {
            left: self.left.min(other.min.x),
            top: self.top.min(other.min.y),
            right: self.right.max(other.max.x),
            bottom: self.bottom.max(other.max.y),
        }
    }
}

/// Outlined glyphs for one line of text
pub struct TextLayout {
    glyphs: Vec<OutlinedGlyph>,
    bounds: TextBounds,
}

impl TextLayout {
    /// Lay out `text` on a single line at `em_px` pixels per em
    pub fn new(font: &FontVec, em_px: f32, text: &str) -> Self {
        let scale = em_scale(font, em_px);
        let scaled = font.as_scaled(scale);
        let baseline = scaled.ascent();

        let mut glyphs = Vec::new();
        let mut bounds: Option<TextBounds> = None;
        let mut caret = 0.0f32;
        let mut prev = None;

        for ch in text.chars().filter(|c| !c.is_control()) {
            let id = scaled.glyph_id(ch);
            if let Some(prev_id) = prev {
                caret += scaled.kern(prev_id, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            if let Some(outlined) = scaled.outline_glyph(glyph) {
                let px = outlined.px_bounds();
                bounds = Some(match bounds {
                    Some(b) => b.union(px),
                    None => TextBounds {
                        left: px.min.x,
                        top: px.min.y,
                        right: px.max.x,
                        bottom: px.max.y,
                    },
                });
                glyphs.push(outlined);
            }
        }

        Self {
            glyphs,
            bounds: bounds.unwrap_or_default(),
        }
    }

    pub fn glyphs(&self) -> &[OutlinedGlyph] {
        &self.glyphs
    }

    pub fn bounds(&self) -> TextBounds {
        self.bounds
    }

    /// True when nothing visible was laid out (e.g. only spaces)
    pub fn is_blank(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// ab_glyph scales by ascent-descent height; convert an em size to that
fn em_scale(font: &FontVec, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(em_px * font.height_unscaled() / upem),
        _ => PxScale::from(em_px),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_font() -> Option<LoadedFont> {
        let source = FontSource::system();
        // Hosts without any installed fonts can't exercise layout
        source.load(crate::config::FONT_FAMILIES, "DRAFT").ok()
    }

    #[test]
    fn test_empty_source_reports_tried_families() {
        let err = FontSource::empty()
            .load(&["Arial", "DejaVu Sans"], "DRAFT")
            .unwrap_err();
        match err {
            WatermarkError::FontUnavailable { tried } => {
                assert_eq!(tried, vec!["Arial".to_string(), "DejaVu Sans".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fallback_face_covers_text() {
        let source = FontSource::system();
        let Ok(loaded) = source.load(&["No Such Family 7f3a"], "DRAFT") else {
            return;
        };
        assert!(
            covers(&loaded.font, "DRAFT"),
            "fallback {} lacks Latin capitals",
            loaded.family
        );
    }

    #[test]
    fn test_covers_ignores_whitespace() {
        let Some(loaded) = system_font() else { return };
        assert!(covers(&loaded.font, "DR AFT\n"));
        assert!(covers(&loaded.font, ""));
        assert!(!covers(&loaded.font, "\u{10FFFD}"));
    }

    #[test]
    fn test_layout_measures_ink() {
        let Some(loaded) = system_font() else { return };
        let layout = TextLayout::new(&loaded.font, 100.0, "DRAFT");
        let bounds = layout.bounds();

        assert_eq!(layout.glyphs().len(), 5);
        assert!(bounds.width() > 100.0, "width {}", bounds.width());
        assert!(bounds.height() > 40.0 && bounds.height() < 130.0);
        // Capitals sit below the line box top and start near the origin
        assert!(bounds.top > 0.0);
        assert!(bounds.left >= -5.0 && bounds.left < 20.0);
    }

    #[test]
    fn test_longer_text_is_wider() {
        let Some(loaded) = system_font() else { return };
        let short = TextLayout::new(&loaded.font, 100.0, "DR");
        let long = TextLayout::new(&loaded.font, 100.0, "DRAFT");
        assert!(long.bounds().width() > short.bounds().width());
    }

    #[test]
    fn test_blank_text_has_no_ink() {
        let Some(loaded) = system_font() else { return };
        let layout = TextLayout::new(&loaded.font, 100.0, "   ");
        assert!(layout.is_blank());
        assert_eq!(layout.bounds(), TextBounds::default());
    }
}
