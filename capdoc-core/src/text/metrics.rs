use crate::text::Font;

/// Average Helvetica glyph width as a fraction of the font size.
///
/// Wide enough that wrapped lines stay inside the column for ordinary English
/// copy. Not a substitute for per-glyph metrics.
pub const DEFAULT_GLYPH_WIDTH: f64 = 0.52;

/// Lines never get a budget smaller than this many characters.
pub const MIN_CHARS_PER_LINE: usize = 12;

/// Average glyph width factor per font face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphWidths {
    regular: f64,
    bold: f64,
}

impl GlyphWidths {
    pub fn new(regular: f64, bold: f64) -> Self {
        Self { regular, bold }
    }

    /// The same factor for every face.
    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor)
    }

    pub fn factor(&self, font: Font) -> f64 {
        match font {
            Font::Regular => self.regular,
            Font::Bold => self.bold,
        }
    }

    pub fn with_factor(mut self, font: Font, factor: f64) -> Self {
        match font {
            Font::Regular => self.regular = factor,
            Font::Bold => self.bold = factor,
        }
        self
    }
}

impl Default for GlyphWidths {
    fn default() -> Self {
        Self::uniform(DEFAULT_GLYPH_WIDTH)
    }
}

/// Character budget for one line of `max_width` points at `font_size`.
pub fn max_chars_per_line(max_width: f64, font_size: f64, factor: f64) -> usize {
    let estimate = (max_width / (font_size * factor)).floor();
    if estimate.is_finite() && estimate > 0.0 {
        (estimate as usize).max(MIN_CHARS_PER_LINE)
    } else {
        MIN_CHARS_PER_LINE
    }
}

/// Estimated rendered width of `text` in points.
pub fn estimate_width(text: &str, font_size: f64, factor: f64) -> f64 {
    text.chars().count() as f64 * font_size * factor
}
