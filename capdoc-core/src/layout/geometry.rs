/// Page size, margins and line spacing in points (1/72 inch).
///
/// Defaults describe an A4 page (595 x 842).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    /// Baseline of the first line of body text below the header band
    pub top_baseline: f64,
    /// Lowest baseline, plus one line, that body text may use
    pub bottom_margin: f64,
    /// Vertical advance between wrapped lines
    pub line_gap: f64,
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width: 595.0,
        height: 842.0,
        left: 52.0,
        right: 52.0,
        top_baseline: 744.0,
        bottom_margin: 64.0,
        line_gap: 17.0,
    };

    /// Width available to body text between the margins.
    pub fn content_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    /// X coordinate of the right margin.
    pub fn right_edge(&self) -> f64 {
        self.width - self.right
    }

    /// Vertical room for body text on a fresh page.
    pub fn writable_height(&self) -> f64 {
        self.top_baseline - self.bottom_margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}
