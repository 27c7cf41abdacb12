mod encoding;
mod font;
mod metrics;
mod wrap;

pub use encoding::{encode_latin1, escape_pdf_string};
pub use font::Font;
pub use metrics::{
    estimate_width, max_chars_per_line, GlyphWidths, DEFAULT_GLYPH_WIDTH, MIN_CHARS_PER_LINE,
};
pub use wrap::{wrap_text, TextShaper, WrappedLines};
