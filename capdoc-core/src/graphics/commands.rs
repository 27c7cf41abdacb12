//! Single content-stream instructions.
//!
//! Each function returns one self-contained command line. Fill and stroke
//! commands are bracketed by `q`/`Q` so their color state does not reach the
//! next command; text commands carry their own `rg` before `BT`.

use crate::graphics::{format_number, Color};
use crate::text::{escape_pdf_string, Font};

/// Shows `text` at the absolute position `(x, y)`.
pub fn text_command(x: f64, y: f64, font: Font, size: f64, text: &str, color: Color) -> String {
    format!(
        "{} rg BT /{} {} Tf 1 0 0 1 {} {} Tm ({}) Tj ET",
        color.operands(),
        font.resource_name(),
        format_number(size),
        format_number(x),
        format_number(y),
        escape_pdf_string(text)
    )
}

/// Fills the rectangle with lower-left corner `(x, y)`.
pub fn rect_command(x: f64, y: f64, width: f64, height: f64, color: Color) -> String {
    format!(
        "q {} rg {} {} {} {} re f Q",
        color.operands(),
        format_number(x),
        format_number(y),
        format_number(width),
        format_number(height)
    )
}

/// Strokes a straight line from `(x1, y1)` to `(x2, y2)`.
pub fn line_command(x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) -> String {
    format!(
        "q {} RG {:.2} w {} {} m {} {} l S Q",
        color.operands(),
        width,
        format_number(x1),
        format_number(y1),
        format_number(x2),
        format_number(y2)
    )
}
