use crate::text::metrics::{max_chars_per_line, GlyphWidths};
use crate::text::Font;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Greedy word wrapper driven by an average glyph width.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextShaper {
    widths: GlyphWidths,
}

impl TextShaper {
    pub fn new(widths: GlyphWidths) -> Self {
        Self { widths }
    }

    pub fn widths(&self) -> &GlyphWidths {
        &self.widths
    }

    /// Character budget for a line of `max_width` points.
    pub fn line_budget(&self, font: Font, font_size: f64, max_width: f64) -> usize {
        max_chars_per_line(max_width, font_size, self.widths.factor(font))
    }

    pub fn wrap<'a>(
        &self,
        text: &'a str,
        font: Font,
        font_size: f64,
        max_width: f64,
    ) -> WrappedLines<'a> {
        WrappedLines::new(text, self.line_budget(font, font_size, max_width))
    }
}

/// Wraps `text` for the regular face with the default glyph width.
pub fn wrap_text(text: &str, font_size: f64, max_width: f64) -> WrappedLines<'_> {
    TextShaper::default().wrap(text, Font::Regular, font_size, max_width)
}

/// Lazily produced lines of a wrapped string.
///
/// Always yields at least one line: text without any words comes back
/// unchanged as that line. Cloning gives an independent iterator that starts
/// where this one currently is.
#[derive(Debug, Clone)]
pub struct WrappedLines<'a> {
    text: &'a str,
    words: Peekable<SplitWhitespace<'a>>,
    max_chars: usize,
    emitted: bool,
}

impl<'a> WrappedLines<'a> {
    pub fn with_budget(text: &'a str, max_chars: usize) -> Self {
        Self::new(text, max_chars)
    }

    fn new(text: &'a str, max_chars: usize) -> Self {
        Self {
            text,
            words: text.split_whitespace().peekable(),
            max_chars,
            emitted: false,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }
}

impl Iterator for WrappedLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let Some(first) = self.words.next() else {
            if self.emitted {
                return None;
            }
            self.emitted = true;
            return Some(self.text.to_string());
        };
        self.emitted = true;

        let mut line = String::from(first);
        let mut len = first.chars().count();

        while let Some(word) = self.words.peek() {
            let word_len = word.chars().count();
            if len + 1 + word_len > self.max_chars {
                break;
            }
            line.push(' ');
            line.push_str(word);
            len += 1 + word_len;
            self.words.next();
        }

        Some(line)
    }
}

impl std::iter::FusedIterator for WrappedLines<'_> {}
