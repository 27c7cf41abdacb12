use crate::graphics::{text_command, Color};
use crate::layout::LayoutSession;
use crate::text::Font;
use serde::{Deserialize, Serialize};

/// Room reserved for a section heading before it is drawn.
pub const SECTION_HEADROOM: f64 = 28.0;
/// Cursor advance after a section heading.
pub const HEADING_ADVANCE: f64 = 20.0;
/// Offset of bullet text from the left margin.
pub const BULLET_INDENT: f64 = 14.0;
/// Gap after each body entry.
pub const ENTRY_GAP: f64 = 4.0;
/// Extra gap after a whole section.
pub const SECTION_GAP: f64 = 8.0;

const BULLET_GLYPH: &str = "-";

/// Font, size and fill color for a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f64,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font: Font, size: f64, color: Color) -> Self {
        Self { font, size, color }
    }

    pub fn body() -> Self {
        Self::new(Font::Regular, 11.0, Color::rgb(0.15, 0.2, 0.27))
    }

    /// Lead paragraph under the first header.
    pub fn intro() -> Self {
        Self::new(Font::Regular, 12.0, Color::rgb(0.12, 0.18, 0.26))
    }

    pub fn heading() -> Self {
        Self::new(Font::Bold, 14.0, Color::rgb(0.06, 0.25, 0.56))
    }
}

/// How the entries of a section are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Each entry gets a bullet and is indented past it
    #[default]
    Bullets,
    /// Entries are plain paragraphs at the left margin
    Paragraphs,
}

/// A titled block of body entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub entries: Vec<String>,
    #[serde(default)]
    pub kind: SectionKind,
}

impl Section {
    pub fn bullets<I, S>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            entries: entries.into_iter().map(Into::into).collect(),
            kind: SectionKind::Bullets,
        }
    }

    pub fn paragraphs<I, S>(title: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            entries: entries.into_iter().map(Into::into).collect(),
            kind: SectionKind::Paragraphs,
        }
    }
}

impl LayoutSession {
    /// Wraps `text` to the column and draws it line by line.
    ///
    /// Each line is checked against the bottom margin on its own, so a
    /// paragraph can continue on the next page.
    pub fn add_wrapped_text(&mut self, text: &str, style: TextStyle, indent: f64) {
        let geometry = *self.geometry();
        let max_width = geometry.content_width() - indent;
        let lines = self.shaper().wrap(text, style.font, style.size, max_width);

        for line in lines {
            self.ensure_space(geometry.line_gap);
            let y = self.cursor();
            self.draw(text_command(
                geometry.left + indent,
                y,
                style.font,
                style.size,
                &line,
                style.color,
            ));
            self.advance(geometry.line_gap);
        }
    }

    /// Draws a section heading followed by its entries.
    pub fn add_section(&mut self, section: &Section) {
        let geometry = *self.geometry();
        let heading = TextStyle::heading();

        self.ensure_space(SECTION_HEADROOM);
        let y = self.cursor();
        self.draw(text_command(
            geometry.left,
            y,
            heading.font,
            heading.size,
            &section.title,
            heading.color,
        ));
        self.advance(HEADING_ADVANCE);

        for entry in &section.entries {
            match section.kind {
                SectionKind::Bullets => {
                    self.ensure_space(geometry.line_gap);
                    let y = self.cursor();
                    self.draw(text_command(
                        geometry.left,
                        y,
                        Font::Regular,
                        TextStyle::body().size,
                        BULLET_GLYPH,
                        heading.color,
                    ));
                    self.add_wrapped_text(entry, TextStyle::body(), BULLET_INDENT);
                }
                SectionKind::Paragraphs => {
                    self.add_wrapped_text(entry, TextStyle::body(), 0.0);
                }
            }
            self.advance(ENTRY_GAP);
        }
        self.advance(SECTION_GAP);
    }

    /// Leaves a fixed vertical gap.
    pub fn add_gap(&mut self, points: f64) {
        self.advance(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageHeader;

    fn session() -> LayoutSession {
        LayoutSession::new(PageHeader::new("Title", "Subtitle"))
    }

    #[test]
    fn test_wrapped_text_advances_per_line() {
        let mut s = session();
        s.add_wrapped_text("one line", TextStyle::body(), 0.0);
        assert_eq!(s.cursor(), 744.0 - 17.0);
        let last = s.current_page().commands().last().unwrap();
        assert!(last.contains("/F1 11 Tf 1 0 0 1 52 744 Tm (one line) Tj"));
    }

    #[test]
    fn test_blank_entry_is_drawn_verbatim() {
        let mut s = session();
        s.add_wrapped_text(" ", TextStyle::body(), 0.0);
        assert_eq!(s.cursor(), 744.0 - 17.0);
        let last = s.current_page().commands().last().unwrap();
        assert!(last.ends_with("1 0 0 1 52 744 Tm ( ) Tj ET"));
    }

    #[test]
    fn test_bullet_section_layout() {
        let mut s = session();
        s.add_section(&Section::bullets("Snapshot", ["First", "Second"]));

        let commands = &s.current_page().commands()[5..];
        assert_eq!(commands.len(), 5);
        assert!(commands[0].contains("/F2 14 Tf 1 0 0 1 52 744 Tm (Snapshot) Tj"));
        assert!(commands[1].contains("1 0 0 1 52 724 Tm (-) Tj"));
        assert!(commands[2].contains("1 0 0 1 66 724 Tm (First) Tj"));
        assert!(commands[3].contains("1 0 0 1 52 703 Tm (-) Tj"));
        assert!(commands[4].contains("1 0 0 1 66 703 Tm (Second) Tj"));
        // 744 - 20 - 2 * (17 + 4) - 8
        assert_eq!(s.cursor(), 674.0);
    }

    #[test]
    fn test_paragraph_section_is_unindented() {
        let mut s = session();
        s.add_section(&Section::paragraphs("Contact", ["Website: example.com"]));

        let commands = &s.current_page().commands()[5..];
        assert_eq!(commands.len(), 2);
        assert!(commands[1].contains("1 0 0 1 52 724 Tm (Website: example.com) Tj"));
        assert!(!commands.iter().any(|c| c.contains("(-)")));
    }

    #[test]
    fn test_heading_moves_to_next_page_when_out_of_room() {
        let mut s = session();
        s.advance(744.0 - 90.0);
        s.add_section(&Section::bullets("Late", ["entry"]));

        assert_eq!(s.page_count(), 2);
        assert_eq!(s.pages()[0].len(), 5);
        assert!(s.pages()[1].commands()[5].contains("(Late)"));
    }

    #[test]
    fn test_section_kind_deserializes_lowercase() {
        let section: Section =
            serde_json::from_str(r#"{"title":"T","entries":["a"],"kind":"paragraphs"}"#).unwrap();
        assert_eq!(section.kind, SectionKind::Paragraphs);

        let defaulted: Section = serde_json::from_str(r#"{"title":"T","entries":[]}"#).unwrap();
        assert_eq!(defaulted.kind, SectionKind::Bullets);
    }
}
