//! Page header and footer blocks.
//!
//! The header is drawn as soon as a page is opened. The footer is drawn on
//! every page once layout has finished, so it never affects pagination.

use crate::graphics::{line_command, rect_command, text_command, Color};
use crate::layout::{PageContent, PageGeometry};
use crate::text::Font;
use chrono::NaiveDate;

const BANNER_BOTTOM: f64 = 774.0;
const BANNER_HEIGHT: f64 = 68.0;
const TITLE_BASELINE: f64 = 812.0;
const TITLE_SIZE: f64 = 22.0;
const SUBTITLE_BASELINE: f64 = 790.0;
const SUBTITLE_SIZE: f64 = 11.0;
const PAGE_LABEL_SIZE: f64 = 10.0;
const PAGE_LABEL_INSET: f64 = 52.0;
const HEADER_RULE_Y: f64 = 768.0;

const FOOTER_RULE_Y: f64 = 44.0;
const FOOTER_BASELINE: f64 = 30.0;
const FOOTER_SIZE: f64 = 9.0;
const FOOTER_DATE_INSET: f64 = 110.0;
const RULE_WIDTH: f64 = 0.8;

fn banner_color() -> Color {
    Color::rgb(0.05, 0.23, 0.54)
}

fn banner_text_color() -> Color {
    Color::rgb(0.86, 0.92, 1.0)
}

fn header_rule_color() -> Color {
    Color::rgb(0.74, 0.82, 0.95)
}

fn footer_rule_color() -> Color {
    Color::rgb(0.82, 0.86, 0.9)
}

fn footer_text_color() -> Color {
    Color::rgb(0.38, 0.44, 0.5)
}

/// Title banner repeated at the top of every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHeader {
    title: String,
    subtitle: String,
}

impl PageHeader {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Draws the banner, subtitle, `Page N` label and separator rule.
    ///
    /// Returns the baseline where body text starts.
    pub fn draw(&self, page: &mut PageContent, page_number: usize, geometry: &PageGeometry) -> f64 {
        page.push(rect_command(
            0.0,
            BANNER_BOTTOM,
            geometry.width,
            BANNER_HEIGHT,
            banner_color(),
        ));
        page.push(text_command(
            geometry.left,
            TITLE_BASELINE,
            Font::Bold,
            TITLE_SIZE,
            &self.title,
            Color::white(),
        ));
        page.push(text_command(
            geometry.left,
            SUBTITLE_BASELINE,
            Font::Regular,
            SUBTITLE_SIZE,
            &self.subtitle,
            banner_text_color(),
        ));
        page.push(text_command(
            geometry.right_edge() - PAGE_LABEL_INSET,
            SUBTITLE_BASELINE,
            Font::Regular,
            PAGE_LABEL_SIZE,
            &format!("Page {page_number}"),
            banner_text_color(),
        ));
        page.push(line_command(
            geometry.left,
            HEADER_RULE_Y,
            geometry.right_edge(),
            HEADER_RULE_Y,
            header_rule_color(),
            RULE_WIDTH,
        ));
        geometry.top_baseline
    }
}

/// Contact line and revision date along the bottom of every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFooter {
    contact: String,
    updated: NaiveDate,
}

impl PageFooter {
    pub fn new(contact: impl Into<String>, updated: NaiveDate) -> Self {
        Self {
            contact: contact.into(),
            updated,
        }
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn updated(&self) -> NaiveDate {
        self.updated
    }

    pub fn draw(&self, page: &mut PageContent, geometry: &PageGeometry) {
        page.push(line_command(
            geometry.left,
            FOOTER_RULE_Y,
            geometry.right_edge(),
            FOOTER_RULE_Y,
            footer_rule_color(),
            RULE_WIDTH,
        ));
        page.push(text_command(
            geometry.left,
            FOOTER_BASELINE,
            Font::Regular,
            FOOTER_SIZE,
            &self.contact,
            footer_text_color(),
        ));
        page.push(text_command(
            geometry.right_edge() - FOOTER_DATE_INSET,
            FOOTER_BASELINE,
            Font::Regular,
            FOOTER_SIZE,
            &format!("Updated {}", self.updated.format("%Y-%m-%d")),
            footer_text_color(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> PageHeader {
        PageHeader::new("Acme Capability Statement", "Platform | Delivery")
    }

    #[test]
    fn test_header_draws_five_commands() {
        let mut page = PageContent::new();
        let baseline = header().draw(&mut page, 1, &PageGeometry::A4);

        let commands = page.commands();
        assert_eq!(baseline, 744.0);
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], "q 0.050 0.230 0.540 rg 0 774 595 68 re f Q");
        assert!(commands[1].contains("/F2 22 Tf 1 0 0 1 52 812 Tm (Acme Capability Statement)"));
        assert!(commands[3].contains("1 0 0 1 491 790 Tm (Page 1) Tj"));
        assert_eq!(commands[4], "q 0.740 0.820 0.950 RG 0.80 w 52 768 m 543 768 l S Q");
    }

    #[test]
    fn test_header_band_is_identical_apart_from_page_label() {
        let mut first = PageContent::new();
        let mut third = PageContent::new();
        header().draw(&mut first, 1, &PageGeometry::A4);
        header().draw(&mut third, 3, &PageGeometry::A4);

        for (i, (a, b)) in first.commands().iter().zip(third.commands()).enumerate() {
            if i == 3 {
                assert!(b.contains("(Page 3)"));
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_footer() {
        let updated = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        let footer = PageFooter::new("www.example.com  |  hello@example.com", updated);
        let mut page = PageContent::new();
        footer.draw(&mut page, &PageGeometry::A4);

        let commands = page.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], "q 0.820 0.860 0.900 RG 0.80 w 52 44 m 543 44 l S Q");
        let contact = &commands[1];
        assert!(contact.contains("1 0 0 1 52 30 Tm (www.example.com  |  hello@example.com) Tj"));
        assert!(commands[2].contains("1 0 0 1 433 30 Tm (Updated 2026-03-09) Tj"));
    }
}
