/// The two standard Type 1 faces a capability statement draws with.
///
/// Neither face is embedded: both belong to the standard 14 fonts every PDF
/// reader ships with, so the document only references them by base font name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica, used for body copy, subtitles and footers
    Regular,
    /// Helvetica-Bold, used for the banner title and section headings
    Bold,
}

impl Font {
    /// Every font in page-resource order. Object ids for font dictionaries
    /// are handed out in this order.
    pub const ALL: [Font; 2] = [Font::Regular, Font::Bold];

    /// Name of the entry in the page `/Font` resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    /// PostScript name written to `/BaseFont`.
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Font::Bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_distinct() {
        assert_eq!(Font::Regular.resource_name(), "F1");
        assert_eq!(Font::Bold.resource_name(), "F2");
    }

    #[test]
    fn test_base_fonts() {
        assert_eq!(Font::Regular.base_font(), "Helvetica");
        assert_eq!(Font::Bold.base_font(), "Helvetica-Bold");
        assert!(Font::Bold.is_bold());
        assert!(!Font::Regular.is_bold());
    }

    #[test]
    fn test_all_is_in_resource_order() {
        let names: Vec<_> = Font::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names, vec!["F1", "F2"]);
    }
}
