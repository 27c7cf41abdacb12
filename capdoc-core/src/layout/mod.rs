//! Page flow: turns headings, paragraphs and bullet lists into per-page
//! command lists, opening pages as the cursor reaches the bottom margin.

mod flow;
mod geometry;
mod header_footer;
mod section;

pub use flow::{LayoutSession, PageBreak, PageContent};
pub use geometry::PageGeometry;
pub use header_footer::{PageFooter, PageHeader};
pub use section::{
    Section, SectionKind, TextStyle, BULLET_INDENT, ENTRY_GAP, HEADING_ADVANCE, SECTION_GAP,
    SECTION_HEADROOM,
};
