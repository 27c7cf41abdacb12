//! # capdoc
//!
//! Generates a company's static marketing documents: a multi-page PDF
//! capability statement and a markdown security design article.
//!
//! The PDF is written by hand, without a document library:
//!
//! - [`text`] wraps copy into lines using an average glyph width
//! - [`graphics`] turns text, rectangles and rules into content-stream commands
//! - [`layout`] flows headings, paragraphs and bullet lists across pages,
//!   drawing a header on each page as it opens and footers at the end
//! - [`writer`] numbers the objects and writes the file with an exact
//!   cross-reference table
//!
//! ## Quick Start
//!
//! ```rust
//! use capdoc::{CapabilityStatement, StatementContent, Result};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<()> {
//! let updated = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let statement = CapabilityStatement::new(StatementContent::waterapps(), updated);
//!
//! let bytes = statement.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom layouts
//!
//! ```rust
//! use capdoc::layout::{LayoutSession, PageFooter, PageHeader, Section};
//! use capdoc::writer;
//! use chrono::NaiveDate;
//!
//! # fn main() -> capdoc::Result<()> {
//! let mut session = LayoutSession::new(PageHeader::new("Acme", "Platform Engineering"));
//! session.add_section(&Section::bullets("Core Services", ["Cloud", "Security"]));
//!
//! let footer = PageFooter::new("acme.example", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
//! let streams: Vec<Vec<u8>> = session
//!     .finish(&footer)
//!     .iter()
//!     .map(|page| page.to_stream())
//!     .collect();
//! let pdf = writer::serialize(&streams, &Default::default())?;
//! assert!(pdf.ends_with(b"%%EOF\n"));
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod error;
pub mod graphics;
pub mod layout;
pub mod objects;
pub mod statement;
pub mod text;
pub mod writer;

pub use error::{PdfError, Result};
pub use graphics::Color;
pub use layout::{LayoutSession, PageContent, PageGeometry, Section, SectionKind};
pub use statement::{Branding, CapabilityStatement, GenerationReport, StatementContent};
pub use text::{wrap_text, Font, TextShaper};
pub use writer::{serialize, write_file, PdfWriter};
