//! The capability statement: content model, page layout and file output.

use crate::error::Result;
use crate::layout::{
    LayoutSession, PageContent, PageFooter, PageGeometry, PageHeader, Section, TextStyle,
};
use crate::writer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Gap between the intro paragraph and the first section.
const INTRO_GAP: f64 = 8.0;

/// Banner and footer copy shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branding {
    pub title: String,
    pub subtitle: String,
    pub contact_line: String,
}

/// Everything a capability statement says, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementContent {
    pub branding: Branding,
    pub intro: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl StatementContent {
    /// Reads content from a JSON file shaped like [`StatementContent`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The WaterApps capability statement.
    pub fn waterapps() -> Self {
        Self {
            branding: Branding {
                title: "WaterApps Capability Statement".to_string(),
                subtitle: "Cloud Platform Engineering | DevSecOps | Regulated Delivery".to_string(),
                contact_line: "www.waterapps.com.au  |  varun@waterapps.com.au".to_string(),
            },
            intro: "WaterApps helps regulated teams design, secure, and scale cloud delivery \
                    systems with practical engineering execution."
                .to_string(),
            sections: vec![
                Section::bullets(
                    "Company Snapshot",
                    [
                        "Legal entity: Water Apps Pty Ltd",
                        "ABN: 63 632 823 084",
                        "Primary region: Australia",
                        "Model: Principal-led delivery with specialist augmentation as needed",
                    ],
                ),
                Section::bullets(
                    "Core Services",
                    [
                        "Platform engineering and cloud modernization",
                        "DevSecOps and CI/CD hardening with auditable controls",
                        "Kubernetes architecture, security baseline, and delivery enablement",
                        "Operational runbooks, automation, and reliability improvements",
                    ],
                ),
                Section::bullets(
                    "Engagement Types",
                    [
                        "Discovery and architecture assessment",
                        "Targeted remediation and technical uplift",
                        "Delivery acceleration with repeatable templates and playbooks",
                        "Advisory support for procurement and enterprise readiness",
                    ],
                ),
                Section::paragraphs(
                    "Regulated Environment Alignment",
                    [
                        "Experience supporting delivery contexts in banking, government, and telecommunications.",
                        "Emphasis on evidence-linked workflows, least-privilege controls, and repeatable operational governance.",
                        "Public artifacts are sanitized by design while deeper detail can be shared during procurement stages.",
                    ],
                ),
                Section::bullets(
                    "Representative Outcomes",
                    [
                        "Reduced delivery lead time through standardized CI/CD and environment controls.",
                        "Improved deployment safety using approval gates, traceable change records, and runbook-driven operations.",
                        "Higher platform consistency via reusable infrastructure and documentation baselines.",
                    ],
                ),
                Section::bullets(
                    "Operating Principles",
                    [
                        "Build trust first: secure defaults, explicit ownership, and measurable controls.",
                        "Ship with evidence: every delivery item links to proof of execution.",
                        "Design for repeatability: productize useful patterns to reduce risk and cost over time.",
                    ],
                ),
                Section::paragraphs(
                    "Contact and Next Step",
                    [
                        "Website: https://www.waterapps.com.au",
                        "Capability statement web version: https://www.waterapps.com.au/capability-statement.html",
                        "Contact: varun@waterapps.com.au",
                        "Recommended next step: 30-minute discovery call to align scope, risks, and delivery model.",
                    ],
                ),
            ],
        }
    }
}

/// Summary of a saved document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub page_count: usize,
    pub byte_len: usize,
}

/// A capability statement ready to be laid out and written.
#[derive(Debug, Clone)]
pub struct CapabilityStatement {
    content: StatementContent,
    updated: NaiveDate,
    geometry: PageGeometry,
}

impl CapabilityStatement {
    /// `updated` is printed in every footer.
    pub fn new(content: StatementContent, updated: NaiveDate) -> Self {
        Self {
            content,
            updated,
            geometry: PageGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn content(&self) -> &StatementContent {
        &self.content
    }

    /// Lays out the intro and every section, then adds footers.
    pub fn render(&self) -> Vec<PageContent> {
        let branding = &self.content.branding;
        let header = PageHeader::new(&branding.title, &branding.subtitle);
        let mut session = LayoutSession::with_geometry(header, self.geometry);

        session.add_wrapped_text(&self.content.intro, TextStyle::intro(), 0.0);
        session.add_gap(INTRO_GAP);
        for section in &self.content.sections {
            session.add_section(section);
        }

        let footer = PageFooter::new(&branding.contact_line, self.updated);
        session.finish(&footer)
    }

    /// One content stream per page.
    pub fn page_streams(&self) -> Vec<Vec<u8>> {
        self.render().iter().map(PageContent::to_stream).collect()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        writer::serialize(&self.page_streams(), &self.geometry)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<GenerationReport> {
        let path = path.as_ref();
        let streams = self.page_streams();
        let byte_len = writer::write_file(path, &streams, &self.geometry)? as usize;

        tracing::info!(
            path = %path.display(),
            pages = streams.len(),
            bytes = byte_len,
            "wrote capability statement"
        );
        Ok(GenerationReport {
            path: path.to_path_buf(),
            page_count: streams.len(),
            byte_len,
        })
    }
}
