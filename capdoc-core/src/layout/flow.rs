use crate::layout::{PageFooter, PageGeometry, PageHeader};
use crate::text::{encode_latin1, TextShaper};

/// The drawing commands of one page, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContent {
    commands: Vec<String>,
}

impl PageContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: String) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Content stream bytes: commands joined by newlines, Latin-1 encoded.
    pub fn to_stream(&self) -> Vec<u8> {
        encode_latin1(&self.commands.join("\n"))
    }
}

/// Outcome of [`LayoutSession::ensure_space`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBreak {
    /// The element fits on the current page
    None,
    /// A new page with this 1-based number was opened
    NewPage(usize),
}

/// Incremental layout state: the pages laid out so far and the cursor.
///
/// A session always holds at least one page. Every page receives its header
/// when it is opened; footers are added by [`LayoutSession::finish`].
#[derive(Debug, Clone)]
pub struct LayoutSession {
    pages: Vec<PageContent>,
    y: f64,
    geometry: PageGeometry,
    header: PageHeader,
    shaper: TextShaper,
}

impl LayoutSession {
    pub fn new(header: PageHeader) -> Self {
        Self::with_geometry(header, PageGeometry::default())
    }

    pub fn with_geometry(header: PageHeader, geometry: PageGeometry) -> Self {
        let mut first = PageContent::new();
        let y = header.draw(&mut first, 1, &geometry);
        Self {
            pages: vec![first],
            y,
            geometry,
            header,
            shaper: TextShaper::default(),
        }
    }

    pub fn with_shaper(mut self, shaper: TextShaper) -> Self {
        self.shaper = shaper;
        self
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn shaper(&self) -> &TextShaper {
        &self.shaper
    }

    /// Current baseline.
    pub fn cursor(&self) -> f64 {
        self.y
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> &PageContent {
        &self.pages[self.pages.len() - 1]
    }

    pub fn current_page_mut(&mut self) -> &mut PageContent {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Makes room for an element `needed` points tall below the cursor.
    ///
    /// Opens a new page when the element would cross the bottom margin.
    pub fn ensure_space(&mut self, needed: f64) -> PageBreak {
        if self.y - needed >= self.geometry.bottom_margin {
            return PageBreak::None;
        }

        let page_number = self.pages.len() + 1;
        let mut page = PageContent::new();
        self.y = self.header.draw(&mut page, page_number, &self.geometry);
        self.pages.push(page);

        tracing::debug!(page = page_number, needed, "started new page");
        PageBreak::NewPage(page_number)
    }

    /// Appends a command to the current page.
    pub fn draw(&mut self, command: String) {
        self.current_page_mut().push(command);
    }

    /// Moves the cursor down by `points`. Never opens a page by itself.
    pub fn advance(&mut self, points: f64) {
        self.y -= points;
    }

    /// Draws `footer` on every page and hands the pages over.
    pub fn finish(mut self, footer: &PageFooter) -> Vec<PageContent> {
        for page in &mut self.pages {
            footer.draw(page, &self.geometry);
        }
        self.pages
    }
}
