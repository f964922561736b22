//! Paginated document export for generated snippets and headlines.
//!
//! Rendering happens in two passes: [`layout_document`] places every text run
//! on A4 pages (title, timestamp, body, one footer per page), then the PDF
//! backend serializes those pages.
mod layout;
mod metrics;
mod pdf;

use chrono::{DateTime, Local};
use desk_core::HeadlineSet;
use engine_logging::engine_info;
use thiserror::Error;

use crate::filename::document_filename;
use crate::{DocumentKind, SanitizedText};

pub use layout::{
    layout_document, wrap_text, BODY_SIZE_PT, BULLET, BULLET_INDENT_MM, LINE_HEIGHT_MM,
    MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
pub use metrics::text_width_mm;

/// Credit line written at the bottom of every page.
pub const DEFAULT_FOOTER: &str = "Built with love by Futurelab Studios";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf serialization failed: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

/// A single piece of text placed on a page. `y_mm` is the baseline offset from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub face: FontFace,
    pub size_pt: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LaidOutPage {
    pub runs: Vec<TextRun>,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|run| run.text.as_str())
    }

    pub fn count_exact(&self, text: &str) -> usize {
        self.texts().filter(|t| *t == text).count()
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPayload {
    Snippet(SanitizedText),
    Headlines(HeadlineSet),
}

/// Everything needed for one export. The payload variant decides the document kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSpec {
    pub payload: RenderPayload,
    pub title: String,
    pub timestamp_label: String,
    pub generated_at: DateTime<Local>,
}

impl RenderSpec {
    pub fn snippet(text: SanitizedText, generated_at: DateTime<Local>) -> Self {
        Self::new(RenderPayload::Snippet(text), generated_at)
    }

    pub fn headlines(headlines: HeadlineSet, generated_at: DateTime<Local>) -> Self {
        Self::new(RenderPayload::Headlines(headlines), generated_at)
    }

    fn new(payload: RenderPayload, generated_at: DateTime<Local>) -> Self {
        let kind = match &payload {
            RenderPayload::Snippet(_) => DocumentKind::Snippet,
            RenderPayload::Headlines(_) => DocumentKind::Headlines,
        };
        Self {
            payload,
            title: kind.title().to_string(),
            timestamp_label: format!(
                "Generated on: {}",
                generated_at.format("%d/%m/%Y, %H:%M:%S")
            ),
            generated_at,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self.payload {
            RenderPayload::Snippet(_) => DocumentKind::Snippet,
            RenderPayload::Headlines(_) => DocumentKind::Headlines,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub page_count: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    footer: String,
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_FOOTER)
    }
}

impl DocumentRenderer {
    pub fn new(footer: impl Into<String>) -> Self {
        Self {
            footer: footer.into(),
        }
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn layout(&self, spec: &RenderSpec) -> Vec<LaidOutPage> {
        layout_document(spec, &self.footer)
    }

    pub fn render(&self, spec: &RenderSpec) -> Result<RenderedDocument, RenderError> {
        let pages = self.layout(spec);
        let bytes = pdf::write_pdf(&spec.title, &pages)?;
        let filename = document_filename(spec.kind(), spec.generated_at);
        engine_info!(
            "Rendered {} pages ({} bytes) as {}",
            pages.len(),
            bytes.len(),
            filename
        );
        Ok(RenderedDocument {
            bytes,
            filename,
            page_count: pages.len(),
        })
    }
}
