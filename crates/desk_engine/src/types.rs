use std::fmt;

use chrono::{DateTime, Local};
use desk_core::{HeadlineSet, SnippetCategory};

use crate::SanitizedText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestCategory {
    Snippet(SnippetCategory),
    Headlines,
}

/// One generation action, built fresh from the caller's context.
///
/// For snippets `context_lines` holds the manual notes; for headline runs it
/// holds the source names in the order they must be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub category: RequestCategory,
    pub context_lines: Vec<String>,
    pub symbols: Vec<String>,
    pub timestamp: DateTime<Local>,
}

impl GenerationRequest {
    pub fn snippet(
        category: SnippetCategory,
        symbols: Vec<String>,
        notes: Vec<String>,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            category: RequestCategory::Snippet(category),
            context_lines: notes,
            symbols,
            timestamp,
        }
    }

    pub fn headlines(sources: Vec<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            category: RequestCategory::Headlines,
            context_lines: sources,
            symbols: Vec::new(),
            timestamp,
        }
    }
}

/// Outcome of a single text-generation call.
pub type GenerationResult = Result<String, UpstreamError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SnippetReady {
        category: SnippetCategory,
        text: SanitizedText,
    },
    SnippetFailed {
        category: SnippetCategory,
        error: UpstreamError,
    },
    /// One source of a headline run completed.
    HeadlinesProgress { source: String, headlines: Vec<String> },
    /// The headline run ended; `error` is set when a source failed and the run stopped.
    HeadlinesFinished {
        headlines: HeadlineSet,
        error: Option<UpstreamError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    #[error("generation request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("generation request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("generation returned no content")]
    EmptyContent,
    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

impl UpstreamError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return UpstreamError::Timeout;
        }
        UpstreamError::Network(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Snippet,
    Headlines,
}

impl DocumentKind {
    pub fn title(self) -> &'static str {
        match self {
            DocumentKind::Snippet => "Market Snippet",
            DocumentKind::Headlines => "News Headlines",
        }
    }

    pub fn file_stem(self) -> &'static str {
        match self {
            DocumentKind::Snippet => "market-snippet",
            DocumentKind::Headlines => "news-headlines",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}
