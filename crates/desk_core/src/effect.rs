use crate::{HeadlineSet, SnippetCategory, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    GenerateSnippet {
        category: SnippetCategory,
        symbols: Vec<String>,
        notes: Vec<String>,
    },
    /// Sources are listed in declaration order and must be fetched one after another.
    FetchHeadlines { sources: Vec<String> },
    ExportSnippet { text: String },
    ExportHeadlines { headlines: HeadlineSet },
    PersistTheme(Theme),
}
