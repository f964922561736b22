use crate::{HeadlineSet, SnippetCategory, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User added a stock symbol to the watch list.
    SymbolAdded(String),
    /// User removed a stock symbol from the watch list.
    SymbolRemoved(String),
    /// User added a manual market update.
    NoteAdded(String),
    /// User removed a manual market update.
    NoteRemoved(String),
    /// User added a custom news source.
    SourceAdded(String),
    /// User removed a custom news source.
    SourceRemoved(String),
    /// User enabled or disabled a news source.
    SourceToggled(String),
    /// Stored theme preference loaded at startup.
    ThemeRestored(Theme),
    /// User clicked the theme switcher.
    ThemeToggled,
    /// User asked for a market snippet.
    GenerateSnippetClicked(SnippetCategory),
    /// Engine produced sanitized snippet text.
    SnippetGenerated(String),
    /// Engine failed to produce a snippet.
    SnippetFailed(String),
    /// User asked for headlines from every enabled source.
    FetchHeadlinesClicked,
    /// Engine finished the headline run; `error` is set when it stopped early.
    HeadlinesFetched {
        headlines: HeadlineSet,
        error: Option<String>,
    },
    /// User asked for a PDF of the current snippet.
    ExportSnippetClicked,
    /// User asked for a PDF of the current headlines.
    ExportHeadlinesClicked,
    /// A document export finished with the written path or a failure reason.
    ExportFinished(Result<String, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
