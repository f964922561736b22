use crate::view_model::{AppViewModel, SourceRowView};
use crate::{default_sources, HeadlineSet, NewsSource, RequestKind, RequestState, Theme};

/// Text shown in place of a snippet when generation fails.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error generating snippet. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    symbols: Vec<String>,
    notes: Vec<String>,
    sources: Vec<NewsSource>,
    request: RequestState,
    snippet: Option<String>,
    headlines: HeadlineSet,
    theme: Theme,
    error_message: String,
    last_export: Option<Result<String, String>>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            symbols: Vec::new(),
            notes: Vec::new(),
            sources: default_sources(),
            request: RequestState::Idle,
            snippet: None,
            headlines: HeadlineSet::new(),
            theme: Theme::default(),
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            last_export: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `error_message` as the snippet text after a failed generation.
    pub fn with_error_message(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.request.is_in_flight();
        AppViewModel {
            symbols: self.symbols.clone(),
            notes: self.notes.clone(),
            sources: self
                .sources
                .iter()
                .map(|source| SourceRowView {
                    name: source.name.clone(),
                    enabled: source.enabled,
                    removable: !source.is_default,
                })
                .collect(),
            request: self.request.clone(),
            snippet: self.snippet.clone(),
            headlines: self.headlines.clone(),
            theme: self.theme,
            can_generate: !busy,
            can_export_snippet: !busy && self.snippet.is_some(),
            can_export_headlines: !busy && !self.headlines.is_empty(),
            last_export: self.last_export.clone(),
            dirty: self.dirty,
        }
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    pub fn headlines(&self) -> &HeadlineSet {
        &self.headlines
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub(crate) fn notes(&self) -> &[String] {
        &self.notes
    }

    pub(crate) fn enabled_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .filter(|source| source.enabled)
            .map(|source| source.name.clone())
            .collect()
    }

    pub(crate) fn add_symbol(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim();
        if symbol.is_empty() || self.symbols.iter().any(|s| s == symbol) {
            return false;
        }
        self.symbols.push(symbol.to_string());
        true
    }

    pub(crate) fn remove_symbol(&mut self, symbol: &str) -> bool {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        self.symbols.len() != before
    }

    pub(crate) fn add_note(&mut self, note: &str) -> bool {
        let note = note.trim();
        if note.is_empty() {
            return false;
        }
        self.notes.push(note.to_string());
        true
    }

    pub(crate) fn remove_note(&mut self, note: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n != note);
        self.notes.len() != before
    }

    pub(crate) fn add_source(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty()
            || self
                .sources
                .iter()
                .any(|source| source.name.eq_ignore_ascii_case(name))
        {
            return false;
        }
        self.sources.push(NewsSource::custom(name));
        true
    }

    pub(crate) fn remove_source(&mut self, name: &str) -> bool {
        let Some(index) = self
            .sources
            .iter()
            .position(|source| source.name == name && !source.is_default)
        else {
            return false;
        };
        self.sources.remove(index);
        self.headlines.remove(name);
        true
    }

    pub(crate) fn toggle_source(&mut self, name: &str) -> bool {
        match self.sources.iter_mut().find(|source| source.name == name) {
            Some(source) => {
                source.enabled = !source.enabled;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub(crate) fn begin_request(&mut self, kind: RequestKind) {
        self.request = RequestState::InFlight(kind);
    }

    pub(crate) fn finish_request(&mut self, error: Option<String>) {
        self.request = match error {
            Some(reason) => RequestState::Error(reason),
            None => RequestState::Idle,
        };
    }

    pub(crate) fn set_snippet(&mut self, text: String) {
        self.snippet = Some(text);
    }

    pub(crate) fn show_snippet_error(&mut self) {
        self.snippet = Some(self.error_message.clone());
    }

    pub(crate) fn set_headlines(&mut self, headlines: HeadlineSet) {
        self.headlines = headlines;
    }

    pub(crate) fn set_last_export(&mut self, outcome: Result<String, String>) {
        self.last_export = Some(outcome);
    }
}
