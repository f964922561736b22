use crate::{HeadlineSet, RequestState, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub symbols: Vec<String>,
    pub notes: Vec<String>,
    pub sources: Vec<SourceRowView>,
    pub request: RequestState,
    pub snippet: Option<String>,
    pub headlines: HeadlineSet,
    pub theme: Theme,
    pub can_generate: bool,
    pub can_export_snippet: bool,
    pub can_export_headlines: bool,
    pub last_export: Option<Result<String, String>>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRowView {
    pub name: String,
    pub enabled: bool,
    pub removable: bool,
}
