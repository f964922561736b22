use crate::{AppState, Effect, HeadlineSet, Msg, RequestKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SymbolAdded(symbol) => {
            mark_if(&mut state, |s| s.add_symbol(&symbol));
            Vec::new()
        }
        Msg::SymbolRemoved(symbol) => {
            mark_if(&mut state, |s| s.remove_symbol(&symbol));
            Vec::new()
        }
        Msg::NoteAdded(note) => {
            mark_if(&mut state, |s| s.add_note(&note));
            Vec::new()
        }
        Msg::NoteRemoved(note) => {
            mark_if(&mut state, |s| s.remove_note(&note));
            Vec::new()
        }
        Msg::SourceAdded(name) => {
            mark_if(&mut state, |s| s.add_source(&name));
            Vec::new()
        }
        Msg::SourceRemoved(name) => {
            mark_if(&mut state, |s| s.remove_source(&name));
            Vec::new()
        }
        Msg::SourceToggled(name) => {
            mark_if(&mut state, |s| s.toggle_source(&name));
            Vec::new()
        }
        Msg::ThemeRestored(theme) => {
            state.set_theme(theme);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let next = state.theme().next();
            state.set_theme(next);
            state.mark_dirty();
            vec![Effect::PersistTheme(next)]
        }
        Msg::GenerateSnippetClicked(category) => {
            if state.request().is_in_flight() {
                return (state, Vec::new());
            }
            state.begin_request(RequestKind::Snippet(category));
            state.mark_dirty();
            vec![Effect::GenerateSnippet {
                category,
                symbols: state.symbols().to_vec(),
                notes: state.notes().to_vec(),
            }]
        }
        Msg::SnippetGenerated(text) => {
            if !matches!(
                state.request().in_flight_kind(),
                Some(RequestKind::Snippet(_))
            ) {
                return (state, Vec::new());
            }
            state.set_snippet(text);
            state.finish_request(None);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SnippetFailed(reason) => {
            if !matches!(
                state.request().in_flight_kind(),
                Some(RequestKind::Snippet(_))
            ) {
                return (state, Vec::new());
            }
            state.show_snippet_error();
            state.finish_request(Some(reason));
            state.mark_dirty();
            Vec::new()
        }
        Msg::FetchHeadlinesClicked => {
            if state.request().is_in_flight() {
                return (state, Vec::new());
            }
            let sources = state.enabled_sources();
            state.mark_dirty();
            if sources.is_empty() {
                state.set_headlines(HeadlineSet::new());
                state.finish_request(None);
                return (state, Vec::new());
            }
            state.begin_request(RequestKind::Headlines);
            vec![Effect::FetchHeadlines { sources }]
        }
        Msg::HeadlinesFetched { headlines, error } => {
            if state.request().in_flight_kind() != Some(RequestKind::Headlines) {
                return (state, Vec::new());
            }
            // A failed run with nothing collected keeps the previous headlines on screen.
            if error.is_none() || !headlines.is_empty() {
                state.set_headlines(headlines);
            }
            state.finish_request(error);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ExportSnippetClicked => {
            if state.request().is_in_flight() {
                return (state, Vec::new());
            }
            match state.snippet() {
                Some(text) => vec![Effect::ExportSnippet {
                    text: text.to_string(),
                }],
                None => Vec::new(),
            }
        }
        Msg::ExportHeadlinesClicked => {
            if state.request().is_in_flight() || state.headlines().is_empty() {
                return (state, Vec::new());
            }
            vec![Effect::ExportHeadlines {
                headlines: state.headlines().clone(),
            }]
        }
        Msg::ExportFinished(outcome) => {
            state.set_last_export(outcome);
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn mark_if(state: &mut AppState, change: impl FnOnce(&mut AppState) -> bool) {
    if change(state) {
        state.mark_dirty();
    }
}
