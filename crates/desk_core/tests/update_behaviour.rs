use std::sync::Once;

use desk_core::{update, AppState, Effect, Msg, SourceRowView, Theme};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
    msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
}

#[test]
fn symbols_are_trimmed_and_deduplicated() {
    init_logging();
    let state = apply(
        AppState::new(),
        vec![
            Msg::SymbolAdded(" TCS ".to_string()),
            Msg::SymbolAdded("INFY".to_string()),
            Msg::SymbolAdded("TCS".to_string()),
            Msg::SymbolAdded("   ".to_string()),
        ],
    );
    assert_eq!(state.view().symbols, vec!["TCS", "INFY"]);

    let state = apply(state, vec![Msg::SymbolRemoved("TCS".to_string())]);
    assert_eq!(state.view().symbols, vec!["INFY"]);
}

#[test]
fn notes_ignore_blank_input() {
    init_logging();
    let mut state = apply(
        AppState::new(),
        vec![
            Msg::NoteAdded("  RBI holds repo rate steady ".to_string()),
            Msg::NoteAdded("\t".to_string()),
        ],
    );
    assert_eq!(state.view().notes, vec!["RBI holds repo rate steady"]);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::NoteRemoved("not there".to_string()));
    assert!(!state.consume_dirty());
    let (state, _) = update(state, Msg::NoteRemoved("RBI holds repo rate steady".to_string()));
    assert!(state.view().notes.is_empty());
}

#[test]
fn default_sources_are_enabled_and_not_removable() {
    init_logging();
    let state = apply(
        AppState::new(),
        vec![Msg::SourceRemoved("Mint".to_string())],
    );
    let names: Vec<_> = state.view().sources.into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["Business Standard", "Economic Times", "Mint"]);
}

#[test]
fn custom_sources_are_deduplicated_case_insensitively() {
    init_logging();
    let state = apply(
        AppState::new(),
        vec![
            Msg::SourceAdded("Reuters".to_string()),
            Msg::SourceAdded("mint".to_string()),
            Msg::SourceAdded("REUTERS".to_string()),
            Msg::SourceToggled("Economic Times".to_string()),
        ],
    );
    let sources = state.view().sources;
    assert_eq!(sources.len(), 4);
    assert_eq!(
        sources[3],
        SourceRowView {
            name: "Reuters".to_string(),
            enabled: true,
            removable: true,
        }
    );
    assert!(!sources[1].enabled);

    let state = apply(state, vec![Msg::SourceRemoved("Reuters".to_string())]);
    assert_eq!(state.view().sources.len(), 3);
}

#[test]
fn theme_toggle_cycles_and_persists() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ThemeRestored(Theme::Dark));
    assert!(effects.is_empty());
    assert_eq!(state.theme(), Theme::Dark);

    let (state, effects) = update(state, Msg::ThemeToggled);
    assert_eq!(state.theme(), Theme::Day);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Day)]);

    let (state, effects) = update(state, Msg::ThemeToggled);
    assert_eq!(state.theme(), Theme::Light);
    assert_eq!(effects, vec![Effect::PersistTheme(Theme::Light)]);
}
