//! Market desk core: pure state machine and view-model helpers.
mod category;
mod effect;
mod headlines;
mod msg;
mod request;
mod sources;
mod state;
mod theme;
mod update;
mod view_model;

pub use category::{SnippetCategory, UnknownCategory};
pub use effect::Effect;
pub use headlines::HeadlineSet;
pub use msg::Msg;
pub use request::{RequestKind, RequestState};
pub use sources::{default_sources, NewsSource};
pub use state::{AppState, DEFAULT_ERROR_MESSAGE};
pub use theme::{Theme, UnknownTheme};
pub use update::update;
pub use view_model::{AppViewModel, SourceRowView};
