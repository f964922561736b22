use crate::SnippetCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Snippet(SnippetCategory),
    Headlines,
}

/// Lifecycle of the single generation action the desk allows at a time.
///
/// Triggers are honoured only outside `InFlight`, so two concurrent
/// generation calls cannot be started from the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(RequestKind),
    Error(String),
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight(_))
    }

    pub fn in_flight_kind(&self) -> Option<RequestKind> {
        match self {
            RequestState::InFlight(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(reason) => Some(reason),
            _ => None,
        }
    }
}
