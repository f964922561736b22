use std::fmt::Write;

use desk_core::{AppViewModel, RequestState};

/// Terminal rendering of the snippet panel.
pub fn render_snippet(view: &AppViewModel) -> String {
    let mut out = String::new();
    if let RequestState::Error(reason) = &view.request {
        let _ = writeln!(out, "! {reason}");
    }
    match &view.snippet {
        Some(text) => {
            let _ = writeln!(out, "{text}");
        }
        None => {
            let _ = writeln!(out, "(no snippet)");
        }
    }
    out
}

/// Terminal rendering of the headline panel, one block per source.
pub fn render_headlines(view: &AppViewModel) -> String {
    let mut out = String::new();
    if let RequestState::Error(reason) = &view.request {
        let _ = writeln!(out, "! Headline run stopped early: {reason}");
    }
    if view.headlines.is_empty() {
        let _ = writeln!(out, "(no headlines)");
        return out;
    }
    for (source, headlines) in view.headlines.iter() {
        let _ = writeln!(out, "== {source} ==");
        for headline in headlines {
            let _ = writeln!(out, "  {headline}");
        }
    }
    out
}

pub fn render_export(view: &AppViewModel) -> Option<String> {
    view.last_export.as_ref().map(|outcome| match outcome {
        Ok(path) => format!("Saved {path}"),
        Err(reason) => format!("Export failed: {reason}"),
    })
}
