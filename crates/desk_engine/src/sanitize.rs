use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Text shown when a snippet comes back empty.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "No snippet generated";

/// Generated text with diff-hunk markers removed and surrounding whitespace trimmed.
///
/// Only [`ResponseSanitizer`] creates values of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedText(String);

impl SanitizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn diff_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"@@[\s.]*@@").expect("diff marker pattern"))
}

fn encoding_artifact() -> &'static Regex {
    // Debris left behind when emoji pass through a Latin-1 round trip, e.g. "Ø=ÜĒ".
    static ARTIFACT: OnceLock<Regex> = OnceLock::new();
    ARTIFACT.get_or_init(|| Regex::new(r"[ØÜĒ]=?").expect("artifact pattern"))
}

/// Removes every diff-hunk marker (`@@`, whitespace or dots, `@@`).
///
/// Removal repeats until no marker is left, since cutting one out can join
/// the halves of another.
pub fn strip_diff_markers(raw: &str) -> String {
    let marker = diff_marker();
    let mut text = raw.to_string();
    while marker.is_match(&text) {
        text = marker.replace_all(&text, "").into_owned();
    }
    text
}

/// Restricts text to printable ASCII plus newline, dropping known mis-encoded symbols.
pub fn clean_for_document(text: &str) -> String {
    let without_artifacts = encoding_artifact().replace_all(text, "");
    without_artifacts
        .chars()
        .filter(|c| *c == '\n' || (' '..='~').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Post-processes raw model output before it is displayed or exported.
#[derive(Debug, Clone)]
pub struct ResponseSanitizer {
    placeholder: String,
}

impl Default for ResponseSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_EMPTY_PLACEHOLDER)
    }
}

impl ResponseSanitizer {
    /// `placeholder` is cleaned the same way as model output so sanitizing stays idempotent.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = strip_diff_markers(&placeholder.into()).trim().to_string();
        let placeholder = if placeholder.is_empty() {
            DEFAULT_EMPTY_PLACEHOLDER.to_string()
        } else {
            placeholder
        };
        Self { placeholder }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn sanitize(&self, raw: &str) -> SanitizedText {
        let cleaned = strip_diff_markers(raw).trim().to_string();
        if cleaned.is_empty() {
            SanitizedText(self.placeholder.clone())
        } else {
            SanitizedText(cleaned)
        }
    }

    /// Like [`sanitize`](Self::sanitize) but treats a missing reply as empty.
    pub fn sanitize_snippet(&self, raw: Option<&str>) -> SanitizedText {
        self.sanitize(raw.unwrap_or_default())
    }

    /// Splits a headline reply into one entry per non-blank line.
    pub fn sanitize_headlines(&self, raw: &str) -> Vec<String> {
        strip_diff_markers(raw)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}
