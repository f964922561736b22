use desk_core::HeadlineSet;
use engine_logging::engine_debug;

use super::metrics::text_width_mm;
use super::{FontFace, LaidOutPage, RenderPayload, RenderSpec, TextRun};
use crate::sanitize::clean_for_document;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;
pub const LINE_HEIGHT_MM: f32 = 7.0;
pub const BULLET_INDENT_MM: f32 = 5.0;
pub const BULLET: &str = "•";

pub const TITLE_SIZE_PT: f32 = 20.0;
pub const META_SIZE_PT: f32 = 10.0;
pub const BODY_SIZE_PT: f32 = 12.0;
pub const FOOTER_SIZE_PT: f32 = 10.0;

const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
/// Lines starting below this offset go to the next page.
const BREAK_AFTER_MM: f32 = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM;

#[derive(Debug, Clone, Copy, PartialEq)]
enum LayoutState {
    /// Writing at the given offset from the top edge.
    Positioning(f32),
    PageFull,
    Done,
}

struct PageLayout<'a> {
    footer: &'a str,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    state: LayoutState,
}

impl<'a> PageLayout<'a> {
    fn new(footer: &'a str) -> Self {
        Self {
            footer,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            state: LayoutState::Positioning(MARGIN_MM),
        }
    }

    fn y(&self) -> f32 {
        match self.state {
            LayoutState::Positioning(y) => y,
            LayoutState::PageFull | LayoutState::Done => MARGIN_MM,
        }
    }

    fn advance(&mut self, dy: f32) {
        if let LayoutState::Positioning(y) = self.state {
            self.state = LayoutState::Positioning(y + dy);
        }
    }

    fn check_page_break(&mut self) {
        if self.y() > BREAK_AFTER_MM {
            self.state = LayoutState::PageFull;
            self.start_new_page();
        }
    }

    fn start_new_page(&mut self) {
        debug_assert_eq!(self.state, LayoutState::PageFull);
        self.write_footer();
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.state = LayoutState::Positioning(MARGIN_MM);
    }

    fn write(&mut self, text: impl Into<String>, x_mm: f32, face: FontFace, size_pt: f32) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        let y_mm = self.y();
        self.current.runs.push(TextRun {
            text,
            x_mm,
            y_mm,
            face,
            size_pt,
        });
    }

    fn write_footer(&mut self) {
        let width = text_width_mm(self.footer, FontFace::Regular, FOOTER_SIZE_PT);
        self.current.runs.push(TextRun {
            text: self.footer.to_string(),
            x_mm: (PAGE_WIDTH_MM - width) / 2.0,
            y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
            face: FontFace::Regular,
            size_pt: FOOTER_SIZE_PT,
        });
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        self.write_footer();
        let last = std::mem::take(&mut self.current);
        self.pages.push(last);
        self.state = LayoutState::Done;
        self.pages
    }
}

/// Lays out a document onto A4 pages. Every page carries the footer exactly once.
pub fn layout_document(spec: &RenderSpec, footer: &str) -> Vec<LaidOutPage> {
    let mut layout = PageLayout::new(footer);

    layout.write(spec.title.as_str(), MARGIN_MM, FontFace::Bold, TITLE_SIZE_PT);
    layout.advance(LINE_HEIGHT_MM * 2.0);
    layout.write(
        clean_for_document(&spec.timestamp_label),
        MARGIN_MM,
        FontFace::Regular,
        META_SIZE_PT,
    );
    layout.advance(LINE_HEIGHT_MM * 2.0);

    match &spec.payload {
        RenderPayload::Snippet(text) => layout_snippet(&mut layout, text.as_str()),
        RenderPayload::Headlines(set) => layout_headlines(&mut layout, set),
    }

    layout.finish()
}

fn layout_snippet(layout: &mut PageLayout<'_>, text: &str) {
    for section in text.split("\n\n") {
        let trimmed = section.trim();
        if trimmed.is_empty() || trimmed.starts_with("@@") {
            continue;
        }
        let cleaned = clean_for_document(section);
        if cleaned.is_empty() {
            continue;
        }
        for line in wrap_text(&cleaned, CONTENT_WIDTH_MM, FontFace::Regular, BODY_SIZE_PT) {
            layout.check_page_break();
            layout.write(line, MARGIN_MM, FontFace::Regular, BODY_SIZE_PT);
            layout.advance(LINE_HEIGHT_MM);
        }
        layout.advance(LINE_HEIGHT_MM);
    }
}

fn layout_headlines(layout: &mut PageLayout<'_>, set: &HeadlineSet) {
    let width = CONTENT_WIDTH_MM - BULLET_INDENT_MM;
    for (source, headlines) in set.iter() {
        layout.check_page_break();
        layout.write(
            clean_for_document(source),
            MARGIN_MM,
            FontFace::Bold,
            BODY_SIZE_PT,
        );
        layout.advance(LINE_HEIGHT_MM * 1.5);

        for headline in headlines {
            let cleaned = clean_for_document(headline);
            if cleaned.is_empty() {
                continue;
            }
            for line in wrap_text(&cleaned, width, FontFace::Regular, BODY_SIZE_PT) {
                layout.check_page_break();
                layout.write(BULLET, MARGIN_MM, FontFace::Regular, BODY_SIZE_PT);
                layout.write(
                    line,
                    MARGIN_MM + BULLET_INDENT_MM,
                    FontFace::Regular,
                    BODY_SIZE_PT,
                );
                layout.advance(LINE_HEIGHT_MM);
            }
        }
        layout.advance(LINE_HEIGHT_MM);
    }
}

/// Greedy word wrap. Hard line breaks are kept; a single word wider than
/// `max_width_mm` is cut at the width instead of overflowing the page.
pub fn wrap_text(text: &str, max_width_mm: f32, face: FontFace, size_pt: f32) -> Vec<String> {
    let fits = |candidate: &str| text_width_mm(candidate, face, size_pt) <= max_width_mm;
    let mut lines = Vec::new();

    for hard_line in text.split('\n') {
        let mut current = String::new();
        for word in hard_line.split(' ').filter(|word| !word.is_empty()) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = if fits(word) {
                word.to_string()
            } else {
                engine_debug!("Truncating unbreakable token of {} chars", word.chars().count());
                truncate_to_width(word, max_width_mm, face, size_pt)
            };
        }
        lines.push(current);
    }

    lines
}

fn truncate_to_width(word: &str, max_width_mm: f32, face: FontFace, size_pt: f32) -> String {
    let mut kept = String::new();
    for c in word.chars() {
        kept.push(c);
        if text_width_mm(&kept, face, size_pt) > max_width_mm {
            kept.pop();
            break;
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::{text_width_mm, wrap_text, FontFace, BODY_SIZE_PT, CONTENT_WIDTH_MM};

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Nifty closes higher", CONTENT_WIDTH_MM, FontFace::Regular, 12.0);
        assert_eq!(lines, vec!["Nifty closes higher"]);
    }

    #[test]
    fn hard_breaks_are_kept() {
        let lines = wrap_text("a\n\nb", CONTENT_WIDTH_MM, FontFace::Regular, 12.0);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn long_text_wraps_within_width() {
        let text = "Banking stocks led the rally as private lenders gained on strong quarterly \
                    numbers while metal stocks slipped on weak global cues and profit booking";
        let lines = wrap_text(text, CONTENT_WIDTH_MM, FontFace::Regular, BODY_SIZE_PT);
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(text_width_mm(line, FontFace::Regular, BODY_SIZE_PT) <= CONTENT_WIDTH_MM);
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn unbreakable_token_is_truncated() {
        let token = "W".repeat(200);
        let lines = wrap_text(&token, 50.0, FontFace::Regular, 12.0);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].len() < 200);
        assert!(text_width_mm(&lines[0], FontFace::Regular, 12.0) <= 50.0);
    }
}
