use chrono::{DateTime, TimeZone, Utc};

use crate::DocumentKind;

/// `{kind}-{YYYY-MM-DD}.pdf`, dated in UTC like an ISO-8601 timestamp's date part.
pub fn document_filename<Tz: TimeZone>(kind: DocumentKind, generated_at: DateTime<Tz>) -> String {
    let date = generated_at.with_timezone(&Utc).format("%Y-%m-%d");
    format!("{}-{date}.pdf", kind.file_stem())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone, Utc};

    use super::document_filename;
    use crate::DocumentKind;

    #[test]
    fn names_follow_kind_and_date() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap();
        assert_eq!(
            document_filename(DocumentKind::Snippet, at),
            "market-snippet-2026-10-19.pdf"
        );
        assert_eq!(
            document_filename(DocumentKind::Headlines, at),
            "news-headlines-2026-10-19.pdf"
        );
    }

    #[test]
    fn date_is_taken_in_utc() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let early_morning = ist.with_ymd_and_hms(2026, 10, 20, 2, 0, 0).unwrap();
        assert_eq!(
            document_filename(DocumentKind::Snippet, early_morning),
            "market-snippet-2026-10-19.pdf"
        );
    }
}
