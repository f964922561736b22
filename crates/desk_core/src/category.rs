use std::fmt;
use std::str::FromStr;

/// Point in the trading day a market snippet is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetCategory {
    Now,
    PreMarket,
    Noon,
    Closing,
    PostMarket,
    Exception,
}

impl SnippetCategory {
    /// All categories in the order they are offered to the user.
    pub const ALL: [SnippetCategory; 6] = [
        SnippetCategory::Now,
        SnippetCategory::PreMarket,
        SnippetCategory::Noon,
        SnippetCategory::Closing,
        SnippetCategory::PostMarket,
        SnippetCategory::Exception,
    ];

    /// Kebab-case name, also used inside the prompt text.
    pub fn as_str(self) -> &'static str {
        match self {
            SnippetCategory::Now => "now",
            SnippetCategory::PreMarket => "pre-market",
            SnippetCategory::Noon => "noon",
            SnippetCategory::Closing => "closing",
            SnippetCategory::PostMarket => "post-market",
            SnippetCategory::Exception => "exception",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnippetCategory::Now => "Now Snippet",
            SnippetCategory::PreMarket => "Pre-Market Snippet (before 9:15am)",
            SnippetCategory::Noon => "Noon Snippet (12pm)",
            SnippetCategory::Closing => "Market Closing Snippet (3pm)",
            SnippetCategory::PostMarket => "Post-Market Snippet",
            SnippetCategory::Exception => "Exception Snippet",
        }
    }
}

impl fmt::Display for SnippetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown snippet category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for SnippetCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        SnippetCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::SnippetCategory;

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("noon".parse(), Ok(SnippetCategory::Noon));
        assert_eq!("Pre-Market".parse(), Ok(SnippetCategory::PreMarket));
        assert_eq!(" post-market ".parse(), Ok(SnippetCategory::PostMarket));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "midnight".parse::<SnippetCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown snippet category 'midnight'");
    }

    #[test]
    fn every_category_round_trips_through_its_name() {
        for category in SnippetCategory::ALL {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }
}
