use chrono::{DateTime, Local};
use desk_core::SnippetCategory;

const SNIPPET_SYSTEM: &str = "You are an expert financial analyst providing real-time market updates. \
Analyze and integrate all provided market updates into a cohesive narrative, explaining their impact \
on the market and individual stocks. Keep responses concise, factual, and focused on key market movements.";

const HEADLINE_SYSTEM: &str = "You are a financial news curator. Generate 5 recent headlines from the \
specified news source. Each headline should be concise and focus on business/market news.";

const SNIPPET_TEMPLATE: &str = "Format the response in a clean, structured way with the following sections:

📊 Market Overview
• Start with Nifty and Sensex status
• Include overall market sentiment
• Add key sector movements

📈 Key Movements
• List significant stock movements
• Include percentage changes
• Highlight volume trends

📰 Market Updates
• Add important market news
• Include corporate actions
• Mention any significant events

💡 Key Insights
• Provide actionable insights
• Highlight important levels
• Note any trading patterns

Use bullet points (•) and emojis for better readability. Keep each point concise and data-driven.";

/// Marker the model is asked to put in front of every headline.
pub const HEADLINE_MARKER: &str = "📍";

/// System and user message for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Builds prompt messages from the caller's current context. Holds no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build_snippet_prompt(
        &self,
        category: SnippetCategory,
        symbols: &[String],
        manual_notes: &[String],
        at: DateTime<Local>,
    ) -> PromptPair {
        let current_time = at.format("%-I:%M:%S %P");
        let mut user = format!(
            "Generate a concise market snippet for Indian stock market {category} update at {current_time}. "
        );
        if !symbols.is_empty() {
            user.push_str(&format!(
                "\nPrioritize analysis for these stocks: {}. ",
                symbols.join(", ")
            ));
        }
        if !manual_notes.is_empty() {
            let notes = manual_notes
                .iter()
                .map(|note| format!("- {note}"))
                .collect::<Vec<_>>()
                .join("\n");
            user.push_str(&format!(
                "\nImportant market updates to incorporate:\n{notes}\n\n\
                 Ensure these updates are properly categorized and integrated into the relevant \
                 sections below. Expand on their implications where appropriate.\n"
            ));
        }
        user.push_str("\n\n");
        user.push_str(SNIPPET_TEMPLATE);

        PromptPair {
            system: SNIPPET_SYSTEM.to_string(),
            user,
        }
    }

    pub fn build_headline_prompt(&self, source_name: &str) -> PromptPair {
        PromptPair {
            system: HEADLINE_SYSTEM.to_string(),
            user: format!(
                "Generate 5 recent business headlines from {source_name}. \
                 Format each headline with a {HEADLINE_MARKER} emoji at the start, one headline per line."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use desk_core::SnippetCategory;

    use super::PromptBuilder;

    fn at() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 12, 5, 9).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_context_omits_optional_clauses() {
        let prompt = PromptBuilder.build_snippet_prompt(SnippetCategory::Noon, &[], &[], at());
        assert!(!prompt.user.contains("Prioritize"));
        assert!(!prompt.user.contains("Important market updates"));
        assert!(prompt
            .user
            .starts_with("Generate a concise market snippet for Indian stock market noon update at 12:05:09 pm."));
    }

    #[test]
    fn symbols_are_joined_with_commas() {
        let prompt = PromptBuilder.build_snippet_prompt(
            SnippetCategory::Now,
            &strings(&["TCS", "INFY"]),
            &[],
            at(),
        );
        assert!(prompt
            .user
            .contains("Prioritize analysis for these stocks: TCS, INFY."));
    }

    #[test]
    fn manual_notes_are_listed_verbatim() {
        let prompt = PromptBuilder.build_snippet_prompt(
            SnippetCategory::Closing,
            &[],
            &strings(&["RBI holds repo rate steady", "Crude at $80"]),
            at(),
        );
        assert!(prompt.user.contains(
            "Important market updates to incorporate:\n- RBI holds repo rate steady\n- Crude at $80\n"
        ));
    }

    #[test]
    fn snippet_prompt_carries_section_template() {
        let prompt = PromptBuilder.build_snippet_prompt(SnippetCategory::PreMarket, &[], &[], at());
        for header in [
            "📊 Market Overview",
            "📈 Key Movements",
            "📰 Market Updates",
            "💡 Key Insights",
        ] {
            assert!(prompt.user.contains(header), "missing {header}");
        }
        assert!(prompt.user.contains("pre-market update"));
        assert!(prompt.system.contains("expert financial analyst"));
    }

    #[test]
    fn headline_prompt_names_source_and_marker() {
        let prompt = PromptBuilder.build_headline_prompt("Mint");
        assert!(prompt
            .user
            .starts_with("Generate 5 recent business headlines from Mint."));
        assert!(prompt.user.contains("📍"));
        assert!(prompt.system.contains("news curator"));
    }
}
