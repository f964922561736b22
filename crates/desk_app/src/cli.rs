use std::path::PathBuf;

use clap::{Parser, Subcommand};
use desk_core::SnippetCategory;

#[derive(Parser, Debug)]
#[command(
    name = "market_desk",
    about = "AI-written Indian market snippets and news headlines, with PDF export",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to ./market_desk.log
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Directory exported PDFs are written to
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a market snippet (now, pre-market, noon, closing, post-market, exception)
    Snippet {
        category: SnippetCategory,

        /// Stock symbol to prioritize; repeatable
        #[arg(short = 's', long = "symbol")]
        symbols: Vec<String>,

        /// Market update to work into the snippet; repeatable
        #[arg(short = 'n', long = "note")]
        notes: Vec<String>,

        /// Export the snippet to PDF
        #[arg(long)]
        pdf: bool,
    },
    /// Generate five headlines per enabled news source
    Headlines {
        /// Extra news source; repeatable
        #[arg(long = "source")]
        sources: Vec<String>,

        /// Source to skip this run; repeatable
        #[arg(long = "disable")]
        disabled: Vec<String>,

        /// Export the headlines to PDF
        #[arg(long)]
        pdf: bool,
    },
    /// Show or cycle the display theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    /// light -> dark -> day -> light
    Toggle,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use desk_core::SnippetCategory;

    use super::{Cli, Command, ThemeAction};

    #[test]
    fn parses_snippet_with_symbols_and_notes() {
        let cli = Cli::try_parse_from([
            "market_desk",
            "snippet",
            "noon",
            "-s",
            "TCS",
            "--symbol",
            "INFY",
            "--note",
            "RBI holds repo rate steady",
            "--pdf",
        ])
        .unwrap();
        match cli.command {
            Command::Snippet {
                category,
                symbols,
                notes,
                pdf,
            } => {
                assert_eq!(category, SnippetCategory::Noon);
                assert_eq!(symbols, vec!["TCS", "INFY"]);
                assert_eq!(notes, vec!["RBI holds repo rate steady"]);
                assert!(pdf);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Cli::try_parse_from(["market_desk", "snippet", "midnight"]).is_err());
    }

    #[test]
    fn parses_theme_toggle_with_global_flags() {
        let cli = Cli::try_parse_from(["market_desk", "theme", "toggle", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Theme {
                action: ThemeAction::Toggle
            }
        ));
    }
}
