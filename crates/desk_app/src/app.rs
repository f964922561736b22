use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::{Local, Timelike};
use desk_core::{update, AppState, Msg};
use desk_engine::DeskConfig;
use engine_logging::{engine_debug, engine_warn, LogDestination};
use log::LevelFilter;

use crate::cli::{Cli, Command, ThemeAction};
use crate::effects::EffectRunner;
use crate::persistence::ThemeStore;
use crate::render;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    engine_logging::initialize(destination, level);

    // A missing API key stops the program before anything is generated.
    let mut config = DeskConfig::from_env().context("Invalid startup configuration")?;
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let themes = ThemeStore::default_location();
    let initial_theme = themes.load_or_initial(Local::now().hour());
    let runner = EffectRunner::new(&config, themes)?;
    let mut desk = Desk::new(AppState::with_error_message(&config.error_message), runner);
    desk.dispatch(Msg::ThemeRestored(initial_theme));

    // Each generation call may take the full request timeout; allow one per source plus slack.
    let per_call = config.client.request_timeout + Duration::from_secs(5);

    match cli.command {
        Command::Snippet {
            category,
            symbols,
            notes,
            pdf,
        } => {
            for symbol in symbols {
                desk.dispatch(Msg::SymbolAdded(symbol));
            }
            for note in notes {
                desk.dispatch(Msg::NoteAdded(note));
            }
            desk.dispatch(Msg::GenerateSnippetClicked(category));
            desk.wait_until_idle(per_call);
            print!("{}", render::render_snippet(&desk.state.view()));
            if pdf {
                desk.dispatch(Msg::ExportSnippetClicked);
                report_export(&desk);
            }
        }
        Command::Headlines {
            sources,
            disabled,
            pdf,
        } => {
            for source in sources {
                desk.dispatch(Msg::SourceAdded(source));
            }
            for source in disabled {
                desk.dispatch(Msg::SourceToggled(source));
            }
            let enabled = desk
                .state
                .view()
                .sources
                .iter()
                .filter(|row| row.enabled)
                .count() as u32;
            desk.dispatch(Msg::FetchHeadlinesClicked);
            desk.wait_until_idle(per_call * enabled.max(1));
            print!("{}", render::render_headlines(&desk.state.view()));
            if pdf {
                desk.dispatch(Msg::ExportHeadlinesClicked);
                report_export(&desk);
            }
        }
        Command::Theme { action } => {
            if action == ThemeAction::Toggle {
                desk.dispatch(Msg::ThemeToggled);
            }
            println!("{}", desk.state.theme());
        }
    }

    Ok(())
}

fn report_export(desk: &Desk) {
    match render::render_export(&desk.state.view()) {
        Some(line) => println!("{line}"),
        None => println!("Nothing to export"),
    }
}

/// Owns the application state and feeds every message through `update`.
struct Desk {
    state: AppState,
    runner: EffectRunner,
}

impl Desk {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = vec![msg];
        while let Some(msg) = inbox.pop() {
            engine_debug!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            self.state.consume_dirty();
            let mut follow_ups = self.runner.enqueue(effects);
            follow_ups.reverse();
            inbox.extend(follow_ups);
        }
    }

    fn wait_until_idle(&mut self, budget: Duration) {
        let deadline = Instant::now() + budget;
        while self.state.request().is_in_flight() {
            if Instant::now() >= deadline {
                engine_warn!("Gave up waiting for the engine after {:?}", budget);
                return;
            }
            if let Some(msg) = self.runner.next_msg(POLL_INTERVAL) {
                self.dispatch(msg);
            }
        }
    }
}
