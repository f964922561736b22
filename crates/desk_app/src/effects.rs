use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use desk_core::{Effect, Msg};
use desk_engine::{
    AtomicFileWriter, DeskConfig, DocumentRenderer, EngineEvent, EngineHandle,
    GenerationPipeline, GenerationRequest, OpenAiClient, RenderSpec, ResponseSanitizer,
};
use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};

use crate::persistence::ThemeStore;

/// Carries core effects out: generation goes to the engine thread, exports and
/// theme writes happen inline and report back as follow-up messages.
pub struct EffectRunner {
    engine: EngineHandle,
    renderer: DocumentRenderer,
    sanitizer: ResponseSanitizer,
    exports: AtomicFileWriter,
    themes: ThemeStore,
}

impl EffectRunner {
    pub fn new(config: &DeskConfig, themes: ThemeStore) -> anyhow::Result<Self> {
        let client = OpenAiClient::new(&config.api_base, config.api_key.clone(), &config.client)?;
        let sanitizer = ResponseSanitizer::new(config.empty_placeholder.clone());
        let pipeline =
            GenerationPipeline::new(Arc::new(client), sanitizer.clone(), config.model.clone());
        engine_info!("Using model {} via {}", config.model, config.api_base);

        Ok(Self {
            engine: EngineHandle::new(pipeline),
            renderer: DocumentRenderer::default(),
            sanitizer,
            exports: AtomicFileWriter::new(config.output_dir.clone()),
            themes,
        })
    }

    /// Runs each effect; returns messages that must be dispatched immediately.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::GenerateSnippet {
                    category,
                    symbols,
                    notes,
                } => {
                    engine_info!(
                        "GenerateSnippet category={} symbols={} notes={}",
                        category,
                        symbols.len(),
                        notes.len()
                    );
                    self.engine.submit(GenerationRequest::snippet(
                        category,
                        symbols,
                        notes,
                        Local::now(),
                    ));
                }
                Effect::FetchHeadlines { sources } => {
                    engine_info!("FetchHeadlines sources={:?}", sources);
                    self.engine
                        .submit(GenerationRequest::headlines(sources, Local::now()));
                }
                Effect::ExportSnippet { text } => {
                    let spec = RenderSpec::snippet(self.sanitizer.sanitize(&text), Local::now());
                    follow_ups.push(Msg::ExportFinished(self.export(&spec)));
                }
                Effect::ExportHeadlines { headlines } => {
                    let spec = RenderSpec::headlines(headlines, Local::now());
                    follow_ups.push(Msg::ExportFinished(self.export(&spec)));
                }
                Effect::PersistTheme(theme) => {
                    engine_debug!("PersistTheme {}", theme.as_str());
                    self.themes.save(theme);
                }
            }
        }
        follow_ups
    }

    /// Waits up to `timeout` for the next engine event that the core cares about.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).and_then(map_event)
    }

    fn export(&self, spec: &RenderSpec) -> Result<String, String> {
        let document = self.renderer.render(spec).map_err(|err| {
            engine_error!("Rendering {} failed: {}", spec.kind(), err);
            err.to_string()
        })?;
        let path = self
            .exports
            .write(&document.filename, &document.bytes)
            .map_err(|err| {
                engine_error!("Writing {} failed: {}", document.filename, err);
                err.to_string()
            })?;
        engine_info!(
            "Exported {} ({} pages) to {:?}",
            spec.kind(),
            document.page_count,
            path
        );
        Ok(path.display().to_string())
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::SnippetReady { text, .. } => Some(Msg::SnippetGenerated(text.into_string())),
        EngineEvent::SnippetFailed { category, error } => {
            engine_warn!("Snippet {} failed: {}", category, error);
            Some(Msg::SnippetFailed(error.to_string()))
        }
        EngineEvent::HeadlinesProgress { source, headlines } => {
            engine_info!("{}: {} headlines", source, headlines.len());
            None
        }
        EngineEvent::HeadlinesFinished { headlines, error } => Some(Msg::HeadlinesFetched {
            headlines,
            error: error.map(|err| err.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use desk_core::{HeadlineSet, Msg, SnippetCategory};
    use desk_engine::{EngineEvent, ResponseSanitizer, UpstreamError};

    use super::map_event;

    #[test]
    fn progress_events_stay_in_the_log() {
        let event = EngineEvent::HeadlinesProgress {
            source: "Mint".to_string(),
            headlines: vec!["Rupee ends flat".to_string()],
        };
        assert_eq!(map_event(event), None);
    }

    #[test]
    fn failures_carry_the_upstream_reason() {
        let event = EngineEvent::SnippetFailed {
            category: SnippetCategory::Closing,
            error: UpstreamError::Timeout,
        };
        assert_eq!(
            map_event(event),
            Some(Msg::SnippetFailed("generation request timed out".to_string()))
        );

        let mut partial = HeadlineSet::new();
        partial.insert("Mint", vec!["Sensex gains".to_string()]);
        let event = EngineEvent::HeadlinesFinished {
            headlines: partial.clone(),
            error: Some(UpstreamError::EmptyContent),
        };
        assert_eq!(
            map_event(event),
            Some(Msg::HeadlinesFetched {
                headlines: partial,
                error: Some("generation returned no content".to_string()),
            })
        );
    }

    #[test]
    fn snippet_text_is_forwarded() {
        let text = ResponseSanitizer::new("empty").sanitize("  Nifty flat\n");
        let event = EngineEvent::SnippetReady {
            category: SnippetCategory::Now,
            text,
        };
        assert_eq!(
            map_event(event),
            Some(Msg::SnippetGenerated("Nifty flat".to_string()))
        );
    }
}
