use std::sync::{mpsc, Arc};

use chrono::{DateTime, Local};
use desk_core::{HeadlineSet, SnippetCategory};
use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::{
    EngineEvent, GenerationRequest, PromptBuilder, RequestCategory, ResponseSanitizer,
    SanitizedText, TextGenerationClient, UpstreamError,
};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Prompt construction, the generation call and sanitizing, for one request at a time.
pub struct GenerationPipeline {
    client: Arc<dyn TextGenerationClient>,
    prompts: PromptBuilder,
    sanitizer: ResponseSanitizer,
    model: String,
}

impl GenerationPipeline {
    pub fn new(
        client: Arc<dyn TextGenerationClient>,
        sanitizer: ResponseSanitizer,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            prompts: PromptBuilder,
            sanitizer,
            model: model.into(),
        }
    }

    pub fn sanitizer(&self) -> &ResponseSanitizer {
        &self.sanitizer
    }

    /// Runs the request and reports the outcome through `sink`.
    pub async fn execute(&self, request: &GenerationRequest, sink: &dyn EventSink) {
        match request.category {
            RequestCategory::Snippet(category) => {
                let event = match self
                    .generate_snippet(
                        category,
                        &request.symbols,
                        &request.context_lines,
                        request.timestamp,
                    )
                    .await
                {
                    Ok(text) => EngineEvent::SnippetReady { category, text },
                    Err(error) => EngineEvent::SnippetFailed { category, error },
                };
                sink.emit(event);
            }
            RequestCategory::Headlines => {
                let (headlines, error) = self.fetch_headlines(&request.context_lines, sink).await;
                sink.emit(EngineEvent::HeadlinesFinished { headlines, error });
            }
        }
    }

    /// An empty reply yields the placeholder text rather than an error.
    pub async fn generate_snippet(
        &self,
        category: SnippetCategory,
        symbols: &[String],
        notes: &[String],
        at: DateTime<Local>,
    ) -> Result<SanitizedText, UpstreamError> {
        let prompt = self
            .prompts
            .build_snippet_prompt(category, symbols, notes, at);
        engine_info!(
            "Generating {} snippet (symbols={}, notes={})",
            category,
            symbols.len(),
            notes.len()
        );
        match self.client.generate(&prompt, &self.model).await {
            Ok(raw) => Ok(self.sanitizer.sanitize(&raw)),
            Err(UpstreamError::EmptyContent) => {
                engine_warn!("Snippet reply was empty; showing placeholder");
                Ok(self.sanitizer.sanitize_snippet(None))
            }
            Err(err) => {
                engine_warn!("Snippet generation failed: {}", err);
                Err(err)
            }
        }
    }

    /// Fetches headlines one source at a time, in the given order.
    ///
    /// Each call completes before the next starts, so the result order always
    /// matches `sources`. Sources with an empty reply are left out; any other
    /// failure stops the run and is returned alongside what was collected.
    pub async fn fetch_headlines(
        &self,
        sources: &[String],
        progress: &dyn EventSink,
    ) -> (HeadlineSet, Option<UpstreamError>) {
        let mut collected = HeadlineSet::new();
        for source in sources {
            let prompt = self.prompts.build_headline_prompt(source);
            engine_debug!("Fetching headlines from {}", source);
            match self.client.generate(&prompt, &self.model).await {
                Ok(raw) => {
                    let headlines = self.sanitizer.sanitize_headlines(&raw);
                    if headlines.is_empty() {
                        engine_warn!("No usable headlines from {}", source);
                        continue;
                    }
                    progress.emit(EngineEvent::HeadlinesProgress {
                        source: source.clone(),
                        headlines: headlines.clone(),
                    });
                    collected.insert(source.clone(), headlines);
                }
                Err(UpstreamError::EmptyContent) => {
                    engine_warn!("Empty headline reply from {}", source);
                }
                Err(err) => {
                    engine_warn!("Headline fetch from {} failed: {}", source, err);
                    return (collected, Some(err));
                }
            }
        }
        engine_info!("Collected headlines from {} sources", collected.len());
        (collected, None)
    }
}
