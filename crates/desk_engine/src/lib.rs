//! Market desk engine: generation pipeline, document export and file output.
mod client;
mod config;
mod engine;
mod filename;
mod persist;
mod pipeline;
mod prompt;
mod render;
mod sanitize;
mod types;

pub use client::{ChatMessage, ClientSettings, OpenAiClient, Role, TextGenerationClient};
pub use config::{
    ConfigError, DeskConfig, API_BASE_VAR, API_KEY_VAR, DEFAULT_API_BASE, DEFAULT_MODEL,
    EMPTY_PLACEHOLDER_VAR, ERROR_MESSAGE_VAR, MODEL_VAR, TIMEOUT_VAR,
};
pub use engine::EngineHandle;
pub use filename::document_filename;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{ChannelEventSink, EventSink, GenerationPipeline};
pub use prompt::{PromptBuilder, PromptPair, HEADLINE_MARKER};
pub use render::{
    layout_document, text_width_mm, wrap_text, DocumentRenderer, FontFace, LaidOutPage,
    RenderError, RenderPayload, RenderSpec, RenderedDocument, TextRun, BODY_SIZE_PT, BULLET,
    BULLET_INDENT_MM, DEFAULT_FOOTER, LINE_HEIGHT_MM, MARGIN_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
pub use sanitize::{
    clean_for_document, strip_diff_markers, ResponseSanitizer, SanitizedText,
    DEFAULT_EMPTY_PLACEHOLDER,
};
pub use types::{
    DocumentKind, EngineEvent, GenerationRequest, GenerationResult, RequestCategory,
    UpstreamError,
};
