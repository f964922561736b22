use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::engine_error;

use crate::pipeline::{ChannelEventSink, GenerationPipeline};
use crate::{EngineEvent, GenerationRequest};

enum EngineCommand {
    Generate(GenerationRequest),
}

/// Runs generation requests on a background tokio runtime and reports events over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(pipeline: GenerationPipeline) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let pipeline = Arc::new(pipeline);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let pipeline = pipeline.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(pipeline.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, request: GenerationRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Generate(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    pipeline: &GenerationPipeline,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Generate(request) => {
            let sink = ChannelEventSink::new(event_tx);
            pipeline.execute(&request, &sink).await;
        }
    }
}
