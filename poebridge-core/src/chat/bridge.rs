//! Bridge from the async fragment stream to a blocking caller
//!
//! A single-use worker thread owns a current-thread runtime and drives the
//! stream to completion, handing fragments back through a bounded channel of
//! capacity one. The calling thread blocks only on the handoff, never on
//! stream scheduling, and back-pressure keeps at most one fragment in
//! flight. The channel closing is the end-of-stream signal.

use crate::error::{PoeError, PoeResult};
use crate::poe::BotQueryClient;
use crate::protocol::{QueryRequest, TextFragment};
use futures::StreamExt;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Run `query` on a dedicated worker, returning the fragment receiver.
///
/// The worker exits on end-of-stream, on the first stream error (after
/// relaying it), or as soon as the receiver is dropped.
pub(crate) fn spawn_stream_worker(
    client: Arc<dyn BotQueryClient>,
    query: QueryRequest,
) -> PoeResult<mpsc::Receiver<PoeResult<TextFragment>>> {
    let (tx, rx) = mpsc::sync_channel(1);

    thread::Builder::new()
        .name("poe-stream".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    let _ = tx.send(Err(PoeError::Bridge(format!(
                        "Failed to build stream runtime: {}",
                        e
                    ))));
                    return;
                }
            };

            runtime.block_on(async move {
                let mut stream = match client.stream_request(query).await {
                    Ok(stream) => stream,
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        return;
                    }
                };

                while let Some(item) = stream.next().await {
                    let terminal = item.is_err();
                    if tx.send(item).is_err() {
                        // Receiver dropped, caller abandoned the request
                        return;
                    }
                    if terminal {
                        return;
                    }
                }
            });
        })
        .map_err(|e| PoeError::Bridge(format!("Failed to spawn stream worker: {}", e)))?;

    Ok(rx)
}
