//! Live progress delivery over Server-Sent Events.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

use super::AppState;

/// `GET /progress/:token` - SSE stream of progress events for one client.
///
/// The client picks its own correlation token, opens this stream, and then
/// sends the same token in the `x-client-id` header of `POST /analyze`.
/// Events arrive as `analysis:progress` with a `{step, progress, message}`
/// JSON payload. Delivery is lossy; a lagging consumer drops old events.
pub async fn progress_stream(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    log::debug!("Progress stream opened for token '{}'", token);
    let rx = state.progress.subscribe(&token);

    let stream = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(event) => Event::default()
                .event("analysis:progress")
                .json_data(&event)
                .ok()
                .map(Ok),
            Err(e) => {
                // Lagged receiver; skip and keep streaming
                log::warn!("Progress stream error: {:?}", e);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
