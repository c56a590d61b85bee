//! Progress notification plumbing.
//!
//! The analyzer reports progress through the [`ProgressSink`] trait: a
//! single synchronous `emit` with no return value, so the core never sees
//! delivery failures. Delivery is fire-and-forget and lossy by design --
//! an event that nobody receives has no effect on the analysis result.
//!
//! [`ProgressRegistry`] maps client-supplied correlation tokens to bounded
//! broadcast channels. A client subscribes (over SSE) with its token before
//! invoking an analysis, then passes the same token with the analyze request
//! so the handler can route checkpoint events to it.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::broadcast;

use crate::models::ProgressEvent;

/// Number of events buffered per client channel.
///
/// An analysis emits six checkpoints, so a small buffer is plenty; a slow
/// consumer drops old events rather than exerting backpressure.
const CHANNEL_CAPACITY: usize = 32;

/// Push interface for progress events.
///
/// Implementations must not block and must swallow delivery failures; the
/// analyzer invokes `emit` synchronously and inline during the scan.
pub trait ProgressSink: Send + Sync {
    /// Delivers a single progress event, best-effort.
    fn emit(&self, event: ProgressEvent);
}

/// Sink that broadcasts events to the subscribers of one client channel.
pub struct ChannelSink {
    tx: broadcast::Sender<ProgressEvent>,
}

impl ProgressSink for ChannelSink {
    fn emit(&self, event: ProgressEvent) {
        // Send fails only when no receiver is connected; that is fine.
        let _ = self.tx.send(event);
    }
}

/// Registry of per-client progress channels, keyed by correlation token.
///
/// Channels are created on subscription and dropped once their last
/// receiver disconnects.
#[derive(Default)]
pub struct ProgressRegistry {
    channels: Mutex<HashMap<String, broadcast::Sender<ProgressEvent>>>,
}

impl ProgressRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to the channel for `token`, creating it if needed.
    pub fn subscribe(&self, token: &str) -> broadcast::Receiver<ProgressEvent> {
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        let tx = channels.entry(token.to_string()).or_insert_with(|| {
            log::debug!("Creating progress channel for token '{}'", token);
            broadcast::channel(CHANNEL_CAPACITY).0
        });
        tx.subscribe()
    }

    /// Returns a sink for `token` if a listener is currently connected.
    ///
    /// Channels whose receivers have all disconnected are pruned here, so an
    /// abandoned token silently disables progress delivery.
    pub fn sink(&self, token: &str) -> Option<ChannelSink> {
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        match channels.get(token) {
            Some(tx) if tx.receiver_count() > 0 => Some(ChannelSink { tx: tx.clone() }),
            Some(_) => {
                log::debug!("Pruning progress channel for token '{}' (no listeners)", token);
                channels.remove(token);
                None
            }
            None => None,
        }
    }

    /// Number of tokens with a live channel (connected or not yet pruned).
    pub fn channel_count(&self) -> usize {
        self.channels.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
