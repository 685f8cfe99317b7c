//! Server-sent events for the live order feed
//!
//! The kitchen display subscribes to every order; the confirmation
//! page subscribes to its own. A lagged subscriber skips missed events
//! and keeps going; clients re-fetch full state on reconnect.

use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use futures::stream;
use tokio::sync::broadcast;

use crate::core::ServerState;
use crate::orders::OrderFeedEvent;

pub async fn all_orders(
    State(state): State<ServerState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.order_feed.subscribe_all();
    Sse::new(event_stream(rx)).keep_alive(KeepAlive::default())
}

pub async fn one_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.order_feed.subscribe(&id);
    Sse::new(event_stream(rx)).keep_alive(KeepAlive::default())
}

fn event_stream(
    rx: broadcast::Receiver<OrderFeedEvent>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let sse_event = match Event::default().json_data(&event) {
                        Ok(e) => e,
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to encode feed event");
                            continue;
                        }
                    };
                    return Some((Ok(sse_event), rx));
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Order feed subscriber lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    })
}
