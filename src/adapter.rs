//! Transport adapter - async pump from an inbound event channel.
//!
//! The transport itself (serializing menus out, parsing answers back)
//! lives outside this crate. Its integration point is a
//! [`tokio::sync::mpsc`] channel of [`SessionEvent`]s: one event per
//! client answer, carrying the form object the transport associated
//! with the interaction, the parsed [`Response`], and the client
//! identity.
//!
//! [`run_event_loop`] drains that channel and routes each event through
//! a [`Router`]. Per-event failures (an out-of-range option index from
//! a misbehaving peer) are logged and skipped; they never take the loop
//! down. Events are dispatched inline, one at a time, so answers
//! concerning the same menu are serialized through the pump.
//!
//! # Example
//!
//! ```ignore
//! use menuwire::{adapter, Router, SessionEvent};
//! use tokio::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel::<SessionEvent<Session>>(64);
//! let pump = tokio::spawn(adapter::run_event_loop(rx, Router::with_menus()));
//!
//! // transport side:
//! tx.send(SessionEvent::new(menu.clone(), response, session)).await?;
//! ```

use std::any::Any;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::response::Response;
use crate::router::Router;

/// One inbound client answer, as handed over by the transport.
pub struct SessionEvent<C> {
    /// The form object the transport associated with the interaction.
    pub form: Arc<dyn Any + Send + Sync>,
    /// The client's parsed answer.
    pub response: Response,
    /// The client that answered.
    pub client: C,
}

impl<C> SessionEvent<C> {
    /// Create an event for a published form.
    pub fn new(form: Arc<dyn Any + Send + Sync>, response: Response, client: C) -> Self {
        Self {
            form,
            response,
            client,
        }
    }
}

/// Drain `rx`, routing every event through `router`.
///
/// Runs until all senders are dropped. Unclaimed events (no registered
/// handler recognized the form) are logged at `warn` and skipped;
/// per-event routing errors are logged at `error` and skipped. Neither
/// stops the loop.
pub async fn run_event_loop<C: 'static>(
    mut rx: mpsc::Receiver<SessionEvent<C>>,
    router: Router<C>,
) {
    while let Some(event) = rx.recv().await {
        match router.route(event.form.as_ref(), &event.response, &event.client) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!("inbound event not claimed by any form handler");
            }
            Err(e) => {
                tracing::error!("dropping inbound event: {e}");
            }
        }
    }
}
