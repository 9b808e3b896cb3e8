//! Router - composes several form-handler kinds behind one entry point.
//!
//! A transport usually carries answers for more than one kind of form.
//! The [`Router`] holds an ordered list of handlers with the same
//! `(form, response, client) -> Result<bool>` shape as
//! [`dispatch::on_event`](crate::dispatch::on_event); routing tries
//! them in registration order and stops at the first one that claims
//! the event by returning `Ok(true)`.
//!
//! # Example
//!
//! ```ignore
//! use menuwire::Router;
//!
//! let router: Router<Session> = Router::with_menus();
//! let claimed = router.route(&form, &response, &session)?;
//! ```

use std::any::Any;

use crate::error::Result;
use crate::response::Response;

/// Boxed handler for one kind of form.
pub type FormHandler<C> =
    Box<dyn Fn(&dyn Any, &Response, &C) -> Result<bool> + Send + Sync>;

/// Ordered collection of form handlers sharing one transport.
pub struct Router<C> {
    handlers: Vec<FormHandler<C>>,
}

impl<C: 'static> Router<C> {
    /// Create a router with no handlers registered.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Create a router with the menu dispatcher pre-registered.
    pub fn with_menus() -> Self {
        let mut router = Self::new();
        router.register(crate::dispatch::on_event::<C>);
        router
    }

    /// Append a handler. Handlers are consulted in registration order.
    pub fn register<F>(&mut self, handler: F)
    where
        F: Fn(&dyn Any, &Response, &C) -> Result<bool> + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route one event to the first handler that claims it.
    ///
    /// Returns `Ok(true)` once a handler consumes the event (later
    /// handlers are not consulted), `Ok(false)` when none claims it,
    /// and the first handler error otherwise.
    pub fn route(&self, form: &dyn Any, response: &Response, client: &C) -> Result<bool> {
        for handler in &self.handlers {
            if handler(form, response, client)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<C: 'static> Default for Router<C> {
    fn default() -> Self {
        Self::new()
    }
}
