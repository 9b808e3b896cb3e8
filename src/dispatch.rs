//! Response dispatch - routes one inbound event to the right callbacks.
//!
//! [`on_event`] is the single coupling point to the transport layer:
//! the transport-integration code calls it once per inbound client
//! answer, handing over whatever form object it associated with the
//! interaction. The returned `Ok(bool)` says whether the event belonged
//! to a [`Menu`] and was fully processed, so a shared handler can try
//! other form kinds when it gets `Ok(false)` and stop once it gets
//! `Ok(true)`.
//!
//! Routing rules, in order:
//! 1. Not a `Menu<C>` -> `Ok(false)`, nothing touched.
//! 2. Dismissal flag set, or the response itself is a dismissal ->
//!    clear the flag, run the dismissal callback, `Ok(true)`.
//! 3. Otherwise a selection: range-check the index, run the option's
//!    callback then the menu-level callback, `Ok(true)`.
//!
//! Callback panics are not caught here; a fault in host code unwinds to
//! whatever invoked dispatch.
//!
//! # Example
//!
//! ```ignore
//! use menuwire::{dispatch, Menu, Response};
//!
//! let menu: Menu<Session> = Menu::with_options("Pick", "choose one", ["A", "B"])
//!     .on_selected(|index, session| { /* ... */ });
//!
//! let handled = dispatch::on_event(&menu, &Response::selection(1), &session)?;
//! assert!(handled);
//! ```

use std::any::Any;

use crate::error::Result;
use crate::menu::Menu;
use crate::response::Response;

/// Dispatch one inbound response event.
///
/// Returns `Ok(true)` when `form` is a [`Menu<C>`] and the event was
/// processed, `Ok(false)` when the form is some other kind (so another
/// handler may claim it), and [`MenuError::IndexOutOfRange`] when a
/// selection names an option the menu does not have - fatal to this one
/// event, with no callback invoked and no menu state corrupted.
///
/// The dismissal flag is consumed with a single atomic swap before the
/// response is inspected, so it is cleared on every event that reaches
/// a menu: a selection arriving while the flag is set is treated as the
/// dismissal it follows, and a re-published menu always starts from a
/// clean flag.
///
/// [`MenuError::IndexOutOfRange`]: crate::MenuError::IndexOutOfRange
pub fn on_event<C: 'static>(form: &dyn Any, response: &Response, client: &C) -> Result<bool> {
    let menu = match form.downcast_ref::<Menu<C>>() {
        Some(menu) => menu,
        None => return Ok(false),
    };

    // Swap first: the flag must be cleared no matter which branch runs.
    let was_marked = menu.take_dismissed();

    match response.index {
        Some(index) if !was_marked && !response.dismissed => {
            menu.notify_selected(index, client)?;
        }
        _ => {
            tracing::debug!(title = menu.title(), "menu dismissed");
            menu.notify_dismissed(client);
        }
    }
    Ok(true)
}
