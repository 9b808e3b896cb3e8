//! # menuwire
//!
//! Callback-driven modal menus for remote clients.
//!
//! A host application builds a [`Menu`] (a message plus a row of
//! labeled options), attaches callbacks to it, and publishes it to a
//! client over whatever transport it likes. When the client answers -
//! "option N was pressed" or "the menu was closed without a choice" -
//! the transport hands the parsed [`Response`] to this crate, which
//! routes it to the right callback:
//!
//! - **per-option callbacks** run first and never suppress the
//!   menu-level one;
//! - the **menu-level selection callback** always runs for a selection;
//! - the **dismissal callback** runs for a dismissal, and the menu's
//!   resend flag is cleared so the same instance can be re-published
//!   and dismissed again later.
//!
//! The transport, the client identity type, and the wire encoding of
//! the menu layout are all external: the crate is generic over the
//! client type `C` and only ever sees the [`Response`] value.
//!
//! ## Example
//!
//! ```ignore
//! use menuwire::{dispatch, Menu, Response};
//!
//! let menu: Menu<Session> = Menu::new("Teleport", "Where to?")
//!     .on_selected(|index, session| println!("warping to {index}"))
//!     .on_dismissed(|session| println!("stayed put"));
//!
//! // transport-integration layer, once per inbound answer:
//! let handled = dispatch::on_event(&menu, &Response::selection(0), &session)?;
//! ```
//!
//! For transports carrying several form kinds, [`Router`] composes
//! handlers behind one entry point, and [`adapter::run_event_loop`]
//! pumps events out of a `tokio` channel.

pub mod adapter;
pub mod dispatch;
pub mod error;
pub mod menu;
pub mod response;
pub mod router;

pub use adapter::SessionEvent;
pub use error::{MenuError, Result};
pub use menu::{Menu, MenuOption};
pub use response::Response;
pub use router::Router;
