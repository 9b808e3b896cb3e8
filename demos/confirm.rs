//! Confirm dialog - example of wiring menuwire to a transport.
//!
//! This example demonstrates:
//! - Building a menu with per-option and menu-level callbacks
//! - Feeding client answers through a channel into `run_event_loop`
//! - The dismissal-resend cycle (`mark_dismissed` before dispatch)
//!
//! The "transport" here is just the main task sending scripted answers;
//! a real integration would parse them off a socket.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example confirm
//! ```

use std::sync::Arc;

use menuwire::{adapter, Menu, Response, Router, SessionEvent};
use tokio::sync::mpsc;

/// Stand-in for the external client identity type.
#[derive(Debug, Clone)]
struct Session {
    name: &'static str,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut menu: Menu<Session> = Menu::new("Confirm", "Delete the world?");
    menu.add_option_with("Yes", |session: &Session| {
        println!("{} is sure. Deleting.", session.name);
    });
    menu.add_option("No");
    menu.set_on_selected(|index, session| {
        println!("{} pressed option {index}", session.name);
    });
    menu.set_on_dismissed(|session: &Session| {
        println!("{} closed the dialog", session.name);
    });
    let menu = Arc::new(menu);

    let (tx, rx) = mpsc::channel::<SessionEvent<Session>>(8);
    let pump = tokio::spawn(adapter::run_event_loop(rx, Router::with_menus()));

    // "Publish" to alice; she presses Yes.
    tx.send(SessionEvent::new(
        menu.clone(),
        Response::selection(0),
        Session { name: "alice" },
    ))
    .await
    .unwrap();

    // "Publish" to bob; he closes the dialog. The transport marks the
    // menu dismissed before handing the event over.
    menu.mark_dismissed();
    tx.send(SessionEvent::new(
        menu.clone(),
        Response::dismissal(),
        Session { name: "bob" },
    ))
    .await
    .unwrap();

    // Re-publish to bob; he closes it again. The dispatcher cleared the
    // flag after the first dismissal, so this is a fresh event.
    menu.mark_dismissed();
    tx.send(SessionEvent::new(
        menu.clone(),
        Response::dismissal(),
        Session { name: "bob" },
    ))
    .await
    .unwrap();

    drop(tx);
    pump.await.unwrap();
}
