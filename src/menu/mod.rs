//! Menu entity - a titled message plus an ordered row of options.
//!
//! A [`Menu`] owns the per-instance state the dispatcher routes against:
//! the ordered option list (insertion order defines the numeric index
//! the protocol uses), one menu-level "option selected" callback slot,
//! one "dismissed" callback slot, and the dismissal-resend flag.
//!
//! Callback slots are single-assignment-overwrite: setting a callback
//! replaces the previous one. There is deliberately no multi-listener
//! fan-out; the ordering guarantees of dispatch depend on there being
//! exactly one slot of each kind.
//!
//! The menu is generic over the client identity type `C`, which the
//! crate treats as opaque.
//!
//! # Example
//!
//! ```ignore
//! use menuwire::Menu;
//!
//! let menu: Menu<Session> = Menu::new("Teleport", "Where to?")
//!     .on_selected(|index, session| println!("chose {index}"))
//!     .on_dismissed(|session| println!("changed their mind"));
//! ```

mod option;

use std::sync::atomic::{AtomicBool, Ordering};

pub use option::{MenuOption, OptionCallback};

use crate::error::{MenuError, Result};

/// Menu-level selection callback: `(option index, client)`.
pub type SelectedCallback<C> = Box<dyn Fn(usize, &C) + Send + Sync>;

/// Dismissal callback: invoked with the client that closed the menu.
pub type DismissedCallback<C> = Box<dyn Fn(&C) + Send + Sync>;

/// A modal menu: display text plus an ordered list of [`MenuOption`]s.
///
/// Build and mutate the menu (append options, attach callbacks) before
/// publishing it to clients; after publication the only field that
/// changes is the dismissal-resend flag, which is atomic, so a shared
/// `Arc<Menu<C>>` can be dispatched against from several events at
/// once without observing partial state.
///
/// The entity itself performs no I/O. Publishing it to a client and
/// reading the answer back is the transport's job; the transport hands
/// each answer to [`dispatch::on_event`](crate::dispatch::on_event).
pub struct Menu<C> {
    title: String,
    content: String,
    options: Vec<MenuOption<C>>,
    on_selected: Option<SelectedCallback<C>>,
    on_dismissed: Option<DismissedCallback<C>>,
    /// Transport-facing: set when the client reported the menu closed,
    /// consumed (swap to false) by the dispatcher so the same instance
    /// can be re-sent and produce a fresh dismissal event later.
    dismissed: AtomicBool,
}

impl<C> Menu<C> {
    /// Create a menu with no options yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            options: Vec::new(),
            on_selected: None,
            on_dismissed: None,
            dismissed: AtomicBool::new(false),
        }
    }

    /// Create a menu from plain labels, none carrying a callback.
    pub fn with_options<I, S>(
        title: impl Into<String>,
        content: impl Into<String>,
        labels: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut menu = Self::new(title, content);
        for label in labels {
            menu.add_option(label);
        }
        menu
    }

    /// Append a plain option. Returns the new option's index.
    pub fn add_option(&mut self, label: impl Into<String>) -> usize {
        self.options.push(MenuOption::new(label));
        self.options.len() - 1
    }

    /// Append an option carrying its own selection callback.
    ///
    /// The per-option callback runs before the menu-level one and does
    /// not suppress it. Returns the new option's index.
    pub fn add_option_with<F>(&mut self, label: impl Into<String>, on_selected: F) -> usize
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.options.push(MenuOption::with_callback(label, on_selected));
        self.options.len() - 1
    }

    /// Replace the menu-level selection callback (last writer wins).
    pub fn set_on_selected<F>(&mut self, on_selected: F)
    where
        F: Fn(usize, &C) + Send + Sync + 'static,
    {
        self.on_selected = Some(Box::new(on_selected));
    }

    /// Replace the dismissal callback (last writer wins).
    pub fn set_on_dismissed<F>(&mut self, on_dismissed: F)
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.on_dismissed = Some(Box::new(on_dismissed));
    }

    /// Fluent form of [`set_on_selected`](Self::set_on_selected).
    pub fn on_selected<F>(mut self, on_selected: F) -> Self
    where
        F: Fn(usize, &C) + Send + Sync + 'static,
    {
        self.set_on_selected(on_selected);
        self
    }

    /// Fluent form of [`set_on_dismissed`](Self::set_on_dismissed).
    pub fn on_dismissed<F>(mut self, on_dismissed: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.set_on_dismissed(on_dismissed);
        self
    }

    /// The menu's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The message shown above the options.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The options in protocol order.
    pub fn options(&self) -> &[MenuOption<C>] {
        &self.options
    }

    /// The option at `index`, if it exists.
    pub fn option(&self, index: usize) -> Option<&MenuOption<C>> {
        self.options.get(index)
    }

    /// Record that the client reported this menu closed.
    ///
    /// Called by the transport adapter before dispatch; the dispatcher
    /// consumes the flag via [`take_dismissed`](Self::take_dismissed).
    pub fn mark_dismissed(&self) {
        self.dismissed.store(true, Ordering::SeqCst);
    }

    /// Consume the dismissal flag, returning its previous value.
    ///
    /// The swap always clears the flag, so a re-published menu yields
    /// an independent dismissal event next time around.
    pub fn take_dismissed(&self) -> bool {
        self.dismissed.swap(false, Ordering::SeqCst)
    }

    /// Whether the dismissal flag is currently set.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed.load(Ordering::SeqCst)
    }

    /// Deliver a selection at `index` to the attached callbacks.
    ///
    /// Runs the option's own callback first (if any), then the
    /// menu-level callback (if any); the menu-level one always runs,
    /// independent of whether the option had its own. Fails with
    /// [`MenuError::IndexOutOfRange`] before invoking anything when
    /// `index` does not name an option.
    pub fn notify_selected(&self, index: usize, client: &C) -> Result<()> {
        let option = self
            .options
            .get(index)
            .ok_or(MenuError::IndexOutOfRange {
                index,
                len: self.options.len(),
            })?;

        option.notify_selected(client);

        if let Some(cb) = &self.on_selected {
            cb(index, client);
        }
        Ok(())
    }

    /// Deliver a dismissal to the dismissal callback, if one is set.
    pub fn notify_dismissed(&self, client: &C) {
        if let Some(cb) = &self.on_dismissed {
            cb(client);
        }
    }
}

impl<C> std::fmt::Debug for Menu<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("options", &self.options)
            .field("dismissed", &self.is_dismissed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_add_option_returns_index() {
        let mut menu: Menu<()> = Menu::new("Pick", "choose one");
        assert_eq!(menu.add_option("A"), 0);
        assert_eq!(menu.add_option("B"), 1);
        assert_eq!(menu.add_option_with("C", |_| {}), 2);
        assert_eq!(menu.options().len(), 3);
        assert_eq!(menu.option(1).unwrap().label(), "B");
    }

    #[test]
    fn test_with_options_preserves_order() {
        let menu: Menu<()> = Menu::with_options("Pick", "choose one", ["A", "B", "C"]);
        let labels: Vec<_> = menu.options().iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn test_option_callback_runs_before_menu_callback() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut menu: Menu<()> = Menu::new("", "");
        let order2 = order.clone();
        menu.add_option_with("first", move |_| {
            order2.lock().unwrap().push("opt0-hit");
        });
        let order2 = order.clone();
        menu.set_on_selected(move |_, _| {
            order2.lock().unwrap().push("menu-hit");
        });

        menu.notify_selected(0, &()).unwrap();
        assert_eq!(*order.lock().unwrap(), ["opt0-hit", "menu-hit"]);
    }

    #[test]
    fn test_menu_callback_runs_without_option_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut menu: Menu<()> = Menu::new("", "");
        menu.add_option("plain");
        let hits2 = hits.clone();
        menu.set_on_selected(move |index, _| {
            assert_eq!(index, 0);
            hits2.fetch_add(1, Ordering::SeqCst);
        });

        menu.notify_selected(0, &()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_notify_out_of_range_invokes_nothing() {
        let mut menu: Menu<()> = Menu::new("", "");
        menu.add_option_with("only", |_| panic!("must not run"));
        menu.set_on_selected(|_, _| panic!("must not run"));

        let err = menu.notify_selected(1, &()).unwrap_err();
        assert!(matches!(
            err,
            MenuError::IndexOutOfRange { index: 1, len: 1 }
        ));
    }

    #[test]
    fn test_set_on_selected_overwrites() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut menu: Menu<()> = Menu::new("", "");
        menu.add_option("A");
        menu.set_on_selected(|_, _| panic!("replaced callback must not run"));
        let hits2 = hits.clone();
        menu.set_on_selected(move |_, _| {
            hits2.fetch_add(1, Ordering::SeqCst);
        });

        menu.notify_selected(0, &()).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_notify_dismissed_without_callback_is_noop() {
        let menu: Menu<()> = Menu::new("", "");
        menu.notify_dismissed(&()); // must not panic
    }

    #[test]
    fn test_take_dismissed_clears_flag() {
        let menu: Menu<()> = Menu::new("", "");
        assert!(!menu.take_dismissed());

        menu.mark_dismissed();
        assert!(menu.is_dismissed());
        assert!(menu.take_dismissed());
        assert!(!menu.is_dismissed());
        assert!(!menu.take_dismissed());
    }
}
