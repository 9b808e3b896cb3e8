//! A single selectable entry in a menu.

/// Callback attached to one option, invoked with the responding client.
pub type OptionCallback<C> = Box<dyn Fn(&C) + Send + Sync>;

/// One selectable entry in a [`Menu`](crate::Menu).
///
/// An option is a label plus an optional dedicated callback. The
/// callback only fires when the option lives inside a menu that goes
/// through [`dispatch::on_event`](crate::dispatch::on_event); the
/// option itself never observes anything on its own.
///
/// When both the option and its menu carry a selection callback, the
/// option's runs first and the menu's still runs afterwards; neither
/// suppresses the other.
pub struct MenuOption<C> {
    label: String,
    on_selected: Option<OptionCallback<C>>,
}

impl<C> MenuOption<C> {
    /// Create a plain option with no callback.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_selected: None,
        }
    }

    /// Create an option carrying its own selection callback.
    pub fn with_callback<F>(label: impl Into<String>, on_selected: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            on_selected: Some(Box::new(on_selected)),
        }
    }

    /// Replace the option's callback. Overwrites any previous one.
    pub fn set_on_selected<F>(&mut self, on_selected: F)
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.on_selected = Some(Box::new(on_selected));
    }

    /// The option's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a dedicated callback is attached.
    pub fn has_callback(&self) -> bool {
        self.on_selected.is_some()
    }

    /// Run the option's callback for `client`, if one is attached.
    pub(crate) fn notify_selected(&self, client: &C) {
        if let Some(cb) = &self.on_selected {
            cb(client);
        }
    }
}

impl<C> std::fmt::Debug for MenuOption<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuOption")
            .field("label", &self.label)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}
