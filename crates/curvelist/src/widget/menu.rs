//! Context menus.
//!
//! A [`ContextMenu`] is a plain description of the entries to show. The host
//! toolkit displays it through a [`MenuPresenter`], which blocks like a modal
//! popup and reports which entry (if any) was chosen.

use super::events::Point;

/// Commands the curve list exposes through its context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    /// Remove the selected curves, after confirmation.
    DeleteSelected,
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAction {
    action: ListAction,
    text: String,
    icon: Option<String>,
    enabled: bool,
}

impl MenuAction {
    /// Creates an enabled entry. `&` in the text marks the mnemonic.
    pub fn new(action: ListAction, text: impl Into<String>) -> Self {
        Self {
            action,
            text: text.into(),
            icon: None,
            enabled: true,
        }
    }

    /// Sets the icon resource name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets whether the entry can be chosen.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The command this entry runs.
    pub fn action(&self) -> ListAction {
        self.action
    }

    /// The label, mnemonic marker included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The label with the mnemonic marker stripped (`&&` stays a literal `&`).
    pub fn display_text(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut chars = self.text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '&' {
                if chars.peek() == Some(&'&') {
                    out.push('&');
                    chars.next();
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    /// The mnemonic character, if the label has one.
    pub fn mnemonic(&self) -> Option<char> {
        let mut chars = self.text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '&' {
                match chars.next() {
                    Some('&') => continue,
                    other => return other,
                }
            }
        }
        None
    }

    /// The icon resource name.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Whether the entry can be chosen.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// An ordered list of entries to show as a popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextMenu {
    actions: Vec<MenuAction>,
}

impl ContextMenu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_action(&mut self, action: MenuAction) {
        self.actions.push(action);
    }

    /// The entries in display order.
    pub fn actions(&self) -> &[MenuAction] {
        &self.actions
    }

    /// Shows the menu at `global_pos` and returns the chosen command.
    ///
    /// Out-of-range or disabled choices count as a dismissal.
    pub fn exec(&self, presenter: &mut dyn MenuPresenter, global_pos: Point) -> Option<ListAction> {
        let index = presenter.exec(self, global_pos)?;
        self.actions
            .get(index)
            .filter(|entry| entry.is_enabled())
            .map(MenuAction::action)
    }
}

/// Displays a context menu and blocks until it closes.
pub trait MenuPresenter: Send {
    /// Shows `menu` at `global_pos`; returns the index of the chosen entry,
    /// or `None` if the menu was dismissed.
    fn exec(&mut self, menu: &ContextMenu, global_pos: Point) -> Option<usize>;
}

/// A presenter for headless use: every menu is dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DismissMenu;

impl MenuPresenter for DismissMenu {
    fn exec(&mut self, _menu: &ContextMenu, _global_pos: Point) -> Option<usize> {
        None
    }
}
