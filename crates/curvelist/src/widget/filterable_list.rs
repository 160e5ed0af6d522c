//! The filterable curve list.
//!
//! [`FilterableListWidget`] owns a two-column [`CurveTable`] (curve name and
//! live value), a filter text, a match-mode pair of radio buttons, a case
//! toggle, a value-column toggle and a collapsible settings panel. Every
//! change to the filter inputs re-evaluates row visibility, rewrites the
//! `"{visible} of {total}"` label and emits [`hidden_items_changed`] when at
//! least one row flipped.
//!
//! Toolkit concerns are injected:
//!
//! - a [`ConfirmationPrompt`] answers the delete question,
//! - a [`MenuPresenter`] shows the context menu,
//! - a [`DragExecutor`] runs drags started from the table viewport.
//!
//! Viewport mouse events reach the widget through [`InputEventFilter`]; the
//! widget never consumes them.
//!
//! # Deleting curves
//!
//! The widget does not remove rows when the user confirms a deletion. It
//! emits [`delete_curve`] once per selected name and leaves the removal to
//! the owner, which also drops the curve data. Slots run while the widget is
//! borrowed, so the owner records the names and removes them afterwards:
//!
//! ```
//! use std::sync::Arc;
//!
//! use curvelist::widget::dialog::StandardButton;
//! use curvelist::widget::filterable_list::FilterableListWidget;
//! use curvelist::widget::menu::ListAction;
//! use parking_lot::Mutex;
//!
//! let mut list = FilterableListWidget::new()
//!     .with_prompt(|_: &curvelist::widget::dialog::MessageBox| StandardButton::YES);
//! list.add_item("vehicle/speed");
//! list.add_item("vehicle/rpm");
//! list.select_row(1);
//!
//! let doomed = Arc::new(Mutex::new(Vec::new()));
//! let sink = doomed.clone();
//! list.delete_curve.connect(move |name| sink.lock().push(name.clone()));
//!
//! list.trigger(ListAction::DeleteSelected);
//! for name in doomed.lock().drain(..) {
//!     list.remove_curve(&name);
//! }
//! assert_eq!(list.row_count(), 1);
//! ```
//!
//! [`hidden_items_changed`]: FilterableListWidget::hidden_items_changed
//! [`delete_curve`]: FilterableListWidget::delete_curve

use std::fmt;
use std::path::Path;

use curvelist_core::logging::{span_names, targets};
use curvelist_core::{PerfSpan, Property, Signal};

use super::InputEventFilter;
use super::dialog::{ConfirmationPrompt, DefaultButtonPrompt, MessageBox, StandardButton};
use super::drag_drop::{CancelDrag, DragData, DragExecutor, DragGesture, DropAction};
use super::events::{ContextMenuEvent, MouseMoveEvent, MousePressEvent};
use super::menu::{ContextMenu, DismissMenu, ListAction, MenuAction, MenuPresenter};
use super::settings_panel::SettingsPanel;
use crate::error::Result;
use crate::filter::{FilterState, MatchMode};
use crate::model::{CurveItem, CurveTable, FilterOutcome, VALUE_COLUMN};
use crate::settings::FilterSettings;

/// Text of the context menu's delete entry.
pub const DELETE_ACTION_TEXT: &str = "&Delete selected curves from memory";
/// Icon resource of the delete entry.
pub const DELETE_ACTION_ICON: &str = "delete";
/// Title of the delete confirmation.
pub const DELETE_PROMPT_TITLE: &str = "Warning";
/// Body of the delete confirmation.
pub const DELETE_PROMPT_TEXT: &str = "Do you really want to remove these data?\n";

/// Formats the summary label.
fn summary_label(visible: usize, total: usize) -> String {
    format!("{visible} of {total}")
}

/// A filterable, searchable list of curve names.
pub struct FilterableListWidget {
    table: CurveTable,

    // Filter inputs
    filter_text: Property<String>,
    match_mode: Property<MatchMode>,
    case_sensitive: Property<bool>,
    label: Property<String>,

    settings_panel: SettingsPanel,
    gesture: DragGesture,
    value_precision: usize,

    // Collaborators
    prompt: Box<dyn ConfirmationPrompt>,
    menu_presenter: Box<dyn MenuPresenter>,
    drag_executor: Box<dyn DragExecutor>,

    // Signals
    /// Emitted when a filter pass flipped at least one row's visibility, or
    /// when the value column was shown or hidden.
    pub hidden_items_changed: Signal<()>,
    /// Emitted once per curve the user confirmed for deletion, in row order.
    pub delete_curve: Signal<String>,
    /// Emitted when the summary label text changes.
    pub filter_label_changed: Signal<String>,
    /// Emitted after a drag started from this list finished. Carries the
    /// action the drop target performed.
    pub drag_finished: Signal<DropAction>,
}

impl Default for FilterableListWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FilterableListWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterableListWidget")
            .field("rows", &self.table.row_count())
            .field("filter_text", &self.filter_text)
            .field("match_mode", &self.match_mode)
            .field("case_sensitive", &self.case_sensitive)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl FilterableListWidget {
    /// Creates an empty list.
    ///
    /// Filtering starts in Contains mode, case-insensitive, with an empty
    /// filter text. The settings panel is collapsed and the label reads
    /// `"0 of 0"`. Without collaborators, deletions are declined, menus are
    /// dismissed and drags are cancelled.
    pub fn new() -> Self {
        Self {
            table: CurveTable::new(),
            filter_text: Property::new(String::new()),
            match_mode: Property::new(MatchMode::Contains),
            case_sensitive: Property::new(false),
            label: Property::new(summary_label(0, 0)),
            settings_panel: SettingsPanel::new(),
            gesture: DragGesture::default(),
            value_precision: FilterSettings::default().value_precision,
            prompt: Box::new(DefaultButtonPrompt),
            menu_presenter: Box::new(DismissMenu),
            drag_executor: Box::new(CancelDrag),
            hidden_items_changed: Signal::new(),
            delete_curve: Signal::new(),
            filter_label_changed: Signal::new(),
            drag_finished: Signal::new(),
        }
    }

    /// Creates an empty list configured from saved settings.
    pub fn with_settings(settings: &FilterSettings) -> Self {
        let mut widget = Self::new();
        widget.apply_settings(settings);
        widget
    }

    /// Sets the prompt that confirms deletions.
    pub fn with_prompt(mut self, prompt: impl ConfirmationPrompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    /// Sets the presenter that shows the context menu.
    pub fn with_menu_presenter(mut self, presenter: impl MenuPresenter + 'static) -> Self {
        self.menu_presenter = Box::new(presenter);
        self
    }

    /// Sets the executor that runs drags.
    pub fn with_drag_executor(mut self, executor: impl DragExecutor + 'static) -> Self {
        self.drag_executor = Box::new(executor);
        self
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Appends a curve.
    ///
    /// The value cell shows `-` until a value is set. The new row is visible
    /// regardless of the current filter until the next filter pass.
    pub fn add_item(&mut self, name: impl Into<String>) -> usize {
        self.table.append_row(CurveItem::new(name))
    }

    /// Removes every row, clears the selection and resets the label to
    /// `"0 of 0"`.
    pub fn clear(&mut self) {
        self.table.clear();
        self.set_label(summary_label(0, 0));
    }

    /// Rows whose name equals `text` exactly, in ascending order.
    pub fn find_rows_by_name(&self, text: &str) -> Vec<usize> {
        self.table.find_rows(text)
    }

    /// Total number of rows, hidden ones included.
    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Removes one row and returns its name.
    ///
    /// The label is refreshed from the remaining rows; visibility of the
    /// other rows is left as it was.
    pub fn remove_row(&mut self, row: usize) -> Option<String> {
        let removed = self.table.remove_row(row)?;
        self.refresh_label();
        Some(removed.name().to_string())
    }

    /// Removes every row named `name`. Returns how many were removed.
    pub fn remove_curve(&mut self, name: &str) -> usize {
        let rows = self.table.find_rows(name);
        // Highest first so the remaining indices stay valid.
        for &row in rows.iter().rev() {
            self.table.remove_row(row);
        }
        if !rows.is_empty() {
            self.refresh_label();
        }
        rows.len()
    }

    /// Sets the value cell text of a row. Returns false if the row does not exist.
    pub fn set_value_text(&mut self, row: usize, text: impl Into<String>) -> bool {
        self.table.set_value_text(row, text)
    }

    /// Shows a numeric value in a row, formatted with the value precision.
    pub fn set_value(&mut self, row: usize, value: f64) -> bool {
        let text = format!("{:.*}", self.value_precision, value);
        self.table.set_value_text(row, text)
    }

    /// Decimal places used by [`set_value`](Self::set_value).
    pub fn value_precision(&self) -> usize {
        self.value_precision
    }

    /// Sets the decimal places used by [`set_value`](Self::set_value).
    pub fn set_value_precision(&mut self, precision: usize) {
        self.value_precision = precision;
    }

    /// The underlying table.
    pub fn table(&self) -> &CurveTable {
        &self.table
    }

    /// Returns true if the filter currently hides the row.
    pub fn is_row_hidden(&self, row: usize) -> bool {
        self.table.is_row_hidden(row)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects a row. Returns false for out-of-range rows.
    pub fn select_row(&mut self, row: usize) -> bool {
        self.table.select_row(row)
    }

    /// Deselects a row. Returns true if it was selected.
    pub fn deselect_row(&mut self, row: usize) -> bool {
        self.table.deselect_row(row)
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.table.clear_selection();
    }

    /// Selected row indices, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.table.selection().rows().collect()
    }

    /// Names of the selected rows, in row order.
    pub fn selected_names(&self) -> Vec<String> {
        self.table.selected_names()
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// The current filter text.
    pub fn filter_text(&self) -> String {
        self.filter_text.get()
    }

    /// Sets the filter text and re-evaluates if it changed.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        if self.filter_text.set(text.into()) {
            self.update_filter();
        }
    }

    /// The active match mode.
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode.get()
    }

    /// Switches the match mode and re-evaluates if it changed.
    pub fn set_match_mode(&mut self, mode: MatchMode) {
        if let Some(previous) = self.match_mode.replace(mode) {
            tracing::debug!(target: targets::FILTER, ?previous, ?mode, "match mode changed");
            self.update_filter();
        }
    }

    /// Whether the Contains radio button is checked.
    pub fn is_contains_checked(&self) -> bool {
        self.match_mode() == MatchMode::Contains
    }

    /// Whether the Wildcard radio button is checked.
    pub fn is_wildcard_checked(&self) -> bool {
        self.match_mode() == MatchMode::Wildcard
    }

    /// Handles a toggle of the Contains radio button.
    ///
    /// Checking it unchecks Wildcard. Unchecking it directly is ignored.
    pub fn on_contains_toggled(&mut self, checked: bool) {
        if checked {
            self.set_match_mode(MatchMode::Contains);
        }
    }

    /// Handles a toggle of the Wildcard radio button.
    ///
    /// Checking it unchecks Contains. Unchecking it directly is ignored.
    pub fn on_wildcard_toggled(&mut self, checked: bool) {
        if checked {
            self.set_match_mode(MatchMode::Wildcard);
        }
    }

    /// Whether matching distinguishes letter case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive.get()
    }

    /// Sets case sensitivity and re-evaluates if it changed.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        if self.case_sensitive.set(case_sensitive) {
            self.update_filter();
        }
    }

    /// The current filter inputs.
    pub fn filter_state(&self) -> FilterState {
        let mode = self.match_mode.get();
        let case_sensitive = self.case_sensitive.get();
        self.filter_text
            .with(|text| FilterState::new(mode, case_sensitive, text.as_str()))
    }

    /// Re-evaluates every row against the current filter.
    ///
    /// Updates the label and emits `hidden_items_changed` if at least one
    /// row changed visibility.
    pub fn update_filter(&mut self) -> FilterOutcome {
        let _span = PerfSpan::new(span_names::FILTER_PASS);

        let matcher = self.filter_state().matcher();
        let outcome = self.table.apply_filter(&matcher);

        tracing::debug!(
            target: targets::FILTER,
            visible = outcome.visible,
            total = outcome.total,
            flipped = outcome.flipped,
            "filter pass"
        );

        self.set_label(summary_label(outcome.visible, outcome.total));
        if outcome.changed() {
            self.hidden_items_changed.emit(());
        }
        outcome
    }

    /// The summary label, `"{visible} of {total}"`.
    pub fn label(&self) -> String {
        self.label.get()
    }

    fn set_label(&self, text: String) {
        if self.label.set(text.clone()) {
            self.filter_label_changed.emit(text);
        }
    }

    fn refresh_label(&self) {
        self.set_label(summary_label(
            self.table.visible_count(),
            self.table.row_count(),
        ));
    }

    // =========================================================================
    // Columns and settings panel
    // =========================================================================

    /// Whether the value column is hidden.
    pub fn is_value_column_hidden(&self) -> bool {
        self.table.is_column_hidden(VALUE_COLUMN)
    }

    /// Hides or shows the value column. Always emits `hidden_items_changed`.
    pub fn set_value_column_hidden(&mut self, hidden: bool) {
        if hidden {
            self.table.hide_column(VALUE_COLUMN);
        } else {
            self.table.show_column(VALUE_COLUMN);
        }
        self.hidden_items_changed.emit(());
    }

    /// The settings panel.
    pub fn settings_panel(&self) -> &SettingsPanel {
        &self.settings_panel
    }

    /// Whether the settings panel is expanded.
    pub fn is_settings_expanded(&self) -> bool {
        self.settings_panel.is_expanded()
    }

    /// Expands or collapses the settings panel.
    pub fn set_settings_expanded(&mut self, expanded: bool) {
        self.settings_panel.set_expanded(expanded);
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Snapshot of the persisted preferences.
    pub fn settings(&self) -> FilterSettings {
        FilterSettings {
            match_mode: self.match_mode(),
            case_sensitive: self.is_case_sensitive(),
            value_column_hidden: self.is_value_column_hidden(),
            settings_expanded: self.is_settings_expanded(),
            drag_distance: self.gesture.drag_distance(),
            value_precision: self.value_precision,
        }
    }

    /// Applies saved preferences and re-evaluates the filter.
    ///
    /// The value column notification fires only if its visibility changes.
    pub fn apply_settings(&mut self, settings: &FilterSettings) {
        tracing::debug!(target: targets::SETTINGS, ?settings, "applying settings");

        self.match_mode.set_silent(settings.match_mode);
        self.case_sensitive.set_silent(settings.case_sensitive);
        if settings.value_column_hidden != self.is_value_column_hidden() {
            self.set_value_column_hidden(settings.value_column_hidden);
        }
        self.settings_panel.set_expanded(settings.settings_expanded);
        self.gesture.set_drag_distance(settings.drag_distance);
        self.value_precision = settings.value_precision;

        self.update_filter();
    }

    /// Loads preferences from a `.toml` or `.json` file and applies them.
    ///
    /// A missing file applies the defaults.
    pub fn load_settings(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let settings = FilterSettings::load_or_default(path)?;
        self.apply_settings(&settings);
        Ok(())
    }

    /// Saves the current preferences to a `.toml` or `.json` file.
    pub fn save_settings(&self, path: impl AsRef<Path>) -> Result<()> {
        self.settings().save(path)?;
        Ok(())
    }

    // =========================================================================
    // Context menu and deletion
    // =========================================================================

    /// Builds the context menu.
    pub fn context_menu(&self) -> ContextMenu {
        let mut menu = ContextMenu::new();
        menu.add_action(
            MenuAction::new(ListAction::DeleteSelected, DELETE_ACTION_TEXT)
                .with_icon(DELETE_ACTION_ICON),
        );
        menu
    }

    /// Handles a context menu request on the table.
    ///
    /// Shows the menu at the request's global position and runs the chosen
    /// command. Returns the command, if one was chosen.
    pub fn handle_context_menu(&mut self, event: &ContextMenuEvent) -> Option<ListAction> {
        let menu = self.context_menu();
        let chosen = menu.exec(self.menu_presenter.as_mut(), event.global_pos);
        tracing::debug!(target: targets::MENU, ?chosen, reason = ?event.reason, "context menu closed");
        if let Some(action) = chosen {
            self.trigger(action);
        }
        chosen
    }

    /// Runs a list command.
    pub fn trigger(&mut self, action: ListAction) {
        match action {
            ListAction::DeleteSelected => {
                self.remove_selected_curves();
            }
        }
    }

    /// Asks for confirmation, then requests deletion of every selected curve.
    ///
    /// The selected names are collected before the first notification, so
    /// slots may change the selection freely. Returns the names for which
    /// `delete_curve` was emitted; empty if the user declined.
    pub fn remove_selected_curves(&mut self) -> Vec<String> {
        let question = MessageBox::question(DELETE_PROMPT_TITLE, DELETE_PROMPT_TEXT)
            .with_standard_buttons(StandardButton::YES | StandardButton::NO)
            .with_default_button(StandardButton::NO);

        if question.exec(self.prompt.as_mut()) != StandardButton::YES {
            tracing::debug!(target: targets::MENU, "curve deletion declined");
            return Vec::new();
        }

        let names = self.table.selected_names();
        tracing::info!(target: targets::MENU, count = names.len(), "deleting selected curves");
        for name in &names {
            self.delete_curve.emit(name.clone());
        }
        names
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Minimum pointer travel before a press turns into a drag.
    pub fn drag_distance(&self) -> f32 {
        self.gesture.drag_distance()
    }

    /// Sets the drag threshold.
    pub fn set_drag_distance(&mut self, distance: f32) {
        self.gesture.set_drag_distance(distance);
    }

    /// Starts a drag carrying the selected curve names.
    ///
    /// Blocks in the drag executor and returns the action the drop target
    /// performed.
    pub fn start_drag(&mut self) -> DropAction {
        let _span = tracing::info_span!(target: targets::DRAG, "drag").entered();
        let _perf = PerfSpan::new(span_names::DRAG);

        let names = self.table.selected_names();
        tracing::info!(target: targets::DRAG, count = names.len(), "starting drag");

        let data = DragData::from_curve_names(&names);
        let action = self
            .drag_executor
            .exec(data, DropAction::COPY | DropAction::MOVE);

        tracing::debug!(target: targets::DRAG, ?action, "drag finished");
        self.drag_finished.emit(action);
        action
    }
}

impl InputEventFilter for FilterableListWidget {
    fn mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if self.gesture.press(event) {
            tracing::trace!(target: targets::DRAG, pos = ?event.pos, "press recorded");
        }
        false
    }

    fn mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if self.gesture.should_start(event) {
            self.start_drag();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use super::*;
    use crate::widget::events::{KeyboardModifiers, MouseButton, MouseButtons, Point};
    use crate::widget::settings_panel::SettingsControl;

    fn list(names: &[&str]) -> FilterableListWidget {
        let mut list = FilterableListWidget::new();
        for name in names {
            list.add_item(*name);
        }
        list
    }

    fn visible_names(list: &FilterableListWidget) -> Vec<String> {
        list.table()
            .rows()
            .filter(|row| !row.is_hidden())
            .map(|row| row.name().to_string())
            .collect()
    }

    fn count_emissions(signal: &Signal<()>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        signal.connect(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[test]
    fn test_initial_state() {
        let list = FilterableListWidget::new();
        assert_eq!(list.label(), "0 of 0");
        assert!(list.is_contains_checked());
        assert!(!list.is_case_sensitive());
        assert!(!list.is_settings_expanded());
        assert_eq!(list.drag_distance(), 10.0);
    }

    #[test]
    fn test_add_item_value_cell() {
        let mut list = list(&["Alpha"]);
        let value = list.table().value(0).unwrap();
        assert_eq!(value.text(), "-");
        assert!(!value.flags().selectable);
        assert!(!value.flags().editable);

        assert!(list.set_value(0, 1.23456));
        assert_eq!(list.table().value(0).unwrap().text(), "1.235");
        list.set_value_precision(1);
        list.set_value(0, 2.0);
        assert_eq!(list.table().value(0).unwrap().text(), "2.0");
        assert!(!list.set_value_text(3, "x"));
    }

    #[test]
    fn test_contains_filter_examples() {
        let mut list = list(&["Alpha", "Beta", "Gamma"]);

        list.set_filter_text("a");
        assert_eq!(visible_names(&list), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(list.label(), "3 of 3");

        list.set_case_sensitive(true);
        list.set_filter_text("Be");
        assert_eq!(visible_names(&list), vec!["Beta"]);
        assert_eq!(list.label(), "1 of 3");
    }

    #[test]
    fn test_wildcard_filter_example() {
        let mut list = list(&["Alpha", "Beta", "Gamma"]);
        list.on_wildcard_toggled(true);
        list.set_filter_text("A*");
        assert_eq!(visible_names(&list), vec!["Alpha"]);
        assert_eq!(list.label(), "1 of 3");
    }

    #[test]
    fn test_mode_radios_are_exclusive() {
        let mut list = list(&["Alpha"]);
        list.on_wildcard_toggled(true);
        assert!(list.is_wildcard_checked());
        assert!(!list.is_contains_checked());

        list.on_wildcard_toggled(false);
        assert!(list.is_wildcard_checked());

        list.on_contains_toggled(true);
        assert!(list.is_contains_checked());
        assert!(!list.is_wildcard_checked());
    }

    #[test]
    fn test_mode_switch_recomputes_with_current_text() {
        let mut list = list(&["Alpha", "Beta"]);
        list.set_filter_text("Al");
        assert_eq!(list.label(), "1 of 2");

        // "Al" as an anchored wildcard matches neither name.
        list.on_wildcard_toggled(true);
        assert_eq!(list.label(), "0 of 2");
    }

    #[test]
    fn test_hidden_items_changed_only_on_flip() {
        let mut list = list(&["Alpha", "Beta", "Gamma"]);
        let count = count_emissions(&list.hidden_items_changed);

        list.set_filter_text("a");
        assert_eq!(count.load(Ordering::SeqCst), 0);

        list.set_filter_text("Be");
        assert_eq!(count.load(Ordering::SeqCst), 1);

        list.update_filter();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_case_toggle_keeps_row_count() {
        let mut list = list(&["Alpha", "alpha", "BETA"]);
        list.set_filter_text("alpha");
        list.set_case_sensitive(true);
        assert_eq!(list.row_count(), 3);
        assert_eq!(list.label(), "1 of 3");
        list.set_case_sensitive(false);
        assert_eq!(list.row_count(), 3);
        assert_eq!(list.label(), "2 of 3");
    }

    #[test]
    fn test_clear_resets_label() {
        let mut list = list(&["Alpha", "Beta"]);
        list.select_row(0);
        list.update_filter();
        assert_eq!(list.label(), "2 of 2");

        let labels = Arc::new(Mutex::new(Vec::new()));
        let sink = labels.clone();
        list.filter_label_changed
            .connect(move |text| sink.lock().push(text.clone()));

        list.clear();
        assert_eq!(list.row_count(), 0);
        assert_eq!(list.label(), "0 of 0");
        assert!(list.selected_names().is_empty());
        assert_eq!(*labels.lock(), vec!["0 of 0".to_string()]);
    }

    #[test]
    fn test_rows_added_after_filter_stay_visible_until_next_pass() {
        let mut list = list(&["Alpha"]);
        list.set_filter_text("Beta");
        assert!(list.is_row_hidden(0));

        let row = list.add_item("Gamma");
        assert!(!list.is_row_hidden(row));
        list.update_filter();
        assert!(list.is_row_hidden(row));
    }

    #[test]
    fn test_find_and_remove() {
        let mut list = list(&["speed", "rpm", "speed"]);
        assert_eq!(list.find_rows_by_name("speed"), vec![0, 2]);
        assert_eq!(list.remove_curve("speed"), 2);
        assert_eq!(list.row_count(), 1);
        assert_eq!(list.label(), "1 of 1");
        assert_eq!(list.remove_row(0), Some("rpm".to_string()));
        assert_eq!(list.remove_row(0), None);
        assert_eq!(list.remove_curve("absent"), 0);
    }

    #[test]
    fn test_value_column_toggle_emits_both_ways() {
        let mut list = list(&["Alpha"]);
        let count = count_emissions(&list.hidden_items_changed);

        list.set_value_column_hidden(true);
        assert!(list.is_value_column_hidden());
        list.set_value_column_hidden(false);
        assert!(!list.is_value_column_hidden());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_settings_panel_toggle() {
        let mut list = FilterableListWidget::new();
        list.set_settings_expanded(true);
        let geometry = list
            .settings_panel()
            .geometry(SettingsControl::CaseSensitiveCheck)
            .unwrap();
        assert_eq!(geometry.max_height, 25.0);
        assert!(geometry.visible);

        list.set_settings_expanded(false);
        assert!(
            list.settings_panel()
                .controls()
                .all(|(_, g)| g.max_height == 0.0 && !g.visible)
        );
    }

    #[test]
    fn test_delete_declined_by_default() {
        let mut list = list(&["Alpha"]);
        list.select_row(0);
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        list.delete_curve.connect(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        assert!(list.remove_selected_curves().is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_delete_confirmed_emits_each_name_once() {
        let questions = Arc::new(Mutex::new(Vec::new()));
        let seen = questions.clone();
        let mut list = FilterableListWidget::new().with_prompt(move |message: &MessageBox| {
            seen.lock().push((message.title().to_string(), message.default_button()));
            StandardButton::YES
        });
        for name in ["a", "b", "c"] {
            list.add_item(name);
        }
        list.select_row(2);
        list.select_row(0);

        let deleted = Arc::new(Mutex::new(Vec::new()));
        let sink = deleted.clone();
        list.delete_curve.connect(move |name| sink.lock().push(name.clone()));

        list.trigger(ListAction::DeleteSelected);
        assert_eq!(*deleted.lock(), vec!["a".to_string(), "c".to_string()]);
        assert_eq!(
            *questions.lock(),
            vec![("Warning".to_string(), StandardButton::NO)]
        );
        // Rows stay until the owner removes them.
        assert_eq!(list.row_count(), 3);
    }

    #[test]
    fn test_confirmed_delete_without_selection_emits_nothing() {
        let mut list = list(&["a", "b"]).with_prompt(|_: &MessageBox| StandardButton::YES);
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        list.delete_curve.connect(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        assert!(list.remove_selected_curves().is_empty());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(list.row_count(), 2);
    }

    #[test]
    fn test_settings_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");

        let mut list = list(&["Alpha"]);
        list.set_case_sensitive(true);
        list.set_drag_distance(3.0);
        list.save_settings(&path).unwrap();

        let mut restored = FilterableListWidget::new();
        restored.load_settings(&path).unwrap();
        assert_eq!(restored.settings(), list.settings());

        let err = restored.save_settings(dir.path().join("list.ini")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CurveListError::Settings(crate::error::SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_context_menu() {
        struct PickFirst;
        impl MenuPresenter for PickFirst {
            fn exec(&mut self, menu: &ContextMenu, _global_pos: Point) -> Option<usize> {
                assert_eq!(menu.actions()[0].text(), DELETE_ACTION_TEXT);
                Some(0)
            }
        }

        let mut list = list(&["Alpha"]).with_menu_presenter(PickFirst);
        let event = ContextMenuEvent::from_mouse(Point::new(3.0, 4.0), Point::new(103.0, 104.0));
        assert_eq!(
            list.handle_context_menu(&event),
            Some(ListAction::DeleteSelected)
        );

        let mut dismissed = FilterableListWidget::new();
        assert_eq!(dismissed.handle_context_menu(&event), None);
    }

    #[test]
    fn test_drag_after_threshold() {
        let payloads = Arc::new(Mutex::new(Vec::new()));
        let sink = payloads.clone();

        struct Record(Arc<Mutex<Vec<(DragData, DropAction)>>>);
        impl DragExecutor for Record {
            fn exec(&mut self, data: DragData, supported: DropAction) -> DropAction {
                self.0.lock().push((data, supported));
                DropAction::COPY
            }
        }

        let mut list = list(&["x", "y"]).with_drag_executor(Record(sink));
        list.select_row(1);

        let press = MousePressEvent::new(MouseButton::Left, Point::new(0.0, 0.0), KeyboardModifiers::NONE);
        assert!(!list.mouse_press(&press));

        let near = MouseMoveEvent::new(Point::new(4.0, 5.0), MouseButtons::LEFT, KeyboardModifiers::NONE);
        assert!(!list.mouse_move(&near));
        assert!(payloads.lock().is_empty());

        let far = MouseMoveEvent::new(Point::new(5.0, 5.0), MouseButtons::LEFT, KeyboardModifiers::NONE);
        assert!(!list.mouse_move(&far));

        let recorded = payloads.lock();
        assert_eq!(recorded.len(), 1);
        let (data, supported) = &recorded[0];
        assert_eq!(*supported, DropAction::COPY | DropAction::MOVE);
        assert_eq!(data.curve_names(), Some(Ok(vec!["y".to_string()])));
    }

    #[test]
    fn test_settings_round_trip() {
        let mut list = list(&["Alpha", "Beta"]);
        list.set_filter_text("A*");
        let settings = FilterSettings {
            match_mode: MatchMode::Wildcard,
            case_sensitive: true,
            value_column_hidden: true,
            settings_expanded: true,
            drag_distance: 4.0,
            value_precision: 1,
        };

        list.apply_settings(&settings);
        assert_eq!(list.settings(), settings);
        assert_eq!(list.label(), "1 of 2");

        let restored = FilterableListWidget::with_settings(&settings);
        assert!(restored.is_wildcard_checked());
        assert_eq!(restored.label(), "0 of 0");
    }
}
