//! In-memory admin surface for headless hosts and tests.
//!
//! [`InMemorySurface`] records everything the controller displays and
//! answers prompts and confirmations from queues filled in advance.  Every
//! control exists and starts empty unless removed with
//! [`InMemorySurface::remove_control`], which mimics a page whose markup
//! lacks that element.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use crate::application::admin::{AdminSurface, FieldRow};
use crate::application::controls::{AdminTab, Control, Label, SettingsIndicator};
use crate::application::theme_engine::{
    EditorControls, StyleSurface, ThemeCard, ThemeGridView,
};
use crate::application::toast::ToastSink;

/// A display surface that lives entirely in memory.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    style_vars: BTreeMap<String, String>,
    controls: HashMap<Control, String>,
    removed_controls: HashSet<Control>,
    labels: HashMap<Label, String>,
    editor_read_only: bool,
    theme_cards: Vec<ThemeCard>,
    grid_renders: usize,
    field_rows: Option<Vec<FieldRow>>,
    show_desc_toggle: bool,
    active_tab: AdminTab,
    panel_open: bool,
    panel_label: String,
    indicator: Option<SettingsIndicator>,
    prompt_answers: VecDeque<Option<String>>,
    confirm_answers: VecDeque<bool>,
    prompt_messages: Vec<String>,
    confirm_messages: Vec<String>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Input simulation ──────────────────────────────────────────────────────

    /// Makes `control` absent from the surface.
    pub fn remove_control(&mut self, control: Control) {
        self.controls.remove(&control);
        self.removed_controls.insert(control);
    }

    /// Types `value` into `control` without notifying anyone.
    pub fn type_into(&mut self, control: Control, value: &str) {
        self.set_control_value(control, value);
    }

    /// Queues the answer to the next prompt; `None` dismisses it.
    pub fn queue_prompt(&mut self, answer: Option<&str>) {
        self.prompt_answers.push_back(answer.map(str::to_string));
    }

    /// Queues the answer to the next confirmation.  Unqueued confirmations
    /// are declined.
    pub fn queue_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Moves the field row at `from` to position `to`, like a finished drag.
    ///
    /// Returns `false` when the fields tab is not rendered or an index is out
    /// of range.
    pub fn drag_field_row(&mut self, from: usize, to: usize) -> bool {
        let Some(rows) = self.field_rows.as_mut() else {
            return false;
        };
        if from >= rows.len() || to >= rows.len() {
            return false;
        }
        let row = rows.remove(from);
        rows.insert(to, row);
        true
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    pub fn style_vars(&self) -> &BTreeMap<String, String> {
        &self.style_vars
    }

    pub fn control(&self, control: Control) -> Option<&str> {
        self.controls.get(&control).map(String::as_str)
    }

    pub fn label(&self, label: Label) -> Option<&str> {
        self.labels.get(&label).map(String::as_str)
    }

    pub fn editor_read_only(&self) -> bool {
        self.editor_read_only
    }

    pub fn theme_cards(&self) -> &[ThemeCard] {
        &self.theme_cards
    }

    /// How many times the theme grid was rebuilt.
    pub fn grid_renders(&self) -> usize {
        self.grid_renders
    }

    pub fn field_rows(&self) -> &[FieldRow] {
        self.field_rows.as_deref().unwrap_or_default()
    }

    pub fn show_desc_toggle(&self) -> bool {
        self.show_desc_toggle
    }

    pub fn active_tab(&self) -> AdminTab {
        self.active_tab
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn panel_label(&self) -> &str {
        &self.panel_label
    }

    pub fn indicator(&self) -> Option<SettingsIndicator> {
        self.indicator
    }

    pub fn prompt_messages(&self) -> &[String] {
        &self.prompt_messages
    }

    pub fn confirm_messages(&self) -> &[String] {
        &self.confirm_messages
    }
}

impl StyleSurface for InMemorySurface {
    fn set_style_var(&mut self, name: &str, value: &str) {
        self.style_vars.insert(name.to_string(), value.to_string());
    }
}

impl EditorControls for InMemorySurface {
    fn control_value(&self, control: Control) -> Option<String> {
        if self.removed_controls.contains(&control) {
            return None;
        }
        Some(self.controls.get(&control).cloned().unwrap_or_default())
    }

    fn set_control_value(&mut self, control: Control, value: &str) -> bool {
        if self.removed_controls.contains(&control) {
            return false;
        }
        self.controls.insert(control, value.to_string());
        true
    }
}

impl ThemeGridView for InMemorySurface {
    fn render_theme_grid(&mut self, cards: &[ThemeCard]) {
        self.theme_cards = cards.to_vec();
        self.grid_renders += 1;
    }
}

impl AdminSurface for InMemorySurface {
    fn set_label(&mut self, label: Label, text: &str) -> bool {
        self.labels.insert(label, text.to_string());
        true
    }

    fn set_editor_read_only(&mut self, read_only: bool) {
        self.editor_read_only = read_only;
    }

    fn render_field_rows(&mut self, rows: &[FieldRow]) {
        self.field_rows = Some(rows.to_vec());
    }

    fn field_row_order(&self) -> Option<Vec<String>> {
        self.field_rows
            .as_ref()
            .map(|rows| rows.iter().map(|r| r.name.clone()).collect())
    }

    fn set_show_desc_toggle(&mut self, checked: bool) {
        self.show_desc_toggle = checked;
    }

    fn set_active_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
    }

    fn set_panel_open(&mut self, open: bool, toggle_label: &str) {
        self.panel_open = open;
        self.panel_label = toggle_label.to_string();
    }

    fn set_settings_indicator(&mut self, indicator: SettingsIndicator) {
        self.indicator = Some(indicator);
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompt_messages.push(message.to_string());
        self.prompt_answers.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirm_messages.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }
}

// ── Toast sink ────────────────────────────────────────────────────────────────

/// A toast sink that remembers what it was asked to show.
#[derive(Debug, Default)]
pub struct InMemoryToast {
    visible: Mutex<Option<String>>,
    history: Mutex<Vec<String>>,
}

impl InMemoryToast {
    /// The currently visible message, if any.
    pub fn visible(&self) -> Option<String> {
        self.visible.lock().ok().and_then(|v| v.clone())
    }

    /// Every message shown so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }
}

impl ToastSink for InMemoryToast {
    fn show(&self, message: &str) {
        if let Ok(mut visible) = self.visible.lock() {
            *visible = Some(message.to_string());
        }
        if let Ok(mut history) = self.history.lock() {
            history.push(message.to_string());
        }
    }

    fn hide(&self) {
        if let Ok(mut visible) = self.visible.lock() {
            *visible = None;
        }
    }
}
