//! AdminController: the admin panel's use cases.
//!
//! The controller owns the session [`Configuration`] and is the only thing
//! that mutates it.  Every user gesture on the panel (typing into a control,
//! clicking a theme card, dragging a field row, pressing Preview / Discard /
//! Save) arrives as a method call here.  The controller applies the domain
//! rule, then tells the surface what to show and the host what happened.
//!
//! # Who does what? (for beginners)
//!
//! ```text
//!   surface (page / window / test fake)
//!        │ user gestures            ▲ display updates
//!        ▼                          │
//!   AdminController ── owns ──► Configuration (storefront-core)
//!        │
//!        ▼ notifications
//!   host (on_save / on_preview / on_discard / rerender / on_folder_load)
//! ```
//!
//! - The **surface** ([`AdminSurface`]) knows how to display things and how
//!   to ask the user a question.  It holds no state the controller relies on
//!   except the values currently typed into its controls.
//! - The **host** ([`HostHooks`]) is the rest of the storefront: it renders
//!   the product grid, writes the exported file and scans product folders.
//!
//! # Live edits and the read-only guard
//!
//! Theme editor input is written straight into the active theme, but only if
//! that theme is editable.  Built-in themes reject every write; the editor is
//! also shown read-only for them, but the controller does not rely on that.

use std::sync::Arc;
use std::time::Duration;

use storefront_core::{Configuration, ContactKey, SettingsError, ThemeError, BUILTIN_THEME_IDS};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::controls::{AdminTab, Control, Label, SettingsIndicator};
use super::folder::{DirectoryHandle, DroppedItem, FolderPicker, PickerError};
use super::theme_engine::{
    apply_theme, populate_theme_editor, read_theme_editor, render_theme_grid, EditorControls,
    StyleSurface, ThemeGridEvent, ThemeGridView,
};
use super::toast::{ToastSink, Toaster, DEFAULT_TOAST_DURATION};

/// Toggle button label while the panel is closed.
pub const PANEL_CLOSED_LABEL: &str = "⚙ Admin";
/// Toggle button label while the panel is open.
pub const PANEL_OPEN_LABEL: &str = "× Admin";

const PREVIEW_TOAST: &str = "Preview applied — not saved yet";
const DISCARD_TOAST: &str = "Changes discarded";
const SAVE_FAILED_TOAST: &str = "Could not export settings";
const NEW_THEME_PROMPT: &str = "New theme name:";
const NO_FOLDER: &str = "None";

/// Error type for the admin use cases.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("could not export settings: {0}")]
    Export(#[from] SettingsError),

    #[error("host rejected the export: {0}")]
    Host(String),
}

/// The serialized configuration handed to the host on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsExport {
    pub file_name: String,
    pub json: String,
}

/// One row of the fields tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    /// State of the row's own toggle, independent of the description switch.
    pub visible: bool,
}

/// Result of routing one theme editor input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The value was written to the active theme.
    Applied,
    /// The active theme is built-in; nothing was written.
    ReadOnly,
    /// The value does not parse for the attribute; nothing was written.
    Invalid,
    /// The control is not a theme editor control.
    Ignored,
}

/// Everything the controller needs from the display side.
pub trait AdminSurface: StyleSurface + EditorControls + ThemeGridView {
    /// Sets the text of a label.  Returns `false` if the label is absent.
    fn set_label(&mut self, label: Label, text: &str) -> bool;

    fn set_editor_read_only(&mut self, read_only: bool);

    /// Replaces the field rows of the fields tab.
    fn render_field_rows(&mut self, rows: &[FieldRow]);

    /// Field names in the order the rows are currently shown.
    ///
    /// `None` when the fields tab is not rendered.
    fn field_row_order(&self) -> Option<Vec<String>>;

    fn set_show_desc_toggle(&mut self, checked: bool);

    fn set_active_tab(&mut self, tab: AdminTab);

    fn set_panel_open(&mut self, open: bool, toggle_label: &str);

    fn set_settings_indicator(&mut self, indicator: SettingsIndicator);

    /// Asks the user for text.  `None` means the prompt was dismissed.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Asks the user a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Notifications from the controller to the hosting storefront.
#[cfg_attr(test, mockall::automock)]
pub trait HostHooks {
    /// Persist or download the exported settings.
    fn on_save(&mut self, export: &SettingsExport) -> Result<(), String>;

    fn on_preview(&mut self);

    /// Restore `config` to the last persisted settings.
    fn on_discard(&mut self, config: &mut Configuration);

    /// Re-render the product display from `config`.
    fn rerender(&mut self, config: &Configuration);

    /// Scan `directory` for products.
    fn on_folder_load(&mut self, directory: DirectoryHandle);
}

/// Host-level options for a controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminOptions {
    /// File name offered for the exported settings.
    pub export_file_name: String,
    pub toast_duration: Duration,
}

impl Default for AdminOptions {
    fn default() -> Self {
        Self {
            export_file_name: "settings.json".to_string(),
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }
}

/// Drives the admin panel for one session.
pub struct AdminController<S, H> {
    config: Configuration,
    surface: S,
    hooks: H,
    toaster: Toaster,
    options: AdminOptions,
    active_tab: AdminTab,
    panel_open: bool,
    session_id: Uuid,
}

impl<S: AdminSurface, H: HostHooks> AdminController<S, H> {
    /// Creates the controller and brings the surface in line with `config`:
    /// the active theme is applied, the panel starts closed on the design
    /// tab and every control is populated.
    ///
    /// `config` is repaired first, whatever path it was deserialized by.
    pub fn new(
        mut config: Configuration,
        surface: S,
        hooks: H,
        toast_sink: Arc<dyn ToastSink>,
        options: AdminOptions,
    ) -> Self {
        config.repair();
        let toaster = Toaster::new(toast_sink, options.toast_duration);
        let mut controller = Self {
            config,
            surface,
            hooks,
            toaster,
            options,
            active_tab: AdminTab::default(),
            panel_open: false,
            session_id: Uuid::new_v4(),
        };
        info!(
            session = %controller.session_id,
            loaded = controller.config.loaded,
            theme = controller.config.current_theme_id(),
            "admin session started"
        );
        controller.surface.set_active_tab(controller.active_tab);
        controller
            .surface
            .set_panel_open(controller.panel_open, PANEL_CLOSED_LABEL);
        controller.apply_active_theme();
        controller.populate_admin();
        controller
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, for delivering user input in hosts and tests.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn active_tab(&self) -> AdminTab {
        self.active_tab
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Ends the session, handing back the configuration.
    pub fn into_config(self) -> Configuration {
        self.config
    }

    // ── Panel chrome ──────────────────────────────────────────────────────────

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
        self.surface.set_active_tab(tab);
        if tab == AdminTab::Fields {
            self.render_fields_tab();
        }
        debug!(tab = tab.dom_id(), "admin tab selected");
    }

    /// Opens or closes the panel.  Control values are left as typed.
    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
        let label = if self.panel_open {
            PANEL_OPEN_LABEL
        } else {
            PANEL_CLOSED_LABEL
        };
        self.surface.set_panel_open(self.panel_open, label);
    }

    /// Mirrors design text controls into the page header while typing.
    ///
    /// The configuration itself is only updated on preview or save.
    pub fn on_design_input(&mut self, control: Control, value: &str) {
        if let Some(label) = Label::mirror_of(control) {
            self.surface.set_label(label, value);
        }
    }

    /// Writes every configuration value into the admin controls.
    pub fn populate_admin(&mut self) {
        let text_controls = [
            (Control::StoreName, self.config.store_name.as_str()),
            (Control::HeroTitle, self.config.hero_title.as_str()),
            (Control::HeroSub, self.config.hero_sub.as_str()),
        ];
        for (control, value) in text_controls {
            self.surface.set_control_value(control, value);
        }
        for key in ContactKey::ALL {
            self.surface
                .set_control_value(Control::Contact(key), self.config.contact.get(key));
        }

        self.refresh_theme_editor();
        render_theme_grid(&mut self.surface, &self.config);
        self.render_fields_tab();
        self.surface
            .set_settings_indicator(SettingsIndicator::from_loaded(self.config.loaded));
        self.update_session_info();
    }

    // ── Themes ────────────────────────────────────────────────────────────────

    /// Routes one input event from the theme editor.
    ///
    /// Accepted color values are copied into the paired text/picker control.
    pub fn on_theme_editor_input(&mut self, control: Control, value: &str) -> EditOutcome {
        let Some(attr) = control.theme_attr() else {
            return EditOutcome::Ignored;
        };
        let id = self.config.current_theme_id().to_string();
        match self.config.set_theme_attr(&id, attr, value) {
            Ok(()) => {
                if let Some(paired) = control.paired() {
                    self.surface.set_control_value(paired, value);
                }
                EditOutcome::Applied
            }
            Err(ThemeError::ReadOnly(_)) => {
                debug!(theme = %id, attribute = %attr, "edit rejected: built-in theme");
                EditOutcome::ReadOnly
            }
            Err(e @ ThemeError::InvalidValue { .. }) => {
                debug!(error = %e, "edit rejected");
                EditOutcome::Invalid
            }
            Err(e) => {
                warn!(theme = %id, error = %e, "edit failed");
                EditOutcome::Ignored
            }
        }
    }

    /// Prompts for a name and a base theme, then creates the theme.
    ///
    /// Returns the new id, or `None` if the user backed out.
    pub fn create_theme_interactive(&mut self) -> Option<String> {
        let name = self.surface.prompt(NEW_THEME_PROMPT)?;
        if name.trim().is_empty() {
            return None;
        }
        let menu: Vec<String> = self
            .config
            .builtin_choices()
            .iter()
            .enumerate()
            .map(|(i, (_, display))| format!("{}. {display}", i + 1))
            .collect();
        let pick = self
            .surface
            .prompt(&format!("Base theme:\n{}", menu.join("\n")));
        self.create_theme(&name, pick.as_deref()).ok()
    }

    /// Creates a custom theme named `name` and makes it active.
    ///
    /// `base_pick` is a 1-based position in the built-in list.  A missing or
    /// out-of-range pick copies the active theme instead.
    ///
    /// # Errors
    ///
    /// [`ThemeError::EmptyName`] for a blank name; nothing changes.
    pub fn create_theme(
        &mut self,
        name: &str,
        base_pick: Option<&str>,
    ) -> Result<String, AdminError> {
        let base = base_pick.and_then(builtin_from_ordinal);
        let id = self.config.create_custom_theme(name, base)?;
        self.after_theme_change();
        Ok(id)
    }

    pub fn handle_theme_grid_event(&mut self, event: ThemeGridEvent) {
        let result = match event {
            ThemeGridEvent::Select(id) => self.switch_theme(&id),
            ThemeGridEvent::Delete(id) => self.delete_theme(&id).map(|_| ()),
        };
        if let Err(e) = result {
            warn!(error = %e, "theme grid action failed");
        }
    }

    /// Makes `id` the active theme and refreshes everything that shows it.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] for unknown ids; nothing changes.
    pub fn switch_theme(&mut self, id: &str) -> Result<(), AdminError> {
        self.config.switch_theme(id)?;
        self.after_theme_change();
        Ok(())
    }

    /// Deletes a custom theme after the user confirms.
    ///
    /// Returns `Ok(false)` if the user declined.
    ///
    /// # Errors
    ///
    /// [`ThemeError::ReadOnly`] for built-ins, [`ThemeError::NotFound`] for
    /// unknown ids.  The user is not asked in either case.
    pub fn delete_theme(&mut self, id: &str) -> Result<bool, AdminError> {
        self.config.ensure_editable(id)?;
        let Some(name) = self.config.theme(id).map(|t| t.name.clone()) else {
            return Err(ThemeError::NotFound(id.to_string()).into());
        };
        if !self.surface.confirm(&format!("Delete theme \"{name}\"?")) {
            debug!(theme = id, "delete declined");
            return Ok(false);
        }

        let active_changed = self.config.delete_theme(id)?;
        if active_changed {
            self.after_theme_change();
        } else {
            render_theme_grid(&mut self.surface, &self.config);
        }
        Ok(true)
    }

    fn after_theme_change(&mut self) {
        self.apply_active_theme();
        self.refresh_theme_editor();
        render_theme_grid(&mut self.surface, &self.config);
        self.hooks.rerender(&self.config);
    }

    fn apply_active_theme(&mut self) {
        match self.config.active_theme() {
            Some(theme) => apply_theme(&mut self.surface, theme),
            None => warn!(theme = self.config.current_theme_id(), "active theme missing"),
        }
    }

    fn refresh_theme_editor(&mut self) {
        if let Some(theme) = self.config.active_theme() {
            populate_theme_editor(&mut self.surface, theme);
        }
        let read_only = !self.config.is_editable(self.config.current_theme_id());
        self.surface.set_editor_read_only(read_only);
    }

    // ── Fields ────────────────────────────────────────────────────────────────

    /// Renders one row per known field plus the description switch.
    pub fn render_fields_tab(&mut self) {
        let rows: Vec<FieldRow> = self
            .config
            .field_order()
            .iter()
            .map(|name| FieldRow {
                name: name.clone(),
                visible: self.config.is_field_enabled(name),
            })
            .collect();
        self.surface.render_field_rows(&rows);
        self.surface.set_show_desc_toggle(self.config.show_desc);
    }

    /// Handles a row toggle.
    pub fn set_field_visible(&mut self, field: &str, visible: bool) {
        self.config.set_field_visible(field, visible);
        debug!(field, visible, "field visibility changed");
        self.hooks.rerender(&self.config);
    }

    /// Handles the global description switch.
    pub fn set_show_description(&mut self, show: bool) {
        self.config.show_desc = show;
        self.hooks.rerender(&self.config);
    }

    /// Adopts the row order after a drag-and-drop reorder finishes.
    pub fn on_field_drag_end(&mut self) {
        let Some(order) = self.surface.field_row_order() else {
            debug!("drag ended without a rendered fields tab");
            return;
        };
        self.config.set_field_order(order);
        self.hooks.rerender(&self.config);
    }

    /// Merges the field names found by a folder scan into the configuration.
    pub fn update_fields_tab<T: AsRef<str>>(&mut self, all_fields: &[T]) {
        let added = self.config.merge_fields(all_fields);
        if added > 0 {
            info!(added, total = self.config.field_order().len(), "new product fields discovered");
        }
        self.render_fields_tab();
        self.update_session_info();
    }

    // ── Folder ────────────────────────────────────────────────────────────────

    /// Shows the loaded folder name (or "None") in the panel and session bar.
    pub fn update_session_info(&mut self) {
        let folder = if self.config.folder_name.is_empty() {
            NO_FOLDER
        } else {
            self.config.folder_name.as_str()
        };
        for label in [Label::CurrentFolder, Label::SessionFolder] {
            self.surface.set_label(label, folder);
        }
    }

    /// Records the folder the host finished loading.
    pub fn set_folder_name(&mut self, name: impl Into<String>) {
        self.config.folder_name = name.into();
        self.update_session_info();
    }

    /// Forgets the loaded folder name.
    pub fn clear_folder(&mut self) {
        self.config.folder_name.clear();
        self.update_session_info();
        info!("folder cleared");
    }

    /// Asks `picker` for a directory and hands it to the host.
    ///
    /// Returns `true` if a directory was chosen.  Cancellation is silent.
    pub async fn pick_folder<P: FolderPicker + ?Sized>(&mut self, picker: &P) -> bool {
        match picker.pick_directory().await {
            Ok(directory) => {
                self.load_folder(directory);
                true
            }
            Err(PickerError::Cancelled) => {
                debug!("folder pick cancelled");
                false
            }
            Err(e) => {
                warn!(error = %e, "folder pick failed");
                false
            }
        }
    }

    /// Handles a drop on the folder zone.  Only directories are accepted.
    pub fn drop_folder(&mut self, item: DroppedItem) -> bool {
        match item {
            DroppedItem::Directory(directory) => {
                self.load_folder(directory);
                true
            }
            other => {
                debug!(item = ?other, "drop ignored: not a directory");
                false
            }
        }
    }

    fn load_folder(&mut self, directory: DirectoryHandle) {
        info!(folder = %directory.name, path = %directory.path.display(), "folder selected");
        self.hooks.on_folder_load(directory);
    }

    // ── Preview / discard / save ──────────────────────────────────────────────

    /// Applies the panel's values to the live storefront without saving.
    pub fn preview(&mut self) {
        self.read_admin_into_config();
        self.apply_active_theme();
        self.hooks.rerender(&self.config);
        self.hooks.on_preview();
        self.toaster.show(PREVIEW_TOAST);
    }

    /// Lets the host restore the persisted settings, then repopulates.
    pub fn discard(&mut self) {
        self.hooks.on_discard(&mut self.config);
        self.config.repair();
        self.apply_active_theme();
        self.populate_admin();
        self.hooks.rerender(&self.config);
        self.toaster.show(DISCARD_TOAST);
        info!(session = %self.session_id, "changes discarded");
    }

    /// Reads the panel into the configuration and hands the export to the host.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Export`] if the configuration cannot be serialized.
    /// - [`AdminError::Host`] if the host fails to store the export.
    pub fn save(&mut self) -> Result<(), AdminError> {
        self.read_admin_into_config();
        let json = self.config.to_settings_json().map_err(|e| {
            warn!(error = %e, "settings export failed");
            self.toaster.show(SAVE_FAILED_TOAST);
            AdminError::from(e)
        })?;
        let export = SettingsExport {
            file_name: self.options.export_file_name.clone(),
            json,
        };
        if let Err(e) = self.hooks.on_save(&export) {
            warn!(error = %e, "host failed to store settings");
            self.toaster.show(SAVE_FAILED_TOAST);
            return Err(AdminError::Host(e));
        }
        info!(
            session = %self.session_id,
            file = %export.file_name,
            bytes = export.json.len(),
            "settings exported"
        );
        self.toaster
            .show(&format!("{} downloaded — replace file ✓", export.file_name));
        Ok(())
    }

    /// Copies every admin control value into the configuration.
    ///
    /// Absent controls leave their value unchanged.  Theme values are only
    /// read when the active theme is editable.
    fn read_admin_into_config(&mut self) {
        let text_fields = [
            (Control::StoreName, &mut self.config.store_name, Label::StoreName),
            (Control::HeroTitle, &mut self.config.hero_title, Label::HeroTitle),
            (Control::HeroSub, &mut self.config.hero_sub, Label::HeroSub),
        ];
        for (control, slot, label) in text_fields {
            if let Some(value) = self.surface.control_value(control) {
                *slot = value;
            }
            self.surface.set_label(label, slot);
        }

        for key in ContactKey::ALL {
            if let Some(value) = self.surface.control_value(Control::Contact(key)) {
                self.config.contact.set(key, value);
            }
        }

        let id = self.config.current_theme_id().to_string();
        if self.config.is_editable(&id) {
            if let Some(theme) = self.config.theme(&id) {
                let edited = read_theme_editor(&self.surface, theme);
                if let Err(e) = self.config.replace_theme(&id, edited) {
                    warn!(theme = %id, error = %e, "could not store edited theme");
                }
            }
        }
    }
}

/// Maps a 1-based built-in position to its id.
fn builtin_from_ordinal(pick: &str) -> Option<&'static str> {
    let position: usize = pick.trim().parse().ok()?;
    BUILTIN_THEME_IDS.get(position.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::folder::MockFolderPicker;
    use crate::infrastructure::surface::memory::{InMemorySurface, InMemoryToast};
    use mockall::predicate::always;
    use storefront_core::ThemeAttr;

    fn quiet_hooks() -> MockHostHooks {
        let mut hooks = MockHostHooks::new();
        hooks.expect_rerender().return_const(());
        hooks
    }

    fn make_controller(
        config: Configuration,
        hooks: MockHostHooks,
    ) -> AdminController<InMemorySurface, MockHostHooks> {
        AdminController::new(
            config,
            InMemorySurface::new(),
            hooks,
            Arc::new(InMemoryToast::default()),
            AdminOptions::default(),
        )
    }

    // ── Ordinal parsing ───────────────────────────────────────────────────────

    #[test]
    fn test_builtin_from_ordinal_is_one_based() {
        assert_eq!(builtin_from_ordinal("1"), Some("editorial"));
        assert_eq!(builtin_from_ordinal(" 2 "), Some("noir"));
        assert_eq!(builtin_from_ordinal("0"), None);
        assert_eq!(builtin_from_ordinal("3"), None);
        assert_eq!(builtin_from_ordinal("noir"), None);
    }

    // ── Initialization ────────────────────────────────────────────────────────

    #[test]
    fn test_new_populates_surface_from_configuration() {
        // Arrange
        let mut cfg = Configuration::default();
        cfg.store_name = "Atelier".to_string();

        // Act
        let ctl = make_controller(cfg, quiet_hooks());

        // Assert
        let surface = ctl.surface();
        assert_eq!(surface.control(Control::StoreName), Some("Atelier"));
        assert_eq!(surface.style_var("--page-bg"), Some("#f7f3ee"));
        assert_eq!(surface.theme_cards().len(), 2);
        assert!(surface.editor_read_only());
        assert_eq!(surface.indicator(), Some(SettingsIndicator::Defaults));
        assert_eq!(surface.label(Label::SessionFolder), Some("None"));
        assert!(!ctl.is_panel_open());
    }

    #[test]
    fn test_toggle_panel_flips_label() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());

        ctl.toggle_panel();
        assert_eq!(ctl.surface().panel_label(), PANEL_OPEN_LABEL);
        ctl.toggle_panel();
        assert_eq!(ctl.surface().panel_label(), PANEL_CLOSED_LABEL);
    }

    #[test]
    fn test_opening_panel_leaves_controls_untouched() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());
        ctl.surface_mut().type_into(Control::HeroSub, "draft");

        ctl.toggle_panel();

        assert!(ctl.is_panel_open());
        assert_eq!(ctl.surface().control(Control::HeroSub), Some("draft"));
        assert_eq!(ctl.config().hero_sub, "");
    }

    // ── Theme editing ─────────────────────────────────────────────────────────

    #[test]
    fn test_editor_input_on_builtin_is_rejected() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());

        let outcome = ctl.on_theme_editor_input(Control::ThemeField(ThemeAttr::PageBg), "#000000");

        assert_eq!(outcome, EditOutcome::ReadOnly);
        assert_eq!(ctl.config().active_theme().unwrap().page_bg, "#f7f3ee");
    }

    #[test]
    fn test_picker_input_updates_theme_and_text_control() {
        // Arrange
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());
        ctl.create_theme("Sunset", Some("1")).unwrap();

        // Act
        let outcome =
            ctl.on_theme_editor_input(Control::ThemePicker(ThemeAttr::AccentColor), "#ff6600");

        // Assert
        assert_eq!(outcome, EditOutcome::Applied);
        assert_eq!(ctl.config().active_theme().unwrap().accent_color, "#ff6600");
        assert_eq!(
            ctl.surface().control(Control::ThemeField(ThemeAttr::AccentColor)),
            Some("#ff6600")
        );
    }

    #[test]
    fn test_unparseable_number_is_reported_invalid() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());
        ctl.create_theme("Grid", None).unwrap();

        let outcome = ctl.on_theme_editor_input(Control::ThemeField(ThemeAttr::Columns), "many");

        assert_eq!(outcome, EditOutcome::Invalid);
        assert_eq!(ctl.config().active_theme().unwrap().columns, 3);
    }

    #[test]
    fn test_non_theme_control_is_ignored() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());

        assert_eq!(
            ctl.on_theme_editor_input(Control::StoreName, "x"),
            EditOutcome::Ignored
        );
    }

    // ── Create / switch / delete ──────────────────────────────────────────────

    #[test]
    fn test_create_theme_triggers_rerender() {
        let mut hooks = MockHostHooks::new();
        hooks.expect_rerender().times(1).return_const(());
        let mut ctl = make_controller(Configuration::default(), hooks);

        let id = ctl.create_theme("Sunset", Some("2")).unwrap();

        assert_eq!(id, "custom-sunset");
        assert!(!ctl.surface().editor_read_only());
    }

    #[test]
    fn test_blank_name_creates_nothing() {
        let mut hooks = MockHostHooks::new();
        hooks.expect_rerender().never();
        let mut ctl = make_controller(Configuration::default(), hooks);

        let result = ctl.create_theme("   ", Some("1"));

        assert!(matches!(result, Err(AdminError::Theme(ThemeError::EmptyName))));
        assert_eq!(ctl.config().themes().len(), 2);
    }

    #[test]
    fn test_switch_to_unknown_theme_changes_nothing() {
        let mut hooks = MockHostHooks::new();
        hooks.expect_rerender().never();
        let mut ctl = make_controller(Configuration::default(), hooks);

        let result = ctl.switch_theme("custom-ghost");

        assert!(result.is_err());
        assert_eq!(ctl.config().current_theme_id(), "editorial");
    }

    #[test]
    fn test_delete_builtin_never_asks_user() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());

        let result = ctl.delete_theme("noir");

        assert!(matches!(result, Err(AdminError::Theme(ThemeError::ReadOnly(_)))));
        assert!(ctl.surface().confirm_messages().is_empty());
    }

    #[test]
    fn test_delete_unknown_theme_never_asks_user() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());

        let result = ctl.delete_theme("gone");

        assert!(matches!(result, Err(AdminError::Theme(ThemeError::NotFound(_)))));
        assert!(ctl.surface().confirm_messages().is_empty());
    }

    #[test]
    fn test_delete_declined_keeps_theme() {
        let mut ctl = make_controller(Configuration::default(), quiet_hooks());
        let id = ctl.create_theme("Keep", None).unwrap();
        ctl.surface_mut().queue_confirm(false);

        let deleted = ctl.delete_theme(&id).unwrap();

        assert!(!deleted);
        assert!(ctl.config().theme(&id).is_some());
        assert_eq!(ctl.surface().confirm_messages(), ["Delete theme \"Keep\"?"]);
    }

    // ── Folder ────────────────────────────────────────────────────────────────

    #[test]
    fn test_picked_directory_is_handed_to_host() {
        // Arrange
        let mut hooks = quiet_hooks();
        hooks
            .expect_on_folder_load()
            .withf(|dir| dir.name == "autumn")
            .times(1)
            .return_const(());
        let mut ctl = make_controller(Configuration::default(), hooks);
        let mut picker = MockFolderPicker::new();
        picker
            .expect_pick_directory()
            .returning(|| Ok(DirectoryHandle::from_path("/srv/autumn")));

        // Act
        let picked = tokio_test::block_on(ctl.pick_folder(&picker));

        // Assert
        assert!(picked);
    }

    #[test]
    fn test_denied_pick_does_not_reach_host() {
        let mut hooks = quiet_hooks();
        hooks.expect_on_folder_load().never();
        let mut ctl = make_controller(Configuration::default(), hooks);
        let mut picker = MockFolderPicker::new();
        picker
            .expect_pick_directory()
            .returning(|| Err(PickerError::Denied("/root".to_string())));

        let picked = tokio_test::block_on(ctl.pick_folder(&picker));

        assert!(!picked);
    }

    // ── Save ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_failure_from_host_is_reported() {
        let mut hooks = quiet_hooks();
        hooks
            .expect_on_save()
            .with(always())
            .returning(|_| Err("disk full".to_string()));
        let mut ctl = make_controller(Configuration::default(), hooks);

        let result = ctl.save();

        assert!(matches!(result, Err(AdminError::Host(msg)) if msg == "disk full"));
    }

    #[test]
    fn test_save_hands_export_without_loaded_flag_to_host() {
        // Arrange
        let mut cfg = Configuration::default();
        cfg.loaded = true;
        let mut hooks = quiet_hooks();
        hooks
            .expect_on_save()
            .withf(|export| export.file_name == "settings.json" && !export.json.contains("_loaded"))
            .times(1)
            .returning(|_| Ok(()));
        let mut ctl = make_controller(cfg, hooks);

        // Act / Assert
        ctl.save().unwrap();
    }
}
