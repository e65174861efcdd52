//! Session configuration: store text, contact details, themes and fields.
//!
//! A [`Configuration`] is created once per session (either loaded from the
//! host's `settings.json` or defaulted) and mutated in place until the
//! session ends.  It is also the exact shape of the exported settings file:
//! attribute names are camelCase so that an export can replace the host's
//! persisted settings verbatim.
//!
//! # Invariants
//!
//! - `currentTheme` always names an existing entry in `themes`.
//! - The built-in themes (`editorial`, `noir`) are always present and never
//!   mutated through this type: every write goes through
//!   [`Configuration::theme_mut_if_editable`], which refuses built-ins
//!   before handing out a mutable reference.
//! - `fieldOrder` has no duplicates and only grows; fields are never
//!   removed automatically.
//! - The `loaded` flag (the host's `_loaded`) is never serialized.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::builtin::{builtin_theme, derive_custom_id, is_builtin, BUILTIN_THEME_IDS};
use super::theme::{Theme, ThemeAttr, ThemeError};

/// The product field gated by the global `showDesc` switch.
pub const DESCRIPTION_FIELD: &str = "description";

/// Error type for settings document (de)serialization.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings text is not a valid settings document.
    #[error("failed to parse settings JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The configuration could not be rendered as JSON.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

// ── Contact ───────────────────────────────────────────────────────────────────

/// The fixed set of contact channels shown in the storefront footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKey {
    Email,
    Phone,
    Whatsapp,
    Wechat,
    Telegram,
    Instagram,
    Website,
}

impl ContactKey {
    /// All contact channels in display order.
    pub const ALL: [ContactKey; 7] = [
        ContactKey::Email,
        ContactKey::Phone,
        ContactKey::Whatsapp,
        ContactKey::Wechat,
        ContactKey::Telegram,
        ContactKey::Instagram,
        ContactKey::Website,
    ];

    /// The lower-case key used in `settings.json`.
    pub fn key(self) -> &'static str {
        match self {
            ContactKey::Email => "email",
            ContactKey::Phone => "phone",
            ContactKey::Whatsapp => "whatsapp",
            ContactKey::Wechat => "wechat",
            ContactKey::Telegram => "telegram",
            ContactKey::Instagram => "instagram",
            ContactKey::Website => "website",
        }
    }
}

/// Contact details keyed by [`ContactKey`]; empty means "not shown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub whatsapp: String,
    pub wechat: String,
    pub telegram: String,
    pub instagram: String,
    pub website: String,
}

impl Contact {
    pub fn get(&self, key: ContactKey) -> &str {
        match key {
            ContactKey::Email => &self.email,
            ContactKey::Phone => &self.phone,
            ContactKey::Whatsapp => &self.whatsapp,
            ContactKey::Wechat => &self.wechat,
            ContactKey::Telegram => &self.telegram,
            ContactKey::Instagram => &self.instagram,
            ContactKey::Website => &self.website,
        }
    }

    pub fn set(&mut self, key: ContactKey, value: impl Into<String>) {
        let slot = match key {
            ContactKey::Email => &mut self.email,
            ContactKey::Phone => &mut self.phone,
            ContactKey::Whatsapp => &mut self.whatsapp,
            ContactKey::Wechat => &mut self.wechat,
            ContactKey::Telegram => &mut self.telegram,
            ContactKey::Instagram => &mut self.instagram,
            ContactKey::Website => &mut self.website,
        };
        *slot = value.into();
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// The full session-scoped settings object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default = "default_store_name")]
    pub store_name: String,
    #[serde(default = "default_hero_title")]
    pub hero_title: String,
    #[serde(default)]
    pub hero_sub: String,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default = "default_themes")]
    themes: IndexMap<String, Theme>,
    #[serde(default = "default_current_theme")]
    current_theme: String,
    #[serde(default = "default_field_order")]
    field_order: Vec<String>,
    #[serde(default)]
    field_vis: IndexMap<String, bool>,
    /// Global description switch, combined with the per-field flag.
    #[serde(default = "default_true")]
    pub show_desc: bool,
    /// Name of the last loaded product folder; display only.
    #[serde(default)]
    pub folder_name: String,
    /// `true` when this configuration was read from a persisted file.
    #[serde(skip)]
    pub loaded: bool,
}

fn default_store_name() -> String {
    "My Store".to_string()
}
fn default_hero_title() -> String {
    "New arrivals".to_string()
}
fn default_themes() -> IndexMap<String, Theme> {
    BUILTIN_THEME_IDS
        .iter()
        .filter_map(|id| builtin_theme(id).map(|theme| (id.to_string(), theme)))
        .collect()
}
fn default_current_theme() -> String {
    BUILTIN_THEME_IDS[0].to_string()
}
fn default_field_order() -> Vec<String> {
    ["title", "price", DESCRIPTION_FIELD]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_true() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            hero_title: default_hero_title(),
            hero_sub: String::new(),
            contact: Contact::default(),
            themes: default_themes(),
            current_theme: default_current_theme(),
            field_order: default_field_order(),
            field_vis: IndexMap::new(),
            show_desc: true,
            folder_name: String::new(),
            loaded: false,
        }
    }
}

impl Configuration {
    // ── Settings document ─────────────────────────────────────────────────────

    /// Parses a persisted settings document and repairs it.
    ///
    /// The returned configuration has `loaded == true`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if the text is not valid JSON or does
    /// not have the settings shape.  Individual malformed theme attributes are
    /// repaired, not rejected.
    pub fn from_settings_json(text: &str) -> Result<Self, SettingsError> {
        let mut config: Configuration = serde_json::from_str(text).map_err(SettingsError::Parse)?;
        config.repair();
        config.loaded = true;
        Ok(config)
    }

    /// Renders the configuration as a pretty-printed settings document.
    ///
    /// The `loaded` flag is never part of the output.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialize`] if serialization fails.
    pub fn to_settings_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Restores the invariants listed in the module docs.
    ///
    /// Called on every loaded document; safe to call on a valid one.
    pub fn repair(&mut self) {
        for id in BUILTIN_THEME_IDS {
            if !self.themes.contains_key(id) {
                if let Some(theme) = builtin_theme(id) {
                    warn!(theme = id, "built-in theme missing from settings; restored");
                    self.themes.insert(id.to_string(), theme);
                }
            }
        }

        if !self.themes.contains_key(&self.current_theme) {
            warn!(
                theme = %self.current_theme,
                "current theme does not exist; falling back to {}",
                BUILTIN_THEME_IDS[0]
            );
            self.current_theme = default_current_theme();
        }

        let before = self.field_order.len();
        self.field_order = dedup_preserving_order(std::mem::take(&mut self.field_order));
        if self.field_order.len() != before {
            warn!(
                removed = before - self.field_order.len(),
                "duplicate entries dropped from fieldOrder"
            );
        }
    }

    // ── Themes ────────────────────────────────────────────────────────────────

    /// All themes in insertion order.
    pub fn themes(&self) -> &IndexMap<String, Theme> {
        &self.themes
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    pub fn current_theme_id(&self) -> &str {
        &self.current_theme
    }

    /// The theme named by `currentTheme`.
    pub fn active_theme(&self) -> Option<&Theme> {
        self.themes.get(&self.current_theme)
    }

    /// Returns `true` if the theme exists and may be modified or deleted.
    ///
    /// This is the single capability check behind every theme write.
    pub fn is_editable(&self, id: &str) -> bool {
        !is_builtin(id) && self.themes.contains_key(id)
    }

    /// [`Self::is_editable`] as a `Result`, naming why a theme is refused.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ReadOnly`] for built-in ids.
    /// - [`ThemeError::NotFound`] for unknown ids.
    pub fn ensure_editable(&self, id: &str) -> Result<(), ThemeError> {
        if self.is_editable(id) {
            Ok(())
        } else if is_builtin(id) {
            Err(ThemeError::ReadOnly(id.to_string()))
        } else {
            Err(ThemeError::NotFound(id.to_string()))
        }
    }

    /// Hands out a mutable theme only if it passes [`Self::is_editable`].
    ///
    /// # Errors
    ///
    /// See [`Self::ensure_editable`].
    pub fn theme_mut_if_editable(&mut self, id: &str) -> Result<&mut Theme, ThemeError> {
        self.ensure_editable(id)?;
        self.themes
            .get_mut(id)
            .ok_or_else(|| ThemeError::NotFound(id.to_string()))
    }

    /// Writes one attribute of an editable theme.
    ///
    /// # Errors
    ///
    /// Propagates the guard errors of [`Self::theme_mut_if_editable`] and the
    /// parse errors of [`Theme::set`].
    pub fn set_theme_attr(
        &mut self,
        id: &str,
        attr: ThemeAttr,
        value: &str,
    ) -> Result<(), ThemeError> {
        self.theme_mut_if_editable(id)?.set(attr, value)
    }

    /// Replaces an editable theme wholesale.
    ///
    /// # Errors
    ///
    /// Same guard errors as [`Self::theme_mut_if_editable`].
    pub fn replace_theme(&mut self, id: &str, theme: Theme) -> Result<(), ThemeError> {
        *self.theme_mut_if_editable(id)? = theme;
        Ok(())
    }

    /// Makes `id` the active theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotFound`] if `id` is not a known theme; the
    /// active theme is unchanged in that case.
    pub fn switch_theme(&mut self, id: &str) -> Result<(), ThemeError> {
        if !self.themes.contains_key(id) {
            return Err(ThemeError::NotFound(id.to_string()));
        }
        self.current_theme = id.to_string();
        debug!(theme = id, "active theme switched");
        Ok(())
    }

    /// Display names of the built-in themes, in selection order.
    pub fn builtin_choices(&self) -> Vec<(&'static str, String)> {
        BUILTIN_THEME_IDS
            .iter()
            .map(|id| {
                let name = self
                    .themes
                    .get(*id)
                    .map_or_else(|| id.to_string(), |t| t.name.clone());
                (*id, name)
            })
            .collect()
    }

    /// Copies a base theme into a new custom theme and activates it.
    ///
    /// `base_id` falls back to the active theme when it is `None` or unknown.
    /// The new id is derived from the name (see
    /// [`derive_custom_id`](super::builtin::derive_custom_id)); when that id
    /// is already taken, a numeric suffix is appended (`custom-sunset-2`).
    ///
    /// Returns the new theme id.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::EmptyName`] if the trimmed name is empty.
    /// - [`ThemeError::NotFound`] if neither the base nor the active theme
    ///   exists (only possible on an unrepaired configuration).
    pub fn create_custom_theme(
        &mut self,
        name: &str,
        base_id: Option<&str>,
    ) -> Result<String, ThemeError> {
        let name = name.trim();
        let derived = derive_custom_id(name).ok_or(ThemeError::EmptyName)?;

        let base = match base_id.and_then(|id| self.themes.get(id)) {
            Some(theme) => theme.clone(),
            None => self
                .active_theme()
                .cloned()
                .ok_or_else(|| ThemeError::NotFound(self.current_theme.clone()))?,
        };

        let id = self.unused_theme_id(&derived);
        if id != derived {
            info!(requested = %derived, assigned = %id, "theme id already taken; disambiguated");
        }

        let mut theme = base;
        theme.name = name.to_string();
        self.themes.insert(id.clone(), theme);
        self.current_theme = id.clone();
        info!(theme = %id, "custom theme created");
        Ok(id)
    }

    /// Deletes a custom theme.
    ///
    /// If the deleted theme was active, the first built-in becomes active.
    /// Returns `true` when the active theme changed.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ReadOnly`] for built-in ids.
    /// - [`ThemeError::NotFound`] for unknown ids.
    pub fn delete_theme(&mut self, id: &str) -> Result<bool, ThemeError> {
        self.ensure_editable(id)?;
        if self.themes.shift_remove(id).is_none() {
            return Err(ThemeError::NotFound(id.to_string()));
        }
        info!(theme = id, "theme deleted");

        if self.current_theme == id {
            self.current_theme = default_current_theme();
            return Ok(true);
        }
        Ok(false)
    }

    fn unused_theme_id(&self, derived: &str) -> String {
        if !self.themes.contains_key(derived) {
            return derived.to_string();
        }
        (2u32..)
            .map(|n| format!("{derived}-{n}"))
            .find(|candidate| !self.themes.contains_key(candidate))
            .unwrap_or_else(|| derived.to_string())
    }

    // ── Fields ────────────────────────────────────────────────────────────────

    /// Field names in display order.
    pub fn field_order(&self) -> &[String] {
        &self.field_order
    }

    /// Explicit per-field visibility flags.
    pub fn field_vis(&self) -> &IndexMap<String, bool> {
        &self.field_vis
    }

    /// The per-field toggle state (absent means on), ignoring `showDesc`.
    pub fn is_field_enabled(&self, field: &str) -> bool {
        self.field_vis.get(field).copied().unwrap_or(true)
    }

    /// Whether the product display should render `field`.
    ///
    /// Combines the per-field flag with the global description switch.
    pub fn is_field_visible(&self, field: &str) -> bool {
        if field == DESCRIPTION_FIELD && !self.show_desc {
            return false;
        }
        self.is_field_enabled(field)
    }

    /// Fields the product display should render, in order.
    pub fn visible_fields(&self) -> Vec<&str> {
        self.field_order
            .iter()
            .map(String::as_str)
            .filter(|f| self.is_field_visible(f))
            .collect()
    }

    pub fn set_field_visible(&mut self, field: &str, visible: bool) {
        self.field_vis.insert(field.to_string(), visible);
    }

    /// Replaces the display order with `order`.
    ///
    /// Duplicates are dropped and known fields missing from `order` are kept
    /// at the end, so a reorder never loses a field.
    pub fn set_field_order<I, S>(&mut self, order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next: Vec<String> = order.into_iter().map(Into::into).collect();
        next.extend(self.field_order.iter().cloned());
        self.field_order = dedup_preserving_order(next);
    }

    /// Merges newly discovered field names.
    ///
    /// Unseen names are appended in discovery order; every name without a
    /// visibility flag is marked visible.  Existing entries are never removed
    /// or reordered.  Returns the number of names appended.
    pub fn merge_fields<I, S>(&mut self, fields: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut order: IndexSet<String> =
            std::mem::take(&mut self.field_order).into_iter().collect();
        let before = order.len();
        for field in fields {
            let field = field.as_ref();
            order.insert(field.to_string());
            self.field_vis.entry(field.to_string()).or_insert(true);
        }
        let added = order.len() - before;
        self.field_order = order.into_iter().collect();
        added
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    items.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_custom(name: &str) -> (Configuration, String) {
        let mut cfg = Configuration::default();
        let id = cfg.create_custom_theme(name, Some("editorial")).unwrap();
        (cfg, id)
    }

    // ── defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_contains_both_builtins_and_activates_editorial() {
        let cfg = Configuration::default();
        assert_eq!(cfg.themes().len(), 2);
        assert!(cfg.theme("editorial").is_some());
        assert!(cfg.theme("noir").is_some());
        assert_eq!(cfg.current_theme_id(), "editorial");
        assert!(!cfg.loaded);
    }

    // ── read-only guard ───────────────────────────────────────────────────────

    #[test]
    fn test_builtins_are_not_editable() {
        let cfg = Configuration::default();
        assert!(!cfg.is_editable("editorial"));
        assert!(!cfg.is_editable("noir"));
        assert!(!cfg.is_editable("missing"));
    }

    #[test]
    fn test_set_theme_attr_on_builtin_is_rejected_without_mutation() {
        // Arrange
        let mut cfg = Configuration::default();
        let before = cfg.theme("noir").cloned();

        // Act
        let result = cfg.set_theme_attr("noir", ThemeAttr::PageBg, "#ff0000");

        // Assert
        assert_eq!(result, Err(ThemeError::ReadOnly("noir".to_string())));
        assert_eq!(cfg.theme("noir").cloned(), before);
    }

    #[test]
    fn test_replace_theme_on_builtin_is_rejected() {
        let mut cfg = Configuration::default();
        let result = cfg.replace_theme("editorial", Theme::default());
        assert!(matches!(result, Err(ThemeError::ReadOnly(_))));
        assert_eq!(cfg.theme("editorial").unwrap().name, "Editorial");
    }

    #[test]
    fn test_set_theme_attr_on_custom_theme_applies() {
        let (mut cfg, id) = config_with_custom("Mine");
        cfg.set_theme_attr(&id, ThemeAttr::AccentColor, "#123456").unwrap();
        assert_eq!(cfg.theme(&id).unwrap().accent_color, "#123456");
    }

    // ── creation ──────────────────────────────────────────────────────────────

    #[test]
    fn test_create_custom_theme_copies_base_and_activates_it() {
        // Arrange
        let mut cfg = Configuration::default();

        // Act
        let id = cfg.create_custom_theme("Sunset", Some("noir")).unwrap();

        // Assert
        assert_eq!(id, "custom-sunset");
        assert_eq!(cfg.current_theme_id(), "custom-sunset");
        let expected = Theme {
            name: "Sunset".to_string(),
            ..builtin_theme("noir").unwrap()
        };
        assert_eq!(cfg.theme(&id), Some(&expected));
    }

    #[test]
    fn test_create_custom_theme_without_base_copies_active_theme() {
        let mut cfg = Configuration::default();
        cfg.switch_theme("noir").unwrap();

        let id = cfg.create_custom_theme("Dusk", None).unwrap();

        assert_eq!(cfg.theme(&id).unwrap().page_bg, "#0f0f10");
    }

    #[test]
    fn test_create_custom_theme_with_unknown_base_copies_active_theme() {
        let mut cfg = Configuration::default();
        let id = cfg.create_custom_theme("Dawn", Some("brutalist")).unwrap();
        assert_eq!(cfg.theme(&id).unwrap().page_bg, "#f7f3ee");
    }

    #[test]
    fn test_create_custom_theme_rejects_blank_name() {
        let mut cfg = Configuration::default();
        assert_eq!(
            cfg.create_custom_theme("   ", Some("noir")),
            Err(ThemeError::EmptyName)
        );
        assert_eq!(cfg.themes().len(), 2);
        assert_eq!(cfg.current_theme_id(), "editorial");
    }

    #[test]
    fn test_create_custom_theme_disambiguates_colliding_ids() {
        let mut cfg = Configuration::default();
        let first = cfg.create_custom_theme("Sunset", Some("noir")).unwrap();
        let second = cfg.create_custom_theme("sunset", Some("editorial")).unwrap();
        let third = cfg.create_custom_theme("SUNSET", None).unwrap();

        assert_eq!(first, "custom-sunset");
        assert_eq!(second, "custom-sunset-2");
        assert_eq!(third, "custom-sunset-3");
        // The first theme survived the collision.
        assert_eq!(cfg.theme(&first).unwrap().page_bg, "#0f0f10");
    }

    // ── deletion ──────────────────────────────────────────────────────────────

    #[test]
    fn test_delete_active_theme_falls_back_to_first_builtin() {
        let (mut cfg, id) = config_with_custom("Sunset");

        let changed = cfg.delete_theme(&id).unwrap();

        assert!(changed);
        assert_eq!(cfg.current_theme_id(), "editorial");
        assert!(cfg.theme(&id).is_none());
    }

    #[test]
    fn test_delete_inactive_theme_keeps_active_theme() {
        let (mut cfg, id) = config_with_custom("Sunset");
        cfg.switch_theme("noir").unwrap();

        let changed = cfg.delete_theme(&id).unwrap();

        assert!(!changed);
        assert_eq!(cfg.current_theme_id(), "noir");
    }

    #[test]
    fn test_delete_builtin_is_rejected() {
        let mut cfg = Configuration::default();
        assert_eq!(
            cfg.delete_theme("editorial"),
            Err(ThemeError::ReadOnly("editorial".to_string()))
        );
        assert!(cfg.theme("editorial").is_some());
    }

    #[test]
    fn test_ensure_editable_names_the_refusal() {
        let (cfg, id) = config_with_custom("Sunset");

        assert_eq!(cfg.ensure_editable(&id), Ok(()));
        assert_eq!(
            cfg.ensure_editable("noir"),
            Err(ThemeError::ReadOnly("noir".to_string()))
        );
        assert_eq!(
            cfg.ensure_editable("gone"),
            Err(ThemeError::NotFound("gone".to_string()))
        );
    }

    #[test]
    fn test_delete_unknown_theme_is_not_found() {
        let mut cfg = Configuration::default();
        assert_eq!(
            cfg.delete_theme("gone"),
            Err(ThemeError::NotFound("gone".to_string()))
        );
    }

    #[test]
    fn test_delete_preserves_order_of_remaining_themes() {
        let mut cfg = Configuration::default();
        let a = cfg.create_custom_theme("A", None).unwrap();
        let b = cfg.create_custom_theme("B", None).unwrap();
        let c = cfg.create_custom_theme("C", None).unwrap();

        cfg.delete_theme(&b).unwrap();

        let ids: Vec<_> = cfg.themes().keys().cloned().collect();
        assert_eq!(ids, vec!["editorial".to_string(), "noir".to_string(), a, c]);
    }

    #[test]
    fn test_switch_to_unknown_theme_is_rejected() {
        let mut cfg = Configuration::default();
        assert!(cfg.switch_theme("nope").is_err());
        assert_eq!(cfg.current_theme_id(), "editorial");
    }

    // ── fields ────────────────────────────────────────────────────────────────

    #[test]
    fn test_merge_fields_appends_unseen_names_and_marks_them_visible() {
        // Arrange
        let mut cfg = Configuration::default();
        cfg.set_field_order(["title", "price"]);
        cfg.field_order.truncate(2);

        // Act
        let added = cfg.merge_fields(["title", "price", "sku"]);

        // Assert
        assert_eq!(added, 1);
        assert_eq!(cfg.field_order(), ["title", "price", "sku"]);
        assert_eq!(cfg.field_vis().get("sku"), Some(&true));
    }

    #[test]
    fn test_merge_fields_keeps_existing_hidden_flag() {
        let mut cfg = Configuration::default();
        cfg.set_field_visible("price", false);

        cfg.merge_fields(["price"]);

        assert_eq!(cfg.field_vis().get("price"), Some(&false));
    }

    #[test]
    fn test_merge_fields_deduplicates_within_one_call() {
        let mut cfg = Configuration::default();
        let added = cfg.merge_fields(["sku", "sku", "color"]);
        assert_eq!(added, 2);
        assert_eq!(cfg.field_order().iter().filter(|f| *f == "sku").count(), 1);
    }

    #[test]
    fn test_show_desc_gates_description_independently_of_field_flag() {
        let mut cfg = Configuration::default();
        assert!(cfg.is_field_visible(DESCRIPTION_FIELD));

        cfg.show_desc = false;
        assert!(!cfg.is_field_visible(DESCRIPTION_FIELD));
        assert!(cfg.is_field_enabled(DESCRIPTION_FIELD));

        cfg.show_desc = true;
        cfg.set_field_visible(DESCRIPTION_FIELD, false);
        assert!(!cfg.is_field_visible(DESCRIPTION_FIELD));
    }

    #[test]
    fn test_visible_fields_filters_hidden_entries_in_order() {
        let mut cfg = Configuration::default();
        cfg.merge_fields(["sku"]);
        cfg.set_field_visible("price", false);

        assert_eq!(cfg.visible_fields(), vec!["title", DESCRIPTION_FIELD, "sku"]);
    }

    #[test]
    fn test_set_field_order_drops_duplicates_and_keeps_missing_fields() {
        let mut cfg = Configuration::default();

        cfg.set_field_order(["price", "price", "title"]);

        assert_eq!(cfg.field_order(), ["price", "title", DESCRIPTION_FIELD]);
    }

    // ── settings document ─────────────────────────────────────────────────────

    #[test]
    fn test_to_settings_json_omits_loaded_flag() {
        let mut cfg = Configuration::default();
        cfg.loaded = true;

        let json = cfg.to_settings_json().unwrap();

        assert!(!json.contains("_loaded"));
        assert!(!json.contains("\"loaded\""));
    }

    #[test]
    fn test_to_settings_json_has_every_top_level_key() {
        let json = Configuration::default().to_settings_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "storeName",
            "heroTitle",
            "heroSub",
            "contact",
            "themes",
            "currentTheme",
            "fieldOrder",
            "fieldVis",
            "showDesc",
            "folderName",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 10);
    }

    #[test]
    fn test_from_settings_json_sets_loaded_and_ignores_stale_loaded_key() {
        let cfg = Configuration::from_settings_json(r#"{ "_loaded": false, "storeName": "Shop" }"#)
            .unwrap();
        assert!(cfg.loaded);
        assert_eq!(cfg.store_name, "Shop");
    }

    #[test]
    fn test_from_settings_json_restores_missing_builtins_and_dangling_current() {
        let json = r#"{
            "themes": { "custom-a": { "name": "A" } },
            "currentTheme": "custom-gone",
            "fieldOrder": ["title", "title", "price"]
        }"#;

        let cfg = Configuration::from_settings_json(json).unwrap();

        assert!(cfg.theme("editorial").is_some());
        assert!(cfg.theme("noir").is_some());
        assert!(cfg.theme("custom-a").is_some());
        assert_eq!(cfg.current_theme_id(), "editorial");
        assert_eq!(cfg.field_order(), ["title", "price"]);
    }

    #[test]
    fn test_from_settings_json_rejects_non_object_document() {
        let result = Configuration::from_settings_json("[1, 2, 3]");
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }

    #[test]
    fn test_settings_json_round_trip_preserves_theme_order() {
        let (mut cfg, _) = config_with_custom("Zeta");
        cfg.create_custom_theme("Alpha", None).unwrap();

        let restored = Configuration::from_settings_json(&cfg.to_settings_json().unwrap()).unwrap();

        let ids: Vec<_> = restored.themes().keys().collect();
        assert_eq!(ids, ["editorial", "noir", "custom-zeta", "custom-alpha"]);
        assert_eq!(restored.current_theme_id(), "custom-alpha");
    }

    #[test]
    fn test_contact_get_and_set_by_key() {
        let mut contact = Contact::default();
        contact.set(ContactKey::Wechat, "shop_wx");
        assert_eq!(contact.get(ContactKey::Wechat), "shop_wx");
        assert_eq!(contact.get(ContactKey::Email), "");
    }
}
