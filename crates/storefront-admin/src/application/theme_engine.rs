//! Theme engine: projects themes onto a style surface and binds the editor.
//!
//! Four operations make up the engine:
//!
//! - [`apply_theme`] writes every style variable of a theme to the surface.
//! - [`build_theme_grid`] turns the theme map into selectable cards.
//! - [`populate_theme_editor`] fills the editor controls from a theme.
//! - [`read_theme_editor`] reads the controls back into a theme.
//!
//! # Why traits instead of a concrete page? (for beginners)
//!
//! The engine only ever needs to *set* a named style variable and to *get or
//! set* the value of a named control.  Expressing that as the small traits
//! [`StyleSurface`] and [`EditorControls`] lets the same code drive a browser
//! page, a native window or the in-memory surface used in tests.  Nothing in
//! this module knows which one it is talking to.

use storefront_core::{style_variables, Configuration, Theme, ThemeAttr};
use tracing::{debug, trace};

use super::controls::Control;

/// Value written to a color picker when the theme has no color to show.
pub const PICKER_FALLBACK: &str = "#000000";

/// A surface that exposes named style variables (`--page-bg`, ...).
pub trait StyleSurface {
    fn set_style_var(&mut self, name: &str, value: &str);
}

/// Access to the value-bearing controls of the admin panel.
pub trait EditorControls {
    /// Current value of `control`, or `None` if the surface does not show it.
    fn control_value(&self, control: Control) -> Option<String>;

    /// Writes `value` into `control`.  Returns `false` if the control is absent.
    fn set_control_value(&mut self, control: Control, value: &str) -> bool;
}

/// Writes every style variable of `theme` to `surface`.
pub fn apply_theme<S: StyleSurface + ?Sized>(surface: &mut S, theme: &Theme) {
    for var in style_variables(theme) {
        surface.set_style_var(var.name, &var.value);
    }
    debug!(theme = %theme.name, "theme applied");
}

// ── Theme grid ────────────────────────────────────────────────────────────────

/// One selectable card in the theme grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeCard {
    pub id: String,
    pub name: String,
    /// Page, card, accent and deep colors.
    pub swatches: [String; 4],
    /// Short layout description, e.g. `"3 col · 12/page"`.
    pub summary: String,
    pub active: bool,
    /// Built-in cards carry no delete affordance.
    pub deletable: bool,
}

/// Where on a card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Body,
    DeleteButton,
}

/// What a click on the theme grid asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeGridEvent {
    Select(String),
    Delete(String),
}

impl ThemeCard {
    /// Resolves a click into exactly one event.
    ///
    /// A click on the delete button never also selects the card, and a card
    /// without a delete button ignores delete clicks.
    pub fn click(&self, target: CardTarget) -> Option<ThemeGridEvent> {
        match target {
            CardTarget::Body => Some(ThemeGridEvent::Select(self.id.clone())),
            CardTarget::DeleteButton if self.deletable => {
                Some(ThemeGridEvent::Delete(self.id.clone()))
            }
            CardTarget::DeleteButton => None,
        }
    }
}

/// A view that can show the theme grid.
pub trait ThemeGridView {
    /// Replaces the whole grid with `cards`.
    fn render_theme_grid(&mut self, cards: &[ThemeCard]);
}

/// Builds one card per theme, in the configuration's theme order.
pub fn build_theme_grid(config: &Configuration) -> Vec<ThemeCard> {
    let current = config.current_theme_id();
    config
        .themes()
        .iter()
        .map(|(id, theme)| ThemeCard {
            id: id.clone(),
            name: theme.name.clone(),
            swatches: theme.swatches().map(str::to_string),
            summary: format!("{} col · {}/page", theme.columns, theme.items_per_page),
            active: id == current,
            deletable: config.is_editable(id),
        })
        .collect()
}

/// Rebuilds the grid on `view`.
pub fn render_theme_grid<V: ThemeGridView + ?Sized>(view: &mut V, config: &Configuration) {
    let cards = build_theme_grid(config);
    trace!(cards = cards.len(), "theme grid rendered");
    view.render_theme_grid(&cards);
}

// ── Editor binding ────────────────────────────────────────────────────────────

/// Writes every attribute of `theme` into its editor control.
///
/// Color attributes also fill their picker; an empty color shows
/// [`PICKER_FALLBACK`] in the picker while the text input stays empty.
pub fn populate_theme_editor<C: EditorControls + ?Sized>(controls: &mut C, theme: &Theme) {
    for attr in ThemeAttr::ALL {
        let value = theme.get(attr);
        if !controls.set_control_value(Control::ThemeField(attr), &value) {
            trace!(attribute = %attr, "editor control absent");
        }
        if attr.is_color() {
            let picker = if value.is_empty() {
                PICKER_FALLBACK
            } else {
                value.as_str()
            };
            controls.set_control_value(Control::ThemePicker(attr), picker);
        }
    }
}

/// Reads the editor controls into a copy of `theme`.
///
/// Absent controls and values that fail to parse leave the attribute as it
/// was.  Attributes outside the schema (`extra`) pass through untouched.
pub fn read_theme_editor<C: EditorControls + ?Sized>(controls: &C, theme: &Theme) -> Theme {
    let mut next = theme.clone();
    for attr in ThemeAttr::ALL {
        let Some(value) = controls.control_value(Control::ThemeField(attr)) else {
            continue;
        };
        if let Err(e) = next.set(attr, &value) {
            debug!(attribute = %attr, error = %e, "editor value rejected; keeping previous");
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use storefront_core::{domain::builtin::builtin_theme, ItemsPerPage, STYLE_VAR_NAMES};

    // ── Test doubles ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct FakeSurface {
        vars: HashMap<String, String>,
        controls: HashMap<Control, String>,
        absent: Vec<Control>,
    }

    impl StyleSurface for FakeSurface {
        fn set_style_var(&mut self, name: &str, value: &str) {
            self.vars.insert(name.to_string(), value.to_string());
        }
    }

    impl EditorControls for FakeSurface {
        fn control_value(&self, control: Control) -> Option<String> {
            if self.absent.contains(&control) {
                return None;
            }
            Some(self.controls.get(&control).cloned().unwrap_or_default())
        }

        fn set_control_value(&mut self, control: Control, value: &str) -> bool {
            if self.absent.contains(&control) {
                return false;
            }
            self.controls.insert(control, value.to_string());
            true
        }
    }

    // ── apply_theme ───────────────────────────────────────────────────────────

    #[test]
    fn test_apply_theme_sets_every_style_variable() {
        // Arrange
        let mut surface = FakeSurface::default();
        let noir = builtin_theme("noir").unwrap();

        // Act
        apply_theme(&mut surface, &noir);

        // Assert
        for name in STYLE_VAR_NAMES {
            assert!(surface.vars.contains_key(name), "{name} must be set");
        }
        assert_eq!(surface.vars["--page-bg"], "#0f0f10");
        assert_eq!(surface.vars["--columns"], "4");
    }

    // ── Theme grid ────────────────────────────────────────────────────────────

    #[test]
    fn test_build_theme_grid_marks_active_and_deletable_cards() {
        // Arrange
        let mut cfg = Configuration::default();
        let id = cfg.create_custom_theme("Sunset", Some("noir")).unwrap();

        // Act
        let cards = build_theme_grid(&cfg);

        // Assert
        assert_eq!(cards.len(), 3);
        let custom = cards.iter().find(|c| c.id == id).unwrap();
        assert!(custom.active);
        assert!(custom.deletable);
        assert_eq!(custom.summary, "4 col · 16/page");
        assert_eq!(custom.swatches[0], "#0f0f10");
        assert!(cards.iter().filter(|c| c.id != id).all(|c| !c.deletable && !c.active));
    }

    #[test]
    fn test_grid_summary_shows_all_items_per_page() {
        let mut cfg = Configuration::default();
        let id = cfg.create_custom_theme("Everything", None).unwrap();
        cfg.set_theme_attr(&id, ThemeAttr::ItemsPerPage, "All").unwrap();

        let cards = build_theme_grid(&cfg);

        let card = cards.iter().find(|c| c.id == id).unwrap();
        assert_eq!(card.summary, "3 col · All/page");
    }

    #[test]
    fn test_delete_click_does_not_select_card() {
        let card = ThemeCard {
            id: "custom-a".to_string(),
            name: "A".to_string(),
            swatches: Default::default(),
            summary: String::new(),
            active: false,
            deletable: true,
        };

        assert_eq!(
            card.click(CardTarget::DeleteButton),
            Some(ThemeGridEvent::Delete("custom-a".to_string()))
        );
        assert_eq!(
            card.click(CardTarget::Body),
            Some(ThemeGridEvent::Select("custom-a".to_string()))
        );
    }

    #[test]
    fn test_builtin_card_ignores_delete_click() {
        let cfg = Configuration::default();
        let cards = build_theme_grid(&cfg);

        assert!(cards.iter().all(|c| c.click(CardTarget::DeleteButton).is_none()));
    }

    // ── Editor binding ────────────────────────────────────────────────────────

    #[test]
    fn test_populate_then_read_is_identity() {
        // Arrange
        let mut surface = FakeSurface::default();
        let mut theme = builtin_theme("noir").unwrap();
        theme.items_per_page = ItemsPerPage::All;
        theme
            .extra
            .insert("ribbon".to_string(), serde_json::json!("sale"));

        // Act
        populate_theme_editor(&mut surface, &theme);
        let read_back = read_theme_editor(&surface, &theme);

        // Assert
        assert_eq!(read_back, theme);
    }

    #[test]
    fn test_populate_uses_fallback_for_empty_color_picker() {
        let mut surface = FakeSurface::default();
        let mut theme = Theme::default();
        theme.accent_color = String::new();

        populate_theme_editor(&mut surface, &theme);

        assert_eq!(surface.controls[&Control::ThemeField(ThemeAttr::AccentColor)], "");
        assert_eq!(
            surface.controls[&Control::ThemePicker(ThemeAttr::AccentColor)],
            PICKER_FALLBACK
        );
    }

    #[test]
    fn test_read_keeps_value_when_control_absent() {
        // Arrange
        let mut surface = FakeSurface::default();
        let theme = Theme::default();
        populate_theme_editor(&mut surface, &theme);
        surface.absent.push(Control::ThemeField(ThemeAttr::FooterTagline));

        // Act
        let read_back = read_theme_editor(&surface, &theme);

        // Assert
        assert_eq!(read_back.footer_tagline, theme.footer_tagline);
    }

    #[test]
    fn test_read_keeps_value_when_number_does_not_parse() {
        let mut surface = FakeSurface::default();
        let theme = Theme::default();
        populate_theme_editor(&mut surface, &theme);
        surface
            .controls
            .insert(Control::ThemeField(ThemeAttr::Columns), "three".to_string());
        surface
            .controls
            .insert(Control::ThemeField(ThemeAttr::Gap), "2.5".to_string());

        let read_back = read_theme_editor(&surface, &theme);

        assert_eq!(read_back.columns, theme.columns);
        assert!((read_back.gap - 2.5).abs() < f64::EPSILON);
    }
}
