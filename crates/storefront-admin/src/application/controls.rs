//! Identifiers for the admin panel's controls, labels, tabs and indicators.
//!
//! The application layer never holds references to display elements.  It
//! names them with the enums below and lets the surface resolve the name.
//! Every identifier has a stable element id (`dom_id`) so a browser-backed
//! surface can map it 1:1 onto the page markup, and so input events coming
//! back from the page can be routed with [`Control::from_dom_id`].

use storefront_core::{ContactKey, ThemeAttr};

const THEME_EDITOR_PREFIX: &str = "te-";
const PICKER_SUFFIX: &str = "-picker";

/// A value-bearing input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    StoreName,
    HeroTitle,
    HeroSub,
    Contact(ContactKey),
    /// Text input for one theme attribute (`te-<attr>`).
    ThemeField(ThemeAttr),
    /// Color picker paired with a color attribute (`te-<attr>-picker`).
    ThemePicker(ThemeAttr),
}

impl Control {
    /// The element id this control is rendered with.
    pub fn dom_id(self) -> String {
        match self {
            Control::StoreName => "admin-store-name".to_string(),
            Control::HeroTitle => "admin-hero-title".to_string(),
            Control::HeroSub => "admin-hero-sub".to_string(),
            Control::Contact(key) => format!("admin-{}", key.key()),
            Control::ThemeField(attr) => format!("{THEME_EDITOR_PREFIX}{}", attr.key()),
            Control::ThemePicker(attr) => {
                format!("{THEME_EDITOR_PREFIX}{}{PICKER_SUFFIX}", attr.key())
            }
        }
    }

    /// Resolves an element id back to a control.
    ///
    /// Picker ids are only accepted for color attributes.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        if let Some(rest) = id.strip_prefix(THEME_EDITOR_PREFIX) {
            return match rest.strip_suffix(PICKER_SUFFIX) {
                Some(key) => ThemeAttr::from_key(key)
                    .filter(|attr| attr.is_color())
                    .map(Control::ThemePicker),
                None => ThemeAttr::from_key(rest).map(Control::ThemeField),
            };
        }
        match id {
            "admin-store-name" => Some(Control::StoreName),
            "admin-hero-title" => Some(Control::HeroTitle),
            "admin-hero-sub" => Some(Control::HeroSub),
            _ => {
                let key = id.strip_prefix("admin-")?;
                ContactKey::ALL
                    .into_iter()
                    .find(|k| k.key() == key)
                    .map(Control::Contact)
            }
        }
    }

    /// The other half of a text/picker pair, for color attributes only.
    pub fn paired(self) -> Option<Control> {
        match self {
            Control::ThemeField(attr) if attr.is_color() => Some(Control::ThemePicker(attr)),
            Control::ThemePicker(attr) => Some(Control::ThemeField(attr)),
            _ => None,
        }
    }

    /// The theme attribute behind an editor control.
    pub fn theme_attr(self) -> Option<ThemeAttr> {
        match self {
            Control::ThemeField(attr) | Control::ThemePicker(attr) => Some(attr),
            _ => None,
        }
    }
}

/// A read-only text element outside the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Store name in the page header.
    StoreName,
    HeroTitle,
    HeroSub,
    /// Folder name inside the admin folder tab.
    CurrentFolder,
    /// Folder name in the session bar.
    SessionFolder,
}

impl Label {
    pub fn dom_id(self) -> &'static str {
        match self {
            Label::StoreName => "store-name-display",
            Label::HeroTitle => "hero-title-display",
            Label::HeroSub => "hero-sub-display",
            Label::CurrentFolder => "admin-current-folder",
            Label::SessionFolder => "session-folder",
        }
    }

    /// The header label mirroring a design control, if any.
    pub fn mirror_of(control: Control) -> Option<Label> {
        match control {
            Control::StoreName => Some(Label::StoreName),
            Control::HeroTitle => Some(Label::HeroTitle),
            Control::HeroSub => Some(Label::HeroSub),
            _ => None,
        }
    }
}

/// The admin panel tabs; exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdminTab {
    #[default]
    Design,
    Themes,
    Fields,
    Contact,
    Folder,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Design,
        AdminTab::Themes,
        AdminTab::Fields,
        AdminTab::Contact,
        AdminTab::Folder,
    ];

    /// Pane id (`tab-<name>`).
    pub fn dom_id(self) -> &'static str {
        match self {
            AdminTab::Design => "tab-design",
            AdminTab::Themes => "tab-themes",
            AdminTab::Fields => "tab-fields",
            AdminTab::Contact => "tab-contact",
            AdminTab::Folder => "tab-folder",
        }
    }
}

/// Whether the session runs on a persisted settings file or on defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsIndicator {
    Loaded,
    Defaults,
}

impl SettingsIndicator {
    pub fn from_loaded(loaded: bool) -> Self {
        if loaded {
            SettingsIndicator::Loaded
        } else {
            SettingsIndicator::Defaults
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SettingsIndicator::Loaded => "indicator-green",
            SettingsIndicator::Defaults => "indicator-amber",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsIndicator::Loaded => "settings.json loaded",
            SettingsIndicator::Defaults => "No settings.json — using defaults",
        }
    }
}
