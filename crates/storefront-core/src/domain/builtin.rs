//! Built-in themes and custom theme identifiers.
//!
//! Two theme ids are reserved by the system: `editorial` and `noir`.  They
//! ship with every configuration, can be copied as the base of a custom
//! theme, and can never be edited or deleted.  Custom themes get an id
//! derived from their display name (`"Late Summer"` → `custom-late-summer`),
//! so a custom id can never collide with a built-in one.

use super::theme::{ItemsPerPage, ModalStyle, Theme};

/// Reserved theme ids, in selection order.  The first entry is the fallback
/// whenever the active theme disappears.
pub const BUILTIN_THEME_IDS: [&str; 2] = ["editorial", "noir"];

/// Prefix of every derived custom theme id.
pub const CUSTOM_THEME_PREFIX: &str = "custom-";

/// Returns `true` if `id` is one of the reserved built-in ids.
pub fn is_builtin(id: &str) -> bool {
    BUILTIN_THEME_IDS.contains(&id)
}

/// Returns the pristine definition of a built-in theme.
pub fn builtin_theme(id: &str) -> Option<Theme> {
    match id {
        "editorial" => Some(editorial()),
        "noir" => Some(noir()),
        _ => None,
    }
}

/// Derives a custom theme id from a display name.
///
/// The name is trimmed, lower-cased, and every whitespace run becomes a
/// single `-`.  Returns `None` for an empty or whitespace-only name.
///
/// # Example
///
/// ```
/// use storefront_core::domain::builtin::derive_custom_id;
///
/// assert_eq!(derive_custom_id("Late  Summer").as_deref(), Some("custom-late-summer"));
/// assert_eq!(derive_custom_id("   "), None);
/// ```
pub fn derive_custom_id(name: &str) -> Option<String> {
    let slug = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        None
    } else {
        Some(format!("{CUSTOM_THEME_PREFIX}{slug}"))
    }
}

fn editorial() -> Theme {
    Theme {
        name: "Editorial".to_string(),
        ..Theme::default()
    }
}

fn noir() -> Theme {
    Theme {
        name: "Noir".to_string(),
        page_bg: "#0f0f10".to_string(),
        card_bg: "#1a1a1c".to_string(),
        text_color: "#e8e6e3".to_string(),
        accent_color: "#c9a227".to_string(),
        deep_color: "#f5f1e8".to_string(),
        btn_bg: "#c9a227".to_string(),
        btn_text: "#0f0f10".to_string(),
        btn_hover_bg: "#f5f1e8".to_string(),
        btn_hover_text: "#0f0f10".to_string(),
        footer_bg: "#000000".to_string(),
        footer_text: "#c9a227".to_string(),
        display_font: "'Cormorant Garamond', Georgia, serif".to_string(),
        body_font: "'Helvetica Neue', Arial, sans-serif".to_string(),
        title_size: 1.2,
        desc_size: 0.85,
        desc_clamp: 2,
        columns: 4,
        gap: 1.5,
        items_per_page: ItemsPerPage::Count(16),
        card_radius: 0.0,
        aspect_ratio: "1/1".to_string(),
        modal_style: ModalStyle::TopDown,
        modal_width: "960px".to_string(),
        modal_height: "85vh".to_string(),
        modal_title_size: 2.0,
        modal_desc_size: 0.95,
        modal_img_width: 55,
        footer_font_size: 0.8,
        footer_tagline: "After dark".to_string(),
        ..Theme::default()
    }
}
