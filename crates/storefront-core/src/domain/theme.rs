//! Theme record and its fixed attribute schema.
//!
//! A [`Theme`] is a flat bundle of ~30 visual and layout attributes that the
//! storefront applies globally to its rendering surface.  Every attribute is
//! enumerated by [`ThemeAttr`], which also declares the attribute's kind
//! (color, font, size in `rem`, ...) so that editors, the style projection and
//! the settings loader all agree on how a value is parsed and printed.
//!
//! # Text in, typed out (for beginners)
//!
//! Editor controls and older settings files carry every attribute as text
//! (`"1.2"`, `"3"`, `"#ffffff"`).  The theme keeps typed values instead, and
//! converts at two places only:
//!
//! - [`Theme::get`] prints an attribute the way an editor control shows it.
//! - [`Theme::set`] parses editor text back into the typed field, rejecting
//!   values that would produce an invalid style (negative sizes, `"abc"` as a
//!   column count, ...).
//!
//! Because every field has a declared default, a partially specified theme
//! (for example one loaded from a hand-edited `settings.json`) is repaired at
//! the boundary instead of carrying `undefined` into the style projection.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Errors raised by theme attribute access and theme lifecycle operations.
#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    /// The attribute key is not part of the theme schema.
    #[error("unknown theme attribute: {0}")]
    UnknownAttribute(String),

    /// The text could not be converted into the attribute's declared kind.
    #[error("invalid value {value:?} for theme attribute {attribute}")]
    InvalidValue {
        attribute: &'static str,
        value: String,
    },

    /// A write was attempted on a built-in theme.
    #[error("theme {0} is built-in and cannot be modified")]
    ReadOnly(String),

    /// The theme id does not exist in the configuration.
    #[error("theme not found: {0}")]
    NotFound(String),

    /// A new theme was requested with an empty (or whitespace-only) name.
    #[error("theme name must not be empty")]
    EmptyName,
}

// ── Attribute schema ──────────────────────────────────────────────────────────

/// How an attribute is stored and printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    /// CSS color text; mirrored by a color-picker control in the editor.
    Color,
    /// CSS `font-family` list.
    Font,
    /// Non-negative number projected with a `rem` unit.
    Rem,
    /// Non-negative number projected with a `px` unit.
    Px,
    /// Non-negative integer projected with a `%` unit.
    Percent,
    /// Non-negative integer projected without a unit.
    Integer,
    /// Page size: a positive integer or `All`.
    ItemsPerPage,
    /// Raw CSS value (`3/4`, `860px`, `90vh`).
    Css,
    /// Modal layout variant.
    ModalStyle,
    /// Free text that is never projected onto the surface.
    Text,
}

/// Every attribute of a [`Theme`], in editor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeAttr {
    PageBg,
    CardBg,
    TextColor,
    AccentColor,
    DeepColor,
    BtnBg,
    BtnText,
    BtnHoverBg,
    BtnHoverText,
    FooterBg,
    FooterText,
    DisplayFont,
    BodyFont,
    TitleSize,
    DescSize,
    DescClamp,
    Columns,
    Gap,
    ItemsPerPage,
    CardRadius,
    AspectRatio,
    ModalStyle,
    ModalWidth,
    ModalHeight,
    ModalTitleSize,
    ModalDescSize,
    ModalImgWidth,
    FooterFontSize,
    FooterTagline,
    Name,
}

impl ThemeAttr {
    /// All attributes in editor order.
    pub const ALL: [ThemeAttr; 30] = [
        ThemeAttr::PageBg,
        ThemeAttr::CardBg,
        ThemeAttr::TextColor,
        ThemeAttr::AccentColor,
        ThemeAttr::DeepColor,
        ThemeAttr::BtnBg,
        ThemeAttr::BtnText,
        ThemeAttr::BtnHoverBg,
        ThemeAttr::BtnHoverText,
        ThemeAttr::FooterBg,
        ThemeAttr::FooterText,
        ThemeAttr::DisplayFont,
        ThemeAttr::BodyFont,
        ThemeAttr::TitleSize,
        ThemeAttr::DescSize,
        ThemeAttr::DescClamp,
        ThemeAttr::Columns,
        ThemeAttr::Gap,
        ThemeAttr::ItemsPerPage,
        ThemeAttr::CardRadius,
        ThemeAttr::AspectRatio,
        ThemeAttr::ModalStyle,
        ThemeAttr::ModalWidth,
        ThemeAttr::ModalHeight,
        ThemeAttr::ModalTitleSize,
        ThemeAttr::ModalDescSize,
        ThemeAttr::ModalImgWidth,
        ThemeAttr::FooterFontSize,
        ThemeAttr::FooterTagline,
        ThemeAttr::Name,
    ];

    /// The camelCase key used in `settings.json` and in editor control ids.
    pub fn key(self) -> &'static str {
        match self {
            ThemeAttr::PageBg => "pageBg",
            ThemeAttr::CardBg => "cardBg",
            ThemeAttr::TextColor => "textColor",
            ThemeAttr::AccentColor => "accentColor",
            ThemeAttr::DeepColor => "deepColor",
            ThemeAttr::BtnBg => "btnBg",
            ThemeAttr::BtnText => "btnText",
            ThemeAttr::BtnHoverBg => "btnHoverBg",
            ThemeAttr::BtnHoverText => "btnHoverText",
            ThemeAttr::FooterBg => "footerBg",
            ThemeAttr::FooterText => "footerText",
            ThemeAttr::DisplayFont => "displayFont",
            ThemeAttr::BodyFont => "bodyFont",
            ThemeAttr::TitleSize => "titleSize",
            ThemeAttr::DescSize => "descSize",
            ThemeAttr::DescClamp => "descClamp",
            ThemeAttr::Columns => "columns",
            ThemeAttr::Gap => "gap",
            ThemeAttr::ItemsPerPage => "itemsPerPage",
            ThemeAttr::CardRadius => "cardRadius",
            ThemeAttr::AspectRatio => "aspectRatio",
            ThemeAttr::ModalStyle => "modalStyle",
            ThemeAttr::ModalWidth => "modalWidth",
            ThemeAttr::ModalHeight => "modalHeight",
            ThemeAttr::ModalTitleSize => "modalTitleSize",
            ThemeAttr::ModalDescSize => "modalDescSize",
            ThemeAttr::ModalImgWidth => "modalImgWidth",
            ThemeAttr::FooterFontSize => "footerFontSize",
            ThemeAttr::FooterTagline => "footerTagline",
            ThemeAttr::Name => "name",
        }
    }

    /// Looks an attribute up by its camelCase key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.key() == key)
    }

    /// The declared kind of this attribute.
    pub fn kind(self) -> AttrKind {
        match self {
            ThemeAttr::PageBg
            | ThemeAttr::CardBg
            | ThemeAttr::TextColor
            | ThemeAttr::AccentColor
            | ThemeAttr::DeepColor
            | ThemeAttr::BtnBg
            | ThemeAttr::BtnText
            | ThemeAttr::BtnHoverBg
            | ThemeAttr::BtnHoverText
            | ThemeAttr::FooterBg
            | ThemeAttr::FooterText => AttrKind::Color,
            ThemeAttr::DisplayFont | ThemeAttr::BodyFont => AttrKind::Font,
            ThemeAttr::TitleSize
            | ThemeAttr::DescSize
            | ThemeAttr::Gap
            | ThemeAttr::ModalTitleSize
            | ThemeAttr::ModalDescSize
            | ThemeAttr::FooterFontSize => AttrKind::Rem,
            ThemeAttr::CardRadius => AttrKind::Px,
            ThemeAttr::ModalImgWidth => AttrKind::Percent,
            ThemeAttr::DescClamp | ThemeAttr::Columns => AttrKind::Integer,
            ThemeAttr::ItemsPerPage => AttrKind::ItemsPerPage,
            ThemeAttr::AspectRatio | ThemeAttr::ModalWidth | ThemeAttr::ModalHeight => {
                AttrKind::Css
            }
            ThemeAttr::ModalStyle => AttrKind::ModalStyle,
            ThemeAttr::FooterTagline | ThemeAttr::Name => AttrKind::Text,
        }
    }

    /// Returns `true` for attributes mirrored by a color-picker control.
    pub fn is_color(self) -> bool {
        self.kind() == AttrKind::Color
    }
}

impl fmt::Display for ThemeAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ── Value types ───────────────────────────────────────────────────────────────

/// How many products a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsPerPage {
    /// A fixed page size (always > 0).
    Count(u32),
    /// Every product on a single page.
    All,
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemsPerPage::Count(n) => write!(f, "{n}"),
            ItemsPerPage::All => f.write_str("All"),
        }
    }
}

impl FromStr for ItemsPerPage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(ItemsPerPage::All);
        }
        match parse_whole(s) {
            Some(n) if n > 0 => Ok(ItemsPerPage::Count(n)),
            _ => Err(()),
        }
    }
}

impl Serialize for ItemsPerPage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ItemsPerPage::Count(n) => serializer.serialize_u32(*n),
            ItemsPerPage::All => serializer.serialize_str("All"),
        }
    }
}

/// Layout of the product detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ModalStyle {
    /// Image and text next to each other.
    #[default]
    #[serde(rename = "side-by-side")]
    SideBySide,
    /// Image above the text.
    #[serde(rename = "top-down")]
    TopDown,
}

impl fmt::Display for ModalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModalStyle::SideBySide => f.write_str("side-by-side"),
            ModalStyle::TopDown => f.write_str("top-down"),
        }
    }
}

impl FromStr for ModalStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "side-by-side" => Ok(ModalStyle::SideBySide),
            "top-down" => Ok(ModalStyle::TopDown),
            _ => Err(()),
        }
    }
}

// ── Theme record ──────────────────────────────────────────────────────────────

/// A named bundle of visual and layout attributes.
///
/// Serializes with camelCase keys matching [`ThemeAttr::key`].  Unknown keys
/// found in a settings file are kept in [`Theme::extra`] and written back out
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawTheme")]
pub struct Theme {
    pub name: String,
    pub page_bg: String,
    pub card_bg: String,
    pub text_color: String,
    pub accent_color: String,
    pub deep_color: String,
    pub btn_bg: String,
    pub btn_text: String,
    pub btn_hover_bg: String,
    pub btn_hover_text: String,
    pub footer_bg: String,
    pub footer_text: String,
    pub display_font: String,
    pub body_font: String,
    /// Product title size in `rem`.
    pub title_size: f64,
    /// Product description size in `rem`.
    pub desc_size: f64,
    /// Number of description lines shown on a card.
    pub desc_clamp: u32,
    pub columns: u32,
    /// Grid gap in `rem`.
    pub gap: f64,
    pub items_per_page: ItemsPerPage,
    /// Card corner radius in `px`.
    pub card_radius: f64,
    pub aspect_ratio: String,
    pub modal_style: ModalStyle,
    pub modal_width: String,
    pub modal_height: String,
    pub modal_title_size: f64,
    pub modal_desc_size: f64,
    /// Image share of the modal width, in percent.
    pub modal_img_width: u32,
    pub footer_font_size: f64,
    pub footer_tagline: String,
    /// Attributes outside the schema, passed through untouched.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for Theme {
    /// The fallback applied to every attribute a settings file omits.
    ///
    /// Values mirror the `editorial` built-in, with a neutral name.
    fn default() -> Self {
        Self {
            name: "Untitled".to_string(),
            page_bg: "#f7f3ee".to_string(),
            card_bg: "#ffffff".to_string(),
            text_color: "#2b2b2b".to_string(),
            accent_color: "#b5835a".to_string(),
            deep_color: "#3d2b1f".to_string(),
            btn_bg: "#3d2b1f".to_string(),
            btn_text: "#f7f3ee".to_string(),
            btn_hover_bg: "#b5835a".to_string(),
            btn_hover_text: "#ffffff".to_string(),
            footer_bg: "#3d2b1f".to_string(),
            footer_text: "#f7f3ee".to_string(),
            display_font: "'Playfair Display', Georgia, serif".to_string(),
            body_font: "'Inter', system-ui, sans-serif".to_string(),
            title_size: 1.1,
            desc_size: 0.9,
            desc_clamp: 3,
            columns: 3,
            gap: 2.0,
            items_per_page: ItemsPerPage::Count(12),
            card_radius: 4.0,
            aspect_ratio: "3/4".to_string(),
            modal_style: ModalStyle::SideBySide,
            modal_width: "860px".to_string(),
            modal_height: "90vh".to_string(),
            modal_title_size: 1.75,
            modal_desc_size: 1.0,
            modal_img_width: 48,
            footer_font_size: 0.85,
            footer_tagline: "Curated with care".to_string(),
            extra: IndexMap::new(),
        }
    }
}

impl Theme {
    /// Prints an attribute the way an editor control displays it.
    pub fn get(&self, attr: ThemeAttr) -> String {
        match attr {
            ThemeAttr::PageBg => self.page_bg.clone(),
            ThemeAttr::CardBg => self.card_bg.clone(),
            ThemeAttr::TextColor => self.text_color.clone(),
            ThemeAttr::AccentColor => self.accent_color.clone(),
            ThemeAttr::DeepColor => self.deep_color.clone(),
            ThemeAttr::BtnBg => self.btn_bg.clone(),
            ThemeAttr::BtnText => self.btn_text.clone(),
            ThemeAttr::BtnHoverBg => self.btn_hover_bg.clone(),
            ThemeAttr::BtnHoverText => self.btn_hover_text.clone(),
            ThemeAttr::FooterBg => self.footer_bg.clone(),
            ThemeAttr::FooterText => self.footer_text.clone(),
            ThemeAttr::DisplayFont => self.display_font.clone(),
            ThemeAttr::BodyFont => self.body_font.clone(),
            ThemeAttr::TitleSize => format_number(self.title_size),
            ThemeAttr::DescSize => format_number(self.desc_size),
            ThemeAttr::DescClamp => self.desc_clamp.to_string(),
            ThemeAttr::Columns => self.columns.to_string(),
            ThemeAttr::Gap => format_number(self.gap),
            ThemeAttr::ItemsPerPage => self.items_per_page.to_string(),
            ThemeAttr::CardRadius => format_number(self.card_radius),
            ThemeAttr::AspectRatio => self.aspect_ratio.clone(),
            ThemeAttr::ModalStyle => self.modal_style.to_string(),
            ThemeAttr::ModalWidth => self.modal_width.clone(),
            ThemeAttr::ModalHeight => self.modal_height.clone(),
            ThemeAttr::ModalTitleSize => format_number(self.modal_title_size),
            ThemeAttr::ModalDescSize => format_number(self.modal_desc_size),
            ThemeAttr::ModalImgWidth => self.modal_img_width.to_string(),
            ThemeAttr::FooterFontSize => format_number(self.footer_font_size),
            ThemeAttr::FooterTagline => self.footer_tagline.clone(),
            ThemeAttr::Name => self.name.clone(),
        }
    }

    /// Parses editor text into an attribute.
    ///
    /// Text attributes are stored verbatim.  Numeric attributes are trimmed
    /// and must be finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidValue`] when the text does not fit the
    /// attribute's kind; the theme is left unchanged in that case.
    pub fn set(&mut self, attr: ThemeAttr, value: &str) -> Result<(), ThemeError> {
        let invalid = || ThemeError::InvalidValue {
            attribute: attr.key(),
            value: value.to_string(),
        };
        let rem = || parse_size(value).ok_or_else(invalid);
        let whole = || parse_whole(value.trim()).ok_or_else(invalid);

        match attr {
            ThemeAttr::PageBg => self.page_bg = value.to_string(),
            ThemeAttr::CardBg => self.card_bg = value.to_string(),
            ThemeAttr::TextColor => self.text_color = value.to_string(),
            ThemeAttr::AccentColor => self.accent_color = value.to_string(),
            ThemeAttr::DeepColor => self.deep_color = value.to_string(),
            ThemeAttr::BtnBg => self.btn_bg = value.to_string(),
            ThemeAttr::BtnText => self.btn_text = value.to_string(),
            ThemeAttr::BtnHoverBg => self.btn_hover_bg = value.to_string(),
            ThemeAttr::BtnHoverText => self.btn_hover_text = value.to_string(),
            ThemeAttr::FooterBg => self.footer_bg = value.to_string(),
            ThemeAttr::FooterText => self.footer_text = value.to_string(),
            ThemeAttr::DisplayFont => self.display_font = value.to_string(),
            ThemeAttr::BodyFont => self.body_font = value.to_string(),
            ThemeAttr::TitleSize => self.title_size = rem()?,
            ThemeAttr::DescSize => self.desc_size = rem()?,
            ThemeAttr::DescClamp => self.desc_clamp = whole()?,
            ThemeAttr::Columns => self.columns = whole()?,
            ThemeAttr::Gap => self.gap = rem()?,
            ThemeAttr::ItemsPerPage => {
                self.items_per_page = value.parse().map_err(|()| invalid())?;
            }
            ThemeAttr::CardRadius => self.card_radius = rem()?,
            ThemeAttr::AspectRatio => self.aspect_ratio = value.to_string(),
            ThemeAttr::ModalStyle => {
                self.modal_style = value.parse().map_err(|()| invalid())?;
            }
            ThemeAttr::ModalWidth => self.modal_width = value.to_string(),
            ThemeAttr::ModalHeight => self.modal_height = value.to_string(),
            ThemeAttr::ModalTitleSize => self.modal_title_size = rem()?,
            ThemeAttr::ModalDescSize => self.modal_desc_size = rem()?,
            ThemeAttr::ModalImgWidth => self.modal_img_width = whole()?,
            ThemeAttr::FooterFontSize => self.footer_font_size = rem()?,
            ThemeAttr::FooterTagline => self.footer_tagline = value.to_string(),
            ThemeAttr::Name => self.name = value.to_string(),
        }
        Ok(())
    }

    /// Sets an attribute by its camelCase key.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownAttribute`] for keys outside the schema,
    /// otherwise the same errors as [`Theme::set`].
    pub fn set_by_key(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let attr =
            ThemeAttr::from_key(key).ok_or_else(|| ThemeError::UnknownAttribute(key.to_string()))?;
        self.set(attr, value)
    }

    /// The four representative colors shown on a theme card:
    /// page, card, accent and deep.
    pub fn swatches(&self) -> [&str; 4] {
        [
            &self.page_bg,
            &self.card_bg,
            &self.accent_color,
            &self.deep_color,
        ]
    }
}

// ── Lenient deserialization ───────────────────────────────────────────────────

/// Untyped theme object as found in a settings file.
///
/// Older exports wrote every attribute as a string, hand-edited files may omit
/// attributes; both are repaired in `From<RawTheme> for Theme`.
#[derive(Deserialize)]
#[serde(transparent)]
struct RawTheme(IndexMap<String, Value>);

impl From<RawTheme> for Theme {
    fn from(raw: RawTheme) -> Self {
        let mut theme = Theme::default();
        for (key, value) in raw.0 {
            let Some(attr) = ThemeAttr::from_key(&key) else {
                theme.extra.insert(key, value);
                continue;
            };
            let text = match &value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                Value::Array(_) | Value::Object(_) => {
                    warn!(attribute = attr.key(), "non-scalar theme value replaced by default");
                    continue;
                }
            };
            if let Err(e) = theme.set(attr, &text) {
                warn!("{e}; keeping default");
            }
        }
        theme
    }
}

// ── Number helpers ────────────────────────────────────────────────────────────

/// Prints a number without a trailing `.0` (`3.0` → `"3"`, `1.25` → `"1.25"`).
///
/// `f64`'s `Display` is the shortest text that parses back to the same value,
/// so `parse_size(&format_number(x)) == Some(x)` for every finite `x`.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

fn parse_size(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Parses a non-negative whole number, accepting `"3.0"` as well as `"3"`.
fn parse_whole(text: &str) -> Option<u32> {
    if let Ok(n) = text.parse::<u32>() {
        return Some(n);
    }
    let v = parse_size(text)?;
    (v.fract() == 0.0 && v <= f64::from(u32::MAX)).then_some(v as u32)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
