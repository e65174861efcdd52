//! Projection of a theme onto named style variables.
//!
//! The rendering surface reads a single global namespace of CSS custom
//! properties (`--page-bg`, `--columns`, ...).  [`style_variables`] produces
//! the complete set for one theme; the caller writes every entry on every
//! application, so a theme switch never leaves a stale variable behind.
//!
//! Units are attached here and only here: themes store bare numbers
//! (`gap = 2`), the projection emits `2rem`.

use crate::domain::theme::{format_number, Theme};

/// One `--name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleVar {
    pub name: &'static str,
    pub value: String,
}

/// Every variable name written by [`style_variables`], in output order.
pub const STYLE_VAR_NAMES: [&str; 26] = [
    "--page-bg",
    "--card-bg",
    "--text-color",
    "--accent-color",
    "--deep-color",
    "--btn-bg",
    "--btn-text",
    "--btn-hover-bg",
    "--btn-hover-text",
    "--footer-bg",
    "--footer-text",
    "--display-font",
    "--body-font",
    "--title-size",
    "--desc-size",
    "--desc-clamp",
    "--columns",
    "--gap",
    "--card-radius",
    "--aspect-ratio",
    "--footer-font-size",
    "--modal-width",
    "--modal-height",
    "--modal-title-size",
    "--modal-desc-size",
    "--modal-img-width",
];

fn rem(v: f64) -> String {
    format!("{}rem", format_number(v))
}

fn px(v: f64) -> String {
    format!("{}px", format_number(v))
}

/// Returns the full variable set for `theme`, in [`STYLE_VAR_NAMES`] order.
pub fn style_variables(theme: &Theme) -> Vec<StyleVar> {
    let values = [
        theme.page_bg.clone(),
        theme.card_bg.clone(),
        theme.text_color.clone(),
        theme.accent_color.clone(),
        theme.deep_color.clone(),
        theme.btn_bg.clone(),
        theme.btn_text.clone(),
        theme.btn_hover_bg.clone(),
        theme.btn_hover_text.clone(),
        theme.footer_bg.clone(),
        theme.footer_text.clone(),
        theme.display_font.clone(),
        theme.body_font.clone(),
        rem(theme.title_size),
        rem(theme.desc_size),
        theme.desc_clamp.to_string(),
        theme.columns.to_string(),
        rem(theme.gap),
        px(theme.card_radius),
        theme.aspect_ratio.clone(),
        rem(theme.footer_font_size),
        theme.modal_width.clone(),
        theme.modal_height.clone(),
        rem(theme.modal_title_size),
        rem(theme.modal_desc_size),
        format!("{}%", theme.modal_img_width),
    ];

    STYLE_VAR_NAMES
        .into_iter()
        .zip(values)
        .map(|(name, value)| StyleVar { name, value })
        .collect()
}
