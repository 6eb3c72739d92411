// Alert palette resolution.
// Option names and fallbacks mirror the shipped theme defaults.

use crate::sanitize;
use crate::settings::Settings;

/// Resolved alert styling, one field per option the rule builder reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertPalette {
    pub info_bg: String,
    pub info_accent: String,
    pub danger_bg: String,
    pub danger_accent: String,
    pub success_bg: String,
    pub success_accent: String,
    pub warning_bg: String,
    pub warning_accent: String,
    pub text_align: String,
    pub text_transform: String,
    pub border_size: String,
    pub box_shadow: bool,
}

impl AlertPalette {
    /// Resolve the palette from a settings snapshot.
    ///
    /// Background colors fall back to the shipped defaults and are
    /// normalized to lowercase when set. Accent colors have no default
    /// and pass through untouched.
    pub fn resolve(settings: &Settings) -> Self {
        Self {
            info_bg: bg_color(settings, "info_bg_color", "#ffffff"),
            info_accent: accent(settings, "info_accent_color"),
            danger_bg: bg_color(settings, "danger_bg_color", "#f2dede"),
            danger_accent: accent(settings, "danger_accent_color"),
            success_bg: bg_color(settings, "success_bg_color", "#dff0d8"),
            success_accent: accent(settings, "success_accent_color"),
            warning_bg: bg_color(settings, "warning_bg_color", "#fcf8e3"),
            warning_accent: accent(settings, "warning_accent_color"),
            text_align: settings.get_or("alert_box_text_align", "").to_string(),
            text_transform: settings.get_or("alert_text_transform", "normal").to_string(),
            border_size: border_size(settings),
            box_shadow: settings.get("alert_box_shadow") == Some("yes"),
        }
    }
}

fn bg_color(settings: &Settings, name: &str, default: &str) -> String {
    match settings.get(name) {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => default.to_string(),
    }
}

fn accent(settings: &Settings, name: &str) -> String {
    settings.get(name).unwrap_or("").to_string()
}

fn border_size(settings: &Settings) -> String {
    match settings.get("alert_border_size") {
        Some(value) if !value.is_empty() => sanitize::size(value, "px"),
        _ => "1px".to_string(),
    }
}
