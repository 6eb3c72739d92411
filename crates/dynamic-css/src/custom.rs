// Custom-CSS appender.

use mosaic_settings::{sanitize, Settings};

/// Append the user's `custom_css` option to an accumulated stylesheet.
///
/// Markup is stripped and the remainder appended verbatim, with no
/// separator. An absent or empty option leaves the stylesheet
/// untouched.
pub fn append_custom_css(css: impl Into<String>, settings: &Settings) -> String {
    let mut css = css.into();
    if let Some(custom) = settings.get("custom_css") {
        if !custom.is_empty() {
            css.push_str(&sanitize::strip_all_tags(custom));
        }
    }
    css
}
