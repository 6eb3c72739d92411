// Value sanitizers shared by the rule builder and the custom-CSS appender.

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d*\.?\d+)\s*([a-zA-Z%]*)$").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d*\.?\d+").unwrap());
static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>|<style\b[^>]*>.*?</style>").unwrap()
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Normalize a CSS size value.
///
/// Splits the value into number and unit; a bare number gets
/// `fallback_unit` appended. `calc()` and `var()` expressions pass
/// through untouched. Malformed input collapses to its numeric part
/// with the fallback unit, or to an empty string when there is none.
pub fn size(value: &str, fallback_unit: &str) -> String {
    let value = value.trim();
    if value.starts_with("calc(") || value.starts_with("var(") {
        return value.to_string();
    }
    if let Some(caps) = SIZE_RE.captures(value) {
        let number = &caps[1];
        let unit = &caps[2];
        if unit.is_empty() {
            return format!("{number}{fallback_unit}");
        }
        return format!("{number}{unit}");
    }
    NUMBER_RE
        .find(value)
        .map(|m| format!("{}{fallback_unit}", m.as_str()))
        .unwrap_or_default()
}

/// Strip all markup from user-entered text.
///
/// Script and style elements go with their content, every other tag is
/// removed, and the result is trimmed.
pub fn strip_all_tags(text: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(text, "");
    TAG_RE.replace_all(&without_blocks, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_appends_fallback_unit() {
        assert_eq!(size("3", "px"), "3px");
        assert_eq!(size("0.5", "em"), "0.5em");
        assert_eq!(size("-2", "px"), "-2px");
    }

    #[test]
    fn size_keeps_existing_unit() {
        assert_eq!(size("1px", "px"), "1px");
        assert_eq!(size("1.5em", "px"), "1.5em");
        assert_eq!(size("50%", "px"), "50%");
        assert_eq!(size(" 12 px ", "px"), "12px");
    }

    #[test]
    fn size_passes_expressions_through() {
        assert_eq!(size("calc(100% - 20px)", "px"), "calc(100% - 20px)");
        assert_eq!(size("var(--border)", "px"), "var(--border)");
    }

    #[test]
    fn size_salvages_malformed_input() {
        assert_eq!(size("roughly 3 wide", "px"), "3px");
        assert_eq!(size("none", "px"), "");
        assert_eq!(size("", "px"), "");
    }

    #[test]
    fn strip_all_tags_removes_markup() {
        assert_eq!(strip_all_tags("<b>.foo{color:blue}</b>"), ".foo{color:blue}");
        assert_eq!(strip_all_tags("plain"), "plain");
    }

    #[test]
    fn strip_all_tags_drops_script_and_style_content() {
        assert_eq!(
            strip_all_tags("a<script type=\"text/javascript\">alert(1)</script>b"),
            "ab"
        );
        assert_eq!(strip_all_tags("a<style>.x{}</style>b"), "ab");
        assert_eq!(strip_all_tags("  <p>.bar{}</p>  "), ".bar{}");
    }
}
