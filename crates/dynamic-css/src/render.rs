// Rule table serialization.

use crate::table::{RuleTable, Selectors, Value, GLOBAL};

/// Serialize a rule table to compact CSS.
///
/// `global` rules come first as bare blocks; every other media-query
/// key wraps its blocks in `@media <key>{...}`. A multi-valued
/// property emits one declaration per entry. Empty values produce no
/// declaration.
pub fn render(table: &RuleTable) -> String {
    let mut out = String::new();
    if let Some(selectors) = table.media.get(GLOBAL) {
        render_selectors(&mut out, selectors);
    }
    for (media, selectors) in &table.media {
        if media == GLOBAL {
            continue;
        }
        out.push_str("@media ");
        out.push_str(media);
        out.push('{');
        render_selectors(&mut out, selectors);
        out.push('}');
    }
    out
}

fn render_selectors(out: &mut String, selectors: &Selectors) {
    for (selector, declarations) in selectors {
        out.push_str(selector);
        out.push('{');
        for (property, value) in declarations {
            match value {
                Value::One(value) => render_declaration(out, property, value),
                Value::Many(values) => {
                    for value in values {
                        render_declaration(out, property, value);
                    }
                }
            }
        }
        out.push('}');
    }
}

fn render_declaration(out: &mut String, property: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(property);
    out.push(':');
    out.push_str(value);
    out.push(';');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_rules_render_as_bare_blocks() {
        let mut table = RuleTable::new();
        table.set(GLOBAL, ".alert-danger", "color", "#a94442");
        table.set(GLOBAL, ".alert-danger", "background-color", "#f2dede");

        assert_eq!(
            render(&table),
            ".alert-danger{background-color:#f2dede;color:#a94442;}"
        );
    }

    #[test]
    fn media_query_buckets_are_wrapped() {
        let mut table = RuleTable::new();
        table.set(GLOBAL, ".a", "color", "red");
        table.set("(max-width:600px)", ".a", "display", "none");

        assert_eq!(
            render(&table),
            ".a{color:red;}@media (max-width:600px){.a{display:none;}}"
        );
    }

    #[test]
    fn multi_values_emit_repeated_declarations() {
        let mut table = RuleTable::new();
        table.push(GLOBAL, ".a", "background", "#fff");
        table.push(GLOBAL, ".a", "background", "var(--bg, #fff)");

        assert_eq!(
            render(&table),
            ".a{background:#fff;background:var(--bg, #fff);}"
        );
    }

    #[test]
    fn empty_values_are_skipped() {
        let mut table = RuleTable::new();
        table.set(GLOBAL, ".a", "text-align", "");
        table.set(GLOBAL, ".a", "text-transform", "normal");

        assert_eq!(render(&table), ".a{text-transform:normal;}");
    }
}
