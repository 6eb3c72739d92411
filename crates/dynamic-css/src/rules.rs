// Conditional rule builder.
//
// Selector groups sharing identical declarations are written as one
// comma-joined selector key; the output is a set union keyed by
// property name either way.

use mosaic_settings::{AlertPalette, Settings};

use crate::probe::{capability, EnvironmentProbe};
use crate::table::{group, RuleTable, GLOBAL};

/// Build this component's conditional rules and merge them with the
/// table accumulated by other contributors.
///
/// `original` wins where both sides declare the same property; any
/// final override pass belongs to the host. Absent integrations
/// contribute no keys at all.
pub fn build_rules(
    settings: &Settings,
    probe: &dyn EnvironmentProbe,
    original: RuleTable,
) -> RuleTable {
    let palette = AlertPalette::resolve(settings);
    let mut css = RuleTable::new();

    if probe.is_present(capability::FORMS) {
        let elements = group(&[
            ".gform_wrapper .gfield_error .gfield_validation_message",
            ".gform_wrapper .gform_validation_errors",
        ]);
        css.set(GLOBAL, &elements, "text-align", palette.text_align.as_str());
        css.set(
            GLOBAL,
            &elements,
            "text-transform",
            palette.text_transform.as_str(),
        );
        css.set(
            GLOBAL,
            &elements,
            "border",
            format!("{} solid {}", palette.border_size, palette.danger_accent),
        );

        if palette.box_shadow {
            css.set(
                GLOBAL,
                ".gform_wrapper .gform_validation_errors",
                "box-shadow",
                "0 1px 1px rgba(0, 0, 0, 0.1)",
            );
        }

        let elements = group(&[
            ".gform_wrapper .gfield_required",
            ".gform_wrapper .gfield_error label",
            ".gform_wrapper .gfield_error .gfield_validation_message",
        ]);
        css.set(GLOBAL, &elements, "color", palette.danger_accent.as_str());
    }

    if probe.is_present(capability::CONTACT_FORM) {
        // Error notice.
        let elements = group(&[
            ".wpcf7 .wpcf7-form.invalid .wpcf7-response-output",
            ".wpcf7 .wpcf7-form.unaccepted .wpcf7-response-output",
            ".wpcf7 .wpcf7-form.spam .wpcf7-response-output",
            ".wpcf7 .wpcf7-form.failed .wpcf7-response-output",
        ]);
        css.set(
            GLOBAL,
            &elements,
            "background-color",
            palette.danger_bg.as_str(),
        );
        css.set(
            GLOBAL,
            &elements,
            "border",
            format!("{} solid {}", palette.border_size, palette.danger_accent),
        );
        css.set(GLOBAL, &elements, "color", palette.danger_accent.as_str());

        // Success notice.
        let sent = ".wpcf7 .wpcf7-form.sent .wpcf7-response-output";
        css.set(GLOBAL, sent, "background-color", palette.success_bg.as_str());
        css.set(
            GLOBAL,
            sent,
            "border",
            format!("{} solid {}", palette.border_size, palette.success_accent),
        );
        css.set(GLOBAL, sent, "color", palette.success_accent.as_str());
    }

    if probe.is_present(capability::ECOMMERCE) {
        // Error notice.
        let error_item = ".woocommerce-error li";
        css.set(
            GLOBAL,
            error_item,
            "background-color",
            palette.danger_bg.as_str(),
        );
        css.set(
            GLOBAL,
            error_item,
            "border",
            format!("{} solid {}", palette.border_size, palette.danger_accent),
        );
        css.set(GLOBAL, error_item, "color", palette.danger_accent.as_str());

        // General notice.
        let elements = group(&[
            ".woocommerce .woocommerce-info",
            ".woocommerce .woocommerce-message",
            ".woocommerce .return-to-shop",
        ]);
        css.set(
            GLOBAL,
            &elements,
            "background-color",
            palette.info_bg.as_str(),
        );
        css.set(
            GLOBAL,
            &elements,
            "border-top",
            format!("{} solid {}", palette.border_size, palette.info_accent),
        );
        css.set(
            GLOBAL,
            &elements,
            "border-bottom",
            format!("{} solid {}", palette.border_size, palette.info_accent),
        );
        css.set(GLOBAL, &elements, "color", palette.info_accent.as_str());

        let elements = group(&[
            ".validate-required.woocommerce-invalid input",
            ".validate-required.woocommerce-invalid .select2-selection--single",
        ]);
        css.set(
            GLOBAL,
            &elements,
            "box-shadow",
            format!("inset 3px 0 0 {}!important", palette.danger_accent),
        );

        let elements = group(&[
            ".validate-required.woocommerce-validated input",
            ".validate-required.woocommerce-validated .select2-selection--single",
        ]);
        css.set(
            GLOBAL,
            &elements,
            "box-shadow",
            format!("inset 3px 0 0 {}!important", palette.success_accent),
        );
    }

    if probe.is_present(capability::FORUM) {
        // General notice.
        let elements = group(&["div.bbp-template-notice", "div.indicator-hint"]);
        css.set(GLOBAL, &elements, "background", palette.info_bg.as_str());
        css.set(
            GLOBAL,
            &elements,
            "border",
            format!("{} solid {}", palette.border_size, palette.info_accent),
        );
    }

    // TODO: revisit the events-plugin pairing below; it predates the
    // alert element rework and may no longer be needed. Kept because
    // existing themes still target these selectors.
    let elements = group(&[".fusion-alert.alert-info", ".tribe-events-notices"]);
    css.set(
        GLOBAL,
        &elements,
        "background-color",
        palette.info_bg.as_str(),
    );
    css.set(GLOBAL, &elements, "border-color", palette.info_accent.as_str());
    css.set(GLOBAL, &elements, "color", palette.info_accent.as_str());

    // Error notice.
    css.set(
        GLOBAL,
        ".alert-danger",
        "background-color",
        palette.danger_bg.as_str(),
    );
    css.set(
        GLOBAL,
        ".alert-danger",
        "border-color",
        palette.danger_accent.as_str(),
    );
    css.set(GLOBAL, ".alert-danger", "color", palette.danger_accent.as_str());

    // Success notice.
    css.set(
        GLOBAL,
        ".alert-success",
        "background-color",
        palette.success_bg.as_str(),
    );
    css.set(
        GLOBAL,
        ".alert-success",
        "border-color",
        palette.success_accent.as_str(),
    );
    css.set(
        GLOBAL,
        ".alert-success",
        "color",
        palette.success_accent.as_str(),
    );

    // Warning notice.
    css.set(
        GLOBAL,
        ".alert-warning",
        "background-color",
        palette.warning_bg.as_str(),
    );
    css.set(
        GLOBAL,
        ".alert-warning",
        "border-color",
        palette.warning_accent.as_str(),
    );
    css.set(
        GLOBAL,
        ".alert-warning",
        "color",
        palette.warning_accent.as_str(),
    );

    css.merge(original)
}
