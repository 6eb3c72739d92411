// Capability probe: which third-party integrations are active.
// Replaces direct global lookups so hosts and tests inject their own view.

use std::collections::HashSet;

/// Well-known capability names the rule builder queries.
pub mod capability {
    /// Forms plugin (Gravity Forms).
    pub const FORMS: &str = "gravityforms";
    /// Contact-form plugin (Contact Form 7).
    pub const CONTACT_FORM: &str = "contact-form-7";
    /// E-commerce plugin (WooCommerce).
    pub const ECOMMERCE: &str = "woocommerce";
    /// Forum plugin (bbPress).
    pub const FORUM: &str = "bbpress";
}

/// Host-supplied view of which integrations are present at runtime.
///
/// Queried once per generation pass; implementations must be cheap and
/// side-effect-free.
pub trait EnvironmentProbe {
    fn is_present(&self, capability: &str) -> bool;
}

/// Set-backed probe for hosts with a static capability list, and for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedProbe {
    present: HashSet<String>,
}

impl FixedProbe {
    /// Probe reporting no integrations.
    pub fn none() -> Self {
        Self::default()
    }

    /// Probe reporting exactly the given capabilities.
    pub fn with(capabilities: &[&str]) -> Self {
        Self {
            present: capabilities.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Probe reporting every integration the rule builder knows about.
    pub fn all() -> Self {
        Self::with(&[
            capability::FORMS,
            capability::CONTACT_FORM,
            capability::ECOMMERCE,
            capability::FORUM,
        ])
    }
}

impl EnvironmentProbe for FixedProbe {
    fn is_present(&self, capability: &str) -> bool {
        self.present.contains(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_probe_reports_membership() {
        let probe = FixedProbe::with(&[capability::FORUM]);
        assert!(probe.is_present(capability::FORUM));
        assert!(!probe.is_present(capability::ECOMMERCE));
        assert!(!FixedProbe::none().is_present(capability::FORMS));
        assert!(FixedProbe::all().is_present(capability::CONTACT_FORM));
    }
}
