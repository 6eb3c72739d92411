// Three-level rule table: media query -> selector -> property -> value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Media-query key for rules outside any media query.
pub const GLOBAL: &str = "global";

/// property -> value, for one selector.
pub type Declarations = BTreeMap<String, Value>;

/// selector -> declarations, for one media-query bucket.
pub type Selectors = BTreeMap<String, Declarations>;

/// One or several declarations of the same property.
///
/// `Many` renders as one declaration per entry, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    One(String),
    Many(Vec<String>),
}

impl Value {
    fn append(&mut self, value: String) {
        match self {
            Self::One(first) => {
                *self = Self::Many(vec![std::mem::take(first), value]);
            }
            Self::Many(values) => values.push(value),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Rule accumulator shared across contributors.
///
/// Built fresh on every generation pass. `BTreeMap` at every level
/// keeps iteration deterministic, so identical inputs serialize to
/// byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    /// media-query key -> selector -> property -> value.
    pub media: BTreeMap<String, Selectors>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    /// Set a property, replacing any previous value at the same key.
    pub fn set(&mut self, media: &str, selector: &str, property: &str, value: impl Into<Value>) {
        self.declarations(media, selector)
            .insert(property.to_string(), value.into());
    }

    /// Append an additional declaration for a property. A single
    /// existing value is promoted to a multi-value.
    pub fn push(&mut self, media: &str, selector: &str, property: &str, value: impl Into<String>) {
        let declarations = self.declarations(media, selector);
        match declarations.get_mut(property) {
            Some(existing) => existing.append(value.into()),
            None => {
                declarations.insert(property.to_string(), Value::One(value.into()));
            }
        }
    }

    pub fn get(&self, media: &str, selector: &str, property: &str) -> Option<&Value> {
        self.media.get(media)?.get(selector)?.get(property)
    }

    /// Selectors declared in one media-query bucket.
    pub fn selectors(&self, media: &str) -> Vec<&str> {
        self.media
            .get(media)
            .map(|selectors| selectors.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Recursive union with another table.
    ///
    /// Every key path present on only one side survives unchanged;
    /// where both sides declare the same property, `other` wins.
    pub fn merge(mut self, other: RuleTable) -> RuleTable {
        for (media, selectors) in other.media {
            let media_slot = self.media.entry(media).or_default();
            for (selector, declarations) in selectors {
                let selector_slot = media_slot.entry(selector).or_default();
                for (property, value) in declarations {
                    selector_slot.insert(property, value);
                }
            }
        }
        self
    }

    fn declarations(&mut self, media: &str, selector: &str) -> &mut Declarations {
        self.media
            .entry(media.to_string())
            .or_default()
            .entry(selector.to_string())
            .or_default()
    }
}

/// Comma-join a selector group that shares identical declarations.
pub fn group(selectors: &[&str]) -> String {
    selectors.join(",")
}
