//! `mosaic-dynamic-css` — conditional CSS generation for the Mosaic builder.
//!
//! Pure transform crate: receives a settings snapshot, an environment
//! probe and the rule table accumulated by other contributors, returns
//! the merged table. Hook wiring, caching and invalidation stay with
//! the host.

pub mod custom;
pub mod probe;
pub mod render;
pub mod rules;
pub mod table;

pub use custom::append_custom_css;
pub use probe::{capability, EnvironmentProbe, FixedProbe};
pub use render::render;
pub use rules::build_rules;
pub use table::{RuleTable, Value, GLOBAL};
