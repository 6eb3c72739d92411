// Settings snapshot and sanitizers.
// The host owns option persistence; this crate only reads a snapshot.

pub mod error;
pub mod palette;
pub mod sanitize;
pub mod settings;

pub use error::SettingsError;
pub use palette::AlertPalette;
pub use settings::Settings;
