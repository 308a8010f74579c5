pub mod loader;
pub mod model;

pub use loader::{load_or_default, load_settings, settings_path, SettingsError};
pub use model::Settings;
