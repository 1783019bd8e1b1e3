//! Configuration module
//!
//! Handles the site settings consumed by the external build engine:
//! the typed schema, the load pipeline (defaults, optional override file,
//! header probe, plugin composition), and validation.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{LoadResult, LoadWarning, LoaderOptions, SettingsLoader, NOTEBOOK_PLUGIN};
pub use schema::{Link, SettingValue, SiteSettings};
pub use validation::{ValidationResult, Validator};
