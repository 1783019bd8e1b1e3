//! `siteconf` - typed build settings for a blog-generation pipeline
//!
//! This library exposes the settings read once at build-start by the
//! external site build engine: site identity, theme selection, plugin
//! activation, feed and pagination toggles, and notebook-conversion
//! integration.

pub mod config;
pub mod error;
pub mod observability;

pub use config::{LoadResult, LoadWarning, LoaderOptions, SettingsLoader, SiteSettings};
pub use error::{ConfigError, Result};
