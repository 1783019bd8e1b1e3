//! Settings loader
//!
//! This module implements the settings loading pipeline:
//! 1. Start from the built-in defaults
//! 2. Layer the optional `siteconf.yaml` override file on top
//! 3. Probe for the generated notebook header (`_nb_header.html`)
//! 4. Append the notebook-conversion plugin
//! 5. Validation
//! 6. Freeze with `Arc`
//!
//! The header probe is the one advisory path: a missing header file means
//! an earlier build stage has not run yet, so the loader records a warning
//! and continues without `extra_header`. Every other failure is hard.

use crate::config::schema::SiteSettings;
use crate::config::validation::Validator;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Plugin id appended during composition; renders embedded notebooks to HTML.
pub const NOTEBOOK_PLUGIN: &str = "liquid_tags.notebook";

// ============================================================================
// Public API
// ============================================================================

/// Options for the settings loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Site root directory; the override file and the generated header
    /// are resolved relative to it.
    pub site_root: PathBuf,

    /// File name of the optional settings override file.
    pub override_file: String,

    /// File name of the generated notebook header file.
    pub header_file: String,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            override_file: "siteconf.yaml".to_string(),
            header_file: "_nb_header.html".to_string(),
        }
    }
}

/// Result of loading the site settings.
#[derive(Debug)]
pub struct LoadResult {
    /// The loaded and validated settings, frozen for the rest of the build.
    pub settings: Arc<SiteSettings>,

    /// Advisory warnings encountered during loading.
    pub warnings: Vec<LoadWarning>,
}

/// Warning during settings loading.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    /// Warning message.
    pub message: String,

    /// Location where the warning occurred.
    pub location: Option<String>,
}

/// Settings loader.
///
/// Handles the full pipeline from built-in defaults to a frozen
/// `SiteSettings` handed to the build engine.
#[derive(Debug)]
pub struct SettingsLoader {
    options: LoaderOptions,
}

impl SettingsLoader {
    /// Creates a new settings loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a new settings loader with default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Loads the site settings and returns the frozen result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The override file exists but cannot be read or parsed
    /// - The header file exists but cannot be read as UTF-8
    /// - Validation fails
    ///
    /// A missing header file is NOT an error; it produces a warning in the
    /// result and the settings simply omit `extra_header`.
    pub fn load(&self) -> Result<LoadResult, ConfigError> {
        let mut warnings = Vec::new();

        // Stage 1+2: defaults, then the optional override file
        let mut settings = self.load_base()?;

        // Stage 3: probe for the generated notebook header
        self.probe_header(&mut settings, &mut warnings)?;

        // Stage 4: plugin composition
        Self::compose_plugins(&mut settings, &mut warnings);

        // Stage 5: validation
        let validation = Validator::new().validate(&settings);
        if validation.has_errors() {
            return Err(ConfigError::Validation {
                path: self.options.site_root.display().to_string(),
                errors: validation.errors,
            });
        }
        for issue in validation.warnings {
            warnings.push(LoadWarning {
                message: issue.message,
                location: Some(issue.path),
            });
        }

        // Stage 6: freeze
        Ok(LoadResult {
            settings: Arc::new(settings),
            warnings,
        })
    }

    /// Loads defaults, layering the override file on top when it exists.
    fn load_base(&self) -> Result<SiteSettings, ConfigError> {
        let path = self.options.site_root.join(&self.options.override_file);
        // Read first, classify after: no exists()/read window
        let raw = match read_utf8(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SiteSettings::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        let settings: SiteSettings =
            serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;
        debug!(path = %path.display(), "applied settings override file");
        Ok(settings)
    }

    /// Probes for the generated header file.
    ///
    /// Present: read its contents into `extra_header`, byte-exact.
    /// Absent: advisory warning, settings unchanged.
    fn probe_header(
        &self,
        settings: &mut SiteSettings,
        warnings: &mut Vec<LoadWarning>,
    ) -> Result<(), ConfigError> {
        let path = self.options.site_root.join(&self.options.header_file);
        // Read first, classify after: no exists()/read window
        match read_utf8(&path) {
            Ok(header) => {
                settings.extra_header = Some(header);
                debug!(path = %path.display(), "notebook header applied");
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let message = format!(
                    "{} not found; rerun the build to finalize",
                    self.options.header_file
                );
                warn!(path = %path.display(), "{message}");
                warnings.push(LoadWarning {
                    message,
                    location: Some(path.display().to_string()),
                });
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        }
        Ok(())
    }

    /// Appends the notebook plugin to the activation list.
    ///
    /// Appends at most once so loading stays idempotent even when the
    /// override file already lists it.
    fn compose_plugins(settings: &mut SiteSettings, warnings: &mut Vec<LoadWarning>) {
        if settings.plugins.iter().any(|p| p == NOTEBOOK_PLUGIN) {
            warnings.push(LoadWarning {
                message: format!("plugin '{NOTEBOOK_PLUGIN}' already listed; not appending again"),
                location: Some("plugins".to_string()),
            });
            return;
        }
        settings.plugins.push(NOTEBOOK_PLUGIN.to_string());
    }
}

/// Reads a file as UTF-8, stripping a leading BOM.
///
/// Callers classify the error kind themselves: `NotFound` is advisory for
/// the header probe and the default path for the override file; anything
/// else (permissions, invalid UTF-8) is a hard error.
fn read_utf8(path: &Path) -> std::io::Result<String> {
    let content = std::fs::read_to_string(path)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(content.to_owned())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_for(root: &Path) -> SettingsLoader {
        SettingsLoader::new(LoaderOptions {
            site_root: root.to_path_buf(),
            ..LoaderOptions::default()
        })
    }

    #[test]
    fn compose_appends_notebook_plugin_last() {
        let mut settings = SiteSettings::default();
        let mut warnings = Vec::new();
        SettingsLoader::compose_plugins(&mut settings, &mut warnings);
        assert_eq!(settings.plugins, vec!["summary", NOTEBOOK_PLUGIN]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn compose_does_not_double_append() {
        let mut settings = SiteSettings::default();
        settings.plugins.push(NOTEBOOK_PLUGIN.to_string());
        let mut warnings = Vec::new();
        SettingsLoader::compose_plugins(&mut settings, &mut warnings);
        assert_eq!(settings.plugins, vec!["summary", NOTEBOOK_PLUGIN]);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains(NOTEBOOK_PLUGIN));
    }

    #[test]
    fn loader_options_default() {
        let opts = LoaderOptions::default();
        assert_eq!(opts.site_root, PathBuf::from("."));
        assert_eq!(opts.override_file, "siteconf.yaml");
        assert_eq!(opts.header_file, "_nb_header.html");
    }

    #[test]
    fn read_utf8_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.html");
        std::fs::write(&path, "\u{feff}<p>hi</p>").unwrap();
        assert_eq!(read_utf8(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn header_read_not_found_is_advisory_even_without_site_root() {
        // NotFound from the read itself (no pre-check of the path) must
        // stay on the advisory path, including when the whole site root
        // is gone.
        let loader = loader_for(Path::new("/nonexistent/site/root"));
        let mut settings = SiteSettings::default();
        let mut warnings = Vec::new();
        loader
            .probe_header(&mut settings, &mut warnings)
            .expect("missing header must not be an error");
        assert_eq!(settings.extra_header, None);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("not found"));
    }

    #[test]
    fn missing_override_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = loader_for(dir.path()).load_base().unwrap();
        assert_eq!(settings, SiteSettings::default());
    }

    #[test]
    fn malformed_override_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("siteconf.yaml"), "plugins: {not: [valid").unwrap();
        let result = loader_for(dir.path()).load_base();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
