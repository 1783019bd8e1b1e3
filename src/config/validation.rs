//! Settings validation
//!
//! Semantic checks on the composed settings, performed after the override
//! file and plugin composition have been applied. Validation collects ALL
//! issues (doesn't stop at first) so a broken override file is reported in
//! one pass.

use crate::config::schema::SiteSettings;
use crate::error::{Severity, ValidationIssue};

use std::collections::HashSet;

// ============================================================================
// Public API
// ============================================================================

/// Result of settings validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Validation errors (prevent loading).
    pub errors: Vec<ValidationIssue>,

    /// Validation warnings (informational).
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Settings validator.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the composed settings.
    #[must_use]
    pub fn validate(mut self, settings: &SiteSettings) -> ValidationResult {
        self.check_identity(settings);
        self.check_links(settings);
        self.check_feeds(settings);
        self.check_plugins(settings);

        ValidationResult {
            errors: self.errors,
            warnings: self.warnings,
        }
    }

    fn check_identity(&mut self, settings: &SiteSettings) {
        if settings.sitename.trim().is_empty() {
            self.warn("sitename", "sitename is empty");
        }
        if settings.author.trim().is_empty() {
            self.warn("author", "author is empty");
        }
        // The engine joins URL segments itself
        if !settings.siteurl.is_empty() && settings.siteurl.ends_with('/') {
            self.warn("siteurl", "siteurl has a trailing slash");
        }
    }

    fn check_links(&mut self, settings: &SiteSettings) {
        for (i, link) in settings.links.iter().enumerate() {
            if link.label.trim().is_empty() {
                self.error(&format!("links[{i}]"), "link label is empty");
            }
            if !link.url.starts_with("http://") && !link.url.starts_with("https://") {
                self.warn(
                    &format!("links[{i}]"),
                    &format!("link URL '{}' has no http(s) scheme", link.url),
                );
            }
        }
    }

    fn check_feeds(&mut self, settings: &SiteSettings) {
        let any_feed = settings.feed_all_atom.is_some()
            || settings.category_feed_atom.is_some()
            || settings.translation_feed_atom.is_some();
        if settings.feeds && !any_feed {
            self.warn(
                "feeds",
                "feeds enabled but no Atom feed setting is set; nothing will be generated",
            );
        }
    }

    fn check_plugins(&mut self, settings: &SiteSettings) {
        let mut seen = HashSet::new();
        for (i, plugin) in settings.plugins.iter().enumerate() {
            if plugin.trim().is_empty() {
                self.error(&format!("plugins[{i}]"), "plugin identifier is empty");
                continue;
            }
            if !seen.insert(plugin.as_str()) {
                self.error(
                    &format!("plugins[{i}]"),
                    &format!("duplicate plugin '{plugin}'"),
                );
            }
        }
        for (i, path) in settings.plugin_paths.iter().enumerate() {
            if path.trim().is_empty() {
                self.error(&format!("plugin_paths[{i}]"), "plugin path is empty");
            }
        }
    }

    fn error(&mut self, path: &str, message: &str) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        });
    }

    fn warn(&mut self, path: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.to_string(),
            severity: Severity::Warning,
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Link;

    #[test]
    fn defaults_validate_without_errors() {
        let result = Validator::new().validate(&SiteSettings::default());
        assert!(result.is_valid(), "defaults should be valid: {:?}", result.errors);
    }

    #[test]
    fn defaults_warn_about_unset_feed_settings() {
        // feeds is on but all three Atom settings are unset while developing
        let result = Validator::new().validate(&SiteSettings::default());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.path == "feeds" && w.message.contains("no Atom feed")),
            "expected the unset-feeds warning: {:?}",
            result.warnings
        );
    }

    #[test]
    fn duplicate_plugin_is_an_error() {
        let mut settings = SiteSettings::default();
        settings.plugins.push("summary".to_string());
        let result = Validator::new().validate(&settings);
        assert!(result.has_errors());
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.path == "plugins[1]" && e.message.contains("duplicate")),
            "expected a duplicate-plugin error: {:?}",
            result.errors
        );
    }

    #[test]
    fn empty_plugin_identifier_is_an_error() {
        let mut settings = SiteSettings::default();
        settings.plugins.push("  ".to_string());
        let result = Validator::new().validate(&settings);
        assert!(result.errors.iter().any(|e| e.path == "plugins[1]"));
    }

    #[test]
    fn empty_link_label_is_an_error() {
        let mut settings = SiteSettings::default();
        settings.links.push(Link::new("", "http://example.org/"));
        let result = Validator::new().validate(&settings);
        assert!(result.errors.iter().any(|e| e.path == "links[3]"));
    }

    #[test]
    fn schemeless_link_url_is_a_warning() {
        let mut settings = SiteSettings::default();
        settings.links.push(Link::new("Local", "example.org"));
        let result = Validator::new().validate(&settings);
        assert!(result.is_valid());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.path == "links[3]" && w.message.contains("scheme"))
        );
    }

    #[test]
    fn collects_all_issues_in_one_pass() {
        let mut settings = SiteSettings::default();
        settings.sitename = String::new();
        settings.plugins.push(String::new());
        settings.plugins.push("summary".to_string());
        let result = Validator::new().validate(&settings);
        assert_eq!(result.errors.len(), 2);
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn trailing_slash_siteurl_is_a_warning() {
        let mut settings = SiteSettings::default();
        settings.siteurl = "https://uwocnpyusers.example.org/".to_string();
        let result = Validator::new().validate(&settings);
        assert!(result.warnings.iter().any(|w| w.path == "siteurl"));
    }
}
