//! Settings schema types
//!
//! This module defines the typed settings consumed by the external site
//! build engine, plus the conversion into the flat name/value mapping the
//! engine matches on. The recognized option names and their default
//! literals are a fixed contract with the engine; changing either breaks
//! the build.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Site Settings
// ============================================================================

/// Settings for one site build.
///
/// One field per recognized engine option. `Default` carries the site's
/// literal values; the loader may layer an override file on top and
/// populates `extra_header` from the generated notebook header when it
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct SiteSettings {
    /// Article author shown by the theme templates
    pub author: String,

    /// Site title
    pub sitename: String,

    /// Absolute site URL. Empty while developing so generated links stay
    /// document-relative.
    pub siteurl: String,

    /// Root directory the engine scans for content
    pub path: String,

    /// Timezone applied to article dates
    pub timezone: String,

    /// Default language code for generated content
    pub default_lang: String,

    /// Atom feed for all articles. Unset disables generation.
    pub feed_all_atom: Option<String>,

    /// Per-category Atom feed. Unset disables generation.
    pub category_feed_atom: Option<String>,

    /// Per-translation Atom feed. Unset disables generation.
    pub translation_feed_atom: Option<String>,

    /// Blogroll links. Order is display order in the sidebar.
    pub links: Vec<Link>,

    /// Master toggle for feed generation
    pub feeds: bool,

    /// Pagination toggle. `false` renders everything on one page.
    pub default_pagination: bool,

    /// Directory name of the theme to apply
    pub theme: String,

    /// Directories the engine searches for plugins
    pub plugin_paths: Vec<String>,

    /// Plugins to activate, in execution order. The loader appends the
    /// notebook-conversion plugin during composition.
    pub plugins: Vec<String>,

    /// Directory the notebook plugin scans for source notebooks
    pub notebook_dir: String,

    /// Extra HTML injected into page heads, read from the generated
    /// notebook header file when present. Never set from the override
    /// file; the loader owns it.
    #[serde(skip)]
    pub extra_header: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            author: "JP Rinehimer".to_string(),
            sitename: "UW Oceanography Python Users Group".to_string(),
            siteurl: String::new(),
            path: "content".to_string(),
            timezone: "Europe/Paris".to_string(),
            default_lang: "en".to_string(),
            feed_all_atom: None,
            category_feed_atom: None,
            translation_feed_atom: None,
            links: vec![
                Link::new("Python.org", "http://python.org/"),
                Link::new("Numpy", "http://www.numpy.org"),
                Link::new("Enthought Canopy", "https://www.enthought.com/products/canopy/"),
            ],
            feeds: true,
            default_pagination: false,
            theme: "theme".to_string(),
            plugin_paths: vec!["pelican-plugins".to_string()],
            plugins: vec!["summary".to_string()],
            notebook_dir: "../uwocnpyusers/notebooks/".to_string(),
            extra_header: None,
        }
    }
}

impl SiteSettings {
    /// Produces the flat mapping the build engine matches on.
    ///
    /// Keys are the engine's option names; iteration order is the
    /// declaration order above. `EXTRA_HEADER` appears only when the
    /// loader populated it.
    #[must_use]
    pub fn settings_map(&self) -> IndexMap<&'static str, SettingValue> {
        let mut map = IndexMap::new();
        map.insert("AUTHOR", SettingValue::Str(self.author.clone()));
        map.insert("SITENAME", SettingValue::Str(self.sitename.clone()));
        map.insert("SITEURL", SettingValue::Str(self.siteurl.clone()));
        map.insert("PATH", SettingValue::Str(self.path.clone()));
        map.insert("TIMEZONE", SettingValue::Str(self.timezone.clone()));
        map.insert("DEFAULT_LANG", SettingValue::Str(self.default_lang.clone()));
        map.insert("FEED_ALL_ATOM", SettingValue::from_opt(&self.feed_all_atom));
        map.insert(
            "CATEGORY_FEED_ATOM",
            SettingValue::from_opt(&self.category_feed_atom),
        );
        map.insert(
            "TRANSLATION_FEED_ATOM",
            SettingValue::from_opt(&self.translation_feed_atom),
        );
        map.insert(
            "LINKS",
            SettingValue::Pairs(
                self.links
                    .iter()
                    .map(|l| (l.label.clone(), l.url.clone()))
                    .collect(),
            ),
        );
        map.insert("FEEDS", SettingValue::Bool(self.feeds));
        map.insert(
            "DEFAULT_PAGINATION",
            SettingValue::Bool(self.default_pagination),
        );
        map.insert("THEME", SettingValue::Str(self.theme.clone()));
        map.insert("PLUGIN_PATHS", SettingValue::List(self.plugin_paths.clone()));
        map.insert("PLUGINS", SettingValue::List(self.plugins.clone()));
        map.insert("NOTEBOOK_DIR", SettingValue::Str(self.notebook_dir.clone()));
        if let Some(header) = &self.extra_header {
            map.insert("EXTRA_HEADER", SettingValue::Str(header.clone()));
        }
        map
    }
}

// ============================================================================
// Links
// ============================================================================

/// One blogroll entry: display label plus target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Display label
    pub label: String,
    /// Target URL
    pub url: String,
}

impl Link {
    /// Creates a link from label and URL.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Setting Values
// ============================================================================

/// A value in the exported settings mapping.
///
/// Mirrors the value kinds the engine distinguishes: string, boolean,
/// unset (serialized as null), plain list, and ordered label/URL pairs.
/// Untagged so the serialized mapping reads as plain YAML/JSON scalars
/// and sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Unset option (feed toggles use this to disable generation)
    None,
    /// Boolean toggle
    Bool(bool),
    /// String value
    Str(String),
    /// Ordered list of identifiers or paths
    List(Vec<String>),
    /// Ordered (label, URL) pairs
    Pairs(Vec<(String, String)>),
}

impl SettingValue {
    fn from_opt(value: &Option<String>) -> Self {
        value.as_ref().map_or(Self::None, |s| Self::Str(s.clone()))
    }
}

// ============================================================================
// Tests
// ============================================================================
