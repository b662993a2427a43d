//! Page metadata types for the site shell.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Site-level metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Base URL used to resolve relative links.
    pub base_url: Option<String>,
    /// Default page title.
    pub title: Option<String>,
    /// Template applied to page titles; `%s` is replaced by the page title.
    pub title_template: Option<String>,
    /// Site description.
    pub description: Option<String>,
    /// Open Graph block.
    pub open_graph: Option<OpenGraph>,
    /// Icon set.
    pub icons: Option<Icons>,
    /// Viewport settings.
    pub viewport: Viewport,
    /// Custom properties.
    pub custom: IndexMap<String, MetadataValue>,
}

impl SiteMetadata {
    /// Standard metadata for a site: default title, `%s - title` template,
    /// website Open Graph block, favicon set, and a cover-fit viewport.
    pub fn standard(title: impl Into<String>, base_url: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            base_url: Some(base_url.into()),
            title_template: Some(format!("%s - {title}")),
            open_graph: Some(OpenGraph {
                kind: "website".to_string(),
                title: Some(title.clone()),
                locale: Some("en".to_string()),
            }),
            title: Some(title),
            icons: Some(Icons {
                icon: Some("/favicon.ico".to_string()),
                shortcut: vec![ShortcutIcon {
                    url: "/favicon.ico".to_string(),
                    sizes: Some("32".to_string()),
                }],
            }),
            viewport: Viewport::default(),
            ..Self::default()
        }
    }

    /// Resolve a page title against the template.
    ///
    /// Falls back to the site default title when the page has none.
    pub fn resolve_title(&self, page_title: Option<&str>) -> Option<String> {
        match (page_title, &self.title_template) {
            (Some(title), Some(template)) => Some(template.replace("%s", title)),
            (Some(title), None) => Some(title.to_string()),
            (None, _) => self.title.clone(),
        }
    }
}

/// Open Graph metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenGraph {
    /// Content type (e.g. "website").
    #[serde(rename = "type")]
    pub kind: String,
    /// Shared title.
    pub title: Option<String>,
    /// Content locale.
    pub locale: Option<String>,
}

/// Icon set for the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Icons {
    /// Primary icon path.
    pub icon: Option<String>,
    /// Shortcut icon entries.
    pub shortcut: Vec<ShortcutIcon>,
}

/// A shortcut icon entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutIcon {
    /// Icon URL.
    pub url: String,
    /// Icon size hint.
    pub sizes: Option<String>,
}

/// Viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Initial zoom level.
    pub initial_scale: f32,
    /// Viewport fit mode (e.g. "cover").
    pub viewport_fit: Option<String>,
    /// Supported color schemes (e.g. "light dark").
    pub color_scheme: Option<String>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            initial_scale: 1.0,
            viewport_fit: Some("cover".to_string()),
            color_scheme: Some("light dark".to_string()),
        }
    }
}

/// A metadata value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// Array of values.
    Array(Vec<MetadataValue>),
    /// Nested object.
    Object(IndexMap<String, MetadataValue>),
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        MetadataValue::Int(v)
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Float(v)
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::String(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::String(v.to_string())
    }
}
