//! Head-tag options and the abstract tag model.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::normalize::OneOrMany;

/// Options for head-tag generation.
///
/// Every field is optional; absent fields produce no tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadTagOptions {
    /// Ask crawlers not to index the page.
    pub no_index: bool,

    /// Page title.
    pub title: Option<String>,

    /// Page description.
    pub description: Option<String>,

    /// Open Graph properties, emitted in insertion order.
    pub open_graph: Option<OpenGraph>,

    /// schema.org JSON-LD blocks.
    pub structured_data: Option<StructuredData>,
}

/// Options for the reduced meta-tag generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetaTagOptions {
    /// Ask crawlers not to index the page.
    pub no_index: bool,

    /// Page title.
    pub title: Option<String>,

    /// Page description.
    pub description: Option<String>,
}

/// Ordered Open Graph property map.
///
/// Keys keep their insertion order; tag order is observable output, so
/// a plain map type with unspecified iteration order will not do. Each
/// key holds either a single value or an ordered list of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenGraph {
    entries: Vec<(String, OneOrMany<String>)>,
}

impl OpenGraph {
    /// Create an empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property.
    ///
    /// Entries with the same key are kept, not merged; deduplication is
    /// the caller's responsibility.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OneOrMany<String>>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OneOrMany<String>>) -> Self {
        self.insert(key, value);
        self
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OneOrMany<String>)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OpenGraph
where
    K: Into<String>,
    V: Into<OneOrMany<String>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for OpenGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OpenGraph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OpenGraphVisitor;

        impl<'de> Visitor<'de> for OpenGraphVisitor {
            type Value = OpenGraph;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of Open Graph properties")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(OpenGraph { entries })
            }
        }

        deserializer.deserialize_map(OpenGraphVisitor)
    }
}

/// schema.org JSON-LD blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredData {
    /// Breadcrumb trail; an empty list emits nothing.
    pub breadcrumb: Option<Vec<BreadcrumbItem>>,

    /// Article metadata.
    pub article: Option<ArticleData>,
}

/// One entry of a breadcrumb trail.
///
/// List order is significant: it defines the 1-based `position` in the
/// emitted `BreadcrumbList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    /// Display name of the crumb.
    pub name: String,

    /// URL of the crumb.
    pub item: String,
}

/// schema.org `Article` metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    /// Article headline.
    pub headline: String,

    /// Cover image URL.
    pub image: String,

    /// Publication date, passed through verbatim.
    pub date_published: String,
}

/// Attribute a `<meta>` tag is keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaAttr {
    /// `name="..."` metadata (robots, description).
    Name(String),
    /// `property="..."` metadata (Open Graph).
    Property(String),
}

/// An abstract head-tag descriptor.
///
/// Each tag carries a stable, content-derived identity key so that
/// repeated generation with equal input is deterministic and a
/// consuming renderer can reconcile output across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// A `<meta>` tag.
    Meta {
        /// Identity key.
        key: String,
        /// Keying attribute.
        attr: MetaAttr,
        /// `content` attribute value.
        content: String,
    },

    /// The `<title>` tag.
    Title {
        /// Identity key.
        key: String,
        /// Title text.
        text: String,
    },

    /// An inline `<script>` block carrying raw JSON.
    Script {
        /// Identity key.
        key: String,
        /// `type` attribute, e.g. `application/ld+json`.
        media_type: String,
        /// Raw JSON payload, `<`/`>`-escaped for inline embedding.
        json: String,
    },
}

impl HeadTag {
    /// Stable identity key for renderer reconciliation.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Meta { key, .. } | Self::Title { key, .. } | Self::Script { key, .. } => key,
        }
    }
}
