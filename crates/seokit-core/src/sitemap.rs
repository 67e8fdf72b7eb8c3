//! Sitemap options.

use serde::{Deserialize, Serialize};

/// Options for sitemap XML generation.
///
/// `url_set` and `sitemap_index` are mutually exclusive: the sitemap
/// protocol allows exactly one root element per document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SitemapXmlOptions {
    /// Entries of a `urlset` document.
    pub url_set: Option<Vec<UrlEntry>>,

    /// Entries of a `sitemapindex` document.
    pub sitemap_index: Option<Vec<SitemapEntry>>,

    /// Indent output with newlines and two-space steps.
    pub pretty: bool,
}

/// A `<url>` entry of a `urlset` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    /// URL location.
    pub loc: String,

    /// Last modification date, passed through verbatim.
    #[serde(default)]
    pub lastmod: Option<String>,

    /// Change frequency hint.
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,

    /// Priority relative to other URLs of the site (0.0 to 1.0).
    #[serde(default)]
    pub priority: Option<f64>,
}

impl UrlEntry {
    /// Create an entry with only a location.
    #[must_use]
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }
}

/// A `<sitemap>` entry of a `sitemapindex` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Sitemap location.
    pub loc: String,

    /// Last modification date, passed through verbatim.
    #[serde(default)]
    pub lastmod: Option<String>,
}

/// Change frequency hint for a sitemap URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Lower-case protocol name of the frequency.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}
