//! Sitemap XML generation.
//!
//! Produces `urlset` and `sitemapindex` documents following the
//! sitemaps.org protocol.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use thiserror::Error;
use tracing::debug;

use seokit_core::{SitemapEntry, SitemapXmlOptions, UrlEntry};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// Mutually exclusive root elements were both requested.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type for sitemap generation.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Generate a sitemap XML document.
///
/// Emits a `urlset` document when `url_set` is present, a
/// `sitemapindex` document when `sitemap_index` is present, and the
/// bare XML declaration when neither is. Requesting both is an input
/// error, detected before any output is assembled.
pub fn generate_sitemap_xml(options: &SitemapXmlOptions) -> Result<String> {
    if options.url_set.is_some() && options.sitemap_index.is_some() {
        return Err(SitemapError::InvalidOptions(
            "either a 'urlset' or a 'sitemapindex' can be generated, but not both".to_string(),
        ));
    }

    let mut writer = XmlWriter::new(options.pretty);

    if let Some(url_set) = &options.url_set {
        debug!(count = url_set.len(), "generating urlset sitemap");
        writer.open("urlset", Some(SITEMAP_NS));
        for entry in url_set {
            write_url(&mut writer, entry);
        }
        writer.close("urlset");
    }

    if let Some(sitemap_index) = &options.sitemap_index {
        debug!(count = sitemap_index.len(), "generating sitemap index");
        writer.open("sitemapindex", Some(SITEMAP_NS));
        for entry in sitemap_index {
            write_sitemap(&mut writer, entry);
        }
        writer.close("sitemapindex");
    }

    Ok(writer.finish())
}

fn write_url(writer: &mut XmlWriter, entry: &UrlEntry) {
    writer.open("url", None);
    writer.text_element("loc", &entry.loc);
    if let Some(lastmod) = &entry.lastmod {
        writer.text_element("lastmod", lastmod);
    }
    if let Some(changefreq) = entry.changefreq {
        writer.text_element("changefreq", changefreq.as_str());
    }
    if let Some(priority) = entry.priority {
        writer.text_element("priority", &priority.to_string());
    }
    writer.close("url");
}

fn write_sitemap(writer: &mut XmlWriter, entry: &SitemapEntry) {
    writer.open("sitemap", None);
    writer.text_element("loc", &entry.loc);
    if let Some(lastmod) = &entry.lastmod {
        writer.text_element("lastmod", lastmod);
    }
    writer.close("sitemap");
}

/// Minimal XML writer covering what the sitemap protocol needs: a
/// declaration, one namespaced root and two levels of nested text
/// elements, either dense on a single line or indented by two-space
/// steps.
struct XmlWriter {
    buf: String,
    pretty: bool,
    depth: usize,
}

impl XmlWriter {
    fn new(pretty: bool) -> Self {
        Self {
            buf: String::from(XML_DECLARATION),
            pretty,
            depth: 0,
        }
    }

    fn break_line(&mut self) {
        if self.pretty {
            self.buf.push('\n');
            for _ in 0..self.depth {
                self.buf.push_str("  ");
            }
        }
    }

    fn open(&mut self, name: &str, namespace: Option<&str>) {
        self.break_line();
        self.buf.push('<');
        self.buf.push_str(name);
        if let Some(namespace) = namespace {
            self.buf.push_str(" xmlns=\"");
            self.buf.push_str(namespace);
            self.buf.push('"');
        }
        self.buf.push('>');
        self.depth += 1;
    }

    fn close(&mut self, name: &str) {
        self.depth -= 1;
        self.break_line();
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    fn text_element(&mut self, name: &str, text: &str) {
        self.break_line();
        self.buf.push('<');
        self.buf.push_str(name);
        self.buf.push('>');
        self.buf.push_str(&escape_xml(text));
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
