//! Seokit Generator Library
//!
//! Deterministic generators for SEO artifacts. Each generator takes a
//! declarative options value from [`seokit_core`] and produces the
//! corresponding document: an ordered list of abstract head tags, the
//! text of a robots.txt resource, or a sitemap XML document. All
//! generators are pure and synchronous; writing the output anywhere is
//! the caller's concern.
//!
//! # Modules
//!
//! - [`head`] - head tag generation
//! - [`html`] - reference markup rendering of head tags
//! - [`robots`] - robots.txt generation
//! - [`sitemap`] - sitemap XML generation

pub mod head;
pub mod html;
pub mod robots;
pub mod sitemap;

pub use head::{generate_head_tags, generate_meta_tags};
pub use html::{render_head_tags, RenderError};
pub use robots::generate_robots_txt;
pub use sitemap::{generate_sitemap_xml, SitemapError};
