//! Seokit Core Library
//!
//! Option types and the abstract tag model for the Seokit SEO
//! document generators. All types are immutable value types: they
//! describe *what* should appear in an artifact and carry no state
//! beyond a single generation call.

pub mod head;
pub mod normalize;
pub mod robots;
pub mod sitemap;

pub use head::{
    ArticleData, BreadcrumbItem, HeadTag, HeadTagOptions, MetaAttr, MetaTagOptions, OpenGraph,
    StructuredData,
};
pub use normalize::{normalize, OneOrMany};
pub use robots::{RobotsPolicy, RobotsTxtOptions};
pub use sitemap::{ChangeFreq, SitemapEntry, SitemapXmlOptions, UrlEntry};
