//! robots.txt options.

use serde::{Deserialize, Serialize};

use crate::normalize::OneOrMany;

/// Options for robots.txt generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RobotsTxtOptions {
    /// Crawler policies, one text block each, in input order.
    pub policy: Option<OneOrMany<RobotsPolicy>>,

    /// Sitemap URLs listed in a trailing block.
    pub sitemap: Option<OneOrMany<String>>,
}

/// A single crawler policy block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RobotsPolicy {
    /// User agents the policy applies to.
    pub user_agent: Option<OneOrMany<String>>,

    /// Path prefixes crawlers may fetch.
    pub allow: Option<OneOrMany<String>>,

    /// Path prefixes crawlers must not fetch.
    pub disallow: Option<OneOrMany<String>>,
}
