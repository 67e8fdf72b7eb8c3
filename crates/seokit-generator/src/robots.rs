//! robots.txt generation.
//!
//! Builds the text body of a `robots.txt` resource from declarative
//! policy options. Directive labels are emitted title-cased
//! (`User-agent`, `Allow`, `Disallow`, `Sitemap`); conforming parsers
//! treat labels case-insensitively, so the casing is a formatting
//! convention only.

use tracing::debug;

use seokit_core::{normalize, RobotsTxtOptions};

/// Generate robots.txt text.
///
/// One block per policy in input order, lines within a block in the
/// fixed order user-agent, allow, disallow, followed by a sitemap
/// block. Blocks are separated by a single blank line and the result
/// carries no surrounding whitespace. Empty options yield the empty
/// string.
#[must_use]
pub fn generate_robots_txt(options: &RobotsTxtOptions) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for policy in normalize(options.policy.as_ref()) {
        let mut block = String::new();
        for user_agent in normalize(policy.user_agent.as_ref()) {
            block.push_str(&format!("User-agent: {user_agent}\n"));
        }
        for path in normalize(policy.allow.as_ref()) {
            block.push_str(&format!("Allow: {path}\n"));
        }
        for path in normalize(policy.disallow.as_ref()) {
            block.push_str(&format!("Disallow: {path}\n"));
        }
        blocks.push(block);
    }

    let mut sitemap_block = String::new();
    for url in normalize(options.sitemap.as_ref()) {
        sitemap_block.push_str(&format!("Sitemap: {url}\n"));
    }
    blocks.push(sitemap_block);

    let text = blocks
        .iter()
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    debug!(blocks = blocks.len(), bytes = text.len(), "generated robots.txt");
    text
}
