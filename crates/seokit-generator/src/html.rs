//! HTML rendering of abstract head tags.
//!
//! Reference renderer turning [`HeadTag`] descriptors into head
//! markup, one element per line. Hosts with their own templating layer
//! can ignore this module and consume the descriptors directly; either
//! way, duplicate identity keys are a caller bug and fail the render.

use std::collections::HashSet;

use thiserror::Error;

use seokit_core::{HeadTag, MetaAttr};

/// Head rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Two tags carried the same identity key.
    #[error("duplicate head tag key: {0}")]
    DuplicateKey(String),
}

/// Result type for head rendering.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Render head tags to markup, one element per line.
pub fn render_head_tags(tags: &[HeadTag]) -> Result<String> {
    let mut seen = HashSet::new();
    for tag in tags {
        if !seen.insert(tag.key()) {
            return Err(RenderError::DuplicateKey(tag.key().to_string()));
        }
    }

    let elements: Vec<String> = tags.iter().map(render_tag).collect();
    Ok(elements.join("\n"))
}

fn render_tag(tag: &HeadTag) -> String {
    match tag {
        HeadTag::Meta { attr, content, .. } => {
            let (attr_name, attr_value) = match attr {
                MetaAttr::Name(name) => ("name", name),
                MetaAttr::Property(property) => ("property", property),
            };
            format!(
                r#"<meta {}="{}" content="{}">"#,
                attr_name,
                escape_attr(attr_value),
                escape_attr(content)
            )
        }
        HeadTag::Title { text, .. } => format!("<title>{}</title>", escape_text(text)),
        // The JSON payload is already `<`/`>`-escaped by the generator
        // and must be embedded verbatim.
        HeadTag::Script { media_type, json, .. } => {
            format!(r#"<script type="{}">{}</script>"#, escape_attr(media_type), json)
        }
    }
}

/// Escape text for an HTML attribute value.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for an HTML text node.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
