//! Head-tag generation.
//!
//! Produces an ordered list of abstract [`HeadTag`] descriptors from
//! declarative options: robots noindex, title, description, Open Graph
//! properties and schema.org JSON-LD blocks. Rendering the descriptors
//! into markup is the consumer's concern (see [`crate::html`] for the
//! reference renderer).

use serde::Serialize;
use tracing::debug;

use seokit_core::{
    ArticleData, BreadcrumbItem, HeadTag, HeadTagOptions, MetaAttr, MetaTagOptions,
};

const LD_JSON_MEDIA_TYPE: &str = "application/ld+json";
const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";
const OG_PREFIX: &str = "og:";

/// Generate head tags in their fixed document order.
///
/// Absent fields produce no tags; an empty options value yields an
/// empty list. The order is: noindex, title, description, Open Graph
/// properties (map insertion order, one tag per value), breadcrumb
/// JSON-LD, article JSON-LD.
#[must_use]
pub fn generate_head_tags(options: &HeadTagOptions) -> Vec<HeadTag> {
    let mut tags = Vec::new();

    if options.no_index {
        tags.push(noindex_tag());
    }

    if let Some(title) = &options.title {
        tags.push(title_tag(title));
    }

    if let Some(description) = &options.description {
        tags.push(description_tag(description));
    }

    if let Some(open_graph) = &options.open_graph {
        for (key, value) in open_graph.iter() {
            let name = key.strip_prefix(OG_PREFIX).unwrap_or(key);
            for content in value.as_slice() {
                tags.push(HeadTag::Meta {
                    key: format!("seo-og-{name}-{content}"),
                    attr: MetaAttr::Property(format!("{OG_PREFIX}{name}")),
                    content: content.clone(),
                });
            }
        }
    }

    if let Some(structured_data) = &options.structured_data {
        if let Some(breadcrumb) = structured_data
            .breadcrumb
            .as_deref()
            .filter(|items| !items.is_empty())
        {
            if let Some(json) = breadcrumb_json(breadcrumb) {
                tags.push(HeadTag::Script {
                    key: "seo-sd-breadcrumb".to_string(),
                    media_type: LD_JSON_MEDIA_TYPE.to_string(),
                    json,
                });
            }
        }

        if let Some(article) = &structured_data.article {
            if let Some(json) = article_json(article) {
                tags.push(HeadTag::Script {
                    key: "seo-sd-article".to_string(),
                    media_type: LD_JSON_MEDIA_TYPE.to_string(),
                    json,
                });
            }
        }
    }

    debug!(count = tags.len(), "generated head tags");
    tags
}

/// Generate only the basic meta tags: noindex, title and description.
#[must_use]
pub fn generate_meta_tags(options: &MetaTagOptions) -> Vec<HeadTag> {
    let mut tags = Vec::new();

    if options.no_index {
        tags.push(noindex_tag());
    }

    if let Some(title) = &options.title {
        tags.push(title_tag(title));
    }

    if let Some(description) = &options.description {
        tags.push(description_tag(description));
    }

    debug!(count = tags.len(), "generated meta tags");
    tags
}

fn noindex_tag() -> HeadTag {
    HeadTag::Meta {
        key: "seo-noindex".to_string(),
        attr: MetaAttr::Name("robots".to_string()),
        content: "noindex".to_string(),
    }
}

fn title_tag(text: &str) -> HeadTag {
    HeadTag::Title {
        key: "seo-title".to_string(),
        text: text.to_string(),
    }
}

fn description_tag(content: &str) -> HeadTag {
    HeadTag::Meta {
        key: "seo-description".to_string(),
        attr: MetaAttr::Name("description".to_string()),
        content: content.to_string(),
    }
}

#[derive(Serialize)]
struct BreadcrumbListLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<ListItemLd<'a>>,
}

#[derive(Serialize)]
struct ListItemLd<'a> {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    position: usize,
    name: &'a str,
    item: &'a str,
}

#[derive(Serialize)]
struct ArticleLd<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    headline: &'a str,
    image: [&'a str; 1],
    #[serde(rename = "datePublished")]
    date_published: &'a str,
}

fn breadcrumb_json(items: &[BreadcrumbItem]) -> Option<String> {
    let payload = BreadcrumbListLd {
        context: SCHEMA_ORG_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, item)| ListItemLd {
                schema_type: "ListItem",
                position: index + 1,
                name: &item.name,
                item: &item.item,
            })
            .collect(),
    };

    serde_json::to_string(&payload).ok().map(|json| escape_inline_json(&json))
}

fn article_json(article: &ArticleData) -> Option<String> {
    let payload = ArticleLd {
        context: SCHEMA_ORG_CONTEXT,
        schema_type: "Article",
        headline: &article.headline,
        image: [&article.image],
        date_published: &article.date_published,
    };

    serde_json::to_string(&payload).ok().map(|json| escape_inline_json(&json))
}

/// Escape `<` and `>` so inline JSON cannot close the script element
/// it is embedded in.
fn escape_inline_json(json: &str) -> String {
    json.replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use seokit_core::{OpenGraph, StructuredData};
    use serde_json::json;

    use super::*;

    fn og_contents(tags: &[HeadTag], property: &str) -> Vec<String> {
        tags.iter()
            .filter_map(|tag| match tag {
                HeadTag::Meta {
                    attr: MetaAttr::Property(p),
                    content,
                    ..
                } if p == property => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    fn assert_unique_keys(tags: &[HeadTag]) {
        let mut keys: Vec<&str> = tags.iter().map(HeadTag::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), tags.len());
    }

    #[test]
    fn test_empty_options_generate_nothing() {
        assert!(generate_head_tags(&HeadTagOptions::default()).is_empty());
    }

    #[test]
    fn test_noindex_tag() {
        let tags = generate_head_tags(&HeadTagOptions {
            no_index: true,
            ..Default::default()
        });

        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags[0],
            HeadTag::Meta {
                key: "seo-noindex".to_string(),
                attr: MetaAttr::Name("robots".to_string()),
                content: "noindex".to_string(),
            }
        );
    }

    #[test]
    fn test_title_tag() {
        let tags = generate_head_tags(&HeadTagOptions {
            title: Some("Hello World".to_string()),
            ..Default::default()
        });

        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags[0],
            HeadTag::Title {
                key: "seo-title".to_string(),
                text: "Hello World".to_string(),
            }
        );
    }

    #[test]
    fn test_description_tag() {
        let tags = generate_head_tags(&HeadTagOptions {
            description: Some("My beautiful page".to_string()),
            ..Default::default()
        });

        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags[0],
            HeadTag::Meta {
                key: "seo-description".to_string(),
                attr: MetaAttr::Name("description".to_string()),
                content: "My beautiful page".to_string(),
            }
        );
    }

    #[test]
    fn test_open_graph_tags() {
        let tags = generate_head_tags(&HeadTagOptions {
            open_graph: Some(
                OpenGraph::new()
                    .with("type", "article")
                    .with("title", "How to Test with Jest")
                    .with("image", "https://cdn/image.jpg")
                    .with("article:author", "Jessy")
                    .with("article:tag", vec!["javascript", "jest", "testing"])
                    .with("article:published_time", "2020-12-31"),
            ),
            ..Default::default()
        });

        assert_eq!(tags.len(), 8);
        assert_unique_keys(&tags);
        assert_eq!(og_contents(&tags, "og:type"), vec!["article"]);
        assert_eq!(og_contents(&tags, "og:title"), vec!["How to Test with Jest"]);
        assert_eq!(og_contents(&tags, "og:image"), vec!["https://cdn/image.jpg"]);
        assert_eq!(og_contents(&tags, "og:article:author"), vec!["Jessy"]);
        assert_eq!(
            og_contents(&tags, "og:article:tag"),
            vec!["javascript", "jest", "testing"]
        );
        assert_eq!(
            og_contents(&tags, "og:article:published_time"),
            vec!["2020-12-31"]
        );
    }

    #[test]
    fn test_open_graph_prefix_applied_once() {
        let prefixed = generate_head_tags(&HeadTagOptions {
            open_graph: Some(OpenGraph::new().with("og:title", "Hello")),
            ..Default::default()
        });
        let bare = generate_head_tags(&HeadTagOptions {
            open_graph: Some(OpenGraph::new().with("title", "Hello")),
            ..Default::default()
        });

        assert_eq!(prefixed, bare);
        assert_eq!(og_contents(&prefixed, "og:title"), vec!["Hello"]);
        assert_eq!(prefixed[0].key(), "seo-og-title-Hello");
    }

    #[test]
    fn test_breadcrumb_structured_data() {
        let tags = generate_head_tags(&HeadTagOptions {
            structured_data: Some(StructuredData {
                breadcrumb: Some(vec![
                    BreadcrumbItem {
                        name: "Home".to_string(),
                        item: "https://www.example.com".to_string(),
                    },
                    BreadcrumbItem {
                        name: "Books".to_string(),
                        item: "https://www.example.com/books".to_string(),
                    },
                    BreadcrumbItem {
                        name: "LOTR".to_string(),
                        item: "https://www.example.com/books/lotr-4452".to_string(),
                    },
                ]),
                article: None,
            }),
            ..Default::default()
        });

        assert_eq!(tags.len(), 1);
        let HeadTag::Script { key, media_type, json } = &tags[0] else {
            panic!("expected a script tag");
        };
        assert_eq!(key, "seo-sd-breadcrumb");
        assert_eq!(media_type, "application/ld+json");

        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            json!({
                "@context": "https://schema.org",
                "@type": "BreadcrumbList",
                "itemListElement": [
                    { "@type": "ListItem", "position": 1, "name": "Home", "item": "https://www.example.com" },
                    { "@type": "ListItem", "position": 2, "name": "Books", "item": "https://www.example.com/books" },
                    { "@type": "ListItem", "position": 3, "name": "LOTR", "item": "https://www.example.com/books/lotr-4452" },
                ],
            })
        );
    }

    #[test]
    fn test_empty_breadcrumb_generates_nothing() {
        let tags = generate_head_tags(&HeadTagOptions {
            structured_data: Some(StructuredData {
                breadcrumb: Some(vec![]),
                article: None,
            }),
            ..Default::default()
        });

        assert!(tags.is_empty());
    }

    #[test]
    fn test_article_structured_data() {
        let tags = generate_head_tags(&HeadTagOptions {
            structured_data: Some(StructuredData {
                breadcrumb: None,
                article: Some(ArticleData {
                    headline: "How to Test with Jest".to_string(),
                    image: "https://cdn/image.png".to_string(),
                    date_published: "2020-12-31".to_string(),
                }),
            }),
            ..Default::default()
        });

        assert_eq!(tags.len(), 1);
        let HeadTag::Script { key, json, .. } = &tags[0] else {
            panic!("expected a script tag");
        };
        assert_eq!(key, "seo-sd-article");

        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": "How to Test with Jest",
                "image": ["https://cdn/image.png"],
                "datePublished": "2020-12-31",
            })
        );
    }

    #[test]
    fn test_inline_json_escapes_angle_brackets() {
        let tags = generate_head_tags(&HeadTagOptions {
            structured_data: Some(StructuredData {
                breadcrumb: None,
                article: Some(ArticleData {
                    headline: "</script><script>alert(1)".to_string(),
                    image: "https://cdn/image.png".to_string(),
                    date_published: "2020-12-31".to_string(),
                }),
            }),
            ..Default::default()
        });

        let HeadTag::Script { json, .. } = &tags[0] else {
            panic!("expected a script tag");
        };
        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
        assert!(json.contains("&lt;/script&gt;"));
    }

    #[test]
    fn test_fixed_tag_order() {
        let tags = generate_head_tags(&HeadTagOptions {
            no_index: true,
            title: Some("t".to_string()),
            description: Some("d".to_string()),
            open_graph: Some(OpenGraph::new().with("type", "website")),
            structured_data: Some(StructuredData {
                breadcrumb: Some(vec![BreadcrumbItem {
                    name: "Home".to_string(),
                    item: "https://x".to_string(),
                }]),
                article: Some(ArticleData {
                    headline: "h".to_string(),
                    image: "i".to_string(),
                    date_published: "2020-12-31".to_string(),
                }),
            }),
        });

        let keys: Vec<&str> = tags.iter().map(HeadTag::key).collect();
        assert_eq!(
            keys,
            vec![
                "seo-noindex",
                "seo-title",
                "seo-description",
                "seo-og-type-website",
                "seo-sd-breadcrumb",
                "seo-sd-article",
            ]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let options = HeadTagOptions {
            title: Some("Hello".to_string()),
            open_graph: Some(OpenGraph::new().with("type", "website")),
            ..Default::default()
        };

        assert_eq!(generate_head_tags(&options), generate_head_tags(&options));
    }

    #[test]
    fn test_meta_tags_subset() {
        let tags = generate_meta_tags(&MetaTagOptions {
            no_index: true,
            title: Some("Hello".to_string()),
            description: Some("World".to_string()),
        });

        let keys: Vec<&str> = tags.iter().map(HeadTag::key).collect();
        assert_eq!(keys, vec!["seo-noindex", "seo-title", "seo-description"]);
    }

    #[test]
    fn test_meta_tags_empty_options() {
        assert!(generate_meta_tags(&MetaTagOptions::default()).is_empty());
    }
}
