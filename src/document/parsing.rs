use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use spdlog::{debug, trace};

use crate::document::{Document, HeadingLevel, LinkTarget, ListKind, Media, Node, TextFormat, TextNode};

impl Document {
    pub fn from_json_str(buf: &str) -> Result<Document> {
        let value: Value = serde_json::from_str(buf).context("Error parsing rich-text document")?;
        Ok(Self::from_value(&value))
    }

    /// Reads the editor state. Never fails: whatever cannot be understood
    /// becomes an `Unknown` node or an absent child list.
    pub fn from_value(value: &Value) -> Document {
        let children = value.get("root")
            .and_then(|root| root.get("children"))
            .and_then(Value::as_array)
            .map(|nodes| parse_nodes(nodes));

        if children.is_none() {
            debug!("Rich-text document has no root children");
        }

        Document { children }
    }
}

fn parse_nodes(nodes: &[Value]) -> Vec<Node> {
    nodes.iter().map(parse_node).collect()
}

fn parse_children(value: &Value) -> Option<Vec<Node>> {
    value.get("children")
        .and_then(Value::as_array)
        .map(|nodes| parse_nodes(nodes))
}

fn get_str(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(|s| s.to_string())
}

pub fn parse_node(value: &Value) -> Node {
    let Some(tag) = value.get("type").and_then(Value::as_str) else {
        trace!("Rich-text node without a type: {}", value);
        return Node::Unknown { tag: "".to_string(), children: parse_children(value) };
    };

    match tag {
        "text" => Node::Text(TextNode {
            text: get_str(value, "text").unwrap_or_default(),
            format: parse_format(value.get("format")),
        }),
        "paragraph" => Node::Paragraph(parse_children(value).unwrap_or_default()),
        "heading" => Node::Heading {
            level: parse_heading_level(value.get("tag").and_then(Value::as_str)),
            children: parse_children(value).unwrap_or_default(),
        },
        "list" => Node::List {
            kind: parse_list_kind(value.get("listType").and_then(Value::as_str)),
            children: parse_children(value).unwrap_or_default(),
        },
        "listitem" => Node::ListItem(parse_children(value).unwrap_or_default()),
        "link" | "autolink" => Node::Link {
            target: LinkTarget {
                primary: value.get("fields").and_then(|fields| get_str(fields, "url")),
                secondary: get_str(value, "url"),
            },
            children: parse_children(value).unwrap_or_default(),
        },
        "quote" => Node::Quote(parse_children(value).unwrap_or_default()),
        "upload" => Node::Upload(parse_media(value.get("value"))),
        _ => {
            debug!("Unknown rich-text node type '{}'", tag);
            Node::Unknown { tag: tag.to_string(), children: parse_children(value) }
        }
    }
}

fn parse_format(format: Option<&Value>) -> TextFormat {
    let bits = format.and_then(Value::as_u64)
        .and_then(|bits| u32::try_from(bits).ok())
        .unwrap_or(0);
    TextFormat(bits)
}

pub fn parse_heading_level(tag: Option<&str>) -> HeadingLevel {
    lazy_static! {
        static ref HEADING_TAG_REGEX : Regex = Regex::new(
            r"^h(?P<level>[1-6])$"
        ).unwrap();
    }

    tag.and_then(|tag| HEADING_TAG_REGEX.captures(tag.trim()))
        .and_then(|cap| cap.name("level"))
        .and_then(|level| level.as_str().parse::<u8>().ok())
        .and_then(HeadingLevel::new)
        .unwrap_or_default()
}

fn parse_list_kind(list_type: Option<&str>) -> ListKind {
    match list_type {
        Some("number") => ListKind::Ordered,
        _ => ListKind::Unordered,
    }
}

/// Only a populated media object carries a URL; a bare id means the
/// relationship was not resolved by the content store.
fn parse_media(value: Option<&Value>) -> Media {
    match value {
        Some(media) if media.is_object() => Media {
            url: get_str(media, "url").filter(|url| !url.is_empty()),
            alt: get_str(media, "alt"),
        },
        _ => Media::default(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::test_data::DOCUMENT_JSON;

    use super::*;

    #[test]
    fn test_parse_full_document() {
        let document = Document::from_json_str(DOCUMENT_JSON).unwrap();
        let children = document.children.unwrap();
        let tags: Vec<&str> = children.iter().map(|n| n.tag()).collect();
        assert_eq!(tags, ["heading", "paragraph", "list", "quote", "upload", "horizontalrule"]);

        assert_eq!(children[0], Node::Heading {
            level: HeadingLevel::new(1).unwrap(),
            children: vec![Node::text("Why the sky is dark at night", 0)],
        });
        assert_eq!(children[2], Node::List {
            kind: ListKind::Ordered,
            children: vec![
                Node::ListItem(vec![Node::text("Olbers", 1)]),
                Node::ListItem(vec![Node::text("Expansion", 2)]),
            ],
        });
        assert_eq!(children[4], Node::Upload(Media {
            url: Some("/media/andromeda.jpg".to_string()),
            alt: Some("Andromeda galaxy".to_string()),
        }));
        assert_eq!(children[5], Node::Unknown { tag: "horizontalrule".to_string(), children: None });
    }

    #[test]
    fn test_invalid_json() {
        assert!(Document::from_json_str("{ root: ").is_err());
    }

    #[test]
    fn test_missing_root_or_children() {
        assert_eq!(Document::from_value(&json!({})), Document { children: None });
        assert_eq!(Document::from_value(&json!({"root": {}})), Document { children: None });
        assert_eq!(Document::from_value(&json!({"root": {"children": "nope"}})), Document { children: None });
        assert_eq!(Document::from_value(&json!({"root": {"children": []}})), Document::new(vec![]));
    }

    #[test]
    fn test_link_fields() {
        let node = parse_node(&json!({
            "type": "autolink",
            "url": "https://fallback.example",
            "children": [{"type": "text", "text": "here", "format": 0}]
        }));
        assert_eq!(node, Node::Link {
            target: LinkTarget { primary: None, secondary: Some("https://fallback.example".to_string()) },
            children: vec![Node::text("here", 0)],
        });

        let node = parse_node(&json!({
            "type": "link",
            "fields": {"url": "https://nasa.gov", "newTab": true},
            "children": []
        }));
        match node {
            Node::Link { target, .. } => assert_eq!(target.resolve(), Some("https://nasa.gov")),
            _ => panic!("expected a link"),
        }
    }

    #[test]
    fn test_heading_level_tags() {
        assert_eq!(parse_heading_level(Some("h4")).value(), 4);
        assert_eq!(parse_heading_level(Some("h6")).value(), 6);
        assert_eq!(parse_heading_level(Some("h7")).value(), 2);
        assert_eq!(parse_heading_level(Some("title")).value(), 2);
        assert_eq!(parse_heading_level(Some("")).value(), 2);
        assert_eq!(parse_heading_level(None).value(), 2);
    }

    #[test]
    fn test_malformed_nodes_degrade() {
        assert_eq!(parse_node(&json!(null)), Node::Unknown { tag: "".to_string(), children: None });
        assert_eq!(parse_node(&json!(42)), Node::Unknown { tag: "".to_string(), children: None });
        assert_eq!(parse_node(&json!({"type": "text", "text": 3, "format": "bold"})), Node::text("", 0));
        assert_eq!(parse_node(&json!({"type": "paragraph"})), Node::Paragraph(vec![]));
        assert_eq!(parse_node(&json!({"type": "upload", "value": "65f1c0ffee"})), Node::Upload(Media::default()));
        assert_eq!(parse_node(&json!({"type": "upload", "value": {"url": "", "alt": "x"}})),
                   Node::Upload(Media { url: None, alt: Some("x".to_string()) }));
        assert_eq!(parse_node(&json!({"type": "list", "listType": "bullet", "children": []})),
                   Node::List { kind: ListKind::Unordered, children: vec![] });
        assert_eq!(parse_node(&json!({"type": "text", "text": "big", "format": 4294967296u64})), Node::text("big", 0));
    }
}
