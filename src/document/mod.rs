
use serde::Serialize;

pub mod parsing;

/// Rich-text document as persisted by the editor.
/// `children` is `None` when the root, or its child list, is missing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Option<Vec<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(TextNode),
    Paragraph(Vec<Node>),
    Heading { level: HeadingLevel, children: Vec<Node> },
    List { kind: ListKind, children: Vec<Node> },
    ListItem(Vec<Node>),
    /// Both `link` and `autolink` tags.
    Link { target: LinkTarget, children: Vec<Node> },
    Quote(Vec<Node>),
    Upload(Media),
    Unknown { tag: String, children: Option<Vec<Node>> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub format: TextFormat,
}

/// Inline format bitmask written by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextFormat(pub u32);

impl TextFormat {
    pub const BOLD: u32 = 1;
    pub const ITALIC: u32 = 1 << 1;
    pub const STRIKETHROUGH: u32 = 1 << 3;
    pub const CODE: u32 = 1 << 4;

    pub fn has(&self, bit: u32) -> bool {
        self.0 & bit != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const DEFAULT: HeadingLevel = HeadingLevel(2);

    pub fn new(level: u8) -> Option<HeadingLevel> {
        match level {
            1..=6 => Some(HeadingLevel(level)),
            _ => None,
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tag_name(&self) -> String {
        format!("h{}", self.0)
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        HeadingLevel::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    Ordered,
    #[default]
    Unordered,
}

/// Link destination. The editor stores it either in the link fields or
/// directly on the node, so both are kept and resolved in that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinkTarget {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}

impl LinkTarget {
    pub fn resolve(&self) -> Option<&str> {
        self.primary.as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.secondary.as_deref().filter(|url| !url.is_empty()))
    }
}

/// Media record referenced by an upload node, already resolved by the content store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Media {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Document {
            children: Some(children),
        }
    }
}

impl Node {
    pub fn text(text: &str, format: u32) -> Node {
        Node::Text(TextNode {
            text: text.to_string(),
            format: TextFormat(format),
        })
    }

    /// Editor tag the node was read from. Unknown nodes keep their original tag.
    pub fn tag(&self) -> &str {
        match self {
            Node::Text(_) => "text",
            Node::Paragraph(_) => "paragraph",
            Node::Heading { .. } => "heading",
            Node::List { .. } => "list",
            Node::ListItem(_) => "listitem",
            Node::Link { .. } => "link",
            Node::Quote(_) => "quote",
            Node::Upload(_) => "upload",
            Node::Unknown { tag, .. } => tag.as_str(),
        }
    }
}
