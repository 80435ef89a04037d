use serde::Serialize;

use crate::document::HeadingLevel;

pub mod document_renderer;
pub mod html_writer;

pub const NO_CONTENT_TEXT: &str = "No content available.";

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub no_content_text: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            no_content_text: NO_CONTENT_TEXT.to_string(),
        }
    }
}

/// Rendered document, one node per root child (or the single placeholder).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTree {
    pub nodes: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RenderNode {
    /// A node that renders to nothing. Kept so sibling positions stay stable.
    Empty,
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    pub children: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ElementKind {
    Strong,
    Emphasis,
    Strikethrough,
    Code,
    Paragraph,
    Heading { level: HeadingLevel },
    OrderedList,
    UnorderedList,
    ListItem,
    /// Always opens in a new browsing context.
    Link { href: String },
    BlockQuote,
    Figure,
    Image { src: String, alt: String },
    FigCaption,
    Container,
    Placeholder,
}

impl RenderNode {
    pub fn element(kind: ElementKind, children: Vec<RenderNode>) -> RenderNode {
        RenderNode::Element(Element { kind, children })
    }

    pub fn text(text: &str) -> RenderNode {
        RenderNode::Text(text.to_string())
    }

    fn count_matching<F>(&self, predicate: &F) -> usize
        where F: Fn(&ElementKind) -> bool
    {
        match self {
            RenderNode::Empty | RenderNode::Text(_) => 0,
            RenderNode::Element(element) => {
                let own = if predicate(&element.kind) { 1 } else { 0 };
                own + element.children.iter().map(|child| child.count_matching(predicate)).sum::<usize>()
            }
        }
    }
}

impl RenderTree {
    /// Number of elements anywhere in the tree whose kind matches.
    pub fn count_elements<F>(&self, predicate: F) -> usize
        where F: Fn(&ElementKind) -> bool
    {
        self.nodes.iter().map(|node| node.count_matching(&predicate)).sum()
    }
}
