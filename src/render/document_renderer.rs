use spdlog::trace;

use crate::document::{Document, ListKind, Media, Node, TextFormat, TextNode};
use crate::render::{ElementKind, RenderNode, RenderOptions, RenderTree};

/// Inline wrappers, outermost first. The nesting never depends on the bit values.
const FORMAT_WRAPPERS: [(u32, ElementKind); 4] = [
    (TextFormat::BOLD, ElementKind::Strong),
    (TextFormat::ITALIC, ElementKind::Emphasis),
    (TextFormat::STRIKETHROUGH, ElementKind::Strikethrough),
    (TextFormat::CODE, ElementKind::Code),
];

pub fn render(document: &Document) -> RenderTree {
    DocumentRenderer::default().render(document)
}

#[derive(Default)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    pub fn new(options: RenderOptions) -> Self {
        DocumentRenderer { options }
    }

    pub fn render(&self, document: &Document) -> RenderTree {
        let nodes = match document.children {
            Some(ref children) => Self::render_children(children),
            None => vec![self.no_content()],
        };

        RenderTree { nodes }
    }

    fn no_content(&self) -> RenderNode {
        RenderNode::element(ElementKind::Placeholder, vec![RenderNode::text(&self.options.no_content_text)])
    }

    fn render_children(children: &[Node]) -> Vec<RenderNode> {
        children.iter().map(Self::render_node).collect()
    }

    fn render_node(node: &Node) -> RenderNode {
        match node {
            Node::Text(text) => Self::render_text(text),
            Node::Paragraph(children) => Self::container(ElementKind::Paragraph, children),
            Node::Heading { level, children } => Self::container(ElementKind::Heading { level: *level }, children),
            Node::List { kind, children } => {
                let list = match kind {
                    ListKind::Ordered => ElementKind::OrderedList,
                    ListKind::Unordered => ElementKind::UnorderedList,
                };
                Self::container(list, children)
            }
            Node::ListItem(children) => Self::container(ElementKind::ListItem, children),
            Node::Link { target, children } => {
                let href = match target.resolve() {
                    Some(url) => url.to_string(),
                    None => {
                        trace!("Link without a target URL, rendering an empty href");
                        String::new()
                    }
                };
                Self::container(ElementKind::Link { href }, children)
            }
            Node::Quote(children) => Self::container(ElementKind::BlockQuote, children),
            Node::Upload(media) => Self::render_upload(media),
            Node::Unknown { children: Some(children), .. } => Self::container(ElementKind::Container, children),
            Node::Unknown { children: None, .. } => RenderNode::Empty,
        }
    }

    fn container(kind: ElementKind, children: &[Node]) -> RenderNode {
        RenderNode::element(kind, Self::render_children(children))
    }

    fn render_text(node: &TextNode) -> RenderNode {
        let mut rendered = RenderNode::Text(node.text.clone());
        for (bit, wrapper) in FORMAT_WRAPPERS.iter().rev() {
            if node.format.has(*bit) {
                rendered = RenderNode::element(wrapper.clone(), vec![rendered]);
            }
        }
        rendered
    }

    fn render_upload(media: &Media) -> RenderNode {
        let Some(ref src) = media.url else {
            trace!("Upload without a media URL, skipping");
            return RenderNode::Empty;
        };

        let alt = media.alt.clone().unwrap_or_default();
        let mut figure = Vec::with_capacity(2);
        let has_caption = !alt.is_empty();
        figure.push(RenderNode::element(ElementKind::Image { src: src.clone(), alt: alt.clone() }, vec![]));
        if has_caption {
            figure.push(RenderNode::element(ElementKind::FigCaption, vec![RenderNode::Text(alt)]));
        }

        RenderNode::element(ElementKind::Figure, figure)
    }
}
