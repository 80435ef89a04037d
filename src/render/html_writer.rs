use std::io::Cursor;

use anyhow::{Context, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::render::{ElementKind, RenderNode, RenderTree};

/* Example
<h2>Why the sky is dark at night</h2>
<p>Read <a href="https://en.wikipedia.org/wiki/Olbers_paradox" target="_blank" rel="noopener noreferrer"><em>the paradox</em></a> first.</p>
<figure><img src="/media/andromeda.jpg" alt="Andromeda galaxy"/><figcaption>Andromeda galaxy</figcaption></figure>
*/

impl RenderTree {
    /// One line per top-level block. Nodes that render to nothing are skipped.
    pub fn to_html(&self) -> Result<String> {
        let mut blocks = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            let block = node_to_html(node)?;
            if !block.is_empty() {
                blocks.push(block);
            }
        }
        Ok(blocks.join("\n"))
    }
}

pub fn node_to_html(node: &RenderNode) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_node(&mut writer, node)?;
    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).context("Rendered HTML is not valid UTF-8")
}

fn write_node(writer: &mut Writer<Cursor<Vec<u8>>>, node: &RenderNode) -> Result<()> {
    match node {
        RenderNode::Empty => {}
        RenderNode::Text(text) => {
            writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        RenderNode::Element(element) => {
            let start = start_tag(&element.kind);
            if let ElementKind::Image { .. } = element.kind {
                // <img src="..." alt="..."/>
                writer.write_event(Event::Empty(start))?;
                return Ok(());
            }

            writer.write_event(Event::Start(start))?;
            for child in element.children.iter() {
                write_node(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag_name(&element.kind))))?;
        }
    }

    Ok(())
}

fn tag_name(kind: &ElementKind) -> String {
    let name = match kind {
        ElementKind::Strong => "strong",
        ElementKind::Emphasis => "em",
        ElementKind::Strikethrough => "s",
        ElementKind::Code => "code",
        ElementKind::Paragraph | ElementKind::Placeholder => "p",
        ElementKind::Heading { level } => return level.tag_name(),
        ElementKind::OrderedList => "ol",
        ElementKind::UnorderedList => "ul",
        ElementKind::ListItem => "li",
        ElementKind::Link { .. } => "a",
        ElementKind::BlockQuote => "blockquote",
        ElementKind::Figure => "figure",
        ElementKind::Image { .. } => "img",
        ElementKind::FigCaption => "figcaption",
        ElementKind::Container => "div",
    };
    name.to_string()
}

fn start_tag(kind: &ElementKind) -> BytesStart<'static> {
    let mut start = BytesStart::new(tag_name(kind));
    match kind {
        ElementKind::Link { href } => {
            start.push_attribute(("href", href.as_str()));
            start.push_attribute(("target", "_blank"));
            start.push_attribute(("rel", "noopener noreferrer"));
        }
        ElementKind::Image { src, alt } => {
            start.push_attribute(("src", src.as_str()));
            start.push_attribute(("alt", alt.as_str()));
        }
        ElementKind::Placeholder => {
            start.push_attribute(("class", "no-content"));
        }
        _ => {}
    }
    start
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::document::Document;
    use crate::render::document_renderer::render;
    use crate::test_data::DOCUMENT_JSON;

    use super::*;

    #[test]
    fn test_full_document_html() {
        let document = Document::from_json_str(DOCUMENT_JSON).unwrap();
        let html = render(&document).to_html().unwrap();
        assert_eq!(html, r##"<h1>Why the sky is dark at night</h1>
<p>Read <a href="https://en.wikipedia.org/wiki/Olbers_paradox" target="_blank" rel="noopener noreferrer"><em>the paradox</em></a> first.</p>
<ol><li><strong>Olbers</strong></li><li><em>Expansion</em></li></ol>
<blockquote>The cosmos is within us.</blockquote>
<figure><img src="/media/andromeda.jpg" alt="Andromeda galaxy"/><figcaption>Andromeda galaxy</figcaption></figure>"##);
    }

    #[test]
    fn test_placeholder_html() {
        let html = render(&Document::default()).to_html().unwrap();
        assert_eq!(html, r#"<p class="no-content">No content available.</p>"#);
    }

    #[test]
    fn test_escaping() {
        let node = RenderNode::element(ElementKind::Link { href: "https://x.example/?a=1&b=2".to_string() }, vec![
            RenderNode::text("a < b & c"),
        ]);
        assert_eq!(node_to_html(&node).unwrap(),
                   r#"<a href="https://x.example/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">a &lt; b &amp; c</a>"#);
    }

    #[test]
    fn test_empty_elements() {
        let node = RenderNode::element(ElementKind::Container, vec![
            RenderNode::element(ElementKind::Paragraph, vec![]),
            RenderNode::Empty,
            RenderNode::element(ElementKind::Strikethrough, vec![RenderNode::text("old")]),
            RenderNode::element(ElementKind::Code, vec![RenderNode::text("x")]),
            RenderNode::element(ElementKind::UnorderedList, vec![]),
        ]);
        assert_eq!(node_to_html(&node).unwrap(), "<div><p></p><s>old</s><code>x</code><ul></ul></div>");
        assert_eq!(node_to_html(&RenderNode::Empty).unwrap(), "");
    }
}
