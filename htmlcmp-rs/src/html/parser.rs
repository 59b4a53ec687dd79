//! HTML parser that builds node trees.
//!
//! Markup is parsed by html5ever into an `RcDom`, which is then copied into
//! a tree of [`NodeRef`]s.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

use super::ParserOptions;
use crate::constants::NAMESPACES;
use crate::error::{Error, Result};
use crate::node::{new_node, Attribute, NodeContent, NodeInner, NodeRef};

/// HTML parser that builds node trees.
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParserOptions,
}

impl HtmlParser {
    /// Creates a new parser with the given options.
    pub fn new(options: ParserOptions) -> Self {
        HtmlParser { options }
    }

    /// Parses HTML from a string.
    ///
    /// The returned root is a Document node.
    pub fn parse_str(&self, html: &str) -> Result<NodeRef> {
        debug!(bytes = html.len(), "parsing document");
        let dom = parse_document(RcDom::default(), self.parse_opts()).one(html);
        self.build(dom)
    }

    /// Parses HTML from a reader. Invalid UTF-8 is replaced.
    pub fn parse_reader<R: Read>(&self, mut input: R) -> Result<NodeRef> {
        debug!("parsing document from reader");
        let dom = parse_document(RcDom::default(), self.parse_opts())
            .from_utf8()
            .read_from(&mut input)?;
        self.build(dom)
    }

    /// Parses HTML from a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<NodeRef> {
        let file = File::open(path)?;
        self.parse_reader(file)
    }

    fn parse_opts(&self) -> ParseOpts {
        ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: self.options.scripting_enabled,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Checks the errors recorded by html5ever and copies the tree.
    fn build(&self, dom: RcDom) -> Result<NodeRef> {
        if self.options.strict {
            if let Some(first) = dom.errors.first() {
                return Err(Error::Parse(first.to_string()));
            }
        }
        let root = new_node(NodeContent::document());
        append_children(&root, &dom.document);
        debug!(
            errors = dom.errors.len(),
            children = root.borrow().child_count(),
            "document parsed"
        );
        Ok(root)
    }
}

/// Copies the children of `handle` below `parent`.
fn append_children(parent: &NodeRef, handle: &Handle) {
    for child in handle.children.borrow().iter() {
        if let Some(content) = node_content(&child.data) {
            let node = new_node(content);
            append_children(&node, child);
            NodeInner::add_child_to_ref(parent, node);
        }
    }
    // The content of a <template> lives in a separate fragment.
    if let NodeData::Element {
        template_contents, ..
    } = &handle.data
    {
        if let Some(fragment) = template_contents.borrow().as_ref() {
            append_children(parent, fragment);
        }
    }
}

/// Identity of a DOM node, `None` for nodes absent from HTML trees.
fn node_content(data: &NodeData) -> Option<NodeContent> {
    let content = match data {
        NodeData::Document => NodeContent::document(),
        NodeData::Doctype { name, .. } => NodeContent::doctype(name.to_string()),
        NodeData::Text { contents } => NodeContent::text(contents.borrow().to_string()),
        NodeData::Comment { contents } => NodeContent::comment(contents.to_string()),
        NodeData::Element { name, attrs, .. } => {
            let mut content =
                NodeContent::element(name.local.to_string()).with_namespace(short_namespace(&name.ns));
            content.attributes = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    Attribute::with_namespace(
                        short_namespace(&attr.name.ns),
                        attr.name.local.to_string(),
                        attr.value.to_string(),
                    )
                })
                .collect();
            content
        }
        NodeData::ProcessingInstruction { .. } => return None,
    };
    Some(content)
}

/// Short name of a namespace URI; unknown URIs are kept as is.
fn short_namespace(uri: &str) -> &str {
    if uri.is_empty() {
        return uri;
    }
    NAMESPACES
        .iter()
        .find(|(full, _)| *full == uri)
        .map_or(uri, |(_, short)| short)
}

/// Parses HTML from a file using default options.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<NodeRef> {
    HtmlParser::default().parse_file(path)
}

/// Parses HTML from a string using default options.
pub fn parse_str(html: &str) -> Result<NodeRef> {
    HtmlParser::default().parse_str(html)
}

/// Parses HTML from a reader using default options.
pub fn parse_reader<R: Read>(input: R) -> Result<NodeRef> {
    HtmlParser::default().parse_reader(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;
    use crate::search::find_tag;

    fn child(node: &NodeRef, index: usize) -> NodeRef {
        node.borrow().children()[index].clone()
    }

    fn describe(node: &NodeRef) -> String {
        node.borrow().content().to_string()
    }

    fn body(root: &NodeRef) -> NodeRef {
        find_tag(root, "body", NodeType::Element).expect("<body> is always created")
    }

    fn names(node: &NodeRef) -> Vec<String> {
        node.borrow()
            .children()
            .iter()
            .map(|c| c.borrow().data().to_string())
            .collect()
    }

    #[test]
    fn test_parse_simple_html() {
        let root = parse_str("<p>text</p>").unwrap();
        assert_eq!(root.borrow().node_type(), NodeType::Document);
        assert_eq!(names(&root), vec!["html"]);
        assert_eq!(names(&child(&root, 0)), vec!["head", "body"]);

        let p = child(&body(&root), 0);
        assert_eq!(describe(&p), "p (Element)");
        let text = child(&p, 0);
        assert_eq!(text.borrow().node_type(), NodeType::Text);
        assert_eq!(text.borrow().data(), "text");
    }

    #[test]
    fn test_parse_with_attributes() {
        let root = parse_str(r#"<p class="ex1" id='x' hidden>content</p>"#).unwrap();
        let p = child(&body(&root), 0);
        let p_borrowed = p.borrow();
        let content = p_borrowed.content();
        assert_eq!(content.attributes.len(), 3);
        assert_eq!(content.attribute("class"), Some("ex1"));
        assert_eq!(content.attribute("id"), Some("x"));
        assert_eq!(content.attribute("hidden"), Some(""));
    }

    #[test]
    fn test_repeated_attribute_keeps_first() {
        let root = parse_str("<p a=1 a=2>x</p>").unwrap();
        let p = child(&body(&root), 0);
        assert_eq!(describe(&p), "p (Element) [{ a 1}]");
        assert_eq!(child(&p, 0).borrow().data(), "x");
    }

    #[test]
    fn test_whitespace_is_kept() {
        let root = parse_str("<p>  hello   world  </p>").unwrap();
        let text = child(&child(&body(&root), 0), 0);
        assert_eq!(text.borrow().data(), "  hello   world  ");
    }

    #[test]
    fn test_names_are_lowercased() {
        let root = parse_str(r#"<DIV CLASS="Box"></DIV>"#).unwrap();
        assert_eq!(describe(&child(&body(&root), 0)), "div (Element) [{ class Box}]");
    }

    #[test]
    fn test_void_and_empty_elements() {
        let root = parse_str(r#"<p>a<br>b<img src="x.png"/>c</p>"#).unwrap();
        let p = child(&body(&root), 0);
        assert_eq!(p.borrow().child_count(), 5);
        assert_eq!(child(&p, 1).borrow().child_count(), 0);
        assert_eq!(child(&p, 2).borrow().data(), "b");
        assert_eq!(child(&p, 4).borrow().data(), "c");
    }

    #[test]
    fn test_paragraph_closed_by_block() {
        // the stray </p> opens and closes an empty paragraph
        let root = parse_str("<p>one<p>two</p></p><p>three<div>four</div>").unwrap();
        assert_eq!(names(&body(&root)), vec!["p", "p", "p", "p", "div"]);
    }

    #[test]
    fn test_end_tags() {
        let root = parse_str("<div>a</span>b</div>").unwrap();
        let div = child(&body(&root), 0);
        assert_eq!(div.borrow().child_count(), 1);
        assert_eq!(child(&div, 0).borrow().data(), "ab");

        let root = parse_str("<ul><li>one<li>two").unwrap();
        let ul = child(&body(&root), 0);
        assert_eq!(names(&ul), vec!["li", "li"]);
    }

    #[test]
    fn test_less_than_in_text() {
        let root = parse_str("<p>1 < 2</p>").unwrap();
        let p = child(&body(&root), 0);
        assert_eq!(p.borrow().child_count(), 1);
        assert_eq!(child(&p, 0).borrow().data(), "1 < 2");
    }

    #[test]
    fn test_script_is_raw_text() {
        let root = parse_str("<script>if (a<b) x()</script><p>x</p>").unwrap();
        let script = find_tag(&root, "script", NodeType::Element).unwrap();
        assert_eq!(script.borrow().child_count(), 1);
        assert_eq!(child(&script, 0).borrow().data(), "if (a<b) x()");
        assert_eq!(describe(&child(&body(&root), 0)), "p (Element)");
    }

    #[test]
    fn test_entities() {
        let root = parse_str(r#"<p title="a&amp;b">a &amp; b &lt;c&gt;&nbsp;&#65;</p>"#).unwrap();
        let p = child(&body(&root), 0);
        assert_eq!(p.borrow().content().attribute("title"), Some("a&b"));
        assert_eq!(p.borrow().child_count(), 1);
        assert_eq!(child(&p, 0).borrow().data(), "a & b <c>\u{a0}A");
    }

    #[test]
    fn test_bare_ampersand_is_kept() {
        for (html, text) in [
            ("<p>AT&T rocks</p>", "AT&T rocks"),
            ("<p>a &foo b</p>", "a &foo b"),
            ("<p>x&amp</p>", "x&"),
        ] {
            let root = parse_str(html).unwrap();
            let p = child(&body(&root), 0);
            assert_eq!(child(&p, 0).borrow().data(), text, "{}", html);
        }
    }

    #[test]
    fn test_doctype_and_comment() {
        let root = parse_str("<!DOCTYPE html>\n<!-- note --><html></html>").unwrap();
        assert_eq!(root.borrow().child_count(), 3);
        assert_eq!(describe(&child(&root, 0)), "html (DocType)");
        assert_eq!(child(&root, 1).borrow().node_type(), NodeType::Comment);
        assert_eq!(child(&root, 1).borrow().data(), " note ");
        assert_eq!(describe(&child(&root, 2)), "html (Element)");
    }

    #[test]
    fn test_foreign_namespace() {
        let root = parse_str(r##"<div><svg><use xlink:href="#a"/></svg><br></div>"##).unwrap();
        let div = child(&body(&root), 0);
        let svg = child(&div, 0);
        assert_eq!(describe(&svg), "svg (Element)  ns:[svg]");
        assert_eq!(describe(&child(&svg, 0)), "use (Element) [{xlink href #a}] ns:[svg]");
        assert_eq!(describe(&child(&div, 1)), "br (Element)");
    }

    #[test]
    fn test_template_content_is_kept() {
        let root = parse_str("<template><p>x</p></template>").unwrap();
        let template = find_tag(&root, "template", NodeType::Element).unwrap();
        assert_eq!(names(&template), vec!["p"]);
    }

    #[test]
    fn test_scripting_option() {
        let html = "<body><noscript><p>x</p></noscript>";
        let root = parse_str(html).unwrap();
        let noscript = child(&body(&root), 0);
        assert_eq!(child(&noscript, 0).borrow().node_type(), NodeType::Text);

        let parser = HtmlParser::new(ParserOptions {
            scripting_enabled: false,
            ..ParserOptions::default()
        });
        let root = parser.parse_str(html).unwrap();
        let noscript = child(&body(&root), 0);
        assert_eq!(describe(&child(&noscript, 0)), "p (Element)");
    }

    #[test]
    fn test_strict_option() {
        let parser = HtmlParser::new(ParserOptions {
            strict: true,
            ..ParserOptions::default()
        });
        // no doctype
        assert!(matches!(parser.parse_str("<p>x</p>"), Err(Error::Parse(_))));
        parser
            .parse_str("<!DOCTYPE html><html><head></head><body><p>x</p></body></html>")
            .unwrap();
    }

    #[test]
    fn test_parse_reader_and_missing_file() {
        let root = parse_reader("<p>x</p>".as_bytes()).unwrap();
        assert_eq!(names(&body(&root)), vec!["p"]);

        match parse_file("does-not-exist.html") {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected I/O error, got {:?}", other.map(|_| ())),
        }
    }
}
