//! The structural tree renderers produce.
//!
//! A [`Node`] describes which subtrees exist and in what order, independent
//! of visual styling mechanics. Styling appears in two places only: the root
//! node carries the block's resolved [`StyleEnvironment`], and individual
//! nodes reference tokens by name through [`StyleRef`]. The rendering
//! collaborator dereferences those names at paint time; this crate never
//! generates markup or CSS.
//!
//! Every node has a stable `key` derived from its slot and position
//! (`"title"`, `"cards.2"`, `"cards.2.top"`). Re-rendering an unchanged
//! document yields identical keys, so diffing collaborators can reuse
//! elements.

use crate::style::StyleEnvironment;

/// The structural role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of one block instance.
    Section,
    /// Generic grouping element.
    Container,
    /// Grid of repeated children.
    Grid,
    Card,
    /// Heading at the given level (1 = page title).
    Heading(u8),
    Paragraph,
    /// Small numbered marker (e.g. a step number bubble).
    Badge,
    /// A link styled as a button; carries `Attr::Href` and `Attr::Variant`.
    LinkButton,
    /// A non-navigating button; carries `Attr::Variant`.
    Button,
    Link,
    /// A brand mark, textual or image-based.
    Logo,
    Image,
    /// Icon reference; the name travels in `Attr::Name`.
    Icon,
    List,
    Item,
    Form,
    /// One labeled form control.
    Field,
    Label,
    Input,
    TextArea,
    Separator,
}

/// A typed attribute on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Href,
    Src,
    Alt,
    Width,
    Height,
    Variant,
    /// Icon or field name.
    Name,
    Placeholder,
}

/// A reference from a node to a named style token.
///
/// `property` is the visual property the collaborator should bind
/// (`"color"`, `"background"`), `token` the registry name whose resolved
/// value to use. Unresolved tokens inherit; that is the collaborator's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRef {
    pub property: &'static str,
    pub token: &'static str,
}

/// One node of the structural tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    key: String,
    text: Option<String>,
    attrs: Vec<(Attr, String)>,
    styles: Vec<StyleRef>,
    env: Option<StyleEnvironment>,
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            text: None,
            attrs: Vec::new(),
            styles: Vec::new(),
            env: None,
            children: Vec::new(),
        }
    }

    /// Shorthand for a block root.
    pub fn section(key: impl Into<String>) -> Self {
        Self::new(NodeKind::Section, key)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, attr: Attr, value: impl Into<String>) -> Self {
        self.attrs.push((attr, value.into()));
        self
    }

    pub fn style(mut self, property: &'static str, token: &'static str) -> Self {
        self.styles.push(StyleRef { property, token });
        self
    }

    /// Attaches the resolved style environment. Set on block roots only.
    pub fn env(mut self, env: StyleEnvironment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Appends a child only when `node` is `Some`. Absent fields omit their
    /// subtree entirely; there are no placeholders.
    pub fn maybe(mut self, node: Option<Node>) -> Self {
        if let Some(node) = node {
            self.children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn get_attr(&self, attr: Attr) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(a, _)| *a == attr)
            .map(|(_, v)| v.as_str())
    }

    pub fn style_refs(&self) -> &[StyleRef] {
        &self.styles
    }

    pub fn environment(&self) -> Option<&StyleEnvironment> {
        self.env.as_ref()
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Depth-first search for the node with the given key.
    pub fn find(&self, key: &str) -> Option<&Node> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Keys of the direct children, in render order.
    pub fn child_keys(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.key()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_roundtrip() {
        let node = Node::new(NodeKind::LinkButton, "ctas.0")
            .text("Go")
            .attr(Attr::Href, "/x")
            .attr(Attr::Variant, "default")
            .style("background", "primary");

        assert_eq!(node.kind(), NodeKind::LinkButton);
        assert_eq!(node.key(), "ctas.0");
        assert_eq!(node.text_content(), Some("Go"));
        assert_eq!(node.get_attr(Attr::Href), Some("/x"));
        assert_eq!(node.get_attr(Attr::Variant), Some("default"));
        assert_eq!(node.get_attr(Attr::Src), None);
        assert_eq!(node.style_refs()[0].token, "primary");
    }

    #[test]
    fn test_maybe_skips_none() {
        let node = Node::section("hero")
            .maybe(Some(Node::new(NodeKind::Heading(1), "title")))
            .maybe(None);
        assert_eq!(node.child_nodes().len(), 1);
    }

    #[test]
    fn test_find_descends_depth_first() {
        let tree = Node::section("hero").child(
            Node::new(NodeKind::Container, "content")
                .child(Node::new(NodeKind::Heading(1), "title").text("Hi")),
        );
        assert_eq!(tree.find("title").unwrap().text_content(), Some("Hi"));
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_child_keys_preserve_order() {
        let list = Node::new(NodeKind::List, "nav").children(
            ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(i, t)| Node::new(NodeKind::Item, format!("nav.{i}")).text(*t)),
        );
        assert_eq!(list.child_keys(), vec!["nav.0", "nav.1", "nav.2"]);
    }

    #[test]
    fn test_identical_input_yields_identical_tree() {
        let build = || {
            Node::section("cta")
                .child(Node::new(NodeKind::Heading(2), "title").text("Ready?"))
                .child(Node::new(NodeKind::LinkButton, "buttons.0").attr(Attr::Href, "/go"))
        };
        assert_eq!(build(), build());
    }
}
