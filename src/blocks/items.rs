//! Sub-item types and render helpers shared across blocks.

use serde::{Deserialize, Deserializer};

use crate::schema::{Field, Kind};
use crate::style::TokenOverrides;
use crate::tree::{Attr, Node, NodeKind};

/// Button appearance, shared by every button and CTA in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    /// Wire names, in declaration order.
    pub const NAMES: &'static [&'static str] = &[
        "default",
        "destructive",
        "outline",
        "secondary",
        "ghost",
        "link",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

/// A call-to-action button.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ButtonItem {
    pub text: String,
    pub href: String,
    pub variant: ButtonVariant,
}

/// A plain navigation link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkItem {
    pub text: String,
    pub href: String,
}

/// A sized image reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub width: f64,
    pub height: f64,
}

/// Whether a logo is rendered from text or from an image source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    Text,
    Image,
}

/// A brand mark used by Header, Footer, and Contact.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Logo {
    #[serde(rename = "type")]
    pub kind: LogoKind,
    /// Display text or image source, depending on `kind`.
    pub content: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

// -- shared field lists ------------------------------------------------------

pub(crate) static BUTTON_FIELDS: [Field; 3] = [
    Field::required("text", Kind::Str),
    Field::required("href", Kind::Str),
    Field::required("variant", Kind::Variant(ButtonVariant::NAMES)),
];

pub(crate) static LINK_FIELDS: [Field; 2] = [
    Field::required("text", Kind::Str),
    Field::required("href", Kind::Str),
];

pub(crate) static IMAGE_FIELDS: [Field; 4] = [
    Field::required("src", Kind::Str),
    Field::required("alt", Kind::Str),
    Field::required("width", Kind::Number),
    Field::required("height", Kind::Number),
];

pub(crate) static LOGO_FIELDS: [Field; 4] = [
    Field::required("type", Kind::Variant(&["text", "image"])),
    Field::required("content", Kind::Str),
    Field::optional("width", Kind::Number),
    Field::optional("height", Kind::Number),
];

// -- serde helpers -----------------------------------------------------------

/// Deserializes a `styles` field, accepting both absence and `null`.
pub(crate) fn styles_or_default<'de, D>(deserializer: D) -> Result<TokenOverrides, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<TokenOverrides>::deserialize(deserializer)?.unwrap_or_default())
}

// -- render helpers ----------------------------------------------------------

/// A present, non-empty slice — the render condition for repeated fields.
pub(crate) fn non_empty<T>(items: &Option<Vec<T>>) -> Option<&[T]> {
    match items.as_deref() {
        Some([]) | None => None,
        Some(items) => Some(items),
    }
}

/// Renders a CTA as a link-button bound to the block's theme slots.
pub(crate) fn button_node(key: String, button: &ButtonItem) -> Node {
    Node::new(NodeKind::LinkButton, key)
        .text(button.text.clone())
        .attr(Attr::Href, button.href.clone())
        .attr(Attr::Variant, button.variant.as_str())
        .style("background", "primary")
        .style("color", "primary-foreground")
}

pub(crate) fn link_node(key: String, link: &LinkItem, color_token: &'static str) -> Node {
    Node::new(NodeKind::Link, key)
        .text(link.text.clone())
        .attr(Attr::Href, link.href.clone())
        .style("color", color_token)
}

pub(crate) fn image_node(key: &str, image: &ImageRef) -> Node {
    Node::new(NodeKind::Image, key)
        .attr(Attr::Src, image.src.clone())
        .attr(Attr::Alt, image.alt.clone())
        .attr(Attr::Width, fmt_number(image.width))
        .attr(Attr::Height, fmt_number(image.height))
}

pub(crate) fn logo_node(key: &str, logo: &Logo) -> Node {
    let node = Node::new(NodeKind::Logo, key);
    match logo.kind {
        LogoKind::Text => node.text(logo.content.clone()),
        LogoKind::Image => {
            let mut node = node.attr(Attr::Src, logo.content.clone());
            if let Some(width) = logo.width {
                node = node.attr(Attr::Width, fmt_number(width));
            }
            if let Some(height) = logo.height {
                node = node.attr(Attr::Height, fmt_number(height));
            }
            node
        }
    }
}

/// The shared title/subtitle heading group; absent when neither is set.
pub(crate) fn heading_group(title: &Option<String>, subtitle: &Option<String>) -> Option<Node> {
    if title.is_none() && subtitle.is_none() {
        return None;
    }
    let mut group = Node::new(NodeKind::Container, "heading").style("text-align", "section-text-align");
    if let Some(title) = title {
        group = group.child(
            Node::new(NodeKind::Heading(2), "title")
                .text(title.clone())
                .style("color", "section-title-color"),
        );
    }
    if let Some(subtitle) = subtitle {
        group = group.child(
            Node::new(NodeKind::Paragraph, "subtitle")
                .text(subtitle.clone())
                .style("color", "section-subtitle-color"),
        );
    }
    Some(group)
}

fn fmt_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
