//! The page footer: brand column, two nav columns, contact column, bottom
//! bar.

use serde::Deserialize;

use super::items::{self, link_node, logo_node, non_empty, LinkItem, Logo};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Node, NodeKind};

static BRAND_FIELDS: [Field; 2] = [
    Field::optional("logo", Kind::Record(&items::LOGO_FIELDS)),
    Field::optional("description", Kind::Str),
];

static NAV_FIELDS: [Field; 2] = [
    Field::optional("title", Kind::Str),
    Field::optional("links", Kind::RecordList(&items::LINK_FIELDS)),
];

static CONTACT_FIELDS: [Field; 4] = [
    Field::optional("title", Kind::Str),
    Field::optional("phone", Kind::Str),
    Field::optional("email", Kind::Str),
    Field::optional("address", Kind::Str),
];

static BOTTOM_FIELDS: [Field; 1] = [Field::optional("copyrightText", Kind::Str)];

static FIELDS: [Field; 6] = [
    Field::optional("brand", Kind::Record(&BRAND_FIELDS)),
    Field::optional("nav1", Kind::Record(&NAV_FIELDS)),
    Field::optional("nav2", Kind::Record(&NAV_FIELDS)),
    Field::optional("contact", Kind::Record(&CONTACT_FIELDS)),
    Field::optional("bottom", Kind::Record(&BOTTOM_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "footer",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "footer",
    entries: &[
        Token::new("footer-background", "hsl(0 0% 100%)"),
        Token::new("footer-text-color", "hsl(0 0% 40%)"),
        Token::new("footer-title-color", "hsl(0 0% 0%)"),
        Token::new("footer-link-color", "hsl(0 0% 40%)"),
        Token::new("footer-link-hover", "hsl(0 0% 0%)"),
        Token::new("footer-border-color", "hsl(0 0% 90%)"),
        Token::new("footer-padding-y", "3rem"),
        Token::new("footer-gap", "2rem"),
        Token::new("icon-color", "currentColor"),
    ],
};

/// The brand column.
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub logo: Option<Logo>,
    pub description: Option<String>,
}

/// A titled link column.
#[derive(Debug, Clone, Deserialize)]
pub struct NavColumn {
    pub title: Option<String>,
    pub links: Option<Vec<LinkItem>>,
}

/// The contact column.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactColumn {
    pub title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// The bottom bar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottom {
    pub copyright_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Footer {
    pub brand: Option<Brand>,
    pub nav1: Option<NavColumn>,
    pub nav2: Option<NavColumn>,
    pub contact: Option<ContactColumn>,
    pub bottom: Option<Bottom>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Footer {
    const KIND: BlockKind = BlockKind::Footer;

    fn schema() -> &'static Schema {
        &SCHEMA
    }

    fn tokens() -> &'static TokenRegistry {
        &TOKENS
    }

    fn overrides(&self) -> &TokenOverrides {
        &self.styles
    }

    fn render(&self, styles: &StyleEnvironment) -> Node {
        let mut columns = Node::new(NodeKind::Grid, "columns").style("gap", "footer-gap");

        if let Some(brand) = &self.brand {
            let mut node = Node::new(NodeKind::Container, "brand");
            if let Some(logo) = &brand.logo {
                node = node.child(logo_node("brand.logo", logo).style("color", "footer-title-color"));
            }
            if let Some(description) = &brand.description {
                node = node.child(
                    Node::new(NodeKind::Paragraph, "brand.description")
                        .text(description.clone())
                        .style("color", "footer-text-color"),
                );
            }
            columns = columns.child(node);
        }
        if let Some(nav) = &self.nav1 {
            columns = columns.child(nav_column("nav1", nav));
        }
        if let Some(nav) = &self.nav2 {
            columns = columns.child(nav_column("nav2", nav));
        }
        if let Some(contact) = &self.contact {
            columns = columns.child(contact_column(contact));
        }

        let mut section = Node::section("footer")
            .env(styles.clone())
            .style("background", "footer-background")
            .style("color", "footer-text-color")
            .style("padding-y", "footer-padding-y")
            .child(columns);

        if let Some(bottom) = &self.bottom {
            let mut node = Node::new(NodeKind::Container, "bottom").child(
                Node::new(NodeKind::Separator, "bottom.separator")
                    .style("color", "footer-border-color"),
            );
            if let Some(text) = &bottom.copyright_text {
                node = node.child(
                    Node::new(NodeKind::Paragraph, "bottom.copyright")
                        .text(text.clone())
                        .style("color", "footer-text-color"),
                );
            }
            section = section.child(node);
        }
        section
    }
}

fn nav_column(key: &str, nav: &NavColumn) -> Node {
    let mut node = Node::new(NodeKind::Container, key);
    if let Some(title) = &nav.title {
        node = node.child(
            Node::new(NodeKind::Heading(3), format!("{key}.title"))
                .text(title.clone())
                .style("color", "footer-title-color"),
        );
    }
    if let Some(links) = non_empty(&nav.links) {
        node = node.child(
            Node::new(NodeKind::List, format!("{key}.links")).children(
                links.iter().enumerate().map(|(i, link)| {
                    Node::new(NodeKind::Item, format!("{key}.links.{i}")).child(link_node(
                        format!("{key}.links.{i}.link"),
                        link,
                        "footer-link-color",
                    ))
                }),
            ),
        );
    }
    node
}

fn contact_column(contact: &ContactColumn) -> Node {
    let mut node = Node::new(NodeKind::Container, "contact");
    if let Some(title) = &contact.title {
        node = node.child(
            Node::new(NodeKind::Heading(3), "contact.title")
                .text(title.clone())
                .style("color", "footer-title-color"),
        );
    }
    let lines = [
        ("contact.phone", &contact.phone),
        ("contact.email", &contact.email),
        ("contact.address", &contact.address),
    ];
    for (key, value) in lines {
        if let Some(value) = value {
            node = node.child(
                Node::new(NodeKind::Paragraph, key)
                    .text(value.clone())
                    .style("color", "footer-text-color"),
            );
        }
    }
    node
}
