//! The page header: brand mark, navigation links, and header CTAs.

use serde::Deserialize;

use super::items::{self, button_node, link_node, logo_node, non_empty, ButtonItem, LinkItem, Logo};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Attr, Node, NodeKind};

static BRAND_FIELDS: [Field; 2] = [
    Field::optional("logo", Kind::Record(&items::LOGO_FIELDS)),
    Field::optional("href", Kind::Str),
];

static FIELDS: [Field; 4] = [
    Field::optional("brand", Kind::Record(&BRAND_FIELDS)),
    Field::optional("nav", Kind::RecordList(&items::LINK_FIELDS)),
    Field::optional("ctas", Kind::RecordList(&items::BUTTON_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "header",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "header",
    entries: &[
        Token::new("header-background", "hsl(0 0% 100%)"),
        Token::new("header-height", "4rem"),
        Token::new("header-padding-x", "2rem"),
        Token::new("header-text-color", "hsl(0 0% 0%)"),
        Token::new("header-link-color", "hsl(0 0% 40%)"),
        Token::new("header-link-hover", "hsl(0 0% 0%)"),
        Token::new("header-border-color", "hsl(0 0% 90%)"),
        Token::new("header-gap", "2rem"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

/// The brand mark; `href` is the navigation target when the mark is clicked.
#[derive(Debug, Clone, Deserialize)]
pub struct Brand {
    pub logo: Option<Logo>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    pub brand: Option<Brand>,
    pub nav: Option<Vec<LinkItem>>,
    pub ctas: Option<Vec<ButtonItem>>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Header {
    const KIND: BlockKind = BlockKind::Header;

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
        let mut section = Node::section("header")
            .env(styles.clone())
            .style("background", "header-background")
            .style("height", "header-height")
            .style("padding-x", "header-padding-x")
            .style("color", "header-text-color")
            .style("border-color", "header-border-color");

        if let Some(brand) = &self.brand {
            let mut node = Node::new(NodeKind::Container, "brand");
            if let Some(href) = &brand.href {
                node = node.attr(Attr::Href, href.clone());
            }
            if let Some(logo) = &brand.logo {
                node = node.child(logo_node("brand.logo", logo).style("color", "header-text-color"));
            }
            section = section.child(node);
        }
        if let Some(nav) = non_empty(&self.nav) {
            section = section.child(
                Node::new(NodeKind::List, "nav")
                    .style("gap", "header-gap")
                    .children(nav.iter().enumerate().map(|(i, link)| {
                        Node::new(NodeKind::Item, format!("nav.{i}")).child(link_node(
                            format!("nav.{i}.link"),
                            link,
                            "header-link-color",
                        ))
                    })),
            );
        }
        if let Some(ctas) = non_empty(&self.ctas) {
            section = section.child(
                Node::new(NodeKind::Container, "ctas").children(
                    ctas.iter()
                        .enumerate()
                        .map(|(i, cta)| button_node(format!("ctas.{i}"), cta)),
                ),
            );
        }
        section
    }
}
