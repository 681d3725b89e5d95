//! The hero block: headline, supporting copy, CTAs, optional foreground
//! image.

use serde::Deserialize;

use super::items::{self, button_node, image_node, non_empty, ButtonItem, ImageRef};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Node, NodeKind};

static FIELDS: [Field; 6] = [
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
    Field::optional("paragraphs", Kind::StrList),
    Field::optional("ctas", Kind::RecordList(&items::BUTTON_FIELDS)),
    Field::optional("foregroundImage", Kind::Record(&items::IMAGE_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "hero",
    fields: &FIELDS,
};

// Section spacing is the canonical padding-x/padding-y pair; earlier
// revisions used a combined padding shorthand, now deprecated.
static TOKENS: TokenRegistry = TokenRegistry {
    block: "hero",
    entries: &[
        Token::new("section-background", "hsl(0 0% 100%)"),
        Token::new("section-min-height", "50vh"),
        Token::new("section-padding-y", "4rem"),
        Token::new("section-padding-x", "2rem"),
        Token::new("layout-direction", "column"),
        Token::new("align-items", "center"),
        Token::new("justify-content", "center"),
        Token::new("section-text-align", "center"),
        Token::new("content-gap", "1.5rem"),
        Token::new("section-title-color", "hsl(0 0% 0%)"),
        Token::new("section-text-color", "hsl(0 0% 30%)"),
        Token::with_fallback("section-subtitle-color", "section-text-color"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub paragraphs: Option<Vec<String>>,
    pub ctas: Option<Vec<ButtonItem>>,
    pub foreground_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Hero {
    const KIND: BlockKind = BlockKind::Hero;

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
        let mut content = Node::new(NodeKind::Container, "content").style("gap", "content-gap");
        if let Some(title) = &self.title {
            content = content.child(
                Node::new(NodeKind::Heading(1), "title")
                    .text(title.clone())
                    .style("color", "section-title-color"),
            );
        }
        if let Some(subtitle) = &self.subtitle {
            content = content.child(
                Node::new(NodeKind::Paragraph, "subtitle")
                    .text(subtitle.clone())
                    .style("color", "section-subtitle-color"),
            );
        }
        if let Some(paragraphs) = &self.paragraphs {
            content = content.children(paragraphs.iter().enumerate().map(|(i, p)| {
                Node::new(NodeKind::Paragraph, format!("paragraphs.{i}"))
                    .text(p.clone())
                    .style("color", "section-text-color")
            }));
        }
        if let Some(ctas) = non_empty(&self.ctas) {
            content = content.child(
                Node::new(NodeKind::Container, "ctas").children(
                    ctas.iter()
                        .enumerate()
                        .map(|(i, cta)| button_node(format!("ctas.{i}"), cta)),
                ),
            );
        }

        Node::section("hero")
            .env(styles.clone())
            .style("background", "section-background")
            .style("min-height", "section-min-height")
            .style("padding-y", "section-padding-y")
            .style("padding-x", "section-padding-x")
            .style("direction", "layout-direction")
            .style("align-items", "align-items")
            .style("justify-content", "justify-content")
            .style("text-align", "section-text-align")
            .child(content)
            .maybe(
                self.foreground_image
                    .as_ref()
                    .map(|image| image_node("foregroundImage", image)),
            )
    }
}
