//! The call-to-action block: a centered pitch with action buttons and a
//! stats row.

use serde::Deserialize;

use super::items::{self, non_empty, ButtonVariant};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Attr, Node, NodeKind};

static ACTION_FIELDS: [Field; 4] = [
    Field::required("text", Kind::Str),
    Field::required("href", Kind::Str),
    Field::required("variant", Kind::Variant(ButtonVariant::NAMES)),
    Field::optional("icon", Kind::Icon),
];

static STAT_FIELDS: [Field; 2] = [
    Field::optional("icon", Kind::Icon),
    Field::required("text", Kind::Str),
];

static FIELDS: [Field; 6] = [
    Field::optional("icon", Kind::Icon),
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
    Field::optional("buttons", Kind::RecordList(&ACTION_FIELDS)),
    Field::optional("stats", Kind::RecordList(&STAT_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "cta",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "cta",
    entries: &[
        Token::new("section-background", "hsl(0 0% 100%)"),
        Token::new("section-padding-y", "4rem"),
        Token::new("section-text-align", "center"),
        Token::passthrough("main-icon-color"),
        Token::new("main-icon-size", "3rem"),
        Token::passthrough("section-title-color"),
        Token::passthrough("section-subtitle-color"),
        Token::new("button-gap", "1rem"),
        Token::new("stats-margin-top", "3rem"),
        Token::new("stats-gap", "2rem"),
        Token::passthrough("stats-icon-color"),
        Token::passthrough("stats-text-color"),
        Token::passthrough("stats-divider-color"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

/// An action button with an optional leading icon (store badges, app links).
#[derive(Debug, Clone, Deserialize)]
pub struct ActionButton {
    pub text: String,
    pub href: String,
    pub variant: ButtonVariant,
    pub icon: Option<String>,
}

/// One entry in the stats row under the buttons.
#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub icon: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cta {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub buttons: Option<Vec<ActionButton>>,
    pub stats: Option<Vec<Stat>>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Cta {
    const KIND: BlockKind = BlockKind::Cta;

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
        let mut section = Node::section("cta")
            .env(styles.clone())
            .style("background", "section-background")
            .style("padding-y", "section-padding-y")
            .style("text-align", "section-text-align");

        if let Some(icon) = &self.icon {
            section = section.child(
                Node::new(NodeKind::Icon, "icon")
                    .attr(Attr::Name, icon.clone())
                    .style("color", "main-icon-color")
                    .style("size", "main-icon-size"),
            );
        }
        if let Some(title) = &self.title {
            section = section.child(
                Node::new(NodeKind::Heading(2), "title")
                    .text(title.clone())
                    .style("color", "section-title-color"),
            );
        }
        if let Some(subtitle) = &self.subtitle {
            section = section.child(
                Node::new(NodeKind::Paragraph, "subtitle")
                    .text(subtitle.clone())
                    .style("color", "section-subtitle-color"),
            );
        }
        if let Some(buttons) = non_empty(&self.buttons) {
            section = section.child(
                Node::new(NodeKind::Container, "buttons")
                    .style("gap", "button-gap")
                    .children(
                        buttons
                            .iter()
                            .enumerate()
                            .map(|(i, button)| action_node(i, button)),
                    ),
            );
        }
        if let Some(stats) = non_empty(&self.stats) {
            section = section.child(
                Node::new(NodeKind::List, "stats")
                    .style("margin-top", "stats-margin-top")
                    .style("gap", "stats-gap")
                    .style("divider-color", "stats-divider-color")
                    .children(stats.iter().enumerate().map(|(i, stat)| stat_node(i, stat))),
            );
        }
        section
    }
}

fn action_node(index: usize, button: &ActionButton) -> Node {
    let key = format!("buttons.{index}");
    let mut node = Node::new(NodeKind::LinkButton, key.clone())
        .text(button.text.clone())
        .attr(Attr::Href, button.href.clone())
        .attr(Attr::Variant, button.variant.as_str())
        .style("background", "primary")
        .style("color", "primary-foreground");
    if let Some(icon) = &button.icon {
        node = node.child(Node::new(NodeKind::Icon, format!("{key}.icon")).attr(Attr::Name, icon.clone()));
    }
    node
}

fn stat_node(index: usize, stat: &Stat) -> Node {
    let key = format!("stats.{index}");
    let mut node = Node::new(NodeKind::Item, key.clone());
    if let Some(icon) = &stat.icon {
        node = node.child(
            Node::new(NodeKind::Icon, format!("{key}.icon"))
                .attr(Attr::Name, icon.clone())
                .style("color", "stats-icon-color"),
        );
    }
    node.child(
        Node::new(NodeKind::Paragraph, format!("{key}.text"))
            .text(stat.text.clone())
            .style("color", "stats-text-color"),
    )
}
