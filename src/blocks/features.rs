//! The features block: an icon-card grid under a shared heading.

use serde::Deserialize;

use super::items::{self, button_node, heading_group, non_empty, ButtonItem};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Attr, Node, NodeKind};

static CARD_FIELDS: [Field; 3] = [
    Field::required("icon", Kind::Icon),
    Field::required("title", Kind::Str),
    Field::required("text", Kind::Str),
];

static FIELDS: [Field; 5] = [
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
    Field::optional("cards", Kind::RecordList(&CARD_FIELDS)),
    Field::optional("ctas", Kind::RecordList(&items::BUTTON_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "features",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "features",
    entries: &[
        Token::new("section-background", "hsl(0 0% 100%)"),
        Token::new("section-padding-y", "4rem"),
        Token::new("section-text-align", "left"),
        Token::passthrough("section-title-color"),
        Token::passthrough("section-subtitle-color"),
        Token::new("grid-template-columns", "repeat(1, 1fr)"),
        Token::new("grid-gap", "1.5rem"),
        Token::passthrough("card-background"),
        Token::new("card-padding", "1.5rem"),
        Token::passthrough("card-border-radius"),
        Token::passthrough("card-text-align"),
        Token::passthrough("card-icon-color"),
        Token::new("card-icon-size", "1.5rem"),
        Token::passthrough("card-title-color"),
        Token::passthrough("card-text-color"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

/// One feature card; icon, title, and text are all required.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Features {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cards: Option<Vec<FeatureCard>>,
    pub ctas: Option<Vec<ButtonItem>>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Features {
    const KIND: BlockKind = BlockKind::Features;

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
        let mut section = Node::section("features")
            .env(styles.clone())
            .style("background", "section-background")
            .style("padding-y", "section-padding-y")
            .maybe(heading_group(&self.title, &self.subtitle));

        if let Some(cards) = non_empty(&self.cards) {
            section = section.child(
                Node::new(NodeKind::Grid, "cards")
                    .style("grid-template-columns", "grid-template-columns")
                    .style("gap", "grid-gap")
                    .children(cards.iter().enumerate().map(|(i, card)| card_node(i, card))),
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

fn card_node(index: usize, card: &FeatureCard) -> Node {
    let key = format!("cards.{index}");
    Node::new(NodeKind::Card, key.clone())
        .style("background", "card-background")
        .style("padding", "card-padding")
        .style("border-radius", "card-border-radius")
        .style("text-align", "card-text-align")
        .child(
            Node::new(NodeKind::Icon, format!("{key}.icon"))
                .attr(Attr::Name, card.icon.clone())
                .style("color", "card-icon-color")
                .style("size", "card-icon-size"),
        )
        .child(
            Node::new(NodeKind::Heading(3), format!("{key}.title"))
                .text(card.title.clone())
                .style("color", "card-title-color"),
        )
        .child(
            Node::new(NodeKind::Paragraph, format!("{key}.text"))
                .text(card.text.clone())
                .style("color", "card-text-color"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::validate;
    use crate::icon::StaticIconSet;
    use serde_json::json;

    fn icons() -> StaticIconSet {
        StaticIconSet::new(["Zap", "Shield", "Clock"])
    }

    #[test]
    fn test_cards_render_in_document_order() {
        let raw = json!({
            "cards": [
                { "icon": "Zap", "title": "Fast", "text": "a" },
                { "icon": "Shield", "title": "Safe", "text": "b" },
                { "icon": "Clock", "title": "Soon", "text": "c" }
            ]
        });
        let tree = validate::<Features>(&raw, &icons()).unwrap().render();
        let grid = tree.find("cards").unwrap();
        assert_eq!(grid.child_keys(), vec!["cards.0", "cards.1", "cards.2"]);
        assert_eq!(
            tree.find("cards.1.title").unwrap().text_content(),
            Some("Safe")
        );
    }

    #[test]
    fn test_card_icon_must_exist() {
        let raw = json!({ "cards": [{ "icon": "Rocket", "title": "T", "text": "x" }] });
        let failure = validate::<Features>(&raw, &icons()).unwrap_err();
        assert!(failure.names("cards.0.icon"));
    }

    #[test]
    fn test_card_requires_title_and_text() {
        let raw = json!({ "cards": [{ "icon": "Zap" }] });
        let failure = validate::<Features>(&raw, &icons()).unwrap_err();
        assert!(failure.names("cards.0.title"));
        assert!(failure.names("cards.0.text"));
    }

    #[test]
    fn test_heading_absent_without_title_or_subtitle() {
        let tree = validate::<Features>(&json!({}), &icons()).unwrap().render();
        assert!(tree.find("heading").is_none());
    }

    #[test]
    fn test_heading_present_with_subtitle_only() {
        let tree = validate::<Features>(&json!({ "subtitle": "s" }), &icons())
            .unwrap()
            .render();
        let heading = tree.find("heading").unwrap();
        assert!(heading.find("subtitle").is_some());
        assert!(heading.find("title").is_none());
    }

    #[test]
    fn test_grid_geometry_overridable() {
        let raw = json!({ "styles": { "grid-template-columns": "repeat(3, 1fr)" } });
        let features = validate::<Features>(&raw, &icons()).unwrap();
        assert_eq!(
            features.styles().get("grid-template-columns"),
            Some("repeat(3, 1fr)")
        );
    }
}
