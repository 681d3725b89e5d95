//! The pricing block: cards split into an image top half and a benefits
//! bottom half.

use serde::Deserialize;

use super::items::{self, button_node, heading_group, non_empty, ButtonItem};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Attr, Node, NodeKind};

static BENEFIT_FIELDS: [Field; 2] = [
    Field::required("icon", Kind::Icon),
    Field::required("text", Kind::Str),
];

static TOP_FIELDS: [Field; 4] = [
    Field::required("imageUrl", Kind::Str),
    Field::optional("icon", Kind::Icon),
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
];

static BOTTOM_FIELDS: [Field; 2] = [
    Field::optional("benefits", Kind::RecordList(&BENEFIT_FIELDS)),
    Field::optional("cta", Kind::Record(&items::BUTTON_FIELDS)),
];

static CARD_FIELDS: [Field; 2] = [
    Field::required("top", Kind::Record(&TOP_FIELDS)),
    Field::required("bottom", Kind::Record(&BOTTOM_FIELDS)),
];

static FIELDS: [Field; 4] = [
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
    Field::optional("cards", Kind::RecordList(&CARD_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "pricing",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "pricing",
    entries: &[
        Token::new("section-background", "hsl(0 0% 100%)"),
        Token::new("section-padding-y", "4rem"),
        Token::new("section-text-align", "left"),
        Token::passthrough("section-title-color"),
        Token::passthrough("section-subtitle-color"),
        Token::new("grid-template-columns", "repeat(1, 1fr)"),
        Token::new("grid-gap", "1.5rem"),
        Token::new("card-background", "hsl(0 0% 100%)"),
        Token::new("card-border-radius", "0.5rem"),
        Token::new("card-top-overlay", "hsla(0, 0%, 0%, 0.5)"),
        Token::new("card-top-min-height", "150px"),
        Token::new("card-top-padding", "1rem"),
        Token::passthrough("card-top-icon-color"),
        Token::passthrough("card-top-icon-size"),
        Token::passthrough("card-top-title-color"),
        Token::passthrough("card-top-subtitle-color"),
        Token::new("card-bottom-padding", "1rem"),
        Token::passthrough("benefit-icon-color"),
        Token::passthrough("benefit-text-color"),
        Token::new("benefit-icon-size", "1rem"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

#[derive(Debug, Clone, Deserialize)]
pub struct Benefit {
    pub icon: String,
    pub text: String,
}

/// The image half of a pricing card.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTop {
    pub image_url: String,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// The benefits half of a pricing card.
#[derive(Debug, Clone, Deserialize)]
pub struct CardBottom {
    pub benefits: Option<Vec<Benefit>>,
    pub cta: Option<ButtonItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingCard {
    pub top: CardTop,
    pub bottom: CardBottom,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pricing {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cards: Option<Vec<PricingCard>>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Pricing {
    const KIND: BlockKind = BlockKind::Pricing;

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
        let mut section = Node::section("pricing")
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
        section
    }
}

fn card_node(index: usize, card: &PricingCard) -> Node {
    let key = format!("cards.{index}");
    Node::new(NodeKind::Card, key.clone())
        .style("background", "card-background")
        .style("border-radius", "card-border-radius")
        .child(top_node(&key, &card.top))
        .child(bottom_node(&key, &card.bottom))
}

fn top_node(card_key: &str, top: &CardTop) -> Node {
    let key = format!("{card_key}.top");
    let mut node = Node::new(NodeKind::Container, key.clone())
        .attr(Attr::Src, top.image_url.clone())
        .style("overlay", "card-top-overlay")
        .style("min-height", "card-top-min-height")
        .style("padding", "card-top-padding");
    if let Some(icon) = &top.icon {
        node = node.child(
            Node::new(NodeKind::Icon, format!("{key}.icon"))
                .attr(Attr::Name, icon.clone())
                .style("color", "card-top-icon-color")
                .style("size", "card-top-icon-size"),
        );
    }
    if let Some(title) = &top.title {
        node = node.child(
            Node::new(NodeKind::Heading(3), format!("{key}.title"))
                .text(title.clone())
                .style("color", "card-top-title-color"),
        );
    }
    if let Some(subtitle) = &top.subtitle {
        node = node.child(
            Node::new(NodeKind::Paragraph, format!("{key}.subtitle"))
                .text(subtitle.clone())
                .style("color", "card-top-subtitle-color"),
        );
    }
    node
}

fn bottom_node(card_key: &str, bottom: &CardBottom) -> Node {
    let key = format!("{card_key}.bottom");
    let mut node =
        Node::new(NodeKind::Container, key.clone()).style("padding", "card-bottom-padding");
    if let Some(benefits) = non_empty(&bottom.benefits) {
        node = node.child(
            Node::new(NodeKind::List, format!("{key}.benefits")).children(
                benefits.iter().enumerate().map(|(i, benefit)| {
                    let item_key = format!("{key}.benefits.{i}");
                    Node::new(NodeKind::Item, item_key.clone())
                        .child(
                            Node::new(NodeKind::Icon, format!("{item_key}.icon"))
                                .attr(Attr::Name, benefit.icon.clone())
                                .style("color", "benefit-icon-color")
                                .style("size", "benefit-icon-size"),
                        )
                        .child(
                            Node::new(NodeKind::Paragraph, format!("{item_key}.text"))
                                .text(benefit.text.clone())
                                .style("color", "benefit-text-color"),
                        )
                }),
            ),
        );
    }
    if let Some(cta) = &bottom.cta {
        node = node.child(button_node(format!("{key}.cta"), cta));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::validate;
    use crate::icon::StaticIconSet;
    use serde_json::json;

    fn icons() -> StaticIconSet {
        StaticIconSet::new(["Check", "Star"])
    }

    fn card(benefits: serde_json::Value) -> serde_json::Value {
        json!({
            "top": { "imageUrl": "https://cdn.example/basic.jpg", "title": "Basic" },
            "bottom": { "benefits": benefits }
        })
    }

    #[test]
    fn test_card_halves_are_required() {
        let raw = json!({ "cards": [{}] });
        let failure = validate::<Pricing>(&raw, &icons()).unwrap_err();
        assert!(failure.names("cards.0.top"));
        assert!(failure.names("cards.0.bottom"));
    }

    #[test]
    fn test_full_card_renders_both_halves() {
        let raw = json!({ "cards": [card(json!([{ "icon": "Check", "text": "Support" }]))] });
        let tree = validate::<Pricing>(&raw, &icons()).unwrap().render();
        let top = tree.find("cards.0.top").unwrap();
        assert_eq!(
            top.get_attr(Attr::Src),
            Some("https://cdn.example/basic.jpg")
        );
        assert_eq!(
            tree.find("cards.0.bottom.benefits").unwrap().child_nodes().len(),
            1
        );
    }

    #[test]
    fn test_benefit_icon_membership() {
        let raw = json!({ "cards": [card(json!([{ "icon": "Nope", "text": "x" }]))] });
        let failure = validate::<Pricing>(&raw, &icons()).unwrap_err();
        assert!(failure.names("cards.0.bottom.benefits.0.icon"));
    }

    #[test]
    fn test_empty_benefits_render_no_list() {
        let raw = json!({ "cards": [card(json!([]))] });
        let tree = validate::<Pricing>(&raw, &icons()).unwrap().render();
        assert!(tree.find("cards.0.bottom.benefits").is_none());
    }

    #[test]
    fn test_bottom_cta_optional() {
        let raw = json!({
            "cards": [{
                "top": { "imageUrl": "https://cdn.example/pro.jpg" },
                "bottom": { "cta": { "text": "Buy", "href": "/buy", "variant": "default" } }
            }]
        });
        let tree = validate::<Pricing>(&raw, &icons()).unwrap().render();
        let cta = tree.find("cards.0.bottom.cta").unwrap();
        assert_eq!(cta.get_attr(Attr::Href), Some("/buy"));
    }
}
