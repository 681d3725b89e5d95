//! The how-it-works block: numbered step cards and a closing CTA.

use serde::Deserialize;

use super::items::{self, button_node, heading_group, non_empty, ButtonItem};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Attr, Node, NodeKind};

static STEP_FIELDS: [Field; 4] = [
    Field::optional("number", Kind::Str),
    Field::optional("icon", Kind::Icon),
    Field::optional("title", Kind::Str),
    Field::optional("text", Kind::Str),
];

static FIELDS: [Field; 5] = [
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
    Field::optional("steps", Kind::RecordList(&STEP_FIELDS)),
    Field::optional("cta", Kind::Record(&items::BUTTON_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "how-it-works",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "how-it-works",
    entries: &[
        Token::new("section-background", "hsl(0 0% 100%)"),
        Token::new("section-padding-y", "4rem"),
        Token::new("section-text-align", "center"),
        Token::passthrough("section-title-color"),
        Token::passthrough("section-subtitle-color"),
        Token::new("grid-template-columns", "repeat(1, 1fr)"),
        Token::new("grid-gap", "2rem"),
        Token::passthrough("step-background"),
        Token::passthrough("step-padding"),
        Token::passthrough("step-border-radius"),
        Token::new("step-align", "center"),
        Token::new("number-background", "hsl(0 0% 0%)"),
        Token::new("number-color", "hsl(0 0% 100%)"),
        Token::new("number-size", "2.5rem"),
        Token::passthrough("number-font-size"),
        Token::passthrough("icon-color"),
        Token::new("icon-size", "2rem"),
        Token::passthrough("step-title-color"),
        Token::passthrough("step-text-color"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

/// One step card; every part is optional, so a step can be number-only,
/// icon-only, or pure text.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub number: Option<String>,
    pub icon: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HowItWorks {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub steps: Option<Vec<Step>>,
    pub cta: Option<ButtonItem>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for HowItWorks {
    const KIND: BlockKind = BlockKind::HowItWorks;

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
        let mut section = Node::section("how-it-works")
            .env(styles.clone())
            .style("background", "section-background")
            .style("padding-y", "section-padding-y")
            .maybe(heading_group(&self.title, &self.subtitle));

        if let Some(steps) = non_empty(&self.steps) {
            section = section.child(
                Node::new(NodeKind::Grid, "steps")
                    .style("grid-template-columns", "grid-template-columns")
                    .style("gap", "grid-gap")
                    .children(steps.iter().enumerate().map(|(i, step)| step_node(i, step))),
            );
        }
        if let Some(cta) = &self.cta {
            section = section.child(button_node("cta".into(), cta));
        }
        section
    }
}

fn step_node(index: usize, step: &Step) -> Node {
    let key = format!("steps.{index}");
    let mut node = Node::new(NodeKind::Card, key.clone())
        .style("background", "step-background")
        .style("padding", "step-padding")
        .style("border-radius", "step-border-radius")
        .style("align", "step-align");
    if let Some(number) = &step.number {
        node = node.child(
            Node::new(NodeKind::Badge, format!("{key}.number"))
                .text(number.clone())
                .style("background", "number-background")
                .style("color", "number-color")
                .style("size", "number-size")
                .style("font-size", "number-font-size"),
        );
    }
    if let Some(icon) = &step.icon {
        node = node.child(
            Node::new(NodeKind::Icon, format!("{key}.icon"))
                .attr(Attr::Name, icon.clone())
                .style("color", "icon-color")
                .style("size", "icon-size"),
        );
    }
    if let Some(title) = &step.title {
        node = node.child(
            Node::new(NodeKind::Heading(3), format!("{key}.title"))
                .text(title.clone())
                .style("color", "step-title-color"),
        );
    }
    if let Some(text) = &step.text {
        node = node.child(
            Node::new(NodeKind::Paragraph, format!("{key}.text"))
                .text(text.clone())
                .style("color", "step-text-color"),
        );
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
        StaticIconSet::new(["Download"])
    }

    #[test]
    fn test_steps_in_order_with_partial_parts() {
        let raw = json!({
            "steps": [
                { "number": "01", "title": "Sign up" },
                { "icon": "Download", "text": "Install the app" }
            ]
        });
        let tree = validate::<HowItWorks>(&raw, &icons()).unwrap().render();
        let grid = tree.find("steps").unwrap();
        assert_eq!(grid.child_keys(), vec!["steps.0", "steps.1"]);

        let first = tree.find("steps.0").unwrap();
        assert!(first.find("steps.0.number").is_some());
        assert!(first.find("steps.0.icon").is_none());

        let second = tree.find("steps.1").unwrap();
        assert!(second.find("steps.1.icon").is_some());
        assert!(second.find("steps.1.number").is_none());
    }

    #[test]
    fn test_trailing_cta_renders_once() {
        let raw = json!({ "cta": { "text": "Start", "href": "/start", "variant": "default" } });
        let tree = validate::<HowItWorks>(&raw, &icons()).unwrap().render();
        assert!(tree.find("cta").is_some());
    }

    #[test]
    fn test_step_number_is_a_string_not_a_number() {
        let raw = json!({ "steps": [{ "number": 1 }] });
        let failure = validate::<HowItWorks>(&raw, &icons()).unwrap_err();
        assert!(failure.names("steps.0.number"));
    }

    #[test]
    fn test_empty_steps_render_no_grid() {
        let raw = json!({ "steps": [] });
        let tree = validate::<HowItWorks>(&raw, &icons()).unwrap().render();
        assert!(tree.find("steps").is_none());
    }
}
