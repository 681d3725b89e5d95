//! The contact block: info cards beside a configurable form, with a small
//! block-local footer.

use serde::Deserialize;

use super::items::{self, heading_group, logo_node, non_empty, ButtonVariant, Logo};
use super::{Block, BlockKind};
use crate::schema::{Field, Kind, Schema};
use crate::style::{StyleEnvironment, Token, TokenOverrides, TokenRegistry};
use crate::tree::{Attr, Node, NodeKind};

static INFO_CARD_FIELDS: [Field; 4] = [
    Field::optional("icon", Kind::Icon),
    Field::optional("title", Kind::Str),
    Field::optional("text", Kind::Str),
    Field::optional("href", Kind::Str),
];

static FIELD_CONFIG_FIELDS: [Field; 2] = [
    Field::optional("label", Kind::Str),
    Field::optional("placeholder", Kind::Str),
];

static SUBMIT_FIELDS: [Field; 2] = [
    Field::required("text", Kind::Str),
    Field::required("variant", Kind::Variant(ButtonVariant::NAMES)),
];

static FORM_FIELDS: [Field; 5] = [
    Field::optional("nameField", Kind::Record(&FIELD_CONFIG_FIELDS)),
    Field::optional("phoneField", Kind::Record(&FIELD_CONFIG_FIELDS)),
    Field::optional("emailField", Kind::Record(&FIELD_CONFIG_FIELDS)),
    Field::optional("messageField", Kind::Record(&FIELD_CONFIG_FIELDS)),
    Field::optional("submitButton", Kind::Record(&SUBMIT_FIELDS)),
];

static FOOTER_FIELDS: [Field; 2] = [
    Field::optional("logo", Kind::Record(&items::LOGO_FIELDS)),
    Field::optional("copyright", Kind::Str),
];

static FIELDS: [Field; 6] = [
    Field::optional("title", Kind::Str),
    Field::optional("subtitle", Kind::Str),
    Field::optional("infoCards", Kind::RecordList(&INFO_CARD_FIELDS)),
    Field::optional("form", Kind::Record(&FORM_FIELDS)),
    Field::optional("footer", Kind::Record(&FOOTER_FIELDS)),
    Field::optional("styles", Kind::Styles),
];

static SCHEMA: Schema = Schema {
    block: "contact",
    fields: &FIELDS,
};

static TOKENS: TokenRegistry = TokenRegistry {
    block: "contact",
    entries: &[
        Token::new("section-background", "hsl(0 0% 100%)"),
        Token::new("section-padding-y", "4rem"),
        Token::new("section-text-align", "center"),
        Token::passthrough("section-title-color"),
        Token::passthrough("section-subtitle-color"),
        Token::new("grid-gap", "3rem"),
        Token::new("info-card-background", "transparent"),
        Token::new("info-card-padding", "1.5rem"),
        Token::new("info-card-border-radius", "0.5rem"),
        Token::passthrough("info-icon-color"),
        Token::passthrough("info-title-color"),
        Token::passthrough("info-text-color"),
        Token::new("form-background", "transparent"),
        Token::new("form-padding", "0"),
        Token::new("form-border-radius", "0"),
        Token::new("form-gap", "1rem"),
        Token::passthrough("label-color"),
        Token::new("input-background", "transparent"),
        Token::new("input-border-color", "hsl(0 0% 90%)"),
        Token::passthrough("input-text-color"),
        Token::passthrough("input-placeholder-color"),
        Token::passthrough("footer-text-color"),
        Token::passthrough("footer-logo-color"),
        Token::passthrough("primary"),
        Token::passthrough("primary-foreground"),
    ],
};

/// One contact channel card; `href` makes the whole card a link.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoCard {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub href: Option<String>,
}

/// Label and placeholder for one form control.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub label: Option<String>,
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitButton {
    pub text: String,
    pub variant: ButtonVariant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name_field: Option<FieldConfig>,
    pub phone_field: Option<FieldConfig>,
    pub email_field: Option<FieldConfig>,
    pub message_field: Option<FieldConfig>,
    pub submit_button: Option<SubmitButton>,
}

/// The block-local footer (logo plus copyright line).
#[derive(Debug, Clone, Deserialize)]
pub struct ContactFooter {
    pub logo: Option<Logo>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub info_cards: Option<Vec<InfoCard>>,
    pub form: Option<ContactForm>,
    pub footer: Option<ContactFooter>,
    #[serde(default, deserialize_with = "items::styles_or_default")]
    pub styles: TokenOverrides,
}

impl Block for Contact {
    const KIND: BlockKind = BlockKind::Contact;

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
        let mut section = Node::section("contact")
            .env(styles.clone())
            .style("background", "section-background")
            .style("padding-y", "section-padding-y")
            .maybe(heading_group(&self.title, &self.subtitle));

        if let Some(cards) = non_empty(&self.info_cards) {
            section = section.child(
                Node::new(NodeKind::Container, "infoCards")
                    .style("gap", "grid-gap")
                    .children(cards.iter().enumerate().map(|(i, card)| info_card_node(i, card))),
            );
        }
        if let Some(form) = &self.form {
            section = section.child(form_node(form));
        }
        if let Some(footer) = &self.footer {
            section = section.child(footer_node(footer));
        }
        section
    }
}

fn info_card_node(index: usize, card: &InfoCard) -> Node {
    let key = format!("infoCards.{index}");
    let mut node = Node::new(NodeKind::Card, key.clone())
        .style("background", "info-card-background")
        .style("padding", "info-card-padding")
        .style("border-radius", "info-card-border-radius");
    if let Some(href) = &card.href {
        node = node.attr(Attr::Href, href.clone());
    }
    if let Some(icon) = &card.icon {
        node = node.child(
            Node::new(NodeKind::Icon, format!("{key}.icon"))
                .attr(Attr::Name, icon.clone())
                .style("color", "info-icon-color"),
        );
    }
    if let Some(title) = &card.title {
        node = node.child(
            Node::new(NodeKind::Heading(3), format!("{key}.title"))
                .text(title.clone())
                .style("color", "info-title-color"),
        );
    }
    if let Some(text) = &card.text {
        node = node.child(
            Node::new(NodeKind::Paragraph, format!("{key}.text"))
                .text(text.clone())
                .style("color", "info-text-color"),
        );
    }
    node
}

fn form_node(form: &ContactForm) -> Node {
    let controls = [
        ("form.nameField", &form.name_field, NodeKind::Input),
        ("form.phoneField", &form.phone_field, NodeKind::Input),
        ("form.emailField", &form.email_field, NodeKind::Input),
        ("form.messageField", &form.message_field, NodeKind::TextArea),
    ];

    let mut node = Node::new(NodeKind::Form, "form")
        .style("background", "form-background")
        .style("padding", "form-padding")
        .style("border-radius", "form-border-radius")
        .style("gap", "form-gap");

    for (key, config, control) in controls {
        if let Some(config) = config {
            node = node.child(field_node(key, config, control));
        }
    }
    if let Some(submit) = &form.submit_button {
        node = node.child(
            Node::new(NodeKind::Button, "form.submitButton")
                .text(submit.text.clone())
                .attr(Attr::Variant, submit.variant.as_str())
                .style("background", "primary")
                .style("color", "primary-foreground"),
        );
    }
    node
}

fn field_node(key: &str, config: &FieldConfig, control: NodeKind) -> Node {
    let mut field = Node::new(NodeKind::Field, key);
    if let Some(label) = &config.label {
        field = field.child(
            Node::new(NodeKind::Label, format!("{key}.label"))
                .text(label.clone())
                .style("color", "label-color"),
        );
    }
    let mut input = Node::new(control, format!("{key}.input"))
        .style("background", "input-background")
        .style("border-color", "input-border-color")
        .style("color", "input-text-color")
        .style("placeholder-color", "input-placeholder-color");
    if let Some(placeholder) = &config.placeholder {
        input = input.attr(Attr::Placeholder, placeholder.clone());
    }
    field.child(input)
}

fn footer_node(footer: &ContactFooter) -> Node {
    let mut node = Node::new(NodeKind::Container, "footer");
    if let Some(logo) = &footer.logo {
        node = node.child(logo_node("footer.logo", logo).style("color", "footer-logo-color"));
    }
    if let Some(copyright) = &footer.copyright {
        node = node.child(
            Node::new(NodeKind::Paragraph, "footer.copyright")
                .text(copyright.clone())
                .style("color", "footer-text-color"),
        );
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::validate;
    use crate::error::ViolationKind;
    use crate::icon::StaticIconSet;
    use serde_json::json;

    fn icons() -> StaticIconSet {
        StaticIconSet::new(["Mail", "Phone"])
    }

    #[test]
    fn test_submit_variant_outside_enum() {
        let raw = json!({ "form": { "submitButton": { "text": "Send", "variant": "invalid" } } });
        let failure = validate::<Contact>(&raw, &icons()).unwrap_err();
        let violation = &failure.violations()[0];
        assert_eq!(violation.path, "form.submitButton.variant");
        match &violation.kind {
            ViolationKind::InvalidVariant { allowed, .. } => {
                assert_eq!(*allowed, ButtonVariant::NAMES);
            }
            other => panic!("unexpected violation: {other:?}"),
        }
    }

    #[test]
    fn test_submit_requires_text_and_variant() {
        let raw = json!({ "form": { "submitButton": {} } });
        let failure = validate::<Contact>(&raw, &icons()).unwrap_err();
        assert!(failure.names("form.submitButton.text"));
        assert!(failure.names("form.submitButton.variant"));
    }

    #[test]
    fn test_form_renders_configured_controls_only() {
        let raw = json!({
            "form": {
                "nameField": { "label": "Name", "placeholder": "Jane" },
                "messageField": { "label": "Message" },
                "submitButton": { "text": "Send", "variant": "default" }
            }
        });
        let tree = validate::<Contact>(&raw, &icons()).unwrap().render();
        let form = tree.find("form").unwrap();
        assert_eq!(
            form.child_keys(),
            vec!["form.nameField", "form.messageField", "form.submitButton"]
        );
        assert_eq!(
            tree.find("form.nameField.input").unwrap().get_attr(crate::tree::Attr::Placeholder),
            Some("Jane")
        );
        assert_eq!(
            tree.find("form.messageField.input").unwrap().kind(),
            NodeKind::TextArea
        );
    }

    #[test]
    fn test_info_card_href_makes_card_clickable() {
        let raw = json!({
            "infoCards": [
                { "icon": "Mail", "title": "Email", "text": "hi@example.com", "href": "mailto:hi@example.com" },
                { "icon": "Phone", "title": "Call" }
            ]
        });
        let tree = validate::<Contact>(&raw, &icons()).unwrap().render();
        let first = tree.find("infoCards.0").unwrap();
        assert_eq!(
            first.get_attr(crate::tree::Attr::Href),
            Some("mailto:hi@example.com")
        );
        assert!(tree.find("infoCards.1").unwrap().get_attr(crate::tree::Attr::Href).is_none());
    }

    #[test]
    fn test_block_footer_logo_and_copyright() {
        let raw = json!({
            "footer": {
                "logo": { "type": "text", "content": "Acme" },
                "copyright": "© 2026 Acme"
            }
        });
        let tree = validate::<Contact>(&raw, &icons()).unwrap().render();
        assert_eq!(tree.find("footer.logo").unwrap().text_content(), Some("Acme"));
        assert_eq!(
            tree.find("footer.copyright").unwrap().text_content(),
            Some("© 2026 Acme")
        );
    }
}
