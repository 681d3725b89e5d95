//! End-to-end scenarios: whole documents through validate → resolve → render.

use blockwork::blocks::{contact::Contact, footer::Footer, hero::Hero};
use blockwork::{validate, Attr, Block, BlockKind, StaticIconSet, ViolationKind};
use serde_json::json;

fn icons() -> StaticIconSet {
    StaticIconSet::new(["Zap", "Mail", "Phone", "Check"])
}

#[test]
fn hero_welcome_scenario() {
    let raw = json!({
        "title": "Welcome",
        "ctas": [{ "text": "Go", "href": "/x", "variant": "default" }]
    });

    let hero = validate::<Hero>(&raw, &icons()).unwrap();

    // No overrides supplied: the environment is exactly the hero defaults.
    assert_eq!(hero.styles(), &Hero::tokens().defaults());

    let tree = hero.render();
    assert_eq!(tree.find("title").unwrap().text_content(), Some("Welcome"));
    let ctas = tree.find("ctas").unwrap();
    assert_eq!(ctas.child_nodes().len(), 1);
    assert_eq!(ctas.child_nodes()[0].get_attr(Attr::Href), Some("/x"));
}

#[test]
fn contact_invalid_submit_variant_scenario() {
    let raw = json!({
        "form": { "submitButton": { "text": "Send", "variant": "invalid" } }
    });

    let failure = validate::<Contact>(&raw, &icons()).unwrap_err();
    let violation = &failure.violations()[0];
    assert_eq!(violation.path, "form.submitButton.variant");
    let message = violation.to_string();
    for allowed in ["default", "destructive", "outline", "secondary", "ghost", "link"] {
        assert!(message.contains(allowed), "missing '{allowed}' in: {message}");
    }
}

#[test]
fn footer_empty_nav_scenario() {
    let raw = json!({ "nav1": { "title": "Links" } });
    let tree = validate::<Footer>(&raw, &icons()).unwrap().render();
    assert!(tree.find("nav1.title").is_some());
    assert!(tree.find("nav1.links").is_none());
}

#[test]
fn icon_membership_is_decided_by_the_host_set() {
    let raw = |name: &str| {
        json!({ "cards": [{ "icon": name, "title": "T", "text": "x" }] })
    };

    let kind = BlockKind::Features;
    assert!(kind.check(&raw("Zap"), &icons()).is_ok());

    let failure = kind.check(&raw("Sparkles"), &icons()).unwrap_err();
    assert_eq!(
        failure.violations()[0].kind,
        ViolationKind::UnknownIcon {
            name: "Sparkles".into()
        }
    );

    // The same document passes once the host's catalog knows the name.
    let bigger = StaticIconSet::new(["Sparkles"]);
    assert!(kind.check(&raw("Sparkles"), &bigger).is_ok());
}

#[test]
fn rendering_order_is_stable_for_any_length() {
    for n in 0..6 {
        let cards: Vec<_> = (0..n)
            .map(|i| json!({ "icon": "Zap", "title": format!("t{i}"), "text": "x" }))
            .collect();
        let raw = json!({ "cards": cards });
        let tree = BlockKind::Features.compose(&raw, &icons()).unwrap();

        match tree.find("cards") {
            None => assert_eq!(n, 0),
            Some(grid) => {
                let expected: Vec<String> = (0..n).map(|i| format!("cards.{i}")).collect();
                assert_eq!(grid.child_keys(), expected);
            }
        }
    }
}

#[test]
fn rerendering_unchanged_document_yields_identical_tree() {
    let raw = json!({
        "title": "Plans",
        "cards": [{
            "top": { "imageUrl": "https://cdn.example/a.jpg" },
            "bottom": { "benefits": [{ "icon": "Check", "text": "Everything" }] }
        }]
    });
    let first = BlockKind::Pricing.compose(&raw, &icons()).unwrap();
    let second = BlockKind::Pricing.compose(&raw, &icons()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_keys_fail_closed_everywhere() {
    let raw = json!({
        "title": "Hi",
        "herotitle": "typo",
        "styles": { "section-bakground": "red" }
    });
    let failure = BlockKind::Hero.check(&raw, &icons()).unwrap_err();
    assert!(failure.names("herotitle"));
    assert!(failure.names("styles.section-bakground"));
    // The well-formed parts do not mask the bad ones, nor vice versa.
    assert_eq!(failure.violations().len(), 2);
}

#[test]
fn yaml_and_json_documents_validate_identically() {
    let yaml = "title: Welcome\nctas:\n  - text: Go\n    href: /x\n    variant: default\n";
    let from_yaml = blockwork::input::from_yaml_str(yaml).unwrap();
    let from_json = blockwork::input::from_json_str(
        r#"{ "title": "Welcome", "ctas": [{ "text": "Go", "href": "/x", "variant": "default" }] }"#,
    )
    .unwrap();

    assert_eq!(from_yaml, from_json);
    assert_eq!(
        BlockKind::Hero.compose(&from_yaml, &icons()).unwrap(),
        BlockKind::Hero.compose(&from_json, &icons()).unwrap()
    );
}

#[test]
fn page_assembly_in_document_order() {
    let icons = icons();
    let page = [
        ("header", json!({ "nav": [{ "text": "Home", "href": "/" }] })),
        ("hero", json!({ "title": "Welcome" })),
        ("footer", json!({ "bottom": { "copyrightText": "© Acme" } })),
    ];

    let trees: Vec<_> = page
        .iter()
        .map(|(name, raw)| {
            BlockKind::parse(name)
                .unwrap()
                .compose(raw, &icons)
                .unwrap()
        })
        .collect();

    let keys: Vec<_> = trees.iter().map(|t| t.key()).collect();
    assert_eq!(keys, vec!["header", "hero", "footer"]);
    for tree in &trees {
        assert!(tree.environment().is_some());
    }
}

#[test]
fn validation_failures_are_data_not_panics() {
    // A thoroughly broken document across several fields still returns.
    let raw = json!({
        "icon": 4,
        "title": ["not", "a", "string"],
        "buttons": [{ "variant": "loud" }, "nope"],
        "stats": { "not": "an array" },
        "mystery": null
    });
    let failure = BlockKind::Cta.check(&raw, &icons()).unwrap_err();
    assert!(failure.violations().len() >= 5);
    assert!(failure.names("icon"));
    assert!(failure.names("title"));
    assert!(failure.names("buttons.0.text"));
    assert!(failure.names("buttons.0.href"));
    assert!(failure.names("buttons.0.variant"));
    assert!(failure.names("buttons.1"));
    assert!(failure.names("stats"));
    // `null` reads as absent, and unknown keys are reported even then.
    assert!(failure.names("mystery"));
}
