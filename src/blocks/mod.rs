//! The block catalog and the validate → resolve → render pipeline.
//!
//! Every block implements [`Block`]: a typed document plus its static
//! [`Schema`] and [`TokenRegistry`]. The generic [`validate`] function is the
//! single entry point for the typed pipeline; it returns a [`Validated`]
//! wrapper, which is the only way to reach rendering — a document that
//! failed validation cannot be rendered, by construction.
//!
//! For callers that work with block-type identifiers instead of types (page
//! assemblers, authoring tools), [`BlockKind`] offers the same pipeline
//! dynamically.

pub mod contact;
pub mod cta;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod how_it_works;
pub(crate) mod items;
pub mod pricing;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::error::{ValidationFailure, Violation, ViolationKind};
use crate::icon::IconSet;
use crate::schema::{self, Schema};
use crate::style::{StyleEnvironment, TokenOverrides, TokenRegistry};
use crate::tree::Node;

pub use items::{ButtonItem, ButtonVariant, ImageRef, LinkItem, Logo, LogoKind};

/// One independently validated, styleable, renderable page section.
pub trait Block: DeserializeOwned {
    const KIND: BlockKind;

    /// The declared shape of this block's content document.
    fn schema() -> &'static Schema;

    /// The tokens this block recognizes, with their defaults.
    fn tokens() -> &'static TokenRegistry;

    /// The caller's style overrides, taken from the document's `styles`.
    fn overrides(&self) -> &TokenOverrides;

    /// Builds the structural tree. Callers go through [`Validated::render`];
    /// the document is known valid and `styles` fully resolved by then.
    fn render(&self, styles: &StyleEnvironment) -> Node;
}

/// Proof that a document passed validation, paired with its resolved styles.
#[derive(Debug, Clone)]
pub struct Validated<B> {
    document: B,
    styles: StyleEnvironment,
}

impl<B: Block> Validated<B> {
    pub fn document(&self) -> &B {
        &self.document
    }

    pub fn styles(&self) -> &StyleEnvironment {
        &self.styles
    }

    /// Renders the structural tree; the resolved environment rides on the
    /// root node for the rendering collaborator to dereference.
    pub fn render(&self) -> Node {
        self.document.render(&self.styles)
    }
}

/// Validates a raw document for block type `B` and resolves its styles.
///
/// Runs the full schema walk (all violations collected), decodes the typed
/// document, and merges the caller's overrides over the block's defaults.
///
/// # Example
///
/// ```rust
/// use blockwork::{blocks::hero::Hero, validate, StaticIconSet};
/// use serde_json::json;
///
/// let icons = StaticIconSet::new(["Zap"]);
/// let raw = json!({ "title": "Welcome" });
/// let hero = validate::<Hero>(&raw, &icons).unwrap();
/// let tree = hero.render();
/// assert!(tree.find("title").is_some());
/// ```
pub fn validate<B: Block>(raw: &Value, icons: &dyn IconSet) -> Result<Validated<B>, ValidationFailure> {
    schema::check(B::schema(), B::tokens(), raw, icons)?;
    let document: B = serde_json::from_value(raw.clone()).map_err(|e| {
        ValidationFailure::single(Violation::document(ViolationKind::Decode(e.to_string())))
    })?;
    let styles = B::tokens().resolve(document.overrides());
    Ok(Validated { document, styles })
}

/// Error from [`BlockKind::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block kind '{}'. Available: {}", .name, .available.join(", "))]
pub struct UnknownBlockKind {
    pub name: String,
    pub available: Vec<&'static str>,
}

/// The closed catalog of block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BlockKind {
    Header,
    Hero,
    Features,
    Pricing,
    HowItWorks,
    Cta,
    Contact,
    Footer,
}

static CATALOG: Lazy<BTreeMap<&'static str, BlockKind>> =
    Lazy::new(|| BlockKind::ALL.iter().map(|kind| (kind.name(), *kind)).collect());

impl BlockKind {
    /// Every block type, in page order.
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Header,
        BlockKind::Hero,
        BlockKind::Features,
        BlockKind::Pricing,
        BlockKind::HowItWorks,
        BlockKind::Cta,
        BlockKind::Contact,
        BlockKind::Footer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Hero => "hero",
            BlockKind::Features => "features",
            BlockKind::Pricing => "pricing",
            BlockKind::HowItWorks => "how-it-works",
            BlockKind::Cta => "cta",
            BlockKind::Contact => "contact",
            BlockKind::Footer => "footer",
        }
    }

    /// Resolves a block-type identifier.
    pub fn parse(name: &str) -> Result<BlockKind, UnknownBlockKind> {
        CATALOG.get(name).copied().ok_or_else(|| UnknownBlockKind {
            name: name.to_string(),
            available: BlockKind::ALL.iter().map(BlockKind::name).collect(),
        })
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            BlockKind::Header => header::Header::schema(),
            BlockKind::Hero => hero::Hero::schema(),
            BlockKind::Features => features::Features::schema(),
            BlockKind::Pricing => pricing::Pricing::schema(),
            BlockKind::HowItWorks => how_it_works::HowItWorks::schema(),
            BlockKind::Cta => cta::Cta::schema(),
            BlockKind::Contact => contact::Contact::schema(),
            BlockKind::Footer => footer::Footer::schema(),
        }
    }

    pub fn tokens(&self) -> &'static TokenRegistry {
        match self {
            BlockKind::Header => header::Header::tokens(),
            BlockKind::Hero => hero::Hero::tokens(),
            BlockKind::Features => features::Features::tokens(),
            BlockKind::Pricing => pricing::Pricing::tokens(),
            BlockKind::HowItWorks => how_it_works::HowItWorks::tokens(),
            BlockKind::Cta => cta::Cta::tokens(),
            BlockKind::Contact => contact::Contact::tokens(),
            BlockKind::Footer => footer::Footer::tokens(),
        }
    }

    /// Validation only: the full violation list without building anything.
    pub fn check(&self, raw: &Value, icons: &dyn IconSet) -> Result<(), ValidationFailure> {
        schema::check(self.schema(), self.tokens(), raw, icons)
    }

    /// The whole pipeline for one raw document: validate, resolve, render.
    pub fn compose(&self, raw: &Value, icons: &dyn IconSet) -> Result<Node, ValidationFailure> {
        match self {
            BlockKind::Header => Ok(validate::<header::Header>(raw, icons)?.render()),
            BlockKind::Hero => Ok(validate::<hero::Hero>(raw, icons)?.render()),
            BlockKind::Features => Ok(validate::<features::Features>(raw, icons)?.render()),
            BlockKind::Pricing => Ok(validate::<pricing::Pricing>(raw, icons)?.render()),
            BlockKind::HowItWorks => Ok(validate::<how_it_works::HowItWorks>(raw, icons)?.render()),
            BlockKind::Cta => Ok(validate::<cta::Cta>(raw, icons)?.render()),
            BlockKind::Contact => Ok(validate::<contact::Contact>(raw, icons)?.render()),
            BlockKind::Footer => Ok(validate::<footer::Footer>(raw, icons)?.render()),
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::StaticIconSet;
    use serde_json::json;

    #[test]
    fn test_parse_every_kind_by_name() {
        for kind in BlockKind::ALL {
            assert_eq!(BlockKind::parse(kind.name()), Ok(kind));
        }
    }

    #[test]
    fn test_parse_unknown_lists_available() {
        let err = BlockKind::parse("sidebar").unwrap_err();
        assert_eq!(err.name, "sidebar");
        assert!(err.available.contains(&"hero"));
        assert!(err.to_string().contains("how-it-works"));
    }

    #[test]
    fn test_every_registry_is_internally_consistent() {
        for kind in BlockKind::ALL {
            kind.tokens().validate().unwrap_or_else(|e| {
                panic!("registry for {kind} is inconsistent: {e}");
            });
        }
    }

    #[test]
    fn test_schema_and_registry_carry_block_name() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.schema().block, kind.name());
            assert_eq!(kind.tokens().block, kind.name());
        }
    }

    #[test]
    fn test_every_block_accepts_empty_document() {
        let icons = StaticIconSet::default();
        for kind in BlockKind::ALL {
            let tree = kind
                .compose(&json!({}), &icons)
                .unwrap_or_else(|e| panic!("{kind} rejected empty document: {e}"));
            assert_eq!(tree.key(), kind.name());
            assert!(tree.environment().is_some());
        }
    }

    #[test]
    fn test_every_block_rejects_unknown_top_level_key() {
        let icons = StaticIconSet::default();
        for kind in BlockKind::ALL {
            let failure = kind
                .check(&json!({ "unexpected": 1 }), &icons)
                .unwrap_err();
            assert!(failure.names("unexpected"), "{kind} accepted unknown key");
        }
    }

    #[test]
    fn test_every_block_declares_styles_field() {
        for kind in BlockKind::ALL {
            assert!(
                kind.schema().field("styles").is_some(),
                "{kind} schema is missing the styles field"
            );
        }
    }
}
