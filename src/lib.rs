//! Schema-validated, themeable content blocks for composing marketing pages.
//!
//! A page is a sequence of **blocks** (header, hero, features, pricing,
//! how-it-works, cta, contact, footer). Each block instance is driven by a
//! JSON-like content document and a set of named style tokens, and renders a
//! structural tree whose subtrees track which optional fields are present.
//!
//! The pipeline for one block instance:
//!
//! 1. **Validate**: the raw document is checked against the block's
//!    [`Schema`]; every violation is collected into a [`ValidationFailure`]
//!    (missing required fields, wrong types, unknown keys, out-of-enum
//!    variants, unknown icons, unknown style tokens).
//! 2. **Resolve**: the document's style overrides are merged over the
//!    block's [`TokenRegistry`] defaults into one [`StyleEnvironment`]
//!    (override wins per key; values are opaque strings).
//! 3. **Render**: the typed document becomes a [`Node`] tree. Present fields
//!    produce subtrees, absent fields produce nothing, repeated fields keep
//!    document order with stable position-derived keys.
//!
//! Rendering the tree into markup, resolving icon names into glyphs, and
//! assembling blocks into a page are the host's concerns; the crate's
//! contract ends at the structurally and stylistically resolved tree.
//!
//! # Example
//!
//! ```rust
//! use blockwork::{blocks::hero::Hero, validate, StaticIconSet};
//! use serde_json::json;
//!
//! let icons = StaticIconSet::new(["Zap"]);
//! let raw = json!({
//!     "title": "Welcome",
//!     "ctas": [{ "text": "Go", "href": "/x", "variant": "default" }],
//!     "styles": { "section-background": "hsl(222 47% 11%)" }
//! });
//!
//! let hero = validate::<Hero>(&raw, &icons)?;
//! let tree = hero.render();
//!
//! assert_eq!(tree.find("title").unwrap().text_content(), Some("Welcome"));
//! assert_eq!(
//!     tree.environment().unwrap().get("section-background"),
//!     Some("hsl(222 47% 11%)")
//! );
//! # Ok::<(), blockwork::ValidationFailure>(())
//! ```
//!
//! Validation, resolution, and rendering are pure and synchronous; the only
//! shared state is the per-block schema and token tables, which are
//! immutable statics safe for unlimited concurrent readers.

pub mod blocks;
mod error;
mod icon;
pub mod input;
mod schema;
mod style;
mod tree;

pub use blocks::{
    validate, Block, BlockKind, ButtonItem, ButtonVariant, ImageRef, LinkItem, Logo, LogoKind,
    UnknownBlockKind, Validated,
};
pub use error::{ValidationFailure, Violation, ViolationKind};
pub use icon::{IconSet, StaticIconSet};
pub use input::InputError;
pub use schema::{check, Field, Kind, Schema};
pub use style::{RegistryError, StyleEnvironment, Token, TokenOverrides, TokenRegistry};
pub use tree::{Attr, Node, NodeKind, StyleRef};
