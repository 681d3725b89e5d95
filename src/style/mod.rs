//! Style token system.
//!
//! This module provides the themeable half of the block contract:
//!
//! - [`Token`]: one named, overridable design variable with its default
//! - [`TokenRegistry`]: the per-block table of recognized tokens
//! - [`TokenOverrides`]: caller-supplied overrides from a document's `styles`
//! - [`StyleEnvironment`]: the resolved token→value mapping rendering consumes
//!
//! Tokens support a single-hop fallback pattern where a specific token
//! (subtitle color) defers to a generic one (text color) when unset.

mod resolve;
mod token;

pub use resolve::{StyleEnvironment, TokenOverrides};
pub use token::{RegistryError, Token, TokenRegistry};
