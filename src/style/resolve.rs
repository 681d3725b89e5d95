//! Merging default tokens with caller overrides.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::token::TokenRegistry;

/// Caller-supplied token overrides, taken from a document's `styles` field.
///
/// Keys are validated against the block's [`TokenRegistry`] before resolution
/// (unknown keys are a schema violation, never silently dropped), so by the
/// time an override set reaches [`TokenRegistry::resolve`] every key is
/// recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TokenOverrides(BTreeMap<String, String>);

impl TokenOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an override, replacing any previous value for the key.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The resolved token→value mapping one block instance renders with.
///
/// Produced by [`TokenRegistry::resolve`]; immutable afterwards. Tokens with
/// neither a value nor a reachable fallback are simply absent — absence means
/// the rendering collaborator inherits, it is never an error here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEnvironment {
    registry: &'static TokenRegistry,
    values: BTreeMap<&'static str, String>,
}

impl StyleEnvironment {
    /// The registry this environment was resolved against.
    pub fn registry(&self) -> &'static TokenRegistry {
        self.registry
    }

    /// The resolved value for a token, if it has one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Resolved pairs in the registry's declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.registry
            .entries
            .iter()
            .filter_map(|t| self.values.get(t.name).map(|v| (t.name, v.as_str())))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Re-resolves this environment under further overrides.
    ///
    /// Per-key replacement, override wins; token values are opaque and never
    /// merged internally. Resolving with an empty override set is the
    /// identity, which makes resolution idempotent.
    pub fn with_overrides(&self, overrides: &TokenOverrides) -> StyleEnvironment {
        let mut values = self.values.clone();
        merge(self.registry, &mut values, overrides);
        StyleEnvironment {
            registry: self.registry,
            values,
        }
    }
}

impl TokenRegistry {
    /// Resolves defaults and caller overrides into one [`StyleEnvironment`].
    ///
    /// Defaulted entries seed the environment, overrides replace per key,
    /// and fallback entries still unset afterwards copy their target's
    /// resolved value — so an override of the target token is observed by
    /// the tokens deferring to it.
    pub fn resolve(&'static self, overrides: &TokenOverrides) -> StyleEnvironment {
        let mut values = BTreeMap::new();
        for token in self.entries {
            if let Some(default) = token.default {
                values.insert(token.name, default.to_string());
            }
        }
        merge(self, &mut values, overrides);
        StyleEnvironment {
            registry: self,
            values,
        }
    }

    /// The environment with no overrides applied.
    pub fn defaults(&'static self) -> StyleEnvironment {
        self.resolve(&TokenOverrides::default())
    }
}

fn merge(
    registry: &'static TokenRegistry,
    values: &mut BTreeMap<&'static str, String>,
    overrides: &TokenOverrides,
) {
    for (name, value) in overrides.iter() {
        if let Some(token) = registry.entry(name) {
            values.insert(token.name, value.to_string());
        }
    }
    for token in registry.entries {
        if values.contains_key(token.name) {
            continue;
        }
        if let Some(target) = token.fallback {
            if let Some(value) = values.get(target).cloned() {
                values.insert(token.name, value);
            }
        }
    }
}
