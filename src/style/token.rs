//! Token tables and their self-check.

use thiserror::Error;

/// One recognized style token for a block.
///
/// A token is one of three things:
///
/// - **defaulted**: carries a concrete default value,
/// - **fallback**: no value of its own; resolves to another named token,
///   one hop at most,
/// - **passthrough**: recognized override key with neither default nor
///   fallback — unset means the rendering collaborator inherits.
///
/// Values are opaque strings (a CSS length, color, keyword, or grid-track
/// list); the crate never parses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub default: Option<&'static str>,
    pub fallback: Option<&'static str>,
}

impl Token {
    pub const fn new(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
            fallback: None,
        }
    }

    pub const fn with_fallback(name: &'static str, fallback: &'static str) -> Self {
        Self {
            name,
            default: None,
            fallback: Some(fallback),
        }
    }

    pub const fn passthrough(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            fallback: None,
        }
    }
}

/// Error from [`TokenRegistry::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A fallback references a token the registry does not declare.
    #[error("token '{from}' falls back to undeclared token '{to}'")]
    DanglingFallback { from: String, to: String },

    /// A fallback targets another fallback token; chains must be one hop.
    #[error("token '{from}' falls back through '{through}', which is itself a fallback")]
    ChainedFallback { from: String, through: String },

    /// The same token name appears twice.
    #[error("duplicate token '{name}'")]
    DuplicateToken { name: String },
}

/// The ordered table of tokens one block recognizes.
///
/// Registries are process-wide, immutable statics defined once per block;
/// entry order is the documented order of the block's tokens.
///
/// # Example
///
/// ```rust
/// use blockwork::{Token, TokenRegistry};
///
/// static TOKENS: TokenRegistry = TokenRegistry {
///     block: "banner",
///     entries: &[
///         Token::new("banner-background", "hsl(0 0% 100%)"),
///         Token::new("banner-text-color", "hsl(0 0% 20%)"),
///         Token::with_fallback("banner-accent-color", "banner-text-color"),
///         Token::passthrough("primary"),
///     ],
/// };
///
/// assert!(TOKENS.validate().is_ok());
/// assert!(TOKENS.contains("banner-accent-color"));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct TokenRegistry {
    /// Block identifier the registry belongs to.
    pub block: &'static str,
    pub entries: &'static [Token],
}

impl TokenRegistry {
    /// Looks up a token by name.
    pub fn entry(&self, name: &str) -> Option<&Token> {
        self.entries.iter().find(|t| t.name == name)
    }

    /// Returns `true` if `name` is a recognized override key.
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Token names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|t| t.name)
    }

    /// Checks the registry's internal consistency: no duplicate names, no
    /// dangling fallbacks, no fallback chains deeper than one hop.
    ///
    /// Registries are authored by hand; this is exercised by tests over the
    /// whole block catalog.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (i, token) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|t| t.name == token.name) {
                return Err(RegistryError::DuplicateToken {
                    name: token.name.to_string(),
                });
            }
            if let Some(target) = token.fallback {
                match self.entry(target) {
                    None => {
                        return Err(RegistryError::DanglingFallback {
                            from: token.name.to_string(),
                            to: target.to_string(),
                        })
                    }
                    Some(t) if t.fallback.is_some() => {
                        return Err(RegistryError::ChainedFallback {
                            from: token.name.to_string(),
                            through: target.to_string(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static VALID: TokenRegistry = TokenRegistry {
        block: "test",
        entries: &[
            Token::new("background", "white"),
            Token::new("text-color", "black"),
            Token::with_fallback("subtitle-color", "text-color"),
            Token::passthrough("primary"),
        ],
    };

    #[test]
    fn test_entry_lookup() {
        assert_eq!(VALID.entry("background").unwrap().default, Some("white"));
        assert!(VALID.entry("nope").is_none());
        assert!(VALID.contains("primary"));
    }

    #[test]
    fn test_names_preserve_declaration_order() {
        let names: Vec<_> = VALID.names().collect();
        assert_eq!(
            names,
            vec!["background", "text-color", "subtitle-color", "primary"]
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(VALID.validate().is_ok());
    }

    #[test]
    fn test_validate_dangling_fallback() {
        static BROKEN: TokenRegistry = TokenRegistry {
            block: "test",
            entries: &[Token::with_fallback("orphan", "missing")],
        };
        assert_eq!(
            BROKEN.validate(),
            Err(RegistryError::DanglingFallback {
                from: "orphan".into(),
                to: "missing".into(),
            })
        );
    }

    #[test]
    fn test_validate_chained_fallback() {
        static CHAINED: TokenRegistry = TokenRegistry {
            block: "test",
            entries: &[
                Token::new("base", "black"),
                Token::with_fallback("mid", "base"),
                Token::with_fallback("top", "mid"),
            ],
        };
        assert_eq!(
            CHAINED.validate(),
            Err(RegistryError::ChainedFallback {
                from: "top".into(),
                through: "mid".into(),
            })
        );
    }

    #[test]
    fn test_validate_duplicate() {
        static DUPED: TokenRegistry = TokenRegistry {
            block: "test",
            entries: &[Token::new("color", "red"), Token::new("color", "blue")],
        };
        assert_eq!(
            DUPED.validate(),
            Err(RegistryError::DuplicateToken {
                name: "color".into()
            })
        );
    }
}
