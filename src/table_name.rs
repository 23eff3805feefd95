//! Table names supplied at runtime
//!
//! A `TableName` can only be obtained through [`TableName::parse`], so the
//! storage layer never sees an unvalidated name.
//!
//! Under [`IdentifierPolicy::Lenient`] the only rule is "non-empty after
//! trimming" and the name is interpolated into the CREATE statement as given.
//! The engine is then the one rejecting spaces, keywords or stray delimiters.
//! [`IdentifierPolicy::Strict`] narrows the accepted set to plain identifiers.

use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn identifier_pattern() -> &'static Regex {
    IDENTIFIER.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"))
}

/// How strictly a runtime table name is checked before use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// Non-empty after trimming; everything else is left to the engine
    #[default]
    Lenient,
    /// Letters, digits and underscores, not starting with a digit
    Strict,
}

impl IdentifierPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierPolicy::Lenient => "lenient",
            IdentifierPolicy::Strict => "strict",
        }
    }

    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            IdentifierPolicy::Strict
        } else {
            IdentifierPolicy::Lenient
        }
    }
}

impl FromStr for IdentifierPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lenient" | "loose" => Ok(IdentifierPolicy::Lenient),
            "strict" => Ok(IdentifierPolicy::Strict),
            _ => Err(Error::Config(format!("Unknown identifier policy: {}", s))),
        }
    }
}

/// A validated, trimmed table name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Validate raw input under the given policy
    pub fn parse(input: &str, policy: IdentifierPolicy) -> Result<Self> {
        let name = input.trim();
        if name.is_empty() {
            return Err(Error::EmptyTableName);
        }

        if policy == IdentifierPolicy::Strict && !identifier_pattern().is_match(name) {
            return Err(Error::InvalidTableName(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
