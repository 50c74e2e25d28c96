//! Workspace and author addresses.
//!
//! Valid workspace addresses look like `+gardening.pals`:
//! - Leading `+` sigil
//! - A name of 1–15 lowercase ASCII letters or digits, starting with a letter
//! - A `.` separator
//! - A non-empty suffix of up to 53 lowercase letters or digits
//!
//! Valid author addresses look like `@bird.btr46n...`:
//! - Leading `@` sigil
//! - A shortname of exactly 4 lowercase letters or digits, starting with a letter
//! - A `.` separator
//! - A non-empty key segment of lowercase letters or digits

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

const MAX_WORKSPACE_NAME_LEN: usize = 15;
const MAX_WORKSPACE_SUFFIX_LEN: usize = 53;
const AUTHOR_SHORTNAME_LEN: usize = 4;

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

fn split_sigil_address(s: &str, sigil: char) -> Option<(&str, &str)> {
    let rest = s.strip_prefix(sigil)?;
    let (name, suffix) = rest.split_once('.')?;
    Some((name, suffix))
}

/// A validated workspace identifier, e.g. `+gardening.pals`.
///
/// The unit of multi-tenancy: one address maps to exactly one document
/// store for the registry's lifetime.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkspaceAddress(String);

impl WorkspaceAddress {
    /// Parse and validate a workspace address.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let err = |reason: &str| TypeError::InvalidWorkspaceAddress {
            address: s.to_string(),
            reason: reason.to_string(),
        };

        let (name, suffix) =
            split_sigil_address(s, '+').ok_or_else(|| err("expected '+name.suffix'"))?;

        if name.is_empty() || name.len() > MAX_WORKSPACE_NAME_LEN {
            return Err(err("name must be 1-15 characters"));
        }
        if !name.starts_with(|ch: char| ch.is_ascii_lowercase()) {
            return Err(err("name must start with a lowercase letter"));
        }
        if !name.chars().all(is_name_char) {
            return Err(err("name must be lowercase letters and digits"));
        }
        if suffix.is_empty() || suffix.len() > MAX_WORKSPACE_SUFFIX_LEN {
            return Err(err("suffix must be 1-53 characters"));
        }
        if !suffix.chars().all(is_name_char) {
            return Err(err("suffix must be lowercase letters and digits"));
        }

        Ok(Self(s.to_string()))
    }

    /// The full address string, including the `+` sigil.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name portion, without sigil or suffix.
    pub fn name(&self) -> &str {
        // Validated at construction, both separators are present.
        let rest = &self.0[1..];
        rest.split_once('.').map(|(name, _)| name).unwrap_or(rest)
    }
}

impl FromStr for WorkspaceAddress {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WorkspaceAddress {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<WorkspaceAddress> for String {
    fn from(addr: WorkspaceAddress) -> Self {
        addr.0
    }
}

impl fmt::Debug for WorkspaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorkspaceAddress({})", self.0)
    }
}

impl fmt::Display for WorkspaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated author identity, e.g. `@bird.btr46n7ij6eq...`.
///
/// Wharf never verifies that the key segment is a real public key; that
/// is the document store's concern. Only the address shape is checked.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorAddress(String);

impl AuthorAddress {
    /// Parse and validate an author address.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let err = |reason: &str| TypeError::InvalidAuthorAddress {
            address: s.to_string(),
            reason: reason.to_string(),
        };

        let (shortname, key) =
            split_sigil_address(s, '@').ok_or_else(|| err("expected '@name.key'"))?;

        if shortname.len() != AUTHOR_SHORTNAME_LEN {
            return Err(err("shortname must be exactly 4 characters"));
        }
        if !shortname.starts_with(|ch: char| ch.is_ascii_lowercase()) {
            return Err(err("shortname must start with a lowercase letter"));
        }
        if !shortname.chars().all(is_name_char) {
            return Err(err("shortname must be lowercase letters and digits"));
        }
        if key.is_empty() || !key.chars().all(is_name_char) {
            return Err(err("key must be non-empty lowercase letters and digits"));
        }

        Ok(Self(s.to_string()))
    }

    /// The full address string, including the `@` sigil.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 4-character shortname, without sigil or key.
    pub fn shortname(&self) -> &str {
        &self.0[1..1 + AUTHOR_SHORTNAME_LEN]
    }
}

impl FromStr for AuthorAddress {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AuthorAddress {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<AuthorAddress> for String {
    fn from(addr: AuthorAddress) -> Self {
        addr.0
    }
}

impl fmt::Debug for AuthorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthorAddress({})", self.0)
    }
}

impl fmt::Display for AuthorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
