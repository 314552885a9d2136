//! Validation of command segment names
//!
//! A token only maps onto the tree when it is a legal segment name, which
//! keeps path-traversal characters and the reserved driver basename out of
//! lookups. Two rules exist: the strict alphanumeric one, and the hyphenated
//! one that additionally allows single interior hyphens (`foo-bar` but not
//! `foo--bar`, `-foo` or `foo-`).

use std::sync::LazyLock;

use regex::Regex;

static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid pattern"));

static HYPHENATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("valid pattern"));

/// Rule deciding which tokens are legal command segment names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Letters and digits only.
    Alphanumeric,
    /// Letters and digits, with single hyphens between runs.
    #[default]
    Hyphenated,
}

impl NamePolicy {
    /// Whether `token` is a legal command segment name under this policy.
    #[must_use]
    pub fn is_valid(self, token: &str) -> bool {
        match self {
            NamePolicy::Alphanumeric => ALPHANUMERIC.is_match(token),
            NamePolicy::Hyphenated => HYPHENATED.is_match(token),
        }
    }
}
