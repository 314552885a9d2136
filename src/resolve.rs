//! Fuzzy prefix resolution of token sequences
//!
//! Resolution maps the longest valid prefix of the input tokens onto a
//! runnable script and hands the unconsumed suffix back as that script's
//! arguments. When a token doesn't match anything, the window shrinks one
//! token at a time until it lands on the nearest enclosing group driver, so
//! `myapp foo nope` runs `foo`'s driver with `nope` left in the argument
//! list and the driver gets to print its own unknown-subcommand message.

use std::path::PathBuf;

use crate::tree::CommandTree;

/// Outcome of resolving a token sequence against the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A runnable script matched a prefix of the tokens. `args` is the
    /// unconsumed suffix, in original order.
    Found { script: PathBuf, args: Vec<String> },
    /// Nothing runnable matched at any prefix length, not even a root
    /// driver.
    NotFound,
}

impl CommandTree {
    /// Resolve `tokens` to the longest-prefix runnable script.
    ///
    /// Prefixes are tried from the full token list down to and including
    /// the empty prefix, which probes the root driver. A prefix is only
    /// probed when every one of its tokens is a valid name; the first
    /// runnable hit wins.
    #[must_use]
    pub fn resolve(&self, tokens: &[String]) -> Resolution {
        for len in (0..=tokens.len()).rev() {
            let prefix = &tokens[..len];
            if !prefix.iter().all(|token| self.policy().is_valid(token)) {
                continue;
            }
            if let Some(script) = self.resolve_bin(&self.args_to_path(prefix)) {
                return Resolution::Found {
                    script,
                    args: tokens[len..].to_vec(),
                };
            }
        }
        Resolution::NotFound
    }
}
