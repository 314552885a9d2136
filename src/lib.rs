//! Core implementation of the drover command dispatcher
//!
//! Drover maps a directory tree onto a hierarchy of subcommands: a
//! directory containing a `_driver` executable is a command group, and the
//! runnable files inside it are its commands. Resolution matches the
//! longest valid prefix of the input tokens to a script and hands the rest
//! to that script as arguments, falling back to the nearest enclosing
//! group's driver when a token doesn't match, so drivers can report unknown
//! subcommands themselves. The same tree feeds shell completion and a
//! permission audit. Nothing is cached; editing the tree takes effect on
//! the next invocation.

use std::path::PathBuf;

use log::debug;

pub mod complete;
pub mod diag;
pub mod dispatch;
pub mod logger;
pub mod name;
pub mod resolve;
#[cfg(test)]
pub(crate) mod testutil;
pub mod tree;
pub mod verify;

pub use crate::name::NamePolicy;
pub use crate::resolve::Resolution;
pub use crate::tree::{CommandTree, DRIVER_NAME, TreeError};

/// Open the command tree rooted at `root`.
///
/// # Errors
///
/// Returns `TreeError` if the root is missing, is not a directory, or its
/// basename is not a valid command name under `policy`.
pub fn open_tree(
    root: impl Into<PathBuf>,
    policy: NamePolicy,
) -> Result<CommandTree, TreeError> {
    let root = root.into();
    debug!("Opening command tree at {}", root.display());
    CommandTree::new(root, policy)
}
