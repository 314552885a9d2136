//! Filesystem-backed command namespace
//!
//! A command tree is a directory whose contents form a hierarchy of
//! subcommands. A directory becomes a command group when it holds an
//! executable file with the reserved name [`DRIVER_NAME`]; runnable files
//! with valid names inside such a group are its leaf commands. Every probe
//! reads live filesystem state, so the tree can be edited between calls
//! without restarting anything.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::name::NamePolicy;
use crate::resolve::Resolution;

/// Reserved basename marking a directory as a command group.
pub const DRIVER_NAME: &str = "_driver";

/// Errors that can occur while opening a command tree
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Command tree root does not exist: {0}")]
    RootNotFound(PathBuf),
    #[error("Command tree root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Root directory name {0:?} is not a valid command name")]
    InvalidRootName(String),
}

/// Read-only view over a command tree on disk.
#[derive(Debug, Clone)]
pub struct CommandTree {
    root: PathBuf,
    name: String,
    policy: NamePolicy,
}

impl CommandTree {
    /// Open the tree rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError` if `root` is missing, is not a directory, or its
    /// basename is not a valid command name under `policy`.
    pub fn new(root: impl Into<PathBuf>, policy: NamePolicy) -> Result<Self, TreeError> {
        let root: PathBuf = root.into();
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .map(ToString::to_string)
            .ok_or_else(|| TreeError::InvalidRootName(root.display().to_string()))?;
        if !policy.is_valid(&name) {
            return Err(TreeError::InvalidRootName(name));
        }
        let meta = fs::metadata(&root).map_err(|_| TreeError::RootNotFound(root.clone()))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(root));
        }
        Ok(Self { root, name, policy })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The application name, i.e. the root directory's basename.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn policy(&self) -> NamePolicy {
        self.policy
    }

    /// Map a token sequence to its path under the root.
    ///
    /// Zero tokens map to the root itself. Pure, no filesystem access.
    #[must_use]
    pub fn args_to_path(&self, args: &[String]) -> PathBuf {
        let mut path = self.root.clone();
        for arg in args {
            path.push(arg);
        }
        path
    }

    /// Locate the script a path denotes, if any.
    ///
    /// A directory resolves to its driver file, a runnable regular file
    /// resolves to itself, anything else resolves to nothing. The returned
    /// path is always runnable.
    #[must_use]
    pub fn resolve_bin(&self, path: &Path) -> Option<PathBuf> {
        if path.is_dir() {
            let driver = path.join(DRIVER_NAME);
            runnable(&driver).then_some(driver)
        } else if runnable(path) {
            Some(path.to_path_buf())
        } else {
            None
        }
    }

    /// Whether `dir` contains a driver file, runnable or not.
    #[must_use]
    pub fn has_driver(&self, dir: &Path) -> bool {
        dir.join(DRIVER_NAME).is_file()
    }

    /// Whether `script` is a runnable driver file.
    #[must_use]
    pub fn is_driver_file(&self, script: &Path) -> bool {
        script.file_name().is_some_and(|n| n == DRIVER_NAME) && runnable(script)
    }

    /// Whether `script` is a leaf command: a runnable, valid-named regular
    /// file inside a command group.
    #[must_use]
    pub fn is_regular_command(&self, script: &Path) -> bool {
        !script.file_name().is_some_and(|n| n == DRIVER_NAME)
            && runnable(script)
            && self.valid_basename(script)
            && script.parent().is_some_and(|dir| self.has_driver(dir))
    }

    /// Whether `dir` is addressable as a command group: a valid name and a
    /// runnable driver file inside.
    #[must_use]
    pub fn is_driver_command(&self, dir: &Path) -> bool {
        self.is_driver_file(&dir.join(DRIVER_NAME)) && self.valid_basename(dir)
    }

    /// Whether `path` shows up as a command at all, group or leaf.
    #[must_use]
    pub fn appears_as_command(&self, path: &Path) -> bool {
        self.is_driver_command(path) || self.is_regular_command(path)
    }

    /// List the immediate subcommands of the group addressed by `args`.
    ///
    /// Empty unless `args` resolves cleanly (no leftover tokens) to a
    /// driver file. Entries come back in directory order, which is not
    /// guaranteed sorted; anything in the group's directory that doesn't
    /// classify as a command is skipped, the driver file included.
    #[must_use]
    pub fn subcommands(&self, args: &[String]) -> Vec<String> {
        let Resolution::Found { script, args: rest } = self.resolve(args) else {
            return Vec::new();
        };
        if !rest.is_empty() || !self.is_driver_file(&script) {
            return Vec::new();
        }
        let Some(dir) = script.parent() else {
            return Vec::new();
        };
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter(|entry| self.appears_as_command(&entry.path()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    fn valid_basename(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.policy.is_valid(n))
    }
}

/// A runnable script: a regular file with read and execute permission bits.
pub(crate) fn runnable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file() && readable_executable(&meta))
}

/// Read and execute bits set for at least one of owner, group or other.
pub(crate) fn readable_executable(meta: &fs::Metadata) -> bool {
    let mode = meta.permissions().mode();
    mode & 0o444 != 0 && mode & 0o111 != 0
}
