//! Child process dispatch
//!
//! The dispatcher ties tokenization, resolution and process spawning
//! together: it is the only place where "nothing resolved" turns into an
//! error, and the only component that touches anything beyond the tree
//! itself. The child inherits the parent's standard streams and working
//! directory; its exit status is propagated verbatim.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::diag::DiagSink;
use crate::resolve::Resolution;
use crate::tree::CommandTree;

/// Errors that can occur while dispatching a command line
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unbalanced quoting in input: {0}")]
    Tokenize(#[from] shell_words::ParseError),
    #[error("{app}: nothing runnable matches {tokens:?} (no root driver either)")]
    NothingRunnable { app: String, tokens: Vec<String> },
    #[error(
        "The OS cannot execute {script} even though it is marked executable; check its interpreter line"
    )]
    ExecFormat { script: PathBuf },
    #[error(transparent)]
    Spawn(#[from] io::Error),
}

/// Resolves command lines against a tree and runs the matched script.
pub struct Dispatcher<S> {
    tree: CommandTree,
    diag: S,
}

impl<S: DiagSink> Dispatcher<S> {
    pub fn new(tree: CommandTree, diag: S) -> Self {
        Self { tree, diag }
    }

    #[must_use]
    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// Resolve `input` and run the matched script with the unconsumed
    /// tokens as its arguments.
    ///
    /// Returns the child's exit code; a child killed by a signal reports
    /// `128 + signal`. With `noop` set, resolution still happens but no
    /// process is spawned and `None` comes back.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Tokenize` if `input` has unbalanced quoting,
    /// `DispatchError::NothingRunnable` if no prefix of the input (nor the
    /// root driver) resolves, `DispatchError::ExecFormat` if the OS loader
    /// rejects the resolved script, and `DispatchError::Spawn` for any
    /// other spawn failure.
    pub fn run(&self, input: &str, noop: bool) -> Result<Option<i32>, DispatchError> {
        let tokens = shell_words::split(input)?;
        self.diag.debug(&format!("dispatching {tokens:?}"));

        let Resolution::Found { script, args } = self.tree.resolve(&tokens) else {
            return Err(DispatchError::NothingRunnable {
                app: self.tree.app_name().to_string(),
                tokens,
            });
        };
        self.diag.info(&format!(
            "resolved {} with arguments {args:?}",
            script.display()
        ));

        if noop {
            self.diag.debug("noop set, not spawning");
            return Ok(None);
        }

        let status = Command::new(&script)
            .args(&args)
            .status()
            .map_err(|err| classify_spawn_error(err, &script))?;
        let code = match status.code() {
            Some(code) => code,
            None => {
                use std::os::unix::process::ExitStatusExt;
                128 + status.signal().unwrap_or_default()
            }
        };
        self.diag.debug(&format!("child exited with {code}"));
        Ok(Some(code))
    }
}

/// The loader refusing a file it agreed was executable gets its own error;
/// everything else passes through untouched.
fn classify_spawn_error(err: io::Error, script: &Path) -> DispatchError {
    if err.raw_os_error() == Some(libc::ENOEXEC) {
        DispatchError::ExecFormat {
            script: script.to_path_buf(),
        }
    } else {
        DispatchError::Spawn(err)
    }
}
