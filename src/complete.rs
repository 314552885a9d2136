//! Shell completion over the command tree

use crate::tree::CommandTree;

impl CommandTree {
    /// Produce completion suggestions for a partially typed command line.
    ///
    /// `input` is the raw line after the application name, shell quoting
    /// respected. Trailing whitespace (or an empty line) means the last
    /// token is already complete, so every subcommand of the resolved group
    /// is suggested; otherwise the last token acts as a prefix filter over
    /// the subcommands of the tokens before it. Never errors: input that
    /// doesn't tokenize (e.g. a dangling quote) completes to nothing.
    #[must_use]
    pub fn complete(&self, input: &str) -> Vec<String> {
        let Ok(mut tokens) = shell_words::split(input) else {
            return Vec::new();
        };
        let prefix = if input.is_empty() || input.ends_with(char::is_whitespace) {
            String::new()
        } else {
            tokens.pop().unwrap_or_default()
        };
        self.subcommands(&tokens)
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }
}
