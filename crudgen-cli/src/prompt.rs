//! Interactive overwrite prompt

use crudgen::emit::DecisionSource;
use crudgen::error::{GeneratorError, Result};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::{self, IsTerminal};
use std::path::Path;

/// Asks on the terminal before replacing a file; the default answer is yes
///
/// Without a terminal on stdin the default answer is used. A prompt that
/// fails to read an answer is an error, never an implicit yes.
#[derive(Debug)]
pub struct PromptDecision {
    interactive: bool,
}

impl Default for PromptDecision {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDecision {
    /// Prompt on the current terminal
    #[must_use]
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    /// Never prompt; always take the default answer
    #[must_use]
    pub const fn non_interactive() -> Self {
        Self { interactive: false }
    }
}

impl DecisionSource for PromptDecision {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        if !self.interactive {
            tracing::debug!(path = %path.display(), "no terminal, overwriting by default");
            return Ok(true);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "{} already exists. Do you want to overwrite it?",
                path.display()
            ))
            .default(true)
            .interact()
            .map_err(|e| prompt_error(path, e))
    }
}

/// Failed read of an overwrite answer for `path`
fn prompt_error(path: &Path, err: dialoguer::Error) -> GeneratorError {
    GeneratorError::io(path, io::Error::other(format!("failed to read answer: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_takes_default() {
        let mut prompt = PromptDecision::non_interactive();
        assert!(prompt
            .confirm_overwrite(Path::new("app/Models/Post.php"))
            .unwrap());
    }

    #[test]
    fn test_prompt_failure_is_io_error() {
        let err = prompt_error(
            Path::new("app/Models/Post.php"),
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "interrupted")),
        );

        assert!(matches!(
            err,
            GeneratorError::Io { ref path, .. } if path == Path::new("app/Models/Post.php")
        ));
        assert!(err.to_string().contains("failed to read answer"));
    }
}
