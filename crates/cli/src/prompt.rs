//! Terminal prompts backed by `inquire`.

use fontcopy_core::{Error, Prompt, Result};
use inquire::{Confirm, InquireError, MultiSelect};

fn prompt_error(e: InquireError) -> Error {
    Error::Prompt(e.to_string())
}

/// Asks questions on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new(message).with_default(default).prompt().map_err(prompt_error)
    }

    fn multi_select(&mut self, message: &str, options: &[String]) -> Result<Vec<String>> {
        // inquire rejects an empty option list
        if options.is_empty() {
            return Ok(Vec::new());
        }
        MultiSelect::new(message, options.to_vec())
            .with_vim_mode(true)
            .prompt()
            .map_err(prompt_error)
    }
}
