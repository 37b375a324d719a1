//! Interactive prompt abstraction.

use crate::error::Result;

/// The two questions asked when no fonts are named on the command line.
pub trait Prompt {
    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Let the user check any subset of `options`; returns the checked ones.
    fn multi_select(&mut self, message: &str, options: &[String]) -> Result<Vec<String>>;
}

