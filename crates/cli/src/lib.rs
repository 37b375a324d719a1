//! fontcopy CLI library.

pub mod cli;
pub mod prompt;
