//! fontcopy core - install bundled web fonts into a project and emit their `@font-face` rules.

pub mod catalog;
pub mod config;
pub mod css;
pub mod error;
pub mod install;
pub mod license;
pub mod pipeline;
pub mod prompt;
pub mod selection;

pub use catalog::{Catalog, FontEntry};
pub use config::Paths;
pub use css::{FontFaceRule, UNICODE_BLOCKS, generate_rule};
pub use error::{Error, Result};
pub use install::Installer;
pub use license::{LicenseLookup, normalize_license};
pub use pipeline::{Report, generate_rules, run};
pub use prompt::Prompt;
pub use selection::{Resolution, decode_font_arg, resolve};
