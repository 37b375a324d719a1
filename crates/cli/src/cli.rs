//! CLI definitions and dispatch.

use std::{env::current_dir, io::stdout, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fontcopy_core::{Paths, config::BUNDLED_ASSETS_DIR, run};

use crate::prompt::TerminalPrompt;

#[derive(Parser)]
#[command(name = "fontcopy")]
#[command(about = "Copy bundled web fonts into a project and print their @font-face rules")]
pub struct Cli {
    /// Font family names, with spaces written as `+` (e.g. `Open+Sans`).
    /// Prompts interactively when none are given.
    #[arg(allow_hyphen_values = true)]
    pub fonts: Vec<String>,

    /// Directory holding the `font/` and `license/` asset folders
    #[arg(long, env = "FONTCOPY_ASSETS_DIR", default_value = BUNDLED_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Project to install into; defaults to the current directory
    #[arg(long, env = "FONTCOPY_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,
}

impl Cli {
    pub fn paths(&self) -> Result<Paths> {
        let project_dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => current_dir().context("Failed to resolve current directory")?,
        };
        Ok(Paths::new(&self.assets_dir, project_dir))
    }

    pub fn run(self) -> Result<()> {
        let paths = self.paths()?;
        let mut out = stdout().lock();
        run(&paths, self.fonts.as_slice(), &mut TerminalPrompt, &mut out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_fonts() {
        let cli = Cli::try_parse_from(["fontcopy", "Open+Sans", "Roboto"]).unwrap();
        assert_eq!(cli.fonts, ["Open+Sans", "Roboto"]);
    }

    #[test]
    fn test_parse_hyphenated_font_names() {
        let cli = Cli::try_parse_from(["fontcopy", "-Light"]).unwrap();
        assert_eq!(cli.fonts, ["-Light"]);

        let cli =
            Cli::try_parse_from(["fontcopy", "--project-dir", "/srv/site", "Roboto", "-Light"])
                .unwrap();
        assert_eq!(cli.fonts, ["Roboto", "-Light"]);
        assert_eq!(cli.project_dir, Some(PathBuf::from("/srv/site")));
    }

    #[test]
    fn test_parse_no_fonts() {
        let cli = Cli::try_parse_from(["fontcopy"]).unwrap();
        assert!(cli.fonts.is_empty());
    }

    #[test]
    fn test_paths_from_overrides() {
        let cli = Cli::try_parse_from([
            "fontcopy",
            "--assets-dir",
            "/opt/fonts",
            "--project-dir",
            "/srv/site",
        ])
        .unwrap();
        let paths = cli.paths().unwrap();
        assert_eq!(paths.source_dir, PathBuf::from("/opt/fonts/font"));
        assert_eq!(paths.target_dir, PathBuf::from("/srv/site/public/assets/font"));
    }
}
