//! End-to-end run: catalog, selection, install, CSS output.

use std::{io::Write, path::PathBuf};

use log::{info, warn};
use rayon::prelude::*;

use crate::{
    catalog::{Catalog, FontEntry},
    config::Paths,
    css::generate_rule,
    error::Result,
    install::Installer,
    license::LicenseLookup,
    prompt::Prompt,
    selection::resolve,
};

/// What a run did.
#[derive(Debug, Default)]
pub struct Report {
    pub installed: Vec<PathBuf>,
    pub not_found: Vec<String>,
    pub rules: Vec<String>,
}

/// Generate one rule per font, looking licenses up in parallel.
///
/// The returned rules are in the same order as `fonts`.
pub fn generate_rules(
    fonts: &[FontEntry],
    licenses: &LicenseLookup,
    url_prefix: &str,
) -> Vec<String> {
    fonts
        .par_iter()
        .map(|font| generate_rule(font, url_prefix, licenses.lookup(font)))
        .collect()
}

/// Run the whole pipeline, writing user-facing messages and CSS to `out`.
pub fn run<S: AsRef<str>>(
    paths: &Paths,
    args: &[S],
    prompt: &mut impl Prompt,
    out: &mut impl Write,
) -> Result<Report> {
    let catalog = Catalog::read(&paths.source_dir)?;
    if catalog.is_empty() {
        warn!("No fonts found in {}", catalog.dir().display());
    } else {
        info!("Found {} fonts in {}", catalog.len(), catalog.dir().display());
    }
    let resolution = resolve(&catalog, args, prompt)?;

    if !resolution.not_found.is_empty() {
        let missing = resolution.not_found.join(", ");
        writeln!(out, "\nWarning: These fonts were not found: {missing}")?;
    }

    let installer = Installer::new(&paths.source_dir, &paths.target_dir);
    let installed = installer.install_all(&resolution.selected)?;

    if resolution.is_empty() {
        writeln!(out, "\nNo fonts were selected.\n")?;
        return Ok(Report { installed, not_found: resolution.not_found, rules: Vec::new() });
    }

    info!("Installed {} fonts into {}", installed.len(), installer.target_dir().display());

    let licenses = LicenseLookup::new(&paths.license_dir);
    let rules = generate_rules(&resolution.selected, &licenses, &paths.url_prefix);

    writeln!(out, "\nCSS rules for selected fonts:")?;
    writeln!(out, "\n{}\n", rules.join("\n\n"))?;
    out.flush()?;

    Ok(Report { installed, not_found: resolution.not_found, rules })
}
