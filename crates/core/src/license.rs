//! License sidecar lookup.

use std::{fs::read, io::ErrorKind, path::PathBuf};

use log::{debug, warn};

use crate::{catalog::FontEntry, config::LICENSE_EXTENSION};

/// Collapse every newline (`\n` or `\r\n`) into one space and trim the result.
pub fn normalize_license(text: &str) -> String {
    text.replace("\r\n", " ").replace('\n', " ").trim().to_string()
}

/// Finds license text for fonts by matching stem names in a directory.
#[derive(Debug, Clone)]
pub struct LicenseLookup {
    dir: PathBuf,
}

impl LicenseLookup {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Expected sidecar path for `font`.
    pub fn path_for(&self, font: &FontEntry) -> PathBuf {
        self.dir.join(format!("{}.{LICENSE_EXTENSION}", font.stem()))
    }

    /// Normalized license text, or `None` when the sidecar is missing,
    /// unreadable or blank. Invalid UTF-8 is decoded lossily. Never fails.
    pub fn lookup(&self, font: &FontEntry) -> Option<String> {
        let path = self.path_for(font);
        debug!("Looking for license at {}", path.display());

        let bytes = match read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("License file not found: {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Failed to read license {}: {e}", path.display());
                return None;
            }
        };

        let license = normalize_license(&String::from_utf8_lossy(&bytes));
        debug!("License found for {}", font.stem());
        (!license.is_empty()).then_some(license)
    }
}
