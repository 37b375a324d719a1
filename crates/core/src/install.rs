//! Copying selected fonts into the consumer project.

use std::{
    fs::{copy, create_dir_all},
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    catalog::FontEntry,
    error::{Error, Result},
};

/// Copies font files from the source directory into the target directory.
#[derive(Debug, Clone)]
pub struct Installer {
    source_dir: PathBuf,
    target_dir: PathBuf,
}

impl Installer {
    pub fn new(source_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self { source_dir: source_dir.into(), target_dir: target_dir.into() }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Create the target directory (and parents) if it doesn't exist.
    pub fn ensure_target_dir(&self) -> Result<()> {
        create_dir_all(&self.target_dir)
            .map_err(|source| Error::CreateDir { path: self.target_dir.clone(), source })
    }

    /// Copy one font, overwriting any existing file of the same name.
    pub fn install(&self, font: &FontEntry) -> Result<PathBuf> {
        self.ensure_target_dir()?;

        let from = self.source_dir.join(font.file_name());
        let to = self.target_dir.join(font.file_name());
        copy(&from, &to).map_err(|source| Error::CopyFont {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;

        info!("Installed {}", to.display());
        Ok(to)
    }

    /// Copy fonts one at a time, stopping at the first failure.
    pub fn install_all<'a>(
        &self,
        fonts: impl IntoIterator<Item = &'a FontEntry>,
    ) -> Result<Vec<PathBuf>> {
        fonts.into_iter().map(|font| self.install(font)).collect()
    }
}
