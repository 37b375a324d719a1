//! Discovery of the fonts available for installation.

use std::{
    fmt,
    fs::read_dir,
    path::{Path, PathBuf},
};

use crate::{
    config::FONT_EXTENSION,
    error::{Error, Result},
};

/// A font file in the source directory, identified by its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontEntry {
    file_name: String,
}

impl FontEntry {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self { file_name: file_name.into() }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name without its extension; used as the CSS family name.
    pub fn stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }
}

impl fmt::Display for FontEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

/// Whether `file_name` carries the supported font extension.
pub fn is_font_file(file_name: &str) -> bool {
    file_name
        .strip_suffix(FONT_EXTENSION)
        .is_some_and(|rest| rest.ends_with('.'))
}

/// The fonts found in a source directory, sorted by file name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dir: PathBuf,
    entries: Vec<FontEntry>,
}

impl Catalog {
    /// List `dir` and keep every non-directory entry with the font extension.
    pub fn read(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let read_err = |source: std::io::Error| Error::ReadCatalog { path: dir.clone(), source };

        let mut entries = Vec::new();
        for entry in read_dir(&dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if entry.file_type().map_err(read_err)?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if is_font_file(&name) {
                entries.push(FontEntry::new(name));
            }
        }
        entries.sort();

        Ok(Self { dir, entries })
    }

    pub fn from_entries(
        dir: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = FontEntry>,
    ) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort();
        entries.dedup();
        Self { dir: dir.into(), entries }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[FontEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by exact, case-sensitive file name.
    pub fn get(&self, file_name: &str) -> Option<&FontEntry> {
        self.entries.iter().find(|e| e.file_name == file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.get(file_name).is_some()
    }
}
