//! Configuration constants and path layout for fontcopy.

use std::path::{Path, PathBuf};

/// Extension of the bundled font files.
pub const FONT_EXTENSION: &str = "woff2";

/// Format token used in the `src` descriptor of generated rules.
pub const FONT_FORMAT: &str = "woff2";

/// Extension of license sidecar files.
pub const LICENSE_EXTENSION: &str = "txt";

/// Font directory inside the assets root.
pub const FONT_SUBDIR: &str = "font";

/// License directory inside the assets root.
pub const LICENSE_SUBDIR: &str = "license";

/// Install location relative to the consumer project root.
pub const TARGET_SUBPATH: &str = "public/assets/font";

/// Public URL under which installed fonts are served.
pub const PUBLIC_URL_PREFIX: &str = "/assets/font";

/// Assets bundled with this workspace.
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets");

/// Filesystem locations used by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub source_dir: PathBuf,
    pub license_dir: PathBuf,
    pub target_dir: PathBuf,
    pub url_prefix: String,
}

impl Paths {
    /// Derive every location from the assets root and the consumer project root.
    pub fn new(assets_root: impl AsRef<Path>, project_root: impl AsRef<Path>) -> Self {
        let assets_root = assets_root.as_ref();
        Self {
            source_dir: assets_root.join(FONT_SUBDIR),
            license_dir: assets_root.join(LICENSE_SUBDIR),
            target_dir: project_root.as_ref().join(TARGET_SUBPATH),
            url_prefix: PUBLIC_URL_PREFIX.to_string(),
        }
    }
}
