//! Decorative asset lookup
//!
//! Assets are read from fixed relative file names and are strictly optional.
//! The catalog answers "is this asset available" with an `Option`; the
//! renderer turns `None` into a placeholder band, never an error.

use std::path::{Path, PathBuf};

/// Fixed asset file names. The signature file name is spelled the way the
/// deployed asset is actually named.
pub const HEADER_IMAGE: &str = "header.png";
pub const FOOTER_IMAGE: &str = "footer.png";
pub const SIGNATURE_IMAGE: &str = "signeture.jpg";
pub const SECOND_SIGNATURE_IMAGE: &str = "ss.jpg";
pub const SEAL_IMAGE: &str = "seal.png";

/// Resolves decorative assets relative to a base directory.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    dir: PathBuf,
}

impl AssetCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the asset's path if the file exists.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let path = self.dir.join(name);
        path.is_file().then_some(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
