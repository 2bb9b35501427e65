//! Where static assets come from.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Name of the manifest file at the root and inside each year directory.
pub const MANIFEST_FILENAME: &str = "contents.txt";

/// A read-only store of static text assets addressed by relative path.
pub trait AssetSource {
    fn read_text(&self, path: &Path) -> Result<String>;
}

impl<S: AssetSource + ?Sized> AssetSource for &S {
    fn read_text(&self, path: &Path) -> Result<String> {
        (**self).read_text(path)
    }
}

/// Asset source backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        let contained = path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(IngestError::PathEscapesRoot {
                path: path.to_path_buf(),
            });
        }
        Ok(self.root.join(path))
    }
}

impl AssetSource for FsAssetSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        let full = self.resolve(path)?;
        debug!(path = %full.display(), "reading asset");
        std::fs::read_to_string(&full).map_err(|source| IngestError::AssetRead { path: full, source })
    }
}
