//! Local file system object stores.

use std::{path::Path, sync::Arc};

use object_store::{ObjectStore, local::LocalFileSystem};
use snafu::ResultExt;
use tempfile::TempDir;

use crate::{BuildSnafu, Result};

pub(crate) fn build_local_store(root: &Path) -> Result<Arc<dyn ObjectStore>> {
    let store = LocalFileSystem::new_with_prefix(root).context(BuildSnafu {
        store_type: "local file system",
    })?;

    Ok(Arc::new(store))
}

/// Object store rooted in a temporary directory that is removed when the
/// value is dropped. Used by tests and the dev harness.
pub struct TemporaryFileSystemStore {
    root: TempDir,
    store: Arc<dyn ObjectStore>,
}

impl TemporaryFileSystemStore {
    pub fn new() -> Result<Self> {
        let root = TempDir::new().map_err(|err| crate::RetrievalError::Build {
            store_type: "temporary file system",
            source: object_store::Error::Generic {
                store: "TemporaryFileSystemStore",
                source: Box::new(err),
            },
        })?;

        let store = build_local_store(root.path())?;
        Ok(Self { root, store })
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    pub fn store(&self) -> Arc<dyn ObjectStore> {
        self.store.clone()
    }
}
