//! Retrieval of raw log objects from an object store.
//!
//! Builds `ObjectStore` instances from runtime configuration (local file
//! system, Amazon S3, or S3-compatible storage) using the object_store
//! crate builders, and provides the single-GET fetch the shipper consumes.
//! No ranged reads and no retries happen at this layer.

mod cloud;
mod local;

use std::sync::Arc;

use bytes::Bytes;
use object_store::{ObjectStore, path::Path};
use snafu::{ResultExt, Snafu};

pub use cloud::AmazonS3Config;
pub use local::TemporaryFileSystemStore;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RetrievalError {
    #[snafu(display("failed to build {store_type} object store"))]
    Build {
        store_type: &'static str,
        source: object_store::Error,
    },
    #[snafu(display("failed to fetch object '{path}'"))]
    Fetch {
        path: String,
        source: object_store::Error,
    },
}

pub type Result<T, E = RetrievalError> = std::result::Result<T, E>;

/// Object store configuration.
#[derive(Debug, Clone)]
pub enum ObjectStoreConfig {
    /// Objects under a local directory, mainly for tests and dev runs.
    LocalFileSystem { root: std::path::PathBuf },
    /// An Amazon S3 bucket or S3-compatible endpoint.
    AmazonS3(AmazonS3Config),
}

impl ObjectStoreConfig {
    /// Create an `ObjectStore` instance from this configuration.
    pub fn build(&self) -> Result<Arc<dyn ObjectStore>> {
        match self {
            Self::LocalFileSystem { root } => local::build_local_store(root),
            Self::AmazonS3(config) => cloud::build_s3_store(config),
        }
    }
}

/// Fetch one object in full.
pub async fn fetch_object(store: &dyn ObjectStore, path: &Path) -> Result<Bytes> {
    let result = store.get(path).await.context(FetchSnafu {
        path: path.to_string(),
    })?;

    result.bytes().await.context(FetchSnafu {
        path: path.to_string(),
    })
}
