//! Cloud object store construction.
//!
//! Credentials come from the standard AWS environment; only the bucket
//! topology is configured here. S3-compatible providers (like MinIO) are
//! reached through the endpoint override.

use std::sync::Arc;

use object_store::{ObjectStore, aws::AmazonS3Builder};
use snafu::ResultExt;

use crate::{BuildSnafu, Result};

/// Amazon S3 (or S3-compatible) bucket configuration.
#[derive(Debug, Clone)]
pub struct AmazonS3Config {
    pub bucket_name: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    /// Allow plain HTTP endpoints, needed for local S3-compatible setups.
    pub allow_http: bool,
}

pub(crate) fn build_s3_store(config: &AmazonS3Config) -> Result<Arc<dyn ObjectStore>> {
    let mut builder = AmazonS3Builder::from_env().with_bucket_name(&config.bucket_name);

    if let Some(region) = &config.region {
        builder = builder.with_region(region);
    }

    if let Some(endpoint) = &config.endpoint {
        builder = builder.with_endpoint(endpoint);
    }

    builder = builder.with_allow_http(config.allow_http);

    let store = builder.build().context(BuildSnafu {
        store_type: "Amazon S3",
    })?;

    Ok(Arc::new(store))
}
