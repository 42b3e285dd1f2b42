use std::path::PathBuf;

use clap::Args;
use gale_core::ShipperConfig;
use gale_log_store::{GroupName, StreamName};
use gale_object_store::{AmazonS3Config, ObjectStoreConfig};
use snafu::ResultExt;

use crate::error::{CliError, InvalidDestinationNameSnafu, Result};

/// Where to fetch log objects from.
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Local directory holding the log objects
    #[arg(long, conflicts_with = "bucket")]
    root: Option<PathBuf>,
    /// S3 bucket holding the log objects
    #[arg(long)]
    bucket: Option<String>,
    /// S3 region
    #[arg(long, requires = "bucket")]
    region: Option<String>,
    /// S3-compatible endpoint override
    #[arg(long, requires = "bucket")]
    endpoint: Option<String>,
    /// Allow plain HTTP endpoints (local S3-compatible setups)
    #[arg(long, requires = "bucket")]
    allow_http: bool,
}

impl StoreArgs {
    pub fn object_store_config(&self) -> Result<ObjectStoreConfig> {
        if let Some(root) = &self.root {
            return Ok(ObjectStoreConfig::LocalFileSystem { root: root.clone() });
        }

        if let Some(bucket_name) = &self.bucket {
            return Ok(ObjectStoreConfig::AmazonS3(AmazonS3Config {
                bucket_name: bucket_name.clone(),
                region: self.region.clone(),
                endpoint: self.endpoint.clone(),
                allow_http: self.allow_http,
            }));
        }

        Err(CliError::InvalidArgument {
            name: "store",
            message: "either --root or --bucket is required".to_string(),
        })
    }
}

/// Destination stream and batching budgets.
#[derive(Debug, Args)]
pub struct DestinationArgs {
    /// Destination log group
    #[arg(long, default_value = "apache-elb-logs")]
    group: String,
    /// Destination log stream
    #[arg(long, default_value = "apache-elb-stream")]
    stream: String,
    /// Maximum charged bytes per batch
    #[arg(long)]
    byte_budget: Option<usize>,
    /// Maximum records per batch
    #[arg(long)]
    count_budget: Option<usize>,
    /// Per-record charge added to the line length
    #[arg(long)]
    record_overhead: Option<usize>,
}

impl DestinationArgs {
    pub fn shipper_config(&self) -> Result<ShipperConfig> {
        let group_name = GroupName::parse(&self.group).context(InvalidDestinationNameSnafu)?;
        let stream_name = StreamName::parse(&self.stream).context(InvalidDestinationNameSnafu)?;

        let mut config = ShipperConfig::for_destination(group_name, stream_name);
        if let Some(byte_budget) = self.byte_budget {
            config = config.with_byte_budget(byte_budget);
        }
        if let Some(count_budget) = self.count_budget {
            config = config.with_count_budget(count_budget);
        }
        if let Some(record_overhead) = self.record_overhead {
            config = config.with_record_overhead(record_overhead);
        }

        Ok(config)
    }
}
