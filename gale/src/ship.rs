use std::sync::Arc;

use clap::Parser;
use gale_core::Shipper;
use gale_log_store::InMemoryLogStore;
use gale_object_store::fetch_object;
use object_store::path::Path;
use snafu::ResultExt;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{Result, RetrievalSnafu, ShipmentSnafu},
    helpers::{DestinationArgs, StoreArgs},
};

/// Ship a log object to the destination stream.
///
/// Runs the full pipeline against the in-memory reference store: fetch,
/// decode, segment, partition, and chain-write. The production transport
/// is an external collaborator; this command verifies that an object
/// ships cleanly through the append protocol.
#[derive(Parser)]
pub struct ShipArgs {
    /// Path of the log object within the store
    path: String,

    #[clap(flatten)]
    store: StoreArgs,
    #[clap(flatten)]
    destination: DestinationArgs,
}

impl ShipArgs {
    pub async fn run(self, _ct: CancellationToken) -> Result<()> {
        let object_store = self.store.object_store_config()?.build().context(RetrievalSnafu)?;
        let config = self.destination.shipper_config()?;

        let payload = fetch_object(object_store.as_ref(), &Path::from(self.path.as_str()))
            .await
            .context(RetrievalSnafu)?;

        let log_store = Arc::new(InMemoryLogStore::new());
        let shipper = Shipper::new(log_store, config);

        let report = shipper.ship(payload).await.context(ShipmentSnafu)?;

        println!(
            "Successfully put {} records in {} batches",
            report.records, report.batches
        );

        Ok(())
    }
}
