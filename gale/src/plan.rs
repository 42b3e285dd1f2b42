use clap::Parser;
use gale_core::{BatchPartitioner, decode::decode_payload, segment::segment_lines};
use gale_object_store::fetch_object;
use object_store::path::Path;
use snafu::ResultExt;
use tokio_util::sync::CancellationToken;

use crate::{
    error::{Result, RetrievalSnafu, ShipmentSnafu},
    helpers::{DestinationArgs, StoreArgs},
};

/// Show how a log object would be partitioned, without writing.
#[derive(Parser)]
pub struct PlanArgs {
    /// Path of the log object within the store
    path: String,

    #[clap(flatten)]
    store: StoreArgs,
    #[clap(flatten)]
    destination: DestinationArgs,
}

impl PlanArgs {
    pub async fn run(self, _ct: CancellationToken) -> Result<()> {
        let object_store = self.store.object_store_config()?.build().context(RetrievalSnafu)?;
        let config = self.destination.shipper_config()?;

        let payload = fetch_object(object_store.as_ref(), &Path::from(self.path.as_str()))
            .await
            .context(RetrievalSnafu)?;

        let text = decode_payload(payload).context(ShipmentSnafu)?;
        let batches = BatchPartitioner::new(&config).partition(segment_lines(&text));

        let mut records = 0;
        for (index, batch) in batches.iter().enumerate() {
            if batch.is_empty() {
                continue;
            }

            records += batch.len();
            println!(
                "batch {index}: {} records, {} charged bytes",
                batch.len(),
                batch.charged_size
            );
        }

        if records == 0 {
            println!("empty object: no write would be issued");
        } else {
            println!(
                "{} records in {} batches for {}/{}",
                records,
                batches.len(),
                config.group_name,
                config.stream_name
            );
        }

        Ok(())
    }
}
