//! The chain writer.
//!
//! Issues one write per batch, strictly sequentially: no write begins
//! before the previous write's outcome is known, because the store
//! enforces a single linear chain token per stream. The token returned by
//! each write becomes the token for the next one.

use std::sync::Arc;

use gale_log_store::{ChainToken, GroupName, LogStore, PutRecordsRequest, StreamName};
use snafu::ResultExt;
use tracing::debug;

use crate::{
    config::ShipperConfig,
    error::{Result, WriteBatchSnafu},
    partition::Batch,
};

/// Totals for a completed shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReport {
    pub records: usize,
    pub batches: usize,
}

/// Writes the ordered batch sequence to the store, threading the chain
/// token from write to write.
pub struct ChainWriter {
    store: Arc<dyn LogStore>,
    group_name: GroupName,
    stream_name: StreamName,
}

impl ChainWriter {
    pub fn new(store: Arc<dyn LogStore>, config: &ShipperConfig) -> Self {
        Self {
            store,
            group_name: config.group_name.clone(),
            stream_name: config.stream_name.clone(),
        }
    }

    /// Deliver the batch sequence, starting from the externally resolved
    /// chain position (`None` on a virgin stream).
    ///
    /// Records are stable-sorted by timestamp before submission, so equal
    /// timestamps keep their partition order. Empty batches are skipped
    /// without a store call; the store rejects zero-record appends. The
    /// first write failure aborts the remaining sequence: batches already
    /// written stay written, and the error carries the failing batch's
    /// index.
    pub async fn deliver(
        &self,
        batches: Vec<Batch>,
        initial_token: Option<ChainToken>,
    ) -> Result<DeliveryReport> {
        let mut chain_token = initial_token;
        let mut records = 0;
        let mut delivered = 0;

        for (batch_index, mut batch) in batches.into_iter().enumerate() {
            if batch.is_empty() {
                continue;
            }

            batch.records.sort_by_key(|record| record.timestamp);

            let record_count = batch.len();
            let response = self
                .store
                .put_records(PutRecordsRequest {
                    group_name: self.group_name.clone(),
                    stream_name: self.stream_name.clone(),
                    records: batch.records,
                    chain_token: chain_token.take(),
                })
                .await
                .context(WriteBatchSnafu { batch_index })?;

            debug!(
                batch_index,
                records = record_count,
                charged_size = batch.charged_size,
                "batch written"
            );

            chain_token = Some(response.next_chain_token);
            records += response.records_accepted;
            delivered += 1;
        }

        Ok(DeliveryReport {
            records,
            batches: delivered,
        })
    }
}
