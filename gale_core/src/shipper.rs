//! End-to-end shipment of one retrieved payload.

use std::sync::Arc;

use bytes::Bytes;
use gale_log_store::LogStore;
use tracing::{debug, info};

use crate::{
    chain::{ChainWriter, DeliveryReport},
    config::ShipperConfig,
    decode::decode_payload,
    error::Result,
    partition::BatchPartitioner,
    resolve::StreamResolver,
    segment::segment_lines,
};

/// Ships one raw payload to the configured destination.
///
/// One logical thread of control per shipment: the only state crossing
/// into the write sequence is the chain token resolved up front.
pub struct Shipper {
    store: Arc<dyn LogStore>,
    config: ShipperConfig,
}

impl Shipper {
    pub fn new(store: Arc<dyn LogStore>, config: ShipperConfig) -> Self {
        Self { store, config }
    }

    /// Decode, segment, partition, and deliver a payload.
    pub async fn ship(&self, payload: Bytes) -> Result<DeliveryReport> {
        let text = decode_payload(payload)?;

        let partitioner = BatchPartitioner::new(&self.config);
        let batches = partitioner.partition(segment_lines(&text));
        debug!(batches = batches.len(), "partitioned payload");

        let resolver = StreamResolver::new(self.store.clone());
        resolver
            .ensure_destination(&self.config.group_name, &self.config.stream_name)
            .await?;
        let chain_token = resolver
            .resolve_chain_position(&self.config.group_name, &self.config.stream_name)
            .await?;

        let writer = ChainWriter::new(self.store.clone(), &self.config);
        let report = writer.deliver(batches, chain_token).await?;

        info!(
            records = report.records,
            batches = report.batches,
            group = %self.config.group_name,
            stream = %self.config.stream_name,
            "shipment complete"
        );

        Ok(report)
    }
}
