use gale_log_store::{
    GroupName, MAX_BATCH_BYTES, MAX_BATCH_RECORDS, RECORD_OVERHEAD_BYTES, StreamName,
};

/// Shipment configuration.
///
/// The destination names the fixed group and stream every invocation
/// writes to. The budgets default to the store-documented limits and are
/// configurable mainly so tests can exercise boundary behavior with small
/// inputs.
#[derive(Debug, Clone)]
pub struct ShipperConfig {
    /// Destination log group.
    pub group_name: GroupName,
    /// Destination log stream.
    pub stream_name: StreamName,
    /// Maximum charged bytes per batch.
    pub byte_budget: usize,
    /// Maximum records per batch.
    pub count_budget: usize,
    /// Per-record charge added on top of the line length.
    pub record_overhead: usize,
}

impl ShipperConfig {
    /// Configuration for a destination with the store-documented budgets.
    pub fn for_destination(group_name: GroupName, stream_name: StreamName) -> Self {
        Self {
            group_name,
            stream_name,
            byte_budget: MAX_BATCH_BYTES,
            count_budget: MAX_BATCH_RECORDS,
            record_overhead: RECORD_OVERHEAD_BYTES,
        }
    }

    pub fn with_byte_budget(mut self, byte_budget: usize) -> Self {
        self.byte_budget = byte_budget;
        self
    }

    pub fn with_count_budget(mut self, count_budget: usize) -> Self {
        self.count_budget = count_budget;
        self
    }

    pub fn with_record_overhead(mut self, record_overhead: usize) -> Self {
        self.record_overhead = record_overhead;
        self
    }
}
