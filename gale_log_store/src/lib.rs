//! Interface to the append-only, chain-token-sequenced log store.
//!
//! The store accepts batches of timestamped records, one write at a time per
//! stream. Every successful write returns a chain token that must accompany
//! the next write to the same stream; writes carrying a stale token are
//! rejected. This crate defines the type-safe destination names, the wire
//! types of the append call, the store-imposed limits, and the `LogStore`
//! trait, together with an in-memory reference implementation that enforces
//! the full append protocol.

mod error;
mod memory;
mod name;
mod store;
mod types;

pub use self::{
    error::{LogStoreError, Result},
    memory::InMemoryLogStore,
    name::{GroupName, NameError, StreamName},
    store::{GroupInfo, LogStore, StreamInfo},
    types::{
        ChainToken, LogRecord, MAX_BATCH_BYTES, MAX_BATCH_RECORDS, PutRecordsRequest,
        PutRecordsResponse, RECORD_OVERHEAD_BYTES, charged_size,
    },
};
