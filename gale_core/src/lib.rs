//! The batching-and-sequencing engine.
//!
//! Takes a raw log payload retrieved from an object store and turns it into
//! a sequence of correctly-sized, correctly-ordered, token-chained write
//! calls against the log store: decode (gunzip + UTF-8), segment into
//! lines, partition into budget-bounded batches, then deliver the batches
//! strictly one at a time, each write carrying the chain token returned by
//! the write before it.

pub mod chain;
pub mod config;
pub mod decode;
pub mod error;
pub mod partition;
pub mod record;
pub mod resolve;
pub mod segment;
pub mod shipper;

pub use chain::{ChainWriter, DeliveryReport};
pub use config::ShipperConfig;
pub use error::{Result, ShipperError};
pub use partition::{Batch, BatchPartitioner};
pub use resolve::StreamResolver;
pub use shipper::Shipper;
