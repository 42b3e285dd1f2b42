use gale_log_store::LogStoreError;
use snafu::Snafu;

/// Shipment error types.
///
/// Decode failures are fatal before anything is written. A write failure
/// is terminal for the remaining batches of the invocation; batches
/// already written stay written (at-least-once, no rollback).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ShipperError {
    /// The payload looked gzip-compressed but did not decompress.
    #[snafu(display("failed to decompress payload"))]
    Decompress { source: std::io::Error },
    /// The decoded payload is not valid UTF-8.
    #[snafu(display("payload is not valid UTF-8"))]
    InvalidEncoding { source: std::string::FromUtf8Error },
    /// Provisioning the destination group or stream failed.
    #[snafu(display("failed destination provisioning operation {operation}"))]
    Provision {
        operation: &'static str,
        source: LogStoreError,
    },
    /// Recovering the stream's chain position failed.
    #[snafu(display("failed to resolve chain position"))]
    ResolveChainPosition { source: LogStoreError },
    /// A write was rejected by the store; batches after it were not sent.
    #[snafu(display("failed to write batch {batch_index}"))]
    WriteBatch {
        batch_index: usize,
        source: LogStoreError,
    },
}

pub type Result<T, E = ShipperError> = std::result::Result<T, E>;
