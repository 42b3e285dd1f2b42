use snafu::Snafu;

/// Log store error types.
///
/// The message associated with an error carries the store-reported
/// diagnostic so callers can surface it without depending on any
/// transport-specific error shape.
#[derive(Debug, Clone, Snafu)]
#[snafu(visibility(pub))]
pub enum LogStoreError {
    /// The destination group does not exist.
    #[snafu(display("log group '{name}' not found"))]
    GroupNotFound { name: String },
    /// The destination stream does not exist.
    #[snafu(display("log stream '{name}' not found"))]
    StreamNotFound { name: String },
    /// A group or stream with this name already exists.
    #[snafu(display("'{name}' already exists"))]
    AlreadyExists { name: String },
    /// The supplied chain token does not match the stream's current position.
    ///
    /// Carries the token the store expected, when it reports one.
    #[snafu(display("invalid chain token: {message}"))]
    InvalidChainToken {
        message: String,
        expected: Option<String>,
    },
    /// The write exceeds the record count or charged byte budget.
    #[snafu(display("write limit exceeded: {message}"))]
    LimitExceeded { message: String },
    /// Records in the write are not ordered by ascending timestamp.
    #[snafu(display("records out of order: {message}"))]
    OutOfOrderRecords { message: String },
    /// The store rejects append calls carrying zero records.
    #[snafu(display("append call carries no records"))]
    EmptyWrite,
    /// The store is shedding load.
    #[snafu(display("throttled by the store: {message}"))]
    Throttled { message: String },
    /// Transport-level failure talking to the store.
    #[snafu(display("transport error: {message}"))]
    Transport { message: String },
}

pub type Result<T, E = LogStoreError> = std::result::Result<T, E>;
