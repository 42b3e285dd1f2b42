use crate::name::{GroupName, StreamName};

/// Maximum charged size, in bytes, of a single append call.
pub const MAX_BATCH_BYTES: usize = 1_048_576;

/// Maximum number of records in a single append call.
pub const MAX_BATCH_RECORDS: usize = 10_000;

/// Fixed per-record charge the store adds on top of the message payload.
pub const RECORD_OVERHEAD_BYTES: usize = 26;

/// The byte cost the store assigns to a message for budgeting purposes.
pub fn charged_size(message: &str) -> usize {
    message.len() + RECORD_OVERHEAD_BYTES
}

/// Opaque handle returned by the store after a successful write.
///
/// The token authorizes the next write to the same stream, enforcing a
/// single linear writer per stream. Tokens are never reused: each write
/// must carry the token returned by the write before it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainToken(String);

impl ChainToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChainToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One log record on the wire: an opaque message and its event timestamp
/// in milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub message: String,
    pub timestamp: i64,
}

impl LogRecord {
    pub fn charged_size(&self) -> usize {
        charged_size(&self.message)
    }
}

/// A single append call.
///
/// Records must be ordered by ascending timestamp. The chain token is
/// omitted entirely, not sent as empty, for the first write to a virgin
/// stream.
#[derive(Debug, Clone)]
pub struct PutRecordsRequest {
    pub group_name: GroupName,
    pub stream_name: StreamName,
    pub records: Vec<LogRecord>,
    pub chain_token: Option<ChainToken>,
}

/// Outcome of a successful append call.
#[derive(Debug, Clone)]
pub struct PutRecordsResponse {
    /// The token authorizing the next write to this stream.
    pub next_chain_token: ChainToken,
    /// Number of records accepted by the store.
    pub records_accepted: usize,
}
