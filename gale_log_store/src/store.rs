use crate::{
    error::Result,
    name::{GroupName, StreamName},
    types::{ChainToken, PutRecordsRequest, PutRecordsResponse},
};

/// Metadata describing an existing log group.
#[derive(Debug, Clone)]
pub struct GroupInfo {
    pub name: GroupName,
}

/// Metadata describing an existing log stream.
#[derive(Debug, Clone)]
pub struct StreamInfo {
    pub name: StreamName,
    /// The token in effect for the next write, or `None` if nothing has
    /// been written to the stream yet.
    pub last_chain_token: Option<ChainToken>,
}

/// The append-only log store.
///
/// `put_records` enforces a strict append protocol: each write to a stream
/// must carry the chain token returned by the previous write (or none for
/// the first write), records must be ordered by ascending timestamp, and
/// the batch must respect the count and charged-size limits documented in
/// this crate.
#[async_trait::async_trait]
pub trait LogStore: Send + Sync {
    /// Look up a log group, returning `None` if it does not exist.
    async fn describe_group(&self, group: &GroupName) -> Result<Option<GroupInfo>>;

    /// Create a log group.
    async fn create_group(&self, group: &GroupName) -> Result<()>;

    /// Look up a log stream within a group, returning `None` if it does
    /// not exist.
    async fn describe_stream(
        &self,
        group: &GroupName,
        stream: &StreamName,
    ) -> Result<Option<StreamInfo>>;

    /// Create a log stream within an existing group.
    async fn create_stream(&self, group: &GroupName, stream: &StreamName) -> Result<()>;

    /// Append a batch of records to a stream.
    async fn put_records(&self, request: PutRecordsRequest) -> Result<PutRecordsResponse>;
}
