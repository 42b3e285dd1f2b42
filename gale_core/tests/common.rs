use std::{
    io::Read,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use bytes::Bytes;
use gale_core::ShipperConfig;
use gale_log_store::{
    GroupName, InMemoryLogStore, LogStore, LogStoreError, PutRecordsRequest, PutRecordsResponse,
    Result, StreamInfo, StreamName,
};

pub fn test_config() -> ShipperConfig {
    ShipperConfig::for_destination(
        GroupName::new_unchecked("test-group"),
        StreamName::new_unchecked("test-stream"),
    )
}

pub fn gzip(data: &str) -> Bytes {
    let mut encoder = flate2::read::GzEncoder::new(data.as_bytes(), flate2::Compression::default());
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).expect("gzip encode");
    Bytes::from(compressed)
}

/// Store wrapper that lets the first `fail_after` writes through and
/// rejects the rest, for exercising mid-chain abort behavior.
pub struct FailingLogStore {
    pub inner: Arc<InMemoryLogStore>,
    fail_after: usize,
    put_attempts: AtomicUsize,
}

impl FailingLogStore {
    pub fn new(fail_after: usize) -> Self {
        Self {
            inner: Arc::new(InMemoryLogStore::new()),
            fail_after,
            put_attempts: AtomicUsize::new(0),
        }
    }

    pub fn put_attempts(&self) -> usize {
        self.put_attempts.load(Ordering::Relaxed)
    }
}

#[async_trait::async_trait]
impl LogStore for FailingLogStore {
    async fn describe_group(
        &self,
        group: &GroupName,
    ) -> Result<Option<gale_log_store::GroupInfo>> {
        self.inner.describe_group(group).await
    }

    async fn create_group(&self, group: &GroupName) -> Result<()> {
        self.inner.create_group(group).await
    }

    async fn describe_stream(
        &self,
        group: &GroupName,
        stream: &StreamName,
    ) -> Result<Option<StreamInfo>> {
        self.inner.describe_stream(group, stream).await
    }

    async fn create_stream(&self, group: &GroupName, stream: &StreamName) -> Result<()> {
        self.inner.create_stream(group, stream).await
    }

    async fn put_records(&self, request: PutRecordsRequest) -> Result<PutRecordsResponse> {
        let attempt = self.put_attempts.fetch_add(1, Ordering::Relaxed);
        if attempt >= self.fail_after {
            return Err(LogStoreError::Throttled {
                message: "rate exceeded".to_string(),
            });
        }

        self.inner.put_records(request).await
    }
}
