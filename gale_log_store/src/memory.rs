//! In-memory reference implementation of the log store.
//!
//! Enforces the full append protocol: destination existence, chain token
//! matching, the record count and charged-size budgets, ascending
//! timestamps, and rejection of zero-record writes. Used by the dev
//! harness and by tests that need to observe exactly what reached the
//! store.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::{
    error::{LogStoreError, Result},
    name::{GroupName, StreamName},
    store::{GroupInfo, LogStore, StreamInfo},
    types::{
        ChainToken, LogRecord, MAX_BATCH_BYTES, MAX_BATCH_RECORDS, PutRecordsRequest,
        PutRecordsResponse,
    },
};

#[derive(Debug, Default)]
struct StreamState {
    last_chain_token: Option<ChainToken>,
    records: Vec<LogRecord>,
    writes: usize,
}

#[derive(Debug, Default)]
struct GroupState {
    streams: HashMap<StreamName, StreamState>,
}

/// In-memory log store.
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    groups: Mutex<HashMap<GroupName, GroupState>>,
    token_seq: AtomicU64,
    put_calls: AtomicU64,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_token(&self) -> ChainToken {
        let seq = self.token_seq.fetch_add(1, Ordering::Relaxed);
        ChainToken::new(format!("{:020}", seq + 1))
    }

    /// Total number of `put_records` calls the store has received,
    /// including rejected ones.
    pub fn put_call_count(&self) -> u64 {
        self.put_calls.load(Ordering::Relaxed)
    }

    /// Records currently stored in a stream, in write order.
    pub fn stream_records(&self, group: &GroupName, stream: &StreamName) -> Vec<LogRecord> {
        let groups = self.groups.lock().expect("log store lock poisoned");
        groups
            .get(group)
            .and_then(|g| g.streams.get(stream))
            .map(|s| s.records.clone())
            .unwrap_or_default()
    }

    /// Number of successful writes to a stream.
    pub fn stream_write_count(&self, group: &GroupName, stream: &StreamName) -> usize {
        let groups = self.groups.lock().expect("log store lock poisoned");
        groups
            .get(group)
            .and_then(|g| g.streams.get(stream))
            .map(|s| s.writes)
            .unwrap_or_default()
    }

    fn validate_request(request: &PutRecordsRequest, state: &StreamState) -> Result<()> {
        if request.records.is_empty() {
            return Err(LogStoreError::EmptyWrite);
        }

        if request.chain_token != state.last_chain_token {
            return Err(LogStoreError::InvalidChainToken {
                message: format!(
                    "the given chain token is invalid for stream '{}'",
                    request.stream_name
                ),
                expected: state.last_chain_token.as_ref().map(|t| t.to_string()),
            });
        }

        if request.records.len() > MAX_BATCH_RECORDS {
            return Err(LogStoreError::LimitExceeded {
                message: format!(
                    "{} records in one call, limit is {}",
                    request.records.len(),
                    MAX_BATCH_RECORDS
                ),
            });
        }

        // The documented contract is a strict bound: charged bytes < limit.
        let charged: usize = request.records.iter().map(|r| r.charged_size()).sum();
        if charged >= MAX_BATCH_BYTES {
            return Err(LogStoreError::LimitExceeded {
                message: format!("{charged} charged bytes in one call, limit is {MAX_BATCH_BYTES}"),
            });
        }

        let ordered = request
            .records
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp);
        if !ordered {
            return Err(LogStoreError::OutOfOrderRecords {
                message: "timestamps must be non-decreasing within a call".to_string(),
            });
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl LogStore for InMemoryLogStore {
    async fn describe_group(&self, group: &GroupName) -> Result<Option<GroupInfo>> {
        let groups = self.groups.lock().expect("log store lock poisoned");
        Ok(groups.get(group).map(|_| GroupInfo {
            name: group.clone(),
        }))
    }

    async fn create_group(&self, group: &GroupName) -> Result<()> {
        let mut groups = self.groups.lock().expect("log store lock poisoned");
        if groups.contains_key(group) {
            return Err(LogStoreError::AlreadyExists {
                name: group.to_string(),
            });
        }

        groups.insert(group.clone(), GroupState::default());
        Ok(())
    }

    async fn describe_stream(
        &self,
        group: &GroupName,
        stream: &StreamName,
    ) -> Result<Option<StreamInfo>> {
        let groups = self.groups.lock().expect("log store lock poisoned");
        let group_state = groups.get(group).ok_or_else(|| LogStoreError::GroupNotFound {
            name: group.to_string(),
        })?;

        Ok(group_state.streams.get(stream).map(|state| StreamInfo {
            name: stream.clone(),
            last_chain_token: state.last_chain_token.clone(),
        }))
    }

    async fn create_stream(&self, group: &GroupName, stream: &StreamName) -> Result<()> {
        let mut groups = self.groups.lock().expect("log store lock poisoned");
        let group_state = groups
            .get_mut(group)
            .ok_or_else(|| LogStoreError::GroupNotFound {
                name: group.to_string(),
            })?;

        if group_state.streams.contains_key(stream) {
            return Err(LogStoreError::AlreadyExists {
                name: stream.to_string(),
            });
        }

        group_state.streams.insert(stream.clone(), StreamState::default());
        Ok(())
    }

    async fn put_records(&self, request: PutRecordsRequest) -> Result<PutRecordsResponse> {
        self.put_calls.fetch_add(1, Ordering::Relaxed);

        let mut groups = self.groups.lock().expect("log store lock poisoned");
        let group_state =
            groups
                .get_mut(&request.group_name)
                .ok_or_else(|| LogStoreError::GroupNotFound {
                    name: request.group_name.to_string(),
                })?;
        let stream_state = group_state.streams.get_mut(&request.stream_name).ok_or_else(|| {
            LogStoreError::StreamNotFound {
                name: request.stream_name.to_string(),
            }
        })?;

        Self::validate_request(&request, stream_state)?;

        let next_chain_token = self.next_token();
        let records_accepted = request.records.len();

        stream_state.records.extend(request.records);
        stream_state.last_chain_token = Some(next_chain_token.clone());
        stream_state.writes += 1;

        Ok(PutRecordsResponse {
            next_chain_token,
            records_accepted,
        })
    }
}
