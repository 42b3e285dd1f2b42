//! Destination provisioning and chain position recovery.
//!
//! Before the chain writer's first call, the destination group and stream
//! must exist and the stream's current chain position must be known. Both
//! operations are simple describe-then-create flows against the store,
//! idempotent across invocations.

use std::sync::Arc;

use gale_log_store::{ChainToken, GroupName, LogStore, LogStoreError, StreamName};
use tracing::info;

use crate::error::{Result, ShipperError};

pub struct StreamResolver {
    store: Arc<dyn LogStore>,
}

impl StreamResolver {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Make sure the destination group and stream exist, creating either
    /// when absent. A concurrent creator racing us is tolerated.
    pub async fn ensure_destination(&self, group: &GroupName, stream: &StreamName) -> Result<()> {
        let group_info = self
            .store
            .describe_group(group)
            .await
            .map_err(|source| ShipperError::Provision {
                operation: "describe_group",
                source,
            })?;

        if group_info.is_none() {
            match self.store.create_group(group).await {
                Ok(()) => info!(group = %group, "created log group"),
                Err(LogStoreError::AlreadyExists { .. }) => {}
                Err(source) => {
                    return Err(ShipperError::Provision {
                        operation: "create_group",
                        source,
                    });
                }
            }
        }

        let stream_info = self
            .store
            .describe_stream(group, stream)
            .await
            .map_err(|source| ShipperError::Provision {
                operation: "describe_stream",
                source,
            })?;

        if stream_info.is_none() {
            match self.store.create_stream(group, stream).await {
                Ok(()) => info!(group = %group, stream = %stream, "created log stream"),
                Err(LogStoreError::AlreadyExists { .. }) => {}
                Err(source) => {
                    return Err(ShipperError::Provision {
                        operation: "create_stream",
                        source,
                    });
                }
            }
        }

        Ok(())
    }

    /// The chain token currently in effect for the stream; `None` means
    /// the next write is the first on this stream.
    ///
    /// Read once per invocation, before the chain writer begins.
    pub async fn resolve_chain_position(
        &self,
        group: &GroupName,
        stream: &StreamName,
    ) -> Result<Option<ChainToken>> {
        let stream_info = self
            .store
            .describe_stream(group, stream)
            .await
            .map_err(|source| ShipperError::ResolveChainPosition { source })?;

        match stream_info {
            Some(info) => Ok(info.last_chain_token),
            None => Err(ShipperError::ResolveChainPosition {
                source: LogStoreError::StreamNotFound {
                    name: stream.to_string(),
                },
            }),
        }
    }
}
