use std::sync::Arc;

use bytes::Bytes;
use common::{gzip, test_config};
use gale_core::{DeliveryReport, Shipper};
use gale_log_store::{InMemoryLogStore, LogStore};

mod common;

#[tokio::test]
async fn test_small_payload_is_one_write() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let payload = Bytes::from_static(
        b"web 2024-03-01T10:00:01Z GET /a\n\
          web 2024-03-01T10:00:02Z GET /b\n\
          web 2024-03-01T10:00:03Z GET /c\n",
    );

    // The store enforces the token chain, so a successful first write
    // also proves the writer omitted the token on a virgin stream.
    let report = shipper.ship(payload).await.expect("ship");
    assert_eq!(
        report,
        DeliveryReport {
            records: 3,
            batches: 1
        }
    );

    assert_eq!(store.put_call_count(), 1);
    assert_eq!(
        store.stream_write_count(&config.group_name, &config.stream_name),
        1
    );

    let records = store.stream_records(&config.group_name, &config.stream_name);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].message, "web 2024-03-01T10:00:01Z GET /a");
}

#[tokio::test]
async fn test_multiple_batches_thread_the_token() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config().with_count_budget(2);
    let shipper = Shipper::new(store.clone(), config.clone());

    let lines: String = (0..5)
        .map(|i| format!("web 2024-03-01T10:00:0{i}Z GET /page\n"))
        .collect();

    let report = shipper.ship(Bytes::from(lines)).await.expect("ship");
    assert_eq!(
        report,
        DeliveryReport {
            records: 5,
            batches: 3
        }
    );

    // Each write must have carried the token from the one before it, or
    // the store would have rejected it.
    assert_eq!(
        store.stream_write_count(&config.group_name, &config.stream_name),
        3
    );
    assert_eq!(
        store
            .stream_records(&config.group_name, &config.stream_name)
            .len(),
        5
    );
}

#[tokio::test]
async fn test_records_sorted_by_timestamp_before_submission() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let payload = Bytes::from_static(
        b"web 2024-03-01T10:00:03Z third\n\
          web 2024-03-01T10:00:01Z first\n\
          web 2024-03-01T10:00:02Z second\n",
    );

    shipper.ship(payload).await.expect("ship");

    let records = store.stream_records(&config.group_name, &config.stream_name);
    let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "web 2024-03-01T10:00:01Z first",
            "web 2024-03-01T10:00:02Z second",
            "web 2024-03-01T10:00:03Z third",
        ]
    );
}

#[tokio::test]
async fn test_equal_timestamps_keep_input_order() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let payload = Bytes::from_static(
        b"web 2024-03-01T10:00:01Z tie-a\n\
          web 2024-03-01T10:00:01Z tie-b\n\
          web 2024-03-01T10:00:01Z tie-c\n",
    );

    shipper.ship(payload).await.expect("ship");

    let records = store.stream_records(&config.group_name, &config.stream_name);
    let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "web 2024-03-01T10:00:01Z tie-a",
            "web 2024-03-01T10:00:01Z tie-b",
            "web 2024-03-01T10:00:01Z tie-c",
        ]
    );
}

#[tokio::test]
async fn test_unparseable_timestamps_sort_first_in_input_order() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let payload = Bytes::from_static(
        b"web 2024-03-01T10:00:01Z timestamped\n\
          garbled-line-one\n\
          garbled-line-two\n",
    );

    shipper.ship(payload).await.expect("ship");

    let records = store.stream_records(&config.group_name, &config.stream_name);
    let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "garbled-line-one",
            "garbled-line-two",
            "web 2024-03-01T10:00:01Z timestamped",
        ]
    );
}

#[tokio::test]
async fn test_empty_payload_skips_the_store_call() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let report = shipper.ship(Bytes::new()).await.expect("ship");
    assert_eq!(
        report,
        DeliveryReport {
            records: 0,
            batches: 0
        }
    );

    // The destination is still provisioned, but no append was attempted.
    assert_eq!(store.put_call_count(), 0);
    assert!(
        store
            .describe_stream(&config.group_name, &config.stream_name)
            .await
            .expect("describe_stream")
            .is_some()
    );
}

#[tokio::test]
async fn test_gzip_payload() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let payload = gzip("web 2024-03-01T10:00:01Z compressed-a\nweb 2024-03-01T10:00:02Z compressed-b\n");

    let report = shipper.ship(payload).await.expect("ship");
    assert_eq!(report.records, 2);

    let records = store.stream_records(&config.group_name, &config.stream_name);
    assert_eq!(records[0].message, "web 2024-03-01T10:00:01Z compressed-a");
}

#[tokio::test]
async fn test_second_shipment_resumes_the_chain() {
    let store = Arc::new(InMemoryLogStore::new());
    let config = test_config();
    let shipper = Shipper::new(store.clone(), config.clone());

    let first = Bytes::from_static(b"web 2024-03-01T10:00:01Z first-run\n");
    let second = Bytes::from_static(b"web 2024-03-01T10:00:02Z second-run\n");

    shipper.ship(first).await.expect("first shipment");

    // The next invocation must recover the chain position left by the
    // previous one; a stale or missing token would be rejected.
    shipper.ship(second).await.expect("second shipment");

    assert_eq!(
        store.stream_write_count(&config.group_name, &config.stream_name),
        2
    );
    assert_eq!(
        store
            .stream_records(&config.group_name, &config.stream_name)
            .len(),
        2
    );
}
