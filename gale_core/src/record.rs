//! Record construction: timestamp extraction from raw lines.

use chrono::DateTime;
use gale_log_store::LogRecord;

/// Timestamp assigned to records whose timestamp token is missing or
/// unparseable. Such records sort first within their batch; the stable
/// sort keeps their relative input order.
pub const FALLBACK_TIMESTAMP: i64 = 0;

/// Build a record from one input line.
///
/// The event timestamp is the second whitespace-delimited token of the
/// line, parsed as RFC 3339 into milliseconds since the Unix epoch. Parse
/// failure never fails the pipeline; the record falls back to
/// [`FALLBACK_TIMESTAMP`].
pub fn parse_record(line: &str) -> LogRecord {
    LogRecord {
        message: line.to_string(),
        timestamp: extract_timestamp(line),
    }
}

fn extract_timestamp(line: &str) -> i64 {
    line.split_whitespace()
        .nth(1)
        .and_then(|token| DateTime::parse_from_rfc3339(token).ok())
        .map(|ts| ts.timestamp_millis())
        .unwrap_or(FALLBACK_TIMESTAMP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_second_token() {
        let record = parse_record("http 2024-03-01T10:15:30.000Z 10.0.0.1 GET /index.html");
        assert_eq!(record.timestamp, 1_709_288_130_000);
        assert_eq!(
            record.message,
            "http 2024-03-01T10:15:30.000Z 10.0.0.1 GET /index.html"
        );
    }

    #[test]
    fn test_timezone_offset() {
        let record = parse_record("elb 2024-03-01T12:15:30+02:00 backend");
        assert_eq!(record.timestamp, 1_709_288_130_000);
    }

    #[test]
    fn test_unparseable_token_falls_back() {
        let record = parse_record("elb not-a-timestamp backend");
        assert_eq!(record.timestamp, FALLBACK_TIMESTAMP);
    }

    #[test]
    fn test_missing_token_falls_back() {
        assert_eq!(parse_record("single-token").timestamp, FALLBACK_TIMESTAMP);
        assert_eq!(parse_record("").timestamp, FALLBACK_TIMESTAMP);
    }
}
