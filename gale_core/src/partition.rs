//! Batch partitioning.
//!
//! Groups the line sequence into batches honoring three limits at once:
//! the charged byte budget, the record count budget, and the per-record
//! overhead charge.

use gale_log_store::LogRecord;

use crate::{config::ShipperConfig, record::parse_record};

/// An ordered group of records destined for one write call.
///
/// Sealed batches respect both budgets; a batch is empty only when the
/// whole input was empty.
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<LogRecord>,
    /// Sum of each record's charged size (line length + overhead).
    pub charged_size: usize,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Partitions the line sequence into budget-bounded batches.
pub struct BatchPartitioner {
    byte_budget: usize,
    count_budget: usize,
    record_overhead: usize,
}

impl BatchPartitioner {
    pub fn new(config: &ShipperConfig) -> Self {
        Self {
            byte_budget: config.byte_budget,
            count_budget: config.count_budget,
            record_overhead: config.record_overhead,
        }
    }

    /// Consume the line sequence and produce the ordered batch sequence.
    ///
    /// The budget check runs before admission, against the accumulator
    /// state prior to the line: when admitting the line would reach or
    /// exceed the byte budget, or the running batch is already at the
    /// count budget, the running batch is sealed and the accumulator
    /// restarts at exactly this line's charged size. A single record whose
    /// charged size alone exceeds the byte budget is therefore still
    /// admitted into its own batch, never rejected here. The final running
    /// batch is always sealed, so an empty input yields exactly one empty
    /// batch.
    pub fn partition<'a>(&self, lines: impl Iterator<Item = &'a str>) -> Vec<Batch> {
        let mut batches = Vec::new();
        let mut batch = Batch::default();

        for line in lines {
            let record = parse_record(line);
            let charged = record.message.len() + self.record_overhead;

            // Sealing an empty running batch would emit a spurious empty
            // batch in front of an oversized record; only input-empty
            // batches may be empty.
            if !batch.is_empty()
                && (batch.charged_size + charged >= self.byte_budget
                    || batch.len() >= self.count_budget)
            {
                batches.push(std::mem::take(&mut batch));
            }

            batch.charged_size += charged;
            batch.records.push(record);
        }

        batches.push(batch);
        batches
    }
}

#[cfg(test)]
mod tests {
    use gale_log_store::{GroupName, StreamName};

    use super::*;
    use crate::config::ShipperConfig;

    fn config() -> ShipperConfig {
        ShipperConfig::for_destination(
            GroupName::new_unchecked("test-group"),
            StreamName::new_unchecked("test-stream"),
        )
    }

    fn messages(batches: &[Batch]) -> Vec<&str> {
        batches
            .iter()
            .flat_map(|b| b.records.iter().map(|r| r.message.as_str()))
            .collect()
    }

    #[test]
    fn test_small_input_is_one_batch() {
        let partitioner = BatchPartitioner::new(&config());
        let batches = partitioner.partition(["one", "two", "three"].into_iter());

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 3);
        assert_eq!(
            batches[0].charged_size,
            3 + 3 + 5 + 3 * config().record_overhead
        );
    }

    #[test]
    fn test_input_sequence_preserved_across_batches() {
        let partitioner = BatchPartitioner::new(&config().with_count_budget(2));
        let lines = ["a", "b", "c", "d", "e"];
        let batches = partitioner.partition(lines.into_iter());

        assert_eq!(batches.len(), 3);
        assert_eq!(messages(&batches), lines);
    }

    #[test]
    fn test_count_budget_boundary() {
        let partitioner = BatchPartitioner::new(&config());
        let lines: Vec<String> = (0..10_001).map(|i| format!("line {i}")).collect();
        let batches = partitioner.partition(lines.iter().map(|l| l.as_str()));

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 10_000);
        assert_eq!(batches[1].len(), 1);
        assert_eq!(batches[1].records[0].message, "line 10000");
    }

    #[test]
    fn test_exact_count_budget_is_one_batch() {
        let partitioner = BatchPartitioner::new(&config());
        let lines: Vec<String> = (0..10_000).map(|i| format!("line {i}")).collect();
        let batches = partitioner.partition(lines.iter().map(|l| l.as_str()));

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 10_000);
    }

    #[test]
    fn test_byte_budget_reseeds_accumulator() {
        // Each line charges 74 + 26 = 100; budget of 250 seals before the
        // third line (200 + 100 >= 250).
        let partitioner = BatchPartitioner::new(&config().with_byte_budget(250));
        let lines: Vec<String> = (0..4).map(|i| format!("{i:074}")).collect();
        let batches = partitioner.partition(lines.iter().map(|l| l.as_str()));

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[0].charged_size, 200);
        assert_eq!(batches[1].len(), 2);
        // The accumulator restarts at exactly the overflowing line's charge.
        assert_eq!(batches[1].charged_size, 200);
    }

    #[test]
    fn test_seal_at_exact_byte_budget() {
        // 100 + 100 == budget: the check is "to or past", so the second
        // line starts a new batch.
        let partitioner = BatchPartitioner::new(&config().with_byte_budget(200));
        let lines: Vec<String> = (0..2).map(|i| format!("{i:074}")).collect();
        let batches = partitioner.partition(lines.iter().map(|l| l.as_str()));

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[1].len(), 1);
    }

    #[test]
    fn test_oversized_line_gets_singleton_batch() {
        let partitioner = BatchPartitioner::new(&config().with_byte_budget(100));
        let oversized = "x".repeat(500);
        let batches = partitioner.partition([oversized.as_str(), "small"].into_iter());

        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].len(), 1);
        assert_eq!(batches[0].charged_size, 526);
        assert_eq!(batches[1].records[0].message, "small");
    }

    #[test]
    fn test_oversized_first_line_emits_no_empty_batch() {
        let partitioner = BatchPartitioner::new(&config().with_byte_budget(100));
        let oversized = "x".repeat(500);
        let batches = partitioner.partition([oversized.as_str()].into_iter());

        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 1);
    }

    #[test]
    fn test_empty_input_yields_one_empty_batch() {
        let partitioner = BatchPartitioner::new(&config());
        let batches = partitioner.partition(std::iter::empty());

        assert_eq!(batches.len(), 1);
        assert!(batches[0].is_empty());
        assert_eq!(batches[0].charged_size, 0);
    }
}
