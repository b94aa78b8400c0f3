//! The performance harness.
//!
//! Populates a collection with generated records and times the bulk paths
//! of the collection: insertion, column search, predicate search and
//! deletion by id. The timings are observations only.

use std::fmt::Display;
use std::time::{Duration, Instant};

use log::info;

use crate::cli::config::BenchConfig;
use crate::persistence::{Column, Record, RecordCollection};

#[derive(Debug)]
pub struct BenchReport {
    pub inserted: usize,
    pub insert_time: Duration,
    pub column_matches: usize,
    pub column_time: Duration,
    pub predicate_matches: usize,
    pub predicate_time: Duration,
    pub deleted: usize,
    pub delete_time: Duration,
    pub remaining: usize,
}

impl Display for BenchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Inserted {} records in {:.6}s",
            self.inserted,
            self.insert_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "find_by_column(value) found {} in {:.6}s",
            self.column_matches,
            self.column_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "find_indices(predicate) found {} in {:.6}s",
            self.predicate_matches,
            self.predicate_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Deleted {} records in {:.6}s",
            self.deleted,
            self.delete_time.as_secs_f64()
        )?;
        write!(f, "Remaining records: {}", self.remaining)
    }
}

pub fn bench_record(id: u32, modulus: u64) -> Record {
    Record::new(
        id,
        id as u64 % modulus,
        format!("Name{}", id),
        format!("Desc{}", id),
    )
}

pub fn run(config: &BenchConfig) -> Result<BenchReport, String> {
    //! Run every phase of the harness once against a fresh collection.

    config.validate()?;

    let mut collection = RecordCollection::with_capacity(config.records as usize);

    info!("populating {} records", config.records);
    let start = Instant::now();
    let mut inserted = 0;
    for id in 0..config.records {
        if collection.add(bench_record(id, config.modulus)) {
            inserted += 1;
        }
    }
    let insert_time = start.elapsed();

    let probe = config.probe;
    let start = Instant::now();
    let column_matches = collection
        .find_by_column(Column::Value, &probe.to_string())
        .map_err(|error| error.to_string())?
        .len();
    let column_time = start.elapsed();

    let start = Instant::now();
    let predicate_matches = collection.find_indices(|record| record.value == probe).len();
    let predicate_time = start.elapsed();

    info!("deleting up to {} records", config.deletes);
    let start = Instant::now();
    let mut deleted = 0;
    for id in 0..config.deletes.min(config.records) {
        if collection.delete_by_id(id) {
            deleted += 1;
        }
    }
    let delete_time = start.elapsed();

    Ok(BenchReport {
        inserted,
        insert_time,
        column_matches,
        column_time,
        predicate_matches,
        predicate_time,
        deleted,
        delete_time,
        remaining: collection.size(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bench_counts_match_generated_data() {
        let config = BenchConfig {
            records: 1_000,
            deletes: 100,
            modulus: 10,
            probe: 3,
        };

        let report = run(&config).unwrap();
        assert_eq!(report.inserted, 1_000);
        assert_eq!(report.column_matches, 100);
        assert_eq!(report.predicate_matches, 100);
        assert_eq!(report.deleted, 100);
        assert_eq!(report.remaining, 900);
    }

    #[test]
    fn bench_deletes_never_exceed_records() {
        let config = BenchConfig {
            records: 5,
            deletes: 50,
            modulus: 2,
            probe: 1,
        };

        let report = run(&config).unwrap();
        assert_eq!(report.deleted, 5);
        assert_eq!(report.remaining, 0);
    }

    #[test]
    fn bench_rejects_zero_modulus() {
        let config = BenchConfig {
            records: 3,
            deletes: 0,
            modulus: 0,
            probe: 0,
        };

        let error = run(&config).unwrap_err();
        assert!(error.contains("at least 1"));
    }
}
