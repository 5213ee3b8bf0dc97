//! Evaluation of indexed search against the exhaustive baseline.
//!
//! Runs the same held-out queries through both [`LSHIndex::nearest`]
//! and [`brute_force::nearest`], recording per-call wall-clock time
//! and whether the approximate answer matched the exact one. Nothing
//! here prints; summaries are plain values for the caller's reporting
//! layer to format.
//!
//! [`LSHIndex::nearest`]: crate::hash::LSHIndex::nearest
//! [`brute_force::nearest`]: crate::brute_force::nearest

pub mod datasets;

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::brute_force;
use crate::error::Result;
use crate::hash::{LSHIndex, Neighbor};

/// Outcome of one query under both search strategies.
#[derive(Debug, Clone)]
pub struct QueryComparison {
    /// Result of the indexed search; `None` if no bucket matched.
    pub approx: Option<Neighbor>,
    /// Result of the exhaustive scan over the indexed subset.
    pub exact: Option<Neighbor>,
    /// Wall-clock time of the indexed search.
    pub approx_time: Duration,
    /// Wall-clock time of the exhaustive scan.
    pub exact_time: Duration,
}

impl QueryComparison {
    /// Whether the indexed search matched the baseline.
    ///
    /// Compared on distance, not index, so distinct co-minimal
    /// neighbors still count as agreement.
    pub fn agrees(&self) -> bool {
        match (self.approx, self.exact) {
            (Some(a), Some(e)) => a.distance == e.distance,
            (None, None) => true,
            _ => false,
        }
    }
}

/// Run every query through both strategies.
///
/// The exhaustive scan uses the index's own stored subset as its
/// reference set, so both searches answer the same question.
pub fn compare(index: &LSHIndex, queries: &[Vec<u16>]) -> Result<Vec<QueryComparison>> {
    queries
        .iter()
        .map(|query| {
            let start = Instant::now();
            let approx = index.nearest(query)?;
            let approx_time = start.elapsed();

            let start = Instant::now();
            let exact = brute_force::nearest(query, index.indexed())?;
            let exact_time = start.elapsed();

            Ok(QueryComparison {
                approx,
                exact,
                approx_time,
                exact_time,
            })
        })
        .collect()
}

/// Latency statistics over a batch of queries.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatencySummary {
    pub mean_us: f64,
    pub p50_us: u64,
    pub p99_us: u64,
    /// Queries per second, from summed per-query time.
    pub qps: f64,
}

impl LatencySummary {
    fn from_durations(durations: impl Iterator<Item = Duration>) -> Self {
        let mut micros: Vec<u64> = durations.map(|d| d.as_micros() as u64).collect();
        if micros.is_empty() {
            return Self {
                mean_us: 0.0,
                p50_us: 0,
                p99_us: 0,
                qps: 0.0,
            };
        }
        micros.sort_unstable();
        let n = micros.len();
        let total: u64 = micros.iter().sum();
        let qps = if total > 0 {
            n as f64 / (total as f64 / 1_000_000.0)
        } else {
            f64::INFINITY
        };
        Self {
            mean_us: total as f64 / n as f64,
            p50_us: micros[n / 2],
            p99_us: micros[(n * 99) / 100],
            qps,
        }
    }
}

/// Aggregated comparison results for a query batch.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub n_queries: usize,
    /// Fraction of queries where the indexed search matched the
    /// baseline's distance. Plays the role of recall@1.
    pub agreement: f32,
    /// Fraction of queries where the indexed search found anything.
    pub answered: f32,
    pub approx: LatencySummary,
    pub exact: LatencySummary,
}

impl ComparisonSummary {
    /// Summarize a batch of per-query comparisons.
    pub fn from_comparisons(comparisons: &[QueryComparison]) -> Self {
        let n = comparisons.len();
        let agreement = if n == 0 {
            0.0
        } else {
            comparisons.iter().filter(|c| c.agrees()).count() as f32 / n as f32
        };
        let answered = if n == 0 {
            0.0
        } else {
            comparisons.iter().filter(|c| c.approx.is_some()).count() as f32 / n as f32
        };
        Self {
            n_queries: n,
            agreement,
            answered,
            approx: LatencySummary::from_durations(comparisons.iter().map(|c| c.approx_time)),
            exact: LatencySummary::from_durations(comparisons.iter().map(|c| c.exact_time)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{HashFamily, LSHParams};

    #[test]
    fn indexed_queries_agree_with_themselves() {
        let data = datasets::clustered_rasters(60, 0, 16, 4, 1.0, 16, 5);
        let params = LSHParams {
            k: 8,
            m: 10,
            seed: 5,
            max_value: 16,
        };
        let index = LSHIndex::build(&data.train, &params).unwrap();

        // Querying indexed vectors: self-collision guarantees a
        // distance-0 answer, which always matches the baseline.
        let comparisons = compare(&index, &data.train[..20]).unwrap();
        let summary = ComparisonSummary::from_comparisons(&comparisons);
        assert_eq!(summary.n_queries, 20);
        assert_eq!(summary.answered, 1.0);
        assert_eq!(summary.agreement, 1.0);
    }

    #[test]
    fn shared_bucket_means_full_agreement() {
        // An offset-0 probe position is 1 for every vector, so all
        // vectors land in one bucket and the indexed search becomes
        // exhaustive.
        let data = datasets::uniform_rasters(40, 10, 4, 7, 11);
        let family = HashFamily::from_positions(vec![vec![0]], 4, 7).unwrap();
        let index = LSHIndex::from_family(&data.train, family).unwrap();

        let comparisons = compare(&index, &data.test).unwrap();
        for c in &comparisons {
            assert!(c.agrees());
            assert_eq!(c.approx.unwrap().index, c.exact.unwrap().index);
        }
    }

    #[test]
    fn empty_batch_summarizes_to_zeros() {
        let summary = ComparisonSummary::from_comparisons(&[]);
        assert_eq!(summary.n_queries, 0);
        assert_eq!(summary.agreement, 0.0);
        assert_eq!(summary.approx.p99_us, 0);
    }
}
