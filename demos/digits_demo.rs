//! Unary LSH walkthrough on digit-like rasters.
//!
//! Indexes a training split of synthetic 8x8 rasters, then answers a
//! handful of held-out queries with both the exhaustive scan and the
//! multi-table index, printing results and timings side by side.
//!
//! ```bash
//! cargo run --example digits_demo
//! ```

use vecino::eval::datasets::clustered_rasters;
use vecino::eval::{self, ComparisonSummary};
use vecino::{LSHIndex, LSHParams};

fn main() {
    let params = LSHParams::default(); // k = 20, m = 5
    println!("Unary LSH nearest-neighbor search");
    println!("=================================\n");
    println!(
        "parameters: k = {}, m = {}, seed = {}\n",
        params.k, params.m, params.seed
    );

    // 8x8 rasters with intensities 0..=16, split 1500 / 300.
    let data = clustered_rasters(1500, 300, 64, 10, 1.8, params.max_value, params.seed);
    let index = LSHIndex::build(&data.train, &params).expect("index construction failed");
    println!(
        "indexed {} vectors of length {} into {} tables of {}-bit codes\n",
        index.num_indexed(),
        index.dimension(),
        index.num_tables(),
        index.code_bits()
    );

    // Per-query comparison on the first few held-out rasters.
    let sample = &data.test[..20];
    let comparisons = eval::compare(&index, sample).expect("query failed");

    for (i, c) in comparisons.iter().enumerate() {
        println!("query #{i}");
        match c.exact {
            Some(n) => println!(
                "  exhaustive: index {} at distance {}  ({:?})",
                n.index, n.distance, c.exact_time
            ),
            None => println!("  exhaustive: no reference vectors"),
        }
        match c.approx {
            Some(n) => println!(
                "  lsh:        index {} at distance {}  ({:?})",
                n.index, n.distance, c.approx_time
            ),
            None => println!("  lsh:        no candidates (raise m or lower k)"),
        }
    }

    let summary = ComparisonSummary::from_comparisons(&comparisons);
    println!("\nsummary over {} queries:", summary.n_queries);
    println!(
        "  agreement with baseline: {:.0}%  (answered: {:.0}%)",
        summary.agreement * 100.0,
        summary.answered * 100.0
    );
    println!(
        "  lsh:        mean {:.1}us, p50 {}us, p99 {}us, {:.0} qps",
        summary.approx.mean_us, summary.approx.p50_us, summary.approx.p99_us, summary.approx.qps
    );
    println!(
        "  exhaustive: mean {:.1}us, p50 {}us, p99 {}us, {:.0} qps",
        summary.exact.mean_us, summary.exact.p50_us, summary.exact.p99_us, summary.exact.qps
    );

    // How the knobs move the tradeoff.
    println!("\nk/m tradeoff on the same split:");
    println!("  k  m   agreement  answered  mean query");
    for (k, m) in [(8, 2), (12, 5), (20, 5), (20, 15), (28, 15)] {
        let params = LSHParams {
            k,
            m,
            ..LSHParams::default()
        };
        let index = LSHIndex::build(&data.train, &params).expect("index construction failed");
        let comparisons = eval::compare(&index, &data.test).expect("query failed");
        let s = ComparisonSummary::from_comparisons(&comparisons);
        println!(
            "  {k:<2} {m:<3} {:>8.0}% {:>8.0}% {:>9.1}us",
            s.agreement * 100.0,
            s.answered * 100.0,
            s.approx.mean_us
        );
    }
}
