//! vecino: approximate nearest-neighbor search for small raster images.
//!
//! The dataset is a collection of fixed-length integer vectors (pixel
//! intensities). Instead of scanning all of them per query, the index
//! hashes each vector into `m` tables using `k` randomly sampled bits
//! of its implicit unary encoding, then answers queries by ranking only
//! the vectors that collided in at least one table:
//!
//! 1. [`unary`]: the thermometer bit encoding, evaluated lazily.
//! 2. [`hash`]: seeded hash families, the multi-table [`LSHIndex`],
//!    candidate aggregation, and exact L1 verification.
//! 3. [`brute_force`]: the exhaustive baseline the index is judged
//!    against.
//! 4. [`eval`]: timed side-by-side comparison on held-out queries.
//!
//! # Critical nuances
//!
//! ## An empty answer is not a bug
//!
//! With `k` bits per code, a query only finds neighbors that agree
//! with it on all `k` sampled bits in some table. When `k` is high and
//! `m` low, that can be nobody; [`LSHIndex::nearest`] then returns
//! `None`. That outcome is the probabilistic contract of LSH, and the
//! fix is a rebuild with more tables or a narrower code, never a
//! silent exhaustive rescan.
//!
//! ## When brute force wins
//!
//! For a few thousand short vectors, the linear scan in
//! [`brute_force`] is hard to beat and is always exact. The index
//! pays off as the indexed subset grows and buckets stay small
//! relative to it; [`eval`] measures exactly that tradeoff.
//!
//! # Example
//!
//! ```
//! use vecino::{LSHIndex, LSHParams};
//!
//! let vectors = vec![vec![0u16, 0], vec![0, 1], vec![3, 3], vec![3, 2]];
//! let params = LSHParams { k: 2, m: 4, seed: 12345, max_value: 4 };
//! let index = LSHIndex::build(&vectors, &params)?;
//!
//! // An indexed vector always collides with itself.
//! let hit = index.nearest(&[3, 3])?.unwrap();
//! assert_eq!((hit.index, hit.distance), (2, 0));
//! # Ok::<(), vecino::IndexError>(())
//! ```

pub mod brute_force;
pub mod distance;
pub mod error;
pub mod eval;
pub mod hash;
pub mod unary;

pub use error::{IndexError, Result};
pub use hash::{HashFamily, LSHIndex, LSHParams, Neighbor};
