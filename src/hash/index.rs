//! Multi-table LSH index and candidate-verified nearest-neighbor search.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::distance::l1_distance;
use crate::error::{IndexError, Result};
use crate::hash::family::HashFamily;
use crate::unary::unary_bit;

/// Construction parameters for [`LSHIndex`].
///
/// `k` and `m` are the two tuning knobs. A wider code (larger `k`)
/// makes each table more selective: buckets shrink, false positives
/// drop, and so does the chance of finding anything at all. More
/// tables (larger `m`) give every indexed vector that many independent
/// chances to collide with a query, buying recall back at the cost of
/// memory and per-query hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LSHParams {
    /// Bits sampled per hash code, in `1..=64`.
    pub k: usize,
    /// Number of hash tables.
    pub m: usize,
    /// Seed for hash function sampling.
    pub seed: u64,
    /// Upper bound on feature values; one feature contributes this
    /// many bits to the unary code.
    pub max_value: u16,
}

impl Default for LSHParams {
    fn default() -> Self {
        Self {
            k: 20,
            m: 5,
            seed: 12345,
            max_value: 16,
        }
    }
}

/// A nearest-neighbor search result: the dataset index of the winner
/// and its exact L1 distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Position of the neighbor in the indexed subset.
    pub index: u32,
    /// Exact L1 distance between query and neighbor.
    pub distance: u64,
}

/// Bucket posting lists are short for any reasonable `k`, so keep the
/// first few entries inline.
type Bucket = SmallVec<[u32; 8]>;

/// Multi-table LSH index over unary-coded integer vectors.
///
/// Built once over a dataset subset and read-only thereafter; queries
/// take `&self`, so a built index can be shared across threads freely.
/// Each of the `m` tables maps a packed `k`-bit code to the indices of
/// the vectors that hash to it under that table's function.
#[derive(Debug, Clone)]
pub struct LSHIndex {
    family: HashFamily,
    tables: Vec<HashMap<u64, Bucket>>,
    vectors: Vec<Vec<u16>>,
}

impl LSHIndex {
    /// Build an index over `vectors`, sampling hash functions from
    /// `params.seed`.
    ///
    /// Fails with [`IndexError::InvalidConfig`] if the subset is empty
    /// or the parameters are degenerate, and with
    /// [`IndexError::DimensionMismatch`] if the vectors disagree on
    /// length.
    pub fn build(vectors: &[Vec<u16>], params: &LSHParams) -> Result<Self> {
        let dimension = match vectors.first() {
            Some(v) => v.len(),
            None => {
                return Err(IndexError::InvalidConfig(
                    "cannot index an empty dataset subset".into(),
                ));
            }
        };
        let family =
            HashFamily::generate(params.seed, dimension, params.max_value, params.m, params.k)?;
        Self::from_family(vectors, family)
    }

    /// Build an index with an already-constructed hash family.
    ///
    /// `vectors` must all have the family's dimension.
    pub fn from_family(vectors: &[Vec<u16>], family: HashFamily) -> Result<Self> {
        if vectors.is_empty() {
            return Err(IndexError::InvalidConfig(
                "cannot index an empty dataset subset".into(),
            ));
        }
        for v in vectors {
            if v.len() != family.dimension() {
                return Err(IndexError::DimensionMismatch {
                    expected: family.dimension(),
                    actual: v.len(),
                });
            }
        }

        let mut tables = vec![HashMap::new(); family.num_tables()];
        for (idx, v) in vectors.iter().enumerate() {
            for (table, buckets) in tables.iter_mut().enumerate() {
                let code = pack_code(&family, v, table);
                buckets
                    .entry(code)
                    .or_insert_with(Bucket::new)
                    .push(idx as u32);
            }
        }

        Ok(Self {
            family,
            tables,
            vectors: vectors.to_vec(),
        })
    }

    /// The packed `k`-bit code of `v` under one table's hash function,
    /// with the function's first position in the most significant bit.
    ///
    /// Pure; no part of the index is touched besides the family.
    ///
    /// # Panics
    ///
    /// Panics if `table >= num_tables()`.
    pub fn hashcode(&self, v: &[u16], table: usize) -> Result<u64> {
        self.check_dimension(v)?;
        Ok(pack_code(&self.family, v, table))
    }

    /// Indices of all vectors sharing a bucket with `v` in at least
    /// one table, deduplicated and sorted ascending.
    ///
    /// An empty result means no table had a matching bucket. That is
    /// the expected behavior of probabilistic hashing when `k` is high
    /// or `m` low, not a fault.
    pub fn candidates(&self, v: &[u16]) -> Result<Vec<u32>> {
        self.check_dimension(v)?;
        let mut seen: HashSet<u32> = HashSet::new();
        for (table, buckets) in self.tables.iter().enumerate() {
            let code = pack_code(&self.family, v, table);
            if let Some(bucket) = buckets.get(&code) {
                seen.extend(bucket.iter().copied());
            }
        }
        let mut out: Vec<u32> = seen.into_iter().collect();
        // Ascending order fixes the tie-break: the lowest index wins
        // among equal minima in `nearest`.
        out.sort_unstable();
        Ok(out)
    }

    /// Exact 1-NN over the candidate set.
    ///
    /// Every candidate is ranked by true L1 distance; the first strict
    /// minimum wins, so ties resolve to the lowest index. Returns
    /// `None` when the candidate set is empty. There is deliberately
    /// no exhaustive fallback on that path: silently rescanning the
    /// whole subset would mask recall failures that the caller should
    /// instead fix by raising `m` or lowering `k` and rebuilding.
    pub fn nearest(&self, query: &[u16]) -> Result<Option<Neighbor>> {
        let mut best: Option<Neighbor> = None;
        for index in self.candidates(query)? {
            let distance = l1_distance(query, &self.vectors[index as usize])?;
            if best.is_none_or(|b| distance < b.distance) {
                best = Some(Neighbor { index, distance });
            }
        }
        Ok(best)
    }

    /// Vector length the index was built for.
    pub fn dimension(&self) -> usize {
        self.family.dimension()
    }

    /// Number of hash tables (`m`).
    pub fn num_tables(&self) -> usize {
        self.family.num_tables()
    }

    /// Bits per hash code (`k`).
    pub fn code_bits(&self) -> usize {
        self.family.code_bits()
    }

    /// Number of indexed vectors.
    pub fn num_indexed(&self) -> usize {
        self.vectors.len()
    }

    /// The indexed subset, in insertion order. Candidate indices point
    /// into this slice.
    pub fn indexed(&self) -> &[Vec<u16>] {
        &self.vectors
    }

    /// The hash family the index was built with.
    pub fn family(&self) -> &HashFamily {
        &self.family
    }

    fn check_dimension(&self, v: &[u16]) -> Result<()> {
        if v.len() != self.family.dimension() {
            return Err(IndexError::DimensionMismatch {
                expected: self.family.dimension(),
                actual: v.len(),
            });
        }
        Ok(())
    }
}

fn pack_code(family: &HashFamily, v: &[u16], table: usize) -> u64 {
    let mut code = 0u64;
    for &position in family.positions(table) {
        code = (code << 1) | u64::from(unary_bit(v, position, family.max_value()));
    }
    code
}
