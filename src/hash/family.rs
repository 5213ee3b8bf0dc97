//! Seeded families of bit-sampling hash functions.
//!
//! Each hash function is nothing more than `k` positions in the unary
//! bit space; evaluating it on a vector reads those `k` bits. A family
//! holds one function per table, all drawn from a single seeded stream
//! so that index construction is fully reproducible from
//! `(seed, dimension, max_value, m, k)`.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};

/// Codes are packed into a `u64`, so a hash function samples at most
/// this many positions.
pub const MAX_CODE_BITS: usize = 64;

/// A family of `m` bit-sampling hash functions over the unary bit
/// space of size `dimension * max_value`, one function per table.
///
/// Immutable once constructed. Two families generated from identical
/// parameters compare equal, bit for bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFamily {
    /// `m` rows of `k` sampled positions, in evaluation order.
    positions: Vec<Vec<u32>>,
    dimension: usize,
    max_value: u16,
}

impl HashFamily {
    /// Sample a family of `m` functions of `k` positions each from a
    /// seed.
    ///
    /// Positions are drawn uniformly with replacement from
    /// `[0, dimension * max_value)`. The stream is consumed table-major
    /// (all `k` positions of table 0, then table 1, ...), so for a
    /// fixed seed the first `m` tables of a wider family are identical
    /// to the family generated with `m` tables. Growing `m` can
    /// therefore only add candidates, never remove them.
    pub fn generate(
        seed: u64,
        dimension: usize,
        max_value: u16,
        m: usize,
        k: usize,
    ) -> Result<Self> {
        let bit_space = validate_shape(dimension, max_value, m, k)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..m)
            .map(|_| (0..k).map(|_| rng.random_range(0..bit_space)).collect())
            .collect();
        Ok(Self {
            positions,
            dimension,
            max_value,
        })
    }

    /// Build a family from explicit positions, one row per table.
    ///
    /// Useful when the sampling is done elsewhere or when a test needs
    /// full control over which bits are compared. All rows must have
    /// the same nonzero length, and every position must fall inside
    /// the bit space.
    pub fn from_positions(
        positions: Vec<Vec<u32>>,
        dimension: usize,
        max_value: u16,
    ) -> Result<Self> {
        let k = positions.first().map_or(0, Vec::len);
        let bit_space = validate_shape(dimension, max_value, positions.len(), k)?;
        for row in &positions {
            if row.len() != k {
                return Err(IndexError::InvalidConfig(format!(
                    "hash functions must sample the same number of positions (got {} and {})",
                    k,
                    row.len()
                )));
            }
            if let Some(&p) = row.iter().find(|&&p| p >= bit_space) {
                return Err(IndexError::InvalidConfig(format!(
                    "position {p} outside bit space of size {bit_space}"
                )));
            }
        }
        Ok(Self {
            positions,
            dimension,
            max_value,
        })
    }

    /// Number of tables (`m`).
    pub fn num_tables(&self) -> usize {
        self.positions.len()
    }

    /// Positions sampled per table (`k`).
    pub fn code_bits(&self) -> usize {
        self.positions[0].len()
    }

    /// Vector length the family was built for.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Upper bound on feature values.
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// Size of the unary bit space, `dimension * max_value`.
    pub fn bit_space(&self) -> usize {
        self.dimension * usize::from(self.max_value)
    }

    /// The sampled positions of one table's hash function.
    ///
    /// # Panics
    ///
    /// Panics if `table >= num_tables()`.
    pub fn positions(&self, table: usize) -> &[u32] {
        &self.positions[table]
    }
}

fn validate_shape(dimension: usize, max_value: u16, m: usize, k: usize) -> Result<u32> {
    if dimension == 0 {
        return Err(IndexError::InvalidConfig(
            "vector dimension must be at least 1".into(),
        ));
    }
    if max_value == 0 {
        return Err(IndexError::InvalidConfig(
            "max_value must be at least 1".into(),
        ));
    }
    if m == 0 {
        return Err(IndexError::InvalidConfig(
            "need at least one hash table".into(),
        ));
    }
    if k == 0 || k > MAX_CODE_BITS {
        return Err(IndexError::InvalidConfig(format!(
            "code width must be in 1..={MAX_CODE_BITS}, got {k}"
        )));
    }
    let bit_space = dimension as u64 * u64::from(max_value);
    u32::try_from(bit_space).map_err(|_| {
        IndexError::InvalidConfig(format!("bit space of size {bit_space} exceeds u32 range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = HashFamily::generate(12345, 64, 16, 5, 20).unwrap();
        let b = HashFamily::generate(12345, 64, 16, 5, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = HashFamily::generate(1, 64, 16, 5, 20).unwrap();
        let b = HashFamily::generate(2, 64, 16, 5, 20).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wider_family_extends_narrower() {
        let narrow = HashFamily::generate(9, 8, 4, 2, 6).unwrap();
        let wide = HashFamily::generate(9, 8, 4, 7, 6).unwrap();
        for table in 0..narrow.num_tables() {
            assert_eq!(narrow.positions(table), wide.positions(table));
        }
    }

    #[test]
    fn positions_stay_in_bit_space() {
        let family = HashFamily::generate(42, 8, 4, 10, 16).unwrap();
        let bit_space = family.bit_space() as u32;
        for table in 0..family.num_tables() {
            assert!(family.positions(table).iter().all(|&p| p < bit_space));
        }
    }

    #[test]
    fn rejects_degenerate_shapes() {
        assert!(HashFamily::generate(0, 0, 16, 5, 20).is_err());
        assert!(HashFamily::generate(0, 64, 0, 5, 20).is_err());
        assert!(HashFamily::generate(0, 64, 16, 0, 20).is_err());
        assert!(HashFamily::generate(0, 64, 16, 5, 0).is_err());
        assert!(HashFamily::generate(0, 64, 16, 5, 65).is_err());
    }

    #[test]
    fn from_positions_validates_rows() {
        // ragged rows
        assert!(HashFamily::from_positions(vec![vec![0, 1], vec![2]], 2, 4).is_err());
        // position outside the 8-bit space
        assert!(HashFamily::from_positions(vec![vec![8]], 2, 4).is_err());
        // well-formed
        let family = HashFamily::from_positions(vec![vec![0, 7], vec![3, 4]], 2, 4).unwrap();
        assert_eq!(family.num_tables(), 2);
        assert_eq!(family.code_bits(), 2);
    }
}
