//! Exhaustive exact-distance baseline search.
//!
//! A linear scan over a reference set, kept deliberately separate from
//! [`LSHIndex`]: it exists to measure what the index gives up, and
//! wiring it in as an automatic fallback would hide exactly the recall
//! failures it is meant to expose.
//!
//! [`LSHIndex`]: crate::hash::LSHIndex

use crate::distance::l1_distance;
use crate::error::Result;
use crate::hash::Neighbor;

/// Exact 1-NN by scanning every vector in `reference`.
///
/// Returns `None` only when `reference` is empty. Ties resolve to the
/// first (lowest-index) minimum under the slice's iteration order,
/// matching the tie-break of the indexed search.
pub fn nearest(query: &[u16], reference: &[Vec<u16>]) -> Result<Option<Neighbor>> {
    let mut best: Option<Neighbor> = None;
    for (index, v) in reference.iter().enumerate() {
        let distance = l1_distance(query, v)?;
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Neighbor {
                index: index as u32,
                distance,
            });
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;

    #[test]
    fn empty_reference_yields_none() {
        assert_eq!(nearest(&[1, 2], &[]).unwrap(), None);
    }

    #[test]
    fn finds_the_true_minimum() {
        let reference = vec![vec![0u16, 0], vec![0, 1], vec![3, 3], vec![3, 2]];
        let hit = nearest(&[3, 3], &reference).unwrap().unwrap();
        assert_eq!(hit.index, 2);
        assert_eq!(hit.distance, 0);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let reference = vec![vec![0u16], vec![2u16]];
        let hit = nearest(&[1], &reference).unwrap().unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.distance, 1);
    }

    #[test]
    fn mismatched_reference_vector_is_an_error() {
        let reference = vec![vec![0u16, 0], vec![0u16]];
        assert!(matches!(
            nearest(&[1, 1], &reference),
            Err(IndexError::DimensionMismatch { .. })
        ));
    }
}
