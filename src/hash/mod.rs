//! Bit-sampling LSH over unary-coded integer vectors.
//!
//! Traditional hash functions try to *minimize* collisions. LSH does
//! the opposite for similar items: the hash family is designed so that
//!
//! - P[h(a) = h(b)] is high when a and b are close
//! - P[h(a) = h(b)] is low when a and b are far apart
//!
//! which turns search into a bucket lookup plus exact verification of
//! whatever collided.
//!
//! ## This family
//!
//! Vectors are viewed through their unary (thermometer) encoding: a
//! feature of value `t` becomes a run of `t + 1` one-bits in a
//! `max_value`-bit block (see [`crate::unary`]). A hash function
//! samples `k` random positions from that bit space; two vectors
//! collide in a table iff they agree on all `k` sampled bits. Because
//! a unary bit at offset `o` just asks "is the feature at least `o`?",
//! nearby vectors agree on most positions and collide often, while
//! distant vectors rarely survive all `k` comparisons.
//!
//! A single `k`-bit code has low recall, so the index keeps `m`
//! independent tables and unions their buckets at query time: each
//! indexed vector gets `m` chances to collide with the query.
//!
//! ## References
//!
//! - Indyk & Motwani (1998): "Approximate nearest neighbors: towards
//!   removing the curse of dimensionality"

mod family;
mod index;

pub use family::{HashFamily, MAX_CODE_BITS};
pub use index::{LSHIndex, LSHParams, Neighbor};
