//! Basis blade combinatorics for geometric algebras of up to 63 dimensions.
//!
//! A basis blade is identified by a bitmask id: bit `i` is set when basis vector `e(i+1)`
//! is a factor. From there this crate provides
//! - bit pattern utilities ([`bits`])
//! - (grade, index) numbering of blades ([`basis`])
//! - the sign of the Euclidean geometric product of two blades ([`sign`])
//! - outer, scalar, contraction, fat dot, Hestenes, commutator and anti-commutator
//!   products as restrictions of the geometric product ([`products`])
//! - orthogonal metrics with negative or null basis vectors ([`metric`])
//! - the [`BasisBlade`] value type ([`blade`])

pub mod basis;
pub mod bits;
pub mod blade;
pub mod error;
pub mod lookup;
pub mod metric;
pub mod products;
pub mod sign;

#[cfg(test)]
mod tests;

pub use crate::blade::{BasisBlade, BladeTerm};
pub use crate::error::BasisError;
pub use crate::metric::{Euclidean, Metric, Signature, Square};
pub use crate::products::ProductKind;

/// Largest supported vector space dimension, bounded by the bits of a `u64` id.
pub const MAX_VSPACE_DIMENSION: u32 = 63;

pub trait IsEven {
    fn is_even(&self) -> bool;
}

impl IsEven for u32 {
    fn is_even(&self) -> bool {
        self & 1 != 1
    }
}

impl IsEven for u64 {
    fn is_even(&self) -> bool {
        self & 1 != 1
    }
}
