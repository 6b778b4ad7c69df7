//! Basis blade combinatorics and bilinear products for Clifford algebras of up to 63 dimensions
//!
//! Basis blades are identified by bit patterns: bit `i` set means basis vector `e(i+1)` is a
//! factor. The [`algebra`] crate holds the per-blade machinery (grades, indices, signs, product
//! predicates, metrics). This crate stores multivectors and multiplies them.
//!
//! [`Feature set`]
//!
//! Models of geometry:
//! - [x] Euclidean
//! - [x] Diagonal metrics, including degenerate ones
//! - [ ] Non-diagonal metrics
//!
//! Types:
//! - [x] Scalar
//! - [x] Vector
//! - [x] K-vector
//! - [x] Graded multivector
//! - [x] Sparse multivector
//!
//! Main products:
//! - [x] Mul
//! - [x] Geometric
//! - [x] Commutator
//! - [x] Anti-commutator
//!
//! Inner products:
//! - [x] Scalar
//! - [x] Dot (fat dot)
//! - [x] Hestenes inner
//! - [x] Left contraction
//! - [x] Right contraction
//!
//! Outer products:
//! - [x] Wedge
//!
//! Sum products:
//! - [x] Addition
//! - [x] Subtraction
//!
//! Unary operations:
//! - [x] Neg
//! - [x] Reverse
//! - [x] Grade involution
//! - [x] Clifford conjugate
//!
//! Norm-based operations:
//! - [x] Inverse
//! - [ ] Normalize
//!
//! [`Feature set`]: https://ga-developers.github.io/ga-benchmark-runs/2020.02.05/table_of_features.html

pub use algebra;
pub use algebra::{BasisBlade, BasisError, BladeTerm, Euclidean, Metric, ProductKind, Signature, Square};

pub use dispatch::{acp, cp, fdp, gp, hip, lcp, op, product, rcp, sp};
pub use error::{Error, Result};
pub use gbt::{gbt_product, id_scalar_records, GbtProductIterator};
pub use multivector::{GradedMultivector, KVector, Multivector, TermsComposer, TermsMultivector, Vector};

pub mod dispatch;
pub mod error;
pub mod gbt;
pub mod multivector;
mod norm;
mod ops;

pub trait Geometric<Rhs> {
    type Output;
    fn geo(self, rhs: Rhs) -> Self::Output;
}

pub trait Wedge<Rhs> {
    type Output;
    fn wedge(self, rhs: Rhs) -> Self::Output;
}

/// Grade `|k - l|` part of the geometric product.
pub trait Dot<Rhs> {
    type Output;
    fn dot(self, rhs: Rhs) -> Self::Output;
}

pub trait ScalarProduct<Rhs> {
    type Output;
    fn scalar_product(self, rhs: Rhs) -> Self::Output;
}

pub trait LeftContraction<Rhs> {
    type Output;
    fn left_con(self, rhs: Rhs) -> Self::Output;
}

pub trait RightContraction<Rhs> {
    type Output;
    fn right_con(self, rhs: Rhs) -> Self::Output;
}

/// Fat dot product with scalars excluded.
pub trait HestenesInner<Rhs> {
    type Output;
    fn hestenes(self, rhs: Rhs) -> Self::Output;
}

pub trait Commutator<Rhs> {
    type Output;
    fn commutator(self, rhs: Rhs) -> Self::Output;
}

pub trait AntiCommutator<Rhs> {
    type Output;
    fn anticommutator(self, rhs: Rhs) -> Self::Output;
}

pub trait Reverse {
    type Output;
    fn rev(self) -> Self::Output;
}

pub trait GradeInvolution {
    type Output;
    fn grade_inv(self) -> Self::Output;
}

pub trait CliffordConjugate {
    type Output;
    fn conjugate(self) -> Self::Output;
}
