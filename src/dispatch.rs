//! Bilinear products chosen by the storage shapes of their operands.

use algebra::{Euclidean, Metric, ProductKind};
use itertools::iproduct;
use tracing::trace;

use crate::gbt::id_scalar_records;
use crate::multivector::{GradedMultivector, KVector, Multivector, TermsComposer};

/// Product of `kind` under `metric`, returned in the tightest shape that holds it.
///
/// Vector pairs contracting to a scalar use the metric dot product, k-vector pairs skip
/// whole grade combinations that cannot contribute, and anything stored as loose terms
/// goes through the pruned traversal of [`id_scalar_records`].
pub fn product<M: Metric + ?Sized>(
    kind: ProductKind,
    metric: &M,
    lhs: &Multivector,
    rhs: &Multivector,
) -> Multivector {
    if let (Multivector::Vector(a), Multivector::Vector(b)) = (lhs, rhs) {
        if kind.is_scalar_for_equal_grades(1) {
            trace!(?kind, "vector dot");
            return Multivector::Scalar(a.dot(metric, b));
        }
    }

    let mut composer = TermsComposer::new();

    if let (Some(a), Some(b)) = (lhs.as_kvector(), rhs.as_kvector()) {
        if a.grade() == b.grade() && kind.is_scalar_for_equal_grades(a.grade()) {
            trace!(?kind, grade = a.grade(), "k-vector scalar product");
            return Multivector::Scalar(a.scalar_product(metric, &b));
        }
        trace!(?kind, lhs = a.grade(), rhs = b.grade(), "k-vector product");
        add_kvector_product(&mut composer, kind, metric, &a, &b);
        return composer.into_multivector();
    }

    match (lhs.as_graded(), rhs.as_graded()) {
        (Some(a), Some(b)) => {
            trace!(?kind, "graded product");
            add_graded_product(&mut composer, kind, metric, &a, &b);
        }
        _ => {
            trace!(?kind, "traversal product");
            let lhs = lhs.sorted_terms();
            let rhs = rhs.sorted_terms();
            composer.extend(id_scalar_records(kind, metric, &lhs, &rhs));
        }
    }

    composer.into_multivector()
}

fn add_term<M: Metric + ?Sized>(
    composer: &mut TermsComposer,
    kind: ProductKind,
    metric: &M,
    id1: u64,
    s1: f64,
    id2: u64,
    s2: f64,
) {
    match metric.product_signature(kind, id1, id2) {
        0 => {}
        sign => composer.add_term(id1 ^ id2, f64::from(sign) * s1 * s2),
    }
}

fn add_kvector_product<M: Metric + ?Sized>(
    composer: &mut TermsComposer,
    kind: ProductKind,
    metric: &M,
    lhs: &KVector,
    rhs: &KVector,
) {
    if kind.is_zero_grade_pair(lhs.grade(), rhs.grade()) {
        return;
    }
    for ((id1, s1), (id2, s2)) in iproduct!(lhs.terms(), rhs.terms()) {
        add_term(composer, kind, metric, id1, s1, id2, s2);
    }
}

fn add_graded_product<M: Metric + ?Sized>(
    composer: &mut TermsComposer,
    kind: ProductKind,
    metric: &M,
    lhs: &GradedMultivector,
    rhs: &GradedMultivector,
) {
    for ((g1, a), (g2, b)) in iproduct!(lhs.kvectors(), rhs.kvectors()) {
        if g1 == g2 && kind.is_scalar_for_equal_grades(g1) {
            composer.add_term(0, a.scalar_product(metric, b));
        } else {
            add_kvector_product(composer, kind, metric, a, b);
        }
    }
}

/// Euclidean geometric product.
pub fn gp(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Gp, &Euclidean, lhs, rhs)
}

/// Outer product.
pub fn op(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Op, &Euclidean, lhs, rhs)
}

/// Euclidean scalar product.
pub fn sp(lhs: &Multivector, rhs: &Multivector) -> f64 {
    product(ProductKind::Sp, &Euclidean, lhs, rhs).scalar_part()
}

pub fn lcp(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Lcp, &Euclidean, lhs, rhs)
}

pub fn rcp(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Rcp, &Euclidean, lhs, rhs)
}

pub fn fdp(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Fdp, &Euclidean, lhs, rhs)
}

pub fn hip(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Hip, &Euclidean, lhs, rhs)
}

pub fn acp(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Acp, &Euclidean, lhs, rhs)
}

pub fn cp(lhs: &Multivector, rhs: &Multivector) -> Multivector {
    product(ProductKind::Cp, &Euclidean, lhs, rhs)
}
