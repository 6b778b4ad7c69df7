use strum::IntoEnumIterator;

use super::*;
use crate::basis::basis_blade_grade;
use crate::sign::{egp_signature, is_negative_egp};

pub(crate) fn ids(dim: u32) -> std::ops::Range<u64> {
    0..1 << dim
}

fn factors(id: u64) -> impl Iterator<Item = u32> {
    (0..64).filter(move |i| id >> i & 1 == 1)
}

/// Writes out both factor lists, bubble sorts them counting transpositions of distinct
/// neighbours, and lets equal neighbours cancel without changing the sign.
pub(crate) fn brute_force_is_negative_egp(id1: u64, id2: u64) -> bool {
    let mut factors = factors(id1).chain(factors(id2)).collect::<Vec<_>>();
    let mut swaps = 0;
    for i in 0..factors.len() {
        for j in 0..factors.len() - 1 - i {
            if factors[j] > factors[j + 1] {
                factors.swap(j, j + 1);
                swaps += 1;
            }
        }
    }
    swaps & 1 == 1
}

/// Grade based definitions of the products of two basis blades.
pub(crate) fn reference_nonzero(kind: ProductKind, id1: u64, id2: u64) -> bool {
    let g1 = id1.count_ones();
    let g2 = id2.count_ones();
    let product_grade = (id1 ^ id2).count_ones();
    let commute = brute_force_is_negative_egp(id1, id2) == brute_force_is_negative_egp(id2, id1);
    match kind {
        ProductKind::Gp => true,
        ProductKind::Op => product_grade == g1 + g2,
        ProductKind::Sp => product_grade == 0,
        ProductKind::Lcp => g1 <= g2 && product_grade == g2 - g1,
        ProductKind::Rcp => g1 >= g2 && product_grade == g1 - g2,
        ProductKind::Fdp => product_grade == g1.abs_diff(g2),
        ProductKind::Hip => g1 > 0 && g2 > 0 && product_grade == g1.abs_diff(g2),
        ProductKind::Acp => commute,
        ProductKind::Cp => !commute,
    }
}

#[test]
fn brute_force_reference() {
    assert!(!brute_force_is_negative_egp(0b01, 0b10));
    assert!(brute_force_is_negative_egp(0b10, 0b01));
    assert!(brute_force_is_negative_egp(0b11, 0b11));
    assert!(brute_force_is_negative_egp(0b011, 0b101));
    assert!(brute_force_is_negative_egp(0b111, 0b111));
    assert!(!brute_force_is_negative_egp(0b1111, 0b1111));
}

#[test]
fn geometric_product_sign_is_associative() {
    for a in ids(5) {
        for b in ids(5) {
            for c in ids(5) {
                let left = egp_signature(a, b) * egp_signature(a ^ b, c);
                let right = egp_signature(b, c) * egp_signature(a, b ^ c);
                assert_eq!(left, right, "{a:#b} {b:#b} {c:#b}");
            }
        }
    }
}

#[test]
fn outer_product_of_disjoint_blades_swaps_by_grade() {
    for a in ids(6) {
        for b in ids(6).filter(|b| a & b == 0) {
            let ga = basis_blade_grade(a);
            let gb = basis_blade_grade(b);
            let commute = (ga * gb).is_even();
            assert_eq!(
                commute,
                is_negative_egp(a, b) == is_negative_egp(b, a),
                "{a:#b} {b:#b}"
            );
        }
    }
}

#[test]
fn metric_products_restrict_the_geometric_product() {
    let metric = Signature::new(2, 2, 1);
    for kind in ProductKind::iter() {
        for a in ids(5) {
            for b in ids(5) {
                let expected = if kind.is_nonzero(a, b) {
                    metric.gp_signature(a, b)
                } else {
                    0
                };
                assert_eq!(expected, metric.product_signature(kind, a, b));
            }
        }
    }
}

#[test]
fn blade_terms_from_every_variant() {
    let e12 = BasisBlade::from_grade_index(2, 0);
    let terms = [e12, e12.to_full(), e12.to_uniform()].map(|b| b.create_term(1.5));
    assert!(terms.iter().all(|t| t.id() == 0b11));
    assert!(terms.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn random_wide_blades() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::basis::{basis_blade_grade_index, basis_blade_id};
    use crate::bits::low_mask;

    let mut rng = StdRng::seed_from_u64(63);
    for _ in 0..200 {
        let id1 = rng.gen_range(0..=low_mask(MAX_VSPACE_DIMENSION));
        let id2 = rng.gen_range(0..=low_mask(MAX_VSPACE_DIMENSION));

        let (grade, index) = basis_blade_grade_index(id1);
        assert_eq!(id1, basis_blade_id(grade, index));

        assert_eq!(brute_force_is_negative_egp(id1, id2), is_negative_egp(id1, id2));
    }
}
