//! Guided binary traversal of the product of two sparse multivectors.
//!
//! Both operands are slices of `(id, scalar)` records sorted strictly ascending by id. The
//! traversal walks the bits of the ids from the highest down, splitting each operand's range
//! into the records with the bit clear and those with it set. A pair of sub-ranges is pruned
//! as soon as the bits decided so far rule out every product inside it, and the sign of the
//! geometric product is accumulated one bit at a time. The leaves are single blade pairs.

use std::ops::Range;

use algebra::bits::BitPattern;
use algebra::{Euclidean, IsEven, Metric, ProductKind, Square};

use crate::multivector::{Multivector, TermsMultivector};

#[derive(Debug, Clone)]
struct Frame {
    /// Bits at and above `level` are decided.
    level: u32,
    lhs: Range<usize>,
    rhs: Range<usize>,
    lhs_prefix: u64,
    rhs_prefix: u64,
    negative: bool,
}

/// Lazily yields the non-zero `(id, scalar)` contributions of a bilinear product.
///
/// Records with equal output ids are not merged; collect into a
/// [`TermsMultivector`] or a [`TermsComposer`](crate::TermsComposer) to sum them.
pub struct GbtProductIterator<'a, M> {
    kind: ProductKind,
    metric: M,
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
    stack: Vec<Frame>,
}

impl<'a, M: Metric> GbtProductIterator<'a, M> {
    /// # Panics
    ///
    /// Panics unless the ids of both `lhs` and `rhs` are strictly ascending. Unsorted or
    /// repeated ids would leave records unreachable from the leaves.
    pub fn new(kind: ProductKind, metric: M, lhs: &'a [(u64, f64)], rhs: &'a [(u64, f64)]) -> Self {
        assert!(is_strictly_ascending(lhs), "lhs ids must be strictly ascending");
        assert!(is_strictly_ascending(rhs), "rhs ids must be strictly ascending");

        let mut stack = Vec::new();
        if let (Some((lhs_max, _)), Some((rhs_max, _))) = (lhs.last(), rhs.last()) {
            let top = lhs_max | rhs_max;
            stack.push(Frame {
                level: u64::BITS - top.leading_zeros(),
                lhs: 0..lhs.len(),
                rhs: 0..rhs.len(),
                lhs_prefix: 0,
                rhs_prefix: 0,
                negative: false,
            });
        }

        Self {
            kind,
            metric,
            lhs,
            rhs,
            stack,
        }
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    fn leaf(&self, frame: &Frame) -> Option<(u64, f64)> {
        debug_assert_eq!(1, frame.lhs.len());
        debug_assert_eq!(1, frame.rhs.len());

        let (id1, s1) = self.lhs[frame.lhs.start];
        let (id2, s2) = self.rhs[frame.rhs.start];
        if s1 == 0.0 || s2 == 0.0 || !self.kind.is_nonzero(id1, id2) {
            return None;
        }

        let scalar = s1 * s2;
        Some((id1 ^ id2, if frame.negative { -scalar } else { scalar }))
    }

    fn descend(&mut self, frame: Frame) {
        let level = frame.level - 1;
        let bit = 1u64 << level;

        let (lhs_clear, lhs_set) = split(self.lhs, frame.lhs.clone(), bit);
        let (rhs_clear, rhs_set) = split(self.rhs, frame.rhs.clone(), bit);

        for (lhs, lhs_bit) in [(lhs_clear, 0), (lhs_set, bit)] {
            if lhs.is_empty() {
                continue;
            }
            for (rhs, rhs_bit) in [(rhs_clear.clone(), 0), (rhs_set.clone(), bit)] {
                if rhs.is_empty() {
                    continue;
                }

                let lhs_prefix = frame.lhs_prefix | lhs_bit;
                let rhs_prefix = frame.rhs_prefix | rhs_bit;
                if is_pruned(self.kind, lhs_prefix, rhs_prefix) {
                    continue;
                }

                // Moving the rhs basis vector past every higher lhs basis vector.
                let mut negative = frame.negative;
                if rhs_bit != 0 && !frame.lhs_prefix.count_ones().is_even() {
                    negative = !negative;
                }
                if lhs_bit & rhs_bit != 0 {
                    match self.metric.square(level) {
                        Square::Pos => {}
                        Square::Neg => negative = !negative,
                        Square::Zero => continue,
                    }
                }

                self.stack.push(Frame {
                    level,
                    lhs: lhs.clone(),
                    rhs,
                    lhs_prefix,
                    rhs_prefix,
                    negative,
                });
            }
        }
    }
}

impl<M: Metric> Iterator for GbtProductIterator<'_, M> {
    type Item = (u64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            if frame.level == 0 {
                if let Some(record) = self.leaf(&frame) {
                    return Some(record);
                }
            } else {
                self.descend(frame);
            }
        }
        None
    }
}

/// Splits a range of records sorted by id into those without and with `bit`.
///
/// All ids in the range agree on the bits above `bit`, so the ones with it set come last.
fn split(records: &[(u64, f64)], range: Range<usize>, bit: u64) -> (Range<usize>, Range<usize>) {
    let start = range.start;
    let mid = start + records[range.clone()].partition_point(|(id, _)| id & bit == 0);
    (start..mid, mid..range.end)
}

/// Whether no pair of ids extending these prefixes can give a non-zero product.
fn is_pruned(kind: ProductKind, lhs_prefix: u64, rhs_prefix: u64) -> bool {
    let lhs_in_rhs = lhs_prefix.is_sub_pattern_of(rhs_prefix);
    let rhs_in_lhs = rhs_prefix.is_sub_pattern_of(lhs_prefix);
    match kind {
        ProductKind::Op => lhs_prefix & rhs_prefix != 0,
        ProductKind::Sp => lhs_prefix != rhs_prefix,
        ProductKind::Lcp => !lhs_in_rhs,
        ProductKind::Rcp => !rhs_in_lhs,
        ProductKind::Fdp | ProductKind::Hip => !lhs_in_rhs && !rhs_in_lhs,
        ProductKind::Gp | ProductKind::Acp | ProductKind::Cp => false,
    }
}

fn is_strictly_ascending(records: &[(u64, f64)]) -> bool {
    records.windows(2).all(|w| w[0].0 < w[1].0)
}

/// Product records of `kind` under `metric`.
///
/// Both slices must be sorted strictly ascending by id, as [`Multivector::sorted_terms`]
/// returns them.
///
/// # Panics
///
/// Panics if either slice is unsorted or repeats an id.
pub fn id_scalar_records<'a, M: Metric>(
    kind: ProductKind,
    metric: M,
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, M> {
    GbtProductIterator::new(kind, metric, lhs, rhs)
}

pub fn egp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Gp, Euclidean, lhs, rhs)
}

pub fn op_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Op, Euclidean, lhs, rhs)
}

pub fn esp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Sp, Euclidean, lhs, rhs)
}

pub fn elcp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Lcp, Euclidean, lhs, rhs)
}

pub fn ercp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Rcp, Euclidean, lhs, rhs)
}

pub fn efdp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Fdp, Euclidean, lhs, rhs)
}

pub fn ehip_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Hip, Euclidean, lhs, rhs)
}

pub fn eacp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Acp, Euclidean, lhs, rhs)
}

pub fn ecp_id_scalar_records<'a>(
    lhs: &'a [(u64, f64)],
    rhs: &'a [(u64, f64)],
) -> GbtProductIterator<'a, Euclidean> {
    id_scalar_records(ProductKind::Cp, Euclidean, lhs, rhs)
}

/// Summed product of two multivectors computed by traversal.
///
/// Any storage shape is accepted; the operands are brought into ascending id order first.
pub fn gbt_product<M: Metric>(
    kind: ProductKind,
    metric: M,
    lhs: &Multivector,
    rhs: &Multivector,
) -> TermsMultivector {
    let lhs = lhs.sorted_terms();
    let rhs = rhs.sorted_terms();
    id_scalar_records(kind, metric, &lhs, &rhs).collect()
}
