//! Process-wide tables caching the basis blade computations of small dimensions.
//!
//! Every entry is produced by the compute path it stands in for, so a lookup either agrees
//! with the computed value or returns `None` and the caller computes.

#![cfg_attr(not(feature = "lookup-tables"), allow(dead_code))]

#[cfg(feature = "lookup-tables")]
use std::sync::OnceLock;

use crate::bits::{binomial, index_to_combinadic_pattern, BitPattern};
use crate::sign::{compute_is_negative_egp, compute_is_negative_egp_self};

/// Dimension covered by the per-id grade, index and self-product tables.
pub const LOOKUP_VSPACE_DIMENSION: u32 = 12;

/// Dimension covered by the pairwise geometric product sign table.
pub const LOOKUP_EGP_DIMENSION: u32 = 7;

pub(crate) struct LookupTables {
    grades: Box<[u8]>,
    indices: Box<[u32]>,
    negative_self: Box<[bool]>,
    ids_by_grade: Vec<Box<[u64]>>,
    negative_egp: Vec<Box<[bool]>>,
}

impl LookupTables {
    fn build() -> Self {
        let span = tracing::debug_span!("build_lookup_tables").entered();

        let size = 1usize << LOOKUP_VSPACE_DIMENSION;
        let ids = 0..size as u64;

        let grades: Box<[u8]> = ids.clone().map(|id| id.count_ones() as u8).collect();
        let indices: Box<[u32]> = ids.clone().map(|id| id.combinadic_index() as u32).collect();
        let negative_self: Box<[bool]> = ids.map(compute_is_negative_egp_self).collect();

        let ids_by_grade: Vec<Box<[u64]>> = (0..=LOOKUP_VSPACE_DIMENSION)
            .map(|grade| {
                (0..binomial(LOOKUP_VSPACE_DIMENSION, grade))
                    .map(|index| index_to_combinadic_pattern(index, grade))
                    .collect()
            })
            .collect();

        let egp_size = 1u64 << LOOKUP_EGP_DIMENSION;
        let negative_egp: Vec<Box<[bool]>> = (0..egp_size)
            .map(|id1| {
                (0..egp_size)
                    .map(|id2| compute_is_negative_egp(id1, id2))
                    .collect()
            })
            .collect();

        tracing::debug!(
            vspace_dim = LOOKUP_VSPACE_DIMENSION,
            egp_dim = LOOKUP_EGP_DIMENSION,
            "basis blade lookup tables built"
        );
        drop(span);

        LookupTables {
            grades,
            indices,
            negative_self,
            ids_by_grade,
            negative_egp,
        }
    }
}

#[cfg(feature = "lookup-tables")]
pub(crate) fn tables() -> Option<&'static LookupTables> {
    static TABLES: OnceLock<LookupTables> = OnceLock::new();
    Some(TABLES.get_or_init(LookupTables::build))
}

#[cfg(not(feature = "lookup-tables"))]
pub(crate) fn tables() -> Option<&'static LookupTables> {
    None
}

fn slot(id: u64) -> Option<usize> {
    usize::try_from(id).ok()
}

pub(crate) fn grade(id: u64) -> Option<u32> {
    let grade = tables()?.grades.get(slot(id)?)?;
    Some(u32::from(*grade))
}

pub(crate) fn index(id: u64) -> Option<u64> {
    let index = tables()?.indices.get(slot(id)?)?;
    Some(u64::from(*index))
}

pub(crate) fn id(grade: u32, index: u64) -> Option<u64> {
    let row = tables()?.ids_by_grade.get(grade as usize)?;
    row.get(slot(index)?).copied()
}

pub(crate) fn is_negative_egp_self(id: u64) -> Option<bool> {
    tables()?.negative_self.get(slot(id)?).copied()
}

pub(crate) fn is_negative_egp(id1: u64, id2: u64) -> Option<bool> {
    let row = tables()?.negative_egp.get(slot(id1)?)?;
    row.get(slot(id2)?).copied()
}

#[cfg(all(test, feature = "lookup-tables"))]
mod tests {
    use super::*;

    #[test]
    fn tables_are_built_once() {
        let a = tables().map(|t| t as *const LookupTables);
        let b = tables().map(|t| t as *const LookupTables);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn out_of_range_falls_through() {
        let size = 1u64 << LOOKUP_VSPACE_DIMENSION;
        assert_eq!(None, grade(size));
        assert_eq!(None, index(size));
        assert_eq!(None, is_negative_egp_self(size));
        assert_eq!(None, id(LOOKUP_VSPACE_DIMENSION + 1, 0));
        assert_eq!(None, id(1, u64::from(LOOKUP_VSPACE_DIMENSION)));

        let egp_size = 1u64 << LOOKUP_EGP_DIMENSION;
        assert_eq!(None, is_negative_egp(egp_size, 1));
        assert_eq!(None, is_negative_egp(1, egp_size));
        assert!(is_negative_egp(egp_size - 1, egp_size - 1).is_some());
    }

    #[test]
    fn id_table_agrees_with_computation() {
        for grade in 0..=LOOKUP_VSPACE_DIMENSION {
            for index in 0..binomial(LOOKUP_VSPACE_DIMENSION, grade) {
                assert_eq!(
                    Some(index_to_combinadic_pattern(index, grade)),
                    id(grade, index)
                );
            }
        }
    }

    #[test]
    fn per_id_tables_agree_with_computation() {
        for id in 0..1u64 << LOOKUP_VSPACE_DIMENSION {
            assert_eq!(Some(id.count_ones()), grade(id));
            assert_eq!(Some(id.combinadic_index()), index(id));
            assert_eq!(Some(compute_is_negative_egp_self(id)), is_negative_egp_self(id));
        }
    }

    #[test]
    fn egp_table_agrees_with_computation() {
        for id1 in 0..1u64 << LOOKUP_EGP_DIMENSION {
            for id2 in 0..1u64 << LOOKUP_EGP_DIMENSION {
                assert_eq!(Some(compute_is_negative_egp(id1, id2)), is_negative_egp(id1, id2));
            }
        }
    }
}
