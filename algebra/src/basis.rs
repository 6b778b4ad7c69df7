//! Mapping between a basis blade's id, its (grade, index) pair and its name.
//!
//! Within a grade, blades are indexed by the combinatorial number system, which orders them
//! by ascending id. Lookups go through the tables of [`crate::lookup`] when the input is
//! covered and are computed otherwise.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::bits::{binomial, index_to_combinadic_pattern, low_mask, BitPattern};
use crate::error::{BasisError, Result};
use crate::{lookup, MAX_VSPACE_DIMENSION};

pub const MAX_BASIS_BLADE_ID: u64 = low_mask(MAX_VSPACE_DIMENSION);

pub fn is_valid_vspace_dimension(dim: u32) -> bool {
    (2..MAX_VSPACE_DIMENSION).contains(&dim)
}

pub fn is_valid_ga_space_dimension(size: u64) -> bool {
    size.is_power_of_two() && size <= MAX_BASIS_BLADE_ID
}

pub fn is_valid_basis_blade_id(dim: u32, id: u64) -> bool {
    dim <= MAX_VSPACE_DIMENSION && id.is_sub_pattern_of(low_mask(dim))
}

pub fn is_valid_basis_blade_grade_index(dim: u32, grade: u32, index: u64) -> bool {
    dim <= MAX_VSPACE_DIMENSION && grade <= dim && index < binomial(dim, grade)
}

fn check_dimension(dim: u32) -> Result<()> {
    if is_valid_vspace_dimension(dim) {
        Ok(())
    } else {
        Err(BasisError::InvalidDimension(dim))
    }
}

/// # Panics
///
/// Panics if the pair does not name a blade of a 63-dimensional space.
pub fn basis_blade_id(grade: u32, index: u64) -> u64 {
    assert!(
        is_valid_basis_blade_grade_index(MAX_VSPACE_DIMENSION, grade, index),
        "grade {grade} index {index} exceeds the basis blade id space"
    );
    lookup::id(grade, index).unwrap_or_else(|| index_to_combinadic_pattern(index, grade))
}

pub fn try_basis_blade_id(dim: u32, grade: u32, index: u64) -> Result<u64> {
    check_dimension(dim)?;
    if grade > dim {
        return Err(BasisError::InvalidGrade { dim, grade });
    }
    if index >= binomial(dim, grade) {
        return Err(BasisError::InvalidIndex { dim, grade, index });
    }
    Ok(basis_blade_id(grade, index))
}

fn assert_within_ceiling(id: u64) {
    assert!(id <= MAX_BASIS_BLADE_ID, "id {id:#x} exceeds the basis blade id space");
}

/// # Panics
///
/// Panics if `id` has bit 63 set.
pub fn basis_blade_grade(id: u64) -> u32 {
    assert_within_ceiling(id);
    lookup::grade(id).unwrap_or_else(|| id.count_ones())
}

/// # Panics
///
/// Panics if `id` has bit 63 set.
pub fn basis_blade_index(id: u64) -> u64 {
    assert_within_ceiling(id);
    lookup::index(id).unwrap_or_else(|| id.combinadic_index())
}

pub fn basis_blade_grade_index(id: u64) -> (u32, u64) {
    (basis_blade_grade(id), basis_blade_index(id))
}

pub fn try_basis_blade_grade_index(dim: u32, id: u64) -> Result<(u32, u64)> {
    check_dimension(dim)?;
    if !is_valid_basis_blade_id(dim, id) {
        return Err(BasisError::InvalidId { dim, id });
    }
    Ok(basis_blade_grade_index(id))
}

/// Ids of every blade of `grade` in a `dim` dimensional space, in index order.
///
/// # Panics
///
/// Panics if `dim` exceeds the 63 dimension ceiling.
pub fn basis_blade_ids_of_grade(dim: u32, grade: u32) -> GradeIds {
    assert!(dim <= MAX_VSPACE_DIMENSION, "dimension {dim} exceeds {MAX_VSPACE_DIMENSION}");
    GradeIds {
        next: low_mask(grade.min(dim)),
        remaining: binomial(dim, grade),
    }
}

pub fn try_basis_blade_ids_of_grade(dim: u32, grade: u32) -> Result<GradeIds> {
    check_dimension(dim)?;
    if grade > dim {
        return Err(BasisError::InvalidGrade { dim, grade });
    }
    Ok(basis_blade_ids_of_grade(dim, grade))
}

pub fn basis_blade_ids_sorted_by_grade(dim: u32) -> impl Iterator<Item = u64> + Clone {
    basis_blade_ids_of_grades(dim, 0..=dim)
}

pub fn basis_blade_ids_of_grades<I>(dim: u32, grades: I) -> impl Iterator<Item = u64> + Clone
where
    I: IntoIterator<Item = u32>,
    I::IntoIter: Clone,
{
    grades
        .into_iter()
        .flat_map(move |grade| basis_blade_ids_of_grade(dim, grade))
}

pub fn basis_blade_ids_grouped_by_grade<I>(dim: u32, grades: I) -> BTreeMap<u32, Vec<u64>>
where
    I: IntoIterator<Item = u32>,
{
    grades
        .into_iter()
        .unique()
        .map(|grade| (grade, basis_blade_ids_of_grade(dim, grade).collect()))
        .collect()
}

pub fn basis_vector_name(index: u32) -> String {
    format!("e{}", index + 1)
}

pub fn basis_blade_name(id: u64) -> String {
    if id == 0 {
        return "1".to_string();
    }
    id.bit_indices().map(basis_vector_name).join("^")
}

/// Lazily steps through the ids sharing one grade, each the next larger id with the same
/// number of set bits.
#[derive(Debug, Clone)]
pub struct GradeIds {
    next: u64,
    remaining: u64,
}

impl GradeIds {
    fn step(id: u64) -> u64 {
        let lowest = id & id.wrapping_neg();
        let ripple = id + lowest;
        (((ripple ^ id) >> 2) / lowest) | ripple
    }
}

impl Iterator for GradeIds {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next = Self::step(id);
        }
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
