//! Sign of the Euclidean geometric product of two basis blades.
//!
//! For blades `A = e_a1 ... e_ak` and `B = e_b1 ... e_bm` the product `AB` is reordered into
//! canonical order by swapping neighbouring distinct vectors (`e_i e_j = -e_j e_i`) and
//! cancelling repeated ones (`e_i e_i = 1`). Walking the vectors of `B` from the lowest, each
//! one has to pass every higher vector still present in `A`, after which it cancels against
//! (or joins) its partner. The parity of the number of passes is the sign.

use crate::basis::basis_blade_grade;
use crate::bits::BitPattern;
use crate::{lookup, IsEven};

/// Bits strictly above a single-bit pattern.
fn higher_than(bit: u64) -> u64 {
    !(bit | (bit - 1))
}

pub fn compute_is_negative_egp(id1: u64, id2: u64) -> bool {
    if id1 == 0 || id2 == 0 {
        return false;
    }

    let mut lhs = id1;
    let mut rhs = id2;
    let mut negative = false;
    while let Some((bit, rest)) = rhs.split_smallest() {
        let swaps = (lhs & higher_than(bit)).count_ones();
        if !swaps.is_even() {
            negative = !negative;
        }
        lhs ^= bit;
        rhs = rest;
    }
    negative
}

/// Sign of a blade multiplied by itself.
pub fn compute_is_negative_egp_self(id: u64) -> bool {
    compute_is_negative_egp(id, id)
}

pub fn compute_egp_signature(id1: u64, id2: u64) -> i32 {
    if id1 == 0 || id2 == 0 {
        return 1;
    }

    let mut lhs = id1;
    let mut rhs = id2;
    let mut signature = 1;
    while let Some((bit, rest)) = rhs.split_smallest() {
        let swaps = (lhs & higher_than(bit)).count_ones();
        if !swaps.is_even() {
            signature = -signature;
        }
        lhs ^= bit;
        rhs = rest;
    }
    signature
}

pub fn compute_egp_signature_self(id: u64) -> i32 {
    compute_egp_signature(id, id)
}

pub fn is_negative_egp(id1: u64, id2: u64) -> bool {
    lookup::is_negative_egp(id1, id2).unwrap_or_else(|| compute_is_negative_egp(id1, id2))
}

pub fn is_negative_egp_self(id: u64) -> bool {
    lookup::is_negative_egp_self(id).unwrap_or_else(|| compute_is_negative_egp_self(id))
}

pub fn egp_signature(id1: u64, id2: u64) -> i32 {
    to_signature(is_negative_egp(id1, id2))
}

pub fn egp_signature_self(id: u64) -> i32 {
    to_signature(is_negative_egp_self(id))
}

pub(crate) const fn to_signature(negative: bool) -> i32 {
    if negative {
        -1
    } else {
        1
    }
}

/// `++--` repeating with period 4
pub const fn grade_has_negative_reverse(grade: u32) -> bool {
    grade % 4 >= 2
}

/// `+-+-` repeating with period 4
pub const fn grade_has_negative_grade_involution(grade: u32) -> bool {
    grade % 2 == 1
}

/// `+--+` repeating with period 4
pub const fn grade_has_negative_clifford_conjugate(grade: u32) -> bool {
    matches!(grade % 4, 1 | 2)
}

pub fn is_negative_reverse(id: u64) -> bool {
    grade_has_negative_reverse(basis_blade_grade(id))
}

pub fn is_negative_grade_involution(id: u64) -> bool {
    grade_has_negative_grade_involution(basis_blade_grade(id))
}

pub fn is_negative_clifford_conjugate(id: u64) -> bool {
    grade_has_negative_clifford_conjugate(basis_blade_grade(id))
}

/// Sign of `A ~B` for basis blades `A` and `B`.
pub fn egp_reverse_signature(id1: u64, id2: u64) -> i32 {
    let signature = egp_signature(id1, id2);
    if is_negative_reverse(id2) {
        -signature
    } else {
        signature
    }
}

/// Sign of `A ~A`, which is positive for every Euclidean basis blade.
pub fn enorm_squared_signature(id: u64) -> i32 {
    let signature = egp_signature_self(id);
    if is_negative_reverse(id) {
        -signature
    } else {
        signature
    }
}
