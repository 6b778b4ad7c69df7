//! Which bilinear products of two basis blades survive, and with what sign.
//!
//! Every product is the geometric product restricted by a test on the two ids. A product
//! signature is the geometric product signature when the test passes and 0 otherwise.

use strum::EnumIter;

use crate::bits::BitPattern;
use crate::sign::{egp_signature, is_negative_egp};

pub fn is_nonzero_op(id1: u64, id2: u64) -> bool {
    id1 & id2 == 0
}

pub fn is_nonzero_esp(id1: u64, id2: u64) -> bool {
    id1 == id2
}

/// `id1` is contained in `id2`
pub fn is_nonzero_elcp(id1: u64, id2: u64) -> bool {
    id1.is_sub_pattern_of(id2)
}

/// `id2` is contained in `id1`
pub fn is_nonzero_ercp(id1: u64, id2: u64) -> bool {
    id2.is_sub_pattern_of(id1)
}

pub fn is_nonzero_efdp(id1: u64, id2: u64) -> bool {
    is_nonzero_elcp(id1, id2) || is_nonzero_ercp(id1, id2)
}

pub fn is_nonzero_ehip(id1: u64, id2: u64) -> bool {
    id1 != 0 && id2 != 0 && is_nonzero_efdp(id1, id2)
}

pub fn is_nonzero_eacp(id1: u64, id2: u64) -> bool {
    is_negative_egp(id1, id2) == is_negative_egp(id2, id1)
}

pub fn is_nonzero_ecp(id1: u64, id2: u64) -> bool {
    is_negative_egp(id1, id2) != is_negative_egp(id2, id1)
}

fn masked(nonzero: bool, id1: u64, id2: u64) -> i32 {
    if nonzero {
        egp_signature(id1, id2)
    } else {
        0
    }
}

pub fn op_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_op(id1, id2), id1, id2)
}

pub fn esp_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_esp(id1, id2), id1, id2)
}

pub fn elcp_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_elcp(id1, id2), id1, id2)
}

pub fn ercp_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_ercp(id1, id2), id1, id2)
}

pub fn efdp_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_efdp(id1, id2), id1, id2)
}

pub fn ehip_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_ehip(id1, id2), id1, id2)
}

pub fn eacp_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_eacp(id1, id2), id1, id2)
}

pub fn ecp_signature(id1: u64, id2: u64) -> i32 {
    masked(is_nonzero_ecp(id1, id2), id1, id2)
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, EnumIter)]
pub enum ProductKind {
    /// Geometric
    Gp,
    /// Outer
    Op,
    /// Scalar
    Sp,
    /// Left contraction
    Lcp,
    /// Right contraction
    Rcp,
    /// Fat dot
    Fdp,
    /// Hestenes inner
    Hip,
    /// Anti-commutator
    Acp,
    /// Commutator
    Cp,
}

impl ProductKind {
    pub fn is_nonzero(self, id1: u64, id2: u64) -> bool {
        match self {
            ProductKind::Gp => true,
            ProductKind::Op => is_nonzero_op(id1, id2),
            ProductKind::Sp => is_nonzero_esp(id1, id2),
            ProductKind::Lcp => is_nonzero_elcp(id1, id2),
            ProductKind::Rcp => is_nonzero_ercp(id1, id2),
            ProductKind::Fdp => is_nonzero_efdp(id1, id2),
            ProductKind::Hip => is_nonzero_ehip(id1, id2),
            ProductKind::Acp => is_nonzero_eacp(id1, id2),
            ProductKind::Cp => is_nonzero_ecp(id1, id2),
        }
    }

    /// Euclidean signature of the product of two basis blades: -1, 0 or 1.
    pub fn signature(self, id1: u64, id2: u64) -> i32 {
        masked(self.is_nonzero(id1, id2), id1, id2)
    }

    /// Whether every pair of blades with these grades has a zero product.
    pub fn is_zero_grade_pair(self, grade1: u32, grade2: u32) -> bool {
        match self {
            ProductKind::Sp => grade1 != grade2,
            ProductKind::Lcp => grade1 > grade2,
            ProductKind::Rcp => grade1 < grade2,
            ProductKind::Hip => grade1 == 0 || grade2 == 0,
            ProductKind::Gp
            | ProductKind::Op
            | ProductKind::Fdp
            | ProductKind::Acp
            | ProductKind::Cp => false,
        }
    }

    /// Products whose value for two blades of equal grade is their scalar product.
    pub fn is_scalar_for_equal_grades(self, grade: u32) -> bool {
        match self {
            ProductKind::Sp | ProductKind::Lcp | ProductKind::Rcp | ProductKind::Fdp => true,
            ProductKind::Hip => grade > 0,
            ProductKind::Gp | ProductKind::Op | ProductKind::Acp | ProductKind::Cp => false,
        }
    }
}
