use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::basis::{basis_blade_grade, basis_blade_grade_index, basis_blade_id, basis_blade_name};
use crate::bits::{BitIndices, BitPattern};
use crate::MAX_VSPACE_DIMENSION;

/// A single basis blade, caching as much of its id, grade and index as the variant carries.
///
/// Equality, ordering and hashing only look at the id, so blades compare equal across
/// variants.
#[derive(Copy, Clone)]
pub enum BasisBlade {
    Full { id: u64, grade: u32, index: u64 },
    Graded { grade: u32, index: u64 },
    Uniform { id: u64 },
}

impl BasisBlade {
    pub fn scalar() -> Self {
        Self::Uniform { id: 0 }
    }

    pub fn from_id(id: u64) -> Self {
        Self::Uniform { id }
    }

    pub fn from_grade_index(grade: u32, index: u64) -> Self {
        Self::Graded { grade, index }
    }

    /// # Panics
    ///
    /// Panics if `index` is not below [`MAX_VSPACE_DIMENSION`].
    pub fn vector(index: u32) -> Self {
        assert!(
            index < MAX_VSPACE_DIMENSION,
            "basis vector index {index} exceeds {MAX_VSPACE_DIMENSION} dimensions"
        );
        Self::Full {
            id: 1 << index,
            grade: 1,
            index: u64::from(index),
        }
    }

    pub fn id(self) -> u64 {
        match self {
            Self::Full { id, .. } | Self::Uniform { id } => id,
            Self::Graded { grade, index } => basis_blade_id(grade, index),
        }
    }

    pub fn grade(self) -> u32 {
        match self {
            Self::Full { grade, .. } | Self::Graded { grade, .. } => grade,
            Self::Uniform { id } => basis_blade_grade(id),
        }
    }

    pub fn index(self) -> u64 {
        self.grade_index().1
    }

    pub fn grade_index(self) -> (u32, u64) {
        match self {
            Self::Full { grade, index, .. } | Self::Graded { grade, index } => (grade, index),
            Self::Uniform { id } => basis_blade_grade_index(id),
        }
    }

    pub fn id_grade_index(self) -> (u64, u32, u64) {
        match self {
            Self::Full { id, grade, index } => (id, grade, index),
            Self::Graded { grade, index } => (basis_blade_id(grade, index), grade, index),
            Self::Uniform { id } => {
                let (grade, index) = basis_blade_grade_index(id);
                (id, grade, index)
            }
        }
    }

    pub fn to_full(self) -> Self {
        let (id, grade, index) = self.id_grade_index();
        Self::Full { id, grade, index }
    }

    pub fn to_graded(self) -> Self {
        let (grade, index) = self.grade_index();
        Self::Graded { grade, index }
    }

    pub fn to_uniform(self) -> Self {
        Self::Uniform { id: self.id() }
    }

    pub fn is_scalar(self) -> bool {
        self.id() == 0
    }

    /// Indices of the basis vectors whose outer product is this blade, lowest first.
    pub fn basis_vector_indices(self) -> BitIndices {
        self.id().bit_indices()
    }

    pub fn create_term<T>(self, scalar: T) -> BladeTerm<T> {
        BladeTerm {
            blade: self,
            scalar,
        }
    }
}

impl std::fmt::Debug for BasisBlade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (id, grade, index) = self.id_grade_index();
        write!(f, "BasisBlade({id:#b}, <{grade}, {index}>)")
    }
}

impl std::fmt::Display for BasisBlade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&basis_blade_name(self.id()))
    }
}

impl PartialEq for BasisBlade {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for BasisBlade {}

impl Hash for BasisBlade {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Ord for BasisBlade {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl PartialOrd for BasisBlade {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for BasisBlade {
    fn from(id: u64) -> Self {
        Self::from_id(id)
    }
}

/// A basis blade scaled by a coefficient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BladeTerm<T> {
    pub blade: BasisBlade,
    pub scalar: T,
}

impl<T> BladeTerm<T> {
    pub fn id(&self) -> u64 {
        self.blade.id()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn variants_agree_on_id_grade_index() {
        for id in 0u64..1 << 6 {
            let uniform = BasisBlade::from_id(id);
            let graded = uniform.to_graded();
            let full = graded.to_full();

            assert!(matches!(graded, BasisBlade::Graded { .. }));
            assert!(matches!(full, BasisBlade::Full { .. }));

            assert_eq!(uniform.id_grade_index(), graded.id_grade_index());
            assert_eq!(uniform.id_grade_index(), full.id_grade_index());
            assert_eq!(id, full.to_uniform().id());
            assert_eq!(id.count_ones(), graded.grade());
        }
    }

    #[test]
    fn equality_across_variants() {
        let e13 = BasisBlade::from_id(0b101);
        assert_eq!(e13, BasisBlade::from_grade_index(2, 1));
        assert_eq!(e13, e13.to_full());
        assert_ne!(e13, BasisBlade::from_grade_index(2, 2));

        let set = [e13, e13.to_full(), e13.to_graded()]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(1, set.len());
    }

    #[test]
    fn ordering_by_id() {
        let mut blades = vec![
            BasisBlade::from_grade_index(2, 0),
            BasisBlade::vector(2),
            BasisBlade::scalar(),
        ];
        blades.sort();
        assert_eq!(vec![0, 0b011, 0b100], blades.iter().map(|b| b.id()).collect::<Vec<_>>());
    }

    #[test]
    fn basis_vector_decomposition() {
        let blade = BasisBlade::from_grade_index(3, 0);
        assert_eq!(vec![0, 1, 2], blade.basis_vector_indices().collect::<Vec<_>>());
        assert_eq!(0, BasisBlade::scalar().basis_vector_indices().count());
        assert!(BasisBlade::scalar().is_scalar());
    }

    #[test]
    fn vector_blade() {
        let e3 = BasisBlade::vector(2);
        assert_eq!((0b100, 1, 2), e3.id_grade_index());
        assert_eq!(e3, BasisBlade::from(0b100));
    }

    #[test]
    fn last_vector_blade() {
        assert_eq!((1 << 62, 1, 62), BasisBlade::vector(62).id_grade_index());
    }

    #[test]
    #[should_panic]
    fn vector_blade_past_ceiling_panics() {
        BasisBlade::vector(63);
    }

    #[test]
    #[should_panic]
    fn vector_blade_does_not_wrap() {
        BasisBlade::vector(70);
    }

    #[test]
    fn terms_and_display() {
        let term = BasisBlade::from_id(0b110).create_term(2.5);
        assert_eq!(0b110, term.id());
        assert_eq!(2.5, term.scalar);
        assert_eq!("e2^e3", term.blade.to_string());
        assert_eq!("BasisBlade(0b110, <2, 2>)", format!("{:?}", term.blade));
    }
}
