//! Storage shapes for multivectors over the basis blades of a Euclidean or metric space.
//!
//! Every shape can list its terms as `(id, scalar)` records. [`Multivector::sorted_terms`]
//! returns them in strictly ascending id order, which is what the traversal products expect.

use std::collections::BTreeMap;
use std::fmt;

use algebra::basis::{
    basis_blade_grade, basis_blade_grade_index, basis_blade_id, basis_blade_name,
    try_basis_blade_id,
};
use algebra::sign::{
    is_negative_clifford_conjugate, is_negative_grade_involution, is_negative_reverse,
};
use algebra::{Metric, MAX_VSPACE_DIMENSION};

use crate::error::{Error, Result};

/// A grade 1 multivector, keyed by basis vector index.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector {
    scalars: BTreeMap<u32, f64>,
}

impl Vector {
    /// Duplicate indices are summed.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below [`MAX_VSPACE_DIMENSION`].
    pub fn new<I: IntoIterator<Item = (u32, f64)>>(scalars: I) -> Self {
        let mut map = BTreeMap::new();
        for (index, scalar) in scalars {
            assert!(
                index < MAX_VSPACE_DIMENSION,
                "basis vector index {index} exceeds {MAX_VSPACE_DIMENSION} dimensions"
            );
            *map.entry(index).or_insert(0.0) += scalar;
        }
        Self { scalars: map }
    }

    /// Like [`Vector::new`], rejecting any index outside a `dim` dimensional space.
    pub fn try_new<I>(dim: u32, scalars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let scalars = scalars
            .into_iter()
            .map(|(index, scalar)| -> Result<(u32, f64)> {
                try_basis_blade_id(dim, 1, u64::from(index))?;
                Ok((index, scalar))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(scalars))
    }

    pub fn from_slice(scalars: &[f64]) -> Self {
        Self::new((0..).zip(scalars.iter().copied()))
    }

    pub fn get(&self, index: u32) -> f64 {
        self.scalars.get(&index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// `(index, scalar)` pairs in ascending index order.
    pub fn index_scalars(&self) -> impl Iterator<Item = (u32, f64)> + Clone + '_ {
        self.scalars.iter().map(|(i, s)| (*i, *s))
    }

    /// `(id, scalar)` records in ascending id order.
    pub fn terms(&self) -> impl Iterator<Item = (u64, f64)> + Clone + '_ {
        self.scalars.iter().map(|(i, s)| (1u64 << *i, *s))
    }

    /// Metric inner product of two vectors.
    pub fn dot<M: Metric + ?Sized>(&self, metric: &M, rhs: &Vector) -> f64 {
        self.scalars
            .iter()
            .filter_map(|(i, a)| {
                let b = rhs.scalars.get(i)?;
                Some(a * b * f64::from(metric.square(*i).signature()))
            })
            .sum()
    }

    pub fn to_kvector(&self) -> KVector {
        KVector::new(1, self.index_scalars().map(|(i, s)| (u64::from(i), s)))
    }
}

/// A multivector of a single grade, keyed by basis blade index within that grade.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct KVector {
    grade: u32,
    scalars: BTreeMap<u64, f64>,
}

impl KVector {
    /// Duplicate indices are summed.
    pub fn new<I: IntoIterator<Item = (u64, f64)>>(grade: u32, scalars: I) -> Self {
        let mut map = BTreeMap::new();
        for (index, scalar) in scalars {
            *map.entry(index).or_insert(0.0) += scalar;
        }
        Self { grade, scalars: map }
    }

    /// Like [`KVector::new`], rejecting any index outside the grade of a `dim` dimensional space.
    pub fn try_new<I>(dim: u32, grade: u32, scalars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let scalars = scalars
            .into_iter()
            .map(|(index, scalar)| -> Result<(u64, f64)> {
                try_basis_blade_id(dim, grade, index)?;
                Ok((index, scalar))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(grade, scalars))
    }

    pub fn zero(grade: u32) -> Self {
        Self {
            grade,
            scalars: BTreeMap::new(),
        }
    }

    /// Builds a k-vector from `(id, scalar)` records that all share one grade.
    ///
    /// An empty input gives the zero scalar.
    pub fn from_terms<I: IntoIterator<Item = (u64, f64)>>(terms: I) -> Result<Self> {
        let mut grade = None;
        let mut scalars = Vec::new();
        for (id, scalar) in terms {
            let (g, index) = basis_blade_grade_index(id);
            match grade {
                None => grade = Some(g),
                Some(first) if first != g => return Err(Error::MixedGrades(first, g)),
                Some(_) => {}
            }
            scalars.push((index, scalar));
        }
        Ok(Self::new(grade.unwrap_or(0), scalars))
    }

    pub fn grade(&self) -> u32 {
        self.grade
    }

    pub fn get(&self, index: u64) -> f64 {
        self.scalars.get(&index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn index_scalars(&self) -> impl Iterator<Item = (u64, f64)> + Clone + '_ {
        self.scalars.iter().map(|(i, s)| (*i, *s))
    }

    /// `(id, scalar)` records. Indices ascend with ids inside a grade, so these are sorted.
    pub fn terms(&self) -> impl Iterator<Item = (u64, f64)> + Clone + '_ {
        let grade = self.grade;
        self.scalars
            .iter()
            .map(move |(i, s)| (basis_blade_id(grade, *i), *s))
    }

    /// Scalar product with a k-vector of the same grade under `metric`.
    pub fn scalar_product<M: Metric + ?Sized>(&self, metric: &M, rhs: &KVector) -> f64 {
        if self.grade != rhs.grade {
            return 0.0;
        }
        let grade = self.grade;
        self.scalars
            .iter()
            .filter_map(|(i, a)| {
                let b = rhs.scalars.get(i)?;
                let id = basis_blade_id(grade, *i);
                Some(a * b * f64::from(metric.gp_signature(id, id)))
            })
            .sum()
    }

    fn add_assign(&mut self, rhs: &KVector) {
        debug_assert_eq!(self.grade, rhs.grade);
        for (index, scalar) in rhs.index_scalars() {
            *self.scalars.entry(index).or_insert(0.0) += scalar;
        }
    }
}

/// A multivector stored as one k-vector per present grade.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GradedMultivector {
    kvectors: BTreeMap<u32, KVector>,
}

impl GradedMultivector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms are bucketed by grade; duplicate ids are summed.
    pub fn from_terms<I: IntoIterator<Item = (u64, f64)>>(terms: I) -> Self {
        let mut graded = Self::new();
        for (id, scalar) in terms {
            let (grade, index) = basis_blade_grade_index(id);
            graded.add_kvector(&KVector::new(grade, [(index, scalar)]));
        }
        graded
    }

    /// Adds `kvector` into the k-vector of the same grade.
    pub fn add_kvector(&mut self, kvector: &KVector) {
        self.kvectors
            .entry(kvector.grade())
            .or_insert_with(|| KVector::zero(kvector.grade()))
            .add_assign(kvector);
    }

    pub fn get(&self, grade: u32) -> Option<&KVector> {
        self.kvectors.get(&grade)
    }

    /// `(grade, k-vector)` pairs in ascending grade order.
    pub fn kvectors(&self) -> impl Iterator<Item = (u32, &KVector)> + Clone + '_ {
        self.kvectors.iter().map(|(g, k)| (*g, k))
    }

    /// `(id, scalar)` records grouped by ascending grade.
    pub fn terms(&self) -> impl Iterator<Item = (u64, f64)> + Clone + '_ {
        self.kvectors.values().flat_map(KVector::terms)
    }
}

/// A multivector stored as a sparse id to scalar map.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TermsMultivector {
    scalars: BTreeMap<u64, f64>,
}

impl TermsMultivector {
    pub fn get(&self, id: u64) -> f64 {
        self.scalars.get(&id).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// `(id, scalar)` records in ascending id order.
    pub fn terms(&self) -> impl Iterator<Item = (u64, f64)> + Clone + '_ {
        self.scalars.iter().map(|(id, s)| (*id, *s))
    }
}

/// Sums duplicate ids and drops zero sums.
impl FromIterator<(u64, f64)> for TermsMultivector {
    fn from_iter<I: IntoIterator<Item = (u64, f64)>>(iter: I) -> Self {
        let mut composer = TermsComposer::new();
        composer.extend(iter);
        composer.into_terms()
    }
}

/// Accumulates `(id, scalar)` records into a sparse sum.
#[derive(Debug, Default, Clone)]
pub struct TermsComposer {
    scalars: BTreeMap<u64, f64>,
}

impl TermsComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_term(&mut self, id: u64, scalar: f64) {
        *self.scalars.entry(id).or_insert(0.0) += scalar;
    }

    pub fn add_terms<I: IntoIterator<Item = (u64, f64)>>(&mut self, terms: I) {
        for (id, scalar) in terms {
            self.add_term(id, scalar);
        }
    }

    pub fn remove_zero_terms(&mut self) -> &mut Self {
        self.scalars.retain(|_, s| *s != 0.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    pub fn into_terms(mut self) -> TermsMultivector {
        self.remove_zero_terms();
        TermsMultivector {
            scalars: self.scalars,
        }
    }

    /// Picks the tightest shape holding the non-zero terms.
    pub fn into_multivector(mut self) -> Multivector {
        self.remove_zero_terms();

        let mut grades = self.scalars.keys().map(|id| basis_blade_grade(*id));
        let first = match grades.next() {
            None => return Multivector::Scalar(0.0),
            Some(first) => first,
        };

        if grades.any(|g| g != first) {
            return Multivector::Graded(GradedMultivector::from_terms(self.scalars));
        }

        match first {
            0 => Multivector::Scalar(self.scalars.get(&0).copied().unwrap_or_default()),
            1 => Multivector::Vector(Vector::new(
                self.scalars.into_iter().map(|(id, s)| (id.trailing_zeros(), s)),
            )),
            _ => Multivector::KVector(KVector::new(
                first,
                self.scalars
                    .into_iter()
                    .map(|(id, s)| (basis_blade_grade_index(id).1, s)),
            )),
        }
    }
}

impl Extend<(u64, f64)> for TermsComposer {
    fn extend<I: IntoIterator<Item = (u64, f64)>>(&mut self, iter: I) {
        self.add_terms(iter);
    }
}

/// A multivector in one of several storage shapes.
///
/// Equality compares the non-zero terms, so the same value held in two shapes is equal.
#[derive(Debug, Clone)]
pub enum Multivector {
    Scalar(f64),
    Vector(Vector),
    KVector(KVector),
    Graded(GradedMultivector),
    Terms(TermsMultivector),
}

impl Default for Multivector {
    fn default() -> Self {
        Self::Scalar(0.0)
    }
}

impl Multivector {
    pub fn scalar(scalar: f64) -> Self {
        Self::Scalar(scalar)
    }

    pub fn zero() -> Self {
        Self::Scalar(0.0)
    }

    /// Sparse multivector from `(id, scalar)` records.
    pub fn from_terms<I: IntoIterator<Item = (u64, f64)>>(terms: I) -> Self {
        Self::Terms(terms.into_iter().collect())
    }

    /// `(id, scalar)` records in storage order, zeros included.
    pub fn terms(&self) -> Box<dyn Iterator<Item = (u64, f64)> + '_> {
        match self {
            Self::Scalar(s) => Box::new(std::iter::once((0, *s))),
            Self::Vector(v) => Box::new(v.terms()),
            Self::KVector(k) => Box::new(k.terms()),
            Self::Graded(g) => Box::new(g.terms()),
            Self::Terms(t) => Box::new(t.terms()),
        }
    }

    /// Non-zero `(id, scalar)` records, strictly ascending by id.
    pub fn sorted_terms(&self) -> Vec<(u64, f64)> {
        let mut terms = self.terms().filter(|(_, s)| *s != 0.0).collect::<Vec<_>>();
        if let Self::Graded(_) = self {
            terms.sort_unstable_by_key(|(id, _)| *id);
        }
        terms
    }

    pub fn get(&self, id: u64) -> f64 {
        match self {
            Self::Scalar(s) if id == 0 => *s,
            Self::Scalar(_) => 0.0,
            Self::Vector(v) if id.count_ones() == 1 => v.get(id.trailing_zeros()),
            Self::Vector(_) => 0.0,
            Self::KVector(k) => {
                let (grade, index) = basis_blade_grade_index(id);
                if grade == k.grade() {
                    k.get(index)
                } else {
                    0.0
                }
            }
            Self::Graded(g) => {
                let (grade, index) = basis_blade_grade_index(id);
                g.get(grade).map_or(0.0, |k| k.get(index))
            }
            Self::Terms(t) => t.get(id),
        }
    }

    pub fn scalar_part(&self) -> f64 {
        self.get(0)
    }

    pub fn is_zero(&self) -> bool {
        self.terms().all(|(_, s)| s == 0.0)
    }

    /// Grade `k` part.
    pub fn grade(&self, k: u32) -> KVector {
        KVector::new(
            k,
            self.terms()
                .filter(|(id, _)| id.count_ones() == k)
                .map(|(id, s)| (basis_blade_grade_index(id).1, s)),
        )
    }

    pub fn to_terms(&self) -> TermsMultivector {
        self.terms().collect()
    }

    pub fn to_graded(&self) -> GradedMultivector {
        GradedMultivector::from_terms(self.terms())
    }

    /// The value as a single k-vector, if it has that shape.
    pub(crate) fn as_kvector(&self) -> Option<std::borrow::Cow<'_, KVector>> {
        use std::borrow::Cow;
        match self {
            Self::Scalar(s) => Some(Cow::Owned(KVector::new(0, [(0, *s)]))),
            Self::Vector(v) => Some(Cow::Owned(v.to_kvector())),
            Self::KVector(k) => Some(Cow::Borrowed(k)),
            Self::Graded(_) | Self::Terms(_) => None,
        }
    }

    /// The value grouped by grade, unless it is stored as loose terms.
    pub(crate) fn as_graded(&self) -> Option<std::borrow::Cow<'_, GradedMultivector>> {
        use std::borrow::Cow;
        match self {
            Self::Graded(g) => Some(Cow::Borrowed(g)),
            Self::Terms(_) => None,
            _ => {
                let mut graded = GradedMultivector::new();
                graded.add_kvector(self.as_kvector()?.as_ref());
                Some(Cow::Owned(graded))
            }
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        self.map_scalars(|_, s| s * factor)
    }

    pub fn reverse(&self) -> Self {
        self.map_scalars(|id, s| if is_negative_reverse(id) { -s } else { s })
    }

    pub fn grade_involution(&self) -> Self {
        self.map_scalars(|id, s| if is_negative_grade_involution(id) { -s } else { s })
    }

    pub fn clifford_conjugate(&self) -> Self {
        self.map_scalars(|id, s| if is_negative_clifford_conjugate(id) { -s } else { s })
    }

    /// Applies `f(id, scalar)` to every stored scalar, keeping the shape.
    fn map_scalars<F: Fn(u64, f64) -> f64>(&self, f: F) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(f(0, *s)),
            Self::Vector(v) => Self::Vector(Vector {
                scalars: v.index_scalars().map(|(i, s)| (i, f(1u64 << i, s))).collect(),
            }),
            Self::KVector(k) => Self::KVector(KVector {
                grade: k.grade,
                scalars: k
                    .index_scalars()
                    .map(|(i, s)| (i, f(basis_blade_id(k.grade, i), s)))
                    .collect(),
            }),
            Self::Graded(g) => {
                let kvectors = g.kvectors().map(|(grade, k)| {
                    let scalars = k
                        .index_scalars()
                        .map(|(i, s)| (i, f(basis_blade_id(grade, i), s)))
                        .collect();
                    (grade, KVector { grade, scalars })
                });
                Self::Graded(GradedMultivector {
                    kvectors: kvectors.collect(),
                })
            }
            Self::Terms(t) => Self::Terms(TermsMultivector {
                scalars: t.terms().map(|(id, s)| (id, f(id, s))).collect(),
            }),
        }
    }
}

impl PartialEq for Multivector {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_terms() == other.sorted_terms()
    }
}

impl From<f64> for Multivector {
    fn from(scalar: f64) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Vector> for Multivector {
    fn from(vector: Vector) -> Self {
        Self::Vector(vector)
    }
}

impl From<KVector> for Multivector {
    fn from(kvector: KVector) -> Self {
        Self::KVector(kvector)
    }
}

impl From<GradedMultivector> for Multivector {
    fn from(graded: GradedMultivector) -> Self {
        Self::Graded(graded)
    }
}

impl From<TermsMultivector> for Multivector {
    fn from(terms: TermsMultivector) -> Self {
        Self::Terms(terms)
    }
}

impl std::ops::Add for &Multivector {
    type Output = Multivector;
    fn add(self, rhs: &Multivector) -> Multivector {
        let mut composer = TermsComposer::new();
        composer.extend(self.terms());
        composer.extend(rhs.terms());
        composer.into_multivector()
    }
}

impl std::ops::Sub for &Multivector {
    type Output = Multivector;
    fn sub(self, rhs: &Multivector) -> Multivector {
        let mut composer = TermsComposer::new();
        composer.extend(self.terms());
        composer.extend(rhs.terms().map(|(id, s)| (id, -s)));
        composer.into_multivector()
    }
}

impl std::ops::Neg for &Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        self.scale(-1.0)
    }
}

impl std::ops::Mul<f64> for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: f64) -> Multivector {
        self.scale(rhs)
    }
}

/// Non-zero terms in ascending id order, such as `2 + 3e1 - e1^e2`.
impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let terms = self.sorted_terms();
        if terms.is_empty() {
            return f.write_str("0");
        }
        for (n, (id, scalar)) in terms.into_iter().enumerate() {
            let magnitude = scalar.abs();
            match (n, scalar < 0.0) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            if id == 0 {
                write!(f, "{magnitude}")?;
            } else if magnitude == 1.0 {
                f.write_str(&basis_blade_name(id))?;
            } else {
                write!(f, "{magnitude}{}", basis_blade_name(id))?;
            }
        }
        Ok(())
    }
}
