use crate::bits::BitPattern;
use crate::products::ProductKind;
use crate::sign::egp_signature;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Square {
    #[default]
    Pos,
    Neg,
    Zero,
}

impl Square {
    pub const fn signature(self) -> i32 {
        match self {
            Self::Pos => 1,
            Self::Neg => -1,
            Self::Zero => 0,
        }
    }
}

/// An orthogonal metric, given by what each basis vector squares to.
pub trait Metric {
    fn square(&self, index: u32) -> Square;

    /// Product of the squares of the basis vectors common to both blades.
    fn shared_signature(&self, id1: u64, id2: u64) -> i32 {
        let mut signature = 1;
        for index in (id1 & id2).bit_indices() {
            match self.square(index) {
                Square::Pos => {}
                Square::Neg => signature = -signature,
                Square::Zero => return 0,
            }
        }
        signature
    }

    /// Signature of the geometric product of two basis blades under this metric.
    fn gp_signature(&self, id1: u64, id2: u64) -> i32 {
        match self.shared_signature(id1, id2) {
            0 => 0,
            shared => shared * egp_signature(id1, id2),
        }
    }

    fn product_signature(&self, kind: ProductKind, id1: u64, id2: u64) -> i32 {
        if kind.is_nonzero(id1, id2) {
            self.gp_signature(id1, id2)
        } else {
            0
        }
    }
}

impl<M: Metric + ?Sized> Metric for &M {
    fn square(&self, index: u32) -> Square {
        (**self).square(index)
    }

    fn shared_signature(&self, id1: u64, id2: u64) -> i32 {
        (**self).shared_signature(id1, id2)
    }

    fn gp_signature(&self, id1: u64, id2: u64) -> i32 {
        (**self).gp_signature(id1, id2)
    }

    fn product_signature(&self, kind: ProductKind, id1: u64, id2: u64) -> i32 {
        (**self).product_signature(kind, id1, id2)
    }
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Euclidean;

impl Metric for Euclidean {
    fn square(&self, _index: u32) -> Square {
        Square::Pos
    }

    fn shared_signature(&self, _id1: u64, _id2: u64) -> i32 {
        1
    }

    fn gp_signature(&self, id1: u64, id2: u64) -> i32 {
        egp_signature(id1, id2)
    }
}

/// Explicit squares for the first `dim` basis vectors; any later basis vector squares to +1.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Signature {
    squares: Vec<Square>,
}

impl Signature {
    /// `p` positive, then `q` negative, then `r` null basis vectors.
    pub fn new(p: u32, q: u32, r: u32) -> Self {
        let pos = std::iter::repeat(Square::Pos).take(p as usize);
        let neg = std::iter::repeat(Square::Neg).take(q as usize);
        let zero = std::iter::repeat(Square::Zero).take(r as usize);
        pos.chain(neg).chain(zero).collect()
    }

    pub fn from_squares<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        Self {
            squares: squares.into_iter().collect(),
        }
    }

    pub fn dim(&self) -> u32 {
        self.squares.len() as u32
    }

    pub fn has_negative_bases(&self) -> bool {
        self.squares.iter().any(|s| *s == Square::Neg)
    }

    pub fn is_degenerate(&self) -> bool {
        self.squares.iter().any(|s| *s == Square::Zero)
    }
}

impl FromIterator<Square> for Signature {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        Signature::from_squares(iter)
    }
}

impl Metric for Signature {
    fn square(&self, index: u32) -> Square {
        self.squares.get(index as usize).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::tests::ids;

    #[test]
    fn euclidean_matches_default_provided_methods() {
        let explicit = Signature::new(6, 0, 0);
        for id1 in ids(6) {
            for id2 in ids(6) {
                assert_eq!(explicit.gp_signature(id1, id2), Euclidean.gp_signature(id1, id2));
                for kind in ProductKind::iter() {
                    assert_eq!(kind.signature(id1, id2), Euclidean.product_signature(kind, id1, id2));
                }
            }
        }
    }

    #[test]
    fn minkowski_plane() {
        let metric = Signature::new(1, 1, 0);
        let e1 = 0b01;
        let e2 = 0b10;
        let e12 = 0b11;
        assert_eq!(1, metric.gp_signature(e1, e1));
        assert_eq!(-1, metric.gp_signature(e2, e2));
        assert_eq!(1, metric.gp_signature(e12, e12));
        assert_eq!(1, metric.gp_signature(e1, e2));
        assert_eq!(-1, metric.gp_signature(e2, e1));
        assert_eq!(1, metric.product_signature(ProductKind::Lcp, e2, e12));
        assert!(metric.has_negative_bases());
        assert!(!metric.is_degenerate());
    }

    #[test]
    fn null_basis_vector_annihilates() {
        let metric = Signature::new(3, 0, 1);
        let e4 = 0b1000;
        let e14 = 0b1001;
        assert_eq!(0, metric.gp_signature(e4, e4));
        assert_eq!(0, metric.gp_signature(e14, e4));
        assert_eq!(1, metric.gp_signature(0b0001, e4));
        assert_eq!(0, metric.product_signature(ProductKind::Sp, e14, e14));
        assert!(metric.is_degenerate());
    }

    #[test]
    fn undeclared_bases_are_positive() {
        let metric = Signature::from_squares([Square::Neg]);
        assert_eq!(1, metric.dim());
        assert_eq!(Square::Neg, metric.square(0));
        assert_eq!(Square::Pos, metric.square(5));
    }

    #[test]
    fn metric_by_reference() {
        fn square_of_e1<M: Metric>(metric: M) -> i32 {
            metric.gp_signature(0b01, 0b01)
        }

        let metric = Signature::new(0, 2, 0);
        let by_ref: &dyn Metric = &metric;
        assert_eq!(-1, square_of_e1(&metric));
        assert_eq!(-1, square_of_e1(by_ref));
        assert_eq!(1, square_of_e1(&Euclidean));
        assert_eq!(-1, Square::Neg.signature());
    }

    /// Squares say Euclidean, every override says otherwise.
    struct Overridden;

    impl Metric for Overridden {
        fn square(&self, _index: u32) -> Square {
            Square::Pos
        }

        fn shared_signature(&self, _id1: u64, _id2: u64) -> i32 {
            -1
        }

        fn gp_signature(&self, _id1: u64, _id2: u64) -> i32 {
            -2
        }

        fn product_signature(&self, _kind: ProductKind, _id1: u64, _id2: u64) -> i32 {
            -3
        }
    }

    #[test]
    fn references_keep_every_override() {
        fn signatures<M: Metric>(metric: M) -> [i32; 3] {
            [
                metric.shared_signature(0b11, 0b01),
                metric.gp_signature(0b11, 0b01),
                metric.product_signature(ProductKind::Lcp, 0b01, 0b11),
            ]
        }

        assert_eq!([-1, -2, -3], signatures(Overridden));
        assert_eq!([-1, -2, -3], signatures(&Overridden));
        assert_eq!([-1, -2, -3], signatures(&&Overridden));
        let by_dyn: &dyn Metric = &Overridden;
        assert_eq!([-1, -2, -3], signatures(by_dyn));

        for id1 in ids(4) {
            for id2 in ids(4) {
                assert_eq!(Euclidean.shared_signature(id1, id2), (&Euclidean).shared_signature(id1, id2));
                for kind in ProductKind::iter() {
                    assert_eq!(
                        Euclidean.product_signature(kind, id1, id2),
                        (&Euclidean).product_signature(kind, id1, id2)
                    );
                }
            }
        }
    }
}
