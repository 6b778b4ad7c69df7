use crate::dispatch::{acp, cp, fdp, gp, hip, lcp, op, rcp, sp};
use crate::multivector::Multivector;
use crate::{
    AntiCommutator, CliffordConjugate, Commutator, Dot, Geometric, GradeInvolution, HestenesInner,
    LeftContraction, Reverse, RightContraction, ScalarProduct, Wedge,
};

macro_rules! binary_trait {
    ($trait_:ident, $fn_:ident, $product:ident, $output:ty) => {
        impl $trait_<&Multivector> for &Multivector {
            type Output = $output;
            fn $fn_(self, rhs: &Multivector) -> $output {
                $product(self, rhs)
            }
        }
    };
}

binary_trait!(Geometric, geo, gp, Multivector);
binary_trait!(Wedge, wedge, op, Multivector);
binary_trait!(Dot, dot, fdp, Multivector);
binary_trait!(ScalarProduct, scalar_product, sp, f64);
binary_trait!(LeftContraction, left_con, lcp, Multivector);
binary_trait!(RightContraction, right_con, rcp, Multivector);
binary_trait!(HestenesInner, hestenes, hip, Multivector);
binary_trait!(Commutator, commutator, cp, Multivector);
binary_trait!(AntiCommutator, anticommutator, acp, Multivector);

impl std::ops::Mul for &Multivector {
    type Output = Multivector;
    fn mul(self, rhs: &Multivector) -> Multivector {
        gp(self, rhs)
    }
}

impl std::ops::BitXor for &Multivector {
    type Output = Multivector;
    fn bitxor(self, rhs: &Multivector) -> Multivector {
        op(self, rhs)
    }
}

impl Reverse for &Multivector {
    type Output = Multivector;
    fn rev(self) -> Multivector {
        self.reverse()
    }
}

impl GradeInvolution for &Multivector {
    type Output = Multivector;
    fn grade_inv(self) -> Multivector {
        self.grade_involution()
    }
}

impl CliffordConjugate for &Multivector {
    type Output = Multivector;
    fn conjugate(self) -> Multivector {
        self.clifford_conjugate()
    }
}
