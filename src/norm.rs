use algebra::{Euclidean, Metric, ProductKind};
use tracing::debug;

use crate::error::{Error, Result};
use crate::gbt::id_scalar_records;
use crate::multivector::Multivector;

impl Multivector {
    /// Scalar product of the multivector with its reverse under `metric`.
    pub fn norm2<M: Metric>(&self, metric: M) -> f64 {
        let terms = self.sorted_terms();
        let reversed = self.reverse().sorted_terms();
        id_scalar_records(ProductKind::Sp, metric, &terms, &reversed)
            .map(|(_, scalar)| scalar)
            .sum()
    }

    /// Euclidean squared norm, the sum of the squared scalars.
    pub fn enorm2(&self) -> f64 {
        self.norm2(Euclidean)
    }

    pub fn enorm(&self) -> f64 {
        self.enorm2().sqrt()
    }

    /// Euclidean inverse, the reverse divided by the squared norm.
    ///
    /// Exact for blades and versors.
    pub fn einverse(&self) -> Result<Multivector> {
        self.inverse(Euclidean)
    }

    /// Inverse under `metric`, the reverse divided by [`Multivector::norm2`].
    ///
    /// Exact for blades and versors.
    pub fn inverse<M: Metric>(&self, metric: M) -> Result<Multivector> {
        let norm2 = self.norm2(metric);
        if norm2 == 0.0 {
            debug!(multivector = %self, "no inverse for a multivector with zero norm");
            return Err(Error::ZeroNorm);
        }
        Ok(self.reverse().scale(norm2.recip()))
    }
}
