use algebra::BasisError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("multivector has a zero norm and no inverse")]
    ZeroNorm,

    #[error("k-vector terms mix grades {0} and {1}")]
    MixedGrades(u32, u32),

    #[error(transparent)]
    Basis(#[from] BasisError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_errors_convert() {
        let err: Error = BasisError::InvalidDimension(70).into();
        assert_eq!(Error::Basis(BasisError::InvalidDimension(70)), err);
        assert_eq!("vector space dimension 70 is outside [2, 63)", err.to_string());
        assert_eq!("k-vector terms mix grades 1 and 2", Error::MixedGrades(1, 2).to_string());
    }
}
