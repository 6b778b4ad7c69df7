use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum BasisError {
    #[error("vector space dimension {0} is outside [2, 63)")]
    InvalidDimension(u32),

    #[error("grade {grade} exceeds vector space dimension {dim}")]
    InvalidGrade { dim: u32, grade: u32 },

    #[error("index {index} is out of range for grade {grade} in {dim} dimensions")]
    InvalidIndex { dim: u32, grade: u32, index: u64 },

    #[error("basis blade id {id:#b} does not fit in {dim} dimensions")]
    InvalidId { dim: u32, id: u64 },
}

pub type Result<T> = std::result::Result<T, BasisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BasisError::InvalidIndex {
            dim: 3,
            grade: 2,
            index: 7,
        };
        assert_eq!("index 7 is out of range for grade 2 in 3 dimensions", err.to_string());
        assert_eq!(
            "vector space dimension 64 is outside [2, 63)",
            BasisError::InvalidDimension(64).to_string()
        );
        assert_eq!(
            "basis blade id 0b1000 does not fit in 3 dimensions",
            BasisError::InvalidId { dim: 3, id: 8 }.to_string()
        );
    }
}
