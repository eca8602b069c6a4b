//! Error Types for Training and Scoring
//!
//! All errors are detected at the API boundary (`IsolationForest::train` and
//! `IsolationForest::score`) and returned synchronously. Training is atomic:
//! either every requested tree is built or no forest is returned. No error is
//! ever folded into a degenerate score.
//!
//! The enum follows the same constraints as the rest of the crate:
//!
//! 1. **Small and Copy**: every variant carries at most two machine words, so
//!    errors can be returned from hot paths without allocation.
//! 2. **No heap data**: no `String` payloads; all context is inline.
//! 3. **Actionable**: each variant carries the numbers needed to correct the
//!    call (requested vs. available sizes, expected vs. actual widths).

use thiserror_no_std::Error;

/// Result type for forest operations
pub type ForestResult<T> = Result<T, ForestError>;

/// Errors surfaced by training and scoring entry points
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForestError {
    /// Training was invoked with zero samples
    #[error("no samples provided")]
    EmptyDataset,

    /// Requested subsample size exceeds the dataset size
    #[error("subsample size {requested} exceeds dataset size {available}")]
    SubsampleTooLarge {
        /// Subsample size requested in the configuration
        requested: usize,
        /// Number of samples actually provided
        available: usize,
    },

    /// Subsample size of 0 or 1; the normalization constant c(v) is undefined
    #[error("subsample size {requested} is invalid, must be at least 2")]
    InvalidSubsampleSize {
        /// Subsample size requested in the configuration
        requested: usize,
    },

    /// Tree count of zero; an empty forest cannot produce a score
    #[error("tree count must be at least 1")]
    InvalidTreeCount,

    /// A sample's attribute count disagrees with the rest of the dataset or
    /// with the width the forest was trained on
    #[error("sample has {actual} attributes, expected {expected}")]
    DimensionMismatch {
        /// Attribute count established by the dataset or at training time
        expected: usize,
        /// Attribute count of the offending sample
        actual: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ForestError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyDataset =>
                defmt::write!(fmt, "no samples provided"),
            Self::SubsampleTooLarge { requested, available } =>
                defmt::write!(fmt, "subsample {} > dataset {}", requested, available),
            Self::InvalidSubsampleSize { requested } =>
                defmt::write!(fmt, "subsample size {} < 2", requested),
            Self::InvalidTreeCount =>
                defmt::write!(fmt, "tree count must be at least 1"),
            Self::DimensionMismatch { expected, actual } =>
                defmt::write!(fmt, "sample width {} != trained width {}", actual, expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_copy_and_comparable() {
        let err = ForestError::SubsampleTooLarge { requested: 300, available: 256 };
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(err, ForestError::EmptyDataset);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_includes_context() {
        let err = ForestError::DimensionMismatch { expected: 4, actual: 3 };
        let msg = std::format!("{err}");
        assert!(msg.contains('4') && msg.contains('3'));
    }
}
