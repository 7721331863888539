use thiserror::Error;

/// Result alias used by every fallible stage of the pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating sequences or call parameters.
///
/// None of these are transient: the caller has to fix the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input sequence is not one-dimensional.
    #[error("incorrect array form: expected a 1-dimensional array, found {ndim} dimensions")]
    Not1DArray { ndim: usize },

    /// An order matrix handed to the grouped interval extractor is not 2-D.
    #[error("incorrect array form: expected a 2-dimensional order matrix, found {ndim} dimensions")]
    Not2DArray { ndim: usize },

    /// A symbol appears at both masked and unmasked positions.
    #[error("element {value} appears both masked and unmasked")]
    InconsistentMask { value: String },

    /// A row of an order matrix holds more than one distinct unmasked value.
    #[error("order row {row} holds more than one distinct unmasked value")]
    InconsistentOrderRow { row: usize },

    #[error("invalid binding {0:?}: expected start (1) or end (2)")]
    InvalidBinding(String),

    #[error("invalid mode {0:?}: expected lossy (1), normal (2), cycle (3) or redundant (4)")]
    InvalidMode(String),

    /// Data and mask of a masked array disagree in shape.
    #[error("mask shape {mask:?} does not match data shape {data:?}")]
    ShapeMismatch { data: Vec<usize>, mask: Vec<usize> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = Error::Not1DArray { ndim: 3 };
        assert!(err.to_string().contains("found 3 dimensions"));

        let err = Error::InconsistentMask {
            value: "\"b\"".to_string(),
        };
        assert_eq!(err.to_string(), "element \"b\" appears both masked and unmasked");

        let err = Error::ShapeMismatch {
            data: vec![4],
            mask: vec![3],
        };
        assert_eq!(err.to_string(), "mask shape [3] does not match data shape [4]");
    }
}
