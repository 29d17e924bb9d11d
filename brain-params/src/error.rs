//! Errors in the library.
use thiserror::Error;

/// Errors raised when [`BrainParameters`](crate::BrainParameters) describe
/// an inconsistent observation or action space.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BrainParamsError {
    /// The vector observation has no element.
    #[error("Vector observation size must be positive, got {0}")]
    InvalidVectorObservationSize(usize),

    /// The number of stacked vector observations is out of `[1, 50]`.
    #[error(
        "Number of stacked vector observations must be in [1, {}], got {0}",
        crate::MAX_STACKED_VECTOR_OBSERVATIONS
    )]
    InvalidNumStackedVectorObservations(usize),

    /// The stacked vector observation is too long to be indexed.
    #[error("Stacked vector observation of size {size} x {n_stack} overflows")]
    StackedVectorObservationOverflow {
        /// Size of a vector observation.
        size: usize,
        /// Number of stacked vector observations.
        n_stack: usize,
    },

    /// No action branch is given.
    #[error("Vector action size must have at least one branch")]
    EmptyVectorActionSize,

    /// An action branch has zero size.
    #[error("Size of action branch {branch} must be positive, got {size}")]
    InvalidVectorActionSize {
        /// Index of the branch.
        branch: usize,
        /// Size of the branch.
        size: usize,
    },

    /// The sum of the sizes of action branches overflows.
    #[error("Sum of action branch sizes overflows")]
    ActionDimOverflow,

    /// A camera resolution has a zero dimension.
    #[error("Camera resolution {index} must have positive dimensions, got {width}x{height}")]
    InvalidResolution {
        /// Index in the list of camera resolutions.
        index: usize,
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },

    /// Action descriptions do not line up with the action space.
    #[error("Expected {expected} action descriptions, got {actual}")]
    ActionDescriptionsMismatch {
        /// Number of labels implied by the action space.
        expected: usize,
        /// Number of labels given.
        actual: usize,
    },
}
