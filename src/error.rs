use thiserror::Error;

/// Precondition failures reported by the loss entry points.
///
/// Validation runs eagerly at the top of every `naive`/`vectorized` call
/// and fails fast with the specific kind below; no partial computation is
/// attempted. Floating-point edge cases inside a valid computation (tied
/// maxima, all-zero scores) are handled by the stability shift and are
/// never reported as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LossError {
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: String, found: String },

    #[error("label {label} of example {example} is out of range for {classes} classes")]
    InvalidLabel { example: usize, label: usize, classes: usize },

    #[error("non-finite value (NaN or infinity) in {0}")]
    NonFiniteInput(&'static str),
}
