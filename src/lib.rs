pub mod math;
pub mod loss;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use loss::softmax::SoftmaxLoss;
pub use loss::svm::SvmHingeLoss;
pub use loss::loss_type::LossType;
pub use error::LossError;
