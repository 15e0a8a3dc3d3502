pub mod matrix;
pub mod stable;
pub mod grad_check;

pub use matrix::Matrix;
