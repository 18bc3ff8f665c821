pub mod bit_matrix;

pub use bit_matrix::BitMatrix;
