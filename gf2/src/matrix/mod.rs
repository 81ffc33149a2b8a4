pub mod bitmatrix;
mod echelon;
mod ops;

pub use bitmatrix::BitMatrix;
