pub mod axis;
pub mod matrix;
