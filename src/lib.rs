pub mod cli;
pub mod config;
pub mod input;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod transform;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::model::axis::Axis;
    pub use crate::model::matrix::Matrix;
    pub use crate::transform::normalize::normalize_l1;
    pub use crate::transform::quantize::FixedPoint;
}
