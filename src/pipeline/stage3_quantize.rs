use crate::model::matrix::Matrix;
use crate::pipeline::stage2_normalize::NormalizeCtx;
use crate::transform::quantize::{FixedPoint, encode_matrix, quantize_matrix};

#[derive(Debug, Clone)]
pub struct QuantizeCtx {
    pub fixed_point: FixedPoint,
    pub levels: Matrix<i64>,
    /// Unsigned two's-complement patterns of `levels`.
    pub patterns: Matrix<u64>,
}

pub fn run_stage3(ctx: &NormalizeCtx, fixed_point: FixedPoint) -> QuantizeCtx {
    let levels = quantize_matrix(&ctx.values, fixed_point);
    let patterns = encode_matrix(&levels, fixed_point);
    QuantizeCtx {
        fixed_point,
        levels,
        patterns,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_quantize.rs"]
mod tests;
