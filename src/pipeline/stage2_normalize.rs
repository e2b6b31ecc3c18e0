use tracing::warn;

use crate::model::axis::Axis;
use crate::model::matrix::Matrix;
use crate::pipeline::stage1_load::LoadCtx;
use crate::transform::normalize::normalize_l1;

#[derive(Debug, Clone)]
pub struct NormalizeCtx {
    pub axis: Axis,
    pub values: Matrix<f64>,
    pub degenerate_lines: Vec<usize>,
}

pub fn run_stage2(ctx: &LoadCtx, axis: Axis) -> NormalizeCtx {
    let normalized = normalize_l1(&ctx.matrix, axis);
    if let Some(first) = normalized.degenerate_lines.first() {
        warn!(
            axis = axis.as_str(),
            count = normalized.degenerate_lines.len(),
            first = *first,
            "zero absolute sum, values are NaN"
        );
    }
    NormalizeCtx {
        axis,
        values: normalized.values,
        degenerate_lines: normalized.degenerate_lines,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
