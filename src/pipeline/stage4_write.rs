use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::output::{OutputError, quantized_output_path, save_matrix};
use crate::pipeline::stage2_normalize::NormalizeCtx;
use crate::pipeline::stage3_quantize::QuantizeCtx;

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

#[derive(Debug, Clone, Default)]
pub struct WriteCtx {
    pub normalized_path: Option<PathBuf>,
    pub quantized_path: Option<PathBuf>,
}

/// Writes the float matrix to `output` and, when present, the quantized
/// patterns next to it. Nothing is written without an output path.
pub fn run_stage4(
    norm: &NormalizeCtx,
    quant: Option<&QuantizeCtx>,
    output: Option<&Path>,
    delimiter: &str,
) -> Result<WriteCtx, Stage4Error> {
    let Some(output) = output else {
        return Ok(WriteCtx::default());
    };

    save_matrix(output, &norm.values, delimiter)?;
    let mut written = WriteCtx {
        normalized_path: Some(output.to_path_buf()),
        quantized_path: None,
    };

    if let Some(quant) = quant {
        let path = quantized_output_path(output, quant.fixed_point.bits());
        save_matrix(&path, &quant.patterns, delimiter)?;
        written.quantized_path = Some(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_write.rs"]
mod tests;
