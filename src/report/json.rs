use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::model::matrix::Shape;
use crate::pipeline::stage1_load::LoadCtx;
use crate::pipeline::stage2_normalize::NormalizeCtx;
use crate::pipeline::stage3_quantize::QuantizeCtx;
use crate::pipeline::stage4_write::WriteCtx;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: ToolSummary,
    pub input: PathBuf,
    pub shape: Shape,
    pub axis: i64,
    pub axis_name: &'static str,
    pub degenerate_lines: Vec<usize>,
    pub quantize_bits: Option<u32>,
    pub outputs: OutputSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSummary {
    pub normalized: Option<PathBuf>,
    pub quantized: Option<PathBuf>,
}

impl RunSummary {
    pub fn new(
        load: &LoadCtx,
        norm: &NormalizeCtx,
        quant: Option<&QuantizeCtx>,
        written: &WriteCtx,
    ) -> Self {
        Self {
            tool: ToolSummary {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            input: load.input_path.clone(),
            shape: load.shape(),
            axis: norm.axis.index(),
            axis_name: norm.axis.as_str(),
            degenerate_lines: norm.degenerate_lines.clone(),
            quantize_bits: quant.map(|q| q.fixed_point.bits()),
            outputs: OutputSummary {
                normalized: written.normalized_path.clone(),
                quantized: written.quantized_path.clone(),
            },
        }
    }
}

pub fn write_summary(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
