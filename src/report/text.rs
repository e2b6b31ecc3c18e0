use crate::input::path_display;
use crate::output::render_matrix;
use crate::pipeline::stage1_load::LoadCtx;
use crate::pipeline::stage2_normalize::NormalizeCtx;
use crate::pipeline::stage3_quantize::QuantizeCtx;
use crate::pipeline::stage4_write::WriteCtx;

pub fn render_load(load: &LoadCtx) -> String {
    format!(
        "Loaded {}: shape {}\n",
        path_display(&load.input_path),
        load.shape()
    )
}

pub fn render_report(
    load: &LoadCtx,
    norm: &NormalizeCtx,
    quant: Option<&QuantizeCtx>,
    written: &WriteCtx,
    delimiter: &str,
) -> String {
    let mut out = render_load(load);
    out.push_str(&format!(
        "Normalize along axis={} ({})\n\n",
        norm.axis,
        norm.axis.as_str()
    ));

    out.push_str("Normalized (float):\n");
    out.push_str(&render_matrix(&norm.values, delimiter));

    if let Some(path) = &written.normalized_path {
        out.push_str(&format!("\nSaved float result to {}\n", path_display(path)));
    }

    if let Some(quant) = quant {
        let fp = quant.fixed_point;
        out.push('\n');
        match &written.quantized_path {
            Some(path) => out.push_str(&format!(
                "Saved quantized ({}-bit 2's complement as unsigned 0..{}) to {}\n",
                fp.bits(),
                fp.levels(),
                path_display(path)
            )),
            None => out.push_str(&format!(
                "Quantized ({}-bit 2's complement as unsigned 0..{}):\n",
                fp.bits(),
                fp.levels()
            )),
        }
        if written.quantized_path.is_some() {
            out.push_str("Quantized (unsigned bit pattern):\n");
        }
        out.push_str(&render_matrix(&quant.patterns, delimiter));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
