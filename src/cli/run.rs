use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::options::{OverrideArgs, SourceArgs, effective_config};
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_normalize::run_stage2;
use crate::pipeline::stage3_quantize::run_stage3;
use crate::pipeline::stage4_write::run_stage4;
use crate::report::json::{RunSummary, write_summary};
use crate::report::text::render_report;
use crate::transform::quantize::FixedPoint;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,

    #[command(flatten)]
    pub(crate) overrides: OverrideArgs,

    /// Optional JSON run summary
    #[arg(long)]
    summary: Option<PathBuf>,
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let cfg = effective_config(&args.source, &args.overrides)?;
    let fixed_point = if cfg.quantize {
        Some(FixedPoint::new(cfg.quantize_bits)?)
    } else {
        None
    };

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let load = run_stage1(&cfg.input)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        rows = load.matrix.rows(),
        cols = load.matrix.cols(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_normalize", axis = cfg.axis.as_str(), "starting stage");
    let norm = run_stage2(&load, cfg.axis);
    info!(
        stage = "stage2_normalize",
        elapsed_ms = start.elapsed().as_millis(),
        degenerate = norm.degenerate_lines.len(),
        "finished stage"
    );

    let quant = match fixed_point {
        Some(fp) => {
            let start = Instant::now();
            info!(stage = "stage3_quantize", bits = fp.bits(), "starting stage");
            let quant = run_stage3(&norm, fp);
            info!(
                stage = "stage3_quantize",
                elapsed_ms = start.elapsed().as_millis(),
                "finished stage"
            );
            Some(quant)
        }
        None => None,
    };

    let start = Instant::now();
    info!(stage = "stage4_write", "starting stage");
    let written = run_stage4(&norm, quant.as_ref(), cfg.output.as_deref(), &cfg.delimiter)?;
    info!(
        stage = "stage4_write",
        elapsed_ms = start.elapsed().as_millis(),
        files = written.normalized_path.iter().count() + written.quantized_path.iter().count(),
        "finished stage"
    );

    print!(
        "{}",
        render_report(&load, &norm, quant.as_ref(), &written, &cfg.delimiter)
    );

    if let Some(path) = &args.summary {
        let summary = RunSummary::new(&load, &norm, quant.as_ref(), &written);
        write_summary(path, &summary)?;
    }
    Ok(())
}
