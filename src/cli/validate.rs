use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::options::{OverrideArgs, SourceArgs, effective_config};
use crate::pipeline::stage1_load::run_stage1;
use crate::report::text::render_load;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Input matrix file (overrides INPUT)
    #[arg(long, short = 'i')]
    input: Option<std::path::PathBuf>,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let overrides = OverrideArgs {
        input: args.input,
        ..OverrideArgs::default()
    };
    let cfg = effective_config(&args.source, &overrides)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let load = run_stage1(&cfg.input)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    print!("{}", render_load(&load));
    Ok(())
}
