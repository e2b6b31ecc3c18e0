use clap::Args;

use crate::cli::options::{OverrideArgs, SourceArgs, effective_config};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    overrides: OverrideArgs,
}

pub fn handle(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = effective_config(&args.source, &args.overrides)?;
    print!("{}", toml::to_string(&cfg)?);
    Ok(())
}
