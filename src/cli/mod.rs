use clap::{Parser, Subcommand};

mod config;
mod options;
mod run;
mod validate;

#[derive(Parser, Debug)]
#[command(
    name = "mac-norm",
    version,
    about = "L1-normalize a MAC output matrix, optionally quantized to N-bit fixed point"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize (and optionally quantize) the input matrix
    Run(run::RunArgs),
    /// Load the input matrix and report its shape
    Validate(validate::ValidateArgs),
    /// Print the effective configuration as TOML
    Config(config::ConfigArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Run(args) => run::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Config(args) => config::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
