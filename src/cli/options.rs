use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, ConfigLayer, ConfigSource, load_layer, resolve};
use crate::model::axis::Axis;

/// Where the config file comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Config file (default: ./norm_config.toml when present)
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,

    /// Ignore any config file and use built-in defaults
    #[arg(long, conflicts_with = "config")]
    pub(crate) no_config: bool,
}

/// Settings that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Input matrix file (overrides INPUT)
    #[arg(long, short = 'i')]
    pub(crate) input: Option<PathBuf>,

    /// Axis to normalize: 0=column, 1=row (overrides AXIS)
    #[arg(long, short = 'a', value_parser = parse_axis)]
    pub(crate) axis: Option<Axis>,

    /// Output file for the normalized matrix (overrides OUTPUT)
    #[arg(long, short = 'o')]
    pub(crate) output: Option<PathBuf>,

    /// Also emit the N-bit quantized matrix (overrides QUANTIZE)
    #[arg(long)]
    pub(crate) quantize: bool,

    /// Quantization bit width (overrides QUANTIZE_BITS)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub(crate) quantize_bits: Option<i64>,

    /// Output column delimiter (overrides DELIMITER)
    #[arg(long)]
    pub(crate) delimiter: Option<String>,
}

impl OverrideArgs {
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            input: self.input.clone(),
            axis: self.axis,
            output: self.output.clone(),
            quantize: self.quantize.then_some(true),
            quantize_bits: self.quantize_bits,
            delimiter: self.delimiter.clone(),
        }
    }
}

pub fn effective_config(source: &SourceArgs, overrides: &OverrideArgs) -> anyhow::Result<Config> {
    let source = ConfigSource::from_flags(source.config.clone(), source.no_config);
    let file = load_layer(&source)?;
    Ok(resolve(file.as_ref(), &overrides.layer()))
}

fn parse_axis(value: &str) -> Result<Axis, String> {
    let raw: i64 = value
        .parse()
        .map_err(|_| format!("axis must be 0 or 1, got {value:?}"))?;
    Axis::try_from(raw).map_err(|e| e.to_string())
}
