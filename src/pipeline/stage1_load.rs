use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::input::matrix::load_matrix;
use crate::input::{InputError, path_display};
use crate::model::matrix::{Matrix, Shape};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[derive(Debug, Clone)]
pub struct LoadCtx {
    pub input_path: PathBuf,
    pub matrix: Matrix<i64>,
}

impl LoadCtx {
    pub fn shape(&self) -> Shape {
        self.matrix.shape()
    }
}

pub fn run_stage1(input: &Path) -> Result<LoadCtx, Stage1Error> {
    debug!(path = %path_display(input), "reading matrix");
    let matrix = load_matrix(input)?;
    Ok(LoadCtx {
        input_path: input.to_path_buf(),
        matrix,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
