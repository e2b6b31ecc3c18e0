pub mod matrix;

use std::path::{Path, PathBuf};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file not found: {0}")]
    MissingFile(PathBuf),
    #[error("invalid integer token {token:?} at line {line}")]
    InvalidToken { line: usize, token: String },
    #[error("ragged matrix at line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::MissingFile(path.to_path_buf()),
        _ => InputError::Io(e),
    })?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

pub fn path_display(path: &Path) -> impl fmt::Display + '_ {
    path.to_string_lossy()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;
