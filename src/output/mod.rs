use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::matrix::Matrix;

pub const DEFAULT_DELIMITER: &str = "\t";

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Text rendering of a single matrix cell.
pub trait CellFormat {
    fn write_cell(&self, out: &mut String);
}

impl CellFormat for f64 {
    fn write_cell(&self, out: &mut String) {
        use std::fmt::Write as _;
        if self.is_nan() {
            out.push_str("nan");
        } else if self.is_infinite() {
            out.push_str(if *self > 0.0 { "inf" } else { "-inf" });
        } else {
            let _ = write!(out, "{:.6}", self);
        }
    }
}

macro_rules! int_cell_format {
    ($($t:ty),*) => {
        $(impl CellFormat for $t {
            fn write_cell(&self, out: &mut String) {
                use std::fmt::Write as _;
                let _ = write!(out, "{}", self);
            }
        })*
    };
}

int_cell_format!(i64, u64);

/// One line per row, cells joined by `delimiter`, newline-terminated.
pub fn render_matrix<T: CellFormat>(m: &Matrix<T>, delimiter: &str) -> String {
    let mut buf = String::new();
    for row in m.iter_rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                buf.push_str(delimiter);
            }
            cell.write_cell(&mut buf);
        }
        buf.push('\n');
    }
    buf
}

pub fn save_matrix<T: CellFormat>(
    path: &Path,
    m: &Matrix<T>,
    delimiter: &str,
) -> Result<(), OutputError> {
    let write = || -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(render_matrix(m, delimiter).as_bytes())?;
        writer.flush()
    };
    write().map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `dir/stem.ext` becomes `dir/stem_q<bits>.txt`; a file name without an
/// extension gets `_q<bits>.txt` appended.
pub fn quantized_output_path(output: &Path, bits: u32) -> PathBuf {
    let suffix = format!("_q{bits}.txt");
    match (output.file_stem(), output.extension()) {
        (Some(stem), Some(_)) => {
            let mut name = stem.to_os_string();
            name.push(&suffix);
            output.with_file_name(name)
        }
        _ => {
            let mut name = output.as_os_str().to_os_string();
            name.push(&suffix);
            PathBuf::from(name)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/output/mod.rs"]
mod tests;
