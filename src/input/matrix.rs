use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_reader};
use crate::model::matrix::Matrix;

/// Reads a whitespace-delimited integer matrix. Blank lines are skipped.
pub fn load_matrix(path: &Path) -> Result<Matrix<i64>, InputError> {
    let reader = open_reader(path)?;
    parse_matrix(reader)
}

pub fn parse_matrix<R: BufRead>(mut reader: R) -> Result<Matrix<i64>, InputError> {
    let mut matrix = Matrix::empty();
    let mut line = String::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }

        let row = value
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| InputError::InvalidToken {
                    line: line_no,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        matrix
            .push_row(row)
            .map_err(|e| InputError::RaggedRow {
                line: line_no,
                expected: e.expected,
                found: e.found,
            })?;
    }

    Ok(matrix)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/matrix.rs"]
mod tests;
