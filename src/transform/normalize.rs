use crate::model::axis::Axis;
use crate::model::matrix::Matrix;

#[derive(Debug, Clone)]
pub struct Normalized {
    pub values: Matrix<f64>,
    /// Rows (axis=1) or columns (axis=0) whose absolute sum was zero.
    /// Every element of such a line is NaN.
    pub degenerate_lines: Vec<usize>,
}

/// L1-normalizes `|m|` along `axis`.
///
/// `Axis::Row` divides each element by the absolute sum of its row,
/// `Axis::Column` by the absolute sum of its column. A zero sum is not
/// guarded: the affected line comes out as `0 / 0 = NaN`.
pub fn normalize_l1(m: &Matrix<i64>, axis: Axis) -> Normalized {
    let abs = m.map(|v| v.unsigned_abs() as f64);
    let sums = line_sums(&abs, axis);
    let degenerate_lines = sums
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == 0.0)
        .map(|(i, _)| i)
        .collect();

    let cols = abs.cols();
    let mut idx = 0usize;
    let values = abs.map(|v| {
        let (r, c) = (idx / cols, idx % cols);
        idx += 1;
        let denom = match axis {
            Axis::Row => sums[r],
            Axis::Column => sums[c],
        };
        v / denom
    });

    Normalized {
        values,
        degenerate_lines,
    }
}

fn line_sums(abs: &Matrix<f64>, axis: Axis) -> Vec<f64> {
    match axis {
        Axis::Row => abs.iter_rows().map(|row| row.iter().sum()).collect(),
        Axis::Column => {
            let mut sums = vec![0.0f64; abs.cols()];
            for row in abs.iter_rows() {
                for (acc, v) in sums.iter_mut().zip(row) {
                    *acc += *v;
                }
            }
            sums
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/transform/normalize.rs"]
mod tests;
