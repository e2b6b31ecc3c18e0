use super::*;
use crate::model::axis::Axis;
use crate::model::matrix::Matrix;
use crate::transform::quantize::FixedPoint;
use std::fs;
use tempfile::tempdir;

fn norm_ctx() -> NormalizeCtx {
    NormalizeCtx {
        axis: Axis::Row,
        values: Matrix::from_vec(1, 2, vec![0.25, 0.75]).expect("matrix"),
        degenerate_lines: Vec::new(),
    }
}

#[test]
fn stage4_without_output_writes_nothing() {
    let written = run_stage4(&norm_ctx(), None, None, "\t").expect("stage4");
    assert!(written.normalized_path.is_none());
    assert!(written.quantized_path.is_none());
}

#[test]
fn stage4_writes_float_and_quantized_files() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("norm_out.txt");
    let norm = norm_ctx();
    let quant = crate::pipeline::stage3_quantize::run_stage3(
        &norm,
        FixedPoint::new(4).expect("bits"),
    );

    let written = run_stage4(&norm, Some(&quant), Some(&output), "\t").expect("stage4");
    assert_eq!(written.normalized_path.as_deref(), Some(output.as_path()));
    let qpath = dir.path().join("norm_out_q4.txt");
    assert_eq!(written.quantized_path.as_deref(), Some(qpath.as_path()));

    assert_eq!(
        fs::read_to_string(&output).expect("read"),
        "0.250000\t0.750000\n"
    );
    // 0.25 -> round(9.375 - 8) = 1, 0.75 -> round(13.125 - 8) = 5
    assert_eq!(fs::read_to_string(&qpath).expect("read"), "1\t5\n");
}
