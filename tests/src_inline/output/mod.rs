use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn floats_use_six_decimals_and_lowercase_nan() {
    let m = Matrix::from_vec(2, 3, vec![1.0 / 6.0, 1.0 / 3.0, 0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY])
        .expect("matrix");
    assert_eq!(
        render_matrix(&m, DEFAULT_DELIMITER),
        "0.166667\t0.333333\t0.500000\nnan\tinf\t-inf\n"
    );
}

#[test]
fn integers_are_plain_decimal_with_custom_delimiter() {
    let m = Matrix::from_vec(2, 2, vec![0u64, 255, 1_048_575, 7]).expect("matrix");
    assert_eq!(render_matrix(&m, ","), "0,255\n1048575,7\n");
}

#[test]
fn save_matrix_writes_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("norm_out.txt");
    let m = Matrix::from_vec(1, 2, vec![-3i64, 4]).expect("matrix");
    save_matrix(&path, &m, DEFAULT_DELIMITER).expect("save");
    assert_eq!(fs::read_to_string(&path).expect("read"), "-3\t4\n");
}

#[test]
fn save_matrix_reports_path_on_failure() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing_dir").join("out.txt");
    let m: Matrix<i64> = Matrix::empty();
    let err = save_matrix(&path, &m, DEFAULT_DELIMITER).expect_err("should fail");
    assert!(err.to_string().contains("out.txt"));
}

#[test]
fn quantized_path_replaces_extension() {
    assert_eq!(
        quantized_output_path(Path::new("out/norm_out.txt"), 8),
        Path::new("out/norm_out_q8.txt")
    );
    assert_eq!(
        quantized_output_path(Path::new("./norm_out.txt"), 20),
        Path::new("./norm_out_q20.txt")
    );
}

#[test]
fn quantized_path_appends_without_extension() {
    assert_eq!(
        quantized_output_path(Path::new("results/norm"), 8),
        Path::new("results/norm_q8.txt")
    );
    assert_eq!(
        quantized_output_path(Path::new("run.v2/norm"), 8),
        Path::new("run.v2/norm_q8.txt")
    );
}
