use super::*;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

#[test]
fn parses_mixed_whitespace_and_skips_blank_lines() {
    let text = "1 2\t3\n\n   \n-4\t\t5  6\n";
    let m = parse_matrix(Cursor::new(text)).expect("parse");
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.as_slice(), &[1, 2, 3, -4, 5, 6]);
}

#[test]
fn invalid_token_names_line() {
    let err = parse_matrix(Cursor::new("1 2\n\n3 x\n")).expect_err("should fail");
    match err {
        InputError::InvalidToken { line, token } => {
            assert_eq!(line, 3);
            assert_eq!(token, "x");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn float_token_is_rejected() {
    let err = parse_matrix(Cursor::new("1.5 2\n")).expect_err("should fail");
    assert!(matches!(err, InputError::InvalidToken { line: 1, .. }));
}

#[test]
fn ragged_rows_are_rejected() {
    let err = parse_matrix(Cursor::new("1 2 3\n4 5\n")).expect_err("should fail");
    match err {
        InputError::RaggedRow {
            line,
            expected,
            found,
        } => {
            assert_eq!((line, expected, found), (2, 3, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_input_is_empty_matrix() {
    let m = parse_matrix(Cursor::new("\n\n")).expect("parse");
    assert_eq!(m.rows(), 0);
    assert_eq!(m.cols(), 0);
}

#[test]
fn load_matrix_reads_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("mac_out.txt");
    fs::write(&path, "10\t20\n30\t40\n").expect("write file");
    let m = load_matrix(&path).expect("load");
    assert_eq!(m.row(1), &[30, 40]);
}
