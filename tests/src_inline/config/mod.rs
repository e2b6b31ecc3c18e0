use super::*;
use tempfile::tempdir;

#[test]
fn defaults_apply_without_layers() {
    let cfg = resolve(None, &ConfigLayer::default());
    assert_eq!(cfg.input, PathBuf::from("mac_out.txt"));
    assert_eq!(cfg.axis, Axis::Row);
    assert_eq!(cfg.output, None);
    assert!(!cfg.quantize);
    assert_eq!(cfg.quantize_bits, 20);
    assert_eq!(cfg.delimiter, "\t");
}

#[test]
fn file_values_override_defaults() {
    let layer = parse_layer(
        "INPUT = \"./mac_out.txt\"\nAXIS = 1\nOUTPUT = \"./norm_out.txt\"\nQUANTIZE = true\nQUANTIZE_BITS = 8\n",
    )
    .expect("parse");
    let cfg = resolve(Some(&layer), &ConfigLayer::default());
    assert_eq!(cfg.output, Some(PathBuf::from("./norm_out.txt")));
    assert!(cfg.quantize);
    assert_eq!(cfg.quantize_bits, 8);
}

#[test]
fn explicit_axis_beats_file_axis() {
    let file = parse_layer("AXIS = 0\n").expect("parse");
    assert_eq!(file.axis, Some(Axis::Column));
    let explicit = ConfigLayer {
        axis: Some(Axis::Row),
        ..ConfigLayer::default()
    };
    assert_eq!(resolve(Some(&file), &explicit).axis, Axis::Row);
    assert_eq!(resolve(Some(&file), &ConfigLayer::default()).axis, Axis::Column);
}

#[test]
fn invalid_axis_and_unknown_keys_are_rejected() {
    assert!(parse_layer("AXIS = 2\n").is_err());
    assert!(parse_layer("NORM = \"l2\"\n").is_err());
}

#[test]
fn named_file_must_exist() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("norm_config.toml");
    let err = load_layer(&ConfigSource::File(path.clone())).expect_err("missing");
    assert!(matches!(err, ConfigError::MissingFile(p) if p == path));
}

#[test]
fn named_file_is_read() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("norm_config.toml");
    std::fs::write(&path, "QUANTIZE_BITS = 12\nDELIMITER = \",\"\n").expect("write");
    let layer = load_layer(&ConfigSource::File(path))
        .expect("load")
        .expect("layer");
    assert_eq!(layer.quantize_bits, Some(12));
    assert_eq!(layer.delimiter.as_deref(), Some(","));
}

#[test]
fn disabled_source_ignores_files() {
    assert_eq!(load_layer(&ConfigSource::Disabled).expect("load"), None);
    assert_eq!(
        ConfigSource::from_flags(Some(PathBuf::from("x.toml")), true),
        ConfigSource::Disabled
    );
}

#[test]
fn effective_config_serializes_to_toml() {
    let cfg = Config::default();
    let text = toml::to_string(&cfg).expect("toml");
    assert!(text.contains("AXIS = 1"));
    assert!(text.contains("QUANTIZE_BITS = 20"));
    assert!(!text.contains("OUTPUT"));
}
