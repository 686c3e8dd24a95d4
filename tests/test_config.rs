//! Run configuration and topology validation, JSON round trip.

use std::path::PathBuf;

use xornet::{Topology, TrainConfig, XorError};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("xornet-{}-{name}", std::process::id()))
}

#[test]
fn test_save_then_load() {
    let path = temp_path("config.json");
    let config = TrainConfig::new(0.25, 4000, 200);
    config.save_json(path.to_str().unwrap()).expect("save");
    let loaded = TrainConfig::load_json(path.to_str().unwrap()).expect("load");
    assert_eq!(loaded, config);
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_rejects_invalid_values() {
    let path = temp_path("bad.json");
    std::fs::write(&path, r#"{ "learning_rate": -1.0 }"#).unwrap();
    let err = TrainConfig::load_json(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, XorError::InvalidConfig(_)));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_reports_malformed_json() {
    let path = temp_path("malformed.json");
    std::fs::write(&path, "{ epochs: ").unwrap();
    let err = TrainConfig::load_json(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, XorError::Json(_)));
    std::fs::remove_file(path).ok();
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TrainConfig::load_json("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, XorError::Io(_)));
}

#[test]
fn test_topology_defaults_and_validation() {
    assert_eq!(Topology::default(), Topology::XOR);
    assert!(Topology::with_hidden(8).validate().is_ok());
    let err = Topology { output_nodes: 3, ..Topology::XOR }.validate().unwrap_err();
    assert!(err.to_string().contains("output_nodes"));
}
