//! Integration tests for the output writers.

use std::fs;

use listing_model::{OneHotEncoding, OrdinalEncoding, PipelineArtifacts, ScaleFactor};
use listing_output::{OutputError, temp_path_for, write_outputs};
use polars::prelude::{Column, DataFrame};
use tempfile::tempdir;

fn processed_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("Id".into(), [2539i64, 2595]),
        Column::new("Quartier".into(), [1i64, 2]),
        Column::new("Depart_Brooklyn".into(), [1i32, 0]),
        Column::new("Depart_Manhattan".into(), [0i32, 1]),
        Column::new("Nombre_avis_scale".into(), [0.21f64, 1.05]),
    ])
    .unwrap()
}

#[test]
fn csv_has_header_and_no_index_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("processed").join("preprocessing_data.csv");

    write_outputs(&processed_frame(), &path, None).expect("write csv");

    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("Id,Quartier,Depart_Brooklyn,Depart_Manhattan,Nombre_avis_scale")
    );
    assert_eq!(lines.next(), Some("2539,1,1,0,0.21"));
    assert_eq!(lines.next(), Some("2595,2,0,1,1.05"));
    assert_eq!(lines.next(), None);
    assert!(!temp_path_for(&path).exists());
}

#[test]
fn csv_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "stale\n").unwrap();

    write_outputs(&processed_frame(), &path, None).expect("write csv");

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Id,"));
}

#[test]
fn unwritable_destination_leaves_no_file() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("out.csv");

    let err = write_outputs(&processed_frame(), &path, None).unwrap_err();

    assert!(matches!(err, OutputError::Io { .. }));
    assert!(!path.exists());
}

#[test]
fn artifacts_manifest_is_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("artifacts.json");
    let artifacts = PipelineArtifacts {
        ordinal: vec![OrdinalEncoding::fit(
            "Type_chambre",
            ["Private room", "Entire home/apt"],
        )],
        one_hot: vec![OneHotEncoding {
            column: "Departement".to_string(),
            prefix: "Depart_".to_string(),
            categories: vec!["Brooklyn".to_string(), "Manhattan".to_string()],
        }],
        scale: vec![ScaleFactor {
            column: "Nombre_avis".to_string(),
            output_column: "Nombre_avis_scale".to_string(),
            factor: 44.55,
        }],
    };

    let csv_path = dir.path().join("preprocessing_data.csv");
    write_outputs(&processed_frame(), &csv_path, Some((&artifacts, &path))).expect("write outputs");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["ordinal"][0]["categories"][0], "Entire home/apt");
    assert_eq!(json["one_hot"][0]["prefix"], "Depart_");
    assert_eq!(json["scale"][0]["factor"], 44.55);
    let parsed: PipelineArtifacts = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, artifacts);
}

fn sample_artifacts(factor: f64) -> PipelineArtifacts {
    PipelineArtifacts {
        ordinal: Vec::new(),
        one_hot: Vec::new(),
        scale: vec![ScaleFactor {
            column: "Disponabilitie_365".to_string(),
            output_column: "Disponabilitie_365_scale".to_string(),
            factor,
        }],
    }
}

#[test]
fn scale_factor_survives_manifest_exactly() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    let path = dir.path().join("artifacts.json");
    let artifacts = sample_artifacts(127.49117616525469);

    write_outputs(&processed_frame(), &csv_path, Some((&artifacts, &path))).expect("write outputs");

    let parsed: PipelineArtifacts = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.scale[0].factor.to_bits(), artifacts.scale[0].factor.to_bits());
}

#[test]
fn unwritable_manifest_keeps_previous_csv() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");
    fs::write(&csv_path, "stale\n").unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let manifest_path = blocker.join("artifacts.json");

    let result = write_outputs(
        &processed_frame(),
        &csv_path,
        Some((&sample_artifacts(2.0), &manifest_path)),
    );

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&csv_path).unwrap(), "stale\n");
    assert!(!temp_path_for(&csv_path).exists());
}

#[test]
fn manifest_at_output_path_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let err = write_outputs(&processed_frame(), &path, Some((&sample_artifacts(2.0), &path)))
        .unwrap_err();

    assert!(matches!(err, OutputError::SamePath { .. }));
    assert!(!path.exists());
}
