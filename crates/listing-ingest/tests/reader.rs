use std::fs;
use std::path::PathBuf;

use listing_ingest::{IngestError, IngestOptions, profile_columns, read_listings, read_schema};
use polars::prelude::DataType;
use proptest::prelude::*;

fn temp_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    (dir, path)
}

const HEADER: &str = "id,name,host_id,host_name,neighbourhood_group,neighbourhood,latitude,longitude,room_type,price,minimum_nights,number_of_reviews,last_review,reviews_per_month,calculated_host_listings_count,availability_365";

#[test]
fn reads_listing_export() {
    let contents = format!(
        "{HEADER}\n\
         2539,Clean & quiet apt home by the park,2787,John,Brooklyn,Kensington,40.64749,-73.97237,Private room,149,1,9,2018-10-19,0.21,6,365\n\
         3647,THE VILLAGE OF HARLEM....NEW YORK !,4632,Elisabeth,Manhattan,Harlem,40.80902,-73.9419,Private room,150,3,0,,,1,365\n"
    );
    let (_dir, path) = temp_file("AB_NYC_2019.csv", &contents);
    let df = read_listings(&path, &IngestOptions::default()).expect("read csv");

    assert_eq!(df.width(), 16);
    assert_eq!(df.height(), 2);
    assert_eq!(df.column("price").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("latitude").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("room_type").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("reviews_per_month").unwrap().null_count(), 1);
    assert_eq!(df.column("last_review").unwrap().null_count(), 1);

    let profiles = profile_columns(&df);
    let reviews = profiles
        .iter()
        .find(|profile| profile.name == "reviews_per_month")
        .expect("reviews profile");
    assert_eq!(reviews.nulls, 1);
    assert!((reviews.missing_percent - 50.0).abs() < 1e-9);
    assert_eq!(reviews.dtype, "f64");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing.csv");
    let err = read_listings(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn ragged_row_is_parse_error() {
    let (_dir, path) = temp_file("ragged.csv", "a,b,c\n1,2,3\n4,5\n");
    let err = read_listings(&path, &IngestOptions::default()).unwrap_err();
    match err {
        IngestError::Parse { line, message, .. } => {
            assert_eq!(line, 3);
            assert_eq!(message, "expected 3 fields, found 2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_file_is_rejected() {
    let (_dir, path) = temp_file("empty.csv", "");
    assert!(matches!(
        read_listings(&path, &IngestOptions::default()),
        Err(IngestError::EmptyCsv { .. })
    ));
    assert!(matches!(
        read_schema(&path, &IngestOptions::default()),
        Err(IngestError::EmptyCsv { .. })
    ));
}

#[test]
fn header_only_file_has_no_rows() {
    let (_dir, path) = temp_file("header.csv", "a,b\n");
    let df = read_listings(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(df.width(), 2);
    assert_eq!(df.height(), 0);
}

proptest! {
    #[test]
    fn integer_columns_round_trip(values in proptest::collection::vec(-1_000_000i64..1_000_000, 1..40)) {
        let mut contents = String::from("value\n");
        for value in &values {
            contents.push_str(&format!("{value}\n"));
        }
        let (_dir, path) = temp_file("ints.csv", &contents);
        let df = read_listings(&path, &IngestOptions::default()).expect("read csv");
        let column = df.column("value").unwrap().i64().unwrap();
        let read: Vec<i64> = column.into_no_null_iter().collect();
        prop_assert_eq!(read, values);
    }
}
