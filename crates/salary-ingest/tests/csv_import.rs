use std::fs;

use salary_ingest::{IngestError, import_salary_csv, parse_dataset, write_dataset};
use tempfile::TempDir;

const HEADER: &str =
    "\u{feff}name,total_salary,position_title,department,college,position_salary,tenure,pay_type\n";

#[test]
fn groups_rows_by_name_and_total() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("UIS.csv");
    let body = format!(
        "{HEADER}\
         Zed,100000,Professor,Physics,Engineering,60000,A,AA\n\
         Able,50000,Lecturer,English,LAS,50000,Q,BA\n\
         Zed,100000.00,Director,Dean's Office,Engineering,40000,,AL\n\
         Zed,75000,Clerk,Registrar,Admin,75000,X,BB\n"
    );
    fs::write(&path, body).expect("write csv");

    let records = import_salary_csv(&path).expect("import");
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Able", "Zed", "Zed"]);

    let zed = &records[1];
    assert_eq!(zed.salary, Some(100000.0));
    assert_eq!(zed.positions.len(), 2);
    assert_eq!(zed.positions[0].title, "Professor");
    assert_eq!(zed.positions[0].tenure, "Indefinite tenure");
    assert_eq!(zed.positions[1].tenure, "");
    assert_eq!(zed.positions[1].pay_type, "AL");

    assert_eq!(records[0].positions[0].tenure, "Specified Term Appointment");
    assert_eq!(records[2].positions[0].tenure, "");
}

#[test]
fn missing_column_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.csv");
    fs::write(&path, "name,total_salary\nA,1\n").expect("write csv");
    let err = import_salary_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "position_title"));
}

#[test]
fn invalid_salary_names_row() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bad.csv");
    let body = format!("{HEADER}A,1,T,D,C,1,A,AA\nB,lots,T,D,C,1,A,AA\n");
    fs::write(&path, body).expect("write csv");
    let err = import_salary_csv(&path).unwrap_err();
    assert!(matches!(err, IngestError::InvalidNumber { row: 2, .. }));
}

#[test]
fn written_dataset_loads_back() {
    let dir = TempDir::new().expect("temp dir");
    let csv_path = dir.path().join("in.csv");
    let json_path = dir.path().join("out.json");
    fs::write(
        &csv_path,
        format!("{HEADER}Doe,150,Prof,Physics,Eng,50,P,AA\nDoe,150,Chair,Physics,Eng,100,P,AA\n"),
    )
    .expect("write csv");

    let records = import_salary_csv(&csv_path).expect("import");
    write_dataset(&json_path, &records).expect("write json");

    let text = fs::read_to_string(&json_path).expect("read json");
    assert!(text.contains("\t{"));
    assert!(text.contains("\"positionSalary\""));
    let loaded = parse_dataset(&text, &json_path).expect("parse");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].positions[0].title, "Chair");
    assert_eq!(loaded[0].positions[0].tenure, "Probationary Term");
}
