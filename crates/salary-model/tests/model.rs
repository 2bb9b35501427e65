use salary_model::{ModelError, Record, TenureCode, tenure_description};

#[test]
fn deserializes_nested_records() {
    let json = r#"[{
        "name": "Doe, Jane",
        "salary": 150.0,
        "positions": [
            {"title": "Professor", "department": "Physics", "college": "Engineering",
             "positionSalary": 100.0, "tenure": "Indefinite tenure", "payType": "AA"},
            {"department": "Physics", "college": "Engineering", "positionSalary": 50.0}
        ]
    }]"#;
    let records: Vec<Record> = serde_json::from_str(json).expect("parse records");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Doe, Jane");
    assert_eq!(record.salary, Some(150.0));
    assert_eq!(record.positions.len(), 2);
    assert_eq!(record.positions[0].pay_type, "AA");
    assert_eq!(record.positions[1].title, "");
}

#[test]
fn flat_record_becomes_single_position() {
    let json = r#"{"name": "Roe, Rick", "college": "Law", "department": "Clinic", "salary": 80000}"#;
    let record: Record = serde_json::from_str(json).expect("parse flat record");
    assert_eq!(record.salary, Some(80000.0));
    assert_eq!(record.positions.len(), 1);
    assert!(record.has_position_in("Law", "Clinic"));
    assert!((record.positions[0].position_salary - 80000.0).abs() < 1e-9);
}

#[test]
fn serializes_camel_case_fields() {
    let json = r#"{"name": "A", "positions": [{"college": "X", "department": "Y", "positionSalary": 1.5}]}"#;
    let record: Record = serde_json::from_str(json).expect("parse");
    let value = serde_json::to_value(&record).expect("serialize");
    assert!(value.get("salary").is_none());
    assert_eq!(value["positions"][0]["positionSalary"], 1.5);
    assert_eq!(value["positions"][0]["payType"], "");
}

#[test]
fn tenure_codes_map_to_descriptions() {
    assert_eq!(tenure_description("A"), "Indefinite tenure");
    assert_eq!(tenure_description(" q "), "Specified Term Appointment");
    assert_eq!(tenure_description(""), "");
    assert_eq!(tenure_description("Z"), "");
    assert_eq!("T".parse::<TenureCode>().expect("T"), TenureCode::Terminal);
    assert!(matches!(
        "Z".parse::<TenureCode>(),
        Err(ModelError::UnknownTenureCode(code)) if code == "Z"
    ));
}
