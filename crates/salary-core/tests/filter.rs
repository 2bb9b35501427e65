//! Integration tests for the cascading filter engine.

use salary_core::{FilterError, FilterLevel, FilterState, Selection};
use salary_model::{Position, Record};

fn scenario() -> Vec<Record> {
    vec![Record::new(
        "A",
        vec![Position::new("X", "Y", 100.0), Position::new("X", "Z", 50.0)],
    )]
}

fn directory() -> Vec<Record> {
    vec![
        Record::new("John Doe", vec![Position::new("Engineering", "Physics", 90.0)]),
        Record::new(
            "Jane Roe",
            vec![
                Position::new("Engineering", "Mathematics", 80.0),
                Position::new("English", "Writing", 20.0),
            ],
        ),
        Record::new("Joan Poe", vec![Position::new("English", "Poetry", 60.0)]),
        Record::new("Mark Moe", vec![Position::new("Law", "Clinic", 70.0)]),
    ]
}

fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn college_then_department_yields_record() {
    let mut state = FilterState::new(scenario());
    assert_eq!(state.select("X"), Selection::College("X".to_string()));
    assert_eq!(state.select("Y"), Selection::Department("Y".to_string()));
    assert_eq!(names(&state.visible()), vec!["A"]);
}

#[test]
fn unknown_department_yields_nothing() {
    let mut state = FilterState::new(scenario());
    state.select("X");
    state.select("Q");
    assert!(state.visible().is_empty());
}

#[test]
fn department_without_college_is_rejected() {
    let mut state = FilterState::new(scenario());
    let err = state.select_department("Y").unwrap_err();
    assert_eq!(
        err,
        FilterError::DepartmentWithoutCollege {
            department: "Y".to_string()
        }
    );
    assert_eq!(state.selected_department(), None);
    assert_eq!(state.visible().len(), 1);
}

#[test]
fn clearing_college_restores_everything() {
    let mut state = FilterState::new(directory());
    let all: Vec<String> = state.visible().iter().map(|r| r.name.clone()).collect();

    state.select("English");
    state.select("Poetry");
    assert_eq!(names(&state.visible()), vec!["Joan Poe"]);

    state.clear_college();
    assert_eq!(state.selected_department(), None);
    assert_eq!(state.level(), FilterLevel::College);
    let restored: Vec<String> = state.visible().iter().map(|r| r.name.clone()).collect();
    assert_eq!(restored, all);
    assert_eq!(state.eligible_options(), ["Engineering", "English", "Law"]);
}

#[test]
fn clearing_department_restores_college_options() {
    let mut state = FilterState::new(directory());
    state.select("Engineering");
    state.select("Physics");
    state.clear_department();
    assert_eq!(state.eligible_options(), ["Mathematics", "Physics"]);
    assert_eq!(names(&state.visible()), vec!["John Doe", "Jane Roe"]);
}

#[test]
fn autocomplete_narrows_by_level() {
    let mut state = FilterState::new(directory());
    assert_eq!(state.options("en"), vec!["Engineering", "English"]);
    assert_eq!(state.options("eng"), vec!["Engineering", "English"]);
    assert_eq!(state.options("Engi"), vec!["Engineering"]);
    assert_eq!(state.options("engl"), vec!["English"]);
    state.select("English");
    assert_eq!(state.options(""), vec!["Poetry", "Writing"]);
    assert_eq!(state.options("w"), vec!["Writing"]);
}

#[test]
fn name_search_composes_with_coarse_filter() {
    let mut state = FilterState::new(directory());
    state.set_name_query("jo");
    assert_eq!(names(&state.visible()), vec!["John Doe", "Joan Poe"]);

    state.select("English");
    assert_eq!(names(&state.visible()), vec!["Joan Poe"]);
    assert_eq!(state.coarse_matches().len(), 2);

    state.clear_college();
    state.set_name_query("  ROE ");
    assert_eq!(names(&state.visible()), vec!["Jane Roe"]);
}

#[test]
fn subscribers_receive_option_updates() {
    let mut state = FilterState::new(directory());
    let options = state.subscribe();
    let dropped = state.subscribe();
    drop(dropped);

    state.select("Law");
    state.select("Clinic");
    state.clear_department();
    state.clear_college();

    let updates: Vec<Vec<String>> = options.try_iter().collect();
    assert_eq!(
        updates,
        vec![
            vec!["Clinic".to_string()],
            Vec::new(),
            vec!["Clinic".to_string()],
            vec![
                "Engineering".to_string(),
                "English".to_string(),
                "Law".to_string()
            ],
        ]
    );
}

#[test]
fn replacing_records_resets_filters() {
    let mut state = FilterState::new(directory());
    state.select("Law");
    state.set_name_query("mark");
    state.replace_records(scenario());
    assert_eq!(state.selected_college(), None);
    assert_eq!(state.name_query(), "");
    assert_eq!(state.eligible_options(), ["X"]);
    assert_eq!(names(&state.visible()), vec!["A"]);
}
