use chrono::NaiveDate;
use demosynth_core::{DeclarationGroup, Person};
use schemars::schema_for;

fn sample_person() -> Person {
    Person {
        id: "1000000042".to_string(),
        first_name: "Laura".to_string(),
        last_name: "Gómez Torres".to_string(),
        birth_city: "Bogotá".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1984, 6, 14).expect("valid date"),
        age: 41,
        declaration_group: DeclarationGroup::B,
        annual_income: 120_000_000.0,
        net_worth: 800_000_000.0,
        debt: 90_000_000.0,
        is_filing_taxpayer: true,
    }
}

#[test]
fn person_round_trips_through_json() {
    let person = sample_person();
    let json = serde_json::to_string(&person).expect("serialize person");
    let back: Person = serde_json::from_str(&json).expect("deserialize person");
    assert_eq!(person, back);
}

#[test]
fn declaration_group_serializes_as_bare_letter() {
    let json = serde_json::to_string(&DeclarationGroup::C).expect("serialize group");
    assert_eq!(json, "\"C\"");
}

#[test]
fn json_schema_covers_all_fields() {
    let generated = schema_for!(Person);
    let value = serde_json::to_value(&generated).expect("serialize generated schema");
    let properties = value
        .get("properties")
        .and_then(|p| p.as_object())
        .expect("properties object");

    for field in [
        "id",
        "first_name",
        "last_name",
        "birth_city",
        "birth_date",
        "age",
        "declaration_group",
        "annual_income",
        "net_worth",
        "debt",
        "is_filing_taxpayer",
    ] {
        assert!(properties.contains_key(field), "missing field {field}");
    }
}

#[test]
fn summary_leads_with_id_and_name() {
    let person = sample_person();
    let summary = person.summary();
    assert!(summary.starts_with("[1000000042] Laura Gómez Torres"));
    assert!(summary.contains("Bogotá"));
}
