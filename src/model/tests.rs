use serde_json::{json, Value};

use super::*;

fn as_mapping(value: Value) -> Mapping {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

fn voltage() -> QuantityValues {
    QuantityValues::builder("Reference voltage")
        .id("abc")
        .quantities(vec!["q1".to_string(), "q2".to_string()])
        .units(vec!["m".to_string(), "s".to_string()])
        .values(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        .standard_uncertainties(vec![vec![0.1, 0.2], vec![0.3, 0.4]])
        .build()
}

fn minimal_mapping() -> Mapping {
    as_mapping(json!({
        "name": "Reference voltage",
        "quantities": ["voltage"],
        "units": ["V"],
        "values": [[10.0]],
        "standard_uncertainties": [[0.01]],
    }))
}

fn is_uuid_text(id: &str) -> bool {
    id.len() == 36
        && id.chars().enumerate().all(|(i, c)| match i {
            8 | 13 | 18 | 23 => c == '-',
            _ => c.is_ascii_hexdigit() && !c.is_ascii_uppercase(),
        })
}

#[test]
fn test_generated_ids_are_distinct_uuids() {
    let a = QuantityValues::new("a", vec![], vec![], vec![], vec![]);
    let b = QuantityValues::new("b", vec![], vec![], vec![], vec![]);

    assert!(is_uuid_text(&a.id), "not a uuid: {}", a.id);
    assert!(is_uuid_text(&b.id), "not a uuid: {}", b.id);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_empty_id_is_replaced() {
    let ids = SequentialIdGenerator::new("qv");
    let qv = QuantityValues::builder("x").id("").build_with(&ids);
    assert_eq!(qv.id, "qv-0");
}

#[test]
fn test_explicit_id_survives_roundtrip() {
    let qv = voltage();
    let restored = QuantityValues::from_mapping(&qv.to_mapping().unwrap()).unwrap();
    assert_eq!(restored.id, "abc");
    assert_eq!(restored, qv);
}

#[test]
fn test_closure_id_generator() {
    let qv = QuantityValues::builder("x").build_with(&|| "fixed".to_string());
    assert_eq!(qv.id, "fixed");
}

#[test]
fn test_mapping_has_all_keys() {
    let map = voltage().to_mapping().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    for key in [
        "id",
        "name",
        "description",
        "changelog",
        "quantities",
        "symbols",
        "units",
        "values",
        "standard_uncertainties",
        "coverages",
        "probability_density_functions",
        "correlation_indices",
    ] {
        assert!(keys.contains(&key), "missing key {key}");
    }
    assert_eq!(map.len(), 12);
}

#[test]
fn test_list_order_preserved() {
    let map = voltage().to_mapping().unwrap();
    assert_eq!(map["quantities"], json!(["q1", "q2"]));
    assert_eq!(map["units"], json!(["m", "s"]));
    assert_eq!(map["values"], json!([[1.0, 2.0], [3.0, 4.0]]));
}

#[test]
fn test_absent_lists_encode_as_null() {
    let map = voltage().to_mapping().unwrap();
    assert_eq!(map["changelog"], Value::Null);
    assert_eq!(map["coverages"], Value::Null);
    assert_eq!(map["probability_density_functions"], Value::Null);
    assert_eq!(map["symbols"], Value::Null);
}

#[test]
fn test_empty_lists_stay_empty() {
    let qv = QuantityValues::builder("x")
        .changelog(vec![])
        .coverages(vec![])
        .probability_density_functions(vec![])
        .build();

    let map = qv.to_mapping().unwrap();
    assert_eq!(map["changelog"], json!([]));
    assert_eq!(map["coverages"], json!([]));

    let restored = QuantityValues::from_mapping(&map).unwrap();
    assert_eq!(restored.changelog, Some(vec![]));
    assert_eq!(restored.coverages, Some(vec![]));
    assert_eq!(restored.probability_density_functions, Some(vec![]));
}

#[test]
fn test_null_lists_preserved_by_default() {
    let restored = QuantityValues::from_mapping(&voltage().to_mapping().unwrap()).unwrap();
    assert_eq!(restored.changelog, None);
    assert_eq!(restored.coverages, None);
    assert_eq!(restored.probability_density_functions, None);
}

#[test]
fn test_normalize_empty_config() {
    let config = MappingConfig::normalize_empty();

    let map = voltage().to_mapping_with(&config).unwrap();
    assert_eq!(map["changelog"], json!([]));

    let restored =
        QuantityValues::from_mapping_with(&minimal_mapping(), &config, &UuidV4Generator).unwrap();
    assert_eq!(restored.changelog, Some(vec![]));
    assert_eq!(restored.coverages, Some(vec![]));
    assert_eq!(restored.probability_density_functions, Some(vec![]));
    // plain optional lists are not collaborator lists
    assert_eq!(restored.symbols, None);
}

#[test]
fn test_missing_units_is_an_error() {
    let mut map = minimal_mapping();
    map.remove("units");

    let err = QuantityValues::from_mapping(&map).unwrap_err();
    assert!(matches!(err, ModelError::MissingField("units")));
}

#[test]
fn test_each_required_field_is_enforced() {
    for field in ["name", "quantities", "units", "values", "standard_uncertainties"] {
        let mut map = minimal_mapping();
        map.remove(field);
        let err = QuantityValues::from_mapping(&map).unwrap_err();
        assert_eq!(err.missing_field(), Some(field));
    }
}

#[test]
fn test_missing_symbols_is_fine() {
    let qv = QuantityValues::from_mapping(&minimal_mapping()).unwrap();
    assert_eq!(qv.symbols, None);
    assert_eq!(qv.description, None);
    assert_eq!(qv.correlation_indices, None);
    assert!(is_uuid_text(&qv.id));
}

#[test]
fn test_decoding_draws_ids_from_generator() {
    let ids = SequentialIdGenerator::new("decoded");
    let config = MappingConfig::default();

    let first = QuantityValues::from_mapping_with(&minimal_mapping(), &config, &ids).unwrap();
    let second = QuantityValues::from_mapping_with(&minimal_mapping(), &config, &ids).unwrap();

    assert_eq!(first.id, "decoded-0");
    assert_eq!(second.id, "decoded-1");
}

#[test]
fn test_wrong_type_is_invalid_field() {
    let mut map = minimal_mapping();
    map.insert("values".into(), json!("not a table"));

    let err = QuantityValues::from_mapping(&map).unwrap_err();
    assert!(matches!(err, ModelError::InvalidField { field: "values", .. }));
}

#[test]
fn test_malformed_changelog_entry_reports_location() {
    let mut map = minimal_mapping();
    map.insert(
        "changelog".into(),
        json!([
            {"timestamp": "2024-01-01T00:00:00Z", "description": "created"},
            {"timestamp": "2024-02-01T00:00:00Z"}
        ]),
    );

    let err = QuantityValues::from_mapping(&map).unwrap_err();
    match &err {
        ModelError::MalformedNestedRecord { location, .. } => {
            assert_eq!(location, "changelog[1]");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.missing_field(), Some("description"));
}

#[test]
fn test_collaborators_roundtrip() {
    let qv = QuantityValues::builder("Mass")
        .quantities(vec!["mass".to_string()])
        .units(vec!["kg".to_string()])
        .values(vec![vec![1.000_000_12]])
        .standard_uncertainties(vec![vec![2.0e-8]])
        .add_changelog_entry(
            ChangelogEntry::new("2024-01-01T00:00:00Z", "created").with_author("lab"),
        )
        .add_changelog_entry(ChangelogEntry::new("2024-03-01T00:00:00Z", "recalibrated"))
        .coverages(vec![Coverage::new(
            0.95,
            vec![vec![1.000_000_08]],
            vec![vec![1.000_000_16]],
        )
        .with_coverage_factor(2.0)])
        .probability_density_functions(vec![ProbabilityDensityFunction::new("normal")
            .with_parameter("mean", 1.000_000_12)
            .with_parameter("std", 2.0e-8)])
        .correlation_indices(vec![0])
        .build();

    let restored = QuantityValues::from_mapping(&qv.to_mapping().unwrap()).unwrap();
    assert_eq!(restored, qv);

    let changelog = restored.changelog.unwrap();
    assert_eq!(changelog[0].description, "created");
    assert_eq!(changelog[1].description, "recalibrated");
}

#[test]
fn test_changelog_now_is_rfc3339() {
    let entry = ChangelogEntry::now("created");
    assert!(chrono::DateTime::parse_from_rfc3339(&entry.timestamp).is_ok());
}

#[test]
fn test_state_without_quantity_value() {
    let state = State::named("idle");
    let map = state.to_mapping().unwrap();
    assert_eq!(map["quantity_value"], Value::Null);
    assert_eq!(map["description"], Value::Null);
}

#[test]
fn test_state_from_name_only() {
    let state = State::from_mapping(&as_mapping(json!({"name": "x"}))).unwrap();
    assert_eq!(state.name.as_deref(), Some("x"));
    assert_eq!(state.description, None);
    assert_eq!(state.quantity_value, None);
}

#[test]
fn test_state_fully_empty() {
    let state = State::from_mapping(&Mapping::new()).unwrap();
    assert_eq!(state, State::new());
}

#[test]
fn test_state_empty_quantity_value_is_none() {
    let state =
        State::from_mapping(&as_mapping(json!({"name": "x", "quantity_value": {}}))).unwrap();
    assert_eq!(state.quantity_value, None);
}

#[test]
fn test_state_roundtrip_with_quantity_value() {
    let state = State::named("heated").with_quantity_value(voltage());
    let restored = State::from_mapping(&state.to_mapping().unwrap()).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_state_nested_error_propagates() {
    let map = as_mapping(json!({"quantity_value": {"name": "no tables"}}));
    let err = State::from_mapping(&map).unwrap_err();

    assert!(matches!(err, ModelError::MalformedNestedRecord { .. }));
    assert_eq!(err.missing_field(), Some("quantities"));
}

#[test]
fn test_json_text_roundtrip() {
    let qv = voltage();
    let json = qv.to_json_pretty().unwrap();
    let restored = QuantityValues::from_json(&json).unwrap();
    assert_eq!(restored, qv);
}

#[test]
fn test_json_root_must_be_object() {
    let err = State::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, ModelError::NotAnObject(_)));
}

#[test]
fn test_serde_matches_mapping() {
    let qv = voltage();
    let value = serde_json::to_value(&qv).unwrap();
    assert_eq!(value, Value::Object(qv.to_mapping().unwrap()));

    let restored: QuantityValues = serde_json::from_value(value).unwrap();
    assert_eq!(restored, qv);
}

#[test]
fn test_non_finite_values_survive_mapping() {
    let qv = QuantityValues::builder("Drift")
        .quantities(vec!["a".to_string(), "b".to_string()])
        .units(vec!["V".to_string(), "V".to_string()])
        .values(vec![vec![f64::NAN, 1.0]])
        .standard_uncertainties(vec![vec![f64::INFINITY, f64::NEG_INFINITY]])
        .coverages(vec![Coverage::new(
            0.95,
            vec![vec![f64::NEG_INFINITY, 0.5]],
            vec![vec![f64::INFINITY, f64::NAN]],
        )
        .with_coverage_factor(f64::INFINITY)])
        .probability_density_functions(vec![
            ProbabilityDensityFunction::new("uniform").with_parameter("upper", f64::INFINITY)
        ])
        .build();

    let map = qv.to_mapping().unwrap();
    assert_eq!(map["values"], json!([["NaN", 1.0]]));
    assert_eq!(map["standard_uncertainties"], json!([["Infinity", "-Infinity"]]));
    assert_eq!(map["coverages"][0]["lower_limits"], json!([["-Infinity", 0.5]]));
    assert_eq!(map["coverages"][0]["upper_limits"], json!([["Infinity", "NaN"]]));

    let restored = QuantityValues::from_mapping(&map).unwrap();
    assert!(restored.values[0][0].is_nan());
    assert_eq!(restored.values[0][1], 1.0);
    assert_eq!(
        restored.standard_uncertainties,
        vec![vec![f64::INFINITY, f64::NEG_INFINITY]]
    );

    let coverage = &restored.coverages.as_ref().unwrap()[0];
    assert_eq!(coverage.lower_limits, vec![vec![f64::NEG_INFINITY, 0.5]]);
    assert_eq!(coverage.upper_limits[0][0], f64::INFINITY);
    assert!(coverage.upper_limits[0][1].is_nan());
    assert_eq!(coverage.coverage_factor, Some(f64::INFINITY));

    let pdf = &restored.probability_density_functions.as_ref().unwrap()[0];
    assert_eq!(pdf.parameters.as_ref().unwrap()["upper"], f64::INFINITY);
}

#[test]
fn test_non_finite_values_survive_json_text() {
    let qv = QuantityValues::builder("Drift")
        .values(vec![vec![f64::NAN], vec![f64::NEG_INFINITY]])
        .standard_uncertainties(vec![vec![f64::INFINITY], vec![0.0]])
        .build();

    let json = qv.to_json().unwrap();
    let restored = QuantityValues::from_json(&json).unwrap();

    assert!(restored.values[0][0].is_nan());
    assert_eq!(restored.values[1][0], f64::NEG_INFINITY);
    assert_eq!(restored.standard_uncertainties, vec![vec![f64::INFINITY], vec![0.0]]);
}

#[test]
fn test_unknown_float_token_is_invalid_field() {
    let mut map = minimal_mapping();
    map.insert("standard_uncertainties".into(), json!([["nan"]]));

    let err = QuantityValues::from_mapping(&map).unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidField {
            field: "standard_uncertainties",
            ..
        }
    ));
}

#[test]
fn test_malformed_coverage_reports_location() {
    let mut map = minimal_mapping();
    map.insert(
        "coverages".into(),
        json!([{"coverage_probability": 0.95, "lower_limits": [[9.98]]}]),
    );

    let err = QuantityValues::from_mapping(&map).unwrap_err();
    match &err {
        ModelError::MalformedNestedRecord { location, .. } => {
            assert_eq!(location, "coverages[0]");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.missing_field(), Some("upper_limits"));
}

#[test]
fn test_malformed_pdf_reports_location() {
    let mut map = minimal_mapping();
    map.insert(
        "probability_density_functions".into(),
        json!([{"distribution": "normal"}, {"parameters": {"mean": 0.0}}]),
    );

    let err = QuantityValues::from_mapping(&map).unwrap_err();
    match &err {
        ModelError::MalformedNestedRecord { location, .. } => {
            assert_eq!(location, "probability_density_functions[1]");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.missing_field(), Some("distribution"));
}

#[test]
fn test_state_quantity_value_must_be_an_object() {
    let map = as_mapping(json!({"name": "x", "quantity_value": 5}));

    let err = State::from_mapping(&map).unwrap_err();
    assert!(matches!(
        err,
        ModelError::InvalidField {
            field: "quantity_value",
            ..
        }
    ));
}
