//! Integration tests for the roster core
//!
//! These tests drive the public crate surface end to end: parse an
//! uploaded workbook, aggregate it, and look records up the way the
//! dashboard shell does.

mod fixtures;
mod helpers;

use fixtures::{sample_workbook, workbook_bytes, SAMPLE_ROWS};
use helpers::builtin_classifier;
use roster::{
    find_by_national_id, gender_aggregate, load_from_bytes, model_workbook, team_aggregate,
};
use shared::{AggregateEntry, LoadError, SearchError};

#[test]
fn uploaded_workbook_round_trips_into_a_store() {
    let store = load_from_bytes(&sample_workbook()).unwrap();

    assert_eq!(store.len(), 3);
    assert!(store.extra_columns().is_empty());

    let first = &store.records()[0];
    assert_eq!(first.name, "Maria Silva");
    // Punctuation is stripped from ids at load time.
    assert_eq!(first.national_id, "12345678900");
    assert_eq!(first.team, "Vendas");
}

#[test]
fn team_aggregate_orders_largest_first() {
    let store = load_from_bytes(&sample_workbook()).unwrap();
    let teams = team_aggregate(&store);

    assert_eq!(
        teams,
        vec![
            AggregateEntry::new("Vendas", 2),
            AggregateEntry::new("TI", 1),
        ]
    );
}

#[test]
fn gender_aggregate_counts_inferred_genders() {
    let store = load_from_bytes(&sample_workbook()).unwrap();
    let genders = gender_aggregate(&store, &builtin_classifier());

    assert_eq!(
        genders,
        vec![
            AggregateEntry::new("Female", 2),
            AggregateEntry::new("Male", 1),
        ]
    );
}

#[test]
fn lookup_accepts_the_punctuated_form() {
    let store = load_from_bytes(&sample_workbook()).unwrap();

    let found = find_by_national_id(&store, "987.654.321-00").unwrap();
    assert_eq!(found.name, "João Souza");

    let found = find_by_national_id(&store, "11122233344").unwrap();
    assert_eq!(found.name, "Ana Costa");
}

#[test]
fn lookup_distinguishes_invalid_from_missing() {
    let store = load_from_bytes(&sample_workbook()).unwrap();

    assert_eq!(
        find_by_national_id(&store, ""),
        Err(SearchError::InvalidQuery)
    );
    assert_eq!(
        find_by_national_id(&store, "000.000.000-00"),
        Err(SearchError::NotFound)
    );
}

#[test]
fn missing_required_columns_are_reported_by_name() {
    let bytes = workbook_bytes(&["NOME", "EQUIPE"], &[vec!["Maria Silva", "Vendas"]]);

    match load_from_bytes(&bytes) {
        Err(LoadError::SchemaMismatch { missing }) => {
            assert_eq!(missing, vec!["CPF".to_string()]);
        }
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn extra_columns_are_tolerated_and_preserved() {
    let bytes = workbook_bytes(
        &["NOME", "CPF", "EQUIPE", "CARGO"],
        &[vec!["Maria Silva", "123.456.789-00", "Vendas", "Analista"]],
    );
    let store = load_from_bytes(&bytes).unwrap();

    assert_eq!(store.extra_columns(), ["CARGO".to_string()]);
    assert_eq!(store.records()[0].extras, vec!["Analista".to_string()]);
}

#[test]
fn model_workbook_is_a_loadable_roster() {
    let bytes = model_workbook().unwrap();
    let store = load_from_bytes(&bytes).unwrap();

    assert_eq!(store.len(), 1);
    let example = &store.records()[0];
    assert_eq!(example.national_id, "00000000000");

    // The example row participates in the normal pipeline.
    let found = find_by_national_id(&store, "000.000.000-00").unwrap();
    assert_eq!(found.name, example.name);
}

#[test]
fn aggregates_serialize_for_the_chart_layer() {
    let store = load_from_bytes(&sample_workbook()).unwrap();
    let json = serde_json::to_value(team_aggregate(&store)).unwrap();

    assert_eq!(json[0]["label"], "Vendas");
    assert_eq!(json[0]["count"], 2);
    assert_eq!(json[1]["label"], "TI");
}

#[test]
fn sample_rows_and_store_agree_on_order() {
    let store = load_from_bytes(&sample_workbook()).unwrap();

    for (record, (name, _, team)) in store.iter().zip(SAMPLE_ROWS.iter()) {
        assert_eq!(record.name, *name);
        assert_eq!(record.team, *team);
    }
}
