//! The accumulator is keyed by `text` and capped.

use super::common::{entries_of, make_entry};
use codelink::{Config, CorpusIndex, SuggestionEngine};
use std::collections::HashSet;

#[test]
fn test_cap_at_twenty_with_thirty_matches() {
    let texts: Vec<String> = (0..30).map(|i| format!("douleur zone{i}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let index = CorpusIndex::build(entries_of(&refs));

    let results = SuggestionEngine::new(&index).suggest(&["douleur"]);
    assert_eq!(results.len(), 20);

    let unique: HashSet<_> = results.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(unique.len(), 20);
}

#[test]
fn test_same_text_from_two_coding_systems_appears_once() {
    let index = CorpusIndex::build(vec![
        make_entry("ICPC|K86", "K86", "Hypertension"),
        make_entry("ICD|I10", "I10", "Hypertension"),
        make_entry("ICD|I15", "I15", "Hypertension secondaire"),
    ]);
    let results = SuggestionEngine::new(&index).suggest(&["hypertension"]);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].code, "K86");
    assert_eq!(results[1].code, "I15");
}

#[test]
fn test_duplicates_do_not_consume_capacity() {
    let mut entries = vec![];
    for i in 0..5 {
        entries.push(make_entry(&format!("ICPC|D{i}"), "D", "Toux"));
    }
    entries.push(make_entry("ICPC|R05", "R05", "Toux sèche"));
    let index = CorpusIndex::build(entries);

    let results = SuggestionEngine::with_limit(&index, 2).suggest(&["toux"]);
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].text, "Toux sèche");
}

#[test]
fn test_config_limit_is_honored() {
    let texts: Vec<String> = (0..10).map(|i| format!("rash type{i}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let index = CorpusIndex::build(entries_of(&refs));

    let config = Config::from_json(r#"{"suggestion_limit": 3}"#).unwrap();
    let results = SuggestionEngine::from_config(&index, &config).suggest(&["rash"]);
    assert_eq!(results.len(), 3);
}
