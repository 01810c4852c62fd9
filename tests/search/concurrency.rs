//! A built index is shared read-only between concurrent queries.

use super::common::sample_index;
use codelink::SuggestionEngine;
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_queries_match_sequential() {
    let index = Arc::new(sample_index());
    let queries: Vec<Vec<&'static str>> = vec![
        vec!["fatigue"],
        vec!["migraine", "opht"],
        vec!["CÉPHALÉE"],
        vec!["xyz", "grosse"],
    ];
    let expected: Vec<_> = queries
        .iter()
        .map(|q| SuggestionEngine::new(&index).suggest(q))
        .collect();

    let handles: Vec<_> = queries
        .into_iter()
        .map(|q| {
            let index = Arc::clone(&index);
            thread::spawn(move || SuggestionEngine::new(&index).suggest(&q))
        })
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
