//! 对任意查询串成立的性质：长度校验、前缀正确性、完备性、幂等、无重复。

use std::collections::HashSet;

use luasense_core::lua::lua_vocabulary;
use luasense_core::{AutocompleteError, Autocompleter, SortOrder, Vocabulary, autocomplete};
use quickcheck::{QuickCheck, TestResult};

/// 取词表中某个词的前 `cut` 个字符作为查询串，保证能命中。
fn vocab_prefix(idx: usize, cut: usize) -> String {
    let entries = lua_vocabulary().entries();
    let word = &entries[idx % entries.len()].text;
    let n = word.chars().count();
    word.chars().take(2 + cut % n.max(1)).collect()
}

fn expected(query: &str) -> Vec<String> {
    lua_vocabulary()
        .entries()
        .iter()
        .filter(|e| e.text.starts_with(query))
        .map(|e| e.text.clone())
        .collect()
}

#[test]
fn short_queries_always_fail() {
    fn prop(q: String) -> TestResult {
        if q.chars().count() >= 2 {
            return TestResult::discard();
        }
        TestResult::from_bool(matches!(
            autocomplete(&q),
            Err(AutocompleteError::TooShortRequest { .. })
        ))
    }
    QuickCheck::new()
        .tests(50)
        .max_tests(20_000)
        .quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn long_queries_return_only_prefix_matches() {
    fn prop(q: String) -> TestResult {
        if q.chars().count() < 2 {
            return TestResult::discard();
        }
        match autocomplete(&q) {
            Ok(out) => TestResult::from_bool(out.iter().all(|s| s.starts_with(q.as_str()))),
            Err(_) => TestResult::failed(),
        }
    }
    QuickCheck::new().quickcheck(prop as fn(String) -> TestResult);
}

#[test]
fn results_are_complete_and_in_definition_order() {
    fn prop(idx: usize, cut: usize) -> bool {
        let q = vocab_prefix(idx, cut);
        autocomplete(&q).map(|out| out == expected(&q)).unwrap_or(false)
    }
    QuickCheck::new().quickcheck(prop as fn(usize, usize) -> bool);
}

#[test]
fn repeated_calls_are_identical() {
    fn prop(idx: usize, cut: usize) -> bool {
        let q = vocab_prefix(idx, cut);
        autocomplete(&q) == autocomplete(&q)
    }
    QuickCheck::new().quickcheck(prop as fn(usize, usize) -> bool);
}

#[test]
fn results_have_no_duplicates_and_come_from_vocabulary() {
    fn prop(idx: usize, cut: usize) -> bool {
        let q = vocab_prefix(idx, cut);
        let Ok(out) = autocomplete(&q) else {
            return false;
        };
        let unique: HashSet<&String> = out.iter().collect();
        unique.len() == out.len() && out.iter().all(|s| lua_vocabulary().contains(s))
    }
    QuickCheck::new().quickcheck(prop as fn(usize, usize) -> bool);
}

#[test]
fn sort_order_never_changes_the_set() {
    fn prop(idx: usize, cut: usize) -> bool {
        let q = vocab_prefix(idx, cut);
        let by_len = Autocompleter::new(lua_vocabulary()).order(SortOrder::LengthThenAlpha);
        let (Ok(mut a), Ok(mut b)) = (autocomplete(&q), by_len.autocomplete(&q)) else {
            return false;
        };
        a.sort();
        b.sort();
        a == b
    }
    QuickCheck::new().quickcheck(prop as fn(usize, usize) -> bool);
}
