#![allow(missing_docs)]

mod common;

use common::test_model;
use wordseam::Candidate;

fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

#[test]
fn split_simple() {
    let m = test_model();
    assert_eq!(m.split("derekanderson"), tokens(&["derek", "anderson"]));
}

#[test]
fn split_preserves_case() {
    let m = test_model();
    assert_eq!(m.split("DEREKANDERSON"), tokens(&["DEREK", "ANDERSON"]));
}

#[test]
fn split_with_separators() {
    let m = test_model();
    assert_eq!(m.split("derek anderson"), tokens(&["derek", " ", "anderson"]));
    assert_eq!(m.split("derek-anderson"), tokens(&["derek", "-", "anderson"]));
    assert_eq!(m.split("derek_anderson"), tokens(&["derek", "_", "anderson"]));
    assert_eq!(m.split("derek/anderson"), tokens(&["derek", "/", "anderson"]));
}

#[test]
fn split_digits() {
    let m = test_model();
    assert_eq!(m.split("win32intel"), tokens(&["win", "32", "intel"]));
}

#[test]
fn split_apostrophes() {
    let m = test_model();
    assert_eq!(
        m.split("that'sthesheriff'sbadge"),
        tokens(&["that's", "the", "sheriff's", "badge"]),
    );
}

#[test]
fn split_lone_apostrophe_is_its_own_token() {
    let m = test_model();
    assert_eq!(m.split("derek'anderson"), tokens(&["derek", "'", "anderson"]));
    assert_eq!(m.split("derek'"), tokens(&["derek", "'"]));
}

#[test]
fn split_is_lossless() {
    let m = test_model();
    for text in [
        "derekanderson",
        "that'sthesheriff's\"badge\" youarewearing!",
        "the  old   man",
        "win32intel",
        "  derek",
        "",
        "¡¿Thé—Cat?!",
    ] {
        assert_eq!(m.split(text).concat(), text, "lossy split of {text:?}");
    }
}

#[test]
fn split_whitespace_runs_pass_through() {
    let m = test_model();
    assert_eq!(
        m.split("the  old   man"),
        tokens(&["the", "  ", "old", "   ", "man"]),
    );
    assert_eq!(m.split("  derek"), tokens(&["  ", "derek"]));
}

#[test]
fn candidates_ranked_ascending() {
    let m = test_model();
    let candidates = m.candidates("derekanderson", 3);

    let expected: Vec<Vec<String>> = vec![
        tokens(&["derek", "anderson"]),
        tokens(&["derek", "anders", "on"]),
        tokens(&["derek", "and", "ers", "on"]),
    ];
    let got: Vec<Vec<String>> = candidates.iter().map(|c| c.tokens.clone()).collect();
    assert_eq!(got, expected);

    for pair in candidates.windows(2) {
        assert!(pair[0].cost < pair[1].cost, "costs not strictly ascending");
    }
}

#[test]
fn candidates_top_entry_agrees_with_split() {
    let m = test_model();
    for text in [
        "derekanderson",
        "win32intel",
        "that'sthesheriff'sbadge",
        "derek anderson",
    ] {
        let best: &Candidate = &m.candidates(text, 1)[0];
        assert_eq!(best.tokens, m.split(&text.to_lowercase()), "on {text:?}");
    }
}

#[test]
fn candidates_mixed_text() {
    let m = test_model();
    let got: Vec<Vec<String>> = m
        .candidates("derek anderson", 2)
        .into_iter()
        .map(|c| c.tokens)
        .collect();
    assert_eq!(
        got,
        vec![
            tokens(&["derek", " ", "anderson"]),
            tokens(&["derek", " ", "anders", "on"]),
        ],
    );

    let got: Vec<Vec<String>> = m
        .candidates("win32intel", 2)
        .into_iter()
        .map(|c| c.tokens)
        .collect();
    assert_eq!(
        got,
        vec![
            tokens(&["win", "32", "intel"]),
            tokens(&["w", "in", "32", "intel"]),
        ],
    );
}

#[test]
fn candidates_case_folded() {
    let m = test_model();
    let best = &m.candidates("DerekAnderson", 1)[0];
    assert_eq!(best.tokens, tokens(&["derek", "anderson"]));
}

#[test]
fn rejoin_reference_sentence() {
    let m = test_model();
    assert_eq!(
        m.rejoin("that'sthesheriff's\"badge\" youarewearing!"),
        "that's the sheriff's \"badge\" you are wearing!",
    );
}

#[test]
fn rejoin_quotes_and_percent() {
    let m = test_model();
    assert_eq!(m.rejoin("\"theend\""), "\"the end\"");
    assert_eq!(m.rejoin("50%"), "50%");
}

#[test]
fn empty_input() {
    let m = test_model();
    assert_eq!(m.split(""), Vec::<String>::new());
    assert_eq!(m.rejoin(""), "");

    // The empty text has exactly one segmentation: no tokens at no cost.
    let candidates = m.candidates("", 3);
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].tokens.is_empty());
}
