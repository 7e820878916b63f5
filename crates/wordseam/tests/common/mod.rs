//! Shared test fixture: a small frequency-ranked dictionary.
//!
//! The list is ordered most frequent first and ends with the `'s`
//! possessive sentinel, like a real English artifact.
#![allow(dead_code)]

use wordseam::LanguageModel;

/// Frequency-ranked fixture words, most frequent first.
pub const TEST_WORDS: &[&str] = &[
    "the", "of", "and", "to", "a", "in", "is", "you",
    "are", "that", "it", "on", "was", "for", "as", "with",
    "his", "they", "at", "be", "this", "have", "from", "or",
    "one", "had", "by", "but", "not", "what", "all", "were",
    "we", "when", "your", "can", "said", "there", "use", "an",
    "each", "which", "she", "do", "how", "their", "if", "will",
    "up", "other", "about", "out", "many", "then", "them", "these",
    "so", "some", "her", "would", "make", "like", "him", "into",
    "time", "has", "look", "two", "more", "write", "go", "see",
    "number", "no", "way", "could", "people", "my", "than", "first",
    "water", "been", "call", "who", "its", "now", "find", "long",
    "down", "day", "did", "get", "come", "made", "may", "part",
    "over", "new", "take", "only", "little", "work", "know", "place",
    "year", "live", "me", "back", "give", "most", "very", "after",
    "thing", "our", "just", "name", "good", "man", "think", "say",
    "great", "where", "help", "through", "much", "before", "line", "right",
    "too", "mean", "old", "any", "same", "tell", "boy", "follow",
    "came", "want", "show", "also", "around", "form", "three", "small",
    "set", "put", "end", "does", "another", "well", "large", "must",
    "big", "even", "such", "because", "turn", "here", "why", "ask",
    "went", "men", "read", "need", "land", "different", "home", "us",
    "move", "try", "kind", "hand", "again", "change", "off", "play",
    "air", "away", "animal", "house", "point", "page", "letter", "mother",
    "answer", "found", "study", "still", "learn", "should", "world", "win",
    "co", "war", "every", "near", "add", "food", "between", "own",
    "below", "country", "plant", "last", "school", "father", "keep", "tree",
    "never", "start", "city", "earth", "eye", "light", "thought", "head",
    "under", "story", "saw", "left", "wearing", "sheriff", "coin", "intel",
    "derek", "badge", "elephant", "extinct", "genus", "anderson", "anders", "ers",
    "'s",
];

/// Build a model over [`TEST_WORDS`].
pub fn test_model() -> LanguageModel {
    LanguageModel::from_word_list(TEST_WORDS.iter().copied()).unwrap()
}
