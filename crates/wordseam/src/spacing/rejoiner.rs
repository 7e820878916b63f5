//! # Token Rejoiner

use crate::spacing::rules::SpacingRules;

fn is_whitespace_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

/// Reconstruct spaced text from a token stream.
///
/// Walks the tokens with a single "inside double quotes" flag, toggled
/// on every literal `"` token. A single space is inserted between two
/// consecutive tokens unless, in order:
///
/// 1. the current token is a quote opening a quoted span;
/// 2. the next token is a quote closing the current span;
/// 3. the current token suppresses trailing space or the next token
///    suppresses leading space (per the rule sets);
/// 4. either token is itself whitespace (it carries its own spacing).
///
/// ## Arguments
/// * `rules` - the per-language spacing rule sets.
/// * `tokens` - the token stream, whitespace runs interleaved verbatim.
pub fn rejoin_tokens(rules: &SpacingRules, tokens: &[String]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
    let mut in_quotes = false;

    for (i, token) in tokens.iter().enumerate() {
        let is_opening_quote = token == "\"" && !in_quotes;

        result.push_str(token);

        if token == "\"" {
            in_quotes = !in_quotes;
        }

        let Some(next) = tokens.get(i + 1) else {
            break;
        };

        let suppress = is_opening_quote
            || (next == "\"" && in_quotes)
            || rules.no_space_after(token)
            || rules.no_space_before(next)
            || is_whitespace_token(token)
            || is_whitespace_token(next);

        if !suppress {
            result.push(' ');
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(tokens: &[&str]) -> String {
        let rules = SpacingRules::for_language(None);
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        rejoin_tokens(&rules, &tokens)
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(rejoin(&["you", "are", "wearing"]), "you are wearing");
        assert_eq!(rejoin(&[]), "");
        assert_eq!(rejoin(&["one"]), "one");
    }

    #[test]
    fn test_punctuation_rules() {
        assert_eq!(rejoin(&["wearing", "!"]), "wearing!");
        assert_eq!(rejoin(&["(", "round", ")"]), "(round)");
        assert_eq!(rejoin(&["50", "%"]), "50%");
        assert_eq!(rejoin(&["$", "5"]), "$5");
    }

    #[test]
    fn test_quote_state_machine() {
        assert_eq!(rejoin(&["\"", "badge", "\""]), "\"badge\"");
        assert_eq!(
            rejoin(&["the", "\"", "badge", "\"", "here"]),
            "the \"badge\" here",
        );
        // Unbalanced: the dangling opener still hugs its word.
        assert_eq!(rejoin(&["say", "\"", "badge"]), "say \"badge");
    }

    #[test]
    fn test_whitespace_tokens_carry_spacing() {
        assert_eq!(rejoin(&["a", "  ", "b"]), "a  b");
        assert_eq!(rejoin(&["a", "\n", "b"]), "a\nb");
    }
}
