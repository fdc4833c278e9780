//! Resolving typed text to one of a choice's values.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Resolve `input` against `choices`.
///
/// A 1-based number picks by position, an exact value picks itself, and
/// anything else picks the best fuzzy match, if any.
#[must_use]
pub fn match_choice<'a>(choices: &'a [String], input: &str) -> Option<&'a str> {
    if let Ok(position) = input.parse::<usize>() {
        if (1..=choices.len()).contains(&position) {
            return Some(choices[position - 1].as_str());
        }
    }

    if let Some(exact) = choices.iter().find(|choice| choice.as_str() == input) {
        return Some(exact.as_str());
    }

    let matcher = SkimMatcherV2::default();
    choices
        .iter()
        .filter_map(|choice| matcher.fuzzy_match(choice, input).map(|score| (score, choice)))
        .max_by_key(|(score, _)| *score)
        .map(|(_, choice)| choice.as_str())
}
