use std::collections::HashSet;

use crate::models::{MatchOutcome, Rule, RuleScore};

/// Score every rule against the token sequence and pick the winner. Ties are
/// broken in favor of the first-registered rule; a winning score below 1
/// falls back to the designated unknown response.
pub fn evaluate(rules: &[Rule], fallback: &str, tokens: &[String]) -> MatchOutcome {
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    let mut best: Option<(usize, u32)> = None;
    for (index, rule) in rules.iter().enumerate() {
        let score = score_rule(rule, tokens, &token_set);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }

    match best {
        Some((index, score)) if score >= 1 => MatchOutcome {
            reply_text: rules[index].response.clone(),
            score,
            matched: true,
        },
        _ => MatchOutcome {
            reply_text: fallback.to_string(),
            score: 0,
            matched: false,
        },
    }
}

/// The full per-call score board, for diagnostics.
pub fn score_all(rules: &[Rule], tokens: &[String]) -> Vec<RuleScore> {
    let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();

    rules
        .iter()
        .map(|rule| RuleScore {
            response: rule.response.clone(),
            score: score_rule(rule, tokens, &token_set),
        })
        .collect()
}

fn score_rule(rule: &Rule, tokens: &[String], token_set: &HashSet<&str>) -> u32 {
    // Tokens count with multiplicity, so the percentage is capped rather
    // than allowed past 100 when the input repeats a trigger word.
    let certainty = tokens
        .iter()
        .filter(|token| rule.trigger_stems.contains(token.as_str()))
        .count();
    let percentage = (100 * certainty / rule.trigger_count).min(100) as u32;

    // An exact rule skips the gate. A non-exact rule needs every required
    // stem in the input; with no required words it can never qualify.
    let eligible = rule.is_exact
        || (!rule.required_stems.is_empty()
            && rule
                .required_stems
                .iter()
                .all(|word| token_set.contains(word.as_str())));

    if eligible {
        percentage
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleSpec;
    use crate::normalize::normalize;
    use crate::rules::RuleSet;

    fn exact(response: &str, triggers: &[&str]) -> RuleSpec {
        RuleSpec {
            response: response.to_string(),
            trigger_words: triggers.iter().map(ToString::to_string).collect(),
            is_exact: true,
            required_words: Vec::new(),
        }
    }

    fn gated(response: &str, triggers: &[&str], required: &[&str]) -> RuleSpec {
        RuleSpec {
            response: response.to_string(),
            trigger_words: triggers.iter().map(ToString::to_string).collect(),
            is_exact: false,
            required_words: required.iter().map(ToString::to_string).collect(),
        }
    }

    fn table(specs: Vec<RuleSpec>) -> RuleSet {
        RuleSet::new(specs, "unknown").expect("test table is valid")
    }

    #[test]
    fn exact_rule_wins_on_a_single_trigger_word() {
        let rules = table(vec![exact("Hello!", &["hello", "hi", "hey", "sup", "heyo"])]);
        let outcome = rules.evaluate(&normalize("hello"));

        assert!(outcome.matched);
        assert_eq!(outcome.reply_text, "Hello!");
        assert_eq!(outcome.score, 20);
    }

    #[test]
    fn missing_required_word_scores_zero() {
        let rules = table(vec![gated(
            "I'm doing fine, and you?",
            &["how", "are", "you", "doing"],
            &["how"],
        )]);

        let board = rules.score_all(&normalize("are you doing"));
        assert_eq!(board[0].score, 0);

        let outcome = rules.evaluate(&normalize("are you doing"));
        assert!(!outcome.matched);
        assert_eq!(outcome.reply_text, "unknown");
    }

    #[test]
    fn non_exact_rule_with_no_required_words_never_qualifies() {
        let rules = table(vec![gated("never", &["ping"], &[])]);
        let outcome = rules.evaluate(&normalize("ping"));

        assert!(!outcome.matched);
    }

    #[test]
    fn ties_go_to_the_first_registered_rule() {
        let rules = table(vec![exact("first", &["ping"]), exact("second", &["ping"])]);
        let outcome = rules.evaluate(&normalize("ping"));

        assert_eq!(outcome.reply_text, "first");
    }

    #[test]
    fn percentage_is_capped_at_100() {
        let rules = table(vec![exact("Hello!", &["hello"])]);
        let outcome = rules.evaluate(&normalize("hello hello hello"));

        assert_eq!(outcome.score, 100);
    }

    #[test]
    fn empty_input_falls_back() {
        let rules = table(vec![exact("Hello!", &["hello"])]);
        let outcome = rules.evaluate(&normalize("   "));

        assert!(!outcome.matched);
        assert_eq!(outcome.reply_text, "unknown");
    }

    #[test]
    fn every_rule_is_scored() {
        let rules = table(vec![
            exact("greeting", &["hello"]),
            gated("farewell", &["bye", "goodbye"], &["bye"]),
        ]);
        let board = rules.score_all(&normalize("hello and goodbye to you, bye"));

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].score, 100);
        assert_eq!(board[1].score, 100);
    }
}
