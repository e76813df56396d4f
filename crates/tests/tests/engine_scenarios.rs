use paisa_core::{normalize, RuleSet, DEFAULT_FALLBACK};

#[test]
fn greeting_words_match_the_greeting_rule() {
    let rules = RuleSet::builtin();

    assert_eq!(rules.respond("hello"), "Hello!");
    assert_eq!(rules.respond("sup"), "Hello!");
    assert_eq!(rules.respond("goodbye"), "See you!");
    assert_eq!(rules.respond("thanks"), "You're welcome!");
}

#[test]
fn required_words_plus_triggers_select_the_gated_rule() {
    let rules = RuleSet::builtin();

    assert_eq!(rules.respond("how are you doing"), "I'm doing fine, and you?");
    assert_eq!(rules.respond("who are you"), "I'm a bot.");
    assert_eq!(
        rules.respond("what do you eat"),
        "I don't like eating anything because I'm a bot obviously!"
    );
}

#[test]
fn gibberish_falls_through_to_the_unknown_reply() {
    let rules = RuleSet::builtin();

    assert_eq!(
        rules.respond("xyz completely unmatched gibberish"),
        DEFAULT_FALLBACK
    );
}

#[test]
fn save_money_beats_the_budget_rule_on_its_gate() {
    let rules = RuleSet::builtin();

    // Scores against both the save-money and the budgeting rule; only the
    // save-money rule satisfies its required words, and at full percentage.
    let reply = rules.respond("I want to save money and budget");
    assert!(reply.starts_with("The basic rule of thumb"));
}

#[test]
fn higher_percentage_wins_between_qualifying_rules() {
    let rules = RuleSet::builtin();

    // Two credit-score rules qualify; the later one matches all three of its
    // trigger words and outranks the first rule's partial overlap.
    let reply = rules.respond("improve credit score");
    assert!(reply.starts_with("1. Pay bills on time."));
}

#[test]
fn stemmed_variants_reach_the_same_rule() {
    let rules = RuleSet::builtin();

    assert_eq!(rules.respond("saving money"), rules.respond("save money"));
}

#[test]
fn matching_is_idempotent() {
    let rules = RuleSet::builtin();

    let first = rules.respond("how are you doing");
    let second = rules.respond("how are you doing");
    assert_eq!(first, second);

    assert_eq!(normalize("Hello!"), normalize("Hello!"));
}

#[test]
fn whitespace_only_input_falls_back_without_error() {
    let rules = RuleSet::builtin();

    assert_eq!(rules.respond(""), DEFAULT_FALLBACK);
    assert_eq!(rules.respond("   \t "), DEFAULT_FALLBACK);
}
