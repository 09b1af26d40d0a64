use super::*;
use crate::nfa::matches_str;

#[test]
fn seq_flattens_left() {
    let r = chseq("ab") >> sym('c' as Symbol) >> sym('d' as Symbol);
    match r {
        Rule::Seq(subs) => assert_eq!(subs.len(), 4),
        other => panic!("expected Seq, got {other:?}"),
    }
}

#[test]
fn leaf_alternation_merges_chsets() {
    let r = chset("a-f") | chset("0-9");
    match r {
        Rule::Chset(set) => {
            assert!(set.contains('c' as Symbol));
            assert!(set.contains('7' as Symbol));
        }
        other => panic!("expected merged leaf, got {other:?}"),
    }
}

#[test]
fn composite_alternation_flattens_left() {
    let r = chseq("ab") | chseq("cd") | chseq("ef");
    match r {
        Rule::Alt(subs) => assert_eq!(subs.len(), 3),
        other => panic!("expected Alt, got {other:?}"),
    }
}

#[test]
fn negate_leaf_ok() {
    let r = chset("a").negate().expect("leaf negation is valid");
    assert!(matches_str(&r, "b"));
    assert!(!matches_str(&r, "a"));
}

#[test]
fn negate_composite_is_error() {
    assert_eq!(chseq("ab").negate(), Err(RuleError::NegateComposite));
    assert_eq!(
        chset("a").star().negate(),
        Err(RuleError::NegateComposite)
    );
}

#[test]
fn minus_composite_is_error() {
    assert_eq!(
        chseq("ab").minus(&chset("a")),
        Err(RuleError::SubtractComposite)
    );
    assert_eq!(
        chset("a").minus(&chseq("ab")),
        Err(RuleError::SubtractComposite)
    );
}

#[test]
fn minus_leaf_subtracts() {
    let r = chset("a-z").minus(&chset("m-p")).expect("leaf difference");
    assert!(matches_str(&r, "a"));
    assert!(!matches_str(&r, "n"));
}

#[test]
fn plus_is_one_or_more() {
    let r = chset("x").plus();
    assert!(!matches_str(&r, ""));
    assert!(matches_str(&r, "x"));
    assert!(matches_str(&r, "xxx"));
    assert!(!matches_str(&r, "xy"));
}

#[test]
fn opt_is_zero_or_one() {
    let r = chseq("ab") >> chset("!").opt() >> chseq("cd");
    assert!(matches_str(&r, "abcd"));
    assert!(matches_str(&r, "ab!cd"));
    assert!(!matches_str(&r, "ab!!cd"));
}

#[test]
fn rule_eq_pattern_cannot_panic() {
    // Errors carry no payload; Display strings are stable.
    assert_eq!(
        RuleError::NegateComposite.to_string(),
        "only character-set rules can be negated"
    );
}
