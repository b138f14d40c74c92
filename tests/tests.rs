// Work around dead code warnings: rust-lang issue #46379
pub mod common;

// Work around dead code warnings: rust-lang issue #46379
use common::*;

use rxlite::{ErrorKind, RegExp};

fn test_zero_length_matches_tc(tc: TestConfig) {
    tc.compile("x*").match_all("ab").test_eq(vec!["", "", ""]);
    tc.compile("x*").match_all("").test_eq(vec![""]);
    tc.compile("a?").match_all("ba").test_eq(vec!["", "a", ""]);
    tc.compile("$").match_all("abc").test_eq(vec![""]);
    assert_eq!(tc.compile("$").match1r("abc"), 3..3);
}

#[test]
fn test_zero_length_matches() {
    test_with_configs(test_zero_length_matches_tc)
}

fn test_determinism_tc(tc: TestConfig) {
    let re = tc.compile("[a-z]*b");
    let input = "xxab yyab zzb";
    let first = re.match_all(input);
    for _ in 0..3 {
        assert_eq!(re.match_all(input), first);
    }
    first.test_eq(vec!["xxab", "yyab", "zzb"]);
}

#[test]
fn test_determinism() {
    test_with_configs(test_determinism_tc)
}

fn test_greedy_backtracking_tc(tc: TestConfig) {
    assert_eq!(tc.compile("a*a").match1r("aaaa"), 0..4);
    assert_eq!(tc.compile("a*aa").match1r("aaaa"), 0..4);
    tc.compile("a*ab").test_fails("aaaa");
    tc.compile("x.*y").match1f("x1y2y3").test_eq("x1y2y");
    tc.compile(".*foo").match1f("foofoo bar").test_eq("foofoo");
    tc.compile("a?a").match1f("a").test_eq("a");
    tc.compile("a?a?a").match1f("aa").test_eq("aa");
    tc.compile("[ab]*b[ab]*").match1f("aabaa").test_eq("aabaa");
}

#[test]
fn test_greedy_backtracking() {
    test_with_configs(test_greedy_backtracking_tc)
}

fn test_closures_tc(tc: TestConfig) {
    tc.compile("a+").match1f("caaat").test_eq("aaa");
    tc.compile("a+").test_fails("ccc");
    tc.compile("colou?r").test_succeeds("color");
    tc.compile("colou?r").test_succeeds("colour");
    tc.compile("colou?r").test_fails("colouur");
    tc.compile("[0-9]+").match_all("a1b22c333").test_eq(vec!["1", "22", "333"]);
    tc.compile("ab*c").match_all("ac abc abbbc").test_eq(vec!["ac", "abc", "abbbc"]);
    tc.compile(".+").match1f("anything").test_eq("anything");
}

#[test]
fn test_closures() {
    test_with_configs(test_closures_tc)
}

fn test_leftmost_tc(tc: TestConfig) {
    assert_eq!(tc.compile("[0-9]+").match1r("pi = 3.1416"), 5..6);
    assert_eq!(
        tc.compile("[0-9]+").match_all_from("pi = 3.1416", 6),
        vec![7..11]
    );
    assert_eq!(tc.compile("b").match_all_from("abcb", 2), vec![3..4]);
    assert!(tc.compile("b").match_all_from("abcb", 4).is_empty());
}

#[test]
fn test_leftmost() {
    test_with_configs(test_leftmost_tc)
}

fn test_anchors_tc(tc: TestConfig) {
    tc.compile("^abc").match1f("abcdef").test_eq("abc");
    tc.compile("^abc").test_fails("xabc");
    tc.compile("abc$").test_fails("abcx");
    assert_eq!(tc.compile("abc$").match1r("abcabc"), 3..6);
    tc.compile("^$").test_succeeds("");
    tc.compile("^$").test_fails("a");
    tc.compile("^a*$").match1f("aaa").test_eq("aaa");
    tc.compile("^a*$").test_fails("aab");

    // Anchors in the middle of a pattern are literals.
    tc.compile("a^b").match1f("xa^b").test_eq("a^b");
    tc.compile("a$b").match1f("xa$b").test_eq("a$b");
    tc.compile("^^").match1f("^").test_eq("^");
    tc.compile("$$").match1f("$").test_eq("$");
}

#[test]
fn test_anchors() {
    test_with_configs(test_anchors_tc)
}

fn test_start_anchor_only_at_start_tc(tc: TestConfig) {
    let re = tc.compile("^a");
    assert!(re.match_all_from("aaa", 1).is_empty());
    assert!(re.match_all_from("aaa", 3).is_empty());
    assert_eq!(re.match_all_from("aaa", 0), vec![0..1]);

    // The anchor never reports a start other than the one requested.
    let re = tc.compile("^.*");
    for start in 0..=3 {
        if let Some(m) = re.regexp().match_at("abc", start) {
            assert_eq!(m.start(), start);
        }
    }
}

#[test]
fn test_start_anchor_only_at_start() {
    test_with_configs(test_start_anchor_only_at_start_tc)
}

fn test_dot_tc(tc: TestConfig) {
    tc.compile("a.c").test_succeeds("abc");
    tc.compile("a.c").test_succeeds("a-c");
    tc.compile("a.c").test_succeeds("a\nc");
    tc.compile("a.c").test_fails("ac");
    tc.compile(".").test_fails("");
}

#[test]
fn test_dot() {
    test_with_configs(test_dot_tc)
}

fn test_classes_tc(tc: TestConfig) {
    tc.compile("[a-c]+").match1f("xxabcabdd").test_eq("abcab");
    tc.compile("[-a]").match1f("x-").test_eq("-");
    tc.compile("[a-]").match1f("x-").test_eq("-");
    tc.compile("[a-c-e]+").match1f("d-ea").test_eq("-ea");
    tc.compile("[a-c-e]").test_fails("d");
    tc.compile(r"[\]]").match1f("a]").test_eq("]");
    tc.compile(r"[\t ]+").match1f("a \t b").test_eq(" \t ");
    tc.compile("[.]").test_fails("a");
    tc.compile("[.]").test_succeeds(".");

    // Reversed ranges and empty classes match nothing.
    tc.compile("[z-a]").test_fails("abcxyz-");
    tc.compile("x[]").test_fails("x]");
    tc.compile("[^]").match1f("\n").test_eq("\n");
}

#[test]
fn test_classes() {
    test_with_configs(test_classes_tc)
}

fn test_negated_class_tc(tc: TestConfig) {
    let re = tc.compile("[^x]");
    for b in 0..=255u8 {
        let found = re.regexp().match_bytes(&[b], 0);
        if b == b'x' {
            assert!(found.is_none(), "matched {}", b);
        } else {
            assert_eq!(found.map(|m| m.range()), Some(0..1), "byte {}", b);
        }
    }
    re.test_fails("xxx");
    re.match1f("xxyx").test_eq("y");
}

#[test]
fn test_negated_class() {
    test_with_configs(test_negated_class_tc)
}

fn test_case_insensitive_tc(tc: TestConfig) {
    assert_eq!(tc.compilef("ABC", "i").match1r("abc"), 0..3);
    assert_eq!(tc.compilef("abc", "i").match1r("ABC"), 0..3);
    tc.compilef("hello", "i").match1f("Say HeLLo").test_eq("HeLLo");
    tc.compile("ABC").test_fails("abc");
    tc.compilef("[a-c]+", "i").match1f("xAbCx").test_eq("AbC");
    tc.compilef("[^a]", "i").test_fails("aAaA");
    tc.compilef("q*Q", "i").match1f("qQqQ").test_eq("qQqQ");

    // Only ASCII letters fold.
    tc.compilef("@", "i").test_fails("`");
    tc.compilef("[@]", "i").test_fails("`");
    tc.compilef("1", "i").test_succeeds("1");
}

#[test]
fn test_case_insensitive() {
    test_with_configs(test_case_insensitive_tc)
}

fn test_word_boundaries_tc(tc: TestConfig) {
    assert_eq!(tc.compile(r"\<cat\>").match1r("a cat sat"), 2..5);
    tc.compile(r"\<cat\>").test_fails("concatenate");
    tc.compile(r"\<cat\>").test_fails("cats");
    tc.compile(r"\<cat\>").match1f("cat").test_eq("cat");
    tc.compile(r"\<[a-z]+")
        .match_all("one two_three 4four")
        .test_eq(vec!["one", "two"]);

    // The end of a word is a non-word byte after a word byte.
    tc.compile(r"[0-9]\>").match_all("12 345").test_eq(vec!["2", "5"]);
    // At the very start only the byte at the cursor is examined.
    assert_eq!(tc.compile(r"\>").match1r(" x"), 0..0);
    assert_eq!(tc.compile(r"\>").match1r("x"), 1..1);
}

#[test]
fn test_word_boundaries() {
    test_with_configs(test_word_boundaries_tc)
}

fn test_whitespace_tc(tc: TestConfig) {
    tc.compile(r"a\sb").test_succeeds("a b");
    tc.compile(r"a\sb").test_succeeds("a\tb");
    tc.compile(r"a\sb").test_succeeds("a\x0bb");
    tc.compile(r"a\sb").test_fails("a_b");
    tc.compile(r"\s+").match1f("x \r\n\x0c y").test_eq(" \r\n\x0c ");
}

#[test]
fn test_whitespace() {
    test_with_configs(test_whitespace_tc)
}

fn test_multibyte_input_tc(tc: TestConfig) {
    // Matching is over bytes; positions are byte offsets.
    assert_eq!(tc.compile("b").match1r("\u{00e9}b"), 2..3);
    assert_eq!(tc.compile("..").match1r("\u{00e9}"), 0..2);
    tc.compile("^.$").test_fails("\u{00e9}");
}

#[test]
fn test_multibyte_input() {
    test_with_configs(test_multibyte_input_tc)
}

#[test]
fn test_nul_bytes_are_ordinary() {
    let re = RegExp::new(r"a\0b");
    assert_eq!(re.match_bytes(b"xa\0b", 0).map(|m| m.range()), Some(1..4));
    let re = RegExp::new("a.b");
    assert!(re.match_bytes(b"a\0b", 0).is_some());
}

#[test]
fn test_start_beyond_end() {
    let re = RegExp::new("x*");
    assert!(re.match_at("abc", 4).is_none());
    assert!(re.match_at("abc", 100).is_none());
    assert_eq!(re.match_at("abc", 3).map(|m| m.range()), Some(3..3));
}

#[test]
fn test_invalid_patterns_never_match() {
    let overflow = RegExp::new(&"a".repeat(1024));
    assert_eq!(overflow.error_kind(), Some(ErrorKind::Overflow));
    assert!(overflow.match_at(&"a".repeat(1024), 0).is_none());

    let empty = RegExp::new("");
    assert_eq!(empty.error_kind(), Some(ErrorKind::Null));
    assert!(empty.match_at("", 0).is_none());
    assert!(empty.match_at("abc", 0).is_none());
}

#[test]
fn test_flag_mutation() {
    let mut re = RegExp::new("a.c");
    assert!(re.case_sensitive());
    assert!(!re.wildcard());
    assert!(re.find("A.C", 0).is_none());

    re.set_case_sensitive(false);
    assert!(re.find("AxC", 0).is_some());

    // In wildcard mode the '.' is literal and the pattern is anchored.
    re.set_wildcard(true);
    assert!(re.find("AxC", 0).is_none());
    assert!(re.find("A.C", 0).is_some());
    assert!(re.find("xa.c", 0).is_none());

    re.set_pattern("*.C");
    assert!(re.wildcard());
    assert!(!re.case_sensitive());
    assert!(re.find("main.c", 0).is_some());

    re.set_wildcard(false);
    assert_eq!(re.error_kind(), Some(ErrorKind::Syntax));
}

#[test]
fn test_find_iter_with_invalid_pattern() {
    let re = RegExp::new("[");
    assert_eq!(re.find_iter("[[[").count(), 0);
    assert_eq!(re.find_from("[[[", 1).count(), 0);
}
