use super::*;

fn matches(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern)
        .unwrap_or_else(|e| panic!("pattern `{pattern}` failed: {e}"))
        .is_match(text)
}

fn error(pattern: &str) -> String {
    Pattern::new(pattern).unwrap_err().to_string()
}

#[test]
fn literal_is_anchored() {
    assert!(matches("a", "a"));
    assert!(!matches("a", "ab"));
    assert!(!matches("a", "ba"));
    assert!(!matches("a", ""));
}

#[test]
fn empty_pattern_matches_only_empty_text() {
    assert!(matches("", ""));
    assert!(!matches("", "x"));
}

#[test]
fn star_matches_everything() {
    for text in ["", "x", "OK", "line\nbreak", "*&|"] {
        assert!(matches("*", text), "{text:?}");
    }
    assert!(matches("OK*", "OK button"));
    assert!(matches("*.txt - Notepad", "notes.txt - Notepad"));
    assert!(!matches("*.txt - Notepad", "notes.log - Notepad"));
}

#[test]
fn regex_metacharacters_are_literal() {
    assert!(matches("a.b", "a.b"));
    assert!(!matches("a.b", "axb"));
    assert!(matches("(x)+$", "(x)+$"));
    assert!(matches("C:\\Temp", "C:\\Temp"));
}

#[test]
fn caret_escapes_next_character() {
    assert!(matches("^*", "*"));
    assert!(!matches("^*", "x"));
    assert!(matches("a^&b", "a&b"));
    assert!(matches("^^", "^"));
    assert!(matches("^{x^}", "{x}"));
}

#[test]
fn trailing_caret_is_error() {
    insta::assert_snapshot!(error("abc^"), @"syntax error in `abc^` at offset 3: trailing escape character `^`");
}

#[test]
fn numeric_range_bounds() {
    for text in ["1", "2", "3"] {
        assert!(matches("{#1..3}", text), "{text}");
    }
    for text in ["0", "4", "10", "", "x", "1.5"] {
        assert!(!matches("{#1..3}", text), "{text}");
    }
}

#[test]
fn numeric_range_open_bounds() {
    assert!(matches("{#..0}", "0"));
    assert!(matches("{#..0}", "-42"));
    assert!(!matches("{#..0}", "1"));
    assert!(matches("{#10..}", "9999999"));
    assert!(!matches("{#10..}", "9"));
    assert!(matches("{#..}", "-5"));
}

#[test]
fn inverted_numeric_range_matches_nothing() {
    for text in ["2", "3", "5", "-1"] {
        assert!(!matches("{#5..2}", text), "{text}");
    }
}

#[test]
fn numeric_range_inside_text() {
    assert!(matches("Item {#1..3} of *", "Item 2 of 5"));
    assert!(!matches("Item {#1..3} of *", "Item 7 of 9"));
    assert!(matches("x{#1..9}y{#-5..-1}", "x4y-3"));
    assert!(!matches("x{#1..9}y{#-5..-1}", "x4y3"));
}

#[test]
fn numeric_overflow_does_not_match() {
    assert!(!matches("{#..}", "99999999999999999999999"));
}

#[test]
fn malformed_numeric_range_is_error() {
    insta::assert_snapshot!(error("{#1-3}"), @"syntax error in `{#1-3}` at offset 0: malformed numeric range `{#1-3}`");
    insta::assert_snapshot!(error("a{#x..3}"), @"syntax error in `a{#x..3}` at offset 1: malformed numeric range `{#x..3}`");
}

#[test]
fn escaped_hash_brace_is_verbatim() {
    assert!(matches("{^#1-3}", "#1-3"));
    assert!(!matches("{^#1-3}", "2"));
}

#[test]
fn brace_body_is_verbatim_regex() {
    assert!(matches("{OK|Cancel}", "OK"));
    assert!(matches("{OK|Cancel}", "Cancel"));
    assert!(!matches("{OK|Cancel}", "OKCancel"));
    assert!(matches("Page {[0-9]{2}}", "Page 42"));
    assert!(!matches("Page {[0-9]{2}}", "Page 4"));
}

#[test]
fn caret_inside_braces_is_literal() {
    assert!(matches("{a^}b}", "a}b"));
    assert!(matches("{^.}", "."));
    assert!(!matches("{^.}", "x"));
}

#[test]
fn unbalanced_braces_are_errors() {
    insta::assert_snapshot!(error("{abc"), @"syntax error in `{abc` at offset 0: unbalanced braces");
    insta::assert_snapshot!(error("abc}"), @"syntax error in `abc}` at offset 3: unbalanced braces");
    insta::assert_snapshot!(error("{{a}"), @"syntax error in `{{a}` at offset 0: unbalanced braces");
}

#[test]
fn invalid_verbatim_regex_is_pattern_compile_error() {
    let err = Pattern::new("{(}").unwrap_err();
    let Error::PatternCompile { pattern, message } = err else {
        panic!("expected pattern compile error, got {err:?}");
    };
    assert_eq!(pattern, "{(}");
    assert!(!message.is_empty());
    assert!(!message.contains("regex parse error"), "{message}");
}

#[test]
fn compile_stops_at_terminators() {
    let compiled = compile("Edit&id=10|x", 0, false).unwrap();
    assert_eq!(compiled.rest, 4);
    assert_eq!(compiled.text, "Edit");

    let name = compile("Edit&id=10|x", 5, true).unwrap();
    assert_eq!(name.rest, 7);
    assert_eq!(name.text, "id");

    let value = compile("Edit&id=10|x", 8, false).unwrap();
    assert_eq!(value.rest, 10);
    assert!(value.pattern.is_match("10"));
}

#[test]
fn equals_is_literal_unless_stopping() {
    let compiled = compile("a=b", 0, false).unwrap();
    assert_eq!(compiled.rest, 3);
    assert!(compiled.pattern.is_match("a=b"));

    assert_eq!(compile("a=b", 0, true).unwrap().rest, 1);
}

#[test]
fn terminators_inside_braces_do_not_stop() {
    let compiled = compile("{a|b}&x=1", 0, false).unwrap();
    assert_eq!(compiled.rest, 5);
    assert_eq!(compiled.text, "{a|b}");
}

#[test]
fn standalone_pattern_rejects_terminator() {
    insta::assert_snapshot!(error("a|b"), @"syntax error in `a|b` at offset 1: unexpected `|` in pattern");
}

#[test]
fn quote_escapes_special_characters() {
    insta::assert_snapshot!(quote("*&|{}^ plain = text"), @"^*^&^|^{^}^^ plain = text");
}

#[test]
fn quote_round_trip_matches_only_original() {
    let values = [
        "",
        "plain",
        "a*b",
        "{#1..3}",
        "x&y=z|w",
        "^caret^",
        "C:\\path (1).txt",
        "multi\nline",
        "ünïcödé",
    ];
    for value in values {
        let pattern = Pattern::new(&quote(value)).unwrap();
        assert!(pattern.is_match(value), "{value:?}");
        for other in values.iter().filter(|other| **other != value) {
            assert!(!pattern.is_match(other), "{value:?} matched {other:?}");
        }
    }
}

#[test]
fn unquote_reverses_quote() {
    for value in ["", "a^b", "*&|{}^", "end^"] {
        assert_eq!(unquote(&quote(value)), value);
    }
    assert_eq!(unquote("trailing^"), "trailing");
}

#[test]
fn display_shows_source() {
    let pattern = Pattern::new("OK*").unwrap();
    assert_eq!(pattern.to_string(), "OK*");
    assert_eq!(pattern.source(), "OK*");
}
