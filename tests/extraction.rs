use std::fs;

use dprint::extract::{
    extract_expression,
    lexer::{TokenKind, tokenize},
};
use walkdir::WalkDir;

/// Walks `tests/lines` and checks every `line:`/`expect:` pair found there.
#[test]
fn line_fixtures_extract() {
    let mut count = 0;

    for entry in WalkDir::new("tests/lines").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "txt")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (line, expected)) in parse_fixture(&content).into_iter().enumerate() {
            count += 1;
            assert_eq!(extract_expression(Some(&line)),
                       expected,
                       "case {} in {:?}: {line:?}",
                       i + 1,
                       path);
        }
    }

    assert!(count > 0, "No fixtures found in tests/lines");
}

/// Reads `line: <source>` entries, each followed by `expect: <expression>`.
/// Anything else in a fixture is commentary.
fn parse_fixture(content: &str) -> Vec<(String, String)> {
    let mut cases = Vec::new();
    let mut pending = None;

    for line in content.lines() {
        if let Some(source) = line.strip_prefix("line: ") {
            pending = Some(source.to_string());
        } else if let Some(expected) = line.strip_prefix("expect:") {
            let source = pending.take()
                                .unwrap_or_else(|| panic!("`expect:` without `line:`: {line:?}"));
            cases.push((source, expected.strip_prefix(' ').unwrap_or(expected).to_string()));
        }
    }

    cases
}

fn assert_extracts(line: &str, expected: &str) {
    assert_eq!(extract_expression(Some(line)), expected, "extracting from {line:?}");
}

#[test]
fn no_line() {
    assert_eq!(extract_expression(None), "");
}

#[test]
fn simple_calls() {
    assert_extracts("dprint(x)", "x");
    assert_extracts("dprint(x + y)", "x + y");
    assert_extracts("    dprint(x + y)", "x + y");
    assert_extracts("dprint((x - 6) * y)", "(x - 6) * y");
    assert_extracts("dprint(f(x, y=z))", "f(x, y=z)");
}

#[test]
fn nested_self_call() {
    assert_extracts("dprint(dprint(x))", "dprint(x)");
    assert_extracts("dprint!(dprint!(x) + 1);", "dprint!(x) + 1");
}

#[test]
fn macro_and_path_calls() {
    assert_extracts("    let y = dprint!(x * 2);", "x * 2");
    assert_extracts("dprint::dprint(value)", "value");
    assert_extracts("let n = dprint(items.len()) + 1;", "items.len()");
    assert_extracts("dprint!(vec![1, 2, 3]);", "vec![1, 2, 3]");
}

#[test]
fn parentheses_inside_literals_are_ignored() {
    assert_extracts(r#"dprint(format!("(({}", x))"#, r#"format!("(({}", x)"#);
    assert_extracts(r#"dprint(r"raw )" == s)"#, r#"r"raw )" == s"#);
    assert_extracts(r##"dprint(r#"a ")" b"# != t)"##, r##"r#"a ")" b"# != t"##);
    assert_extracts("dprint(c == ')')", "c == ')'");
    assert_extracts("dprint(b')' as u32)", "b')' as u32");
    assert_extracts("dprint(x /* ) */ + 1)", "x /* ) */ + 1");
    assert_extracts("dprint(x /* ) **/)", "x /* ) **/");
    assert_extracts("dprint(x /***/ + 1)", "x /***/ + 1");
    assert_extracts("dprint(x /* (* ) */)", "x /* (* ) */");
}

#[test]
fn only_first_call_counts() {
    assert_extracts("dprint(a); dprint(b);", "a");
}

#[test]
fn unbalanced_call_runs_to_end_of_line() {
    assert_extracts("let total = dprint(items.iter()", "items.iter()");
}

#[test]
fn lines_without_anchor_come_back_whole() {
    assert_extracts("let y = dp(x);", "let y = dp(x);");
    assert_extracts("    let y = dbg!(x);", "    let y = dbg!(x);");
    assert_extracts("// dprint(x)", "// dprint(x)");
    assert_extracts("let s = \"dprint(x)\";", "let s = \"dprint(x)\";");
    assert_extracts("", "");
}

#[test]
fn anchor_is_case_sensitive_and_exact() {
    assert_extracts("DPRINT(x)", "DPRINT(x)");
    assert_extracts("dprint_all(x)", "dprint_all(x)");
    assert_extracts("my_dprint(x); dprint(y)", "y");
}

#[test]
fn tokens_carry_kind_text_and_span() {
    let tokens: Vec<_> = tokenize("dprint!(x.0 'a)").collect();
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();

    assert_eq!(summary,
               [(TokenKind::Name, "dprint"),
                (TokenKind::Operator, "!"),
                (TokenKind::Operator, "("),
                (TokenKind::Name, "x"),
                (TokenKind::Operator, "."),
                (TokenKind::Other, "0"),
                (TokenKind::Other, "'a"),
                (TokenKind::Operator, ")")]);
    assert_eq!(tokens[0].span, 0..6);
    assert_eq!(tokens[7].span, 14..15);
}

#[test]
fn unknown_characters_are_other_tokens() {
    let kinds: Vec<_> = tokenize("x ` \\ y").map(|t| t.kind).collect();

    assert_eq!(kinds,
               [TokenKind::Name, TokenKind::Other, TokenKind::Other, TokenKind::Name]);
}
