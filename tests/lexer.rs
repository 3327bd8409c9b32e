/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Integration tests for the on-demand tokenizer.
 *
 * --------------------------------------------------------------------------
 * License:
 * This file is part of the Jackdaw project.
 *
 * Jackdaw is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use jackdaw::lexer::{Lexer, TokenKind};

/// Drains the lexer into (kind, lexeme) pairs up to the first Eof.
fn lex(source: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token().expect("clean source");
        if token.kind == TokenKind::Eof {
            return tokens;
        }
        tokens.push((token.kind, token.lexeme));
    }
}

#[test]
fn classifies_keywords_identifiers_and_symbols() {
    let tokens = lex("class Main { field int count; }");

    let expected = vec![
        (TokenKind::Keyword, "class".to_string()),
        (TokenKind::Identifier, "Main".to_string()),
        (TokenKind::Symbol, "{".to_string()),
        (TokenKind::Keyword, "field".to_string()),
        (TokenKind::Keyword, "int".to_string()),
        (TokenKind::Identifier, "count".to_string()),
        (TokenKind::Symbol, ";".to_string()),
        (TokenKind::Symbol, "}".to_string()),
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn keywords_are_exact_matches_only() {
    let tokens = lex("classes let letter");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Identifier, "classes".to_string()),
            (TokenKind::Keyword, "let".to_string()),
            (TokenKind::Identifier, "letter".to_string()),
        ]
    );
}

#[test]
fn string_constants_drop_their_quotes() {
    let tokens = lex("let s = \"hello world\";");

    assert!(tokens.contains(&(TokenKind::String, "hello world".to_string())));
}

#[test]
fn integer_constants_scan_all_digits() {
    let tokens = lex("let x = 32767;");

    assert!(tokens.contains(&(TokenKind::Number, "32767".to_string())));
}

#[test]
fn comments_are_skipped_and_lines_still_counted() {
    let source = "\
// header comment
/* block
   comment */
let x = 1; // trailing
";
    let mut lexer = Lexer::new(source);

    let first = lexer.next_token().expect("clean source");
    assert_eq!(first.kind, TokenKind::Keyword);
    assert_eq!(first.lexeme, "let");
    assert_eq!(first.line, 4);
}

#[test]
fn lone_slash_is_the_division_symbol() {
    let tokens = lex("let x = a / b;");

    assert!(tokens.contains(&(TokenKind::Symbol, "/".to_string())));
}

#[test]
fn end_of_stream_supply_is_endless() {
    let mut lexer = Lexer::new("class");

    assert_eq!(lexer.next_token().expect("keyword").kind, TokenKind::Keyword);

    for _ in 0..5 {
        assert_eq!(lexer.next_token().expect("eof").kind, TokenKind::Eof);
    }
}

#[test]
fn unexpected_character_is_a_syntax_error_with_its_line() {
    let mut lexer = Lexer::new("let x = 1;\nlet y = @;");

    // Drain the first line's tokens plus `let y =`.
    for _ in 0..8 {
        lexer.next_token().expect("clean prefix");
    }

    let error = lexer.next_token().expect_err("@ is not Jack");
    assert_eq!(error.line, 2);
    assert_eq!(error.found.as_deref(), Some("@"));
    assert_eq!(error.message, "Unexpected character");
}

#[test]
fn unterminated_string_is_rejected() {
    let mut lexer = Lexer::new("let s = \"abc");

    for _ in 0..3 {
        lexer.next_token().expect("clean prefix");
    }

    let error = lexer.next_token().expect_err("string never closes");
    assert_eq!(error.message, "Unterminated string constant");
    assert_eq!(error.found.as_deref(), Some("\"abc"));
}

#[test]
fn string_may_not_span_lines() {
    let mut lexer = Lexer::new("let s = \"ab\ncd\";");

    for _ in 0..3 {
        lexer.next_token().expect("clean prefix");
    }

    let error = lexer.next_token().expect_err("newline inside string");
    assert_eq!(error.line, 1);
    assert_eq!(error.message, "Unterminated string constant");
}
