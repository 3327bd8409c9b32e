/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Integration tests for the parse engine: accepted programs produce the
 * exact reference markup, malformed programs fail with the right line
 * and message, and the engine respects its structural guarantees
 * (nesting, determinism, one-token lookahead).
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

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;

use jackdaw::error::SyntaxError;
use jackdaw::lexer::{Lexer, Token, TokenKind, TokenSource};
use jackdaw::parser::Parser;

/// Wraps a statement sequence in a minimal class so it can be fed to the
/// grammar's entry rule.
fn wrap(statements: &str) -> String {
    format!(
        "class Main {{\n    function void main() {{\n        {}\n    }}\n}}\n",
        statements
    )
}

fn parse(source: &str) -> String {
    jackdaw::parse(source).expect("source should parse")
}

fn parse_err(source: &str) -> SyntaxError {
    jackdaw::parse(source).expect_err("source should be rejected")
}

// ---------------------------------------------------------------------
// Accepted programs
// ---------------------------------------------------------------------

#[test]
fn empty_class_emits_only_its_own_markers_and_braces() {
    let expected = concat!(
        "<class>\r\n",
        "<keyword> class </keyword>\r\n",
        "<identifier> Main </identifier>\r\n",
        "<symbol> { </symbol>\r\n",
        "<symbol> } </symbol>\r\n",
        "</class>\r\n",
    );

    assert_eq!(parse("class Main { }"), expected);
}

#[test]
fn let_statement_wraps_expression_term_and_constant() {
    let output = parse(&wrap("let x = 1;"));

    let expected = concat!(
        "<letStatement>\r\n",
        "<keyword> let </keyword>\r\n",
        "<identifier> x </identifier>\r\n",
        "<symbol> = </symbol>\r\n",
        "<expression>\r\n",
        "<term>\r\n",
        "<integerConstant> 1 </integerConstant>\r\n",
        "</term>\r\n",
        "</expression>\r\n",
        "<symbol> ; </symbol>\r\n",
        "</letStatement>\r\n",
    );

    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn do_with_no_arguments_emits_empty_expression_list() {
    let output = parse(&wrap("do foo();"));

    let expected = concat!(
        "<doStatement>\r\n",
        "<keyword> do </keyword>\r\n",
        "<identifier> foo </identifier>\r\n",
        "<symbol> ( </symbol>\r\n",
        "<expressionList>\r\n",
        "</expressionList>\r\n",
        "<symbol> ) </symbol>\r\n",
        "<symbol> ; </symbol>\r\n",
        "</doStatement>\r\n",
    );

    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn bare_return_has_no_nested_expression() {
    let output = parse(&wrap("return;"));

    let expected = concat!(
        "<returnStatement>\r\n",
        "<keyword> return </keyword>\r\n",
        "<symbol> ; </symbol>\r\n",
        "</returnStatement>\r\n",
    );

    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn parameterless_subroutine_emits_empty_parameter_list() {
    let output = parse("class Main { function void main() { return; } }");

    assert!(output.contains("<parameterList>\r\n</parameterList>\r\n"));
}

#[test]
fn operator_chain_stays_flat_left_to_right() {
    let output = parse(&wrap("let x = a + b * c;"));

    let expected = concat!(
        "<expression>\r\n",
        "<term>\r\n",
        "<identifier> a </identifier>\r\n",
        "</term>\r\n",
        "<symbol> + </symbol>\r\n",
        "<term>\r\n",
        "<identifier> b </identifier>\r\n",
        "</term>\r\n",
        "<symbol> * </symbol>\r\n",
        "<term>\r\n",
        "<identifier> c </identifier>\r\n",
        "</term>\r\n",
        "</expression>\r\n",
    );

    assert!(output.contains(expected), "precedence reordering in:\n{}", output);
}

#[test]
fn parenthesized_expression_nests_inside_a_term() {
    let output = parse(&wrap("let x = (a + b);"));

    let expected = concat!(
        "<term>\r\n",
        "<symbol> ( </symbol>\r\n",
        "<expression>\r\n",
        "<term>\r\n",
        "<identifier> a </identifier>\r\n",
        "</term>\r\n",
        "<symbol> + </symbol>\r\n",
        "<term>\r\n",
        "<identifier> b </identifier>\r\n",
        "</term>\r\n",
        "</expression>\r\n",
        "<symbol> ) </symbol>\r\n",
        "</term>\r\n",
    );

    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn comparison_symbols_are_escaped() {
    let output = parse(&wrap("if (x < 0) { let x = y & z; }"));

    assert!(output.contains("<symbol> &lt; </symbol>\r\n"));
    assert!(output.contains("<symbol> &amp; </symbol>\r\n"));
}

#[test]
fn this_is_a_complete_term() {
    let output = parse(&wrap("return this;"));

    let expected = concat!(
        "<term>\r\n",
        "<keyword> this </keyword>\r\n",
        "</term>\r\n",
    );

    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn unary_operators_nest_recursively() {
    let output = parse(&wrap("let x = -~y;"));

    let expected = concat!(
        "<term>\r\n",
        "<symbol> - </symbol>\r\n",
        "<term>\r\n",
        "<symbol> ~ </symbol>\r\n",
        "<term>\r\n",
        "<identifier> y </identifier>\r\n",
        "</term>\r\n",
        "</term>\r\n",
        "</term>\r\n",
    );

    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn qualified_call_and_array_index_disambiguate_by_one_peek() {
    let output = parse(&wrap("let x = a[i] + Screen.peek(y, 2);"));

    assert!(output.contains("<symbol> [ </symbol>\r\n"));
    assert!(output.contains("<identifier> Screen </identifier>\r\n"));
    assert!(output.contains("<symbol> . </symbol>\r\n"));
    // Two arguments, one comma inside the list.
    let expected = concat!(
        "<symbol> , </symbol>\r\n",
        "<expression>\r\n",
        "<term>\r\n",
        "<integerConstant> 2 </integerConstant>\r\n",
        "</term>\r\n",
        "</expression>\r\n",
        "</expressionList>\r\n",
    );
    assert!(output.contains(expected), "missing fragment in:\n{}", output);
}

#[test]
fn class_var_decs_and_locals_parse_in_order() {
    let source = "\
class Point {
    static int count;
    field int x, y;

    method int sum() {
        var int a, b;
        let a = x;
        let b = y;
        return a + b;
    }
}
";
    let output = parse(source);

    assert!(output.contains("<classVarDec>\r\n<keyword> static </keyword>\r\n"));
    assert!(output.contains("<classVarDec>\r\n<keyword> field </keyword>\r\n"));
    assert!(output.contains("<varDec>\r\n<keyword> var </keyword>\r\n"));
}

// ---------------------------------------------------------------------
// Structural guarantees
// ---------------------------------------------------------------------

#[test]
fn output_is_a_well_formed_tree() {
    let source = "\
class Game {
    field int score;

    method void run(int limit) {
        var int i;
        let i = 0;
        while (i < limit) {
            if (score > 100) {
                do Output.printInt(score);
            } else {
                let score = score + (i * 2);
            }
            let i = i + 1;
        }
        return;
    }
}
";
    let output = parse(source);
    let mut stack: Vec<&str> = Vec::new();

    for line in output.split("\r\n").filter(|line| !line.is_empty()) {
        if let Some(rest) = line.strip_prefix("</") {
            let tag = rest.strip_suffix('>').expect("malformed closing marker");
            assert_eq!(stack.pop(), Some(tag), "mismatched closing tag {}", tag);
        } else if line.starts_with('<') && line.ends_with('>') && !line.contains(' ') {
            stack.push(&line[1..line.len() - 1]);
        } else {
            // Terminal markup: only valid as a direct child of an open
            // nonterminal.
            assert!(!stack.is_empty(), "terminal outside any marker: {}", line);
        }
    }

    assert!(stack.is_empty(), "unclosed markers: {:?}", stack);
}

#[test]
fn parsing_twice_is_byte_identical() {
    let source = wrap("let x = Memory.peek(8000) + 1;");
    assert_eq!(parse(&source), parse(&source));
}

/// A token source that counts how many tokens the engine pulls. The
/// counter is shared so it survives the parser consuming the source.
struct CountingSource {
    inner: Lexer,
    pulls: Rc<Cell<usize>>,
}

impl TokenSource for CountingSource {
    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next_token()
    }
}

#[test]
fn engine_pulls_at_most_one_token_beyond_the_stream() {
    let source = wrap("let x = a[i] + Screen.peek(y, 2);");

    // Count the real tokens first.
    let mut lexer = Lexer::new(&source);
    let mut real_tokens = 0;
    loop {
        let token = lexer.next_token().expect("clean source");
        if token.kind == TokenKind::Eof {
            break;
        }
        real_tokens += 1;
    }

    let pulls = Rc::new(Cell::new(0));
    let counting = CountingSource {
        inner: Lexer::new(&source),
        pulls: Rc::clone(&pulls),
    };

    let parser = Parser::new(counting).expect("priming pull cannot fail here");
    parser.parse().expect("source should parse");

    // Every committed token costs exactly one pull, plus the single
    // priming pull whose result is the lookahead slot; the final pull
    // returns the first Eof. A deeper lookahead would show up as extra
    // pulls here.
    assert_eq!(pulls.get(), real_tokens + 1);
}

// ---------------------------------------------------------------------
// Rejected programs
// ---------------------------------------------------------------------

#[rstest]
#[case::unclosed_class_body("class Main {", 1, None, "Expected }")]
#[case::let_missing_eq(
    "class Main { function void main() { let x 5; } }",
    1,
    Some("5"),
    "Expected ="
)]
#[case::missing_term(
    "class Main {\n    function void main() {\n        let x = ;\n    }\n}",
    3,
    Some(";"),
    "term expected"
)]
#[case::dangling_operator(
    "class Main {\n    function void main() {\n        let x = 1 + ;\n    }\n}",
    3,
    Some(";"),
    "term expected"
)]
#[case::statement_position(
    "class Main { function void main() { foo(); } }",
    1,
    Some("foo"),
    "Expected }"
)]
#[case::this_takes_no_suffix(
    "class Main {\n    method void go() {\n        let x = this.f();\n    }\n}",
    3,
    Some("."),
    "Expected ;"
)]
#[case::void_not_a_var_type(
    "class Main { field void x; }",
    1,
    Some("void"),
    "Expected int or char or boolean or an identifier"
)]
#[case::subroutine_before_vars(
    "class Main { function void main() { return; } static int x; }",
    1,
    Some("static"),
    "Expected }"
)]
#[case::lexical_error(
    "class Main {\n    function void main() {\n        let x = $;\n    }\n}",
    3,
    Some("$"),
    "Unexpected character"
)]
fn rejects_with_accurate_line_and_message(
    #[case] source: &str,
    #[case] line: usize,
    #[case] found: Option<&str>,
    #[case] message: &str,
) {
    let error = parse_err(source);

    assert_eq!(error.line, line);
    assert_eq!(error.found.as_deref(), found);
    assert_eq!(error.message, message);
}

#[test]
fn error_display_uses_the_canonical_diagnostic_shape() {
    let error = parse_err("class Main {");
    assert_eq!(error.to_string(), "[line 1] Error at end: Expected }");

    let error = parse_err("class 5 { }");
    assert_eq!(
        error.to_string(),
        "[line 1] Error at '5': Expected an identifier"
    );
}
