/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * File:      markup.rs
 * Purpose:   Token-to-markup formatting and the append-only parse-tree
 *            sink the engine writes into.
 *
 * The emitted markup is compared byte-by-byte against reference trees, so
 * the exact shape matters: one marker or token line per emission, CRLF
 * line terminators, and `<tag> text </tag>` for terminals.
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

use crate::lexer::token::{Token, TokenKind};

/// Escapes the four characters reserved by the markup format.
/// Everything else passes through unchanged.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }

    out
}

/// Maps a token's lexical category to its terminal tag name.
pub fn tag_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "keyword",
        TokenKind::Identifier => "identifier",
        TokenKind::Number => "integerConstant",
        TokenKind::String => "stringConstant",
        TokenKind::Symbol => "symbol",
        // Eof never reaches the sink; it has no markup form.
        TokenKind::Eof => "",
    }
}

/// Formats one terminal token as a markup line (without the terminator),
/// e.g. `<keyword> class </keyword>`.
pub fn markup(token: &Token) -> String {
    let tag = tag_name(token.kind);
    format!("<{}> {} </{}>", tag, escape(&token.lexeme), tag)
}

/// The append-only output sink of the parse engine.
///
/// Fragments are collected in order and flattened once at the end, which
/// keeps emission linear-time on large inputs. The engine never reads the
/// sink back; it is purely the accumulated proof that the grammar matched.
#[derive(Debug, Default)]
pub struct TreeSink {
    fragments: Vec<String>,
}

impl TreeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits the opening marker of a nonterminal, e.g. `<whileStatement>`.
    pub fn open(&mut self, tag: &str) {
        self.fragments.push(format!("<{}>\r\n", tag));
    }

    /// Emits the closing marker of a nonterminal, e.g. `</whileStatement>`.
    pub fn close(&mut self, tag: &str) {
        self.fragments.push(format!("</{}>\r\n", tag));
    }

    /// Emits one formatted terminal token.
    pub fn token(&mut self, token: &Token) {
        self.fragments.push(format!("{}\r\n", markup(token)));
    }

    /// Flattens the sink into the final markup string.
    pub fn finish(self) -> String {
        self.fragments.concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape(">"), "&gt;");
        assert_eq!(escape("\""), "&quot;");
        assert_eq!(escape("&"), "&amp;");
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn formats_terminals_with_category_tags() {
        let kw = Token::new(TokenKind::Keyword, "class", 1);
        assert_eq!(markup(&kw), "<keyword> class </keyword>");

        let num = Token::new(TokenKind::Number, "42", 1);
        assert_eq!(markup(&num), "<integerConstant> 42 </integerConstant>");

        let s = Token::new(TokenKind::String, "hi there", 1);
        assert_eq!(markup(&s), "<stringConstant> hi there </stringConstant>");

        let lt = Token::new(TokenKind::Symbol, "<", 1);
        assert_eq!(markup(&lt), "<symbol> &lt; </symbol>");
    }

    #[test]
    fn sink_flattens_in_emission_order() {
        let mut sink = TreeSink::new();
        sink.open("expression");
        sink.token(&Token::new(TokenKind::Identifier, "x", 1));
        sink.close("expression");

        assert_eq!(
            sink.finish(),
            "<expression>\r\n<identifier> x </identifier>\r\n</expression>\r\n"
        );
    }
}
