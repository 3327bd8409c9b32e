/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Shared parser helpers: token-window management, lookahead predicates
 * and the expect-and-consume primitive that feeds the parse-tree sink.
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

use std::fmt;

use crate::error::SyntaxError;
use crate::lexer::token::TokenKind;
use crate::lexer::TokenSource;
use crate::parser::parser::Parser;

/// A pattern describing one acceptable shape for the lookahead token.
///
/// Keywords and symbols match on their exact lexeme; the other variants
/// match on category alone. `Eof` has no pattern, so the end of the
/// stream can never be consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPat {
    /// A specific reserved word, e.g. `Keyword("while")`.
    Keyword(&'static str),

    /// A specific symbol, e.g. `Symbol(';')`.
    Symbol(char),

    /// Any identifier.
    Identifier,

    /// Any integer constant.
    IntegerConstant,

    /// Any string constant.
    StringConstant,
}

impl TokenPat {
    pub fn matches(&self, token: &crate::lexer::token::Token) -> bool {
        match self {
            TokenPat::Keyword(kw) => token.kind == TokenKind::Keyword && token.lexeme == *kw,
            TokenPat::Symbol(ch) => {
                token.kind == TokenKind::Symbol && token.lexeme == ch.to_string()
            }
            TokenPat::Identifier => token.kind == TokenKind::Identifier,
            TokenPat::IntegerConstant => token.kind == TokenKind::Number,
            TokenPat::StringConstant => token.kind == TokenKind::String,
        }
    }
}

impl fmt::Display for TokenPat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenPat::Keyword(kw) => write!(f, "{}", kw),
            TokenPat::Symbol(ch) => write!(f, "{}", ch),
            TokenPat::Identifier => write!(f, "an identifier"),
            TokenPat::IntegerConstant => write!(f, "an integer constant"),
            TokenPat::StringConstant => write!(f, "a string constant"),
        }
    }
}

/// Renders a candidate list for multi-pattern expectation messages.
fn one_of(pats: &[TokenPat]) -> String {
    let names: Vec<String> = pats.iter().map(TokenPat::to_string).collect();
    names.join(" or ")
}

impl<S: TokenSource> Parser<S> {
    /// Shifts the window: lookahead becomes current and one fresh token
    /// is pulled from the source. The sole mutator of the window.
    pub(crate) fn advance(&mut self) -> Result<(), SyntaxError> {
        let next = self.source.next_token()?;
        self.current = std::mem::replace(&mut self.lookahead, next);
        Ok(())
    }

    /// Checks the lookahead token's category without advancing.
    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Checks the current token's category without advancing.
    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Checks whether lookahead is a specific symbol.
    pub(crate) fn peek_symbol_is(&self, ch: char) -> bool {
        TokenPat::Symbol(ch).matches(&self.lookahead)
    }

    /// Checks whether lookahead is a specific keyword.
    pub(crate) fn peek_keyword_is(&self, kw: &str) -> bool {
        self.lookahead.kind == TokenKind::Keyword && self.lookahead.lexeme == kw
    }

    /// Expect-and-consume, the single-pattern primitive.
    ///
    /// If lookahead matches `pat`, the window advances and the newly
    /// committed token is formatted and appended to the sink. This is
    /// the only place tokens enter the sink; it is called exactly once
    /// per grammar-mandated terminal.
    ///
    /// # Errors
    /// A `SyntaxError` naming the lookahead token, its line, and the
    /// expected pattern.
    pub(crate) fn expect(&mut self, pat: TokenPat) -> Result<(), SyntaxError> {
        if pat.matches(&self.lookahead) {
            self.advance()?;
            self.sink.token(&self.current);
            Ok(())
        } else {
            Err(self.error(format!("Expected {}", pat)))
        }
    }

    /// Multi-pattern expect: tries each candidate against the primitive
    /// and forwards the first match. On no match, one failure lists all
    /// candidates.
    pub(crate) fn expect_any(&mut self, pats: &[TokenPat]) -> Result<(), SyntaxError> {
        for pat in pats {
            if pat.matches(&self.lookahead) {
                return self.expect(*pat);
            }
        }

        Err(self.error(format!("Expected {}", one_of(pats))))
    }

    /// Builds a `SyntaxError` blaming the lookahead token.
    pub(crate) fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::at_token(&self.lookahead, message)
    }

    /// Emits the opening marker of a nonterminal.
    pub(crate) fn open(&mut self, tag: &str) {
        self.sink.open(tag);
    }

    /// Emits the closing marker of a nonterminal.
    pub(crate) fn close(&mut self, tag: &str) {
        self.sink.close(tag);
    }
}
