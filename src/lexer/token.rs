/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types shared by the Jackdaw lexer
 *            and parser.
 *
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

/// The **category of a lexical token** in the Jack language.
///
/// Jack has a deliberately small lexical surface: five real categories
/// plus the end-of-stream marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A reserved Jack keyword.
    ///
    /// Examples: `class`, `function`, `let`, `while`, `true`, `this`.
    /// Keyword detection is handled by `keywords.rs`.
    Keyword,

    /// A user-defined name: class names, subroutine names, variable names.
    Identifier,

    /// A decimal integer constant, e.g. `42`.
    Number,

    /// A double-quoted string constant. The stored lexeme is the string
    /// *contents*, without the surrounding quotes.
    String,

    /// One of the fixed single-character Jack symbols:
    /// `{ } ( ) [ ] . , ; + - * / & | < > = ~`
    Symbol,

    /// End-of-stream marker.
    ///
    /// The lexer returns an endless supply of these once the real input
    /// is exhausted, so the parser's lookahead is always defined.
    Eof,
}

/// A **single lexical token** produced by the Jackdaw lexer.
///
/// A token is an immutable value: a category, the literal source text,
/// and the 1-based line it came from (kept for error reporting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// The 1-based line number where this token appeared.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    /// An end-of-stream token. Also used by the parser to seed the token
    /// window before the first `advance()`.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme, which is what diagnostics want:
    /// users care about *what they wrote*, not the internal structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
