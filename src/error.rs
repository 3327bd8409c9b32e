/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Structured syntax-error value raised by the lexer and the parse engine.
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

use serde::Serialize;
use thiserror::Error;

use crate::lexer::token::{Token, TokenKind};

/// The single error kind produced by Jackdaw.
///
/// A `SyntaxError` carries the offending lexeme (absent when the offense is
/// the end of the token stream), its 1-based source line, and a
/// human-readable expectation message. It is raised at most once per parse
/// attempt and always aborts the parse.
///
/// Its `Display` form is the canonical diagnostic line:
/// ```text
/// [line 3] Error at '}': Expected ;
/// [line 7] Error at end: term expected
/// ```
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("[line {line}] Error {}: {message}", location(.found))]
pub struct SyntaxError {
    /// Stable error code (Jackdaw has exactly one).
    pub code: &'static str,

    /// 1-based source line of the offending token.
    pub line: usize,

    /// The offending lexeme; `None` when lookahead was end-of-stream.
    pub found: Option<String>,

    /// What the grammar expected at this point.
    pub message: String,
}

fn location(found: &Option<String>) -> String {
    match found {
        Some(lexeme) => format!("at '{}'", lexeme),
        None => "at end".to_string(),
    }
}

impl SyntaxError {
    /// Generic constructor, used directly by the lexer.
    pub fn new(line: usize, found: Option<String>, message: impl Into<String>) -> Self {
        Self {
            code: "E_SYNTAX",
            line,
            found,
            message: message.into(),
        }
    }

    /// Builds an error blaming `token`, which is always the parser's
    /// lookahead at the point of mismatch.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        let found = if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token.lexeme.clone())
        };
        Self::new(token.line, found, message)
    }
}
