/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
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

/// Reserved-word table for the Jack language.
pub mod keywords;

/// The `Token` and `TokenKind` types shared by lexer and parser.
pub mod token;

/// The on-demand tokenizer.
pub mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;

use crate::error::SyntaxError;

/// The interface the parse engine requires from its token supplier.
///
/// Each call produces the next token in stream order; the stream is not
/// resettable. After the real input ends the source keeps returning
/// end-of-stream tokens forever, so lookahead past the end is always
/// well-defined.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, SyntaxError>;
}
