/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Library root for the Jackdaw syntax analyzer.
 *
 * Jackdaw takes a Jack source file, checks it against the Jack grammar and
 * prints a fully bracketed parse tree in an XML-style markup, suitable for
 * byte-by-byte comparison against a reference tree.
 *
 * Pipeline:
 * ```text
 * Source → Lexer → Tokens → Parser → Parse-tree markup
 * ```
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

/// Human-friendly rendering of syntax errors.
pub mod diagnostics;

/// The `SyntaxError` type raised on the first grammar violation.
pub mod error;

/// Lexical analysis: tokens, keyword table and the on-demand tokenizer.
pub mod lexer;

/// Token-to-markup formatting and the append-only parse-tree sink.
pub mod markup;

/// The recursive-descent parse engine.
pub mod parser;

pub use error::SyntaxError;
pub use parser::parse;
