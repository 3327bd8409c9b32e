/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public
 * `parse()` driver used to validate a Jack token stream and emit its
 * parse tree as markup.
 *
 * The grammar itself is split across multiple modules:
 * - `declarations.rs` → class-level grammar (class, varDec, subroutines)
 * - `statements.rs`   → statement grammar (`let`, `if`, `while`, ...)
 * - `expressions.rs`  → expression grammar (terms, calls, lists)
 * - `helpers.rs`      → window management and expect-and-consume
 *
 * This file serves as the root coordinator of the parsing process.
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

use crate::error::SyntaxError;
use crate::lexer::token::Token;
use crate::lexer::{Lexer, TokenSource};
use crate::markup::TreeSink;

/// The core Jackdaw recursive-descent parser.
///
/// The parser maintains a two-token window over an on-demand token
/// source: `current` (the last token committed to the tree) and
/// `lookahead` (the next token, inspected to choose between grammar
/// alternatives but not yet committed). `lookahead` is always the token
/// immediately following `current` in stream order, and `advance()` is
/// the only way to shift the window. No rule ever inspects more than one
/// token beyond `current`.
///
/// The grammar rules are implemented through extension modules
/// (`declarations`, `statements`, `expressions`, `helpers`) via
/// additional `impl Parser` blocks.
pub struct Parser<S: TokenSource> {
    /// The on-demand token supplier; pulled exactly once per advance.
    pub(crate) source: S,

    /// The last token committed to the parse tree.
    pub(crate) current: Token,

    /// The next uncommitted token.
    pub(crate) lookahead: Token,

    /// The append-only parse-tree output.
    pub(crate) sink: TreeSink,
}

/// Public entry point for the Jackdaw parsing phase.
///
/// Lexes `source` on demand, parses one class declaration and returns
/// the flattened parse-tree markup.
///
/// # Errors
/// The first grammar (or lexical) violation aborts the parse; the
/// partially built tree is discarded and never surfaced.
pub fn parse(source: &str) -> Result<String, SyntaxError> {
    Parser::new(Lexer::new(source))?.parse()
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser over `source`, priming the lookahead slot with
    /// the first token. `current` starts as a synthetic pre-stream
    /// marker that no rule ever reads.
    pub fn new(mut source: S) -> Result<Self, SyntaxError> {
        let lookahead = source.next_token()?;

        Ok(Self {
            source,
            current: Token::eof(0),
            lookahead,
            sink: TreeSink::new(),
        })
    }

    /// Runs the grammar's entry rule (a single class declaration) and
    /// flattens the sink into the final markup string.
    ///
    /// Consumes the parser: a token stream is not resettable, so one
    /// parser instance performs exactly one parse attempt.
    pub fn parse(mut self) -> Result<String, SyntaxError> {
        self.parse_class()?;
        Ok(self.sink.finish())
    }
}
