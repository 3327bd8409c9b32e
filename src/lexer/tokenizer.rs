/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * File:      tokenizer.rs
 * Purpose:   On-demand lexical analysis of Jack source text.
 *
 * Unlike a batch lexer, this tokenizer produces one token per call to
 * `next_token()`. Once the input is exhausted every further call returns
 * an `Eof` token, so the parser's one-token lookahead never runs off the
 * end of the stream.
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
use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{Token, TokenKind};
use crate::lexer::TokenSource;

/// The fixed Jack symbol set.
const SYMBOLS: &str = "{}()[].,;+-*/&|<>=~";

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
}

impl Lexer {
    /// Creates a new lexer over a UTF-8 Jack source string, with the
    /// cursor at position 0 and the line counter at 1.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
        }
    }

    /// Scans and returns the next token from the source stream.
    ///
    /// Skips whitespace, `//` line comments and `/* ... */` block
    /// comments, keeping the line counter accurate across all of them.
    /// At end of input this keeps returning `Eof` tokens.
    ///
    /// # Errors
    /// - A character outside the Jack alphabet
    /// - A string constant not closed before the end of its line
    /// - A block comment not closed before the end of input
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        loop {
            if self.is_at_end() {
                return Ok(Token::eof(self.line));
            }

            let ch = self.advance();

            match ch {
                // Whitespace
                ' ' | '\r' | '\t' => {}
                '\n' => self.line += 1,

                // Single-line or block comment; a lone '/' is a symbol
                '/' => {
                    if self.match_char('/') {
                        while self.peek() != '\n' && !self.is_at_end() {
                            self.advance();
                        }
                    } else if self.match_char('*') {
                        self.block_comment()?;
                    } else {
                        return Ok(Token::new(TokenKind::Symbol, "/", self.line));
                    }
                }

                // Strings (Jack strings are double-quoted, single-line,
                // with no escape sequences)
                '"' => return self.string(),

                // Numbers
                '0'..='9' => return Ok(self.number(ch)),

                // Identifiers / keywords
                'a'..='z' | 'A'..='Z' | '_' => return Ok(self.identifier(ch)),

                _ if SYMBOLS.contains(ch) => {
                    return Ok(Token::new(TokenKind::Symbol, ch.to_string(), self.line));
                }

                _ => {
                    return Err(SyntaxError::new(
                        self.line,
                        Some(ch.to_string()),
                        "Unexpected character",
                    ));
                }
            }
        }
    }

    /// Consumes a string constant. The opening quote has already been
    /// consumed; the stored lexeme excludes both quotes.
    fn string(&mut self) -> Result<Token, SyntaxError> {
        let start = self.current;

        while !self.is_at_end() && self.peek() != '"' && self.peek() != '\n' {
            self.advance();
        }

        if self.is_at_end() || self.peek() == '\n' {
            let partial: String = self.chars[start..self.current].iter().collect();
            return Err(SyntaxError::new(
                self.line,
                Some(format!("\"{}", partial)),
                "Unterminated string constant",
            ));
        }

        let lexeme: String = self.chars[start..self.current].iter().collect();
        self.advance(); // closing quote

        Ok(Token::new(TokenKind::String, lexeme, self.line))
    }

    /// Consumes a decimal integer constant starting with `first`.
    fn number(&mut self, first: char) -> Token {
        let mut lexeme = first.to_string();

        while self.peek().is_ascii_digit() {
            lexeme.push(self.advance());
        }

        Token::new(TokenKind::Number, lexeme, self.line)
    }

    /// Consumes an identifier or keyword starting with `first`.
    fn identifier(&mut self, first: char) -> Token {
        let mut lexeme = first.to_string();

        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            lexeme.push(self.advance());
        }

        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, lexeme, self.line)
    }

    /// Skips a `/* ... */` block comment. The opening `/*` has already
    /// been consumed.
    fn block_comment(&mut self) -> Result<(), SyntaxError> {
        while !self.is_at_end() {
            let ch = self.advance();

            if ch == '\n' {
                self.line += 1;
            } else if ch == '*' && self.match_char('/') {
                return Ok(());
            }
        }

        Err(SyntaxError::new(self.line, None, "Unterminated comment"))
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Consumes the next character only if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == expected {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Returns the next unconsumed character, or `'\0'` at end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Result<Token, SyntaxError> {
        Lexer::next_token(self)
    }
}
