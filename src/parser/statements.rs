/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Statement Grammar
 *
 * This file contains the grammar rules for the five Jack statements
 * (`let`, `if`, `while`, `do`, `return`) and the statements repetition
 * that strings them together inside a `{ }` body.
 *
 * Dispatch is by the leading keyword of each statement; no other token
 * may begin a statement.
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
use crate::lexer::TokenSource;
use crate::parser::helpers::TokenPat;
use crate::parser::parser::Parser;

/// The keywords that may begin a statement.
const STATEMENT_KEYWORDS: &[&str] = &["let", "if", "while", "do", "return"];

impl<S: TokenSource> Parser<S> {
    /// statements → statement*
    ///
    /// Repeats while lookahead remains a statement keyword. There is no
    /// explicit terminator; the surrounding braces (consumed by the
    /// caller) bound the repetition. The marker pair is emitted even for
    /// an empty sequence.
    pub(crate) fn parse_statements(&mut self) -> Result<(), SyntaxError> {
        self.open("statements");

        while self.peek_is_statement() {
            self.parse_statement()?;
        }

        self.close("statements");
        Ok(())
    }

    /// statement → letStatement | ifStatement | whileStatement
    ///           | doStatement | returnStatement
    pub(crate) fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        if self.peek_keyword_is("let") {
            self.parse_let()
        } else if self.peek_keyword_is("if") {
            self.parse_if()
        } else if self.peek_keyword_is("while") {
            self.parse_while()
        } else if self.peek_keyword_is("do") {
            self.parse_do()
        } else if self.peek_keyword_is("return") {
            self.parse_return()
        } else {
            Err(self.error("statement expected"))
        }
    }

    /// letStatement → 'let' varName ('[' expression ']')? '=' expression ';'
    pub(crate) fn parse_let(&mut self) -> Result<(), SyntaxError> {
        self.open("letStatement");

        self.expect(TokenPat::Keyword("let"))?;
        self.expect(TokenPat::Identifier)?;

        if self.peek_symbol_is('[') {
            self.expect(TokenPat::Symbol('['))?;
            self.parse_expression()?;
            self.expect(TokenPat::Symbol(']'))?;
        }

        self.expect(TokenPat::Symbol('='))?;
        self.parse_expression()?;
        self.expect(TokenPat::Symbol(';'))?;

        self.close("letStatement");
        Ok(())
    }

    /// ifStatement → 'if' '(' expression ')' '{' statements '}'
    ///               ('else' '{' statements '}')?
    pub(crate) fn parse_if(&mut self) -> Result<(), SyntaxError> {
        self.open("ifStatement");

        self.expect(TokenPat::Keyword("if"))?;
        self.expect(TokenPat::Symbol('('))?;
        self.parse_expression()?;
        self.expect(TokenPat::Symbol(')'))?;

        self.expect(TokenPat::Symbol('{'))?;
        self.parse_statements()?;
        self.expect(TokenPat::Symbol('}'))?;

        if self.peek_keyword_is("else") {
            self.expect(TokenPat::Keyword("else"))?;
            self.expect(TokenPat::Symbol('{'))?;
            self.parse_statements()?;
            self.expect(TokenPat::Symbol('}'))?;
        }

        self.close("ifStatement");
        Ok(())
    }

    /// whileStatement → 'while' '(' expression ')' '{' statements '}'
    pub(crate) fn parse_while(&mut self) -> Result<(), SyntaxError> {
        self.open("whileStatement");

        self.expect(TokenPat::Keyword("while"))?;
        self.expect(TokenPat::Symbol('('))?;
        self.parse_expression()?;
        self.expect(TokenPat::Symbol(')'))?;

        self.expect(TokenPat::Symbol('{'))?;
        self.parse_statements()?;
        self.expect(TokenPat::Symbol('}'))?;

        self.close("whileStatement");
        Ok(())
    }

    /// doStatement → 'do' subroutineCall ';'
    ///
    /// A statement-level call whose result is discarded.
    pub(crate) fn parse_do(&mut self) -> Result<(), SyntaxError> {
        self.open("doStatement");

        self.expect(TokenPat::Keyword("do"))?;
        self.expect(TokenPat::Identifier)?;
        self.parse_subroutine_call()?;
        self.expect(TokenPat::Symbol(';'))?;

        self.close("doStatement");
        Ok(())
    }

    /// returnStatement → 'return' expression? ';'
    ///
    /// The expression is present unless lookahead is immediately ';'.
    pub(crate) fn parse_return(&mut self) -> Result<(), SyntaxError> {
        self.open("returnStatement");

        self.expect(TokenPat::Keyword("return"))?;

        if !self.peek_symbol_is(';') {
            self.parse_expression()?;
        }

        self.expect(TokenPat::Symbol(';'))?;

        self.close("returnStatement");
        Ok(())
    }

    fn peek_is_statement(&self) -> bool {
        STATEMENT_KEYWORDS.iter().any(|&kw| self.peek_keyword_is(kw))
    }
}
