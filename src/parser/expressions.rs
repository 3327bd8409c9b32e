/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Expression Grammar
 *
 * This file contains the Jack expression grammar: expressions, terms,
 * subroutine calls and expression lists.
 *
 * Jack models no operator precedence. An expression is a flat
 * left-to-right chain of terms joined by single-character operators;
 * grouping requires explicit parentheses. The mutual recursion
 * expression → term → subroutineCall → expressionList → expression is
 * structural and bounded only by the nesting depth of the source.
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
use crate::lexer::token::TokenKind;
use crate::lexer::TokenSource;
use crate::parser::helpers::TokenPat;
use crate::parser::parser::Parser;

/// The fixed binary/comparison operator set.
const OPERATORS: &str = "+-*/<>=~&|";

/// Keyword constants that form complete terms on their own.
///
/// `this` deliberately belongs here: it is a standalone term and takes
/// no call, field or index suffix.
const KEYWORD_CONSTANTS: &[TokenPat] = &[
    TokenPat::Keyword("true"),
    TokenPat::Keyword("false"),
    TokenPat::Keyword("null"),
    TokenPat::Keyword("this"),
];

impl<S: TokenSource> Parser<S> {
    /// expression → term (op term)*
    pub(crate) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.open("expression");

        self.parse_term()?;

        while let Some(op) = self.peek_operator() {
            self.expect(TokenPat::Symbol(op))?;
            self.parse_term()?;
        }

        self.close("expression");
        Ok(())
    }

    /// term → integerConstant | stringConstant | keywordConstant
    ///      | varName | varName '[' expression ']' | subroutineCall
    ///      | '(' expression ')' | ('-' | '~') term
    ///
    /// Dispatches on lookahead. The identifier case needs one extra peek
    /// at the symbol following the identifier to choose between a bare
    /// variable, an indexed reference and a subroutine call; that single
    /// peek is the grammar's only two-token decision.
    pub(crate) fn parse_term(&mut self) -> Result<(), SyntaxError> {
        self.open("term");

        match self.lookahead.kind {
            TokenKind::Number => {
                self.expect(TokenPat::IntegerConstant)?;
            }

            TokenKind::String => {
                self.expect(TokenPat::StringConstant)?;
            }

            TokenKind::Keyword if self.peek_is_keyword_constant() => {
                self.expect_any(KEYWORD_CONSTANTS)?;
            }

            TokenKind::Identifier => {
                self.expect(TokenPat::Identifier)?;

                if self.peek_symbol_is('(') || self.peek_symbol_is('.') {
                    self.parse_subroutine_call()?;
                } else if self.peek_symbol_is('[') {
                    self.expect(TokenPat::Symbol('['))?;
                    self.parse_expression()?;
                    self.expect(TokenPat::Symbol(']'))?;
                }
                // Any other lookahead: the identifier stands alone.
            }

            TokenKind::Symbol if self.peek_symbol_is('(') => {
                self.expect(TokenPat::Symbol('('))?;
                self.parse_expression()?;
                self.expect(TokenPat::Symbol(')'))?;
            }

            TokenKind::Symbol if self.peek_symbol_is('-') || self.peek_symbol_is('~') => {
                self.expect_any(&[TokenPat::Symbol('-'), TokenPat::Symbol('~')])?;
                self.parse_term()?;
            }

            _ => return Err(self.error("term expected")),
        }

        self.close("term");
        Ok(())
    }

    /// subroutineCall → subroutineName '(' expressionList ')'
    ///                | (className | varName) '.' subroutineName
    ///                  '(' expressionList ')'
    ///
    /// Called with the leading identifier already committed as the
    /// current token; one peek for '.' chooses between the two forms.
    /// Emits no marker of its own — its children appear inline in the
    /// enclosing term or do-statement, matching the reference trees.
    ///
    /// Returns the argument count; the unqualified form counts the
    /// implicit receiver.
    pub(crate) fn parse_subroutine_call(&mut self) -> Result<usize, SyntaxError> {
        debug_assert!(self.current_is(TokenKind::Identifier));

        let n_args;

        if self.peek_symbol_is('(') {
            // Method of the class itself: name(expressionList)
            self.expect(TokenPat::Symbol('('))?;
            n_args = self.parse_expression_list()? + 1;
            self.expect(TokenPat::Symbol(')'))?;
        } else {
            // Method of another object, or a function: name.sub(expressionList)
            self.expect(TokenPat::Symbol('.'))?;
            self.expect(TokenPat::Identifier)?;
            self.expect(TokenPat::Symbol('('))?;
            n_args = self.parse_expression_list()?;
            self.expect(TokenPat::Symbol(')'))?;
        }

        Ok(n_args)
    }

    /// expressionList → ( expression (',' expression)* )?
    ///
    /// Returns the number of expressions parsed; zero is valid and is
    /// detected by lookahead being the closing parenthesis before any
    /// expression is attempted. The marker pair is emitted even when
    /// empty.
    pub(crate) fn parse_expression_list(&mut self) -> Result<usize, SyntaxError> {
        self.open("expressionList");

        let mut n_args = 0;

        if !self.peek_symbol_is(')') {
            self.parse_expression()?;
            n_args = 1;
        }

        while self.peek_symbol_is(',') {
            self.expect(TokenPat::Symbol(','))?;
            self.parse_expression()?;
            n_args += 1;
        }

        self.close("expressionList");
        Ok(n_args)
    }

    fn peek_is_keyword_constant(&self) -> bool {
        KEYWORD_CONSTANTS.iter().any(|pat| pat.matches(&self.lookahead))
    }

    /// Returns the operator character if lookahead is one of the fixed
    /// operator set.
    fn peek_operator(&self) -> Option<char> {
        if self.peek_is(TokenKind::Symbol) {
            let mut chars = self.lookahead.lexeme.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if OPERATORS.contains(ch) => Some(ch),
                _ => None,
            }
        } else {
            None
        }
    }
}
