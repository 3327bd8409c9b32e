/*
 * ==========================================================================
 * JACKDAW - Jack Syntax Analyzer
 * ==========================================================================
 *
 * Class-Level Grammar
 *
 * This file contains the grammar rules for the structure of a Jack class:
 * the class header, class-variable declarations, subroutine declarations,
 * parameter lists, subroutine bodies and local variable declarations.
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

/// 'int' | 'char' | 'boolean' | className
const TYPE: &[TokenPat] = &[
    TokenPat::Keyword("int"),
    TokenPat::Keyword("char"),
    TokenPat::Keyword("boolean"),
    TokenPat::Identifier,
];

/// 'void' | type — valid only as a subroutine return type.
const RETURN_TYPE: &[TokenPat] = &[
    TokenPat::Keyword("void"),
    TokenPat::Keyword("int"),
    TokenPat::Keyword("char"),
    TokenPat::Keyword("boolean"),
    TokenPat::Identifier,
];

const CLASS_VAR_KIND: &[TokenPat] = &[TokenPat::Keyword("static"), TokenPat::Keyword("field")];

const SUBROUTINE_KIND: &[TokenPat] = &[
    TokenPat::Keyword("constructor"),
    TokenPat::Keyword("function"),
    TokenPat::Keyword("method"),
];

impl<S: TokenSource> Parser<S> {
    /// class → 'class' className '{' classVarDec* subroutineDec* '}'
    ///
    /// Entry rule of the grammar. The two sections are order-dependent:
    /// no subroutine declaration may appear before the variable section
    /// ends, which the successive while-guards enforce.
    pub(crate) fn parse_class(&mut self) -> Result<(), SyntaxError> {
        self.open("class");

        self.expect(TokenPat::Keyword("class"))?;
        self.expect(TokenPat::Identifier)?;
        self.expect(TokenPat::Symbol('{'))?;

        while self.peek_keyword_is("static") || self.peek_keyword_is("field") {
            self.parse_class_var_dec()?;
        }

        while self.peek_keyword_is("constructor")
            || self.peek_keyword_is("function")
            || self.peek_keyword_is("method")
        {
            self.parse_subroutine_dec()?;
        }

        self.expect(TokenPat::Symbol('}'))?;

        self.close("class");
        Ok(())
    }

    /// classVarDec → ('static' | 'field') type varName (',' varName)* ';'
    pub(crate) fn parse_class_var_dec(&mut self) -> Result<(), SyntaxError> {
        self.open("classVarDec");

        self.expect_any(CLASS_VAR_KIND)?;
        self.expect_any(TYPE)?;
        self.expect(TokenPat::Identifier)?;

        while self.peek_symbol_is(',') {
            self.expect(TokenPat::Symbol(','))?;
            self.expect(TokenPat::Identifier)?;
        }

        self.expect(TokenPat::Symbol(';'))?;

        self.close("classVarDec");
        Ok(())
    }

    /// subroutineDec → ('constructor' | 'function' | 'method')
    ///                 ('void' | type) subroutineName
    ///                 '(' parameterList ')' subroutineBody
    pub(crate) fn parse_subroutine_dec(&mut self) -> Result<(), SyntaxError> {
        self.open("subroutineDec");

        self.expect_any(SUBROUTINE_KIND)?;
        self.expect_any(RETURN_TYPE)?;
        self.expect(TokenPat::Identifier)?;

        self.expect(TokenPat::Symbol('('))?;
        self.parse_parameter_list()?;
        self.expect(TokenPat::Symbol(')'))?;

        self.parse_subroutine_body()?;

        self.close("subroutineDec");
        Ok(())
    }

    /// parameterList → ( type varName (',' type varName)* )?
    ///
    /// Zero-width when lookahead is the closing parenthesis; the marker
    /// pair is emitted regardless.
    pub(crate) fn parse_parameter_list(&mut self) -> Result<(), SyntaxError> {
        self.open("parameterList");

        if !self.peek_symbol_is(')') {
            self.expect_any(TYPE)?;
            self.expect(TokenPat::Identifier)?;

            while self.peek_symbol_is(',') {
                self.expect(TokenPat::Symbol(','))?;
                self.expect_any(TYPE)?;
                self.expect(TokenPat::Identifier)?;
            }
        }

        self.close("parameterList");
        Ok(())
    }

    /// subroutineBody → '{' varDec* statements '}'
    ///
    /// All local declarations precede the statement sequence; the varDec
    /// loop runs only while lookahead is 'var', then parsing moves
    /// irrevocably to statements.
    pub(crate) fn parse_subroutine_body(&mut self) -> Result<(), SyntaxError> {
        self.open("subroutineBody");

        self.expect(TokenPat::Symbol('{'))?;

        while self.peek_keyword_is("var") {
            self.parse_var_dec()?;
        }

        self.parse_statements()?;
        self.expect(TokenPat::Symbol('}'))?;

        self.close("subroutineBody");
        Ok(())
    }

    /// varDec → 'var' type varName (',' varName)* ';'
    pub(crate) fn parse_var_dec(&mut self) -> Result<(), SyntaxError> {
        self.open("varDec");

        self.expect(TokenPat::Keyword("var"))?;
        self.expect_any(TYPE)?;
        self.expect(TokenPat::Identifier)?;

        while self.peek_symbol_is(',') {
            self.expect(TokenPat::Symbol(','))?;
            self.expect(TokenPat::Identifier)?;
        }

        self.expect(TokenPat::Symbol(';'))?;

        self.close("varDec");
        Ok(())
    }
}
