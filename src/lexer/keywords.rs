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

/// Determines whether a given word is a **reserved keyword** in Jack.
///
/// Used exclusively by the lexer to distinguish user-defined identifiers
/// from the language's 21 reserved words.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "class"
            | "constructor"
            | "function"
            | "method"
            | "field"
            | "static"
            | "var"
            | "int"
            | "char"
            | "boolean"
            | "void"
            | "true"
            | "false"
            | "null"
            | "this"
            | "let"
            | "do"
            | "if"
            | "else"
            | "while"
            | "return"
    )
}
