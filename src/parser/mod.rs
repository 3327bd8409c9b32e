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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its two-token window
/// - Exposes the `parse(source)` entry point
pub mod parser;

/// Class-level grammar:
/// - class / classVarDec / subroutineDec
/// - parameterList / subroutineBody / varDec
pub mod declarations;

/// Statement grammar:
/// - let / if / while / do / return
/// - the statements repetition
pub mod statements;

/// Expression grammar:
/// - expression / term / subroutineCall / expressionList
pub mod expressions;

/// Shared parser helpers:
/// - window advancement and lookahead predicates
/// - expect-and-consume (the only path into the sink)
pub mod helpers;

pub use helpers::TokenPat;
pub use parser::{parse, Parser};
