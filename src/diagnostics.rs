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

use crate::error::SyntaxError;

/// Renders human-friendly diagnostics for syntax errors.
///
/// The first line is the canonical grading diagnostic
/// (`[line N] Error at '<lexeme>': <message>`), followed by a view of
/// the offending source line when the source text is available.
pub struct DiagnosticPrinter {
    /// Full source code of the file being analyzed, kept so the
    /// offending line can be shown.
    source: String,

    /// Name of the source file (e.g. `Main.jack`), used only for
    /// display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// [line 3] Error at '}': Expected ;
    ///   --> Main.jack:3
    ///    |
    ///  3 |     let x = y
    ///    |
    /// ```
    pub fn print(&self, error: &SyntaxError) {
        eprintln!("{}", error);
        eprintln!("  --> {}:{}", self.file_name, error.line);

        // Lines are 1-indexed in diagnostics; saturating_sub guards the
        // synthetic line 0 of a pre-stream token.
        let lines: Vec<&str> = self.source.lines().collect();
        if let Some(src_line) = lines.get(error.line.saturating_sub(1)) {
            eprintln!("   |");
            eprintln!("{:>3} | {}", error.line, src_line);
            eprintln!("   |");
        }
    }

    /// Prints the error as one JSON record to stderr, for graders that
    /// consume diagnostics programmatically.
    pub fn print_json(&self, error: &SyntaxError) {
        match serde_json::to_string(error) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}", error),
        }
    }
}
