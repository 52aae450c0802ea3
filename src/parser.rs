// Copyright 2023 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parser front-end.
//!
//! The grammar is owned by the external parser; this module only wires
//! file access and error reporting around it.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files;
use rustpython_ast as ast;
use rustpython_parser::{parse, Mode};

/// File identifier.
/// References a source file in the source database.
pub type FileId = usize;

/// Source database.
/// Stores the source file contents for reference.
pub type SourceDatabase = files::SimpleFiles<String, String>;

/// Parse Python source code from a string.
///
/// The file is added to the compilation database under the provided
/// name.
pub fn parse_inline(
    sources: &mut SourceDatabase,
    name: &str,
    source: String,
) -> Result<ast::Mod, Diagnostic<FileId>> {
    let file = sources.add(name.to_owned(), source.clone());
    parse(&source, Mode::Module, name).map_err(|err| {
        let offset = (u32::from(err.offset) as usize).min(source.len());
        Diagnostic::error()
            .with_message(format!("failed to parse input file '{}': {}", name, err))
            .with_labels(vec![Label::primary(file, offset..offset)])
    })
}

/// Parse a new source file.
///
/// The source file is fully read and added to the compilation
/// database. Returns the root node of the constructed tree, or a
/// descriptive error message in case of syntax error.
pub fn parse_file(
    sources: &mut SourceDatabase,
    name: &str,
) -> Result<ast::Mod, Diagnostic<FileId>> {
    let source = std::fs::read_to_string(name).map_err(|e| {
        Diagnostic::error().with_message(format!("failed to read input file '{}': {}", name, e))
    })?;
    parse_inline(sources, name, source)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn module_mode_accepts_statements() {
        let mut db = SourceDatabase::new();
        let module = parse_inline(&mut db, "stdin", String::from("x = 1\n")).unwrap();
        assert!(matches!(module, ast::Mod::Module(_)));
    }

    #[test]
    fn empty_source_parses_to_empty_module() {
        let mut db = SourceDatabase::new();
        let module = parse_inline(&mut db, "stdin", String::new()).unwrap();
        match module {
            ast::Mod::Module(module) => assert!(module.body.is_empty()),
            _ => panic!("expected a module"),
        }
    }

    #[test]
    fn unbalanced_parenthesis_is_rejected() {
        let mut db = SourceDatabase::new();
        assert!(parse_inline(&mut db, "stdin", String::from("print((1)\n")).is_err());
    }

    #[test]
    fn bad_indentation_is_rejected() {
        let mut db = SourceDatabase::new();
        assert!(parse_inline(&mut db, "stdin", String::from("def f():\npass\n")).is_err());
    }

    #[test]
    fn missing_file_is_rejected() {
        let mut db = SourceDatabase::new();
        assert!(parse_file(&mut db, "no/such/file.py").is_err());
    }
}
