use std::path::Path;
use std::sync::Arc;

use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::core::error::ParseError;

/// Parsed module of a single route file.
///
/// Owned by the collector only while the file is being matched.
pub struct ParsedSource {
    pub module: Module,
    pub file_path: String,
}

/// Pick the swc syntax for a file.
///
/// Every file is parsed as TypeScript with decorators, which also accepts plain
/// JavaScript. JSX is enabled except for `.ts`/`.mts`/`.cts`, where it would
/// break `<T>value` type assertions and generic arrow functions.
fn syntax_for(file_path: &str) -> Syntax {
    let extension = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    Syntax::Typescript(TsSyntax {
        tsx: !matches!(extension, "ts" | "mts" | "cts"),
        decorators: true,
        dts: file_path.ends_with(".d.ts"),
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code into an AST.
///
/// A syntax error is returned as a `ParseError` carrying the file path; it is
/// up to the caller to decide whether that aborts anything. Errors swc
/// recovers from (strict mode violations such as legacy octal literals or
/// `with` statements) are syntax errors in a module and fail the parse too.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedSource, ParseError> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let to_parse_error = |e: SwcError| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            ParseError {
                file_path: file_path.to_string(),
                message: format!(
                    "{} (line {}, column {})",
                    e.kind().msg(),
                    loc.line,
                    loc.col_display + 1
                ),
            }
        };

        let module = parser.parse_module().map_err(to_parse_error)?;
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(to_parse_error(err));
        }

        Ok(ParsedSource {
            module,
            file_path: file_path.to_string(),
        })
    })
}
