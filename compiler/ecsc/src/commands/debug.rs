//! Debug commands: `lex` and `parse` for inspecting the front end.

use super::{read_file, CommandError};

/// Lex a file and print one token per line.
pub fn lex_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    for line in render_tokens(&source) {
        println!("{line}");
    }
    Ok(())
}

/// Parse a file and print each statement's rendering.
pub fn parse_file(path: &str) -> Result<(), CommandError> {
    let source = read_file(path)?;
    for line in render_program(&source)? {
        println!("{line}");
    }
    Ok(())
}

/// `KIND "literal" @ start..end` for every token up to and including EOF.
pub fn render_tokens(source: &str) -> Vec<String> {
    ecs_lexer::lex(source)
        .iter()
        .map(|tok| format!("{} {:?} @ {:?}", tok.kind, tok.literal, tok.span))
        .collect()
}

/// Fully-parenthesised rendering of each top-level statement.
pub fn render_program(source: &str) -> Result<Vec<String>, CommandError> {
    let output = ecs_parse::parse(source);
    if output.has_errors() {
        return Err(CommandError::Parse(output.diagnostics()));
    }
    Ok(output
        .program
        .statements
        .iter()
        .map(ToString::to_string)
        .collect())
}
