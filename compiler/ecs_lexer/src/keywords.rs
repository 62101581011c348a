//! Reserved word table.
//!
//! Identifiers are scanned with a single regex and then classified here;
//! anything not listed stays an `IDENT`.

use ecs_ir::TokenKind;

/// Look up a reserved word by text.
///
/// All keywords are 2-6 ASCII letters, so anything outside that length
/// range is rejected before comparing.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=6).contains(&text.len()) {
        return None;
    }

    match text {
        "fn" => Some(TokenKind::Function),
        "if" => Some(TokenKind::If),
        "let" => Some(TokenKind::Let),
        "for" => Some(TokenKind::For),
        "new" => Some(TokenKind::New),
        "else" => Some(TokenKind::Else),
        "true" => Some(TokenKind::True),
        "exec" => Some(TokenKind::Exec),
        "while" => Some(TokenKind::While),
        "sleep" => Some(TokenKind::Sleep),
        "false" => Some(TokenKind::False),
        "class" => Some(TokenKind::Class),
        "return" => Some(TokenKind::Return),
        "typeof" => Some(TokenKind::Typeof),
        _ => None,
    }
}
