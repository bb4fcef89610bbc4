//! Tokenizer for declaration files.
//!
//! Comments and whitespace are skipped outright; the parser never sees
//! trivia. Unrecognized input becomes a [`TokenKind::Error`] token and the
//! stream always ends in exactly one [`TokenKind::Eof`].

use std::fmt;

use logos::Logos;

use crate::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub(crate) enum RawToken {
    #[token("namespace")]
    Namespace,
    #[token("interface")]
    Interface,
    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("delegate")]
    Delegate,
    #[token("event")]
    Event,
    #[token("public")]
    Public,
    #[token("internal")]
    Internal,

    #[regex("[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex("[0-9]+")]
    Int,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("=")]
    Eq,
}

/// Kind of a token. Identifier text is recovered from the source by span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Namespace,
    Interface,
    Class,
    Struct,
    Enum,
    Delegate,
    Event,
    Public,
    Internal,
    Ident,
    Int,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Lt,
    Gt,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Question,
    Eq,
    /// Input logos could not match.
    Error,
    Eof,
}

impl TokenKind {
    /// Whether the token can start a type declaration.
    pub fn starts_declaration(self) -> bool {
        matches!(
            self,
            TokenKind::Namespace
                | TokenKind::Interface
                | TokenKind::Class
                | TokenKind::Struct
                | TokenKind::Enum
                | TokenKind::Delegate
                | TokenKind::Public
                | TokenKind::Internal
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Namespace => "`namespace`",
            TokenKind::Interface => "`interface`",
            TokenKind::Class => "`class`",
            TokenKind::Struct => "`struct`",
            TokenKind::Enum => "`enum`",
            TokenKind::Delegate => "`delegate`",
            TokenKind::Event => "`event`",
            TokenKind::Public => "`public`",
            TokenKind::Internal => "`internal`",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Dot => "`.`",
            TokenKind::Question => "`?`",
            TokenKind::Eq => "`=`",
            TokenKind::Error => "invalid input",
            TokenKind::Eof => "end of file",
        };
        f.write_str(s)
    }
}

/// A token with its location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Tokenize `source`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(raw) => convert(raw),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, eof));
    tokens
}

fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Namespace => TokenKind::Namespace,
        RawToken::Interface => TokenKind::Interface,
        RawToken::Class => TokenKind::Class,
        RawToken::Struct => TokenKind::Struct,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Delegate => TokenKind::Delegate,
        RawToken::Event => TokenKind::Event,
        RawToken::Public => TokenKind::Public,
        RawToken::Internal => TokenKind::Internal,
        RawToken::Ident => TokenKind::Ident,
        RawToken::Int => TokenKind::Int,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Question => TokenKind::Question,
        RawToken::Eq => TokenKind::Eq,
    }
}
