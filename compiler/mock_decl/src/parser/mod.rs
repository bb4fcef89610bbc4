//! Recursive descent parser for declaration files.
//!
//! Recovery works at two levels. An error inside an interface body skips to
//! the end of the offending member (`;` or the close of its accessor block)
//! and parsing continues with the next member. Any other error skips to the
//! next declaration keyword, or past the body of the broken declaration.
//! Either way one bad line costs one diagnostic.

use mock_ir::ContractKind;
use tracing::debug;

use crate::ast::{DeclFile, MemberDecl, ParamDecl, Path, TypeDecl, TypeExpr};
use crate::lexer::{lex, Token, TokenKind};
use crate::{DeclError, Span};

/// Parse result: a (possibly partial) file plus every error encountered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub file: DeclFile,
    pub errors: Vec<DeclError>,
}

/// Lex and parse `source`.
///
/// Unrecognized characters are reported up front and dropped from the token
/// stream, so they never derail the parser.
pub fn parse(source: &str) -> ParseOutput {
    let mut errors = Vec::new();
    let mut tokens = Vec::new();
    for token in lex(source) {
        if token.kind == TokenKind::Error {
            errors.push(DeclError::UnexpectedCharacter {
                text: source[token.span.to_range()].to_string(),
                span: token.span,
            });
        } else {
            tokens.push(token);
        }
    }

    let mut parser = Parser::new(source, &tokens, errors);
    parser.items("", false);

    debug!(
        decls = parser.decls.len(),
        errors = parser.errors.len(),
        "parsed declarations"
    );
    ParseOutput {
        file: DeclFile {
            decls: parser.decls,
        },
        errors: parser.errors,
    }
}

type ParseResult<T> = Result<T, DeclError>;

struct Parser<'src> {
    source: &'src str,
    /// Never empty: the lexer always ends the stream with `Eof`.
    tokens: &'src [Token],
    pos: usize,
    decls: Vec<TypeDecl>,
    errors: Vec<DeclError>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: &'src [Token], errors: Vec<DeclError>) -> Self {
        Parser {
            source,
            tokens,
            pos: 0,
            decls: Vec::new(),
            errors,
        }
    }

    // ===== Token access =====

    fn current(&self) -> Token {
        self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn kind(&self) -> TokenKind {
        self.current().kind
    }

    fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens[(self.pos + offset).min(self.tokens.len() - 1)].kind
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> ParseResult<Token> {
        if self.at(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &'static str) -> DeclError {
        let token = self.current();
        if token.kind == TokenKind::Eof {
            DeclError::UnexpectedEof {
                expected,
                span: token.span,
            }
        } else {
            DeclError::UnexpectedToken {
                expected,
                found: token.kind,
                span: token.span,
            }
        }
    }

    fn text(&self, span: Span) -> &'src str {
        &self.source[span.to_range()]
    }

    fn ident(&mut self, expected: &'static str) -> ParseResult<(String, Span)> {
        let token = self.expect(TokenKind::Ident, expected)?;
        Ok((self.text(token.span).to_string(), token.span))
    }

    fn skip_modifiers(&mut self) {
        while matches!(self.kind(), TokenKind::Public | TokenKind::Internal) {
            self.advance();
        }
    }

    // ===== Declarations =====

    /// Parse declarations until end of file, or until the `}` closing a
    /// namespace block when `nested`.
    fn items(&mut self, namespace: &str, nested: bool) {
        loop {
            match self.kind() {
                TokenKind::Eof => {
                    if nested {
                        let error = self.unexpected("`}`");
                        self.errors.push(error);
                    }
                    return;
                }
                TokenKind::RBrace if nested => {
                    self.advance();
                    return;
                }
                _ => {}
            }

            let start = self.pos;
            if let Err(error) = self.item(namespace) {
                self.errors.push(error);
                self.recover_to_next_item(start);
            }
        }
    }

    fn item(&mut self, namespace: &str) -> ParseResult<()> {
        self.skip_modifiers();
        match self.kind() {
            TokenKind::Namespace => {
                self.advance();
                let path = self.path("namespace name")?;
                self.expect(TokenKind::LBrace, "`{`")?;
                let inner = if namespace.is_empty() {
                    path.text
                } else {
                    format!("{namespace}.{}", path.text)
                };
                self.items(&inner, true);
                Ok(())
            }
            TokenKind::Interface => self.interface(namespace),
            TokenKind::Class => self.opaque(namespace, ContractKind::Class),
            TokenKind::Struct => self.opaque(namespace, ContractKind::Struct),
            TokenKind::Enum => self.opaque(namespace, ContractKind::Enum),
            TokenKind::Delegate => self.delegate(namespace),
            _ => Err(self.unexpected("a type declaration")),
        }
    }

    fn interface(&mut self, namespace: &str) -> ParseResult<()> {
        self.advance();
        let (name, name_span) = self.ident("interface name")?;
        let bases = self.bases()?;
        self.expect(TokenKind::LBrace, "`{`")?;

        let mut members = Vec::new();
        loop {
            match self.kind() {
                TokenKind::RBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    let error = self.unexpected("`}`");
                    self.errors.push(error);
                    break;
                }
                _ => {}
            }

            let start = self.pos;
            match self.member() {
                Ok(member) => members.push(member),
                Err(error) => {
                    self.errors.push(error);
                    self.recover_to_next_member(start);
                }
            }
        }

        self.decls.push(TypeDecl {
            namespace: namespace.to_string(),
            name,
            name_span,
            kind: ContractKind::Interface,
            bases,
            members,
        });
        Ok(())
    }

    /// A class, struct, or enum. Only the name matters; the body is skipped.
    fn opaque(&mut self, namespace: &str, kind: ContractKind) -> ParseResult<()> {
        self.advance();
        let (name, name_span) = self.ident("type name")?;
        let bases = self.bases()?;
        self.expect(TokenKind::LBrace, "`{`")?;
        self.skip_body();

        self.decls.push(TypeDecl {
            namespace: namespace.to_string(),
            name,
            name_span,
            kind,
            bases,
            members: Vec::new(),
        });
        Ok(())
    }

    /// `delegate Name;` or `delegate Ret Name(params);`.
    fn delegate(&mut self, namespace: &str) -> ParseResult<()> {
        self.advance();
        let (name, name_span) =
            if self.at(TokenKind::Ident) && self.peek_kind(1) == TokenKind::Semicolon {
                self.ident("delegate name")?
            } else {
                self.type_expr()?;
                let named = self.ident("delegate name")?;
                self.params()?;
                named
            };
        self.expect(TokenKind::Semicolon, "`;`")?;

        self.decls.push(TypeDecl {
            namespace: namespace.to_string(),
            name,
            name_span,
            kind: ContractKind::Delegate,
            bases: Vec::new(),
            members: Vec::new(),
        });
        Ok(())
    }

    fn bases(&mut self) -> ParseResult<Vec<Path>> {
        let mut bases = Vec::new();
        if self.eat(TokenKind::Colon) {
            loop {
                bases.push(self.path("base type name")?);
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        Ok(bases)
    }

    /// Skip to the `}` matching an already consumed `{`.
    fn skip_body(&mut self) {
        let mut depth = 1usize;
        while depth > 0 {
            match self.kind() {
                TokenKind::Eof => {
                    let error = self.unexpected("`}`");
                    self.errors.push(error);
                    return;
                }
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    // ===== Members =====

    fn member(&mut self) -> ParseResult<MemberDecl> {
        self.skip_modifiers();
        if self.eat(TokenKind::Event) {
            let ty = self.type_expr()?;
            let (name, _) = self.ident("event name")?;
            self.expect(TokenKind::Semicolon, "`;`")?;
            return Ok(MemberDecl::Event { name, ty });
        }

        let ty = self.type_expr()?;
        let (name, name_span) = self.ident("member name")?;
        match self.kind() {
            TokenKind::LParen => {
                let params = self.params()?;
                self.expect(TokenKind::Semicolon, "`;`")?;
                Ok(MemberDecl::Method {
                    name,
                    return_type: ty,
                    params,
                })
            }
            TokenKind::LBrace => {
                self.advance();
                let (get, set) = self.accessors()?;
                if !get && !set {
                    self.errors.push(DeclError::NoAccessors {
                        property: name.clone(),
                        span: name_span,
                    });
                }
                Ok(MemberDecl::Property { name, ty, get, set })
            }
            _ => Err(self.unexpected("`(` or `{`")),
        }
    }

    /// `get; set; }` after a property's `{`.
    ///
    /// A repeated accessor is reported and otherwise ignored.
    fn accessors(&mut self) -> ParseResult<(bool, bool)> {
        let mut get: Option<Span> = None;
        let mut set: Option<Span> = None;
        loop {
            match self.kind() {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok((get.is_some(), set.is_some()));
                }
                TokenKind::Ident => {
                    let span = self.current().span;
                    let (accessor, slot) = match self.text(span) {
                        "get" => ("get", &mut get),
                        "set" => ("set", &mut set),
                        _ => return Err(self.unexpected("`get` or `set`")),
                    };
                    match *slot {
                        Some(first) => self.errors.push(DeclError::DuplicateAccessor {
                            accessor,
                            span,
                            first,
                        }),
                        None => *slot = Some(span),
                    }
                    self.advance();
                    self.expect(TokenKind::Semicolon, "`;`")?;
                }
                _ => return Err(self.unexpected("`get`, `set`, or `}`")),
            }
        }
    }

    fn params(&mut self) -> ParseResult<Vec<ParamDecl>> {
        self.expect(TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        if self.eat(TokenKind::RParen) {
            return Ok(params);
        }
        loop {
            let ty = self.type_expr()?;
            let (name, _) = self.ident("parameter name")?;
            params.push(ParamDecl { name, ty });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "`)` or `,`")?;
        Ok(params)
    }

    // ===== Types =====

    fn path(&mut self, expected: &'static str) -> ParseResult<Path> {
        let (mut text, mut span) = self.ident(expected)?;
        while self.eat(TokenKind::Dot) {
            let (segment, segment_span) = self.ident("identifier after `.`")?;
            text.push('.');
            text.push_str(&segment);
            span = span.merge(segment_span);
        }
        Ok(Path { text, span })
    }

    fn type_expr(&mut self) -> ParseResult<TypeExpr> {
        let path = self.path("a type")?;
        let mut ty = if self.eat(TokenKind::Lt) {
            let mut args = vec![self.type_expr()?];
            while self.eat(TokenKind::Comma) {
                args.push(self.type_expr()?);
            }
            self.expect(TokenKind::Gt, "`>` or `,`")?;
            TypeExpr::Generic { path, args }
        } else {
            TypeExpr::Named(path)
        };

        loop {
            if self.eat(TokenKind::LBracket) {
                self.expect(TokenKind::RBracket, "`]`")?;
                ty = TypeExpr::Array(Box::new(ty));
            } else if self.eat(TokenKind::Question) {
                ty = TypeExpr::Nullable(Box::new(ty));
            } else {
                return Ok(ty);
            }
        }
    }

    // ===== Recovery =====

    /// Rewind to `start`, then skip to the next declaration keyword at the
    /// same nesting level, or just past the body the broken declaration
    /// opened. Stops before a `}` that closes an enclosing namespace.
    fn recover_to_next_item(&mut self, start: usize) {
        self.pos = start;
        self.advance();
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                kind if depth == 0 && kind.starts_declaration() => return,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Rewind to `start`, then skip past the member's `;` or accessor block.
    /// Stops before the `}` closing the interface.
    fn recover_to_next_member(&mut self, start: usize) {
        self.pos = start;
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::Eof => return,
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                _ => {}
            }
            self.advance();
        }
    }
}
