
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::construct::{Atom, Parameter, Term};
use crate::error::{DatalectError, Result};

lazy_static! {
    // non-greedy and anchored to a single line, replaced once per call,
    // so only the first comment of an insertion is stripped
    static ref COMMENT: Regex = Regex::new(r"/\*.*?\*/").unwrap();
}

// ------------- Token -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LowerIdent,
    UpperIdent,
    Plus,
    Minus,
    Stop,
    Separator,
    Negation,
    Turnstile,
    OpenParen,
    CloseParen,
}

/// A classified lexical unit: its kind, the accumulated literal text, and
/// whether the token can take no further characters.
#[derive(Debug, Clone)]
pub struct Token {
    kind: TokenKind,
    text: String,
    finished: bool,
}

impl Token {
    // classifies the starting character, None if nothing matches
    fn start(chr: char) -> Option<Self> {
        let (kind, finished) = match chr {
            'a'..='z' => (TokenKind::LowerIdent, false),
            'A'..='Z' => (TokenKind::UpperIdent, false),
            '+' => (TokenKind::Plus, true),
            '-' => (TokenKind::Minus, true),
            '.' => (TokenKind::Stop, true),
            ',' | '&' => (TokenKind::Separator, true),
            '~' => (TokenKind::Negation, true),
            ':' => (TokenKind::Turnstile, false),
            '(' => (TokenKind::OpenParen, true),
            ')' => (TokenKind::CloseParen, true),
            _ => return None,
        };
        Some(Self {
            kind,
            text: chr.to_string(),
            finished,
        })
    }
    // the continuation rule: identifiers grow by letters, digits and
    // underscores, an open turnstile takes exactly one '-'
    fn accepts(&self, chr: char) -> bool {
        if self.finished {
            return false;
        }
        match self.kind {
            TokenKind::LowerIdent | TokenKind::UpperIdent => {
                chr.is_ascii_alphanumeric() || chr == '_'
            }
            TokenKind::Turnstile => chr == '-',
            _ => false,
        }
    }
    fn add(&mut self, chr: char) {
        self.text.push(chr);
        if self.kind == TokenKind::Turnstile {
            self.finished = true;
        }
    }
    fn ends_sentence(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Stop | TokenKind::Plus | TokenKind::Minus
        )
    }
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ------------- Tokenizer -------------

/// Scans `text` into sentence-groups of tokens. A group is flushed whenever
/// a sentence-terminating token closes (`.`, a lone `+` or a lone `-`).
///
/// Characters at or below the space character never reach the token buffer;
/// they do not even close an open token. Tokens left without a terminator at
/// the end of the input are emitted as a final group, which the parser then
/// rejects.
pub fn tokenize(text: &str) -> Result<Vec<Vec<Token>>> {
    let stripped = COMMENT.replacen(text, 1, "");
    let mut groups: Vec<Vec<Token>> = Vec::new();
    let mut group: Vec<Token> = Vec::new();
    let mut current: Option<Token> = None;
    for chr in stripped.chars() {
        if chr as u32 <= 32 {
            continue;
        }
        if let Some(mut token) = current.take() {
            if token.accepts(chr) {
                token.add(chr);
                current = Some(token);
                continue;
            }
            group.push(token);
        }
        let token = Token::start(chr).ok_or(DatalectError::Lexical {
            token: chr,
            char_code: chr as u32,
        })?;
        if token.ends_sentence() {
            group.push(token);
            groups.push(std::mem::take(&mut group));
        } else {
            current = Some(token);
        }
    }
    if let Some(token) = current.take() {
        group.push(token);
    }
    if !group.is_empty() {
        groups.push(group);
    }
    debug!("tokenized {} sentence group(s)", groups.len());
    Ok(groups)
}

// ------------- TermParser -------------

/// Recursive-descent parser over one sentence-group. The cursor is explicit:
/// `advance` yields the next token or fails, `eat` consumes a token of an
/// expected kind if present.
pub struct TermParser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TermParser<'a> {
    pub fn parse(tokens: &'a [Token]) -> Result<Term> {
        let mut parser = Self { tokens, pos: 0 };
        parser.term()
    }

    fn term(&mut self) -> Result<Term> {
        if self.tokens.len() == 1 {
            return match self.tokens[0].kind() {
                TokenKind::Plus => Ok(Term::EnterWriteMode),
                TokenKind::Minus => Ok(Term::EnterQuestionMode),
                // a bare predicate declaration, without a parameter list
                TokenKind::LowerIdent => Ok(Term::Atom(Atom::new(
                    self.tokens[0].text().to_owned(),
                    Vec::new(),
                    false,
                ))),
                _ => Err(self.fail()),
            };
        }
        let atom = self.atom()?;
        match self.advance()?.kind() {
            TokenKind::Stop => Ok(Term::Atom(atom)),
            TokenKind::Separator => {
                let mut atoms = vec![atom];
                loop {
                    atoms.push(self.atom()?);
                    match self.advance()?.kind() {
                        TokenKind::Separator => continue,
                        TokenKind::Stop => break,
                        _ => return Err(self.fail()),
                    }
                }
                Ok(Term::Formula(atoms))
            }
            TokenKind::Turnstile => {
                let mut body = Vec::new();
                loop {
                    body.push(self.atom()?);
                    match self.advance()?.kind() {
                        TokenKind::Separator => continue,
                        TokenKind::Stop => break,
                        _ => return Err(self.fail()),
                    }
                }
                Ok(Term::Rule { head: atom, body })
            }
            _ => Err(self.fail()),
        }
    }

    // reads one atom: an optional negation marker, the predicate name, and
    // a parenthesized parameter list with at least one parameter
    fn atom(&mut self) -> Result<Atom> {
        let negated = self.eat(TokenKind::Negation);
        let token = self.advance()?;
        if token.kind() != TokenKind::LowerIdent {
            return Err(self.fail());
        }
        let predicate = token.text().to_owned();
        if self.advance()?.kind() != TokenKind::OpenParen {
            return Err(self.fail());
        }
        let mut parameters = Vec::new();
        loop {
            let token = self.advance()?;
            match token.kind() {
                TokenKind::LowerIdent => {
                    parameters.push(Parameter::Constant(token.text().to_owned()));
                }
                TokenKind::UpperIdent => {
                    parameters.push(Parameter::Variable(token.text().to_owned()));
                }
                _ => return Err(self.fail()),
            }
            if !self.eat(TokenKind::Separator) {
                break;
            }
        }
        if self.advance()?.kind() != TokenKind::CloseParen {
            return Err(self.fail());
        }
        Ok(Atom::new(predicate, parameters, negated))
    }

    fn advance(&mut self) -> Result<&'a Token> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token)
            }
            None => Err(self.fail()),
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind() == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    // a parse error carries the reconstructed text of the whole group
    fn fail(&self) -> DatalectError {
        DatalectError::Parse {
            term: self.tokens.iter().map(Token::text).collect(),
        }
    }
}
