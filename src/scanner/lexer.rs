//! Minimal script tokenizer
//!
//! Produces just enough structure to recognise call expressions such as
//! `app.use('a', 'b')` and `require([...], function(a) { ... })`: identifiers,
//! string literals, regular expression literals, numbers and single-character
//! punctuation. Comments and whitespace are skipped.
//!
//! A `/` starts a regular expression wherever an expression may begin: at the
//! start of input, after punctuation other than a closing bracket or a postfix
//! `++`/`--`, and after keywords such as `return`. Everywhere else it is
//! division.

use std::iter::Peekable;
use std::str::CharIndices;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Ident(&'a str),
    /// String literal with escapes resolved
    Str(String),
    Number,
    Regex,
    Punct(char),
}

/// Keywords after which a `/` begins a regular expression
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

/// A token and its byte span in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self.kind, TokenKind::Ident(ident) if ident == name)
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Str(value) => Some(value),
            _ => None,
        }
    }
}

pub struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
    regex_allowed: bool,
    last_punct: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            regex_allowed: true,
            last_punct: None,
        }
    }

    /// Tokenize the whole source
    pub fn tokenize(src: &'a str) -> Vec<Token<'a>> {
        Lexer::new(src).collect()
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn second_char(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    /// Skip whitespace and comments. Returns false at end of input.
    fn skip_trivia(&mut self) -> bool {
        loop {
            match self.peek_char() {
                None => return false,
                Some(c) if c.is_whitespace() => {
                    self.chars.next();
                }
                Some('/') => match self.second_char() {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment(),
                    _ => return true,
                },
                Some(_) => return true,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        self.chars.next();
        self.chars.next();
        let mut prev = '\0';
        for (_, c) in self.chars.by_ref() {
            if prev == '*' && c == '/' {
                break;
            }
            prev = c;
        }
    }

    fn read_string(&mut self, quote: char) -> String {
        let mut value = String::new();
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => match self.chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                c if c == quote => break,
                c => value.push(c),
            }
        }
        value
    }

    /// Body and flags of a regular expression literal, after the opening `/`
    fn read_regex(&mut self) {
        let mut in_class = false;
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                '\n' => return,
                _ => {}
            }
        }
        self.read_while(is_ident_continue);
    }

    /// Whether a `/` right after `kind` opens a regular expression
    fn regex_may_follow(&self, kind: &TokenKind<'_>) -> bool {
        match kind {
            TokenKind::Ident(word) => EXPRESSION_KEYWORDS.contains(word),
            TokenKind::Punct(c @ ('+' | '-')) => self.last_punct != Some(*c),
            TokenKind::Punct(c) => !matches!(*c, ')' | ']' | '}'),
            TokenKind::Str(_) | TokenKind::Number | TokenKind::Regex => false,
        }
    }

    fn read_while(&mut self, keep: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&keep) {
            self.chars.next();
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.skip_trivia() {
            return None;
        }

        let (start, c) = self.chars.next()?;
        let kind = match c {
            '\'' | '"' | '`' => TokenKind::Str(self.read_string(c)),
            c if is_ident_start(c) => {
                self.read_while(is_ident_continue);
                let end = self.offset();
                let src = self.src;
                TokenKind::Ident(&src[start..end])
            }
            '/' if self.regex_allowed => {
                self.read_regex();
                TokenKind::Regex
            }
            c if c.is_ascii_digit() => {
                self.read_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
                TokenKind::Number
            }
            c => TokenKind::Punct(c),
        };
        let end = self.offset();

        self.regex_allowed = self.regex_may_follow(&kind);
        self.last_punct = match kind {
            TokenKind::Punct(c) => Some(c),
            _ => None,
        };

        Some(Token { kind, start, end })
    }
}
