//! Single-pass tokenizer for C and C++ source.
//!
//! At every position the lexer tries, in order: line comment, block comment,
//! word (keyword, type, known identifier), numeric literal, preprocessor
//! directive, string literal, character literal. Whatever is left is plain
//! text. A token is produced exactly once and never revisited, so text inside
//! a comment or string can never be categorized a second time.

use crate::language::Language;
use crate::token::{Token, TokenCategory};

/// Split `source` into categorized tokens.
///
/// Token texts concatenate to `source` exactly. Adjacent plain text is merged
/// into a single token.
#[must_use]
pub fn tokenize(source: &str, language: Language) -> Vec<Token<'_>> {
    Lexer::new(source, language).run()
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    language: Language,
    tokens: Vec<Token<'a>>,
    /// Only whitespace seen since the last newline.
    at_line_start: bool,
    /// Previous token was `#include`/`#import`; a `<header>` may follow.
    expect_header: bool,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str, language: Language) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            language,
            tokens: Vec::new(),
            at_line_start: true,
            expect_header: false,
        }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        while self.pos < self.bytes.len() {
            let start = self.pos;
            let category = self.next_category();
            debug_assert!(self.pos > start, "lexer must always make progress");
            self.push(category, start);
        }
        self.tokens
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Scan one token starting at `self.pos` and return its category.
    fn next_category(&mut self) -> TokenCategory {
        let current = self.bytes[self.pos];
        let next = self.peek(1);

        match current {
            b'/' if next == Some(b'/') => self.line_comment(),
            b'/' if next == Some(b'*') => self.block_comment(),
            b if is_ident_start(b) => self.word(),
            b if b.is_ascii_digit() => self.number(),
            b'.' if next.is_some_and(|n| n.is_ascii_digit()) => self.number(),
            b'#' if self.at_line_start => self.directive(),
            b'"' => self.quoted(b'"', TokenCategory::String),
            b'\'' => self.quoted(b'\'', TokenCategory::Char),
            b'<' if self.expect_header => self.header_name(),
            _ => self.plain_char(),
        }
    }

    fn push(&mut self, category: TokenCategory, start: usize) {
        let src = self.src;
        let text = &src[start..self.pos];

        if category == TokenCategory::Plain && text.chars().all(char::is_whitespace) {
            if text.contains('\n') {
                self.at_line_start = true;
                self.expect_header = false;
            }
        } else {
            self.at_line_start = false;
            if category != TokenCategory::Preprocessor {
                self.expect_header = false;
            }
        }

        if category == TokenCategory::Plain
            && let Some(last) = self.tokens.last_mut()
            && last.category == TokenCategory::Plain
        {
            let merged_start = start - last.text.len();
            last.text = &src[merged_start..self.pos];
            return;
        }

        self.tokens.push(Token::new(category, text));
    }

    fn line_comment(&mut self) -> TokenCategory {
        self.pos = self.src[self.pos..]
            .find('\n')
            .map_or(self.bytes.len(), |i| self.pos + i);
        TokenCategory::Comment
    }

    fn block_comment(&mut self) -> TokenCategory {
        let body = self.pos + 2;
        self.pos = self.src[body..]
            .find("*/")
            .map_or(self.bytes.len(), |i| body + i + 2);
        TokenCategory::Comment
    }

    fn word(&mut self) -> TokenCategory {
        let start = self.pos;
        self.eat_while(is_ident_continue);
        self.language.classify_word(&self.src[start..self.pos])
    }

    fn number(&mut self) -> TokenCategory {
        let radix_prefix = self.bytes[self.pos] == b'0'
            && matches!(self.peek(1), Some(b'x' | b'X' | b'b' | b'B'));

        if radix_prefix && self.peek(2).is_some_and(|b| b.is_ascii_hexdigit()) {
            let is_binary = matches!(self.peek(1), Some(b'b' | b'B'));
            self.pos += 2;
            if is_binary {
                self.eat_digits(|b| b == b'0' || b == b'1');
            } else {
                self.eat_digits(|b| b.is_ascii_hexdigit());
            }
        } else {
            self.eat_digits(|b| b.is_ascii_digit());
            if self.peek(0) == Some(b'.') && self.fraction_follows() {
                self.pos += 1;
                self.eat_digits(|b| b.is_ascii_digit());
            }
            self.exponent();
        }

        // Suffixes (`u`, `UL`, `f`) and anything glued to the literal
        self.eat_while(is_ident_continue);
        TokenCategory::Number
    }

    /// Whether the `.` at the current position belongs to a float literal.
    fn fraction_follows(&self) -> bool {
        match self.peek(1) {
            Some(b) if b.is_ascii_digit() => true,
            Some(b) => !is_ident_continue(b) && b != b'.',
            None => true,
        }
    }

    fn exponent(&mut self) {
        if !matches!(self.peek(0), Some(b'e' | b'E')) {
            return;
        }
        let digits_at = match self.peek(1) {
            Some(b'+' | b'-') => 2,
            _ => 1,
        };
        if self.peek(digits_at).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += digits_at;
            self.eat_digits(|b| b.is_ascii_digit());
        }
    }

    fn directive(&mut self) -> TokenCategory {
        let start = self.pos;
        self.pos += 1;
        self.eat_while(|b| b == b' ' || b == b'\t');
        let word_start = self.pos;
        self.eat_while(is_ident_continue);

        if word_start == self.pos {
            // Lone `#`, e.g. stringification inside a macro body
            self.pos = start + 1;
            return TokenCategory::Plain;
        }

        let directive = &self.src[word_start..self.pos];
        self.expect_header = matches!(directive, "include" | "include_next" | "import");
        TokenCategory::Preprocessor
    }

    fn header_name(&mut self) -> TokenCategory {
        let line_end = self.src[self.pos..]
            .find('\n')
            .map_or(self.bytes.len(), |i| self.pos + i);

        match self.src[self.pos..line_end].find('>') {
            Some(i) => {
                self.pos += i + 1;
                TokenCategory::String
            }
            None => self.plain_char(),
        }
    }

    /// Scan a quoted literal. Unterminated literals stop before the newline.
    fn quoted(&mut self, delimiter: u8, category: TokenCategory) -> TokenCategory {
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            match b {
                b'\\' => self.pos = (self.pos + 2).min(self.bytes.len()),
                b'\n' => break,
                _ => {
                    self.pos += 1;
                    if b == delimiter {
                        break;
                    }
                }
            }
        }
        category
    }

    fn plain_char(&mut self) -> TokenCategory {
        let width = self.src[self.pos..].chars().next().map_or(1, char::len_utf8);
        self.pos += width;
        TokenCategory::Plain
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Eat digits, allowing C++14 `'` separators between two digits.
    fn eat_digits(&mut self, is_digit: impl Fn(u8) -> bool) {
        let start = self.pos;
        while let Some(b) = self.peek(0) {
            if is_digit(b) {
                self.pos += 1;
            } else if b == b'\'' && self.pos > start && self.peek(1).is_some_and(&is_digit) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
