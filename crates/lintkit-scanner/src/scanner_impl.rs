//! Scanner state machine.
//!
//! The scanner is pull-based: the parser calls [`ScannerState::scan`] for the
//! next token and reads its position and value. Template continuations are
//! context sensitive, so when the parser reaches the `}` that closes a
//! substitution it asks for [`ScannerState::re_scan_template_token`].
//!
//! Positions are byte offsets into the source text. Token values are
//! *cooked*: escape sequences in strings and templates are already decoded,
//! numeric separators are removed.

use crate::SyntaxKind;
use serde::Serialize;

/// Flags describing the current token.
pub mod token_flags {
    pub const NONE: u32 = 0;
    /// A line terminator appears between the previous token and this one.
    pub const PRECEDING_LINE_BREAK: u32 = 1 << 0;
    /// String or template literal reached end of input (or line end).
    pub const UNTERMINATED: u32 = 1 << 1;
    /// Numeric literal written in hexadecimal, octal or binary.
    pub const NON_DECIMAL_NUMBER: u32 = 1 << 2;
}

/// A lexical error found while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScannerDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

/// Saved scanner position, used by the parser for speculative look-ahead.
#[derive(Clone, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    token_value: String,
    token_flags: u32,
    diagnostics_len: usize,
}

pub struct ScannerState {
    text: String,
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    token_value: String,
    token_flags: u32,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    pub fn new(text: String) -> ScannerState {
        ScannerState {
            text,
            pos: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            token_value: String::new(),
            token_flags: token_flags::NONE,
            diagnostics: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn source_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn get_token(&self) -> SyntaxKind {
        self.token
    }

    /// Start of the current token (trivia excluded).
    #[inline]
    pub fn get_token_start(&self) -> u32 {
        self.token_start as u32
    }

    /// End of the current token.
    #[inline]
    pub fn get_token_end(&self) -> u32 {
        self.pos as u32
    }

    /// Cooked value of the current token (identifier text, string contents,
    /// template segment, numeric digits).
    #[inline]
    pub fn get_token_value_ref(&self) -> &str {
        &self.token_value
    }

    #[inline]
    pub fn get_token_flags(&self) -> u32 {
        self.token_flags
    }

    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags & token_flags::PRECEDING_LINE_BREAK != 0
    }

    #[inline]
    pub fn is_unterminated(&self) -> bool {
        self.token_flags & token_flags::UNTERMINATED != 0
    }

    pub fn get_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ScannerDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token: self.token,
            token_start: self.token_start,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            diagnostics_len: self.diagnostics.len(),
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token = snapshot.token;
        self.token_start = snapshot.token_start;
        self.token_value = snapshot.token_value;
        self.token_flags = snapshot.token_flags;
        self.diagnostics.truncate(snapshot.diagnostics_len);
    }

    // =========================================================================
    // Character helpers
    // =========================================================================

    #[inline]
    fn peek_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    #[inline]
    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(offset)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.text.as_bytes().get(pos).copied()
    }

    fn error(&mut self, start: usize, end: usize, message: &str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            start: start as u32,
            length: end.saturating_sub(start) as u32,
            message: message.to_string(),
            code,
        });
    }

    fn is_line_terminator(ch: char) -> bool {
        matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
    }

    fn is_white_space_single_line(ch: char) -> bool {
        matches!(
            ch,
            ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}' | '\u{1680}'
        ) || ('\u{2000}'..='\u{200A}').contains(&ch)
            || matches!(ch, '\u{202F}' | '\u{205F}' | '\u{3000}')
    }

    fn is_identifier_start(ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_' || ch == '$' || (!ch.is_ascii() && ch.is_alphabetic())
    }

    fn is_identifier_part(ch: char) -> bool {
        Self::is_identifier_start(ch)
            || ch.is_ascii_digit()
            || (!ch.is_ascii() && ch.is_alphanumeric())
            || ch == '\u{200C}'
            || ch == '\u{200D}'
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Scan the next token, skipping whitespace and comments.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = token_flags::NONE;
        self.token_value.clear();

        loop {
            self.token_start = self.pos;
            let Some(ch) = self.peek_char() else {
                self.token = SyntaxKind::EndOfFileToken;
                return self.token;
            };

            if Self::is_line_terminator(ch) {
                self.token_flags |= token_flags::PRECEDING_LINE_BREAK;
                self.pos += ch.len_utf8();
                continue;
            }
            if Self::is_white_space_single_line(ch) {
                self.pos += ch.len_utf8();
                continue;
            }

            self.token = match ch {
                '/' => match self.byte_at(self.pos + 1) {
                    Some(b'/') => {
                        self.skip_single_line_comment();
                        continue;
                    }
                    Some(b'*') => {
                        self.skip_multi_line_comment();
                        continue;
                    }
                    Some(b'=') => self.punctuator(2, SyntaxKind::SlashEqualsToken),
                    _ => self.punctuator(1, SyntaxKind::SlashToken),
                },
                '"' | '\'' => self.scan_string(ch),
                '`' => {
                    self.pos += 1;
                    self.scan_template(true)
                }
                '0'..='9' => self.scan_number(),
                '.' => {
                    if matches!(self.byte_at(self.pos + 1), Some(b'0'..=b'9')) {
                        self.scan_number()
                    } else if self.byte_at(self.pos + 1) == Some(b'.')
                        && self.byte_at(self.pos + 2) == Some(b'.')
                    {
                        self.punctuator(3, SyntaxKind::DotDotDotToken)
                    } else {
                        self.punctuator(1, SyntaxKind::DotToken)
                    }
                }
                '{' => self.punctuator(1, SyntaxKind::OpenBraceToken),
                '}' => self.punctuator(1, SyntaxKind::CloseBraceToken),
                '(' => self.punctuator(1, SyntaxKind::OpenParenToken),
                ')' => self.punctuator(1, SyntaxKind::CloseParenToken),
                '[' => self.punctuator(1, SyntaxKind::OpenBracketToken),
                ']' => self.punctuator(1, SyntaxKind::CloseBracketToken),
                ';' => self.punctuator(1, SyntaxKind::SemicolonToken),
                ',' => self.punctuator(1, SyntaxKind::CommaToken),
                ':' => self.punctuator(1, SyntaxKind::ColonToken),
                '~' => self.punctuator(1, SyntaxKind::TildeToken),
                '?' => self.scan_question(),
                '<' => self.longest_punctuator(&[
                    ("<<=", SyntaxKind::LessThanLessThanEqualsToken),
                    ("<<", SyntaxKind::LessThanLessThanToken),
                    ("<=", SyntaxKind::LessThanEqualsToken),
                    ("<", SyntaxKind::LessThanToken),
                ]),
                '>' => self.longest_punctuator(&[
                    (">>>=", SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken),
                    (">>>", SyntaxKind::GreaterThanGreaterThanGreaterThanToken),
                    (">>=", SyntaxKind::GreaterThanGreaterThanEqualsToken),
                    (">>", SyntaxKind::GreaterThanGreaterThanToken),
                    (">=", SyntaxKind::GreaterThanEqualsToken),
                    (">", SyntaxKind::GreaterThanToken),
                ]),
                '=' => self.longest_punctuator(&[
                    ("===", SyntaxKind::EqualsEqualsEqualsToken),
                    ("==", SyntaxKind::EqualsEqualsToken),
                    ("=>", SyntaxKind::EqualsGreaterThanToken),
                    ("=", SyntaxKind::EqualsToken),
                ]),
                '!' => self.longest_punctuator(&[
                    ("!==", SyntaxKind::ExclamationEqualsEqualsToken),
                    ("!=", SyntaxKind::ExclamationEqualsToken),
                    ("!", SyntaxKind::ExclamationToken),
                ]),
                '+' => self.longest_punctuator(&[
                    ("++", SyntaxKind::PlusPlusToken),
                    ("+=", SyntaxKind::PlusEqualsToken),
                    ("+", SyntaxKind::PlusToken),
                ]),
                '-' => self.longest_punctuator(&[
                    ("--", SyntaxKind::MinusMinusToken),
                    ("-=", SyntaxKind::MinusEqualsToken),
                    ("-", SyntaxKind::MinusToken),
                ]),
                '*' => self.longest_punctuator(&[
                    ("**=", SyntaxKind::AsteriskAsteriskEqualsToken),
                    ("**", SyntaxKind::AsteriskAsteriskToken),
                    ("*=", SyntaxKind::AsteriskEqualsToken),
                    ("*", SyntaxKind::AsteriskToken),
                ]),
                '%' => self.longest_punctuator(&[
                    ("%=", SyntaxKind::PercentEqualsToken),
                    ("%", SyntaxKind::PercentToken),
                ]),
                '&' => self.longest_punctuator(&[
                    ("&&=", SyntaxKind::AmpersandAmpersandEqualsToken),
                    ("&&", SyntaxKind::AmpersandAmpersandToken),
                    ("&=", SyntaxKind::AmpersandEqualsToken),
                    ("&", SyntaxKind::AmpersandToken),
                ]),
                '|' => self.longest_punctuator(&[
                    ("||=", SyntaxKind::BarBarEqualsToken),
                    ("||", SyntaxKind::BarBarToken),
                    ("|=", SyntaxKind::BarEqualsToken),
                    ("|", SyntaxKind::BarToken),
                ]),
                '^' => self.longest_punctuator(&[
                    ("^=", SyntaxKind::CaretEqualsToken),
                    ("^", SyntaxKind::CaretToken),
                ]),
                _ if Self::is_identifier_start(ch) => self.scan_identifier(),
                _ => {
                    self.pos += ch.len_utf8();
                    self.error(self.token_start, self.pos, "Invalid character.", 1127);
                    SyntaxKind::Unknown
                }
            };
            return self.token;
        }
    }

    /// Re-scan the current `}` token as the continuation of a template
    /// literal (`TemplateMiddle` or `TemplateTail`).
    pub fn re_scan_template_token(&mut self) -> SyntaxKind {
        debug_assert_eq!(self.token, SyntaxKind::CloseBraceToken);
        self.pos = self.token_start + 1;
        self.token_value.clear();
        self.token_flags &= !token_flags::UNTERMINATED;
        self.token = self.scan_template(false);
        self.token
    }

    #[inline]
    fn punctuator(&mut self, len: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += len;
        kind
    }

    fn longest_punctuator(&mut self, candidates: &[(&str, SyntaxKind)]) -> SyntaxKind {
        let rest = &self.text[self.pos..];
        for &(text, kind) in candidates {
            if rest.starts_with(text) {
                self.pos += text.len();
                return kind;
            }
        }
        // The last candidate is always the single-character operator.
        self.pos += 1;
        candidates
            .last()
            .map(|&(_, kind)| kind)
            .unwrap_or(SyntaxKind::Unknown)
    }

    fn scan_question(&mut self) -> SyntaxKind {
        let rest = &self.text[self.pos..];
        if rest.starts_with("??=") {
            return self.punctuator(3, SyntaxKind::QuestionQuestionEqualsToken);
        }
        if rest.starts_with("??") {
            return self.punctuator(2, SyntaxKind::QuestionQuestionToken);
        }
        // `a?.5:b` is a conditional, not an optional chain.
        if rest.starts_with("?.") && !matches!(self.byte_at(self.pos + 2), Some(b'0'..=b'9')) {
            return self.punctuator(2, SyntaxKind::QuestionDotToken);
        }
        self.punctuator(1, SyntaxKind::QuestionToken)
    }

    fn skip_single_line_comment(&mut self) {
        self.pos += 2;
        while let Some(ch) = self.peek_char() {
            if Self::is_line_terminator(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_multi_line_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        match self.text[self.pos..].find("*/") {
            Some(offset) => {
                let body = &self.text[self.pos..self.pos + offset];
                if body.chars().any(Self::is_line_terminator) {
                    self.token_flags |= token_flags::PRECEDING_LINE_BREAK;
                }
                self.pos += offset + 2;
            }
            None => {
                self.pos = self.text.len();
                self.error(start, self.pos, "'*/' expected.", 1010);
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while let Some(ch) = self.peek_char() {
            if !Self::is_identifier_part(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        let text = &self.text[start..self.pos];
        self.token_value.push_str(text);
        SyntaxKind::keyword_from_text(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;
        let radix_prefix = if self.byte_at(self.pos) == Some(b'0') {
            match self.byte_at(self.pos + 1) {
                Some(b'x' | b'X') => Some(16),
                Some(b'o' | b'O') => Some(8),
                Some(b'b' | b'B') => Some(2),
                _ => None,
            }
        } else {
            None
        };

        if let Some(radix) = radix_prefix {
            self.token_flags |= token_flags::NON_DECIMAL_NUMBER;
            self.pos += 2;
            let digits_start = self.pos;
            self.scan_digits(|ch| ch.is_digit(radix));
            if self.pos == digits_start {
                self.error(start, self.pos, "Digit expected.", 1124);
            }
        } else {
            self.scan_digits(|ch| ch.is_ascii_digit());
            if self.byte_at(self.pos) == Some(b'.') {
                self.pos += 1;
                self.token_value.push('.');
                self.scan_digits(|ch| ch.is_ascii_digit());
            }
            if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
                let save_pos = self.pos;
                let save_len = self.token_value.len();
                self.pos += 1;
                self.token_value.push('e');
                if let Some(sign @ (b'+' | b'-')) = self.byte_at(self.pos) {
                    self.pos += 1;
                    self.token_value.push(sign as char);
                }
                let digits_start = self.pos;
                self.scan_digits(|ch| ch.is_ascii_digit());
                if self.pos == digits_start {
                    self.pos = save_pos;
                    self.token_value.truncate(save_len);
                    self.error(start, self.pos, "Digit expected.", 1124);
                }
            }
        }

        if let Some(ch) = self.peek_char() {
            if Self::is_identifier_start(ch) {
                self.error(
                    self.pos,
                    self.pos + ch.len_utf8(),
                    "An identifier or keyword cannot immediately follow a numeric literal.",
                    1351,
                );
            }
        }

        SyntaxKind::NumericLiteral
    }

    /// Consume digits accepted by `accept`, dropping `_` separators.
    fn scan_digits(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if accept(ch) {
                self.token_value.push(ch);
                self.pos += 1;
            } else if ch == '_' && self.peek_char_at(1).is_some_and(&accept) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_string(&mut self, quote: char) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            let Some(ch) = self.peek_char() else {
                self.token_flags |= token_flags::UNTERMINATED;
                self.error(start, self.pos, "Unterminated string literal.", 1002);
                break;
            };
            if ch == quote {
                self.pos += 1;
                break;
            }
            if ch == '\n' || ch == '\r' {
                self.token_flags |= token_flags::UNTERMINATED;
                self.error(start, self.pos, "Unterminated string literal.", 1002);
                break;
            }
            if ch == '\\' {
                self.scan_escape_sequence(false);
                continue;
            }
            self.token_value.push(ch);
            self.pos += ch.len_utf8();
        }
        SyntaxKind::StringLiteral
    }

    /// Scan a template segment. `self.pos` is just past the opening backtick
    /// (`started_with_backtick`) or just past the `}` of a substitution.
    fn scan_template(&mut self, started_with_backtick: bool) -> SyntaxKind {
        loop {
            let Some(ch) = self.peek_char() else {
                self.token_flags |= token_flags::UNTERMINATED;
                self.error(self.token_start, self.pos, "Unterminated template literal.", 1160);
                return if started_with_backtick {
                    SyntaxKind::NoSubstitutionTemplateLiteral
                } else {
                    SyntaxKind::TemplateTail
                };
            };
            match ch {
                '`' => {
                    self.pos += 1;
                    return if started_with_backtick {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                '$' if self.byte_at(self.pos + 1) == Some(b'{') => {
                    self.pos += 2;
                    return if started_with_backtick {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                '\\' => self.scan_escape_sequence(true),
                '\r' => {
                    // Cooked template text normalizes CRLF and CR to LF.
                    self.pos += 1;
                    if self.byte_at(self.pos) == Some(b'\n') {
                        self.pos += 1;
                    }
                    self.token_value.push('\n');
                }
                _ => {
                    self.token_value.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    /// Decode one escape sequence starting at the backslash and append it to
    /// the token value.
    fn scan_escape_sequence(&mut self, in_template: bool) {
        let start = self.pos;
        self.pos += 1;
        let Some(ch) = self.peek_char() else {
            self.error(start, self.pos, "Unexpected end of text.", 1126);
            return;
        };
        self.pos += ch.len_utf8();
        match ch {
            'n' => self.token_value.push('\n'),
            'r' => self.token_value.push('\r'),
            't' => self.token_value.push('\t'),
            'b' => self.token_value.push('\u{0008}'),
            'f' => self.token_value.push('\u{000C}'),
            'v' => self.token_value.push('\u{000B}'),
            '0' if !matches!(self.byte_at(self.pos), Some(b'0'..=b'9')) => {
                self.token_value.push('\0')
            }
            '0'..='9' => {
                let message = if in_template {
                    "Octal escape sequences are not allowed in template strings."
                } else {
                    "Octal escape sequences are not allowed."
                };
                self.error(start, self.pos, message, 1487);
                self.token_value.push(ch);
            }
            'x' => match self.scan_hex_digits(2, 2) {
                Some(code) => self.push_code_point(code),
                None => self.error(start, self.pos, "Hexadecimal digit expected.", 1125),
            },
            'u' => {
                let code = self.scan_unicode_escape_body(start);
                if let Some(code) = code {
                    self.push_unicode_escape(code);
                }
            }
            '\r' => {
                if self.byte_at(self.pos) == Some(b'\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => self.token_value.push(other),
        }
    }

    /// Body of a `\u` escape: either `HHHH` or `{H...}`.
    fn scan_unicode_escape_body(&mut self, start: usize) -> Option<u32> {
        if self.byte_at(self.pos) == Some(b'{') {
            self.pos += 1;
            let code = self.scan_hex_digits(1, 6);
            if self.byte_at(self.pos) != Some(b'}') {
                self.error(start, self.pos, "Unterminated Unicode escape sequence.", 1199);
                return None;
            }
            self.pos += 1;
            match code {
                Some(code) if code <= 0x10FFFF => Some(code),
                _ => {
                    self.error(
                        start,
                        self.pos,
                        "An extended Unicode escape value must be between 0x0 and 0x10FFFF inclusive.",
                        1198,
                    );
                    None
                }
            }
        } else {
            let code = self.scan_hex_digits(4, 4);
            if code.is_none() {
                self.error(start, self.pos, "Hexadecimal digit expected.", 1125);
            }
            code
        }
    }

    fn scan_hex_digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let mut value: u32 = 0;
        let mut count = 0;
        while count < max {
            let Some(digit) = self.peek_char().and_then(|ch| ch.to_digit(16)) else {
                break;
            };
            value = value * 16 + digit;
            self.pos += 1;
            count += 1;
        }
        if count >= min { Some(value) } else { None }
    }

    /// Append a `\u` code unit, pairing UTF-16 surrogates written as two
    /// consecutive escapes. Lone surrogates become U+FFFD.
    fn push_unicode_escape(&mut self, code: u32) {
        if (0xD800..=0xDBFF).contains(&code) && self.text[self.pos..].starts_with("\\u") {
            let save = self.pos;
            self.pos += 2;
            if let Some(low) = self.scan_hex_digits(4, 4) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    self.push_code_point(combined);
                    return;
                }
            }
            self.pos = save;
        }
        self.push_code_point(code);
    }

    fn push_code_point(&mut self, code: u32) {
        self.token_value
            .push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
}
