use super::token::*;
use super::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Scanner
///
/// Turns one physical line into tokens. A leading line number becomes a
/// `LineNumber` token and is stripped from the statement text; all other
/// columns are relative to that text. The result always ends with
/// `EndOfLine`.
pub fn scan(s: &str) -> Result<Vec<Token>> {
    let s = s.trim_end_matches(|c| c == '\r' || c == '\n');
    let trimmed = s.trim_start();
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    let mut tokens = vec![];
    let rest = if digits > 0 {
        let lexeme = &trimmed[..digits];
        let number = lexeme.parse::<u32>().unwrap_or(u32::max_value());
        let source: Rc<str> = lexeme.into();
        tokens.push(Token::new(Kind::LineNumber(number), lexeme, 0..0, &source));
        &trimmed[digits..]
    } else {
        trimmed
    };
    let source: Rc<str> = rest.trim().into();
    let mut scanner = Scanner {
        chars: source.chars().collect(),
        pos: 0,
        source: source.clone(),
        tokens,
    };
    scanner.run().map_err(|e| e.in_source(&source))?;
    Ok(scanner.tokens)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    source: Rc<str>,
    tokens: Vec<Token>,
}

impl Scanner {
    fn run(&mut self) -> Result<()> {
        while let Some(ch) = self.peek() {
            if is_basic_whitespace(ch) {
                self.pos += 1;
                continue;
            }
            let start = self.pos;
            if is_basic_digit(ch) || (ch == '.' && self.peek_at(1).map_or(false, is_basic_digit)) {
                self.number();
                continue;
            }
            if ch == '"' {
                self.string()?;
                continue;
            }
            if is_basic_alphabetic(ch) {
                match self.alphabetic() {
                    Some(Word::Rem) => self.remark(),
                    Some(Word::Data) => self.data()?,
                    _ => {}
                }
                continue;
            }
            self.pos += 1;
            let kind = match ch {
                '(' => Kind::LParen,
                ')' => Kind::RParen,
                ',' => Kind::Comma,
                ':' => Kind::Colon,
                ';' => Kind::Semicolon,
                '+' => Kind::Operator(Operator::Plus),
                '-' => Kind::Operator(Operator::Minus),
                '*' => Kind::Operator(Operator::Multiply),
                '/' => Kind::Operator(Operator::Divide),
                '=' | '<' | '>' => Kind::Operator(self.relational(ch)),
                _ => return Err(error!(UnrecognizedCharacter, ..&(start..start + 1))),
            };
            self.push(kind, start);
        }
        let end = self.chars.len();
        self.tokens
            .push(Token::new(Kind::EndOfLine, "", end..end, &self.source));
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn push(&mut self, kind: Kind, start: usize) {
        let lexeme = self.text(start, self.pos);
        self.tokens
            .push(Token::new(kind, &lexeme, start..self.pos, &self.source));
    }

    fn relational(&mut self, first: char) -> Operator {
        let second = self.peek();
        let op = match (first, second) {
            ('<', Some('=')) | ('=', Some('<')) => Some(Operator::LessEqual),
            ('>', Some('=')) | ('=', Some('>')) => Some(Operator::GreaterEqual),
            ('<', Some('>')) | ('>', Some('<')) => Some(Operator::NotEqual),
            _ => None,
        };
        match op {
            Some(op) => {
                self.pos += 1;
                op
            }
            None => match first {
                '<' => Operator::Less,
                '>' => Operator::Greater,
                _ => Operator::Equal,
            },
        }
    }

    fn number(&mut self) {
        let start = self.pos;
        let mut float = false;
        while self.peek().map_or(false, is_basic_digit) {
            self.pos += 1;
        }
        if self.peek() == Some('.') {
            float = true;
            self.pos += 1;
            while self.peek().map_or(false, is_basic_digit) {
                self.pos += 1;
            }
        }
        if let Some('E') | Some('e') = self.peek() {
            let sign = matches!(self.peek_at(1), Some('+') | Some('-'));
            let digit_at = if sign { 2 } else { 1 };
            if self.peek_at(digit_at).map_or(false, is_basic_digit) {
                float = true;
                self.pos += digit_at;
                while self.peek().map_or(false, is_basic_digit) {
                    self.pos += 1;
                }
            }
        }
        let lexeme = self.text(start, self.pos);
        let literal = match lexeme.parse::<i32>() {
            Ok(n) if !float => Literal::Integer(n),
            _ => Literal::Single(lexeme.to_ascii_uppercase().parse::<f32>().unwrap_or(0.0)),
        };
        self.push(Kind::Literal(literal), start);
    }

    fn string(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += 1;
        let mut s = String::new();
        loop {
            match self.peek() {
                Some('"') => {
                    self.pos += 1;
                    break;
                }
                Some(ch) => {
                    s.push(ch);
                    self.pos += 1;
                }
                None => return Err(error!(UnterminatedString, ..&(start..self.pos))),
            }
        }
        self.push(Kind::Literal(Literal::String(s)), start);
        Ok(())
    }

    /// Longest keyword, written in full or dotted, starting at `at`.
    fn keyword_at(&self, at: usize) -> Option<(Word, usize)> {
        for len in (Word::MIN_LEN..=Word::MAX_LEN).rev() {
            if at + len > self.chars.len() {
                continue;
            }
            let candidate = self.text(at, at + len).to_ascii_uppercase();
            if let Some(word) = Word::lookup(&candidate) {
                return Some((word, len));
            }
        }
        None
    }

    fn alphabetic(&mut self) -> Option<Word> {
        let start = self.pos;
        if self.peek_at(1) == Some('$') {
            self.pos += 2;
            let name = self.text(start, self.pos).to_ascii_uppercase();
            self.push(Kind::Ident(Ident::String(name.into())), start);
            return None;
        }
        if let Some((word, len)) = self.keyword_at(start) {
            self.pos += len;
            self.push(Kind::Word(word), start);
            return Some(word);
        }
        let single = match self.peek_at(1) {
            Some(next) if is_basic_alphabetic(next) => self.keyword_at(start + 1).is_some(),
            _ => true,
        };
        if single {
            self.pos += 1;
            let name = self.text(start, self.pos).to_ascii_uppercase();
            self.push(Kind::Ident(Ident::Plain(name.into())), start);
            return None;
        }
        self.unquoted();
        None
    }

    /// Text that is neither keyword nor variable. It runs over letters,
    /// digits and spaces and stops in front of a word that begins with a
    /// keyword, so `A$=YES THEN 10` still finds the `THEN`.
    fn unquoted(&mut self) {
        let start = self.pos;
        let mut end = self.pos;
        while let Some(ch) = self.peek() {
            if is_basic_whitespace(ch) {
                self.pos += 1;
                continue;
            }
            if !(is_basic_alphabetic(ch) || is_basic_digit(ch)) {
                break;
            }
            let word_start = self.pos > start && is_basic_whitespace(self.chars[self.pos - 1]);
            if word_start && self.keyword_at(self.pos).is_some() {
                break;
            }
            self.pos += 1;
            end = self.pos;
        }
        self.pos = end;
        let text = self.text(start, end);
        self.push(Kind::Unquoted(text), start);
    }

    fn remark(&mut self) {
        let start = self.pos;
        self.pos = self.chars.len();
        let text = self.text(start, self.pos);
        self.push(Kind::Remark(text.trim_start().to_string()), start);
    }

    /// Elements of `DATA` are raw comma separated runs so that unquoted
    /// strings keep characters that would otherwise scan as operators.
    fn data(&mut self) -> Result<()> {
        loop {
            while self.peek().map_or(false, is_basic_whitespace) {
                self.pos += 1;
            }
            let start = self.pos;
            let mut quoted = false;
            while let Some(ch) = self.peek() {
                if ch == '"' {
                    quoted = !quoted;
                } else if !quoted && (ch == ',' || ch == ':') {
                    break;
                }
                self.pos += 1;
            }
            if quoted {
                return Err(error!(UnterminatedString, ..&(start..self.pos)));
            }
            let raw = self.text(start, self.pos);
            if raw.trim().is_empty() && self.peek() != Some(',') {
                return Ok(());
            }
            let literal = Scanner::data_element(raw.trim());
            self.tokens.push(Token::new(
                Kind::Literal(literal),
                raw.trim(),
                start..self.pos,
                &self.source,
            ));
            match self.peek() {
                Some(',') => {
                    let comma = self.pos;
                    self.pos += 1;
                    self.push(Kind::Comma, comma);
                }
                _ => return Ok(()),
            }
        }
    }

    fn data_element(raw: &str) -> Literal {
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Literal::String(raw[1..raw.len() - 1].to_string());
        }
        if let Ok(n) = raw.parse::<i32>() {
            return Literal::Integer(n);
        }
        let numeric = !raw.is_empty()
            && raw
                .chars()
                .all(|c| is_basic_digit(c) || matches!(c, '.' | 'E' | 'e' | '+' | '-'));
        if numeric {
            if let Ok(n) = raw.parse::<f32>() {
                return Literal::Single(n);
            }
        }
        Literal::String(raw.to_string())
    }
}
