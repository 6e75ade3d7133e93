use super::Column;
use std::collections::HashMap;
use std::rc::Rc;

thread_local!(
    static KEYWORDS: Vec<HashMap<String, Word>> = Word::tables();
);

/// One lexical unit. Columns are character offsets into `source`,
/// which is the statement text of the line with the line number removed.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub lexeme: String,
    pub column: Column,
    pub source: Rc<str>,
}

impl Token {
    pub fn new(kind: Kind, lexeme: &str, column: Column, source: &Rc<str>) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            column,
            source: source.clone(),
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, Kind::EndOfLine | Kind::Colon)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    LineNumber(u32),
    Literal(Literal),
    /// A run of text that is neither keyword nor variable. Level I
    /// accepts these as strings without quotes.
    Unquoted(String),
    Remark(String),
    Word(Word),
    Ident(Ident),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    EndOfLine,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            LineNumber(n) => write!(f, "{}", n),
            Literal(s) => write!(f, "{}", s),
            Unquoted(s) => write!(f, "{}", s),
            Remark(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            EndOfLine => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i32),
    Single(f32),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Single(n) => write!(f, "{}", n),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Word {
    Cls,
    Cont,
    Data,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    Load,
    Merge,
    New,
    Next,
    On,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Run,
    Save,
    Step,
    Stop,
    Then,
    To,
    At,
    Abs,
    Chr,
    Int,
    Mem,
    Point,
    Reset,
    Rnd,
    Set,
    Tab,
}

/// Spelling and shortest dotted abbreviation, in priority order.
/// When two words share a dotted prefix the first one listed wins.
/// An abbreviation length of zero means the word has no short form.
const SPELLINGS: &[(Word, &str, usize)] = &[
    (Word::Print, "PRINT", 1),
    (Word::Input, "INPUT", 2),
    (Word::If, "IF", 0),
    (Word::Then, "THEN", 1),
    (Word::Goto, "GOTO", 1),
    (Word::Gosub, "GOSUB", 3),
    (Word::Return, "RETURN", 3),
    (Word::For, "FOR", 1),
    (Word::To, "TO", 0),
    (Word::Stop, "STOP", 2),
    (Word::Step, "STEP", 1),
    (Word::Next, "NEXT", 1),
    (Word::End, "END", 1),
    (Word::Cont, "CONT", 1),
    (Word::Let, "LET", 0),
    (Word::Rem, "REM", 0),
    (Word::Data, "DATA", 1),
    (Word::Read, "READ", 3),
    (Word::Restore, "RESTORE", 4),
    (Word::Run, "RUN", 1),
    (Word::List, "LIST", 1),
    (Word::New, "NEW", 0),
    (Word::Cls, "CLS", 0),
    (Word::On, "ON", 0),
    (Word::Load, "LOAD", 2),
    (Word::Save, "SAVE", 2),
    (Word::Merge, "MERGE", 2),
    (Word::Abs, "ABS", 1),
    (Word::At, "AT", 0),
    (Word::Int, "INT", 1),
    (Word::Mem, "MEM", 1),
    (Word::Chr, "CHR$", 0),
    (Word::Point, "POINT", 1),
    (Word::Reset, "RESET", 1),
    (Word::Rnd, "RND", 1),
    (Word::Set, "SET", 1),
    (Word::Tab, "TAB", 1),
];

impl Word {
    /// Shortest and longest text a keyword can occupy.
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 7;

    fn tables() -> Vec<HashMap<String, Word>> {
        let mut tables: Vec<HashMap<String, Word>> = vec![HashMap::new(); Word::MAX_LEN + 1];
        for (word, spelling, abbrev) in SPELLINGS {
            tables[spelling.len()]
                .entry(spelling.to_string())
                .or_insert(*word);
            if *abbrev == 0 {
                continue;
            }
            for len in *abbrev..spelling.len() {
                let dotted = format!("{}.", &spelling[..len]);
                tables[dotted.len()].entry(dotted).or_insert(*word);
            }
        }
        tables
    }

    /// Exact lookup of an upper case candidate in the table for its length.
    pub fn lookup(s: &str) -> Option<Word> {
        let len = s.chars().count();
        if len < Word::MIN_LEN || len > Word::MAX_LEN {
            return None;
        }
        KEYWORDS.with(|tables| tables[len].get(s).copied())
    }

    pub fn is_statement(self) -> bool {
        use Word::*;
        !matches!(
            self,
            Then | To | Step | At | Abs | Chr | Int | Mem | Point | Reset | Rnd | Set | Tab
        )
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let spelling = SPELLINGS
            .iter()
            .find(|(word, _, _)| word == self)
            .map(|(_, spelling, _)| *spelling)
            .unwrap_or("");
        write!(f, "{}", spelling)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_comparison(self) -> bool {
        use Operator::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Word::lookup("REM"), Some(Word::Rem));
        assert_eq!(Word::lookup("P."), Some(Word::Print));
        assert_eq!(Word::lookup("PRI."), Some(Word::Print));
        assert_eq!(Word::lookup("PO."), Some(Word::Point));
        assert_eq!(Word::lookup("R."), Some(Word::Run));
        assert_eq!(Word::lookup("REST."), Some(Word::Restore));
        assert_eq!(Word::lookup("RESTOR."), Some(Word::Restore));
        assert_eq!(Word::lookup("CHR$"), Some(Word::Chr));
        assert_eq!(Word::lookup("PICKLES"), None);
        assert_eq!(Word::lookup("P"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Word::Gosub.to_string(), "GOSUB");
        assert_eq!(Operator::NotEqual.to_string(), "<>");
    }
}
