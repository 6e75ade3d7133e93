use super::{ast::*, token::*, Builtin, Column, Error, Line, MAX_LINE_NUMBER};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Parser
///
/// Recursive descent over the tokens of one line. A line that is only a
/// line number parses as a direct `Delete` of that line.
pub fn parse(tokens: &[Token]) -> Result<Option<Line>> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Option<Line>> {
        let source: Rc<str> = match tokens.last() {
            Some(token) => token.source.clone(),
            None => return Ok(None),
        };
        let mut parse = Parser { tokens, pos: 0 };
        let mut number = None;
        if let Some(token) = parse.peek() {
            if let Kind::LineNumber(n) = token.kind {
                if n > MAX_LINE_NUMBER as u32 {
                    let lexeme: Rc<str> = token.lexeme.as_str().into();
                    return Err(error!(InvalidLineNumber, ..&(0..lexeme.len())).in_source(&lexeme));
                }
                number = Some(n as u16);
                parse.pos += 1;
            }
        }
        if parse.at_end_of_line() {
            return Ok(number.map(|n| {
                Line::new(
                    None,
                    n.to_string().into(),
                    vec![Statement::Delete(0..0, n)],
                )
            }));
        }
        match parse.statements() {
            Ok(statements) => Ok(Some(Line::new(number, source, statements))),
            Err(e) => Err(e.in_line_number(number).in_source(&source)),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&'a Kind> {
        self.peek().map(|t| &t.kind)
    }

    fn peek_second_kind(&self) -> Option<&'a Kind> {
        self.tokens.get(self.pos + 1).map(|t| &t.kind)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn column(&self) -> Column {
        match self.peek() {
            Some(token) => token.column.clone(),
            None => match self.tokens.last() {
                Some(token) => token.column.end..token.column.end,
                None => 0..0,
            },
        }
    }

    fn previous_end(&self) -> usize {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.column.end,
            None => 0,
        }
    }

    fn at_end_of_line(&self) -> bool {
        matches!(self.peek_kind(), None | Some(Kind::EndOfLine))
    }

    fn at_end_of_statement(&self) -> bool {
        matches!(
            self.peek_kind(),
            None | Some(Kind::EndOfLine) | Some(Kind::Colon)
        )
    }

    fn is_word(&self, word: Word) -> bool {
        self.peek_kind() == Some(&Kind::Word(word))
    }

    fn unexpected(&self, message: &str) -> Error {
        error!(SyntaxError, ..&self.column(); message)
    }

    fn expect(&mut self, kind: Kind) -> Result<()> {
        if self.peek_kind() == Some(&kind) {
            self.pos += 1;
            return Ok(());
        }
        Err(self.unexpected(match kind {
            Kind::Word(Word::To) => "EXPECTED TO",
            Kind::Word(Word::Then) => "EXPECTED THEN",
            Kind::Word(_) => "EXPECTED RESERVED WORD",
            Kind::Ident(_) => "EXPECTED VARIABLE",
            Kind::Operator(Operator::Equal) => "EXPECTED =",
            Kind::Operator(_) => "EXPECTED OPERATOR",
            Kind::LParen => "EXPECTED LEFT PARENTHESIS",
            Kind::RParen => "EXPECTED RIGHT PARENTHESIS",
            Kind::Comma => "EXPECTED COMMA",
            _ => "EXPECTED END OF STATEMENT",
        }))
    }

    fn statements(&mut self) -> Result<Vec<Statement>> {
        let mut v: Vec<Statement> = vec![];
        loop {
            match self.peek_kind() {
                None | Some(Kind::EndOfLine) => return Ok(v),
                Some(Kind::Colon) => {
                    self.pos += 1;
                    continue;
                }
                _ => {}
            }
            v.push(self.statement()?);
            if !self.at_end_of_statement() {
                return Err(self.unexpected("EXPECTED END OF STATEMENT"));
            }
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected("EXPECTED STATEMENT")),
        };
        let column = token.column.clone();
        match &token.kind {
            Kind::Ident(_) => Statement::r#let(self, column),
            Kind::Word(word) => {
                if !word.is_statement() {
                    let expr = self.expression()?;
                    return Ok(Statement::Expression(column, expr));
                }
                if let Some(statement) = self.builtin_statement(token, column.clone()) {
                    return Ok(statement);
                }
                self.pos += 1;
                Statement::for_word(self, *word, column)
            }
            Kind::Unquoted(_) => Err(error!(UnknownIdentifier, ..&column)),
            _ => {
                let expr = self.expression()?;
                Ok(Statement::Expression(column, expr))
            }
        }
    }

    /// `R.(3,4)` at the start of a statement is `RESET`, not `RUN`.
    fn builtin_statement(&mut self, token: &Token, column: Column) -> Option<Statement> {
        if self.peek_second_kind() != Some(&Kind::LParen) || !Builtin::is_builtin(&token.lexeme) {
            return None;
        }
        let saved = self.pos;
        if let Ok(expr @ Expression::Call(..)) = self.expression() {
            if self.at_end_of_statement() {
                return Some(Statement::Expression(column, expr));
            }
        }
        self.pos = saved;
        None
    }

    fn expression(&mut self) -> Result<Expression> {
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        while let Some(Kind::Operator(op)) = self.peek_kind() {
            if !op.is_comparison() {
                break;
            }
            let column = self.column();
            self.pos += 1;
            let rhs = match (&lhs, op) {
                (Expression::Identifier(_, Ident::String(_)), Operator::Equal)
                | (Expression::Identifier(_, Ident::String(_)), Operator::NotEqual) => {
                    self.string_operand()?
                }
                _ => self.term()?,
            };
            lhs = Expression::Binary(column, Box::new(lhs), *op, Box::new(rhs));
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        while let Some(Kind::Operator(op @ Operator::Plus))
        | Some(Kind::Operator(op @ Operator::Minus)) = self.peek_kind()
        {
            let column = self.column();
            self.pos += 1;
            let rhs = self.factor()?;
            lhs = Expression::Binary(column, Box::new(lhs), *op, Box::new(rhs));
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expression> {
        let mut lhs = self.unary()?;
        while let Some(Kind::Operator(op @ Operator::Multiply))
        | Some(Kind::Operator(op @ Operator::Divide)) = self.peek_kind()
        {
            let column = self.column();
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = Expression::Binary(column, Box::new(lhs), *op, Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expression> {
        if let Some(Kind::Operator(op @ Operator::Minus))
        | Some(Kind::Operator(op @ Operator::Plus)) = self.peek_kind()
        {
            let column = self.column();
            self.pos += 1;
            let operand = self.unary()?;
            return Ok(Expression::Unary(column, *op, Box::new(operand)));
        }
        self.call()
    }

    fn call(&mut self) -> Result<Expression> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected("EXPECTED EXPRESSION")),
        };
        match &token.kind {
            Kind::Word(word) => self.builtin(token, *word),
            Kind::Ident(_) => self.variable(),
            _ => self.primary(),
        }
    }

    fn builtin(&mut self, token: &Token, word: Word) -> Result<Expression> {
        self.pos += 1;
        let mut column = token.column.clone();
        let mut args: Vec<Expression> = vec![];
        if self.peek_kind() == Some(&Kind::LParen) {
            args = self.arguments()?;
            column.end = self.previous_end();
        }
        let names = [token.lexeme.to_ascii_uppercase(), word.to_string()];
        for name in names.iter() {
            if let Some(builtin) = Builtin::lookup(name, args.len()) {
                return Ok(Expression::Call(column, builtin, args));
            }
        }
        if names.iter().any(|name| Builtin::is_builtin(name)) {
            return Err(error!(WrongArity, ..&token.column));
        }
        Err(error!(SyntaxError, ..&token.column; "EXPECTED EXPRESSION"))
    }

    fn arguments(&mut self) -> Result<Vec<Expression>> {
        self.expect(Kind::LParen)?;
        let mut v: Vec<Expression> = vec![];
        loop {
            v.push(self.expression()?);
            match self.peek_kind() {
                Some(Kind::RParen) => {
                    self.pos += 1;
                    return Ok(v);
                }
                Some(Kind::Comma) => {
                    self.pos += 1;
                    continue;
                }
                _ => return Err(self.unexpected("EXPECTED END OR SEPARATOR")),
            }
        }
    }

    /// A scalar variable or an element of an array.
    fn variable(&mut self) -> Result<Expression> {
        let column = self.column();
        let ident = match self.peek_kind() {
            Some(Kind::Ident(ident)) => ident.clone(),
            _ => return Err(self.unexpected("EXPECTED VARIABLE")),
        };
        self.pos += 1;
        if self.peek_kind() != Some(&Kind::LParen) {
            return Ok(Expression::Identifier(column, ident));
        }
        if ident.is_string() {
            return Err(error!(SyntaxError, ..&column; "NO STRING ARRAYS"));
        }
        self.pos += 1;
        let index = self.expression()?;
        self.expect(Kind::RParen)?;
        let column = column.start..self.previous_end();
        Ok(Expression::ArrayAccess(column, ident, Box::new(index)))
    }

    fn primary(&mut self) -> Result<Expression> {
        let column = self.column();
        let token = match self.next() {
            Some(token) => token,
            None => return Err(self.unexpected("EXPECTED EXPRESSION")),
        };
        match &token.kind {
            Kind::Literal(literal) => Ok(Expression::Literal(column, literal.clone())),
            Kind::LParen => {
                let expr = self.expression()?;
                self.expect(Kind::RParen)?;
                let column = column.start..self.previous_end();
                Ok(Expression::Grouping(column, Box::new(expr)))
            }
            Kind::Unquoted(_) => Err(error!(UnknownIdentifier, ..&column)),
            _ => {
                self.pos -= 1;
                Err(self.unexpected("EXPECTED EXPRESSION"))
            }
        }
    }

    /// Right side of a string assignment or comparison, where Level I
    /// accepts text without quotes.
    fn string_operand(&mut self) -> Result<Expression> {
        if let Some(Token {
            kind: Kind::Unquoted(text),
            column,
            ..
        }) = self.peek()
        {
            self.pos += 1;
            return Ok(Expression::Literal(
                column.clone(),
                Literal::String(text.clone()),
            ));
        }
        self.term()
    }

    fn optional_expression(&mut self) -> Result<Option<Expression>> {
        if self.at_end_of_statement() {
            Ok(None)
        } else {
            Ok(Some(self.expression()?))
        }
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        let mut v = vec![self.expression()?];
        while self.peek_kind() == Some(&Kind::Comma) {
            self.pos += 1;
            v.push(self.expression()?);
        }
        Ok(v)
    }

    fn printer_list(&mut self) -> Result<(Vec<Expression>, bool)> {
        let mut v: Vec<Expression> = vec![];
        let mut newline = true;
        loop {
            match self.peek_kind() {
                None | Some(Kind::EndOfLine) | Some(Kind::Colon) => return Ok((v, newline)),
                Some(Kind::Semicolon) => {
                    newline = false;
                    self.pos += 1;
                }
                Some(Kind::Comma) => {
                    newline = false;
                    let column = self.column();
                    self.pos += 1;
                    v.push(Expression::Call(column, Builtin::Zone, vec![]));
                }
                _ => {
                    newline = true;
                    v.push(self.expression()?);
                }
            }
        }
    }

    /// `PRINT AT` may be spelled `A.` as long as no parenthesis follows.
    fn is_at(&self) -> bool {
        match self.peek() {
            Some(Token {
                kind: Kind::Word(Word::At),
                ..
            }) => true,
            Some(Token {
                kind: Kind::Word(Word::Abs),
                lexeme,
                ..
            }) => lexeme.eq_ignore_ascii_case("A.") && self.peek_second_kind() != Some(&Kind::LParen),
            _ => false,
        }
    }

    fn is_leading_tab(&self) -> bool {
        match self.peek() {
            Some(token) => {
                let spelled = token.kind == Kind::Word(Word::Tab)
                    || token.lexeme.eq_ignore_ascii_case("T.");
                spelled && self.peek_second_kind() == Some(&Kind::LParen)
            }
            None => false,
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word, column: Column) -> Result<Statement> {
        use Word::*;
        match word {
            Cls => Ok(Statement::Cls(column)),
            Cont => Ok(Statement::Cont(column)),
            Data => Self::r#data(parse, column),
            End => Ok(Statement::End(column)),
            For => Self::r#for(parse, column),
            Gosub => Ok(Statement::Gosub(column, parse.expression()?)),
            Goto => Ok(Statement::Goto(column, parse.expression()?)),
            If => Self::r#if(parse, column),
            Input => Self::r#input(parse, column),
            Let => Self::r#let(parse, column),
            List => Ok(Statement::List(column, parse.optional_expression()?)),
            Load => Ok(Statement::Load(column, Self::path(parse)?)),
            Merge => Ok(Statement::Merge(column, Self::path(parse)?)),
            New => Ok(Statement::New(column)),
            Next => Self::r#next(parse, column),
            On => Self::r#on(parse, column),
            Print => Self::r#print(parse, column),
            Read => Ok(Statement::Read(column, Self::targets(parse)?)),
            Rem => Self::r#rem(parse, column),
            Restore => Ok(Statement::Restore(column)),
            Return => Ok(Statement::Return(column)),
            Run => Ok(Statement::Run(column, parse.optional_expression()?)),
            Save => Ok(Statement::Save(column, Self::path(parse)?)),
            Stop => Ok(Statement::Stop(column)),
            Then | To | Step | At | Abs | Chr | Int | Mem | Point | Reset | Rnd | Set | Tab => {
                Err(error!(SyntaxError, ..&column; "EXPECTED STATEMENT"))
            }
        }
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let target = parse.variable()?;
        let equal = parse.column();
        parse.expect(Kind::Operator(Operator::Equal))?;
        let value = match &target {
            Expression::Identifier(_, Ident::String(_)) => parse.string_operand()?,
            _ => parse.expression()?,
        };
        Ok(Statement::Let(
            column,
            Expression::Assign(equal, Box::new(target), Box::new(value)),
        ))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut at = None;
        let mut tab = None;
        if parse.is_at() {
            parse.pos += 1;
            at = Some(parse.expression()?);
            if let Some(Kind::Comma) | Some(Kind::Semicolon) = parse.peek_kind() {
                parse.pos += 1;
            }
        }
        if parse.is_leading_tab() {
            parse.pos += 1;
            parse.expect(Kind::LParen)?;
            tab = Some(parse.expression()?);
            parse.expect(Kind::RParen)?;
            if let Some(Kind::Semicolon) = parse.peek_kind() {
                parse.pos += 1;
            }
        }
        let (items, newline) = parse.printer_list()?;
        Ok(Statement::Print(
            column,
            Print {
                at,
                tab,
                items,
                newline,
            },
        ))
    }

    /// Prompts and variables share one list. A comma after a prompt moves
    /// to the next print zone; a comma after a variable only separates.
    fn r#input(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut v: Vec<Expression> = vec![];
        let mut newline = true;
        let mut after_target = false;
        loop {
            match parse.peek_kind() {
                None | Some(Kind::EndOfLine) | Some(Kind::Colon) => break,
                Some(Kind::Semicolon) => {
                    newline = false;
                    after_target = false;
                    parse.pos += 1;
                }
                Some(Kind::Comma) => {
                    let comma = parse.column();
                    parse.pos += 1;
                    if !after_target {
                        v.push(Expression::Call(comma, Builtin::Zone, vec![]));
                    }
                    newline = false;
                    after_target = false;
                }
                Some(Kind::Ident(_)) => {
                    v.push(parse.variable()?);
                    newline = true;
                    after_target = true;
                }
                _ => {
                    v.push(parse.expression()?);
                    newline = true;
                    after_target = false;
                }
            }
        }
        if !v.iter().any(|e| e.is_target()) {
            return Err(parse.unexpected("EXPECTED VARIABLE"));
        }
        Ok(Statement::Input(column, v, newline))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let predicate = parse.expression()?;
        let then = match parse.peek_kind() {
            Some(Kind::Word(Word::Then)) => {
                parse.pos += 1;
                Self::then_clause(parse)?
            }
            Some(Kind::Literal(Literal::Integer(_))) => {
                return Err(parse.unexpected("EXPECTED THEN"));
            }
            _ => Self::then_clause(parse)?,
        };
        Ok(Statement::If(column, predicate, then))
    }

    /// Everything up to the end of the physical line belongs to the `THEN`.
    fn then_clause(parse: &mut Parser) -> Result<Vec<Statement>> {
        let mut v: Vec<Statement> = vec![];
        if let Some(Kind::Literal(Literal::Integer(_))) = parse.peek_kind() {
            let column = parse.column();
            v.push(Statement::Goto(column, parse.expression()?));
            if !parse.at_end_of_statement() {
                return Err(parse.unexpected("EXPECTED END OF STATEMENT"));
            }
        }
        v.append(&mut parse.statements()?);
        if v.is_empty() {
            return Err(parse.unexpected("EXPECTED STATEMENT"));
        }
        Ok(v)
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = match parse.peek_kind() {
            Some(Kind::Ident(ident @ Ident::Plain(_))) => ident.clone(),
            _ => return Err(parse.unexpected("EXPECTED VARIABLE")),
        };
        parse.pos += 1;
        parse.expect(Kind::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        parse.expect(Kind::Word(Word::To))?;
        let to = parse.expression()?;
        let step = if parse.is_word(Word::Step) {
            parse.pos += 1;
            Some(parse.expression()?)
        } else {
            None
        };
        Ok(Statement::For(column, ident, from, to, step))
    }

    fn r#next(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Kind::Ident(ident @ Ident::Plain(_))) = parse.peek_kind() {
            parse.pos += 1;
            return Ok(Statement::Next(column, Some(ident.clone())));
        }
        Ok(Statement::Next(column, None))
    }

    fn r#on(parse: &mut Parser, column: Column) -> Result<Statement> {
        let selector = parse.expression()?;
        let is_gosub = match parse.peek_kind() {
            Some(Kind::Word(Word::Goto)) => false,
            Some(Kind::Word(Word::Gosub)) => true,
            _ => return Err(parse.unexpected("EXPECTED GOTO OR GOSUB")),
        };
        parse.pos += 1;
        let targets = parse.expression_list()?;
        Ok(Statement::On(column, selector, targets, is_gosub))
    }

    fn r#data(parse: &mut Parser, column: Column) -> Result<Statement> {
        let mut v: Vec<Expression> = vec![];
        loop {
            let element = parse.column();
            match parse.peek_kind() {
                Some(Kind::Literal(literal)) => {
                    v.push(Expression::Literal(element, literal.clone()));
                    parse.pos += 1;
                }
                Some(Kind::Comma) => {
                    parse.pos += 1;
                }
                _ => return Ok(Statement::Data(column, v)),
            }
        }
    }

    fn r#rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Kind::Remark(text)) = parse.peek_kind() {
            parse.pos += 1;
            return Ok(Statement::Rem(column, text.clone()));
        }
        Ok(Statement::Rem(column, String::new()))
    }

    fn targets(parse: &mut Parser) -> Result<Vec<Expression>> {
        let mut v = vec![parse.variable()?];
        while parse.peek_kind() == Some(&Kind::Comma) {
            parse.pos += 1;
            v.push(parse.variable()?);
        }
        Ok(v)
    }

    /// File names may be quoted or bare.
    fn path(parse: &mut Parser) -> Result<Expression> {
        parse.string_operand()
    }
}
