use super::{Builtin, Column, Line};
pub use super::token::{Ident, Literal, Operator};

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Cls(Column),
    Cont(Column),
    Data(Column, Vec<Expression>),
    Delete(Column, u16),
    End(Column),
    Expression(Column, Expression),
    For(Column, Ident, Expression, Expression, Option<Expression>),
    Gosub(Column, Expression),
    Goto(Column, Expression),
    If(Column, Expression, Vec<Statement>),
    Input(Column, Vec<Expression>, bool),
    Let(Column, Expression),
    List(Column, Option<Expression>),
    Load(Column, Expression),
    Merge(Column, Expression),
    New(Column),
    Next(Column, Option<Ident>),
    On(Column, Expression, Vec<Expression>, bool),
    Print(Column, Print),
    Read(Column, Vec<Expression>),
    Rem(Column, String),
    Replace(Column, Box<Line>),
    Restore(Column),
    Return(Column),
    Run(Column, Option<Expression>),
    Save(Column, Expression),
    Stop(Column),
}

/// Arguments of `PRINT`. A comma in the list becomes a call to
/// `Builtin::Zone`; semicolons only matter when they end the list.
#[derive(Debug, PartialEq, Clone)]
pub struct Print {
    pub at: Option<Expression>,
    pub tab: Option<Expression>,
    pub items: Vec<Expression>,
    pub newline: bool,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Column, Literal),
    Identifier(Column, Ident),
    ArrayAccess(Column, Ident, Box<Expression>),
    Assign(Column, Box<Expression>, Box<Expression>),
    Binary(Column, Box<Expression>, Operator, Box<Expression>),
    Unary(Column, Operator, Box<Expression>),
    Grouping(Column, Box<Expression>),
    Call(Column, Builtin, Vec<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Literal(col, ..)
            | Identifier(col, ..)
            | ArrayAccess(col, ..)
            | Assign(col, ..)
            | Binary(col, ..)
            | Unary(col, ..)
            | Grouping(col, ..)
            | Call(col, ..) => col.clone(),
        }
    }

    /// Variables and array elements can be assigned to.
    pub fn is_target(&self) -> bool {
        matches!(self, Expression::Identifier(..) | Expression::ArrayAccess(..))
    }
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            Cls(col) | Cont(col) | End(col) | New(col) | Restore(col) | Return(col)
            | Stop(col) => col.clone(),
            Data(col, ..) | Delete(col, ..) | Expression(col, ..) | For(col, ..)
            | Gosub(col, ..) | Goto(col, ..) | If(col, ..) | Input(col, ..) | Let(col, ..)
            | List(col, ..) | Load(col, ..) | Merge(col, ..) | Next(col, ..) | On(col, ..)
            | Print(col, ..) | Read(col, ..) | Rem(col, ..) | Replace(col, ..) | Run(col, ..)
            | Save(col, ..) => col.clone(),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            Cls(_) | Cont(_) | Delete(..) | End(_) | New(_) | Rem(..) | Replace(..)
            | Restore(_) | Return(_) | Stop(_) | Next(..) => {}
            Data(_, vec_expr) | Input(_, vec_expr, _) | Read(_, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Expression(_, expr) | Gosub(_, expr) | Goto(_, expr) | Let(_, expr)
            | Load(_, expr) | Merge(_, expr) | Save(_, expr) => {
                expr.accept(visitor);
            }
            For(_, _, expr1, expr2, expr3) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
                if let Some(expr3) = expr3 {
                    expr3.accept(visitor);
                }
            }
            If(_, predicate, vec_stmt) => {
                predicate.accept(visitor);
                for stmt in vec_stmt {
                    stmt.accept(visitor);
                }
            }
            List(_, expr) | Run(_, expr) => {
                if let Some(expr) = expr {
                    expr.accept(visitor);
                }
            }
            On(_, selector, vec_expr, _) => {
                selector.accept(visitor);
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Print(_, print) => {
                if let Some(at) = &print.at {
                    at.accept(visitor);
                }
                if let Some(tab) = &print.tab {
                    tab.accept(visitor);
                }
                for expr in &print.items {
                    expr.accept(visitor);
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Literal(..) | Identifier(..) => {}
            ArrayAccess(_, _, expr) | Unary(_, _, expr) | Grouping(_, expr) => {
                expr.accept(visitor);
            }
            Assign(_, expr1, expr2) | Binary(_, expr1, _, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
            Call(_, _, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
        }
        visitor.visit_expression(self)
    }
}
