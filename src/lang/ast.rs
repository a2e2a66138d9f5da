use super::Column;
use std::rc::Rc;

pub type Ident = Rc<str>;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Rem(String),
    Let(Column, Ident, Expression),
    If(Expression, Comparison, Expression, u32),
    Print(Expression),
    Input(Column, Ident),
    Goto(u32),
    End,
}

impl Statement {
    /// The line this statement may jump to.
    pub fn target(&self) -> Option<u32> {
        match self {
            Statement::If(_, _, _, line) | Statement::Goto(line) => Some(*line),
            _ => None,
        }
    }

    /// The variable this statement brings into existence when parsed.
    pub fn declares(&self) -> Option<&Ident> {
        match self {
            Statement::Let(_, ident, _) | Statement::Input(_, ident) => Some(ident),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(Column, i32),
    Variable(Column, Ident),
    Binary(Column, Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        match self {
            Expression::Number(col, _)
            | Expression::Variable(col, _)
            | Expression::Binary(col, ..) => col.clone(),
        }
    }

    /// Direct children, left before right.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Binary(_, _, lhs, rhs) => vec![lhs.as_ref(), rhs.as_ref()],
            _ => vec![],
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Expression::Number(_, n) => write!(f, "{}", n),
            Expression::Variable(_, ident) => write!(f, "{}", ident),
            Expression::Binary(_, op, ..) => write!(f, "{}", op),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "MOD"),
            Power => write!(f, "**"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparison {
    Equal,
    Greater,
    Less,
}

impl Comparison {
    pub fn from_char(ch: char) -> Option<Comparison> {
        match ch {
            '=' => Some(Comparison::Equal),
            '>' => Some(Comparison::Greater),
            '<' => Some(Comparison::Less),
            _ => None,
        }
    }

    pub fn holds(&self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::Less => lhs < rhs,
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Comparison::Equal => write!(f, "="),
            Comparison::Greater => write!(f, ">"),
            Comparison::Less => write!(f, "<"),
        }
    }
}
