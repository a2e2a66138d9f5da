use super::{ast::*, Column, Failure, Line, NumberError, Word};

type Result<T> = std::result::Result<T, Failure>;

/// Parses one line into a statement. Errors carry the line's number.
pub fn parse(line: &Line) -> Result<Statement> {
    match Statement::for_line(line) {
        Err(e) => Err(e.in_line_number(line.number())),
        Ok(r) => Ok(r),
    }
}

/// Parses a bare expression. Columns are relative to `s`.
pub fn parse_expression(s: &str) -> Result<Expression> {
    Parser::parse(s, 0)
}

/// Recursive descent straight over the characters; there is no token stream.
///
/// ```text
/// expression := term (('+'|'-') term)*
/// term       := factor (('*'|'/'|'MOD') factor)*
/// factor     := primary ('**' factor)?
/// primary    := '(' expression ')' | identifier | ['-'] digits
/// ```
struct Parser<'a> {
    text: &'a str,
    pos: usize,
    offset: usize,
}

impl<'a> Parser<'a> {
    fn parse(text: &'a str, offset: usize) -> Result<Expression> {
        let mut parse = Parser {
            text,
            pos: 0,
            offset,
        };
        parse.skip_whitespace();
        if parse.peek().is_none() {
            let column = parse.column_from(0);
            return Err(error!(MissingOperand, ..&column; "EXPECTED EXPRESSION").into());
        }
        let expr = parse.expression()?;
        parse.skip_whitespace();
        if parse.peek().is_some() {
            let start = parse.pos;
            parse.pos = text.len();
            let column = parse.column_from(start);
            return Err(error!(MissingOperator, ..&column; "EXPECTED OPERATOR").into());
        }
        Ok(expr)
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn column_from(&self, start: usize) -> Column {
        self.offset + start..self.offset + self.pos
    }

    fn advance(&mut self, len: usize) -> Column {
        let start = self.pos;
        self.pos += len;
        self.column_from(start)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            self.skip_whitespace();
            let op = match self.peek() {
                Some('+') => Operator::Plus,
                Some('-') => Operator::Minus,
                _ => return Ok(lhs),
            };
            let column = self.advance(1);
            let rhs = self.term()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            self.skip_whitespace();
            let (op, len) = if self.rest().starts_with("MOD") {
                (Operator::Modulus, 3)
            } else {
                match self.peek() {
                    Some('*') => (Operator::Multiply, 1),
                    Some('/') => (Operator::Divide, 1),
                    _ => return Ok(lhs),
                }
            };
            let column = self.advance(len);
            let rhs = self.factor()?;
            lhs = Expression::for_binary_op(column, op, lhs, rhs);
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        let lhs = self.primary()?;
        self.skip_whitespace();
        if self.rest().starts_with("**") {
            let column = self.advance(2);
            let rhs = self.factor()?;
            return Ok(Expression::for_binary_op(column, Operator::Power, lhs, rhs));
        }
        Ok(lhs)
    }

    fn primary(&mut self) -> Result<Expression> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            None => {
                let column = self.column_from(start);
                Err(error!(MissingOperand, ..&column; "EXPECTED OPERAND").into())
            }
            Some('(') => {
                self.advance(1);
                let expr = self.expression()?;
                self.skip_whitespace();
                if self.peek() != Some(')') {
                    let column = self.column_from(start);
                    return Err(
                        error!(InvalidExpression, ..&column; "MISSING RIGHT PARENTHESIS").into(),
                    );
                }
                self.advance(1);
                Ok(expr)
            }
            Some(ch) if ch.is_ascii_alphabetic() => {
                let rest = self.rest();
                let len = rest
                    .find(|c: char| !c.is_ascii_alphanumeric())
                    .unwrap_or_else(|| rest.len());
                let column = self.advance(len);
                Ok(Expression::Variable(column, rest[..len].into()))
            }
            Some(ch) if ch == '-' || ch.is_ascii_digit() => {
                // A leading minus belongs to the literal. There is no unary minus.
                let sign = if ch == '-' { 1 } else { 0 };
                let rest = self.rest();
                let digits = rest[sign..]
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or_else(|| rest.len() - sign);
                if digits == 0 {
                    self.advance(sign);
                    let column = self.column_from(start);
                    return Err(error!(MissingOperand, ..&column; "EXPECTED DIGITS").into());
                }
                let text = &rest[..sign + digits];
                let column = self.advance(sign + digits);
                match text.parse::<i32>() {
                    Ok(n) => Ok(Expression::Number(column, n)),
                    Err(e) => Err(NumberError::new(text, e).into()),
                }
            }
            Some(ch) => {
                let column = self.advance(ch.len_utf8());
                Err(error!(TokenError, ..&column; "UNEXPECTED CHARACTER").into())
            }
        }
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Binary(col, op, Box::new(lhs), Box::new(rhs))
    }
}

impl Statement {
    fn for_line(line: &Line) -> Result<Statement> {
        let (offset, arg) = line.argument();
        use Word::*;
        match line.word() {
            Rem => Ok(Statement::Rem(arg.trim().to_string())),
            Let => Self::r#let(offset, arg),
            If => Self::r#if(offset, arg),
            Print => Self::r#print(offset, arg),
            Input => Self::r#input(offset, arg),
            Goto => Self::r#goto(arg),
            End => Ok(Statement::End),
        }
    }

    fn r#let(offset: usize, arg: &str) -> Result<Statement> {
        let pos = match arg.find('=') {
            Some(pos) => pos,
            None => return Err(error!(MissingOperator; "EXPECTED =").into()),
        };
        let (column, ident) = ident(offset, &arg[..pos], "MISSING VARIABLE BEFORE =")?;
        let rhs = &arg[pos + 1..];
        if rhs.trim().is_empty() {
            return Err(error!(MissingOperand; "MISSING EXPRESSION AFTER =").into());
        }
        let expr = Parser::parse(rhs, offset + pos + 1)?;
        Ok(Statement::Let(column, ident, expr))
    }

    fn r#if(offset: usize, arg: &str) -> Result<Statement> {
        // The last THEN standing alone as a word, so names like THENX stay names.
        let then = arg.rmatch_indices(" THEN").map(|(i, _)| i).find(|&i| {
            arg[i + " THEN".len()..]
                .chars()
                .next()
                .map_or(true, |c| c.is_whitespace() || c.is_ascii_digit())
        });
        let then = match then {
            Some(then) => then,
            None => return Err(error!(SyntaxError; "EXPECTED THEN").into()),
        };
        let condition = &arg[..then];
        if condition.trim().is_empty() {
            return Err(error!(MissingOperand; "MISSING CONDITION").into());
        }
        let mut ops = condition
            .char_indices()
            .filter_map(|(i, c)| Comparison::from_char(c).map(|cmp| (i, cmp)));
        let (pos, cmp) = match ops.next() {
            Some(op) => op,
            None => return Err(error!(SyntaxError; "EXPECTED =, > OR <").into()),
        };
        if ops.next().is_some() {
            return Err(error!(SyntaxError; "MORE THAN ONE COMPARISON").into());
        }
        let lhs = Parser::parse(&condition[..pos], offset)?;
        let rhs = Parser::parse(&condition[pos + 1..], offset + pos + 1)?;
        let target = line_target(&arg[then + " THEN".len()..])?;
        Ok(Statement::If(lhs, cmp, rhs, target))
    }

    fn r#print(offset: usize, arg: &str) -> Result<Statement> {
        Ok(Statement::Print(Parser::parse(arg, offset)?))
    }

    fn r#input(offset: usize, arg: &str) -> Result<Statement> {
        let (column, ident) = ident(offset, arg, "MISSING VARIABLE")?;
        Ok(Statement::Input(column, ident))
    }

    fn r#goto(arg: &str) -> Result<Statement> {
        Ok(Statement::Goto(line_target(arg)?))
    }
}

fn ident(offset: usize, s: &str, missing: &'static str) -> Result<(Column, Ident)> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(error!(MissingOperand; missing).into());
    }
    let start = offset + s.len() - s.trim_start().len();
    let column = start..start + trimmed.len();
    let mut chars = trimmed.chars();
    let valid = chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(error!(SyntaxError, ..&column; "INVALID VARIABLE NAME").into());
    }
    Ok((column, trimmed.into()))
}

fn line_target(s: &str) -> Result<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Err(error!(MissingOperand; "EXPECTED LINE NUMBER").into());
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(InvalidLineNumber; "EXPECTED LINE NUMBER").into());
    }
    match s.parse::<u32>() {
        Ok(n) => Ok(n),
        Err(e) => Err(NumberError::new(s, e).into()),
    }
}
