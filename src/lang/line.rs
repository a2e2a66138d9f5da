use super::{Error, LineNumber, Word};

/// ## One line of source
///
/// A line is an optional line number and a statement body. The body keeps
/// its keyword so the line can be listed back exactly as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    word: Word,
    body: String,
}

impl Line {
    /// Splits `10 PRINT A` into its line number and trimmed body.
    /// Text that doesn't start with a digit is direct and has no number.
    pub fn split(s: &str) -> Result<(LineNumber, &str), Error> {
        let s = s.trim_start();
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digits == 0 {
            return Ok((None, s.trim_end()));
        }
        let number = match s[..digits].parse::<u32>() {
            Ok(number) => number,
            Err(_) => return Err(error!(InvalidLineNumber; "LINE NUMBER OUT OF RANGE")),
        };
        let rest = &s[digits..];
        if !rest.is_empty() && !rest.starts_with(|c: char| c == ' ' || c == '\t') {
            return Err(error!(InvalidLineNumber, Some(number); "EXPECTED SPACE AFTER LINE NUMBER"));
        }
        Ok((Some(number), rest.trim()))
    }

    pub fn new(number: LineNumber, body: &str) -> Result<Line, Error> {
        let body = body.trim();
        if body.is_empty() {
            return Err(error!(InvalidExpression, number; "MISSING STATEMENT"));
        }
        match Word::for_body(body) {
            Some(word) => Ok(Line {
                number,
                word,
                body: body.to_string(),
            }),
            None => Err(error!(InvalidExpression, number; "UNKNOWN STATEMENT")),
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn word(&self) -> Word {
        self.word
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Everything after the keyword, with its byte offset into the body.
    pub fn argument(&self) -> (usize, &str) {
        let offset = self.word.to_string().len();
        (offset, &self.body[offset..])
    }
}

impl std::str::FromStr for Line {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, body) = Line::split(s)?;
        Line::new(number, body)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.body),
            None => write!(f, "{}", self.body),
        }
    }
}
