/// The keyword that opens every statement.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Rem,
    Let,
    If,
    Print,
    Input,
    Goto,
    End,
}

impl Word {
    pub fn from_string(s: &str) -> Option<Word> {
        use Word::*;
        match s {
            "REM" => Some(Rem),
            "LET" => Some(Let),
            "IF" => Some(If),
            "PRINT" => Some(Print),
            "INPUT" => Some(Input),
            "GOTO" => Some(Goto),
            "END" => Some(End),
            _ => None,
        }
    }

    /// Classifies a statement body by its first whitespace delimited word.
    pub fn for_body(body: &str) -> Option<Word> {
        body.split_whitespace().next().and_then(Word::from_string)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Rem => write!(f, "REM"),
            Let => write!(f, "LET"),
            If => write!(f, "IF"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            Goto => write!(f, "GOTO"),
            End => write!(f, "END"),
        }
    }
}
