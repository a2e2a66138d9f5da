use crate::error;
use crate::lang::{ast::Statement, Error, Line, Word};
use log::debug;
use std::collections::btree_map::{BTreeMap, Values};
use std::ops::Bound::{Excluded, Unbounded};

/// Per statement run counters, cleared at the start of every run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Executions of the statement. Unused by IF.
    pub runs: usize,
    /// IF conditions that held.
    pub taken: usize,
    /// IF conditions that didn't.
    pub not_taken: usize,
}

#[derive(Debug, Clone)]
pub struct Entry {
    line: Line,
    statement: Option<Statement>,
    stats: Stats,
}

impl Entry {
    fn new(line: Line) -> Entry {
        Entry {
            line,
            statement: None,
            stats: Stats::default(),
        }
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    /// The statement as of its most recent parse.
    pub fn statement(&self) -> Option<&Statement> {
        self.statement.as_ref()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    pub fn set_statement(&mut self, statement: Statement) {
        self.statement = Some(statement);
    }
}

/// ## Program store
///
/// Numbered lines in ascending order. Ascending order is fall-through
/// execution order.
#[derive(Debug, Default, Clone)]
pub struct Program {
    lines: BTreeMap<u32, Entry>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn contains(&self, number: u32) -> bool {
        self.lines.contains_key(&number)
    }

    pub fn has_end(&self) -> bool {
        self.lines.values().any(|e| e.line.word() == Word::End)
    }

    pub fn get(&self, number: u32) -> Option<&Entry> {
        self.lines.get(&number)
    }

    pub fn get_mut(&mut self, number: u32) -> Option<&mut Entry> {
        self.lines.get_mut(&number)
    }

    pub fn entries(&self) -> Values<'_, u32, Entry> {
        self.lines.values()
    }

    pub fn first(&self) -> Option<u32> {
        self.lines.keys().next().copied()
    }

    pub fn next_after(&self, number: u32) -> Option<u32> {
        self.lines
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    /// Inserts or replaces a line. A replaced line starts with fresh counters.
    pub fn insert(&mut self, line: Line) -> Result<(), Error> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InvalidLineNumber; "DIRECT STATEMENT IN PROGRAM")),
        };
        self.lines.insert(number, Entry::new(line));
        Ok(())
    }

    pub fn remove(&mut self, number: u32) -> Result<Line, Error> {
        match self.lines.remove(&number) {
            Some(entry) => Ok(entry.line),
            None => Err(error!(UndefinedLine, Some(number); "NO SUCH LINE TO DELETE")),
        }
    }

    pub fn reset_statistics(&mut self) {
        for entry in self.lines.values_mut() {
            entry.stats = Stats::default();
        }
    }

    /// Replaces the program with `text`. Line numbers must strictly increase
    /// and some line must be an END. On failure the program is unchanged.
    pub fn load(&mut self, text: &str) -> Result<(), Error> {
        let mut lines: BTreeMap<u32, Entry> = BTreeMap::new();
        let mut last: Option<u32> = None;
        for (index, s) in text.lines().enumerate() {
            let s = s.trim_start();
            if s.is_empty() {
                continue;
            }
            if !s.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(error!(InvalidLineNumber;
                    format!("MISSING LINE NUMBER IN LINE {} OF THE TEXT", index + 1)));
            }
            let (number, body) = Line::split(s)?;
            let number = match number {
                Some(number) => number,
                None => return Err(error!(InvalidLineNumber)),
            };
            if let Some(last) = last {
                if number <= last {
                    return Err(error!(InvalidLineNumber, Some(number);
                        format!("LINE NUMBER MUST BE GREATER THAN {}", last)));
                }
            }
            last = Some(number);
            let line = Line::new(Some(number), body)?;
            lines.insert(number, Entry::new(line));
        }
        let program = Program { lines };
        if !program.has_end() {
            return Err(error!(MissingEnd; "PROGRAM HAS NO END STATEMENT"));
        }
        debug!("loaded {} lines", program.len());
        *self = program;
        Ok(())
    }

    /// The source text, one line per statement.
    pub fn list(&self) -> String {
        self.lines
            .values()
            .map(|e| format!("{}\n", e.line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_load_and_order() {
        let mut p = Program::new();
        p.load("\n  10 REM HI\n\n20 GOTO 40\n40 END\n").unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.first(), Some(10));
        assert_eq!(p.next_after(10), Some(20));
        assert_eq!(p.next_after(20), Some(40));
        assert_eq!(p.next_after(40), None);
        assert_eq!(p.next_after(15), Some(20));
        assert_eq!(p.list(), "10 REM HI\n20 GOTO 40\n40 END\n");
    }

    #[test]
    fn test_load_missing_end() {
        let mut p = Program::new();
        let e = p.load("10 PRINT 1\n20 PRINT 2\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::MissingEnd);
        assert_eq!(e.line_number(), None);
        assert!(p.is_empty());
    }

    #[test]
    fn test_load_decreasing() {
        let mut p = Program::new();
        let e = p.load("20 PRINT 1\n10 END\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidLineNumber);
        assert_eq!(e.line_number(), Some(10));
        let e = p.load("10 PRINT 1\n10 END\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidLineNumber);
    }

    #[test]
    fn test_load_bad_lines() {
        let mut p = Program::new();
        let e = p.load("PRINT 1\n10 END\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidLineNumber);
        let e = p.load("10\n20 END\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidExpression);
        let e = p.load("10 JUMP 20\n20 END\n").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidExpression);
        assert_eq!(e.line_number(), Some(10));
    }

    #[test]
    fn test_failed_load_keeps_program() {
        let mut p = Program::new();
        p.load("10 END").unwrap();
        assert!(p.load("10 PRINT 1").is_err());
        assert_eq!(p.list(), "10 END\n");
    }

    #[test]
    fn test_remove() {
        let mut p = Program::new();
        p.load("10 PRINT 1\n20 END").unwrap();
        assert!(p.remove(10).is_ok());
        let e = p.remove(10).unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLine);
        assert_eq!(e.line_number(), Some(10));
    }
}
