use super::{evaluate, Program, Stats, Tree, Var};
use crate::error;
use crate::lang::ast::{Ident, Statement};
use crate::lang::{parse, Error, Failure, Line, LineNumber, NumberError};
use log::{debug, trace, warn};
use std::collections::BTreeMap;

/// ## What the host sees after a slice of execution

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Nothing is running. The host may edit, list or start a run.
    Stopped,
    /// The cycle budget ran out. Call `execute` again.
    Running,
    /// An INPUT statement wants a value for the named variable.
    /// Deliver it with `provide_input` and continue with `resume`.
    Input(Ident),
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Halted,
    Running(u32),
    Input(LineNumber, Ident),
}

/// Outcome of one statement, turned into the next `State` by `step`.
enum Flow {
    Next,
    Jump(u32),
    Halt,
    Input(Ident),
}

/// ## Program store plus the machine that runs it

#[derive(Debug, Default)]
pub struct Runtime {
    program: Program,
    var: Var,
    state: State,
    input: Option<String>,
    output: String,
}

impl Default for State {
    fn default() -> State {
        State::Halted
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    /// Drops every line, variable and buffer.
    pub fn clear(&mut self) {
        debug!("clear");
        self.program.clear();
        self.reset();
    }

    fn reset(&mut self) {
        self.var.clear();
        self.state = State::Halted;
        self.input = None;
        self.output.clear();
    }

    /// Replaces the program. On failure the previous program is kept.
    pub fn load(&mut self, text: &str) -> Result<(), Error> {
        self.program.load(text)?;
        self.reset();
        Ok(())
    }

    /// Replaces line `number` with `body`, or deletes it when `body` is blank.
    pub fn edit_line(&mut self, number: u32, body: &str) -> Result<(), Error> {
        if body.trim().is_empty() {
            return self.delete_line(number);
        }
        let line = Line::new(Some(number), body)?;
        debug!("edit line {}", number);
        self.halt();
        self.program.insert(line)
    }

    /// Removes line `number`. Jumps to it are not checked until they run.
    pub fn delete_line(&mut self, number: u32) -> Result<(), Error> {
        self.program.remove(number)?;
        debug!("delete line {}", number);
        self.halt();
        Ok(())
    }

    /// Accepts one line of text as typed at the prompt.
    ///
    /// `20 PRINT A` stores a line, `20` alone deletes it, and text without
    /// a line number is executed right away.
    pub fn enter(&mut self, text: &str) -> Result<Event, Failure> {
        match Line::split(text)? {
            (Some(number), body) => {
                self.edit_line(number, body)?;
                Ok(Event::Stopped)
            }
            (None, "") => Ok(Event::Stopped),
            (None, body) => self.direct(body),
        }
    }

    fn direct(&mut self, body: &str) -> Result<Event, Failure> {
        let line = Line::new(None, body)?;
        let statement = parse(&line)?;
        match statement {
            Statement::Let(..) | Statement::Print(..) | Statement::Input(..) => {}
            _ => return Err(error!(SyntaxError; "ILLEGAL DIRECT").into()),
        }
        self.halt();
        match self.perform(&statement)? {
            Flow::Input(ident) => {
                self.state = State::Input(None, ident.clone());
                Ok(Event::Input(ident))
            }
            _ => Ok(Event::Stopped),
        }
    }

    /// Clears variables, buffers and statistics and points the cursor at the
    /// lowest line. Nothing executes until `execute` or `resume`.
    pub fn start(&mut self) {
        self.reset();
        self.program.reset_statistics();
        debug!("run");
        if let Some(first) = self.program.first() {
            self.state = State::Running(first);
        }
    }

    /// A complete run up to END, an error, or the first INPUT.
    pub fn run(&mut self) -> Result<Event, Failure> {
        self.start();
        self.resume()
    }

    /// Continues until the program stops or waits for input.
    pub fn resume(&mut self) -> Result<Event, Failure> {
        loop {
            match self.execute(usize::max_value())? {
                Event::Running => continue,
                event => return Ok(event),
            }
        }
    }

    /// Runs at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Result<Event, Failure> {
        let mut remaining = cycles;
        loop {
            let result = match self.state.clone() {
                State::Halted => return Ok(Event::Stopped),
                State::Input(line_number, ident) => match self.input.take() {
                    Some(text) => self.accept_input(line_number, &ident, &text),
                    None => return Ok(Event::Input(ident)),
                },
                State::Running(number) => {
                    if remaining == 0 {
                        return Ok(Event::Running);
                    }
                    remaining -= 1;
                    self.step(number)
                }
            };
            if let Err(error) = result {
                self.halt();
                return Err(error);
            }
        }
    }

    fn step(&mut self, number: u32) -> Result<(), Failure> {
        let statement = match self.program.get(number) {
            Some(entry) => {
                trace!("{}", entry.line());
                parse(entry.line())?
            }
            None => return Err(error!(UndefinedLine, Some(number)).into()),
        };
        let flow = match self.perform(&statement) {
            Ok(flow) => flow,
            Err(error) => return Err(error.in_line_number(Some(number)).into()),
        };
        if let Some(entry) = self.program.get_mut(number) {
            let stats = entry.stats_mut();
            match (&statement, &flow) {
                (Statement::If(..), Flow::Jump(_)) => stats.taken += 1,
                (Statement::If(..), _) => stats.not_taken += 1,
                _ => stats.runs += 1,
            }
            entry.set_statement(statement);
        }
        self.state = match flow {
            Flow::Jump(target) if target != number => {
                debug!("jump from {} to {}", number, target);
                State::Running(target)
            }
            Flow::Next | Flow::Jump(_) => self.next_state(number),
            Flow::Halt => State::Halted,
            Flow::Input(ident) => State::Input(Some(number), ident),
        };
        Ok(())
    }

    fn next_state(&self, number: u32) -> State {
        match self.program.next_after(number) {
            Some(next) => State::Running(next),
            None => State::Halted,
        }
    }

    /// Checks, declares and executes one parsed statement.
    fn perform(&mut self, statement: &Statement) -> Result<Flow, Error> {
        if let Some(target) = statement.target() {
            if !self.program.contains(target) {
                return Err(error!(UndefinedLine; format!("LINE {} DOES NOT EXIST", target)));
            }
        }
        if let Some(ident) = statement.declares() {
            self.var.declare(ident);
        }
        match statement {
            Statement::Rem(_) => Ok(Flow::Next),
            Statement::Let(_, ident, expr) => {
                let value = evaluate(expr, &mut self.var)?;
                self.var.store(ident, value);
                Ok(Flow::Next)
            }
            Statement::If(lhs, cmp, rhs, target) => {
                let lhs = evaluate(lhs, &mut self.var)?;
                let rhs = evaluate(rhs, &mut self.var)?;
                if cmp.holds(lhs, rhs) {
                    Ok(Flow::Jump(*target))
                } else {
                    Ok(Flow::Next)
                }
            }
            Statement::Print(expr) => {
                let value = evaluate(expr, &mut self.var)?;
                self.output.push_str(&format!("{}\n", value));
                Ok(Flow::Next)
            }
            Statement::Input(_, ident) => Ok(Flow::Input(ident.clone())),
            Statement::Goto(target) => Ok(Flow::Jump(*target)),
            Statement::End => Ok(Flow::Halt),
        }
    }

    fn accept_input(
        &mut self,
        line_number: LineNumber,
        ident: &Ident,
        text: &str,
    ) -> Result<(), Failure> {
        let text = text.trim();
        let value = match text.parse::<i32>() {
            Ok(value) => value,
            Err(e) => return Err(NumberError::new(text, e).in_line_number(line_number).into()),
        };
        self.var.store_input(ident, value);
        self.state = match line_number {
            Some(number) => self.next_state(number),
            None => State::Halted,
        };
        Ok(())
    }

    /// Answers a pending INPUT. The text is converted when execution resumes.
    pub fn provide_input(&mut self, value: &str) {
        match self.state {
            State::Input(..) => self.input = Some(value.to_string()),
            _ => warn!("no INPUT pending, ignored {:?}", value),
        }
    }

    /// Runs the whole program, asking `input` for every INPUT value.
    pub fn run_with_input<F>(&mut self, mut input: F) -> Result<(), Failure>
    where
        F: FnMut(&str) -> String,
    {
        let mut event = self.run()?;
        while let Event::Input(ident) = event {
            let answer = input(&*ident);
            self.provide_input(&answer);
            event = self.resume()?;
        }
        Ok(())
    }

    /// Stops a running or waiting program.
    pub fn interrupt(&mut self) {
        if self.state != State::Halted {
            debug!("interrupted");
        }
        self.halt();
    }

    fn halt(&mut self) {
        self.state = State::Halted;
        self.input = None;
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Halted
    }

    /// The variable an INPUT is waiting on.
    pub fn pending_input(&self) -> Option<&Ident> {
        match &self.state {
            State::Input(_, ident) => Some(ident),
            _ => None,
        }
    }

    /// Everything printed since the last run, load or clear.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drains the output accumulator.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn variables(&self) -> &Var {
        &self.var
    }

    pub fn list(&self) -> String {
        self.program.list()
    }

    /// Line number to source text, for editing helpers.
    pub fn listing(&self) -> BTreeMap<u32, String> {
        self.program
            .entries()
            .filter_map(|entry| {
                let line = entry.line();
                line.number().map(|number| (number, line.to_string()))
            })
            .collect()
    }

    pub fn statistics(&self, number: u32) -> Option<Stats> {
        self.program.get(number).map(|entry| entry.stats())
    }

    pub fn syntax_tree(&self) -> Result<String, Failure> {
        self.render(false)
    }

    /// The syntax tree annotated with counters from the most recent run.
    pub fn syntax_tree_with_statistics(&self) -> Result<String, Failure> {
        self.render(true)
    }

    fn render(&self, with_statistics: bool) -> Result<String, Failure> {
        let mut s = String::new();
        for entry in self.program.entries() {
            let line = entry.line();
            let number = match line.number() {
                Some(number) => number,
                None => continue,
            };
            let statement = parse(line)?;
            if with_statistics {
                s.push_str(&Tree::statement_with_statistics(
                    number,
                    &statement,
                    entry.stats(),
                    &self.var,
                ));
            } else {
                s.push_str(&Tree::statement(number, &statement));
            }
        }
        Ok(s)
    }
}
