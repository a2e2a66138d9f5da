extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::lang::{Error, Failure};
use basic::mach::{Event, Runtime};
use linefeed::{
    Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal,
};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct Config {
    pub file: Option<PathBuf>,
    pub run: bool,
    pub cycles: usize,
}

const HELP: &str = "\
STATEMENTS
  REM <text>                       REMARK
  LET <var> = <expr>               ASSIGNMENT
  IF <expr> =|>|< <expr> THEN <n>  CONDITIONAL JUMP
  PRINT <expr>                     OUTPUT
  INPUT <var>                      READ A WHOLE NUMBER
  GOTO <n>                         JUMP
  END                              STOP THE PROGRAM
OPERATORS
  + - * / MOD **  AND PARENTHESES
COMMANDS
  RUN             RUN THE PROGRAM
  LOAD <file>     REPLACE THE PROGRAM WITH A FILE
  LIST            SHOW THE PROGRAM
  CLEAR           ERASE PROGRAM AND VARIABLES
  TREE            SHOW THE SYNTAX TREE
  STATS           SHOW THE SYNTAX TREE WITH COUNTS FROM THE LAST RUN
  VARS            SHOW VARIABLES AND HOW OFTEN THEY WERE USED
  HELP            SHOW THIS
  QUIT            EXIT
<n> <statement> STORES A LINE, <n> ALONE DELETES IT, <n> TAB EDITS IT.
";

pub fn main(config: Config) {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("CTRL-C will not interrupt programs: {}", error);
    }
    if let Err(error) = main_loop(config, interrupted) {
        eprintln!("{}", error);
    }
}

enum Outcome {
    Quiet,
    Ready,
    Quit,
}

fn main_loop(config: Config, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let mut runtime = Runtime::default();
    let command = Interface::new("BASIC")?;
    command.set_prompt("> ")?;
    let input = Interface::new("INPUT")?;
    input.set_report_signal(Signal::Interrupt, true);

    command.write_fmt(format_args!("GOTO BASIC\n"))?;
    if let Some(file) = &config.file {
        if load(&command, &mut runtime, file)? && config.run {
            runtime.start();
        }
    }

    let mut print_ready = true;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) && runtime.is_running() {
            runtime.interrupt();
            command.write_fmt(format_args!("{}\n", Style::new().bold().paint("BREAK")))?;
            print_ready = true;
        }
        let event = runtime.execute(config.cycles);
        let output = runtime.take_output();
        if !output.is_empty() {
            command.write_fmt(format_args!("{}", output))?;
        }
        match event {
            Err(error) => {
                print_failure(&command, &runtime, &error)?;
                print_ready = true;
            }
            Ok(Event::Running) => {}
            Ok(Event::Input(name)) => {
                input.set_prompt(&format!("{}? ", name))?;
                match input.read_line()? {
                    ReadResult::Input(string) => runtime.provide_input(&string),
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                        command
                            .write_fmt(format_args!("{}\n", Style::new().bold().paint("BREAK")))?;
                        print_ready = true;
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                }
            }
            Ok(Event::Stopped) => {
                if print_ready {
                    print_ready = false;
                    command.write_fmt(format_args!("READY.\n"))?;
                }
                let saved_completer = command.completer();
                command.set_completer(Arc::new(LineCompleter::new(runtime.listing())));
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.set_completer(saved_completer);
                if !string.trim().is_empty() {
                    command.add_history_unique(string.clone());
                }
                match dispatch(&command, &mut runtime, &string)? {
                    Outcome::Quiet => {}
                    Outcome::Ready => print_ready = true,
                    Outcome::Quit => break,
                }
            }
        }
    }
    Ok(())
}

fn dispatch(
    command: &Interface<DefaultTerminal>,
    runtime: &mut Runtime,
    string: &str,
) -> std::io::Result<Outcome> {
    let trimmed = string.trim();
    let (word, rest) = match trimmed.find(char::is_whitespace) {
        Some(pos) => (&trimmed[..pos], trimmed[pos..].trim()),
        None => (trimmed, ""),
    };
    match word.to_ascii_uppercase().as_str() {
        "RUN" if rest.is_empty() => runtime.start(),
        "LOAD" if !rest.is_empty() => {
            load(command, runtime, Path::new(rest))?;
        }
        "LIST" if rest.is_empty() => command.write_fmt(format_args!("{}", runtime.list()))?,
        "CLEAR" if rest.is_empty() => runtime.clear(),
        "TREE" if rest.is_empty() => match runtime.syntax_tree() {
            Ok(tree) => command.write_fmt(format_args!("{}", tree))?,
            Err(error) => print_failure(command, runtime, &error)?,
        },
        "STATS" if rest.is_empty() => match runtime.syntax_tree_with_statistics() {
            Ok(tree) => command.write_fmt(format_args!("{}", tree))?,
            Err(error) => print_failure(command, runtime, &error)?,
        },
        "VARS" if rest.is_empty() => {
            for (name, info) in runtime.variables().sorted() {
                command.write_fmt(format_args!(
                    "{} = {} ({} USES)\n",
                    name, info.value, info.usage_count
                ))?;
            }
        }
        "HELP" if rest.is_empty() => command.write_fmt(format_args!("{}", HELP))?,
        "QUIT" if rest.is_empty() => return Ok(Outcome::Quit),
        _ => {
            let direct = basic::lang::Line::split(trimmed)
                .map(|(number, _)| number.is_none())
                .unwrap_or(true);
            if let Err(error) = runtime.enter(trimmed) {
                print_failure(command, runtime, &error)?;
                return Ok(Outcome::Ready);
            }
            if !direct {
                return Ok(Outcome::Quiet);
            }
        }
    }
    Ok(Outcome::Ready)
}

fn load(
    command: &Interface<DefaultTerminal>,
    runtime: &mut Runtime,
    path: &Path,
) -> std::io::Result<bool> {
    debug!("loading {}", path.display());
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            command.write_fmt(format_args!("{}\n", Style::new().bold().paint(msg)))?;
            return Ok(false);
        }
    };
    match runtime.load(&text) {
        Ok(()) => Ok(true),
        Err(error) => {
            print_error(command, runtime, &error)?;
            Ok(false)
        }
    }
}

fn print_failure(
    command: &Interface<DefaultTerminal>,
    runtime: &Runtime,
    failure: &Failure,
) -> std::io::Result<()> {
    match failure {
        Failure::Error(error) => print_error(command, runtime, error),
        Failure::Number(_) => command.write_fmt(format_args!(
            "{}\n",
            Style::new().bold().paint(failure.to_string())
        )),
    }
}

/// Prints the error, then the offending line with the error's columns
/// underlined when there are any.
fn print_error(
    command: &Interface<DefaultTerminal>,
    runtime: &Runtime,
    error: &Error,
) -> std::io::Result<()> {
    command.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(error.to_string())
    ))?;
    let column = error.column();
    if column.start == column.end {
        return Ok(());
    }
    if let Some(number) = error.line_number() {
        if let Some(entry) = runtime.program().get(number) {
            let prefix = format!("{} ", number).len();
            let column = column.start + prefix..column.end + prefix;
            command.write_fmt(format_args!(
                "{}\n",
                decorate_list(&entry.line().to_string(), &[column])
            ))?;
        }
    }
    Ok(())
}

/// TAB after a bare line number replaces it with that line's text.
struct LineCompleter {
    listing: BTreeMap<u32, String>,
}

impl LineCompleter {
    fn new(listing: BTreeMap<u32, String>) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let number = prompter.buffer().trim().parse::<u32>().ok()?;
        let line = self.listing.get(&number)?;
        let mut comp = Completion::simple(line.clone());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

fn decorate_list(ins: &str, columns: &[std::ops::Range<usize>]) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for ch in ins.chars() {
        let do_under = columns.iter().any(|c| c.contains(&index));
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
        index += ch.len_utf8();
    }
    if columns.iter().any(|c| c.start == index) {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}
