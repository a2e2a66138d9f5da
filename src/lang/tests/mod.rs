use super::ast::*;
use super::*;

mod line_test;

fn line(s: &str) -> Line {
    match s.parse::<Line>() {
        Ok(line) => line,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn parse_str(s: &str) -> Statement {
    match parse(&line(s)) {
        Ok(statement) => statement,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

fn parse_err(s: &str) -> Failure {
    match parse(&line(s)) {
        Ok(statement) => panic!("parsed {:?}", statement),
        Err(e) => e,
    }
}
