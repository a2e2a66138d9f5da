mod common;
use basic::lang::ErrorCode;
use basic::mach::{Event, Runtime};
use common::*;

#[test]
fn test_let_and_print() {
    assert_eq!(exec("10 LET A = 5\n20 PRINT A\n30 END"), "5\n");
}

#[test]
fn test_print_syntax_tree() {
    let mut r = Runtime::default();
    r.load("10 LET A = 5\n20 PRINT A\n30 END").unwrap();
    let tree = r.syntax_tree().unwrap();
    assert!(tree.contains("20 PRINT\n    A\n"));
}

#[test]
fn test_rem_does_nothing() {
    assert_eq!(exec("10 REM PRINT 1\n20 PRINT 2\n30 END"), "2\n");
}

#[test]
fn test_goto() {
    assert_eq!(
        exec("10 GOTO 30\n20 PRINT 1\n30 PRINT 2\n40 END\n"),
        "2\n"
    );
}

#[test]
fn test_goto_undefined() {
    assert_eq!(
        exec("10 GOTO 99\n20 END\n"),
        "UNDEFINED LINE IN 10; LINE 99 DOES NOT EXIST\n"
    );
}

#[test]
fn test_let_errors() {
    assert_eq!(
        exec("10 LET A 5\n20 END"),
        "MISSING OPERATOR IN 10; EXPECTED =\n"
    );
    assert_eq!(
        exec("10 LET = 5\n20 END"),
        "MISSING OPERAND IN 10; MISSING VARIABLE BEFORE =\n"
    );
    assert_eq!(
        exec("10 LET A =\n20 END"),
        "MISSING OPERAND IN 10; MISSING EXPRESSION AFTER =\n"
    );
    assert_eq!(
        exec("10 LET 2A = 5\n20 END"),
        "SYNTAX ERROR IN 10 (4..6); INVALID VARIABLE NAME\n"
    );
}

#[test]
fn test_print_needs_expression() {
    let mut r = Runtime::default();
    r.load("10 PRINT\n20 END").unwrap();
    let error = r.run().unwrap_err();
    assert_eq!(error.code(), Some(ErrorCode::MissingOperand));
    assert_eq!(error.line_number(), Some(10));
}

#[test]
fn test_direct_mode() {
    let mut r = Runtime::default();
    assert_eq!(r.enter("LET X = 6"), Ok(Event::Stopped));
    assert_eq!(r.enter("PRINT X * 7"), Ok(Event::Stopped));
    assert_eq!(r.output(), "42\n");
    let error = r.enter("GOTO 10").unwrap_err();
    assert_eq!(error.code(), Some(ErrorCode::SyntaxError));
    assert_eq!(error.line_number(), None);
    assert_eq!(error.to_string(), "SYNTAX ERROR; ILLEGAL DIRECT");
}

#[test]
fn test_direct_input() {
    let mut r = Runtime::default();
    assert_eq!(r.enter("INPUT N"), Ok(Event::Input("N".into())));
    assert_eq!(drive(&mut r, &["-4"]), "N? -4\n");
    r.enter("PRINT N").unwrap();
    assert_eq!(r.output(), "-4\n");
}

#[test]
fn test_unknown_keyword() {
    let mut r = Runtime::default();
    let error = r.enter("10 GOSUB 20").unwrap_err();
    assert_eq!(error.code(), Some(ErrorCode::InvalidExpression));
    assert_eq!(error.line_number(), Some(10));
    assert!(r.program().is_empty());
}

#[test]
fn test_keywords_are_upper_case() {
    let mut r = Runtime::default();
    let error = r.enter("print 1").unwrap_err();
    assert_eq!(error.code(), Some(ErrorCode::InvalidExpression));
}
