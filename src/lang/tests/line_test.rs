use super::*;

#[test]
fn test_split_line_number() {
    assert_eq!(Line::split("  10 PRINT A  ").unwrap(), (Some(10), "PRINT A"));
    assert_eq!(Line::split("20\tEND").unwrap(), (Some(20), "END"));
    assert_eq!(Line::split("30").unwrap(), (Some(30), ""));
}

#[test]
fn test_split_direct() {
    assert_eq!(Line::split("PRINT 1 + 2").unwrap(), (None, "PRINT 1 + 2"));
    assert_eq!(Line::split("").unwrap(), (None, ""));
}

#[test]
fn test_split_needs_space() {
    let e = Line::split("10PRINT A").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidLineNumber);
    assert_eq!(e.line_number(), Some(10));
}

#[test]
fn test_split_out_of_range() {
    let e = Line::split("99999999999 END").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidLineNumber);
}

#[test]
fn test_unknown_keyword() {
    let e = Line::new(Some(40), "FOO BAR").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidExpression);
    assert_eq!(e.line_number(), Some(40));
    assert_eq!(e.to_string(), "INVALID EXPRESSION IN 40; UNKNOWN STATEMENT");
}

#[test]
fn test_lowercase_keyword_is_unknown() {
    let e = Line::new(Some(10), "print 1").unwrap_err();
    assert_eq!(e.code(), ErrorCode::InvalidExpression);
}

#[test]
fn test_display() {
    assert_eq!(line("  10   LET A = 1").to_string(), "10 LET A = 1");
    assert_eq!(line("PRINT A").to_string(), "PRINT A");
}

#[test]
fn test_argument() {
    let l = line("10 GOTO 30");
    assert_eq!(l.word(), Word::Goto);
    assert_eq!(l.argument(), (4, " 30"));
}
