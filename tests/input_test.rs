mod common;
use basic::mach::{Event, Runtime};
use common::*;

#[test]
fn test_input() {
    assert_eq!(
        exec_with_input("10 INPUT A\n20 INPUT B\n30 PRINT A + B\n40 END\n", &["2", "40"]),
        "A? 2\nB? 40\n42\n"
    );
}

#[test]
fn test_input_waits() {
    assert_eq!(exec("10 INPUT A\n20 END\n"), "A? ");
}

#[test]
fn test_input_counts_as_use() {
    let mut r = Runtime::default();
    r.load("10 INPUT A\n20 END\n").unwrap();
    r.run_with_input(|_| "5".to_string()).unwrap();
    assert_eq!(r.variables().get("A").map(|v| (v.value, v.usage_count)), Some((5, 1)));
}

#[test]
fn test_run_with_input_sees_names() {
    let mut r = Runtime::default();
    r.load("10 INPUT X\n20 INPUT Y\n30 PRINT X * Y\n40 END\n")
        .unwrap();
    let mut asked = vec![];
    r.run_with_input(|name| {
        asked.push(name.to_string());
        "3".to_string()
    })
    .unwrap();
    assert_eq!(asked, vec!["X", "Y"]);
    assert_eq!(r.output(), "9\n");
}

#[test]
fn test_bad_input() {
    assert_eq!(
        exec_with_input("10 INPUT A\n20 END\n", &["1.5"]),
        "A? 1.5\nINVALID NUMBER IN 10; \"1.5\"\n"
    );
    assert_eq!(
        exec_with_input("10 INPUT A\n20 END\n", &["3000000000"]),
        "A? 3000000000\nNUMBER OUT OF RANGE IN 10; \"3000000000\"\n"
    );
}

#[test]
fn test_interrupt_input() {
    let mut r = Runtime::default();
    r.load("10 INPUT A\n20 PRINT 1\n30 END\n").unwrap();
    assert_eq!(r.run(), Ok(Event::Input("A".into())));
    r.interrupt();
    r.provide_input("7");
    assert_eq!(r.resume(), Ok(Event::Stopped));
    assert_eq!(r.output(), "");
}
