//! # GOTO BASIC
//!
//! A line numbered BASIC with integers, variables, and not much else.
//! Control flow is `GOTO` and `IF ... THEN <line>`.
//!
//! Begin by opening a terminal and running the executable. If you get the
//! following, you have achieved success.
//! ```text
//! GOTO BASIC
//! READY.
//! █
//! ```
//!
//! A program file can be named on the command line. `basic --run demo.bas`
//! loads it and runs it straight away.
//!
//! The interpreter is also a library. [`mach::Runtime`] holds a program
//! and runs it a slice at a time; INPUT suspends the run until the host
//! answers.
//! ```
//! use basic::mach::Runtime;
//! let mut runtime = Runtime::new();
//! runtime.load("10 INPUT N\n20 PRINT N * N\n30 END").unwrap();
//! runtime.run_with_input(|_| "12".to_string()).unwrap();
//! assert_eq!(runtime.output(), "144\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
