/*!
## Rust Machine Module

This Rust module holds a program's numbered lines and variables and runs
them. Control moves line to line in ascending order until a GOTO or a
taken IF moves the cursor elsewhere.

*/

mod eval;
mod operation;
mod program;
mod runtime;
mod tree;
mod var;

pub use eval::evaluate;
pub use operation::Operation;
pub use program::Entry;
pub use program::Program;
pub use program::Stats;
pub use runtime::Event;
pub use runtime::Runtime;
pub use tree::Tree;
pub use var::Var;
pub use var::VariableInfo;

#[cfg(test)]
mod tests;
