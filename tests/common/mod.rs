#![allow(dead_code)]
use basic::mach::{Event, Runtime};

/// Loads `program` and runs it to completion.
pub fn exec(program: &str) -> String {
    exec_with_input(program, &[])
}

/// Loads and runs `program`, answering INPUT from `inputs` in order.
/// Errors are appended to the output the way the terminal prints them.
pub fn exec_with_input(program: &str, inputs: &[&str]) -> String {
    let mut r = Runtime::default();
    if let Err(error) = r.load(program) {
        return format!("{}\n", error);
    }
    r.start();
    drive(&mut r, inputs)
}

/// Continues whatever `runtime` is doing until it stops.
pub fn drive(runtime: &mut Runtime, inputs: &[&str]) -> String {
    let mut s = String::new();
    let mut inputs = inputs.iter();
    loop {
        let event = runtime.execute(5000);
        s.push_str(&runtime.take_output());
        match event {
            Ok(Event::Stopped) => break,
            Ok(Event::Running) => {
                s.push_str("\n5000 Execution cycles exceeded.\n");
                break;
            }
            Ok(Event::Input(name)) => match inputs.next() {
                Some(text) => {
                    s.push_str(&format!("{}? {}\n", name, text));
                    runtime.provide_input(text);
                }
                None => {
                    s.push_str(&format!("{}? ", name));
                    break;
                }
            },
            Err(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        }
    }
    s
}
