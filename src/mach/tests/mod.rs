use super::*;


fn load(text: &str) -> Runtime {
    let mut r = Runtime::default();
    r.load(text).unwrap();
    r
}

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    runtime.start();
    loop {
        let event = runtime.execute(cycles);
        s.push_str(&runtime.take_output());
        let event = match event {
            Ok(event) => event,
            Err(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        };
        match event {
            Event::Stopped => break,
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
                prev_running = true;
                continue;
            }
            Event::Input(name) => {
                s.push_str(&format!("{}? ", name));
                break;
            }
        }
    }
    s
}
