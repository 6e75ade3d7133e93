use basic::mach::{MemoryStorage, Runtime, Transcript};

pub type Machine = Runtime<Transcript, MemoryStorage>;

/// Everything shown since the last call.
pub fn exec(runtime: &mut Machine) -> String {
    runtime.display_mut().take_output()
}

pub fn enter_all(runtime: &mut Machine, lines: &[&str]) {
    for line in lines {
        runtime.enter(line);
    }
}
