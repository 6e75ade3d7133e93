use super::*;

mod for_test;
mod listing_test;

fn exec(runtime: &mut Runtime<Transcript, MemoryStorage>, lines: &[&str]) -> String {
    for line in lines {
        runtime.enter(line);
    }
    runtime.display_mut().take_output()
}
