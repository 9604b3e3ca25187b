#![no_main]

use exevup_info::{Level, Notation, Target, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(record) = parse(data) {
        let _bumped = record.bumped(Level::Patch, Target::Both, Notation::Detail);
    }
});
