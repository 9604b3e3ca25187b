#![no_main]

use exevup_version::{Notation, Version};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(version) = Version::parse(data) {
        assert_eq!(Version::parse(&version.render(Notation::Detail)), Ok(version));
    }
});
