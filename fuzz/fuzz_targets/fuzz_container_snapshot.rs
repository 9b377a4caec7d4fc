#![no_main]

use imagcdf::container::FileContainer;
use imagcdf::dataset::read_dataset;
use imagcdf::validator::validate_container;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail with an error, never panic
    let Ok(mut container) = FileContainer::parse_snapshot(data) else {
        return;
    };

    // A decodable snapshot can still hold anything: the schema layer has to
    // reject it gracefully too
    let _ = read_dataset(&mut container);
    let _ = validate_container(&mut container, "fuzz");
});
