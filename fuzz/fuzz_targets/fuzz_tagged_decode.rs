#![no_main]
use jsonsafe::{Options, from_tagged_str, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        for opts in [Options::default(), Options::strict()] {
            if let Ok(v) = from_tagged_str(s, &opts) {
                let safe = normalize(&v);
                assert!(safe.is_json_safe());
                assert_eq!(normalize(&safe), safe);
            }
        }
    }
});
