#![no_main]

use kardoo::config::AppConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must fail cleanly, and anything that decodes
    // must encode again
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            let _json = serde_json::to_string_pretty(&config);
        }
    }
});
