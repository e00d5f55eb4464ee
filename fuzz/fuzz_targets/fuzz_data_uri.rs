#![no_main]

use kardoo::export::{decode_data_uri, detect_image_kind, strip_data_uri_prefix};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = std::str::from_utf8(data) {
        let _kind = detect_image_kind(payload);
        let _raw = strip_data_uri_prefix(payload);
        let _bytes = decode_data_uri(payload);
    }
});
