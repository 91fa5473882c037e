// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Safeintake Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;
use safeintake_core::validate::validate_api_url;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(url) = validate_api_url(s, false)
    {
        assert_eq!(url.scheme(), "https");
        assert!(url.password().is_none());
    }
});
