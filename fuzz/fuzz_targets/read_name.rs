// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Safeintake Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;
use safeintake_core::read_name;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = read_name(data, 100) {
        assert!(!name.is_empty());
        assert!(name.chars().count() <= 100);
        assert!(!name.contains(['\n', '\r', ';', '$', '`', '|', '&']));
    }
});
