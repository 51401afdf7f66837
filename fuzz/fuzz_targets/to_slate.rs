// SPDX-License-Identifier: AGPL-3.0-or-later
//! Feed arbitrary JSON documents through the converter. Conversion may
//! reject unknown node types but must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richtext_slate::{to_slate_document, SchemaJson};
use richtext_types::Document;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = serde_json::from_str::<Document>(text) else {
        return;
    };

    let schema: SchemaJson = serde_json::from_str(text).unwrap_or_default();
    let _ = to_slate_document(&document, None);
    let _ = to_slate_document(&document, Some(schema));
});
