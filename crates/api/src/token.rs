// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reversible obfuscation of the stored directory access token.
//!
//! This is NOT encryption. It keeps the token from being readable at a
//! glance in configuration files and nothing more; anyone with this source
//! can reverse it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const OBFUSCATION_KEY: &[u8] = b"staffsync-directory-token";

/// Obfuscates `token` for storage.
#[must_use]
pub fn obfuscate(token: &str) -> String {
    STANDARD.encode(xor_with_key(token.as_bytes()))
}

/// Recovers a token stored with [`obfuscate`].
///
/// Returns an empty string when `stored` is not valid base64 or does not
/// decode to UTF-8, so a corrupt value reads as "no token configured".
#[must_use]
pub fn deobfuscate(stored: &str) -> String {
    STANDARD
        .decode(stored.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(xor_with_key(&bytes)).ok())
        .unwrap_or_default()
}

fn xor_with_key(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .zip(OBFUSCATION_KEY.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect()
}
