use base64::Engine;
use sha2::{Digest, Sha512};

/// Derives the preview key for a security key.
///
/// The string `-1_<secret>_Preview` is encoded as one byte per UTF-16 code
/// unit (its low byte) followed by a zero byte, hashed with SHA-512, and
/// returned as standard padded base64.
pub fn generate_preview_key(security_key: &str) -> String {
    let input = format!("-1_{security_key}_Preview");

    let bytes: Vec<u8> = input
        .encode_utf16()
        .flat_map(|unit| [(unit & 0xff) as u8, 0])
        .collect();

    let digest = Sha512::digest(&bytes);
    base64::engine::general_purpose::STANDARD.encode(digest)
}
