//! Windows-1252 text I/O.

use anyhow::{bail, Result};
use encoding_rs::WINDOWS_1252;

/// Bytes Windows-1252 leaves unassigned. A file containing any of them is
/// not treated as Windows-1252 text.
const UNDEFINED_BYTES: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decode `bytes` as Windows-1252, or `None` if they are not valid in it.
pub fn decode_legacy(bytes: &[u8]) -> Option<String> {
    if bytes.iter().any(|b| UNDEFINED_BYTES.contains(b)) {
        return None;
    }
    let (text, had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
    if had_errors {
        return None;
    }
    Some(text.into_owned())
}

/// Encode `text` as Windows-1252. Characters outside the code page are an error.
pub fn encode_legacy(text: &str) -> Result<Vec<u8>> {
    let (bytes, _, had_errors) = WINDOWS_1252.encode(text);
    if had_errors {
        bail!("text contains characters outside Windows-1252");
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_high_bytes() {
        // 0xE9 = é, 0x80 = €, 0xA7 = §
        assert_eq!(
            decode_legacy(b"caf\xE9 \x80 \xA7").as_deref(),
            Some("caf\u{e9} \u{20ac} \u{a7}")
        );
    }

    #[test]
    fn rejects_undefined_bytes() {
        for b in UNDEFINED_BYTES {
            assert_eq!(decode_legacy(&[b'a', b, b'z']), None);
        }
    }

    #[test]
    fn bom_bytes_are_text() {
        let decoded = decode_legacy(b"\xEF\xBB\xBFx").unwrap();
        assert_eq!(decoded.chars().count(), 4);
    }

    #[test]
    fn encode_roundtrips_decoded_text() {
        let bytes = b"// \xA9 1998\r\nint x;\r\n".to_vec();
        let text = decode_legacy(&bytes).unwrap();
        assert_eq!(encode_legacy(&text).unwrap(), bytes);
    }

    #[test]
    fn encode_rejects_unmappable() {
        assert!(encode_legacy("\u{4e2d}").is_err());
    }
}
