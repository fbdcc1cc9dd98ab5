/// Decode bytes as UTF-8, replacing invalid sequences with U+FFFD.
pub fn decode_plain_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8() {
        assert_eq!(decode_plain_text("¿Dónde está?".as_bytes()), "¿Dónde está?");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let text = decode_plain_text(&[b'o', b'k', 0xFF, b'!']);
        assert_eq!(text, "ok\u{FFFD}!");
    }
}
