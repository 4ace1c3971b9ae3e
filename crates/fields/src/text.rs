//! Decoding of raw field-value bytes into text.
//!
//! Header values arrive as arbitrary captured bytes; a dissector must be
//! able to render every one of them. Each byte therefore maps to the
//! Unicode code point of equal value (ISO-8859-1), which is deterministic,
//! total, and reversible for the ASCII values the grammars actually accept.

/// Decodes raw field-value bytes into text, one byte per character.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode(b"gzip, chunked"), "gzip, chunked");
    }

    #[test]
    fn empty_input_decodes_to_empty_string() {
        assert_eq!(decode(b""), "");
    }

    #[test]
    fn high_bytes_map_to_latin1() {
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xe9]), "caf\u{e9}");
    }
}
