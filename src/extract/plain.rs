// Plain-text extraction — UTF-8 decode of the supplied bytes.

use crate::error::ExtractError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode raw bytes as UTF-8, dropping a leading byte-order mark if present.
pub fn read_text(name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|source| ExtractError::Decode {
            name: name.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8() {
        assert_eq!(read_text("a.txt", "héllo".as_bytes()).unwrap(), "héllo");
    }

    #[test]
    fn test_bom_is_stripped() {
        let bytes = [UTF8_BOM, b"hi there"].concat();
        assert_eq!(read_text("a.txt", &bytes).unwrap(), "hi there");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = read_text("bad.txt", &[0x66, 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, ExtractError::Decode { .. }));
        assert_eq!(err.document_name(), "bad.txt");
    }
}
