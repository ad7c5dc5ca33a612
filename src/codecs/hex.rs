use crate::error::{PipelineError, Result};

/// Two uppercase hex digits per character. Code points above 0xFF keep only
/// their low byte.
pub fn text_to_hex(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:02X}", u32::from(c) & 0xFF))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn hex_to_text(hex: &str) -> Result<String> {
    hex.split_whitespace()
        .map(|token| {
            let value = u32::from_str_radix(token, 16).map_err(|_| PipelineError::InvalidHex {
                token: token.to_string(),
            })?;
            char::from_u32(value).ok_or(PipelineError::InvalidCodePoint(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_as_padded_uppercase_bytes() {
        assert_eq!(text_to_hex("L\n"), "4C 0A");
        assert_eq!(text_to_hex(""), "");
    }

    #[test]
    fn truncates_wide_code_points_to_low_byte() {
        // U+0151 -> 0x51 ('Q')
        assert_eq!(text_to_hex("ő"), "51");
        assert_eq!(hex_to_text(&text_to_hex("ő")).unwrap(), "Q");
    }

    #[test]
    fn round_trips_latin1() {
        let text = "Lumière, ça va?";
        assert_eq!(hex_to_text(&text_to_hex(text)).unwrap(), text);
    }

    #[test]
    fn rejects_invalid_tokens() {
        let err = hex_to_text("4C ZZ").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidHex { ref token } if token == "ZZ"));
    }
}
