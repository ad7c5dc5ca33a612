use crate::app::ports::RandomSource;
use crate::error::{PipelineError, Result};
use serde::{Serialize, Serializer};

const QUANTUM_MIN: f64 = 0.1;
const QUANTUM_MAX: f64 = 9.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BinaryStats {
    pub ones: usize,
    pub zeros: usize,
    /// `ones / zeros`, infinite when there are no zeros.
    #[serde(serialize_with = "serialize_ratio")]
    pub ratio: f64,
    /// Flavor only. Nothing downstream reads it.
    pub quantum_complexity: f64,
}

// JSON has no infinity literal
fn serialize_ratio<S: Serializer>(ratio: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if ratio.is_infinite() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_f64(*ratio)
    }
}

/// Eight zero-padded bits per character. Code points above 0xFF keep only
/// their low byte, same as the hex step.
pub fn text_to_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", u32::from(c) & 0xFF))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn binary_stats(binary: &str, rng: &dyn RandomSource) -> BinaryStats {
    let ones = binary.chars().filter(|&c| c == '1').count();
    let zeros = binary.chars().filter(|&c| c == '0').count();
    let ratio = if zeros > 0 {
        ones as f64 / zeros as f64
    } else {
        f64::INFINITY
    };

    BinaryStats {
        ones,
        zeros,
        ratio,
        quantum_complexity: QUANTUM_MIN + (QUANTUM_MAX - QUANTUM_MIN) * rng.next(),
    }
}

pub fn binary_to_text(binary: &str) -> Result<String> {
    binary
        .split_whitespace()
        .map(|token| {
            let value = u32::from_str_radix(token, 2).map_err(|_| PipelineError::InvalidBinary {
                token: token.to_string(),
            })?;
            char::from_u32(value).ok_or(PipelineError::InvalidCodePoint(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::random::FixedRandom;

    #[test]
    fn encodes_eight_bits_per_char() {
        assert_eq!(text_to_binary("L?"), "01001100 00111111");
    }

    #[test]
    fn truncates_wide_code_points() {
        assert_eq!(text_to_binary("ő"), "01010001");
    }

    #[test]
    fn balanced_stats() {
        let stats = binary_stats("1010", &FixedRandom::new(0.0));
        assert_eq!(stats.ones, 2);
        assert_eq!(stats.zeros, 2);
        assert_eq!(stats.ratio, 1.0);
        assert!((stats.quantum_complexity - 0.1).abs() < 1e-9);
    }

    #[test]
    fn all_ones_ratio_is_infinite() {
        let stats = binary_stats("1111", &FixedRandom::new(0.5));
        assert_eq!(stats.ones, 4);
        assert_eq!(stats.zeros, 0);
        assert!(stats.ratio.is_infinite() && stats.ratio > 0.0);

        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["ratio"], "Infinity");
    }

    #[test]
    fn quantum_complexity_stays_in_range() {
        let stats = binary_stats("10", &FixedRandom::new(0.999_999));
        assert!(stats.quantum_complexity >= 0.1 && stats.quantum_complexity < 9.9);
    }

    #[test]
    fn decodes_and_rejects() {
        assert_eq!(binary_to_text(&text_to_binary("LUMIERE")).unwrap(), "LUMIERE");
        assert!(matches!(
            binary_to_text("0100 0102"),
            Err(PipelineError::InvalidBinary { .. })
        ));
    }
}
