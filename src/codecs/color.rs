use crate::constants::{HAIKU_BALANCED, HAIKU_BRIGHT, HAIKU_DARK};
use crate::error::{PipelineError, Result};

const TOKENS_PER_COLOR: usize = 3;
const COLOR_DIGITS: usize = 6;

/// Groups hex tokens three at a time into `#RRGGBB` codes. A short trailing
/// group is right-padded with zeros.
pub fn hex_to_colors(hex: &str) -> Vec<String> {
    let tokens: Vec<&str> = hex.split_whitespace().collect();
    tokens
        .chunks(TOKENS_PER_COLOR)
        .map(|group| {
            let digits: String = group
                .concat()
                .chars()
                .chain(std::iter::repeat('0'))
                .take(COLOR_DIGITS)
                .collect();
            format!("#{digits}")
        })
        .collect()
}

/// Mean brightness of the colors mapped onto [-1, 1]. No colors means 0.
pub fn color_to_sentiment(colors: &[String]) -> Result<f64> {
    if colors.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for color in colors {
        let brightness = (channel(color, 1)? + channel(color, 3)? + channel(color, 5)?) / 3.0;
        total += (brightness - 127.5) / 127.5;
    }
    Ok(total / colors.len() as f64)
}

fn channel(color: &str, start: usize) -> Result<f64> {
    let digits = color.get(start..start + 2).unwrap_or_default();
    u8::from_str_radix(digits, 16)
        .map(f64::from)
        .map_err(|_| PipelineError::InvalidHex {
            token: color.to_string(),
        })
}

pub fn generate_haiku(sentiment: f64) -> &'static str {
    if sentiment > 0.2 {
        HAIKU_BRIGHT
    } else if sentiment > -0.2 {
        HAIKU_BALANCED
    } else {
        HAIKU_DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_tokens_in_threes_and_pads_tail() {
        assert_eq!(
            hex_to_colors("4C 55 4D 49 45"),
            vec!["#4C554D".to_string(), "#494500".to_string()]
        );
        assert_eq!(hex_to_colors("4C"), vec!["#4C0000".to_string()]);
    }

    #[test]
    fn empty_stream_yields_no_colors() {
        assert!(hex_to_colors("").is_empty());
    }

    #[test]
    fn brightness_extremes() {
        assert_eq!(color_to_sentiment(&[]).unwrap(), 0.0);
        assert_eq!(color_to_sentiment(&["#FFFFFF".to_string()]).unwrap(), 1.0);
        assert_eq!(color_to_sentiment(&["#000000".to_string()]).unwrap(), -1.0);
    }

    #[test]
    fn averages_over_colors() {
        let colors = vec!["#FFFFFF".to_string(), "#000000".to_string()];
        assert_eq!(color_to_sentiment(&colors).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_hex_color() {
        assert!(color_to_sentiment(&["#GG0000".to_string()]).is_err());
    }

    #[test]
    fn haiku_thresholds() {
        assert_eq!(generate_haiku(0.5), HAIKU_BRIGHT);
        assert_eq!(generate_haiku(0.2), HAIKU_BALANCED);
        assert_eq!(generate_haiku(0.0), HAIKU_BALANCED);
        assert_eq!(generate_haiku(-0.2), HAIKU_DARK);
        assert_eq!(generate_haiku(-0.5), HAIKU_DARK);
    }
}
