use super::morse::SymbolTable;
use serde::Serialize;

/// Occurrences of each of the four Morse glyphs, keyed by the glyph itself
/// when serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmojiStats {
    #[serde(rename = "🔥")]
    pub fire: usize,
    #[serde(rename = "💧")]
    pub droplet: usize,
    #[serde(rename = "🚪")]
    pub door: usize,
    #[serde(rename = "🌊")]
    pub wave: usize,
}

pub fn morse_to_emoji(morse: &str) -> String {
    let table = SymbolTable::global();
    morse.chars().map(|c| table.to_emoji(c).unwrap_or(c)).collect()
}

pub fn emoji_stats(emojis: &str) -> EmojiStats {
    let mut stats = EmojiStats::default();
    for c in emojis.chars() {
        match c {
            '🔥' => stats.fire += 1,
            '💧' => stats.droplet += 1,
            '🚪' => stats.door += 1,
            '🌊' => stats.wave += 1,
            _ => {}
        }
    }
    stats
}

pub fn emoji_to_morse(emojis: &str) -> String {
    let table = SymbolTable::global();
    emojis.chars().map(|c| table.from_emoji(c).unwrap_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_each_morse_symbol() {
        assert_eq!(morse_to_emoji(".- / -"), "🔥💧🌊🚪🌊💧");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(morse_to_emoji("? ."), "?🌊🔥");
        assert_eq!(emoji_to_morse("x🔥"), "x.");
    }

    #[test]
    fn inverse_is_exact_for_morse_alphabet() {
        let morse = "... --- ... / .-.. ..- -- .. . .-. .";
        assert_eq!(emoji_to_morse(&morse_to_emoji(morse)), morse);
    }

    #[test]
    fn counts_glyphs() {
        let stats = emoji_stats(&morse_to_emoji(".- / -..."));
        assert_eq!(
            stats,
            EmojiStats { fire: 4, droplet: 2, door: 1, wave: 2 }
        );
    }

    #[test]
    fn stats_serialize_keyed_by_glyph() {
        let value = serde_json::to_value(emoji_stats("🔥🔥")).unwrap();
        assert_eq!(value["🔥"], 2);
        assert_eq!(value["🌊"], 0);
    }
}
