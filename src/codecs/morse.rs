use crate::constants::{EMOJI_MAP, MORSE_CODE, MORSE_WORD_SEPARATOR, UNKNOWN_SYMBOL};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Character↔Morse and Morse symbol↔emoji lookups, built once and shared
/// read-only by every run.
#[derive(Debug)]
pub struct SymbolTable {
    morse: HashMap<char, &'static str>,
    reverse_morse: HashMap<&'static str, char>,
    emoji: HashMap<char, char>,
    reverse_emoji: HashMap<char, char>,
}

static SYMBOLS: Lazy<SymbolTable> = Lazy::new(SymbolTable::build);

impl SymbolTable {
    pub fn global() -> &'static SymbolTable {
        &SYMBOLS
    }

    fn build() -> Self {
        let mut morse = HashMap::new();
        let mut reverse_morse = HashMap::new();
        for &(ch, code) in MORSE_CODE {
            morse.insert(ch, code);
            reverse_morse.insert(code, ch);
        }

        let emoji: HashMap<char, char> = EMOJI_MAP.iter().copied().collect();
        let reverse_emoji = EMOJI_MAP.iter().map(|&(m, e)| (e, m)).collect();

        Self {
            morse,
            reverse_morse,
            emoji,
            reverse_emoji,
        }
    }

    pub fn encode_char(&self, ch: char) -> Option<&'static str> {
        self.morse.get(&ch).copied()
    }

    pub fn decode_token(&self, token: &str) -> Option<char> {
        self.reverse_morse.get(token).copied()
    }

    pub fn to_emoji(&self, symbol: char) -> Option<char> {
        self.emoji.get(&symbol).copied()
    }

    pub fn from_emoji(&self, glyph: char) -> Option<char> {
        self.reverse_emoji.get(&glyph).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MorseStats {
    pub dots: usize,
    pub dashes: usize,
}

pub fn text_to_morse(text: &str) -> String {
    let table = SymbolTable::global();
    text.chars()
        .map(|ch| {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => table.encode_char(single),
                _ => None,
            }
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn morse_stats(morse: &str) -> MorseStats {
    MorseStats {
        dots: morse.chars().filter(|&c| c == '.').count(),
        dashes: morse.chars().filter(|&c| c == '-').count(),
    }
}

pub fn morse_to_text(morse: &str) -> String {
    let table = SymbolTable::global();
    morse
        .split(MORSE_WORD_SEPARATOR)
        .map(|word| {
            word.split(' ')
                .filter(|token| !token.is_empty())
                .map(|token| table.decode_token(token).unwrap_or(UNKNOWN_SYMBOL))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
