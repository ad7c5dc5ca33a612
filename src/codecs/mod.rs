//! Encode/decode steps of the pipeline.
//!
//! Every encoder is total. Only the hex and binary decoders can fail, and only
//! on tokens they did not produce themselves.

pub mod binary;
pub mod color;
pub mod emoji;
pub mod hex;
pub mod morse;

pub use binary::{binary_stats, binary_to_text, text_to_binary, BinaryStats};
pub use color::{color_to_sentiment, generate_haiku, hex_to_colors};
pub use emoji::{emoji_stats, emoji_to_morse, morse_to_emoji, EmojiStats};
pub use hex::{hex_to_text, text_to_hex};
pub use morse::{morse_stats, morse_to_text, text_to_morse, MorseStats, SymbolTable};
