/// Fixed lookup data for the pipeline. Ordering of `MORSE_CODE` matters: when
/// two characters share a code the later entry wins on decode.
pub const MORSE_CODE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."), ('F', "..-."),
    ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"), ('K', "-.-"), ('L', ".-.."),
    ('M', "--"), ('N', "-."), ('O', "---"), ('P', ".--."), ('Q', "--.-"), ('R', ".-."),
    ('S', "..."), ('T', "-"), ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"),
    ('Y', "-.--"), ('Z', "--.."), ('0', "-----"), ('1', ".----"), ('2', "..---"),
    ('3', "...--"), ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."),
    ('8', "---.."), ('9', "----."), ('\'', ".----."), (' ', "/"), ('"', ".-..-."),
    ('(', "-.--."), (')', "-.--.-"), ('[', "-.--."), (']', "-.--.-"), ('+', ".-.-."),
    (',', "--..--"), ('-', "-....-"), ('.', ".-.-.-"), (':', "---..."), (';', "-.-.-."),
    ('?', "..--.."), ('=', "-...-"), ('@', ".--.-."), ('_', "..--.-"), ('!', "---."),
];

pub const EMOJI_MAP: &[(char, char)] = &[('.', '🔥'), ('-', '💧'), ('/', '🚪'), (' ', '🌊')];

/// Rendered for any character or token the symbol table does not know.
pub const UNKNOWN_SYMBOL: char = '?';

pub const MORSE_WORD_SEPARATOR: &str = " / ";

// Display caps for step results
pub const TEXT_DISPLAY_LIMIT: usize = 100;
pub const EMOJI_DISPLAY_LIMIT: usize = 50;
pub const COLOR_DISPLAY_LIMIT: usize = 10;

pub const POSITIVE_WORDS: &[&str] = &[
    "bon", "bien", "excellent", "super", "génial", "cool", "fantastique",
    "merveilleux", "formidable", "parfait", "agréable", "sympa", "chouette",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "mauvais", "mal", "nul", "horrible", "terrible", "décevant",
    "déplorable", "affreux", "catastrophique", "médiocre",
];

pub const LABEL_POSITIVE: &str = "POSITIVE";
pub const LABEL_NEGATIVE: &str = "NEGATIVE";
pub const LABEL_NEUTRAL: &str = "NEUTRAL";

pub const HAIKU_BRIGHT: &str = "Lumière éclatante\nLe texte rayonne\nSécurité claire";
pub const HAIKU_BALANCED: &str = "Entre ombre et clarté\nLe texte reste équilibré\nValidation calme";
pub const HAIKU_DARK: &str = "Nuit profonde et sombre\nLes mystères bien gardés\nTexte inspirant";

pub const STEP_NAMES: [&str; 11] = [
    "Conversion en code Morse",
    "Traduction en émojis",
    "Retour en code Morse",
    "Décodage morse",
    "Conversion en hexadécimal",
    "Interprétation en couleurs HTML",
    "Analyse sentimentale des couleurs",
    "Décodage hexadécimal → texte",
    "Conversion en binaire",
    "Décodage binaire → texte",
    "Analyse psychologique (IA)",
];

/// Classifier score above which an L-starting input is a "positive" success.
pub const VERDICT_SCORE_THRESHOLD: f64 = 25.0;

pub const VERDICT_POSITIVE_SUCCESS: &str =
    "C'est un **SUCCÈS POSITIF** ! La phrase commence par 'L' après cette validation critique!";
pub const VERDICT_NEGATIVE_SUCCESS: &str =
    "C'est un **SUCCÈS NÉGATIF** ! La phrase commence par 'L' malgré le doute de l'IA!";
pub const VERDICT_FAILURE: &str =
    "Échec. La phrase ne commence PAS par 'L'. Le décodage binaire était-il compromis ?";

pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://api-inference.huggingface.co/models/nlptown/bert-base-multilingual-uncased-sentiment";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 15;
