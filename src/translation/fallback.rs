//! Deterministic offline translation over hardcoded phrase tables.
//!
//! This is the last resort of the translation lifecycle: whenever the
//! remote backend is unconfigured or the request fails, the orchestrator
//! answers with this function instead of an error. It is side-effect-free
//! and never touches the cache or the network.

type PhraseTable = &'static [(&'static str, &'static str)];

const EN_ES: PhraseTable = &[
    ("hello", "hola"),
    ("how are you", "¿cómo estás?"),
    ("pain", "dolor"),
    ("headache", "dolor de cabeza"),
    ("fever", "fiebre"),
    ("medicine", "medicina"),
    ("doctor", "médico"),
    ("patient", "paciente"),
];

const ES_EN: PhraseTable = &[
    ("hola", "hello"),
    ("¿cómo estás?", "how are you"),
    ("dolor", "pain"),
    ("dolor de cabeza", "headache"),
    ("fiebre", "fever"),
    ("medicina", "medicine"),
    ("médico", "doctor"),
    ("paciente", "patient"),
];

const EN_FR: PhraseTable = &[
    ("hello", "bonjour"),
    ("pain", "douleur"),
    ("headache", "mal de tête"),
    ("fever", "fièvre"),
];

const FR_EN: PhraseTable = &[
    ("bonjour", "hello"),
    ("douleur", "pain"),
    ("mal de tête", "headache"),
    ("fièvre", "fever"),
];

fn table_for(source_lang: &str, target_lang: &str) -> Option<PhraseTable> {
    match (source_lang, target_lang) {
        ("en", "es") => Some(EN_ES),
        ("es", "en") => Some(ES_EN),
        ("en", "fr") => Some(EN_FR),
        ("fr", "en") => Some(FR_EN),
        _ => None,
    }
}

fn lookup(table: PhraseTable, phrase: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == phrase)
        .map(|(_, to)| *to)
}

/// Translates `text` using the offline phrase tables.
///
/// For a known language pair, the whole trimmed and lower-cased input is
/// looked up first; failing that, each whitespace-separated word is
/// translated independently, with untranslated words wrapped in bracket
/// markers so the caller can see what was missed. Pairs with no table
/// produce a fixed diagnostic string naming the pair.
pub fn fallback_translate(text: &str, source_lang: &str, target_lang: &str) -> String {
    let Some(table) = table_for(source_lang, target_lang) else {
        return format!("(offline) translation from {source_lang} to {target_lang} is not available");
    };

    let normalized = text.trim().to_lowercase();
    if let Some(translated) = lookup(table, &normalized) {
        return translated.to_string();
    }

    normalized
        .split_whitespace()
        .map(|word| lookup(table, word).map_or_else(|| format!("[{word}]"), ToString::to_string))
        .collect::<Vec<_>>()
        .join(" ")
}
