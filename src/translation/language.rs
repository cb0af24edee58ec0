//! Language registry and code validation.

use anyhow::Result;

use crate::ui::Style;

/// A language the service can translate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedLanguage {
    /// ISO 639-1 code (e.g., "en").
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Flag emoji shown in listings and pickers.
    pub flag: &'static str,
}

/// Languages offered by the service, in display order.
pub const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage {
        code: "en",
        name: "English",
        flag: "🇺🇸",
    },
    SupportedLanguage {
        code: "es",
        name: "Spanish",
        flag: "🇪🇸",
    },
    SupportedLanguage {
        code: "fr",
        name: "French",
        flag: "🇫🇷",
    },
    SupportedLanguage {
        code: "de",
        name: "German",
        flag: "🇩🇪",
    },
    SupportedLanguage {
        code: "it",
        name: "Italian",
        flag: "🇮🇹",
    },
    SupportedLanguage {
        code: "pt",
        name: "Portuguese",
        flag: "🇵🇹",
    },
    SupportedLanguage {
        code: "ru",
        name: "Russian",
        flag: "🇷🇺",
    },
    SupportedLanguage {
        code: "zh",
        name: "Chinese",
        flag: "🇨🇳",
    },
    SupportedLanguage {
        code: "ja",
        name: "Japanese",
        flag: "🇯🇵",
    },
    SupportedLanguage {
        code: "ko",
        name: "Korean",
        flag: "🇰🇷",
    },
    SupportedLanguage {
        code: "ar",
        name: "Arabic",
        flag: "🇸🇦",
    },
    SupportedLanguage {
        code: "hi",
        name: "Hindi",
        flag: "🇮🇳",
    },
    SupportedLanguage {
        code: "yo",
        name: "Yoruba",
        flag: "🇳🇬",
    },
    SupportedLanguage {
        code: "ig",
        name: "Igbo",
        flag: "🇳🇬",
    },
    SupportedLanguage {
        code: "ha",
        name: "Hausa",
        flag: "🇳🇬",
    },
];

/// Looks up a registry entry by its ISO 639-1 code.
pub fn find_language(code: &str) -> Option<&'static SupportedLanguage> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages (ISO 639-1)"));
    for lang in SUPPORTED_LANGUAGES {
        println!(
            "  {} {:4} {}",
            lang.flag,
            Style::code(lang.code),
            Style::secondary(lang.name)
        );
    }
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the registry.
pub fn validate_language(lang: &str) -> Result<()> {
    if find_language(lang).is_some() {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): en, es, fr, de, zh, ja, ...\n\
             Run 'carelingo languages' to see all supported codes."
        )
    }
}
