mod cancel;
mod client;
mod error;
mod fallback;
mod language;
mod prompt;
mod service;

pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use client::{
    BackendRequest, DEFAULT_BASE_URL, DEFAULT_MODEL, HttpBackend, TranslationBackend,
};
pub use error::BackendError;
pub use fallback::fallback_translate;
pub use language::{
    SUPPORTED_LANGUAGES, SupportedLanguage, find_language, print_languages, validate_language,
};
pub use service::{DEFAULT_CONTEXT, TranslateOptions, TranslationService};
