//! Translation orchestrator.
//!
//! Routes every request through the same lifecycle: cache lookup, remote
//! backend call, offline fallback. A request can be served from any of
//! the three, and the caller cannot be left empty-handed: any backend
//! failure, including cancellation, resolves through the fallback.

use std::collections::HashSet;

use log::{debug, warn};

use crate::cache::{TranslationCache, cache_key};

use super::cancel::CancelSignal;
use super::client::{BackendRequest, TranslationBackend};
use super::error::BackendError;
use super::fallback::fallback_translate;
use super::language::{SUPPORTED_LANGUAGES, SupportedLanguage};

/// Default domain context shaping the translation prompt.
pub const DEFAULT_CONTEXT: &str = "healthcare";

/// Per-request knobs for [`TranslationService::translate_with_context`].
#[derive(Debug, Default)]
pub struct TranslateOptions {
    /// Domain context; [`DEFAULT_CONTEXT`] when `None`.
    pub context: Option<String>,
    /// Cancels the remote leg of the request when fired.
    pub cancel: Option<CancelSignal>,
}

/// Orchestrates translation requests against an injected backend.
///
/// Construct one per backend configuration and share it by reference;
/// the cache lives inside and is safe under interleaved requests.
pub struct TranslationService<B> {
    backend: B,
    cache: TranslationCache,
    codes: HashSet<&'static str>,
}

impl<B: TranslationBackend> TranslationService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: TranslationCache::new(),
            codes: SUPPORTED_LANGUAGES.iter().map(|lang| lang.code).collect(),
        }
    }

    /// Translates `text` from `source_lang` to `target_lang`.
    ///
    /// Returns `None` only for blank input. Otherwise some usable string
    /// always comes back: a cached result, a fresh remote translation,
    /// or the offline fallback when the backend is unconfigured, fails,
    /// or the request is cancelled. Only successful remote translations
    /// are cached.
    pub async fn translate_with_context(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        options: TranslateOptions,
    ) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        let context = options.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
        let key = cache_key(source_lang, target_lang, context, text);

        if let Some(cached) = self.cache.get(&key).await {
            debug!("cache hit for {source_lang}->{target_lang}");
            return Some(cached);
        }

        if !self.backend.is_configured() {
            debug!("no backend credential, serving offline fallback");
            return Some(fallback_translate(text, source_lang, target_lang));
        }

        let request = BackendRequest {
            text,
            source_lang,
            target_lang,
            context,
        };

        match self.call_backend(&request, options.cancel).await {
            Ok(translated) => {
                self.cache.put(key, translated.clone()).await;
                Some(translated)
            }
            Err(err) => {
                warn!("translation failed ({err}), serving offline fallback");
                Some(fallback_translate(text, source_lang, target_lang))
            }
        }
    }

    /// [`Self::translate_with_context`] with the default context and no
    /// cancellation.
    pub async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Option<String> {
        self.translate_with_context(text, source_lang, target_lang, TranslateOptions::default())
            .await
    }

    async fn call_backend(
        &self,
        request: &BackendRequest<'_>,
        cancel: Option<CancelSignal>,
    ) -> Result<String, BackendError> {
        match cancel {
            Some(signal) => {
                tokio::select! {
                    () = signal.cancelled() => Err(BackendError::Cancelled),
                    result = self.backend.translate(request) => result,
                }
            }
            None => self.backend.translate(request).await,
        }
    }

    /// Drops every cached translation. Idempotent.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Number of cached translations.
    pub async fn cached_count(&self) -> usize {
        self.cache.len().await
    }

    /// The language registry, in display order.
    pub fn languages(&self) -> &'static [SupportedLanguage] {
        SUPPORTED_LANGUAGES
    }

    /// Whether `code` is in the language registry.
    pub fn is_supported(&self, code: &str) -> bool {
        self.codes.contains(code)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct OfflineBackend;

    impl TranslationBackend for OfflineBackend {
        fn is_configured(&self) -> bool {
            false
        }

        async fn translate(&self, _request: &BackendRequest<'_>) -> Result<String, BackendError> {
            Err(BackendError::Unconfigured)
        }
    }

    #[tokio::test]
    async fn test_blank_input_is_a_no_op() {
        let service = TranslationService::new(OfflineBackend);
        assert!(service.translate("", "en", "es").await.is_none());
        assert!(service.translate("   \t\n", "en", "es").await.is_none());
        assert_eq!(service.cached_count().await, 0);
    }

    #[tokio::test]
    async fn test_unconfigured_backend_serves_fallback() {
        let service = TranslationService::new(OfflineBackend);
        let result = service.translate("hello", "en", "es").await;
        assert_eq!(result, Some("hola".to_string()));
        // Fallback results are never cached
        assert_eq!(service.cached_count().await, 0);
    }

    #[tokio::test]
    async fn test_is_supported_covers_registry() {
        let service = TranslationService::new(OfflineBackend);
        assert!(service.is_supported("en"));
        assert!(service.is_supported("ha"));
        assert!(!service.is_supported("zz"));
        assert_eq!(service.languages().len(), SUPPORTED_LANGUAGES.len());
    }
}
