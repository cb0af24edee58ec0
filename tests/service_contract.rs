#![allow(clippy::unwrap_used)]
//! Translation service contract tests.
//!
//! Exercises the full request lifecycle against scripted backends:
//! cache reuse, offline fallback on failure, cancellation, and the
//! "callers always get an answer" guarantee.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use carelingo::translation::{
    BackendError, BackendRequest, TranslateOptions, TranslationBackend, TranslationService,
    cancel_pair,
};

#[derive(Clone)]
enum Reply {
    Text(String),
    HttpError,
    Malformed,
    Hang,
}

/// Backend that answers from a script and counts its calls.
struct ScriptedBackend {
    reply: Reply,
    calls: Arc<AtomicUsize>,
}

impl ScriptedBackend {
    fn new(reply: Reply) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let backend = Self {
            reply,
            calls: Arc::clone(&calls),
        };
        (backend, calls)
    }
}

impl TranslationBackend for ScriptedBackend {
    fn is_configured(&self) -> bool {
        true
    }

    async fn translate(&self, _request: &BackendRequest<'_>) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => {
                // Let a concurrent caller run its cache lookup before we answer.
                tokio::task::yield_now().await;
                Ok(text.clone())
            }
            Reply::HttpError => Err(BackendError::Http {
                status: 500,
                message: "internal error".to_string(),
            }),
            Reply::Malformed => Err(BackendError::MalformedResponse(
                "empty completion".to_string(),
            )),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// Backend that records every request it sees.
struct CapturingBackend {
    seen: Arc<Mutex<Vec<(String, String, String, String)>>>,
}

impl TranslationBackend for CapturingBackend {
    fn is_configured(&self) -> bool {
        true
    }

    async fn translate(&self, request: &BackendRequest<'_>) -> Result<String, BackendError> {
        self.seen.lock().unwrap().push((
            request.text.to_string(),
            request.source_lang.to_string(),
            request.target_lang.to_string(),
            request.context.to_string(),
        ));
        Ok("ok".to_string())
    }
}

#[tokio::test]
async fn test_remote_success_is_cached_and_reused() {
    let (backend, calls) = ScriptedBackend::new(Reply::Text("hola doctor".to_string()));
    let service = TranslationService::new(backend);

    let first = service.translate("hello doctor", "en", "es").await;
    assert_eq!(first.as_deref(), Some("hola doctor"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.cached_count().await, 1);

    let second = service.translate("hello doctor", "en", "es").await;
    assert_eq!(second.as_deref(), Some("hola doctor"));
    // Served from cache, no second remote call
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cache_distinguishes_direction_and_context() {
    let (backend, calls) = ScriptedBackend::new(Reply::Text("same".to_string()));
    let service = TranslationService::new(backend);

    service.translate("hello", "en", "es").await;
    service.translate("hello", "es", "en").await;

    let options = TranslateOptions {
        context: Some("legal".to_string()),
        ..TranslateOptions::default()
    };
    service
        .translate_with_context("hello", "en", "es", options)
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(service.cached_count().await, 3);
}

#[tokio::test]
async fn test_backend_failure_serves_fallback_without_caching() {
    let (backend, calls) = ScriptedBackend::new(Reply::HttpError);
    let service = TranslationService::new(backend);

    let first = service.translate("hello", "en", "es").await;
    assert_eq!(first.as_deref(), Some("hola"));
    assert_eq!(service.cached_count().await, 0);

    // A failed request is retried next time, not replayed from cache
    let second = service.translate("hello", "en", "es").await;
    assert_eq!(second.as_deref(), Some("hola"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_malformed_response_serves_fallback() {
    let (backend, _calls) = ScriptedBackend::new(Reply::Malformed);
    let service = TranslationService::new(backend);

    let result = service.translate("medicine", "en", "es").await;
    assert_eq!(result.as_deref(), Some("medicina"));
    assert_eq!(service.cached_count().await, 0);
}

#[tokio::test]
async fn test_fallback_diagnostic_for_unsupported_pair() {
    let (backend, _calls) = ScriptedBackend::new(Reply::HttpError);
    let service = TranslationService::new(backend);

    let result = service.translate("hello", "en", "ja").await;
    assert_eq!(
        result.as_deref(),
        Some("(offline) translation from en to ja is not available")
    );
}

#[tokio::test]
async fn test_already_cancelled_request_resolves_with_fallback() {
    let (backend, _calls) = ScriptedBackend::new(Reply::Hang);
    let service = TranslationService::new(backend);

    let (handle, signal) = cancel_pair();
    handle.cancel();

    let options = TranslateOptions {
        cancel: Some(signal),
        ..TranslateOptions::default()
    };
    let result = tokio::time::timeout(
        Duration::from_secs(1),
        service.translate_with_context("hello", "en", "es", options),
    )
    .await
    .expect("cancelled request must not hang");

    assert_eq!(result.as_deref(), Some("hola"));
    assert_eq!(service.cached_count().await, 0);
}

#[tokio::test]
async fn test_cancel_mid_flight_resolves_with_fallback() {
    let (backend, calls) = ScriptedBackend::new(Reply::Hang);
    let service = TranslationService::new(backend);

    let (handle, signal) = cancel_pair();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();
    });

    let options = TranslateOptions {
        cancel: Some(signal),
        ..TranslateOptions::default()
    };
    let result = tokio::time::timeout(
        Duration::from_secs(2),
        service.translate_with_context("dizziness", "en", "es", options),
    )
    .await
    .expect("cancellation must resolve the request");

    // "dizziness" is not in the offline table, so words come back marked
    assert_eq!(result.as_deref(), Some("[dizziness]"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(service.cached_count().await, 0);
}

#[tokio::test]
async fn test_contexts_reach_the_backend() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let service = TranslationService::new(CapturingBackend {
        seen: Arc::clone(&seen),
    });

    service.translate("hello", "en", "fr").await;

    let options = TranslateOptions {
        context: Some("pediatric cardiology".to_string()),
        ..TranslateOptions::default()
    };
    service
        .translate_with_context("hello", "en", "de", options)
        .await;

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].3, "healthcare");
    assert_eq!(seen[1].3, "pediatric cardiology");
}

#[tokio::test]
async fn test_concurrent_misses_each_call_the_backend() {
    let (backend, calls) = ScriptedBackend::new(Reply::Text("hola".to_string()));
    let service = TranslationService::new(backend);

    let (a, b) = tokio::join!(
        service.translate("hello", "en", "es"),
        service.translate("hello", "en", "es"),
    );

    assert_eq!(a.as_deref(), Some("hola"));
    assert_eq!(b.as_deref(), Some("hola"));
    // Both saw a cache miss and went remote; the writes collapse to one entry
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(service.cached_count().await, 1);
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_backend() {
    let (backend, calls) = ScriptedBackend::new(Reply::Text("unused".to_string()));
    let service = TranslationService::new(backend);

    assert!(service.translate("", "en", "es").await.is_none());
    assert!(service.translate(" \t\n ", "en", "es").await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_clear_cache_forces_a_fresh_call() {
    let (backend, calls) = ScriptedBackend::new(Reply::Text("fiebre".to_string()));
    let service = TranslationService::new(backend);

    service.translate("fever", "en", "es").await;
    assert_eq!(service.cached_count().await, 1);

    service.clear_cache().await;
    assert_eq!(service.cached_count().await, 0);

    service.translate("fever", "en", "es").await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
