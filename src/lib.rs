//! # carelingo - Context-Aware Healthcare Translation
//!
//! `carelingo` translates short phrases between languages with a domain
//! context (healthcare by default), using an OpenAI-compatible chat
//! completion endpoint. Results are cached in memory, and every request
//! degrades to a deterministic offline phrase-table translation when the
//! backend is unconfigured or unreachable. A caller always gets a usable
//! string back.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a phrase
//! carelingo "where does it hurt" --to es
//!
//! # Translate from stdin
//! echo "take one tablet daily" | carelingo --to fr
//!
//! # Interactive chat mode
//! carelingo chat
//!
//! # Works without an API key too (offline phrase table)
//! carelingo hello --from en --to es
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/carelingo/config.toml`:
//!
//! ```toml
//! [backend]
//! base_url = "https://api.groq.com/openai/v1"
//! model = "llama3-8b-8192"
//! api_key_env = "CARELINGO_API_KEY"
//!
//! [defaults]
//! from = "en"
//! to = "es"
//! context = "healthcare"
//! ```
//!
//! Every setting has a built-in default; a missing API key selects
//! offline mode instead of failing.

/// In-memory caching of completed translations.
pub mod cache;

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and settings resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments and stdin.
pub mod input;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Speech capture and synthesis integration surface.
pub mod speech;

/// The translation lifecycle: orchestrator, remote backend, offline fallback.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
