mod memory;

pub use memory::{TranslationCache, cache_key};
