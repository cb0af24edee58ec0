mod manager;

pub use manager::{
    API_KEY_ENV, BackendConfig, ConfigFile, ConfigManager, DEFAULT_SOURCE_LANG,
    DEFAULT_TARGET_LANG, DefaultsConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
