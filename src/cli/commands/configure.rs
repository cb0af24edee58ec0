//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    API_KEY_ENV, BackendConfig, ConfigFile, ConfigManager, DEFAULT_SOURCE_LANG,
    DEFAULT_TARGET_LANG, DefaultsConfig,
};
use crate::translation::{DEFAULT_BASE_URL, DEFAULT_CONTEXT, DEFAULT_MODEL, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current configuration and exits. Otherwise
/// walks through the settings interactively and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    print_config(&config);

    if show {
        println!(
            "{} {}",
            Style::label("Config file:"),
            Style::secondary(manager.config_path().display().to_string())
        );
        return Ok(());
    }

    handle_prompt_cancellation(move || run_configure_inner(&manager, &config))
}

fn run_configure_inner(manager: &ConfigManager, config: &ConfigFile) -> Result<()> {
    let from = select_language(
        "Default source language:",
        config.defaults.from.as_deref().unwrap_or(DEFAULT_SOURCE_LANG),
    )?;

    let to = select_language(
        "Default target language:",
        config.defaults.to.as_deref().unwrap_or(DEFAULT_TARGET_LANG),
    )?;

    let context = prompt_text(
        "Default context:",
        "Domain that steers terminology, e.g. healthcare",
        config.defaults.context.as_deref().unwrap_or(DEFAULT_CONTEXT),
    )?;

    let model = prompt_text(
        "Model:",
        "Chat-completion model name",
        config.backend.model.as_deref().unwrap_or(DEFAULT_MODEL),
    )?;

    let base_url = prompt_text(
        "API base URL:",
        "OpenAI-compatible endpoint",
        config.backend.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
    )?;

    let updated = ConfigFile {
        backend: BackendConfig {
            base_url: Some(base_url),
            model: Some(model),
            api_key: config.backend.api_key.clone(),
            api_key_env: config.backend.api_key_env.clone(),
        },
        defaults: DefaultsConfig {
            from: Some(from),
            to: Some(to),
            context: Some(context),
        },
    };

    manager.save(&updated)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    if updated.backend.get_api_key().is_none() {
        println!(
            "  {}",
            Style::secondary(format!(
                "No API key found. Set {API_KEY_ENV} to enable remote translation."
            ))
        );
    }

    Ok(())
}

fn print_config(config: &ConfigFile) {
    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}       {}",
        Style::label("from"),
        config
            .defaults
            .from
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        config
            .defaults
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}    {}",
        Style::label("context"),
        config
            .defaults
            .context
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        config
            .backend
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("base_url"),
        config
            .backend
            .base_url
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::secondary)
    );
    println!(
        "  {}    {}",
        Style::label("api_key"),
        if config.backend.get_api_key().is_some() {
            Style::value("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!();
}

fn select_language(prompt: &str, default: &str) -> Result<String> {
    // Options look like "🇫🇷 fr - French"
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| format!("{} {} - {}", lang.flag, lang.code, lang.name))
        .collect();

    let default_index = SUPPORTED_LANGUAGES
        .iter()
        .position(|lang| lang.code == default)
        .unwrap_or(0);

    let selection = Select::new(prompt, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // The code is the second whitespace-separated field
    let code = selection.split_whitespace().nth(1).unwrap_or(&selection);

    Ok(code.to_string())
}

fn prompt_text(prompt: &str, help: &str, default: &str) -> Result<String> {
    let value = Text::new(prompt)
        .with_help_message(help)
        .with_default(default)
        .prompt()?;

    if value.trim().is_empty() {
        bail!("Value cannot be empty");
    }

    Ok(value.trim().to_string())
}
