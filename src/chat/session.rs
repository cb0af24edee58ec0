use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::translation::{HttpBackend, TranslateOptions, TranslationService, print_languages};
use crate::ui::{Spinner, Style};

/// How many exchanges `/history` keeps, newest first.
const HISTORY_LIMIT: usize = 10;

/// Configuration for a chat session.
///
/// Mutable at runtime via `/set` and `/swap`; changes last for the
/// session only and are never written back to the config file.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The source language code.
    pub from: String,
    /// The target language code.
    pub to: String,
    /// The domain context for translations.
    pub context: String,
    /// The model to use.
    pub model: String,
    /// The API endpoint URL.
    pub base_url: String,
    /// The API key (if configured).
    pub api_key: Option<String>,
}

/// One completed translation, kept for `/history`.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub original: String,
    pub translated: String,
}

/// An interactive chat session for translation.
///
/// Provides a REPL-style interface for translating text interactively.
pub struct ChatSession {
    config: SessionConfig,
    service: TranslationService<HttpBackend>,
    history: Vec<Exchange>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let backend = HttpBackend::new(
            config.base_url.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        Self {
            config,
            service: TranslationService::new(backend),
            history: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                let cached = self.service.cached_count().await;
                ui::print_config(&self.config, cached);
                true
            }
            SlashCommand::Languages => {
                print_languages();
                println!();
                true
            }
            SlashCommand::History => {
                ui::print_history(&self.history);
                true
            }
            SlashCommand::Clear => {
                self.service.clear_cache().await;
                println!("{} Translation cache cleared\n", Style::success("✓"));
                true
            }
            SlashCommand::Swap => {
                std::mem::swap(&mut self.config.from, &mut self.config.to);
                println!(
                    "{} Now translating {} to {}\n",
                    Style::success("✓"),
                    Style::value(&self.config.from),
                    Style::value(&self.config.to)
                );
                true
            }
            SlashCommand::Set { key, value } => {
                self.handle_set(&key, value.as_deref());
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    fn handle_set(&mut self, key: &str, value: Option<&str>) {
        match key {
            "from" => self.set_language(Direction::From, value),
            "to" => self.set_language(Direction::To, value),
            "context" => self.set_context(value),
            "" => {
                println!("Usage: /set <key> <value>");
                println!("Keys: from, to, context");
            }
            _ => {
                ui::print_error(&format!("Unknown setting: {key}"));
                println!("Available: from, to, context");
            }
        }
    }

    fn set_language(&mut self, direction: Direction, value: Option<&str>) {
        let Some(lang) = value else {
            ui::print_error(&format!("Usage: /set {} <language code>", direction.key()));
            return;
        };

        if !self.service.is_supported(lang) {
            ui::print_error(&format!("Unsupported language code: {lang}"));
            println!("Use /languages to see supported codes");
            return;
        }

        let (label, slot) = match direction {
            Direction::From => ("Source", &mut self.config.from),
            Direction::To => ("Target", &mut self.config.to),
        };
        *slot = lang.to_string();
        println!(
            "{} {label} language set to {}",
            Style::success("✓"),
            Style::value(lang)
        );
    }

    fn set_context(&mut self, value: Option<&str>) {
        match value {
            None => {
                ui::print_error("Usage: /set context <description>");
            }
            Some(context) => {
                self.config.context = context.to_string();
                println!(
                    "{} Context set to {}",
                    Style::success("✓"),
                    Style::value(context)
                );
            }
        }
    }

    async fn translate_and_print(&mut self, text: &str) {
        let spinner = Spinner::new("Translating...");

        let options = TranslateOptions {
            context: Some(self.config.context.clone()),
            ..TranslateOptions::default()
        };
        let result = self
            .service
            .translate_with_context(text, &self.config.from, &self.config.to, options)
            .await;

        spinner.stop();

        // parse_input never forwards blank text, so the service always answers.
        if let Some(translated) = result {
            println!("{translated}");
            println!();
            self.push_history(text.to_string(), translated);
        }
    }

    fn push_history(&mut self, original: String, translated: String) {
        self.history.insert(
            0,
            Exchange {
                original,
                translated,
            },
        );
        self.history.truncate(HISTORY_LIMIT);
    }
}

#[derive(Clone, Copy)]
enum Direction {
    From,
    To,
}

impl Direction {
    const fn key(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}
