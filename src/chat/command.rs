use inquire::autocompletion::{Autocomplete, Replacement};

/// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/clear", "Clear cached translations"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/history", "Show recent translations"),
    ("/languages", "List supported languages"),
    ("/quit", "Exit chat mode"),
    ("/set", "Change from, to, or context"),
    ("/swap", "Swap source and target languages"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Config,
    Languages,
    History,
    Clear,
    Swap,
    Set { key: String, value: Option<String> },
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    match parts.first().copied() {
        Some("config") => Input::Command(SlashCommand::Config),
        Some("languages") => Input::Command(SlashCommand::Languages),
        Some("history") => Input::Command(SlashCommand::History),
        Some("clear") => Input::Command(SlashCommand::Clear),
        Some("swap") => Input::Command(SlashCommand::Swap),
        Some("set") => Input::Command(SlashCommand::Set {
            key: parts.get(1).copied().unwrap_or_default().to_string(),
            value: if parts.len() > 2 {
                Some(parts[2..].join(" "))
            } else {
                None
            },
        }),
        Some("help") => Input::Command(SlashCommand::Help),
        Some("quit" | "exit" | "q") => Input::Command(SlashCommand::Quit),
        _ => Input::Command(SlashCommand::Unknown(parts.join(" "))),
    }
}
