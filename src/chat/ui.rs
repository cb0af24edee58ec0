//! Chat mode UI components.

use crate::ui::Style;

use super::session::{Exchange, SessionConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("carelingo"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "Translating {} to {} {}",
        Style::value(&config.from),
        Style::value(&config.to),
        Style::secondary(format!("(context: {})", config.context))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig, cached: usize) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {}",
        Style::label("from"),
        Style::value(&config.from)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        Style::value(&config.to)
    );
    println!(
        "  {}    {}",
        Style::label("context"),
        Style::value(&config.context)
    );
    println!(
        "  {}      {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.base_url)
    );
    println!(
        "  {}     {}",
        Style::label("cached"),
        Style::value(cached)
    );
    println!(
        "  {}       {}",
        Style::label("mode"),
        if config.api_key.is_some() {
            Style::value("online")
        } else {
            Style::secondary("offline (no API key)")
        }
    );
    println!();
}

pub fn print_history(history: &[Exchange]) {
    println!("{}", Style::header("Recent translations"));
    if history.is_empty() {
        println!("  {}", Style::secondary("(none yet)"));
    } else {
        for exchange in history {
            println!("  {}", Style::value(&exchange.translated));
            println!("    {}", Style::secondary(&exchange.original));
        }
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}      {}",
        Style::command("/clear"),
        Style::secondary("Clear cached translations")
    );
    println!(
        "  {}     {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}       {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/history"),
        Style::secondary("Show recent translations")
    );
    println!(
        "  {}  {}",
        Style::command("/languages"),
        Style::secondary("List supported languages")
    );
    println!(
        "  {}       {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!(
        "  {}        {}",
        Style::command("/set"),
        Style::secondary("Change from, to, or context")
    );
    println!(
        "  {}       {}",
        Style::command("/swap"),
        Style::secondary("Swap source and target languages")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
