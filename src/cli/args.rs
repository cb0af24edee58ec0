use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "carelingo")]
#[command(about = "Context-aware translation for healthcare conversations")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads from stdin if not provided)
    pub text: Option<String>,

    /// Source language code (ISO 639-1, e.g., en, es, fr)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., es, en, fr)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Domain context that steers terminology (e.g., healthcare)
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure carelingo settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
    /// Interactive chat mode for translation
    Chat {
        /// Source language code (ISO 639-1, e.g., en, es, fr)
        #[arg(short = 'f', long = "from")]
        from: Option<String>,

        /// Target language code (ISO 639-1, e.g., es, en, fr)
        #[arg(short = 't', long = "to")]
        to: Option<String>,

        /// Domain context that steers terminology
        #[arg(short = 'c', long)]
        context: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
}
