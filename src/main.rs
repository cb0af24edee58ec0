use anyhow::Result;
use clap::Parser;

use carelingo::cli::commands::{chat, configure, translate};
use carelingo::cli::{Args, Command};
use carelingo::translation::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Chat {
            from,
            to,
            context,
            model,
        }) => {
            if let Some(ref lang) = from {
                validate_language(lang)?;
            }
            if let Some(ref lang) = to {
                validate_language(lang)?;
            }

            let options = chat::ChatArgs {
                from,
                to,
                context,
                model,
            };
            chat::run_chat(options).await?;
        }
        None => {
            if let Some(ref lang) = args.from {
                validate_language(lang)?;
            }
            if let Some(ref lang) = args.to {
                validate_language(lang)?;
            }

            let options = translate::TranslateArgs {
                text: args.text,
                from: args.from,
                to: args.to,
                context: args.context,
                model: args.model,
                base_url: args.base_url,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
