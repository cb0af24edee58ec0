use anyhow::{Result, bail};
use log::debug;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::translation::{
    HttpBackend, TranslateOptions, TranslationService, cancel_pair,
};
use crate::ui::Spinner;

pub struct TranslateArgs {
    pub text: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub context: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

pub async fn run_translate(args: TranslateArgs) -> Result<()> {
    let file_config = ConfigManager::new().load_or_default();
    let config = resolve_config(
        &ResolveOptions {
            from: args.from,
            to: args.to,
            context: args.context,
            model: args.model,
            base_url: args.base_url,
        },
        &file_config,
    );

    let text = InputReader::read(args.text.as_deref())?;
    if text.trim().is_empty() {
        bail!("Error: Input is empty");
    }

    let backend = HttpBackend::new(config.base_url, config.model, config.api_key);
    let service = TranslationService::new(backend);

    // Ctrl-C during the request abandons the remote call; the service
    // then answers from the offline tables instead.
    let (handle, signal) = cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling in-flight translation");
            handle.cancel();
        }
    });

    let spinner = Spinner::new("Translating...");

    let options = TranslateOptions {
        context: Some(config.context),
        cancel: Some(signal),
    };
    let result = service
        .translate_with_context(&text, &config.from, &config.to, options)
        .await;

    spinner.stop();

    if let Some(translated) = result {
        println!("{translated}");
    }

    Ok(())
}
