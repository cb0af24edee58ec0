use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatArgs {
    pub from: Option<String>,
    pub to: Option<String>,
    pub context: Option<String>,
    pub model: Option<String>,
}

pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let file_config = ConfigManager::new().load_or_default();
    let config = resolve_config(
        &ResolveOptions {
            from: args.from,
            to: args.to,
            context: args.context,
            model: args.model,
            base_url: None,
        },
        &file_config,
    );

    let mut session = ChatSession::new(SessionConfig {
        from: config.from,
        to: config.to,
        context: config.context,
        model: config.model,
        base_url: config.base_url,
        api_key: config.api_key,
    });
    session.run().await
}
