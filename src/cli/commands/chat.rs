use anyhow::Result;

use super::{load_config, open_session_store};
use crate::api::HttpBackend;
use crate::chat::{Repl, ReplConfig};
use crate::controller::ChatController;
use crate::session::SessionId;

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_config(options.endpoint)?;
    let store = open_session_store(&config)?;
    let session = SessionId::load_or_create(&store)?;
    let backend = HttpBackend::new(&config.endpoint)?;

    let repl_config = ReplConfig {
        endpoint: config.endpoint,
        session_file: store.path().to_path_buf(),
    };
    let mut repl = Repl::new(repl_config, ChatController::new(backend, session));
    repl.run().await
}
