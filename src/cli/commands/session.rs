use anyhow::Result;

use super::{load_config, open_session_store};
use crate::session::SessionId;
use crate::ui::Style;

/// Prints the session identifier and where it is stored.
///
/// Creates and persists one if none exists yet, exactly as a chat would.
pub fn show_session(endpoint: Option<String>) -> Result<()> {
    let config = load_config(endpoint)?;
    let store = open_session_store(&config)?;
    let session = SessionId::load_or_create(&store)?;

    println!("{}", Style::value(&session));
    crate::status!(
        "{} {}",
        Style::label("stored in"),
        Style::secondary(store.path().display())
    );
    Ok(())
}
