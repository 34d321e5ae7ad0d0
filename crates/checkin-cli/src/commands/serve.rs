//! The `checkin serve` command.

use std::path::PathBuf;

use anyhow::Result;

use checkin_server::load_config_from;

pub async fn execute(port: Option<u16>, host: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let mut config = load_config_from(config.as_deref())?;
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }
    tracing::debug!("effective config: {config:?}");

    checkin_server::serve(config).await
}
