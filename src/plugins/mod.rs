pub mod set_credentials;

use anyhow::Result;

use crate::plugin::PluginRegistry;
use crate::plugins::set_credentials::SetCredentials;
use crate::service::LiveTranslationService;

/// Build the registry of shipped plugins.
pub fn builtin() -> Result<PluginRegistry> {
    let mut registry = PluginRegistry::new();
    registry.register(Box::new(SetCredentials::new(Box::new(
        LiveTranslationService::new()?,
    ))))?;

    Ok(registry)
}
