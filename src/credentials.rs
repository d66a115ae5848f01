use anyhow::{Context, Result};

use crate::service::CredentialFields;

const SERVICE: &str = "translator-toolkit";

/// Persist the credentials to the OS keychain, one entry per field.
/// Empty fields are stored as-is so a later run can clear a value.
pub fn store_credentials(fields: &CredentialFields) -> Result<()> {
    for (account, value) in [
        ("client_id", fields.client_id.as_str()),
        ("client_secret", fields.client_secret.as_str()),
        ("category_id", fields.category_id.as_str()),
        ("subscription_key", fields.subscription_key.as_str()),
    ] {
        keyring::Entry::new(SERVICE, account)
            .with_context(|| format!("Failed to create keyring entry for {}", account))?
            .set_password(value)
            .with_context(|| format!("Failed to store {} in keyring", account))?;
    }

    Ok(())
}
