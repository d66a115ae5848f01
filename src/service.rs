use anyhow::Result;

use crate::api::client::TranslatorClient;
use crate::credentials;

/// The four credential parameters understood by the Translator service.
/// Empty strings mean "not supplied" and are stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialFields {
    pub client_id: String,
    pub client_secret: String,
    pub category_id: String,
    pub subscription_key: String,
}

/// Facade over the Translator service: credential assignment, persistence
/// and the readiness probe. Plugins talk to the service only through this
/// trait.
pub trait TranslationService {
    fn set_credentials(&mut self, fields: CredentialFields);

    fn save_credentials(&self) -> Result<()>;

    /// Whether the currently assigned credentials are sufficient to
    /// authenticate calls to the service.
    fn is_service_ready(&self) -> bool;
}

/// Production facade: keyring-backed persistence plus an HTTPS token probe.
pub struct LiveTranslationService {
    fields: CredentialFields,
    client: TranslatorClient,
}

impl LiveTranslationService {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fields: CredentialFields::default(),
            client: TranslatorClient::new()?,
        })
    }
}

impl TranslationService for LiveTranslationService {
    fn set_credentials(&mut self, fields: CredentialFields) {
        self.fields = fields;
    }

    fn save_credentials(&self) -> Result<()> {
        credentials::store_credentials(&self.fields)
    }

    fn is_service_ready(&self) -> bool {
        self.client.acquire_token(&self.fields).is_ok()
    }
}
