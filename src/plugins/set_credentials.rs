use anyhow::{Context, Result};

use crate::argument::{ArgumentList, ArgumentSpec, ResolvedArgs};
use crate::logger::{LogLevel, Logger};
use crate::plugin::Plugin;
use crate::service::{CredentialFields, TranslationService};

/// Stores the credentials for the Translator service and reports whether
/// the resulting configuration can authenticate.
///
/// Saving and validating are reported as two independent signals: a saved
/// but unusable configuration is a warning to the user, not a plugin
/// failure.
pub struct SetCredentials {
    arguments: ArgumentList,
    service: Box<dyn TranslationService>,
}

impl SetCredentials {
    pub fn new(service: Box<dyn TranslationService>) -> Self {
        let arguments = ArgumentList::new(vec![
            ArgumentSpec::new(
                "clientID",
                false,
                "Client ID to use for the calls to the Translator service. \
                 This is required if you don't have a subscription key from the Azure portal.",
            ),
            ArgumentSpec::new(
                "clientSecret",
                false,
                "Client secret to use for the calls to the Translator service. \
                 This is required if you don't have a subscription key from the Azure portal.",
            ),
            ArgumentSpec::new(
                "categoryID",
                false,
                "Translator Hub category ID to use for calls to the Translator service.",
            ),
            ArgumentSpec::new(
                "subscriptionKey",
                false,
                "Subscription key to use for the calls to the Translator service. \
                 This is required if you don't have a client ID and client secret.",
            ),
        ]);

        Self { arguments, service }
    }

    /// Apply phase: assign and persist the credentials. A failure here is
    /// the one fatal path of the plugin.
    fn apply(&mut self, values: &ResolvedArgs) -> Result<()> {
        self.service.set_credentials(CredentialFields {
            client_id: values.get("clientID").to_string(),
            client_secret: values.get("clientSecret").to_string(),
            category_id: values.get("categoryID").to_string(),
            subscription_key: values.get("subscriptionKey").to_string(),
        });

        self.service
            .save_credentials()
            .context("Failed to save credentials")
    }
}

impl Plugin for SetCredentials {
    fn name(&self) -> &str {
        "SetCredentials"
    }

    fn description(&self) -> &str {
        "Sets the credentials for use with the Translator service."
    }

    fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }

    fn execute(&mut self, values: &ResolvedArgs, logger: &dyn Logger) -> bool {
        if let Err(e) = self.apply(values) {
            logger.write_error(&e);
            return false;
        }

        logger.write_line(LogLevel::Msg, "Credentials saved.");
        if self.service.is_service_ready() {
            logger.write_line(LogLevel::Msg, "Translator service is ready to use.");
        } else {
            logger.write_line(LogLevel::Error, "Credentials are invalid.");
        }

        true
    }
}
