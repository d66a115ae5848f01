use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::service::CredentialFields;

/// Cognitive Services token endpoint used with a subscription key.
const AZURE_TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";

/// Datamarket OAuth endpoint used with a client ID/secret pair.
const DATAMARKET_TOKEN_URL: &str = "https://datamarket.accesscontrol.windows.net/v2/OAuth2-13";

/// Scope requested for Datamarket-issued tokens.
const TRANSLATOR_SCOPE: &str = "http://api.microsofttranslator.com";

#[derive(Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
}

/// Minimal client for the Translator service's token endpoints. Obtaining
/// a token doubles as the readiness probe: if either credential path
/// yields one, the stored configuration can authenticate calls.
pub struct TranslatorClient {
    http: Client,
}

impl TranslatorClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http })
    }

    /// Acquire an access token with whichever credential path is
    /// populated. The subscription key wins when both are present.
    pub fn acquire_token(&self, fields: &CredentialFields) -> Result<String> {
        if !fields.subscription_key.is_empty() {
            return self.token_from_subscription_key(&fields.subscription_key);
        }
        if !fields.client_id.is_empty() && !fields.client_secret.is_empty() {
            return self.token_from_client_pair(&fields.client_id, &fields.client_secret);
        }
        bail!("No subscription key or client ID/secret pair is configured");
    }

    /// The Azure endpoint returns the token itself as the response body.
    fn token_from_subscription_key(&self, subscription_key: &str) -> Result<String> {
        let resp = self
            .http
            .post(AZURE_TOKEN_URL)
            .header("Ocp-Apim-Subscription-Key", subscription_key)
            .send()
            .context("Failed to reach the token service")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            bail!("Token request failed (HTTP {}): {}", status, body);
        }

        resp.text().context("Failed to read token response")
    }

    fn token_from_client_pair(&self, client_id: &str, client_secret: &str) -> Result<String> {
        let resp = self
            .http
            .post(DATAMARKET_TOKEN_URL)
            .form(&[
                ("client_id", client_id),
                ("client_secret", client_secret),
                ("scope", TRANSLATOR_SCOPE),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .context("Failed to reach the token service")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            bail!("Token request failed (HTTP {}): {}", status, body);
        }

        let token: OAuthTokenResponse =
            resp.json().context("Failed to parse token response")?;

        Ok(token.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_token_without_credentials_fails_before_any_request() {
        let client = TranslatorClient::new().unwrap();

        let err = client.acquire_token(&CredentialFields::default()).unwrap_err();

        assert!(err.to_string().contains("No subscription key"));
    }

    #[test]
    fn acquire_token_needs_both_halves_of_the_client_pair() {
        let client = TranslatorClient::new().unwrap();
        let fields = CredentialFields {
            client_id: "id-only".to_string(),
            ..CredentialFields::default()
        };

        assert!(client.acquire_token(&fields).is_err());
    }
}
