use crate::config::BkashConfig;
use crate::providers::{PaymentProvider, ProviderPayment, ReferenceSource};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// bKash mobile-money adapter. Without a configured base URL it runs in
/// simulation mode and synthesizes references locally; with one it performs
/// the token exchange against the sandbox but still synthesizes the payment
/// reference, because the create/execute leg is not implemented.
pub struct BkashProvider {
    pub config: BkashConfig,
    pub client: reqwest::Client,
    pub references: Arc<dyn ReferenceSource>,
}

#[derive(Debug, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_in: u64,
}

impl BkashProvider {
    fn next_reference(&self) -> String {
        format!("BKX{}", self.references.six_digits())
    }

    fn simulate(&self, amount: i64) -> ProviderPayment {
        let reference = self.next_reference();
        ProviderPayment {
            instruction: format!("Send {}$ to demo Bkash number with reference {}", amount, reference),
            provider_reference: reference,
        }
    }

    async fn grant_token(&self, base_url: &str) -> Result<TokenGrant> {
        let (app_key, app_secret) = match (&self.config.app_key, &self.config.app_secret) {
            (Some(key), Some(secret)) => (key, secret),
            // Incomplete credentials: same demo grant the sandbox would issue.
            _ => {
                return Ok(TokenGrant {
                    access_token: "demo-token".to_string(),
                    expires_in: 3600,
                })
            }
        };

        let url = format!("{}/token", base_url);
        let resp = self
            .client
            .post(&url)
            .header("App-Key", app_key)
            .json(&json!({ "app_secret": app_secret }))
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .send()
            .await
            .context("bkash token exchange failed")?;

        let grant = resp
            .error_for_status()
            .context("bkash token endpoint rejected the exchange")?
            .json::<TokenGrant>()
            .await
            .context("bkash token response was not valid JSON")?;

        Ok(grant)
    }
}

#[async_trait::async_trait]
impl PaymentProvider for BkashProvider {
    fn name(&self) -> &'static str {
        "bkash"
    }

    async fn create_payment(&self, amount: i64, order_id: &str) -> Result<ProviderPayment> {
        let base_url = match &self.config.base_url {
            Some(url) => url.clone(),
            None => return Ok(self.simulate(amount)),
        };

        let token = self.grant_token(&base_url).await?;
        tracing::debug!(order_id, expires_in = token.expires_in, "acquired bkash token");

        // TODO: wire up the create/execute calls once sandbox credentials
        // exist; endpoints and payloads differ per bKash API version.
        Ok(ProviderPayment {
            provider_reference: self.next_reference(),
            instruction: format!("Follow provider flow with token {}", token.access_token),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl ReferenceSource for Fixed {
        fn six_digits(&self) -> u32 {
            self.0
        }
    }

    fn provider(base_url: Option<&str>) -> BkashProvider {
        BkashProvider {
            config: BkashConfig {
                base_url: base_url.map(str::to_string),
                app_key: None,
                app_secret: None,
                timeout_ms: 2500,
            },
            client: reqwest::Client::new(),
            references: Arc::new(Fixed(654321)),
        }
    }

    #[test]
    fn simulation_embeds_amount_and_reference() {
        let payment = provider(None).simulate(199);
        assert_eq!(payment.provider_reference, "BKX654321");
        assert!(payment.instruction.contains("199"));
        assert!(payment.instruction.contains("BKX654321"));
    }

    #[tokio::test]
    async fn unconfigured_provider_simulates() {
        let payment = provider(None).create_payment(99, "o-1").await.unwrap();
        assert_eq!(payment.provider_reference, "BKX654321");
        assert!(payment.instruction.contains("99"));
    }

    #[tokio::test]
    async fn incomplete_credentials_fall_back_to_demo_token() {
        // base_url set but no key/secret: the token path short-circuits to
        // the demo grant without touching the network.
        let payment = provider(Some("http://sandbox.invalid"))
            .create_payment(99, "o-2")
            .await
            .unwrap();
        assert_eq!(payment.provider_reference, "BKX654321");
        assert_eq!(payment.instruction, "Follow provider flow with token demo-token");
    }
}
