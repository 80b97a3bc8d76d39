use anyhow::Result;
use rand::Rng;

pub mod bkash;

/// What a provider hands back for a freshly initiated payment.
#[derive(Debug, Clone)]
pub struct ProviderPayment {
    pub provider_reference: String,
    pub instruction: String,
}

#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_payment(&self, amount: i64, order_id: &str) -> Result<ProviderPayment>;
}

/// Entropy behind synthesized payment references, substitutable so tests can
/// pin the reference number.
pub trait ReferenceSource: Send + Sync {
    /// Uniformly random number in [100000, 999999].
    fn six_digits(&self) -> u32;
}

pub struct ThreadRngReferences;

impl ReferenceSource for ThreadRngReferences {
    fn six_digits(&self) -> u32 {
        rand::thread_rng().gen_range(100_000..=999_999)
    }
}
