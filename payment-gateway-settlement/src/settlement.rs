use async_trait::async_trait;
use payment_gateway_api::{PaymentRequest, PaymentResponse, SettlementError, SettlementProvider};

use crate::local::LocalSimulatedProvider;
use crate::remote::RemoteBankProvider;

/// The settlement backends the gateway can run with. Chosen once at startup.
pub enum Settlement {
    Local(LocalSimulatedProvider),
    RemoteBank(RemoteBankProvider),
}

impl Settlement {
    pub fn name(&self) -> &'static str {
        match self {
            Settlement::Local(_) => "local",
            Settlement::RemoteBank(_) => "remote_bank",
        }
    }
}

#[async_trait]
impl SettlementProvider for Settlement {
    async fn create_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentResponse, SettlementError> {
        match self {
            Settlement::Local(provider) => provider.create_payment(request).await,
            Settlement::RemoteBank(provider) => provider.create_payment(request).await,
        }
    }
}
