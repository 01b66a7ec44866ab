use async_trait::async_trait;
use payment_gateway_api::{
    decide_settlement, EntropyRandom, PaymentRequest, PaymentResponse, RandomSource,
    SettlementError, SettlementProvider,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Decides settlement in process with the approve/reject/review policy.
pub struct LocalSimulatedProvider {
    random: Arc<dyn RandomSource>,
}

impl LocalSimulatedProvider {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }
}

impl Default for LocalSimulatedProvider {
    fn default() -> Self {
        Self::new(Arc::new(EntropyRandom))
    }
}

#[async_trait]
impl SettlementProvider for LocalSimulatedProvider {
    async fn create_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentResponse, SettlementError> {
        if request.amount <= Decimal::ZERO {
            return Err(SettlementError::InvalidRequest(
                "amount must be greater than zero".to_string(),
            ));
        }

        let status = decide_settlement(request.amount, self.random.as_ref());
        tracing::debug!(amount = %request.amount, ?status, "local settlement decided");

        Ok(PaymentResponse {
            id: Uuid::new_v4().to_string(),
            status,
            redirect_url: None,
            document_url: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use payment_gateway_api::{
        CustomerInfo, FixedRandom, PaymentMethod, SequenceRandom, SettlementOutcome,
    };
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn request(amount: Decimal) -> PaymentRequest {
        PaymentRequest {
            amount,
            currency: "BRL".to_string(),
            description: "test".to_string(),
            method: PaymentMethod::Card,
            customer: CustomerInfo {
                name: String::new(),
                email: String::new(),
                tax_id: String::new(),
                payer: None,
            },
            metadata: HashMap::new(),
            reference: None,
            issue_date: Utc::now().date_naive(),
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_decisions_follow_the_draw() {
        let provider = LocalSimulatedProvider::new(Arc::new(SequenceRandom::new([0.5, 0.9])));

        let approved = provider.create_payment(request(dec!(500))).await.unwrap();
        assert_eq!(approved.status, SettlementOutcome::Approved);

        let rejected = provider.create_payment(request(dec!(500))).await.unwrap();
        assert_eq!(rejected.status, SettlementOutcome::Rejected);
        assert_ne!(approved.id, rejected.id);
    }

    #[tokio::test]
    async fn test_large_amount_stays_pending() {
        let provider = LocalSimulatedProvider::new(Arc::new(FixedRandom(0.0)));
        let response = provider.create_payment(request(dec!(20000))).await.unwrap();
        assert_eq!(response.status, SettlementOutcome::Pending);
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_invalid_request() {
        let provider = LocalSimulatedProvider::new(Arc::new(FixedRandom(0.1)));
        for amount in [dec!(0), dec!(-1)] {
            let result = provider.create_payment(request(amount)).await;
            assert!(matches!(result, Err(SettlementError::InvalidRequest(_))));
        }
    }
}
