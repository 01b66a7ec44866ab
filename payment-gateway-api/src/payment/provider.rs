use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::SettlementError;
use super::policy::SettlementOutcome;
use crate::domain::invoice::{Invoice, Payer, PaymentMethod};

pub const DEFAULT_CURRENCY: &str = "BRL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub tax_id: String,
    /// Full contact and address block, required by bank slip issuance.
    pub payer: Option<Payer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub method: PaymentMethod,
    pub customer: CustomerInfo,
    pub metadata: HashMap<String, String>,
    /// Idempotency and reconciliation key on the provider side.
    pub reference: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
}

impl PaymentRequest {
    pub fn for_invoice(invoice: &Invoice) -> Self {
        let customer = match &invoice.payer {
            Some(payer) => CustomerInfo {
                name: payer.name.clone(),
                email: payer.email.clone(),
                tax_id: payer.tax_id.clone(),
                payer: Some(payer.clone()),
            },
            None => CustomerInfo {
                name: String::new(),
                email: String::new(),
                tax_id: String::new(),
                payer: None,
            },
        };

        let mut metadata = HashMap::new();
        metadata.insert("invoice_id".to_string(), invoice.id.to_string());
        metadata.insert("account_id".to_string(), invoice.account_id.to_string());

        Self {
            amount: invoice.amount,
            currency: DEFAULT_CURRENCY.to_string(),
            description: invoice.description.clone(),
            method: invoice.payment_type,
            customer,
            metadata,
            reference: invoice.reference.clone(),
            issue_date: invoice.created_at.date_naive(),
            due_date: invoice.due_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    /// Provider-assigned identifier.
    pub id: String,
    pub status: SettlementOutcome,
    pub redirect_url: Option<String>,
    /// Link to a printable document such as the bank slip PDF.
    pub document_url: Option<String>,
}

/// Capability that turns a payment request into a settlement outcome.
///
/// Either a response carrying an id comes back, or an error does and the caller
/// must not mutate the invoice.
#[async_trait]
pub trait SettlementProvider: Send + Sync {
    async fn create_payment(
        &self,
        request: PaymentRequest,
    ) -> Result<PaymentResponse, SettlementError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::invoice::NewInvoice;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_request_from_boleto_invoice() {
        let now = Utc::now();
        let payer = Payer {
            id: Uuid::new_v4(),
            name: "Joao Souza".to_string(),
            tax_id: "12345678909".to_string(),
            email: "joao@example.com".to_string(),
            phone: "11999999999".to_string(),
            address: "Rua A".to_string(),
            number: "10".to_string(),
            district: "Centro".to_string(),
            city: "Sao Paulo".to_string(),
            state: "SP".to_string(),
            zip_code: "01001000".to_string(),
            created_at: now,
            updated_at: now,
        };
        let invoice = Invoice::new(NewInvoice {
            account_id: Uuid::new_v4(),
            amount: dec!(99.9),
            description: "Subscription".to_string(),
            payment_type: PaymentMethod::Boleto,
            card: None,
            due_date: NaiveDate::from_ymd_opt(2025, 1, 31),
            reference: Some("INV-0001".to_string()),
            payer: Some(payer.clone()),
        })
        .unwrap();

        let request = PaymentRequest::for_invoice(&invoice);

        assert_eq!(request.amount, dec!(99.9));
        assert_eq!(request.currency, "BRL");
        assert_eq!(request.method, PaymentMethod::Boleto);
        assert_eq!(request.customer.tax_id, "12345678909");
        assert_eq!(request.customer.payer, Some(payer));
        assert_eq!(request.reference.as_deref(), Some("INV-0001"));
        assert_eq!(request.issue_date, invoice.created_at.date_naive());
        assert_eq!(request.metadata["invoice_id"], invoice.id.to_string());
    }
}
