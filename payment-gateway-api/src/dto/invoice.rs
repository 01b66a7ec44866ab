use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::invoice::{
    validate_amount, CreditCard, Invoice, InvoiceStatus, NewInvoice, Payer, PaymentMethod,
};
use crate::error::GatewayError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayerInput {
    pub name: String,
    pub tax_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Body of an invoice creation request. The API key comes from the request
/// headers, not the body.
#[derive(Clone, Default, Deserialize)]
pub struct CreateInvoiceInput {
    #[serde(skip)]
    pub api_key: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
    pub payment_type: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub cvv: String,
    #[serde(default)]
    pub expiry_month: u32,
    #[serde(default)]
    pub expiry_year: u32,
    #[serde(default)]
    pub cardholder_name: String,
    pub due_date: Option<NaiveDate>,
    pub reference: Option<String>,
    pub payer: Option<PayerInput>,
}

impl fmt::Debug for CreateInvoiceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateInvoiceInput")
            .field("amount", &self.amount)
            .field("description", &self.description)
            .field("payment_type", &self.payment_type)
            .field("card", &self.card())
            .field("due_date", &self.due_date)
            .field("reference", &self.reference)
            .field("payer", &self.payer)
            .finish_non_exhaustive()
    }
}

impl CreateInvoiceInput {
    fn card(&self) -> Option<CreditCard> {
        if self.card_number.is_empty() {
            return None;
        }
        Some(CreditCard {
            number: self.card_number.clone(),
            cvv: self.cvv.clone(),
            expiry_month: self.expiry_month,
            expiry_year: self.expiry_year,
            cardholder_name: self.cardholder_name.clone(),
        })
    }

    pub fn to_invoice(&self, account_id: Uuid) -> Result<Invoice, GatewayError> {
        validate_amount(self.amount)?;

        let payment_type: PaymentMethod = self.payment_type.parse()?;
        let now = Utc::now();
        let payer = self.payer.as_ref().map(|p| Payer {
            id: Uuid::new_v4(),
            name: p.name.clone(),
            tax_id: p.tax_id.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            address: p.address.clone(),
            number: p.number.clone(),
            district: p.district.clone(),
            city: p.city.clone(),
            state: p.state.clone(),
            zip_code: p.zip_code.clone(),
            created_at: now,
            updated_at: now,
        });

        Invoice::new(NewInvoice {
            account_id,
            amount: self.amount,
            description: self.description.clone(),
            payment_type,
            card: self.card(),
            due_date: self.due_date,
            reference: self.reference.clone(),
            payer,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayerOutput {
    pub name: String,
    pub tax_id: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<&Payer> for PayerOutput {
    fn from(payer: &Payer) -> Self {
        Self {
            name: payer.name.clone(),
            tax_id: payer.tax_id.clone(),
            email: payer.email.clone(),
            phone: payer.phone.clone(),
            address: payer.address.clone(),
            number: payer.number.clone(),
            district: payer.district.clone(),
            city: payer.city.clone(),
            state: payer.state.clone(),
            zip_code: payer.zip_code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceOutput {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub description: String,
    pub payment_type: PaymentMethod,
    pub card_last_digits: String,
    pub reference: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<PayerOutput>,
}

impl From<&Invoice> for InvoiceOutput {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            account_id: invoice.account_id,
            amount: invoice.amount,
            status: invoice.status,
            description: invoice.description.clone(),
            payment_type: invoice.payment_type,
            card_last_digits: invoice.card_last_digits.to_string(),
            reference: invoice.reference.clone(),
            due_date: invoice.due_date,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
            deleted_at: invoice.deleted_at,
            payer: invoice.payer.as_ref().map(PayerOutput::from),
        }
    }
}
