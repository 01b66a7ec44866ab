use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::random::RandomSource;
use crate::error::GatewayError;
use crate::payment::policy::{decide_settlement, SettlementOutcome};

/// Only the trailing digits of a card ever leave the constructor.
pub const CARD_DIGITS_KEPT: usize = 4;

/// Amounts are whole cents, matching `NUMERIC(15, 2)` and the bank's `%.2f`.
pub const AMOUNT_SCALE: u32 = 2;

pub type CardLastDigits = HeaplessString<CARD_DIGITS_KEPT>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Approved,
    Rejected,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Approved => "approved",
            InvoiceStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvoiceStatus::Pending)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "approved" => Ok(InvoiceStatus::Approved),
            "rejected" => Ok(InvoiceStatus::Rejected),
            _ => Err(GatewayError::Validation(format!("Invalid InvoiceStatus: {s}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Boleto,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Boleto => "boleto",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "boleto" => Ok(PaymentMethod::Boleto),
            _ => Err(GatewayError::Validation(format!("Invalid PaymentMethod: {s}"))),
        }
    }
}

/// Card data as presented by the payer. Never persisted.
#[derive(Clone, Default)]
pub struct CreditCard {
    pub number: String,
    pub cvv: String,
    pub expiry_month: u32,
    pub expiry_year: u32,
    pub cardholder_name: String,
}

impl CreditCard {
    pub fn last_digits(&self) -> Result<CardLastDigits, GatewayError> {
        if !self.number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GatewayError::Validation(
                "card number must contain only digits".to_string(),
            ));
        }
        if self.number.len() < CARD_DIGITS_KEPT {
            return Err(GatewayError::Validation(format!(
                "card number must have at least {CARD_DIGITS_KEPT} digits"
            )));
        }
        let tail = &self.number[self.number.len() - CARD_DIGITS_KEPT..];
        CardLastDigits::try_from(tail)
            .map_err(|_| GatewayError::Validation("card number must contain only digits".to_string()))
    }
}

impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let masked = self
            .last_digits()
            .map(|d| format!("****{d}"))
            .unwrap_or_else(|_| "****".to_string());
        f.debug_struct("CreditCard")
            .field("number", &masked)
            .field("cvv", &"***")
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("cardholder_name", &self.cardholder_name)
            .finish()
    }
}

/// Payer of a bank slip. Created with its invoice and never mutated on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payer {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Construction parameters for [`Invoice::new`].
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub account_id: Uuid,
    pub amount: Decimal,
    pub description: String,
    pub payment_type: PaymentMethod,
    pub card: Option<CreditCard>,
    pub due_date: Option<NaiveDate>,
    pub reference: Option<String>,
    pub payer: Option<Payer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub description: String,
    pub payment_type: PaymentMethod,
    pub card_last_digits: CardLastDigits,
    pub reference: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub payer: Option<Payer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Checks that `amount` is positive and has no fraction of a cent.
pub fn validate_amount(amount: Decimal) -> Result<(), GatewayError> {
    if amount <= Decimal::ZERO {
        return Err(GatewayError::InvalidAmount);
    }
    validate_cents(amount)
}

/// Checks that `amount` has at most [`AMOUNT_SCALE`] decimal places.
pub fn validate_cents(amount: Decimal) -> Result<(), GatewayError> {
    if amount.normalize().scale() > AMOUNT_SCALE {
        return Err(GatewayError::Validation(format!(
            "amount {amount} has more than {AMOUNT_SCALE} decimal places"
        )));
    }
    Ok(())
}

impl Invoice {
    pub fn new(params: NewInvoice) -> Result<Self, GatewayError> {
        validate_amount(params.amount)?;

        let card_last_digits = match (&params.card, params.payment_type) {
            (Some(card), _) => card.last_digits()?,
            (None, PaymentMethod::Card) => {
                return Err(GatewayError::Validation(
                    "card number is required for card payments".to_string(),
                ))
            }
            (None, PaymentMethod::Boleto) => CardLastDigits::new(),
        };

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            account_id: params.account_id,
            amount: params.amount,
            status: InvoiceStatus::Pending,
            description: params.description,
            payment_type: params.payment_type,
            card_last_digits,
            reference: params.reference,
            due_date: params.due_date,
            payer: params.payer,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Moves a pending invoice to `new_status`. Terminal invoices never move again.
    pub fn update_status(&mut self, new_status: InvoiceStatus) -> Result<(), GatewayError> {
        if self.status != InvoiceStatus::Pending {
            return Err(GatewayError::InvalidStatusTransition {
                from: self.status,
                to: new_status,
            });
        }

        self.status = new_status;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Runs the local settlement decision against this invoice.
    pub fn process(&mut self, random: &dyn RandomSource) -> Result<SettlementOutcome, GatewayError> {
        let outcome = decide_settlement(self.amount, random);
        if let Some(status) = outcome.terminal_status() {
            self.update_status(status)?;
        }
        Ok(outcome)
    }
}
