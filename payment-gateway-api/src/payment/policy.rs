use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::invoice::InvoiceStatus;
use crate::domain::random::RandomSource;

/// Amounts above this are never auto-decided.
pub const MANUAL_REVIEW_THRESHOLD: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Draws at or below this value approve the payment.
pub const APPROVAL_RATE: f64 = 0.7;

/// Result of one settlement attempt. Transient, never persisted as such.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementOutcome {
    Approved,
    Rejected,
    /// Not decided: manual review, or awaiting payment of a bank slip.
    Pending,
}

impl SettlementOutcome {
    pub fn terminal_status(self) -> Option<InvoiceStatus> {
        match self {
            SettlementOutcome::Approved => Some(InvoiceStatus::Approved),
            SettlementOutcome::Rejected => Some(InvoiceStatus::Rejected),
            SettlementOutcome::Pending => None,
        }
    }
}

pub fn decide_settlement(amount: Decimal, random: &dyn RandomSource) -> SettlementOutcome {
    if amount > MANUAL_REVIEW_THRESHOLD {
        return SettlementOutcome::Pending;
    }

    if random.next_f64() <= APPROVAL_RATE {
        SettlementOutcome::Approved
    } else {
        SettlementOutcome::Rejected
    }
}
