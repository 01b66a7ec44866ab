use crate::utils::{get_heapless_string, get_parsed, TryFromRow};
use payment_gateway_api::{Invoice, Payer};
use sqlx::{postgres::PgRow, PgPool, Row};
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

/// Invoice columns joined with the optional payer, payer columns prefixed
/// with `payer_`.
pub(super) const SELECT_INVOICE_WITH_PAYER: &str = r#"
    SELECT i.id, i.account_id, i.amount, i.status, i.description, i.payment_type,
           i.card_last_digits, i.due_date, i.reference,
           i.created_at, i.updated_at, i.deleted_at,
           p.id AS payer_id, p.name AS payer_name, p.tax_id AS payer_tax_id,
           p.email AS payer_email, p.phone AS payer_phone, p.address AS payer_address,
           p.number AS payer_number, p.district AS payer_district, p.city AS payer_city,
           p.state AS payer_state, p.zip_code AS payer_zip_code,
           p.created_at AS payer_created_at, p.updated_at AS payer_updated_at
    FROM invoices i
    LEFT JOIN payers p ON p.invoice_id = i.id
"#;

pub struct InvoiceRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl InvoiceRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn payer_from_row(row: &PgRow) -> Result<Option<Payer>, Box<dyn Error + Send + Sync>> {
    let payer_id: Option<Uuid> = row.try_get("payer_id")?;
    let Some(id) = payer_id else {
        return Ok(None);
    };

    Ok(Some(Payer {
        id,
        name: row.try_get("payer_name")?,
        tax_id: row.try_get("payer_tax_id")?,
        email: row.try_get("payer_email")?,
        phone: row.try_get("payer_phone")?,
        address: row.try_get("payer_address")?,
        number: row.try_get("payer_number")?,
        district: row.try_get("payer_district")?,
        city: row.try_get("payer_city")?,
        state: row.try_get("payer_state")?,
        zip_code: row.try_get("payer_zip_code")?,
        created_at: row.try_get("payer_created_at")?,
        updated_at: row.try_get("payer_updated_at")?,
    }))
}

impl TryFromRow<PgRow> for Invoice {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(Invoice {
            id: row.try_get("id")?,
            account_id: row.try_get("account_id")?,
            amount: row.try_get("amount")?,
            status: get_parsed(row, "status")?,
            description: row.try_get("description")?,
            payment_type: get_parsed(row, "payment_type")?,
            card_last_digits: get_heapless_string(row, "card_last_digits")?,
            reference: row.try_get("reference")?,
            due_date: row.try_get("due_date")?,
            payer: payer_from_row(row)?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}
