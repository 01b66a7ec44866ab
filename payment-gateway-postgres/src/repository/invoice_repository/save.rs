use async_trait::async_trait;
use payment_gateway_api::Invoice;
use payment_gateway_db::repository::Save;
use payment_gateway_db::RepositoryError;

use super::repo_impl::InvoiceRepositoryImpl;

impl InvoiceRepositoryImpl {
    /// Writes the invoice and its payer in one transaction.
    pub(super) async fn save_impl(
        repo: &InvoiceRepositoryImpl,
        item: &Invoice,
    ) -> Result<(), RepositoryError> {
        let mut tx = repo.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO invoices (id, account_id, amount, status, description, payment_type,
                                  card_last_digits, due_date, reference, created_at, updated_at, deleted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(item.id)
        .bind(item.account_id)
        .bind(item.amount)
        .bind(item.status.as_str())
        .bind(&item.description)
        .bind(item.payment_type.as_str())
        .bind(item.card_last_digits.as_str())
        .bind(item.due_date)
        .bind(item.reference.as_deref())
        .bind(item.created_at)
        .bind(item.updated_at)
        .bind(item.deleted_at)
        .execute(&mut *tx)
        .await?;

        if let Some(payer) = &item.payer {
            sqlx::query(
                r#"
                INSERT INTO payers (id, invoice_id, name, tax_id, email, phone, address, number,
                                    district, city, state, zip_code, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
                "#,
            )
            .bind(payer.id)
            .bind(item.id)
            .bind(&payer.name)
            .bind(&payer.tax_id)
            .bind(&payer.email)
            .bind(&payer.phone)
            .bind(&payer.address)
            .bind(&payer.number)
            .bind(&payer.district)
            .bind(&payer.city)
            .bind(&payer.state)
            .bind(&payer.zip_code)
            .bind(payer.created_at)
            .bind(payer.updated_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl Save<Invoice> for InvoiceRepositoryImpl {
    async fn save(&self, item: &Invoice) -> Result<(), RepositoryError> {
        Self::save_impl(self, item).await
    }
}
