use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::account_repository::AccountRepositoryImpl;
use crate::repository::invoice_repository::InvoiceRepositoryImpl;

/// Builds the PostgreSQL repositories over one shared pool.
///
/// Each repository opens its own transaction where a write spans several
/// statements, so the repositories can be shared freely across tasks.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn build_account_repo(&self) -> Arc<AccountRepositoryImpl> {
        Arc::new(AccountRepositoryImpl::new(self.pool.clone()))
    }

    pub fn build_invoice_repo(&self) -> Arc<InvoiceRepositoryImpl> {
        Arc::new(InvoiceRepositoryImpl::new(self.pool.clone()))
    }

    /// Create all repositories at once
    pub fn create_all_repositories(&self) -> GatewayRepositories {
        GatewayRepositories {
            account_repository: self.build_account_repo(),
            invoice_repository: self.build_invoice_repo(),
        }
    }
}

pub struct GatewayRepositories {
    pub account_repository: Arc<AccountRepositoryImpl>,
    pub invoice_repository: Arc<InvoiceRepositoryImpl>,
}
