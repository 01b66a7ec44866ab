use payment_gateway_api::{RandomSource, SettlementProvider};
use payment_gateway_db::in_memory::{InMemoryAccountRepository, InMemoryInvoiceRepository};
use payment_gateway_db::repository::{AccountRepository, InvoiceRepository};
use payment_gateway_postgres::{migrate, PostgresRepositories};
use payment_gateway_settlement::{
    LocalSimulatedProvider, RemoteBankProvider, RemoteDelegatingInvoiceRepository, Settlement,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

use crate::account_service::AccountService;
use crate::config::{GatewayConfig, SettlementMode};
use crate::invoice_service::{InvoiceBackend, InvoiceService};

/// The account and invoice services, wired to their storage and settlement
/// backend.
pub struct GatewayServices {
    pub accounts: AccountService,
    pub invoices: InvoiceService,
}

impl GatewayServices {
    /// Connects to PostgreSQL, applies migrations when
    /// `config.database.run_migrations` is set, and selects the settlement
    /// backend named by `config.settlement_mode`.
    pub async fn connect(config: &GatewayConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect_with(config.database.connect_options())
            .await?;
        tracing::info!(
            host = %config.database.host,
            database = %config.database.name,
            "connected to database"
        );

        if config.database.run_migrations {
            migrate(&pool).await?;
        }

        let repos = PostgresRepositories::new(Arc::new(pool)).create_all_repositories();

        let settlement = match config.settlement_mode {
            SettlementMode::Local => Settlement::Local(LocalSimulatedProvider::default()),
            SettlementMode::Remote => {
                Settlement::RemoteBank(RemoteBankProvider::new(config.bank.provider_config()))
            }
        };

        Ok(Self::from_parts(
            repos.account_repository,
            repos.invoice_repository,
            settlement,
        ))
    }

    /// Wires the services over in-process storage with local settlement.
    pub fn in_memory(random: Arc<dyn RandomSource>) -> Self {
        Self::from_parts(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemoryInvoiceRepository::new()),
            Settlement::Local(LocalSimulatedProvider::new(random)),
        )
    }

    /// Local settlement keeps invoices in `invoices`; remote settlement routes
    /// invoice creation to the bank and leaves `invoices` unused.
    pub fn from_parts(
        accounts: Arc<dyn AccountRepository>,
        invoices: Arc<dyn InvoiceRepository>,
        settlement: Settlement,
    ) -> Self {
        tracing::info!(settlement = settlement.name(), "settlement backend selected");

        let backend = match settlement {
            Settlement::Local(provider) => InvoiceBackend::Local {
                repository: invoices,
                provider: Arc::new(provider) as Arc<dyn SettlementProvider>,
            },
            remote @ Settlement::RemoteBank(_) => InvoiceBackend::Remote {
                repository: Arc::new(RemoteDelegatingInvoiceRepository::new(Arc::new(remote))),
            },
        };

        Self {
            accounts: AccountService::new(accounts.clone()),
            invoices: InvoiceService::new(accounts, backend),
        }
    }
}
