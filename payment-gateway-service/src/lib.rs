//! Account and invoice services of the payment gateway, plus the startup
//! wiring that turns a [`GatewayConfig`](config::GatewayConfig) into ready
//! services.

pub mod account_service;
pub mod app;
pub mod config;
pub mod invoice_service;
pub mod telemetry;

pub use account_service::AccountService;
pub use app::GatewayServices;
pub use config::{BankConfig, ConfigError, DatabaseConfig, GatewayConfig, SettlementMode};
pub use invoice_service::{InvoiceBackend, InvoiceService};
