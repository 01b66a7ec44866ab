//! Settlement backends for invoices.
//!
//! Two providers satisfy [`SettlementProvider`](payment_gateway_api::SettlementProvider):
//! [`LocalSimulatedProvider`] decides in process, [`RemoteBankProvider`]
//! issues a bank slip through the bank's OAuth2 + mTLS API. [`Settlement`]
//! is the closed set the service layer selects from at startup.

pub mod delegating_repository;
pub mod local;
pub mod remote;
pub mod settlement;

pub use delegating_repository::RemoteDelegatingInvoiceRepository;
pub use local::LocalSimulatedProvider;
pub use remote::{BankEnvironment, RemoteBankConfig, RemoteBankProvider};
pub use settlement::Settlement;
