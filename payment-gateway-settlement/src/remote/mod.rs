//! Bank slip issuance against Banco Inter's corporate API.

pub mod config;
pub mod provider;
pub mod wire;

pub use config::{BankEnvironment, RemoteBankConfig};
pub use provider::RemoteBankProvider;
