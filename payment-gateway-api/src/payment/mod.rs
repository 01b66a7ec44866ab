pub mod error;
pub mod policy;
pub mod provider;

pub use error::*;
pub use policy::*;
pub use provider::*;
