pub mod domain;
pub mod dto;
pub mod error;
pub mod payment;

pub use domain::*;
pub use dto::*;
pub use error::*;
pub use payment::*;
