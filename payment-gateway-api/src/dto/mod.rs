pub mod account;
pub mod invoice;

pub use account::*;
pub use invoice::*;
