pub mod account;
pub mod invoice;
pub mod random;

pub use account::*;
pub use invoice::*;
pub use random::*;
