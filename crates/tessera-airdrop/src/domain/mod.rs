pub mod distributor;
pub mod errors;

pub use distributor::*;
pub use errors::*;
