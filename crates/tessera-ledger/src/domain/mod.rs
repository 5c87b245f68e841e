pub mod accounts;
pub mod entities;
pub mod errors;

pub use accounts::*;
pub use entities::*;
pub use errors::*;
