pub mod control;
pub mod errors;

pub use control::*;
pub use errors::*;
