pub mod engine;
pub mod errors;

pub use engine::*;
pub use errors::*;
