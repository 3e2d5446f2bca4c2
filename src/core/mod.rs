pub mod amount;
pub mod error;
pub mod rounding;

pub use error::{AppError, Result};
pub use rounding::RoundingPolicy;
