pub mod engine;
pub mod parse;

pub use crate::domain::model::{Calculation, Operand, Product};
pub use crate::domain::ports::OperandSource;
pub use crate::utils::error::Result;
