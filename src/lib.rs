#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::engine::{product, ProductEngine};
pub use crate::domain::model::{Calculation, Operand, Product};
pub use crate::utils::error::{ProductError, Result};
