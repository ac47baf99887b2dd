pub mod factorial;
pub mod multiply;
pub mod prime;

pub use crate::domain::model::{FactorialResult, PrimalityResult, Strategy};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
