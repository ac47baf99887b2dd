pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{lambda::LambdaConfig, toml_config::TomlConfig, Settings};

pub use app::{handle_event, ApiResponse};
// `self::` keeps the local module apart from the built-in `core` crate.
pub use self::core::factorial::factorial;
pub use self::core::multiply::{multiply, DigitSequence};
pub use self::core::prime::is_prime;
pub use domain::model::{CalcFunction, FactorialResult, PrimalityResult, Strategy};
pub use domain::ports::ConfigProvider;
pub use utils::error::{CalcError, Result};
