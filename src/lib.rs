pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::AppConfig;
pub use crate::core::greeter::{greet, greeting, Greeter};
pub use domain::model::Name;
pub use utils::error::{GreetError, Result};
