pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::StdoutSink, CliConfig};
pub use crate::core::{engine::GreeterEngine, program::SimpleProgram};
pub use crate::utils::error::{GreetError, Result};
