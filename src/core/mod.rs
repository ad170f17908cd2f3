pub mod engine;
pub mod math;
pub mod program;

pub use crate::domain::model::{Greeting, RunReport};
pub use crate::domain::ports::{ConfigProvider, OutputSink, Program};
pub use crate::utils::error::Result;
