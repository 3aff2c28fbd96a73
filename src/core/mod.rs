pub mod config;
pub mod counter;
pub mod error;

pub use config::ToolkitConfig;
pub use counter::Counter;
pub use error::{BrambleError, Result};
