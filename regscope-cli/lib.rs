pub mod config;
pub mod error;
pub mod report;

pub use config::{DecodeConfig, OutputFormat};
pub use error::{RegscopeError, Result};
pub use report::{layout_table, register_list, RegisterReport};
