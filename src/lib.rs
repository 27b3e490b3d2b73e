pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::ReqwestTransport;
pub use config::CliConfig;
pub use core::{dispatcher::Dispatcher, parser::parse_command, repl::Repl};
pub use utils::console::Console;
pub use utils::error::{ClientError, Result};
