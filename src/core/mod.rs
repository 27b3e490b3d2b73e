pub mod dispatcher;
pub mod parser;
pub mod repl;

pub use crate::domain::model::{
    ApiCommand, ApiRequest, ApiResponse, Command, OutputMode, Outcome, Verb,
};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
